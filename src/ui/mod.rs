//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, the page state
//!   machine, and per-page submit handlers
//! - **[`form`]** — text field state and typed input parsing
//! - **[`pages`]** — stateless render functions for each page and the status bar
//! - **[`theme`]** — centralized color palette used by all pages
//!
//! The entry point for consumers is [`App`]: construct it with a [`Store`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Store`]: crate::store::Store
//! [`App::run`]: app::App::run

pub mod app;
pub mod form;
pub mod pages;
pub mod theme;

pub use app::App;
