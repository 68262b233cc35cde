//! # Introduction
//!
//! khata is a single-store retail manager in the terminal: a product
//! inventory, a customer credit ("due") ledger, operator accounts, and a
//! small calculator, driven through form pages. All state is in-memory and
//! tied to one run of the process; nothing is persisted.
//!
//! ## Application pipeline
//!
//! ```text
//! Key event → Page handler → Store mutation → Status line → Re-render
//! ```
//!
//! 1. [`store`] — the application state: account directory, product
//!    inventory, and customer due ledger, aggregated in [`store::Store`].
//! 2. [`calc`] — the constrained arithmetic evaluator behind the calculator
//!    page (numbers, `+ - * /`, parentheses; nothing else parses).
//! 3. [`ui`] — ratatui-based TUI; pages are a tagged state machine with
//!    explicit transitions, not part of the stable library API.
//!
//! ## Scope
//!
//! Single operator, single session, no persistence, no concurrency. Ledger
//! operations validate their inputs and report failures on the status line;
//! none of them abort the process.

pub mod calc;
pub mod store;
pub mod ui;
