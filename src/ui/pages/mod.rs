//! Page rendering modules
//!
//! One stateless render function per page, plus the shared status bar. Each
//! function takes the frame, its area, and just the state it draws; nothing
//! here mutates the store.
//!
//! - [`auth`]: front, login, and register pages
//! - [`home`]: the action menu behind the store banner
//! - [`products`]: product search and manage (add/sell) pages
//! - [`dues`]: add-to-due, view-due, and per-customer pages
//! - [`calculator`]: the constrained arithmetic calculator
//! - [`profile`]: store title and password settings
//! - [`status`]: bottom status bar with outcome message and key hints

pub mod auth;
pub mod calculator;
pub mod dues;
pub mod home;
pub mod products;
pub mod profile;
pub mod status;

pub use auth::{render_front_page, render_login_page, render_register_page};
pub use calculator::render_calculator_page;
pub use dues::{render_customer_page, render_due_page, render_view_due_page};
pub use home::{render_home_page, HOME_ACTIONS};
pub use products::{render_manage_page, render_search_page};
pub use profile::render_profile_page;
pub use status::render_status_bar;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding},
};

use crate::ui::theme::DEFAULT_THEME;

/// Bordered block with the standard focused/unfocused border treatment.
pub(crate) fn pane_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0))
}

/// Rupee formatting: whole amounts without decimals, fractions with two.
pub(crate) fn fmt_rupees(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("\u{20b9}{}", value as i64)
    } else {
        format!("\u{20b9}{:.2}", value)
    }
}

/// Visible window of a list: keeps `selected` in view within `height` rows.
pub(crate) fn list_window(len: usize, selected: usize, height: usize) -> (usize, usize) {
    let height = height.max(1);
    if len <= height {
        return (0, len);
    }
    let selected = selected.min(len - 1);
    let start = selected.saturating_sub(height - 1).min(len - height);
    (start, start + height)
}

/// A rect of at most `width` x `height`, centered in `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_rupees() {
        assert_eq!(fmt_rupees(100.0), "\u{20b9}100");
        assert_eq!(fmt_rupees(19.5), "\u{20b9}19.50");
    }

    #[test]
    fn test_list_window_keeps_selection_visible() {
        // fits entirely
        assert_eq!(list_window(3, 0, 10), (0, 3));
        // selection below the fold scrolls the window down
        assert_eq!(list_window(10, 7, 5), (3, 8));
        // selection at the top
        assert_eq!(list_window(10, 0, 5), (0, 5));
        // selection clamped to the end
        assert_eq!(list_window(10, 99, 5), (5, 10));
    }
}
