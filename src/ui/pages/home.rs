//! Home page: store banner and the action menu

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::pages::centered;
use crate::ui::theme::DEFAULT_THEME;

/// Entries of the home menu, in selection order. The key handler maps an
/// index in this array to its page jump; keep the two in sync.
pub const HOME_ACTIONS: [&str; 6] = [
    "Search Product",
    "Add to Due",
    "Manage Products",
    "View Customer Due",
    "Calculator",
    "Profile",
];

/// Render the home page.
pub fn render_home_page(
    frame: &mut Frame,
    area: Rect,
    store_title: &str,
    user: &str,
    selected: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    // Banner
    let banner = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            store_title.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.banner)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("logged in as {}", user),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[0]);

    // Action menu
    let mut lines = Vec::new();
    for (i, action) in HOME_ACTIONS.iter().enumerate() {
        let style = if i == selected {
            Style::default()
                .fg(DEFAULT_THEME.accent)
                .bg(DEFAULT_THEME.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        lines.push(Line::from(Span::styled(format!("  {}  ", action), style)));
    }
    let target = centered(chunks[2], 30, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}
