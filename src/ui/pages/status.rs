//! Status bar rendering: outcome message on the left, key hints on the right

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::app::{Page, StatusKind, StatusLine};
use crate::ui::theme::DEFAULT_THEME;

/// Key hints for the active page, rendered on the right of the status bar.
fn key_hints(page: &Page) -> &'static str {
    match page {
        Page::Front => "up/down choose | enter open | q quit",
        Page::Home => "up/down choose | enter open | q quit",
        Page::Login | Page::Register => "tab fields | enter submit | esc back",
        Page::Search => "type to filter | esc back",
        Page::Manage => "tab focus | enter add/sell | esc back",
        Page::Due => "tab focus | enter add due | esc back",
        Page::ViewDue => "enter open customer | esc back",
        Page::Customer(_) => "d remove entry | c clear all | esc back",
        Page::Calculator => "enter evaluate | esc back",
        Page::Profile => "tab fields | enter apply | esc back",
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, status: &StatusLine, page: &Page) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let badge_bg = match status.kind {
        StatusKind::Info => DEFAULT_THEME.banner,
        StatusKind::Success => DEFAULT_THEME.success,
        StatusKind::Error => DEFAULT_THEME.error,
    };
    let badge_text = match status.kind {
        StatusKind::Info => " INFO ",
        StatusKind::Success => " OK ",
        StatusKind::Error => " ERR ",
    };

    let left_spans = vec![
        Span::styled(
            badge_text,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", status.message),
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .fg(match status.kind {
                    StatusKind::Error => DEFAULT_THEME.error,
                    _ => DEFAULT_THEME.fg,
                }),
        ),
    ];
    let left = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.highlight_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    let right = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {} ", key_hints(page)),
        Style::default()
            .bg(DEFAULT_THEME.highlight_bg)
            .fg(DEFAULT_THEME.comment),
    )]))
    .style(Style::default().bg(DEFAULT_THEME.highlight_bg))
    .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
