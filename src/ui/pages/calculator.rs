//! Calculator page rendering

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::form::{field_line, Form};
use crate::ui::pages::{centered, pane_block};
use crate::ui::theme::DEFAULT_THEME;

/// Render the calculator page: expression field plus the last result.
pub fn render_calculator_page(
    frame: &mut Frame,
    area: Rect,
    form: &Form,
    focused_field: Option<usize>,
    result: Option<&str>,
) {
    let result_line = match result {
        Some(value) => Line::from(vec![
            Span::styled("= ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                value.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(
            "(no result)",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    };

    let lines = vec![
        Line::from(""),
        field_line(&form.fields[0], focused_field == Some(0)),
        Line::from(""),
        result_line,
        Line::from(""),
        Line::from(Span::styled(
            "Numbers, + - * / and parentheses only",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];

    let target = centered(area, 56, lines.len() as u16 + 2);
    frame.render_widget(Paragraph::new(lines).block(pane_block("Calculator", true)), target);
}
