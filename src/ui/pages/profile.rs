//! Profile page rendering: store title and password settings

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

/// Render the profile page.
pub fn render_profile_page(
    frame: &mut Frame,
    area: Rect,
    form: &Form,
    focused_field: Option<usize>,
    email: &str,
) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Account: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                email.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        field_line(&form.fields[0], focused_field == Some(0)),
        field_line(&form.fields[1], focused_field == Some(1)),
        Line::from(""),
        Line::from(Span::styled(
            "Enter applies the focused field",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];

    let target = centered(area, 56, lines.len() as u16 + 2);
    frame.render_widget(Paragraph::new(lines).block(pane_block("Profile", true)), target);
}
