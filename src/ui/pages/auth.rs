//! Front, login, and register page rendering

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::form::{field_line, Form};
use crate::ui::pages::{centered, pane_block};
use crate::ui::theme::DEFAULT_THEME;

/// Entries of the front-page menu, in selection order.
pub const FRONT_ACTIONS: [&str; 2] = ["Login", "Register"];

/// Render the landing page: banner plus the login/register choice.
pub fn render_front_page(frame: &mut Frame, area: Rect, selected: usize) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Your Store Hub",
            Style::default()
                .fg(DEFAULT_THEME.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Manage products, customers, and dues",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::from(""),
    ];
    for (i, action) in FRONT_ACTIONS.iter().enumerate() {
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

    let target = centered(area, 44, lines.len() as u16);
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, target);
}

/// Render the login form.
pub fn render_login_page(frame: &mut Frame, area: Rect, form: &Form, focused_field: Option<usize>) {
    render_auth_form(frame, area, "Login", form, focused_field, None);
}

/// Render the registration form.
pub fn render_register_page(
    frame: &mut Frame,
    area: Rect,
    form: &Form,
    focused_field: Option<usize>,
) {
    render_auth_form(
        frame,
        area,
        "Register",
        form,
        focused_field,
        Some("Password must be exactly 8 characters"),
    );
}

fn render_auth_form(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    form: &Form,
    focused_field: Option<usize>,
    hint: Option<&str>,
) {
    let mut lines = vec![Line::from("")];
    for (i, field) in form.fields.iter().enumerate() {
        lines.push(field_line(field, focused_field == Some(i)));
    }
    if let Some(hint) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let height = lines.len() as u16 + 2;
    let target = centered(area, 52, height);
    let paragraph = Paragraph::new(lines).block(pane_block(title, true));
    frame.render_widget(paragraph, target);
}
