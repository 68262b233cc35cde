//! Text field state and form input parsing
//!
//! A [`Form`] is the editable state behind one page: an ordered set of
//! single-line [`TextField`]s. Focus lives in the page's slot ring (see
//! [`crate::ui::app`]), not here. The parse helpers turn raw field text into
//! typed values, producing the user-input class of [`StoreError`] so the
//! status line can report malformed numbers and dates uniformly.

use chrono::NaiveDate;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::store::StoreError;
use crate::ui::theme::DEFAULT_THEME;

/// One single-line editable field
#[derive(Debug, Clone)]
pub struct TextField {
    pub label: &'static str,
    pub value: String,
    pub masked: bool,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        TextField {
            label,
            value: String::new(),
            masked: false,
        }
    }

    /// A field whose content renders as bullets (passwords).
    pub fn masked(label: &'static str) -> Self {
        TextField {
            label,
            value: String::new(),
            masked: true,
        }
    }

    /// A field pre-filled with a value (dates, the store title).
    pub fn with_value(label: &'static str, value: impl Into<String>) -> Self {
        TextField {
            label,
            value: value.into(),
            masked: false,
        }
    }

    pub fn push(&mut self, ch: char) {
        self.value.push(ch);
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    fn display_value(&self) -> String {
        if self.masked {
            "\u{2022}".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// The editable fields of the current page
#[derive(Debug, Clone, Default)]
pub struct Form {
    pub fields: Vec<TextField>,
}

impl Form {
    pub fn new(fields: Vec<TextField>) -> Self {
        Form { fields }
    }

    pub fn empty() -> Self {
        Form { fields: Vec::new() }
    }

    /// Raw value of field `idx`. Panics if the page has no such field, which
    /// would be a slot-ring bug, not an input condition.
    pub fn value(&self, idx: usize) -> &str {
        &self.fields[idx].value
    }

    pub fn clear_field(&mut self, idx: usize) {
        self.fields[idx].value.clear();
    }
}

/// Render one field as a line: label, value, and a cursor when focused.
pub fn field_line(field: &TextField, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    };

    let mut spans = vec![
        Span::styled(format!("{:>14}: ", field.label), label_style),
        Span::styled(field.display_value(), Style::default().fg(DEFAULT_THEME.fg)),
    ];
    if focused {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().fg(DEFAULT_THEME.border_focused),
        ));
    }
    Line::from(spans)
}

// ===== Input parsing =====

/// Parse a required whole-number field.
pub fn parse_u32(field: &'static str, input: &str) -> Result<u32, StoreError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(StoreError::EmptyField { field });
    }
    trimmed.parse::<u32>().map_err(|_| StoreError::InvalidNumber {
        field,
        input: trimmed.to_string(),
    })
}

/// Parse a required decimal field.
pub fn parse_f64(field: &'static str, input: &str) -> Result<f64, StoreError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(StoreError::EmptyField { field });
    }
    trimmed.parse::<f64>().map_err(|_| StoreError::InvalidNumber {
        field,
        input: trimmed.to_string(),
    })
}

/// Parse a required YYYY-MM-DD date field.
pub fn parse_date(input: &str) -> Result<NaiveDate, StoreError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| StoreError::InvalidDate {
        input: trimmed.to_string(),
    })
}
