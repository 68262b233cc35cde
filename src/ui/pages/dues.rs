//! Due ledger page rendering: add-to-due, view-due, and per-customer pages

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::store::customers::{Customer, LedgerSummary};
use crate::store::inventory::Product;
use crate::ui::form::{field_line, Form};
use crate::ui::pages::products::render_product_list;
use crate::ui::pages::{fmt_rupees, list_window, pane_block};
use crate::ui::theme::DEFAULT_THEME;

/// Render the add-to-due page: customer details, product selector, quantity
/// and date.
#[allow(clippy::too_many_arguments)]
pub fn render_due_page(
    frame: &mut Frame,
    area: Rect,
    form: &Form,
    focused_field: Option<usize>,
    products: &[&Product],
    list_index: usize,
    list_focused: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(5),
        ])
        .split(area);

    let customer_focused = matches!(focused_field, Some(0..=1));
    let customer_lines: Vec<Line> = form.fields[..2]
        .iter()
        .enumerate()
        .map(|(i, field)| field_line(field, focused_field == Some(i)))
        .collect();
    frame.render_widget(
        Paragraph::new(customer_lines).block(pane_block("Customer", customer_focused)),
        chunks[0],
    );

    render_product_list(
        frame,
        chunks[1],
        "Product",
        products,
        Some(list_index),
        list_focused,
    );

    let details_focused = matches!(focused_field, Some(2..=3));
    let detail_lines = vec![
        field_line(&form.fields[2], focused_field == Some(2)),
        field_line(&form.fields[3], focused_field == Some(3)),
        Line::from(Span::styled(
            "Enter records the due at the product's current rate",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];
    frame.render_widget(
        Paragraph::new(detail_lines).block(pane_block("Details", details_focused)),
        chunks[2],
    );
}

fn customer_row(customer: &Customer, selected: bool) -> ListItem<'static> {
    let base = if selected {
        Style::default().bg(DEFAULT_THEME.highlight_bg)
    } else {
        Style::default()
    };
    let line = Line::from(vec![
        Span::styled(
            format!("{:<20}", customer.name),
            base.fg(DEFAULT_THEME.fg)
                .add_modifier(if selected { Modifier::BOLD } else { Modifier::empty() }),
        ),
        Span::styled(format!("{:<14}", customer.phone), base.fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("{:>10}", fmt_rupees(customer.total())),
            base.fg(DEFAULT_THEME.number),
        ),
    ]);
    ListItem::new(line)
}

/// Render the view-due page: customer search, per-customer totals, and the
/// grand total across all customers.
#[allow(clippy::too_many_arguments)]
pub fn render_view_due_page(
    frame: &mut Frame,
    area: Rect,
    form: &Form,
    focused_field: Option<usize>,
    matches: &[&Customer],
    list_index: usize,
    list_focused: bool,
    summary: &LedgerSummary,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let query = Paragraph::new(field_line(&form.fields[0], focused_field == Some(0)))
        .block(pane_block("Search Customer", focused_field == Some(0)));
    frame.render_widget(query, chunks[0]);

    let block = pane_block("Customers", list_focused);
    if matches.is_empty() {
        let paragraph = Paragraph::new("(no matching customers)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, chunks[1]);
    } else {
        let height = chunks[1].height.saturating_sub(2) as usize;
        let sel = list_index.min(matches.len() - 1);
        let (start, end) = list_window(matches.len(), sel, height);
        let items: Vec<ListItem> = matches[start..end]
            .iter()
            .enumerate()
            .map(|(offset, c)| customer_row(c, start + offset == sel))
            .collect();
        frame.render_widget(List::new(items).block(block), chunks[1]);
    }

    let summary_line = Line::from(vec![
        Span::styled(
            format!("{} customer(s)  ", summary.rows.len()),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled("Grand total: ", Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(
            fmt_rupees(summary.grand_total),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(summary_line).block(pane_block("Summary", false)),
        chunks[2],
    );
}

/// Render one customer's due entries and running total.
pub fn render_customer_page(
    frame: &mut Frame,
    area: Rect,
    customer: Option<&Customer>,
    list_index: usize,
) {
    let Some(customer) = customer else {
        let paragraph = Paragraph::new("(customer no longer exists)")
            .block(pane_block("Customer Due", false))
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let title = format!("Due for {} \u{00b7} {}", customer.name, customer.phone);
    let block = pane_block(&title, true);
    if customer.dues.is_empty() {
        let paragraph = Paragraph::new("(no dues recorded)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, chunks[0]);
    } else {
        let height = chunks[0].height.saturating_sub(2) as usize;
        let sel = list_index.min(customer.dues.len() - 1);
        let (start, end) = list_window(customer.dues.len(), sel, height);
        let items: Vec<ListItem> = customer.dues[start..end]
            .iter()
            .enumerate()
            .map(|(offset, entry)| {
                let selected = start + offset == sel;
                let base = if selected {
                    Style::default().bg(DEFAULT_THEME.highlight_bg)
                } else {
                    Style::default()
                };
                let line = Line::from(vec![
                    Span::styled(format!("{}  ", entry.date), base.fg(DEFAULT_THEME.comment)),
                    Span::styled(
                        format!("{:<24}", entry.product),
                        base.fg(DEFAULT_THEME.fg).add_modifier(if selected {
                            Modifier::BOLD
                        } else {
                            Modifier::empty()
                        }),
                    ),
                    Span::styled(
                        format!("{:>4} x {:<8}", entry.quantity, fmt_rupees(entry.rate)),
                        base.fg(DEFAULT_THEME.comment),
                    ),
                    Span::styled(
                        format!("= {:>9}", fmt_rupees(entry.subtotal())),
                        base.fg(DEFAULT_THEME.number),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();
        frame.render_widget(List::new(items).block(block), chunks[0]);
    }

    let total = Line::from(vec![
        Span::styled(" Total due: ", Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(
            fmt_rupees(customer.total()),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(total), chunks[1]);
}
