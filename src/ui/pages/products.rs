//! Product search and manage page rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::store::inventory::Product;
use crate::ui::form::{field_line, Form};
use crate::ui::pages::{fmt_rupees, list_window, pane_block};
use crate::ui::theme::DEFAULT_THEME;

pub(crate) fn product_row(product: &Product, selected: bool) -> ListItem<'static> {
    let base = if selected {
        Style::default().bg(DEFAULT_THEME.highlight_bg)
    } else {
        Style::default()
    };
    let line = Line::from(vec![
        Span::styled(
            format!("{:<24}", product.name),
            base.fg(DEFAULT_THEME.fg)
                .add_modifier(if selected { Modifier::BOLD } else { Modifier::empty() }),
        ),
        Span::styled(" stock ", base.fg(DEFAULT_THEME.comment)),
        Span::styled(format!("{:>5}", product.stock), base.fg(DEFAULT_THEME.number)),
        Span::styled("  rate ", base.fg(DEFAULT_THEME.comment)),
        Span::styled(fmt_rupees(product.rate), base.fg(DEFAULT_THEME.number)),
    ]);
    ListItem::new(line)
}

/// Render a windowed product list into `area` inside a titled block.
pub(crate) fn render_product_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    products: &[&Product],
    selected: Option<usize>,
    focused: bool,
) {
    let block = pane_block(title, focused);
    if products.is_empty() {
        let paragraph = Paragraph::new("(no products)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let height = area.height.saturating_sub(2) as usize;
    let sel = selected.map(|s| s.min(products.len() - 1));
    let (start, end) = list_window(products.len(), sel.unwrap_or(0), height);
    let items: Vec<ListItem> = products[start..end]
        .iter()
        .enumerate()
        .map(|(offset, p)| product_row(p, sel == Some(start + offset)))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

/// Render the search page: live substring filter over the inventory.
pub fn render_search_page(
    frame: &mut Frame,
    area: Rect,
    form: &Form,
    focused_field: Option<usize>,
    matches: &[&Product],
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let query = Paragraph::new(field_line(&form.fields[0], focused_field == Some(0)))
        .block(pane_block("Search Product", focused_field.is_some()));
    frame.render_widget(query, chunks[0]);

    let block = pane_block("Matches", false);
    if matches.is_empty() {
        let paragraph = Paragraph::new("(no matching products)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, chunks[1]);
    } else {
        let height = chunks[1].height.saturating_sub(2) as usize;
        let (start, end) = list_window(matches.len(), 0, height);
        let items: Vec<ListItem> = matches[start..end]
            .iter()
            .map(|p| product_row(p, false))
            .collect();
        frame.render_widget(List::new(items).block(block), chunks[1]);
    }
}

/// Render the manage page: product table, add form, and sell form.
#[allow(clippy::too_many_arguments)]
pub fn render_manage_page(
    frame: &mut Frame,
    area: Rect,
    form: &Form,
    focused_field: Option<usize>,
    products: &[&Product],
    list_index: usize,
    list_focused: bool,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_product_list(
        frame,
        columns[0],
        "Products",
        products,
        Some(list_index),
        list_focused,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(columns[1]);

    let add_focused = matches!(focused_field, Some(0..=2));
    let add_lines: Vec<Line> = form.fields[..3]
        .iter()
        .enumerate()
        .map(|(i, field)| field_line(field, focused_field == Some(i)))
        .collect();
    frame.render_widget(
        Paragraph::new(add_lines).block(pane_block("Add Product", add_focused)),
        rows[0],
    );

    let selected_name = products
        .get(list_index.min(products.len().saturating_sub(1)))
        .map_or("-".to_string(), |p| p.name.clone());
    let sell_lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{:>14}: ", "Product"),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(selected_name, Style::default().fg(DEFAULT_THEME.fg)),
        ]),
        field_line(&form.fields[3], focused_field == Some(3)),
        Line::from(""),
        Line::from(Span::styled(
            "Select the product on the left, then Enter to sell",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];
    frame.render_widget(
        Paragraph::new(sell_lines).block(pane_block("Sell", focused_field == Some(3))),
        rows[1],
    );
}
