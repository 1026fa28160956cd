//! Transaction list view
//!
//! Shows the selected month's transactions in insertion order

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::report::truncate;
use crate::storage::KeyValueStore;
use crate::tui::app::App;

/// Render the transaction list
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .title(format!(" Transactions - {} ", app.selected_month))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let transactions = app.transactions();
    if transactions.is_empty() {
        let text = Paragraph::new("No transactions this month. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(22), // Name
        Constraint::Min(16),    // Description
        Constraint::Length(9),  // Type
        Constraint::Length(16), // Value
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Name").style(bold),
        Cell::from("Description").style(bold),
        Cell::from("Type").style(bold),
        Cell::from("Value").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            let color = if txn.is_income() {
                Color::Green
            } else {
                Color::Red
            };
            Row::new(vec![
                Cell::from(txn.date.clone()),
                Cell::from(truncate(&txn.name, 22)),
                Cell::from(txn.description.clone()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(txn.kind.to_string()),
                Cell::from(format!("{}{}", txn.kind.sign(), app.money.format(txn.value)))
                    .style(Style::default().fg(color)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index.min(transactions.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
