//! Header and summary cards
//!
//! Month selector with view tabs, and one card per month total.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::display::report::format_percentage;
use crate::tui::app::{ActiveView, App};
use crate::tui::layout::columns;

/// Render the month selector and the view tabs
pub fn render_header<S>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .title(" Poupe ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(10)])
        .split(inner);

    let month = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:^12}", app.selected_month.name()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(month), chunks[0]);

    let titles: Vec<Line> = ActiveView::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!("{} {}", i + 1, view.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.active_view.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
    frame.render_widget(tabs, chunks[1]);
}

/// Render the summary cards of the selected month
pub fn render_cards<S: crate::storage::KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let totals = app.totals();
    let balance_color = if totals.balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let cards = [
        ("Income", app.money.format(totals.income), Color::Green),
        ("Expenses", app.money.format(totals.expenses), Color::Red),
        ("Balance", app.money.format(totals.balance), balance_color),
        (
            "Savings rate",
            format_percentage(totals.savings_rate()),
            Color::Cyan,
        ),
    ];

    for ((title, value, color), cell) in cards.into_iter().zip(columns(area, 4)) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let paragraph = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, cell);
    }
}
