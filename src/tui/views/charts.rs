//! Charts view
//!
//! Yearly line chart, income/expense distribution, top categories and the
//! month insights.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, Gauge, GraphType,
        Paragraph, Wrap,
    },
    Frame,
};

use crate::display::report::{format_percentage, truncate};
use crate::models::{Money, TransactionKind};
use crate::reports::{CategoryBreakdown, Distribution, MonthInsights, YearlySeries};
use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::ChartsLayout;

/// Render the charts view
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let layout = ChartsLayout::new(area);
    let ledger = app.service.ledger();

    render_yearly(frame, &YearlySeries::generate(ledger), layout.yearly);
    render_distribution(frame, app, layout.distribution);
    render_categories(
        frame,
        &CategoryBreakdown::generate(ledger, app.selected_month),
        layout.categories,
    );

    let insights = MonthInsights::generate(ledger, app.selected_month);
    let lines: Vec<Line> = insights
        .lines(&app.money)
        .into_iter()
        .map(Line::from)
        .collect();
    let paragraph = Paragraph::new(lines)
        .block(panel(" Insights "))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, layout.insights);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn units(amount: Money) -> f64 {
    amount.as_f64()
}

fn render_yearly(frame: &mut Frame, series: &YearlySeries, area: Rect) {
    let points = |f: fn(&crate::reports::YearlyPoint) -> Money| -> Vec<(f64, f64)> {
        series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, units(f(p))))
            .collect()
    };
    let income = points(|p| p.income);
    let expense = points(|p| p.expense);
    let balance = points(|p| p.balance);

    let max = units(series.max_abs()).max(1.0);
    let min = series
        .points
        .iter()
        .map(|p| units(p.balance))
        .fold(0.0_f64, f64::min);

    let datasets = vec![
        Dataset::default()
            .name("Income")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&income),
        Dataset::default()
            .name("Expenses")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&expense),
        Dataset::default()
            .name("Balance")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&balance),
    ];

    let x_labels: Vec<Span> = series
        .points
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 2 == 0)
        .map(|(_, p)| Span::raw(p.label.clone()))
        .collect();
    let y_labels = vec![
        Span::raw(format!("{:.0}", min)),
        Span::raw(format!("{:.0}", max)),
    ];

    let chart = Chart::new(datasets)
        .block(panel(" Yearly overview "))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, 11.0])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([min, max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

fn render_distribution<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = panel(" Income vs. expenses ");
    let distribution = Distribution::from_totals(&app.totals());

    if distribution.is_empty() {
        let text = Paragraph::new("No data for this month.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    for (slice, row) in distribution.slices.iter().zip(rows.iter()) {
        let color = match slice.kind {
            TransactionKind::Income => Color::Green,
            TransactionKind::Expense => Color::Red,
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::Black))
            .ratio((slice.percentage / 100.0).clamp(0.0, 1.0))
            .label(format!(
                "{} {} ({})",
                slice.kind,
                app.money.format(slice.value),
                format_percentage(slice.percentage)
            ));
        frame.render_widget(gauge, *row);
    }
}

fn render_categories(frame: &mut Frame, breakdown: &CategoryBreakdown, area: Rect) {
    let block = panel(" Top categories ");

    if breakdown.is_empty() {
        let text = Paragraph::new("No transactions this month.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let bars: Vec<Bar> = breakdown
        .entries
        .iter()
        .map(|entry| {
            let color = match entry.kind {
                TransactionKind::Income => Color::Green,
                TransactionKind::Expense => Color::Red,
            };
            Bar::default()
                .value(entry.total.cents().max(0) as u64)
                .label(Line::from(truncate(&entry.name, 14)))
                .text_value(entry.total.to_string())
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
