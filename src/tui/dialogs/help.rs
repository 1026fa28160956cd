//! Help dialog
//!
//! Shows keyboard shortcuts for the active view

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render<S>(frame: &mut Frame, app: &App<S>) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_view))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(view: ActiveView) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("q", "Quit"),
        key_line("?", "Show/hide help"),
        key_line("1 2 3 / Tab", "Add, List, Charts view"),
        key_line("h/l or ←/→", "Previous/next month"),
        key_line("a", "Add a transaction"),
        Line::from(""),
    ];

    match view {
        ActiveView::Add => {
            lines.push(section("Add Form"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter", "Start editing / save"));
            lines.push(key_line("Tab/↓", "Next field"));
            lines.push(key_line("Shift+Tab/↑", "Previous field"));
            lines.push(key_line("Space", "Toggle income/expense on Type"));
            lines.push(key_line("Esc", "Stop editing"));
        }
        ActiveView::List => {
            lines.push(section("Transaction List"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k or ↓/↑", "Move selection"));
            lines.push(key_line("d/Del", "Delete selected transaction"));
        }
        ActiveView::Charts => {
            lines.push(section("Charts"));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "Yearly totals, income/expense split, top categories and insights.",
            ));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>14}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::raw(description),
    ])
}
