//! Status bar view
//!
//! Shows the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App, InputMode, StatusMessage};

/// Render the status bar
pub fn render<S>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let mut spans = vec![];

    match &app.status_message {
        Some(StatusMessage::Info(message)) => {
            spans.push(Span::styled(
                format!(" {}", message),
                Style::default().fg(Color::Green),
            ));
        }
        Some(StatusMessage::Error(message)) => {
            spans.push(Span::styled(
                format!(" {}", message),
                Style::default().fg(Color::Red),
            ));
        }
        None => {}
    }

    let hints = match (app.active_view, app.input_mode) {
        (ActiveView::Add, InputMode::Editing) => " Enter:Save  Tab:Next  Esc:Done ",
        (ActiveView::List, _) => " d:Delete  h/l:Month  ?:Help  q:Quit ",
        _ => " a:Add  h/l:Month  ?:Help  q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
