//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, ActiveView, App, InputMode};
use super::event::Event;
use super::views;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore>(app: &mut App<S>, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => {}
    }
}

fn handle_key_event<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    match app.input_mode {
        InputMode::Editing => views::add::handle_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

fn handle_dialog_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::ConfirmDelete(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_dialog();
                app.set_status("Delete cancelled");
            }
            _ => {}
        },
        ActiveDialog::None => {}
    }
}

fn handle_normal_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('1') => app.switch_view(ActiveView::Add),
        KeyCode::Char('2') => app.switch_view(ActiveView::List),
        KeyCode::Char('3') => app.switch_view(ActiveView::Charts),
        KeyCode::Tab => app.switch_view(app.active_view.next()),
        KeyCode::Char('a') => app.switch_view(ActiveView::Add),

        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('<') => app.prev_month(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('>') => app.next_month(),

        _ => match app.active_view {
            ActiveView::Add => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('i')) {
                    app.input_mode = InputMode::Editing;
                }
            }
            ActiveView::List => match key.code {
                KeyCode::Char('j') | KeyCode::Down => app.move_down(),
                KeyCode::Char('k') | KeyCode::Up => app.move_up(),
                KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
                _ => {}
            },
            ActiveView::Charts => {}
        },
    }
}
