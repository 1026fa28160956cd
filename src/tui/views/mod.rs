//! TUI Views module
//!
//! Contains the three main views (add, list, charts) as well as the header,
//! summary cards and status bar.

pub mod add;
pub mod charts;
pub mod header;
pub mod list;
pub mod status_bar;

use ratatui::Frame;

use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let layout = AppLayout::new(frame.area());

    header::render_header(frame, app, layout.header);
    header::render_cards(frame, app, layout.cards);

    match app.active_view {
        ActiveView::Add => add::render(frame, app, layout.main),
        ActiveView::List => list::render(frame, app, layout.main),
        ActiveView::Charts => charts::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::ConfirmDelete(_) => {
            if let Some(message) = app.confirm_message() {
                dialogs::confirm::render(frame, &message);
            }
        }
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::display::MoneyFormat;
    use crate::models::{Month, TransactionInput, TransactionKind};
    use crate::services::LedgerService;
    use crate::storage::{LedgerStore, MemoryStore};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App<MemoryStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let mut text = String::new();
        for row in buffer.content().chunks(width) {
            for cell in row {
                text.push_str(cell.symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app_with_data() -> App<MemoryStore> {
        let mut service = LedgerService::open(
            LedgerStore::new(MemoryStore::new(), "financialData"),
            &Settings::default(),
            None,
        );
        let jan = Month::new(0).unwrap();
        service
            .add_transaction(jan, TransactionInput::new("Salário", "1000", TransactionKind::Income))
            .unwrap();
        service
            .add_transaction(jan, TransactionInput::new("Aluguel", "300", TransactionKind::Expense))
            .unwrap();

        let mut app = App::new(service, MoneyFormat::default());
        app.select_month(jan);
        app
    }

    #[test]
    fn test_render_every_view() {
        let mut app = app_with_data();
        for view in ActiveView::ALL {
            app.switch_view(view);
            let screen = draw(&app);
            assert!(screen.contains("January"));
            assert!(screen.contains("70.0%"));
        }
    }

    #[test]
    fn test_render_list_rows() {
        let mut app = app_with_data();
        app.switch_view(ActiveView::List);
        let screen = draw(&app);
        assert!(screen.contains("Aluguel"));
        assert!(screen.contains("-R$ 300,00"));
    }

    #[test]
    fn test_render_empty_month() {
        let mut app = app_with_data();
        app.select_month(Month::new(6).unwrap());
        app.switch_view(ActiveView::List);
        assert!(draw(&app).contains("No transactions this month"));

        app.switch_view(ActiveView::Charts);
        assert!(draw(&app).contains("No data for this month"));
    }

    #[test]
    fn test_render_confirm_dialog() {
        let mut app = app_with_data();
        app.switch_view(ActiveView::List);
        app.request_delete();
        assert!(draw(&app).contains("Delete 'Salário'?"));
    }
}
