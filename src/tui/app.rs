//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use tracing::{error, warn};

use crate::display::MoneyFormat;
use crate::error::PoupeError;
use crate::models::{Month, Transaction, TransactionId};
use crate::reports::Totals;
use crate::services::LedgerService;
use crate::storage::KeyValueStore;

use super::views::add::AddFormState;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Add,
    List,
    Charts,
}

impl ActiveView {
    pub const ALL: [ActiveView; 3] = [Self::Add, Self::List, Self::Charts];

    pub fn title(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::List => "List",
            Self::Charts => "Charts",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Add => 0,
            Self::List => 1,
            Self::Charts => 2,
        }
    }

    /// Following view, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Add => Self::List,
            Self::List => Self::Charts,
            Self::Charts => Self::Add,
        }
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Keys go to the add form
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    ConfirmDelete(TransactionId),
}

/// Message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// Main application state
pub struct App<S> {
    /// Ledger access; every mutation is persisted immediately
    pub service: LedgerService<S>,

    /// How amounts are rendered
    pub money: MoneyFormat,

    pub should_quit: bool,

    pub active_view: ActiveView,

    pub input_mode: InputMode,

    pub active_dialog: ActiveDialog,

    /// Month shown by every view
    pub selected_month: Month,

    /// Selected row in the list view
    pub selected_index: usize,

    pub form: AddFormState,

    pub status_message: Option<StatusMessage>,
}

impl<S: KeyValueStore> App<S> {
    /// Create the app on the current calendar month with the add form open
    pub fn new(service: LedgerService<S>, money: MoneyFormat) -> Self {
        Self {
            service,
            money,
            should_quit: false,
            active_view: ActiveView::default(),
            input_mode: InputMode::Editing,
            active_dialog: ActiveDialog::default(),
            selected_month: Month::current(),
            selected_index: 0,
            form: AddFormState::new(),
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(StatusMessage::Info(message.into()));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(StatusMessage::Error(message.into()));
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.input_mode = if view == ActiveView::Add {
            InputMode::Editing
        } else {
            InputMode::Normal
        };
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn select_month(&mut self, month: Month) {
        self.selected_month = month;
        self.selected_index = 0;
    }

    pub fn next_month(&mut self) {
        self.select_month(self.selected_month.next());
    }

    pub fn prev_month(&mut self) {
        self.select_month(self.selected_month.prev());
    }

    /// Transactions of the selected month, in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        self.service.month(self.selected_month)
    }

    pub fn selected_transaction(&self) -> Option<&Transaction> {
        self.transactions().get(self.selected_index)
    }

    /// Totals of the selected month
    pub fn totals(&self) -> Totals {
        Totals::from_transactions(self.transactions())
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.transactions().len() {
            self.selected_index += 1;
        }
    }

    /// Validate and save the add form
    ///
    /// On success the form is cleared, the list view becomes active and the
    /// new transaction is selected. The same happens when only the audit
    /// entry failed, with the error in the status bar. On any other failure
    /// the form is kept and the message is shown in the status bar.
    pub fn submit_form(&mut self) {
        let input = self.form.to_input();
        match self.service.add_transaction(self.selected_month, input) {
            Ok(txn) => {
                self.show_added();
                self.set_status(format!(
                    "Added {} '{}' ({})",
                    txn.kind.to_string().to_lowercase(),
                    txn.name,
                    self.money.format(txn.value)
                ));
            }
            Err(PoupeError::Validation(message)) => self.set_error(message),
            Err(e @ PoupeError::Audit(_)) => {
                warn!(error = %e, "transaction saved without audit entry");
                self.show_added();
                self.set_error(format!("Transaction saved, but {}", e));
            }
            Err(e) => {
                error!(error = %e, "failed to add transaction");
                self.set_error(e.to_string());
            }
        }
    }

    fn show_added(&mut self) {
        self.form.clear();
        self.switch_view(ActiveView::List);
        self.selected_index = self.transactions().len().saturating_sub(1);
    }

    /// Ask for confirmation before deleting the selected transaction
    pub fn request_delete(&mut self) {
        match self.selected_transaction() {
            Some(txn) => {
                let id = txn.id;
                self.open_dialog(ActiveDialog::ConfirmDelete(id));
            }
            None => self.set_error("No transaction selected"),
        }
    }

    /// Delete the transaction awaiting confirmation
    pub fn confirm_delete(&mut self) {
        let ActiveDialog::ConfirmDelete(id) = self.active_dialog else {
            return;
        };
        self.close_dialog();

        match self.service.delete_transaction(self.selected_month, id) {
            Ok(Some(txn)) => self.set_status(format!("Deleted '{}'", txn.name)),
            Ok(None) => self.set_error(format!("Transaction {} not found", id)),
            Err(e @ PoupeError::Audit(_)) => {
                warn!(error = %e, "transaction deleted without audit entry");
                self.set_error(format!("Transaction deleted, but {}", e));
            }
            Err(e) => {
                error!(error = %e, "failed to delete transaction");
                self.set_error(e.to_string());
            }
        }

        let remaining = self.transactions().len();
        if self.selected_index >= remaining {
            self.selected_index = remaining.saturating_sub(1);
        }
    }

    /// Confirmation prompt for the pending delete, if any
    pub fn confirm_message(&self) -> Option<String> {
        let ActiveDialog::ConfirmDelete(id) = self.active_dialog else {
            return None;
        };
        let name = self
            .service
            .ledger()
            .get(self.selected_month, id)
            .map(|t| t.name.as_str())
            .unwrap_or("this transaction");
        Some(format!("Delete '{}'?", name))
    }
}
