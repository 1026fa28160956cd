//! Add transaction view
//!
//! Form with name, value, description and type fields. Name and value are
//! required; the type defaults to expense.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{TransactionInput, TransactionKind};
use crate::tui::app::{App, InputMode};
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Value,
    Description,
    Kind,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Value,
            Self::Value => Self::Description,
            Self::Description => Self::Kind,
            Self::Kind => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Kind,
            Self::Value => Self::Name,
            Self::Description => Self::Value,
            Self::Kind => Self::Description,
        }
    }
}

/// State of the add form
#[derive(Debug, Clone)]
pub struct AddFormState {
    pub focused_field: FormField,
    pub name_input: TextInput,
    pub value_input: TextInput,
    pub description_input: TextInput,
    pub kind: TransactionKind,
}

impl Default for AddFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl AddFormState {
    pub fn new() -> Self {
        Self {
            focused_field: FormField::Name,
            name_input: TextInput::new().label("Name*").placeholder("e.g. Salary, Rent"),
            value_input: TextInput::new().label("Value*").placeholder("e.g. 150,00"),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("Optional details"),
            kind: TransactionKind::default(),
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The text input under focus, or `None` on the type selector
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Name => Some(&mut self.name_input),
            FormField::Value => Some(&mut self.value_input),
            FormField::Description => Some(&mut self.description_input),
            FormField::Kind => None,
        }
    }

    /// Snapshot of the fields as unvalidated input
    pub fn to_input(&self) -> TransactionInput {
        TransactionInput::new(self.name_input.value(), self.value_input.value(), self.kind)
            .with_description(self.description_input.value())
    }

    /// Reset every field to its initial state
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

/// Render the add view
pub fn render<S>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let border_color = if editing { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" New transaction - {} ", app.selected_month))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .split(inner);

    let form = &app.form;
    let focused = |field: FormField| editing && form.focused_field == field;

    let mut name = form.name_input.clone();
    name.focused = focused(FormField::Name);
    frame.render_widget(name, rows[0]);

    let mut value = form.value_input.clone();
    value.focused = focused(FormField::Value);
    frame.render_widget(value, rows[1]);

    let mut description = form.description_input.clone();
    description.focused = focused(FormField::Description);
    frame.render_widget(description, rows[2]);

    render_kind_selector(frame, form.kind, focused(FormField::Kind), rows[3]);

    let hint = if editing {
        "Enter: save  Tab: next field  Space: toggle type  Esc: stop editing"
    } else {
        "Enter: edit form  ?: help"
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        rows[4],
    );
}

fn render_kind_selector(frame: &mut Frame, kind: TransactionKind, focused: bool, area: Rect) {
    let option = |label: &'static str, this: TransactionKind, color: Color| {
        let marker = if kind == this { "(•) " } else { "( ) " };
        let mut style = Style::default().fg(color);
        if kind == this {
            style = style.add_modifier(Modifier::BOLD);
        }
        Span::styled(format!("{}{}", marker, label), style)
    };

    let label_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let line = Line::from(vec![
        Span::styled("Type", label_style),
        Span::raw(": "),
        option("Expense", TransactionKind::Expense, Color::Red),
        Span::raw("   "),
        option("Income", TransactionKind::Income, Color::Green),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Handle a key while the form is being edited
pub fn handle_key<S: crate::storage::KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form.prev_field(),
        code => {
            if app.form.focused_field == FormField::Kind {
                if matches!(code, KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right) {
                    app.form.kind = app.form.kind.toggled();
                }
                return;
            }

            let Some(input) = app.form.focused_input() else {
                return;
            };
            match code {
                KeyCode::Char(c) => input.insert(c),
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                _ => {}
            }
        }
    }
}
