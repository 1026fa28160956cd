//! Terminal User Interface module
//!
//! This module provides the interactive interface using ratatui: a header
//! with month selector and summary cards, and the add, list and charts views.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
