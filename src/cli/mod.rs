//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod history;
pub mod report;
pub mod transaction;

pub use export::{handle_export_command, ExportArgs};
pub use history::{handle_history_command, HistoryArgs};
pub use report::{
    handle_categories_command, handle_summary_command, handle_yearly_command, MonthArgs,
};
pub use transaction::{
    handle_add_command, handle_delete_command, handle_list_command, AddArgs, DeleteArgs,
};

use crate::models::{Month, TransactionKind};

/// Parse a month argument: a number from 1 to 12 or an English month name
///
/// Names match case-insensitively on their first three letters, so `mar`,
/// `March` and `3` all mean March.
pub fn parse_month(s: &str) -> Result<Month, String> {
    let s = s.trim();
    if let Ok(number) = s.parse::<u8>() {
        return Month::from_number(number)
            .ok_or_else(|| format!("month must be between 1 and 12, got {}", number));
    }

    let lower = s.to_lowercase();
    Month::all()
        .find(|m| lower.len() >= 3 && m.name().to_lowercase().starts_with(&lower))
        .ok_or_else(|| format!("unknown month '{}'", s))
}

/// Parse a transaction type argument
pub fn parse_kind(s: &str) -> Result<TransactionKind, String> {
    TransactionKind::parse(s).ok_or_else(|| format!("unknown type '{}', use income or expense", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_numbers() {
        assert_eq!(parse_month("1").unwrap().index(), 0);
        assert_eq!(parse_month("12").unwrap().index(), 11);
        assert!(parse_month("0").is_err());
        assert!(parse_month("13").is_err());
    }

    #[test]
    fn test_parse_month_names() {
        assert_eq!(parse_month("mar").unwrap().index(), 2);
        assert_eq!(parse_month("December").unwrap().index(), 11);
        assert!(parse_month("ju").is_err());
        assert!(parse_month("smarch").is_err());
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("income").unwrap(), TransactionKind::Income);
        assert!(parse_kind("transfer").is_err());
    }
}
