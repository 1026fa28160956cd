//! Transaction model
//!
//! A transaction is a named income or expense entry recorded against a month.
//! Transactions are never edited once created; they are only added or deleted.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::{PoupeError, PoupeResult};

/// Message shown when a required field is missing
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in at least the name and the value.";

/// Largest value a single transaction may carry (one trillion)
pub const MAX_VALUE: Money = Money::from_cents(100_000_000_000_000);

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    /// Parse from a string, accepting a few common spellings
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "receita" => Some(Self::Income),
            "expense" | "out" | "despesa" => Some(Self::Expense),
            _ => None,
        }
    }

    /// The other kind
    pub fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    /// Sign shown in front of amounts of this kind
    pub fn sign(self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Creation timestamp in milliseconds, unique within the ledger
    pub id: TransactionId,

    /// Short name, also the grouping key for category breakdowns
    pub name: String,

    /// Free-form details
    #[serde(default)]
    pub description: String,

    /// Positive amount
    pub value: Money,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Creation date, already formatted for display
    #[serde(default)]
    pub date: String,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Whether the value is within the accepted range
    pub fn has_valid_value(&self) -> bool {
        self.value.is_positive() && self.value <= MAX_VALUE
    }

    /// Value with its sign applied (expenses negative)
    pub fn signed_value(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.value,
            TransactionKind::Expense => -self.value,
        }
    }
}

/// Raw, unvalidated fields of a new transaction as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionInput {
    pub name: String,
    pub description: String,
    pub value: String,
    pub kind: TransactionKind,
}

impl TransactionInput {
    /// Create an input with the required fields
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: TransactionKind) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            value: value.into(),
            kind,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validate the fields, returning the parsed amount
    ///
    /// Name and value are required; the value must parse to a positive amount
    /// no larger than [`MAX_VALUE`].
    pub fn validate(&self) -> PoupeResult<Money> {
        if self.name.trim().is_empty() || self.value.trim().is_empty() {
            return Err(PoupeError::Validation(REQUIRED_FIELDS_MESSAGE.into()));
        }

        let value = Money::parse(&self.value).map_err(|_| {
            PoupeError::Validation(format!(
                "Invalid value '{}'. Use a number such as 150 or 150,00.",
                self.value.trim()
            ))
        })?;

        if !value.is_positive() {
            return Err(PoupeError::Validation(
                "Value must be greater than zero.".into(),
            ));
        }

        if value > MAX_VALUE {
            return Err(PoupeError::Validation(format!(
                "Value must not exceed {}.",
                MAX_VALUE.units()
            )));
        }

        Ok(value)
    }

    /// Build a transaction created at `now`
    ///
    /// `date_format` is the strftime pattern used for the stored date string.
    pub fn into_transaction<Tz>(
        self,
        id: TransactionId,
        now: &DateTime<Tz>,
        date_format: &str,
    ) -> PoupeResult<Transaction>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let value = self.validate()?;
        Ok(Transaction {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            value,
            kind: self.kind,
            date: now.format(date_format).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn now() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 15, 10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(TransactionKind::parse("income"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("Expense"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse("receita"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("transfer"), None);
        assert_eq!(TransactionKind::default(), TransactionKind::Expense);
    }

    #[test]
    fn test_into_transaction_trims_and_formats_date() {
        let input = TransactionInput::new("  Salário ", "1000", TransactionKind::Income)
            .with_description(" monthly pay ");
        let txn = input
            .into_transaction(TransactionId::from_millis(1), &now(), "%d/%m/%Y")
            .unwrap();

        assert_eq!(txn.name, "Salário");
        assert_eq!(txn.description, "monthly pay");
        assert_eq!(txn.value, Money::from_cents(100000));
        assert_eq!(txn.date, "15/01/2025");
        assert!(txn.is_income());
    }

    #[test]
    fn test_missing_required_fields() {
        let missing_name = TransactionInput::new("   ", "10", TransactionKind::Expense);
        let err = missing_name.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains(REQUIRED_FIELDS_MESSAGE));

        let missing_value = TransactionInput::new("Rent", "", TransactionKind::Expense);
        assert!(missing_value.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_value_must_be_a_positive_number() {
        let garbage = TransactionInput::new("Rent", "lots", TransactionKind::Expense);
        assert!(garbage.validate().unwrap_err().is_validation());

        let zero = TransactionInput::new("Rent", "0", TransactionKind::Expense);
        assert!(zero.validate().unwrap_err().is_validation());

        let negative = TransactionInput::new("Rent", "-5", TransactionKind::Expense);
        assert!(negative.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_value_is_capped() {
        let at_cap = TransactionInput::new("Lottery", "1000000000000", TransactionKind::Income);
        assert_eq!(at_cap.validate().unwrap(), MAX_VALUE);

        let over = TransactionInput::new("Lottery", "1000000000000,01", TransactionKind::Income);
        let err = over.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("must not exceed"));

        let huge = TransactionInput::new("Lottery", "50000000000000000", TransactionKind::Income);
        assert!(huge.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_has_valid_value() {
        let json = r#"{"id":1,"name":"Refund","value":-5,"type":"income","date":"x"}"#;
        let negative: Transaction = serde_json::from_str(json).unwrap();
        assert!(!negative.has_valid_value());

        let mut txn = negative.clone();
        txn.value = Money::from_cents(500);
        assert!(txn.has_valid_value());
        txn.value = Money::zero();
        assert!(!txn.has_valid_value());
    }

    #[test]
    fn test_signed_value() {
        let txn = TransactionInput::new("Rent", "300", TransactionKind::Expense)
            .into_transaction(TransactionId::from_millis(1), &now(), "%d/%m/%Y")
            .unwrap();
        assert_eq!(txn.signed_value(), Money::from_cents(-30000));
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{"id":1700000000000,"name":"Aluguel","description":"","value":300,"type":"expense","date":"01/02/2025"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.value, Money::from_cents(30000));

        let back = serde_json::to_string(&txn).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_description_defaults_when_absent() {
        let json = r#"{"id":1,"name":"Bonus","value":12.5,"type":"income","date":"x"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert!(txn.description.is_empty());
        assert_eq!(txn.value.cents(), 1250);
    }
}
