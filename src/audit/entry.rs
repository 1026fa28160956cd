//! Audit entry data structures
//!
//! Defines the structure of audit log entries: which operation ran, on which
//! transaction, in which month, and the transaction as it was stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Month, Transaction};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Transaction was added
    Create,
    /// Transaction was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Month bucket the transaction belongs to
    pub month: Month,

    /// ID of the affected transaction
    pub entity_id: String,

    /// Transaction name, for readable output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// The transaction before the operation (deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The transaction after the operation (creates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create an entry recording that `txn` was added to `month`
    pub fn create(month: Month, txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            month,
            entity_id: txn.id.to_string(),
            entity_name: Some(txn.name.clone()),
            before: None,
            after: serde_json::to_value(txn).ok(),
        }
    }

    /// Create an entry recording that `txn` was removed from `month`
    pub fn delete(month: Month, txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            month,
            entity_id: txn.id.to_string(),
            entity_name: Some(txn.name.clone()),
            before: serde_json::to_value(txn).ok(),
            after: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.month,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId, TransactionKind};

    fn sample() -> Transaction {
        Transaction {
            id: TransactionId::from_millis(1_700_000_000_000),
            name: "Aluguel".into(),
            description: String::new(),
            value: Money::from_cents(30000),
            kind: TransactionKind::Expense,
            date: "14/11/2023".into(),
        }
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(Month::new(0).unwrap(), &sample());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_id, "1700000000000");
        assert!(entry.before.is_none());
        assert_eq!(entry.after.as_ref().unwrap()["value"], 300);
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(Month::new(0).unwrap(), &sample());

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(Month::new(3).unwrap(), &sample());

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.month, Month::new(3).unwrap());
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::delete(Month::new(1).unwrap(), &sample());

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("DELETE"));
        assert!(formatted.contains("February"));
        assert!(formatted.contains("1700000000000"));
        assert!(formatted.contains("Aluguel"));
    }
}
