//! Income vs. expense distribution of a month

use crate::models::{Money, TransactionKind};

use super::totals::Totals;

/// One slice of the distribution
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub kind: TransactionKind,
    pub value: Money,
    /// Share of the combined total, in percent
    pub percentage: f64,
}

/// Income and expense share of a month's movement
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Distribution {
    pub slices: Vec<Slice>,
}

impl Distribution {
    /// Build the distribution from month totals
    ///
    /// Empty when both income and expenses are zero. Otherwise holds an
    /// income slice followed by an expense slice, either of which may be zero.
    pub fn from_totals(totals: &Totals) -> Self {
        let combined = totals.income + totals.expenses;
        if combined.is_zero() {
            return Self::default();
        }

        let share = |value: Money| value.as_f64() / combined.as_f64() * 100.0;
        let slices = vec![
            Slice {
                kind: TransactionKind::Income,
                value: totals.income,
                percentage: share(totals.income),
            },
            Slice {
                kind: TransactionKind::Expense,
                value: totals.expenses,
                percentage: share(totals.expenses),
            },
        ];

        Self { slices }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
