//! Month insights
//!
//! A short written assessment of the selected month: how much of the income
//! was kept, whether the month closed with a surplus or deficit, and how many
//! transactions were recorded.

use std::fmt;

use crate::display::report::MoneyFormat;
use crate::models::{Ledger, Money, Month};

use super::totals::Totals;

/// Rating of a savings rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsRating {
    /// 20% or more
    Excellent,
    /// 10% up to 20%
    GoodProgress,
    /// Below 10%
    SaveMore,
}

impl SavingsRating {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 20.0 {
            Self::Excellent
        } else if rate >= 10.0 {
            Self::GoodProgress
        } else {
            Self::SaveMore
        }
    }

    /// Sentence shown alongside the rate
    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent! You are saving more than 20% of your income.",
            Self::GoodProgress => "Good progress! Try to reach 20% of savings.",
            Self::SaveMore => "Try to save at least 10% of your income.",
        }
    }
}

impl fmt::Display for SavingsRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::GoodProgress => write!(f, "Good progress"),
            Self::SaveMore => write!(f, "Save more"),
        }
    }
}

/// Insights for one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthInsights {
    pub month: Month,
    pub savings_rate: f64,
    pub rating: SavingsRating,
    /// Absolute value of the month balance
    pub balance_abs: Money,
    pub surplus: bool,
    pub transaction_count: usize,
}

impl MonthInsights {
    pub fn generate(ledger: &Ledger, month: Month) -> Self {
        let totals = Totals::for_month(ledger, month);
        let savings_rate = totals.savings_rate();

        Self {
            month,
            savings_rate,
            rating: SavingsRating::from_rate(savings_rate),
            balance_abs: totals.balance.abs(),
            surplus: !totals.balance.is_negative(),
            transaction_count: ledger.month(month).len(),
        }
    }

    /// Insight lines, one per statement
    pub fn lines(&self, money: &MoneyFormat) -> Vec<String> {
        vec![
            format!(
                "Savings rate {:.1}%: {}",
                self.savings_rate,
                self.rating.message()
            ),
            format!(
                "You closed {} with a {} of {}.",
                self.month,
                if self.surplus { "surplus" } else { "deficit" },
                money.format(self.balance_abs)
            ),
            format!(
                "{} transaction{} recorded this month.",
                self.transaction_count,
                if self.transaction_count == 1 { "" } else { "s" }
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionInput, TransactionKind};
    use chrono::{TimeZone, Utc};

    fn month_with(income: &str, expense: &str) -> (Ledger, Month) {
        let month = Month::new(2).unwrap();
        let mut ledger = Ledger::new();
        let now = Utc.timestamp_millis_opt(1).unwrap();
        ledger
            .add_transaction(month, TransactionInput::new("In", income, TransactionKind::Income), &now, "%d/%m/%Y")
            .unwrap();
        ledger
            .add_transaction(month, TransactionInput::new("Out", expense, TransactionKind::Expense), &now, "%d/%m/%Y")
            .unwrap();
        (ledger, month)
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(SavingsRating::from_rate(20.0), SavingsRating::Excellent);
        assert_eq!(SavingsRating::from_rate(19.9), SavingsRating::GoodProgress);
        assert_eq!(SavingsRating::from_rate(10.0), SavingsRating::GoodProgress);
        assert_eq!(SavingsRating::from_rate(9.9), SavingsRating::SaveMore);
        assert_eq!(SavingsRating::from_rate(-40.0), SavingsRating::SaveMore);
    }

    #[test]
    fn test_surplus() {
        let (ledger, month) = month_with("1000", "300");
        let insights = MonthInsights::generate(&ledger, month);

        assert_eq!(insights.savings_rate, 70.0);
        assert_eq!(insights.rating, SavingsRating::Excellent);
        assert!(insights.surplus);
        assert_eq!(insights.balance_abs, Money::from_cents(70000));
        assert_eq!(insights.transaction_count, 2);
    }

    #[test]
    fn test_deficit_reports_absolute_balance() {
        let (ledger, month) = month_with("100", "250");
        let insights = MonthInsights::generate(&ledger, month);
        assert!(!insights.surplus);
        assert_eq!(insights.balance_abs, Money::from_cents(15000));

        let lines = insights.lines(&MoneyFormat::default());
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("deficit of R$ 150,00"));
        assert!(lines[2].starts_with("2 transactions"));
    }

    #[test]
    fn test_empty_month() {
        let insights = MonthInsights::generate(&Ledger::new(), Month::new(0).unwrap());
        assert_eq!(insights.savings_rate, 0.0);
        assert_eq!(insights.rating, SavingsRating::SaveMore);
        assert!(insights.surplus);
        assert_eq!(insights.transaction_count, 0);
    }
}
