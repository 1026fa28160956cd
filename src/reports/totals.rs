//! Month totals and savings rate

use crate::models::{Ledger, Money, Month, Transaction, TransactionKind};

/// Income, expenses and balance of a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
}

impl Totals {
    /// Sum up a slice of transactions
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let sum_of = |kind: TransactionKind| -> Money {
            transactions
                .iter()
                .filter(|t| t.kind == kind)
                .map(|t| t.value)
                .sum()
        };

        let income = sum_of(TransactionKind::Income);
        let expenses = sum_of(TransactionKind::Expense);
        Self::new(income, expenses)
    }

    /// Totals of one month of the ledger
    pub fn for_month(ledger: &Ledger, month: Month) -> Self {
        Self::from_transactions(ledger.month(month))
    }

    /// Build totals from income and expenses, deriving the balance
    pub fn new(income: Money, expenses: Money) -> Self {
        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }

    /// Share of income kept as balance, in percent, rounded to one decimal
    ///
    /// Zero when there is no income. Negative when expenses exceed income.
    pub fn savings_rate(&self) -> f64 {
        if !self.income.is_positive() {
            return 0.0;
        }
        let rate = self.balance.cents() as f64 / self.income.cents() as f64 * 100.0;
        (rate * 10.0).round() / 10.0
    }

    /// Savings rate with one decimal, e.g. `"70.0"`
    pub fn savings_rate_display(&self) -> String {
        format!("{:.1}", self.savings_rate())
    }
}

impl std::ops::Add for Totals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.income + other.income, self.expenses + other.expenses)
    }
}

impl std::iter::Sum for Totals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Totals::default(), |acc, t| acc + t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionInput, TransactionKind};
    use chrono::{TimeZone, Utc};

    fn ledger_with(entries: &[(u8, &str, &str, TransactionKind)]) -> Ledger {
        let mut ledger = Ledger::new();
        for (i, (month, name, value, kind)) in entries.iter().enumerate() {
            ledger
                .add_transaction(
                    Month::new(*month).unwrap(),
                    TransactionInput::new(*name, *value, *kind),
                    &Utc.timestamp_millis_opt(i as i64 + 1).unwrap(),
                    "%d/%m/%Y",
                )
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_empty_month_is_all_zero() {
        let ledger = Ledger::new();
        for month in Month::all() {
            let totals = Totals::for_month(&ledger, month);
            assert_eq!(totals, Totals::default());
            assert_eq!(totals.savings_rate(), 0.0);
            assert_eq!(totals.savings_rate_display(), "0.0");
        }
    }

    #[test]
    fn test_salary_and_rent_example() {
        let ledger = ledger_with(&[
            (0, "Salário", "1000", TransactionKind::Income),
            (0, "Aluguel", "300", TransactionKind::Expense),
        ]);
        let totals = Totals::for_month(&ledger, Month::new(0).unwrap());

        assert_eq!(totals.income, Money::from_cents(100000));
        assert_eq!(totals.expenses, Money::from_cents(30000));
        assert_eq!(totals.balance, Money::from_cents(70000));
        assert_eq!(totals.savings_rate_display(), "70.0");
    }

    #[test]
    fn test_largest_values_sum_without_overflow() {
        let ledger = ledger_with(&[
            (0, "Lottery", "1000000000000", TransactionKind::Income),
            (0, "Lottery", "1000000000000", TransactionKind::Income),
            (0, "Yacht", "1000000000000", TransactionKind::Expense),
        ]);
        let totals = Totals::for_month(&ledger, Month::new(0).unwrap());

        assert_eq!(totals.income, Money::from_cents(200_000_000_000_000));
        assert_eq!(totals.expenses, Money::from_cents(100_000_000_000_000));
        assert_eq!(totals.balance, Money::from_cents(100_000_000_000_000));
        assert_eq!(totals.savings_rate_display(), "50.0");

        let yearly: Totals = Month::all().map(|m| Totals::for_month(&ledger, m)).sum();
        assert_eq!(yearly.balance, totals.balance);
    }

    #[test]
    fn test_savings_rate_rounding_and_sign() {
        let third = Totals::new(Money::from_cents(30000), Money::from_cents(20000));
        assert_eq!(third.savings_rate(), 33.3);

        let deficit = Totals::new(Money::from_cents(10000), Money::from_cents(15000));
        assert_eq!(deficit.savings_rate(), -50.0);
        assert_eq!(deficit.balance, Money::from_cents(-5000));

        let no_income = Totals::new(Money::zero(), Money::from_cents(15000));
        assert_eq!(no_income.savings_rate(), 0.0);
    }

    #[test]
    fn test_other_months_are_ignored() {
        let ledger = ledger_with(&[
            (0, "Salário", "1000", TransactionKind::Income),
            (1, "Aluguel", "300", TransactionKind::Expense),
        ]);
        let feb = Totals::for_month(&ledger, Month::new(1).unwrap());
        assert_eq!(feb.income, Money::zero());
        assert_eq!(feb.balance, Money::from_cents(-30000));
    }
}
