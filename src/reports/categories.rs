//! Category breakdown
//!
//! Transactions of a month grouped by kind and name, largest first. Only the
//! top entries are kept.

use crate::display::report::{format_bar, truncate, MoneyFormat};
use crate::models::{Ledger, Money, Month, TransactionKind};

/// Maximum number of entries in a breakdown
pub const CATEGORY_LIMIT: usize = 10;

/// Summed value of all transactions sharing a kind and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub kind: TransactionKind,
    pub name: String,
    pub total: Money,
    pub count: usize,
}

/// Top categories of a month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub month: Month,
    pub entries: Vec<CategoryEntry>,
}

impl CategoryBreakdown {
    /// Group a month's transactions by (kind, name) and keep the largest
    ///
    /// Ties keep their first-seen order, with all groups of the first kind
    /// seen in the month ahead of the other kind.
    pub fn generate(ledger: &Ledger, month: Month) -> Self {
        let mut by_kind: Vec<(TransactionKind, Vec<CategoryEntry>)> = Vec::new();

        for txn in ledger.month(month) {
            let groups = match by_kind.iter().position(|(kind, _)| *kind == txn.kind) {
                Some(i) => &mut by_kind[i].1,
                None => {
                    by_kind.push((txn.kind, Vec::new()));
                    let last = by_kind.len() - 1;
                    &mut by_kind[last].1
                }
            };

            match groups.iter_mut().find(|e| e.name == txn.name) {
                Some(entry) => {
                    entry.total += txn.value;
                    entry.count += 1;
                }
                None => groups.push(CategoryEntry {
                    kind: txn.kind,
                    name: txn.name.clone(),
                    total: txn.value,
                    count: 1,
                }),
            }
        }

        let mut entries: Vec<CategoryEntry> =
            by_kind.into_iter().flat_map(|(_, groups)| groups).collect();
        entries.sort_by(|a, b| b.total.cmp(&a.total));
        entries.truncate(CATEGORY_LIMIT);

        Self { month, entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format the breakdown as a text table with bars
    pub fn format_terminal(&self, money: &MoneyFormat) -> String {
        if self.entries.is_empty() {
            return format!("No transactions in {}.\n", self.month);
        }

        let max = self.entries[0].total.as_f64();
        let mut output = format!("Top categories - {}\n\n", self.month);

        for entry in &self.entries {
            output.push_str(&format!(
                "{:<20} {:<8} {:>16} {}\n",
                truncate(&entry.name, 20),
                entry.kind,
                money.format(entry.total),
                format_bar(entry.total.as_f64(), max, 20)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionInput;
    use chrono::{TimeZone, Utc};

    fn add(ledger: &mut Ledger, stamp: i64, name: &str, value: &str, kind: TransactionKind) {
        ledger
            .add_transaction(
                Month::new(0).unwrap(),
                TransactionInput::new(name, value, kind),
                &Utc.timestamp_millis_opt(stamp).unwrap(),
                "%d/%m/%Y",
            )
            .unwrap();
    }

    #[test]
    fn test_groups_by_kind_and_name() {
        let mut ledger = Ledger::new();
        add(&mut ledger, 1, "Mercado", "100", TransactionKind::Expense);
        add(&mut ledger, 2, "Mercado", "50", TransactionKind::Expense);
        add(&mut ledger, 3, "Mercado", "30", TransactionKind::Income);
        add(&mut ledger, 4, "Salário", "1000", TransactionKind::Income);

        let breakdown = CategoryBreakdown::generate(&ledger, Month::new(0).unwrap());
        let summary: Vec<_> = breakdown
            .entries
            .iter()
            .map(|e| (e.name.as_str(), e.kind, e.total.cents(), e.count))
            .collect();

        assert_eq!(
            summary,
            [
                ("Salário", TransactionKind::Income, 100000, 1),
                ("Mercado", TransactionKind::Expense, 15000, 2),
                ("Mercado", TransactionKind::Income, 3000, 1),
            ]
        );
    }

    #[test]
    fn test_limited_and_sorted_descending() {
        let mut ledger = Ledger::new();
        for i in 0..15 {
            add(&mut ledger, i + 1, &format!("Item {}", i), &format!("{}", i + 1), TransactionKind::Expense);
        }

        let breakdown = CategoryBreakdown::generate(&ledger, Month::new(0).unwrap());
        assert_eq!(breakdown.entries.len(), CATEGORY_LIMIT);
        assert!(breakdown
            .entries
            .windows(2)
            .all(|pair| pair[0].total >= pair[1].total));
        assert_eq!(breakdown.entries[0].name, "Item 14");
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let mut ledger = Ledger::new();
        add(&mut ledger, 1, "Luz", "80", TransactionKind::Expense);
        add(&mut ledger, 2, "Venda", "80", TransactionKind::Income);
        add(&mut ledger, 3, "Água", "80", TransactionKind::Expense);

        let breakdown = CategoryBreakdown::generate(&ledger, Month::new(0).unwrap());
        let names: Vec<_> = breakdown.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Luz", "Água", "Venda"]);
    }

    #[test]
    fn test_empty_month() {
        let breakdown = CategoryBreakdown::generate(&Ledger::new(), Month::new(4).unwrap());
        assert!(breakdown.is_empty());
        assert!(breakdown
            .format_terminal(&MoneyFormat::default())
            .contains("No transactions in May"));
    }
}
