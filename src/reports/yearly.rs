//! Yearly overview
//!
//! Totals for each of the twelve months, in calendar order, as plotted on the
//! yearly line chart.

use crate::display::report::{double_separator, format_header, separator, MoneyFormat};
use crate::models::{Ledger, Money, Month};

use super::totals::Totals;

/// One month of the yearly series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearlyPoint {
    pub month: Month,
    /// Short month label, e.g. "Jan"
    pub label: String,
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

/// Totals of all twelve months
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearlySeries {
    pub points: Vec<YearlyPoint>,
}

impl YearlySeries {
    /// Compute the series for every month of the ledger
    pub fn generate(ledger: &Ledger) -> Self {
        let points = Month::all()
            .map(|month| {
                let totals = Totals::for_month(ledger, month);
                YearlyPoint {
                    month,
                    label: month.label(),
                    income: totals.income,
                    expense: totals.expenses,
                    balance: totals.balance,
                }
            })
            .collect();

        Self { points }
    }

    /// Aggregate over the whole year
    pub fn total(&self) -> Totals {
        self.points
            .iter()
            .map(|p| Totals::new(p.income, p.expense))
            .sum()
    }

    /// Largest absolute value in the series, for scaling charts
    pub fn max_abs(&self) -> Money {
        self.points
            .iter()
            .flat_map(|p| [p.income, p.expense, p.balance.abs()])
            .max()
            .unwrap_or_default()
    }

    /// Format the series as a text table
    pub fn format_terminal(&self, money: &MoneyFormat) -> String {
        let width = 62;
        let mut output = String::new();

        output.push_str(&double_separator(width));
        output.push('\n');
        output.push_str(&format_header("YEARLY OVERVIEW", width));
        output.push('\n');
        output.push_str(&double_separator(width));
        output.push('\n');

        output.push_str(&format!(
            "{:<6} {:>17} {:>17} {:>17}\n",
            "Month", "Income", "Expenses", "Balance"
        ));
        output.push_str(&separator(width));
        output.push('\n');

        for point in &self.points {
            output.push_str(&format!(
                "{:<6} {:>17} {:>17} {:>17}\n",
                point.label,
                money.format(point.income),
                money.format(point.expense),
                money.format(point.balance)
            ));
        }

        let total = self.total();
        output.push_str(&separator(width));
        output.push('\n');
        output.push_str(&format!(
            "{:<6} {:>17} {:>17} {:>17}\n",
            "Total",
            money.format(total.income),
            money.format(total.expenses),
            money.format(total.balance)
        ));

        output
    }
}
