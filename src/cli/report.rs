//! CLI commands for reports
//!
//! `summary`, `yearly` and `categories`.

use clap::Args;

use crate::display::report::{format_percentage, separator};
use crate::display::MoneyFormat;
use crate::error::PoupeResult;
use crate::models::{Ledger, Month};
use crate::reports::{CategoryBreakdown, Distribution, MonthInsights, Totals, YearlySeries};

use super::parse_month;

/// Month selection shared by the per-month commands
#[derive(Args, Debug, Default)]
pub struct MonthArgs {
    /// Month (1-12 or name), defaults to the current month
    #[arg(short, long, value_parser = parse_month)]
    pub month: Option<Month>,
}

impl MonthArgs {
    pub fn resolve(&self) -> Month {
        self.month.unwrap_or_else(Month::current)
    }
}

/// Handle `poupe summary`
pub fn handle_summary_command(ledger: &Ledger, money: &MoneyFormat, args: MonthArgs) -> PoupeResult<()> {
    print!("{}", format_summary(ledger, args.resolve(), money));
    Ok(())
}

/// Handle `poupe yearly`
pub fn handle_yearly_command(ledger: &Ledger, money: &MoneyFormat) -> PoupeResult<()> {
    print!("{}", YearlySeries::generate(ledger).format_terminal(money));
    Ok(())
}

/// Handle `poupe categories`
pub fn handle_categories_command(
    ledger: &Ledger,
    money: &MoneyFormat,
    args: MonthArgs,
) -> PoupeResult<()> {
    let breakdown = CategoryBreakdown::generate(ledger, args.resolve());
    print!("{}", breakdown.format_terminal(money));
    Ok(())
}

fn format_summary(ledger: &Ledger, month: Month, money: &MoneyFormat) -> String {
    let totals = Totals::for_month(ledger, month);
    let mut output = String::new();

    output.push_str(&format!("Summary - {}\n", month));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!("Income:       {:>20}\n", money.format(totals.income)));
    output.push_str(&format!("Expenses:     {:>20}\n", money.format(totals.expenses)));
    output.push_str(&format!("Balance:      {:>20}\n", money.format(totals.balance)));
    output.push_str(&format!(
        "Savings rate: {:>20}\n",
        format_percentage(totals.savings_rate())
    ));

    let distribution = Distribution::from_totals(&totals);
    if !distribution.is_empty() {
        output.push('\n');
        for slice in &distribution.slices {
            output.push_str(&format!(
                "{:<8} {:>7}\n",
                slice.kind,
                format_percentage(slice.percentage)
            ));
        }
    }

    output.push('\n');
    for line in MonthInsights::generate(ledger, month).lines(money) {
        output.push_str(&line);
        output.push('\n');
    }

    output
}
