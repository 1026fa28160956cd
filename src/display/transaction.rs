//! Transaction display formatting
//!
//! Renders a month's transactions as a table and a single transaction as a
//! detail block.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Month, Transaction};

use super::report::{truncate, MoneyFormat};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Format a month's transactions as a table
pub fn format_transaction_table(
    month: Month,
    transactions: &[Transaction],
    money: &MoneyFormat,
) -> String {
    if transactions.is_empty() {
        return format!("No transactions in {}.\n", month);
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: txn.date.clone(),
        name: truncate(&txn.name, 24),
        description: truncate(&txn.description, 32),
        kind: txn.kind.to_string(),
        value: format!("{}{}", txn.kind.sign(), money.format(txn.value)),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n{}\n", month, table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, month: Month, money: &MoneyFormat) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Month:       {}\n", month));
    output.push_str(&format!("Date:        {}\n", txn.date));
    output.push_str(&format!("Name:        {}\n", txn.name));
    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Value:       {}\n", money.format(txn.value)));

    output
}
