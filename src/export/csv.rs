//! CSV export of a month's transactions

use std::io::Write;

use serde::Serialize;

use crate::error::PoupeResult;
use crate::models::Transaction;

#[derive(Serialize)]
struct CsvRecord<'a> {
    id: i64,
    name: &'a str,
    description: &'a str,
    /// Amount in currency units with a `.` separator, e.g. `1000.00`
    value: String,
    #[serde(rename = "type")]
    kind: &'static str,
    date: &'a str,
}

impl<'a> From<&'a Transaction> for CsvRecord<'a> {
    fn from(txn: &'a Transaction) -> Self {
        Self {
            id: txn.id.as_millis(),
            name: &txn.name,
            description: &txn.description,
            value: txn.value.to_string(),
            kind: if txn.is_income() { "income" } else { "expense" },
            date: &txn.date,
        }
    }
}

/// Write transactions as CSV, header first, in the given order
///
/// Returns the number of records written.
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> PoupeResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if transactions.is_empty() {
        csv_writer.write_record(["id", "name", "description", "value", "type", "date"])?;
    }
    for txn in transactions {
        csv_writer.serialize(CsvRecord::from(txn))?;
    }

    csv_writer.flush()?;
    Ok(transactions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionId, TransactionInput, TransactionKind};
    use chrono::{TimeZone, Utc};

    fn txn(id: i64, name: &str, value: &str, kind: TransactionKind) -> Transaction {
        TransactionInput::new(name, value, kind)
            .into_transaction(
                TransactionId::from_millis(id),
                &Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
                "%d/%m/%Y",
            )
            .unwrap()
    }

    #[test]
    fn test_export_rows() {
        let mut output = Vec::new();
        let count = export_transactions_csv(
            &[
                txn(1, "Salário", "1000", TransactionKind::Income),
                txn(2, "Mercado, feira", "89,9", TransactionKind::Expense),
            ],
            &mut output,
        )
        .unwrap();

        assert_eq!(count, 2);
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "id,name,description,value,type,date");
        assert_eq!(lines[1], "1,Salário,,1000.00,income,10/01/2024");
        assert_eq!(lines[2], "2,\"Mercado, feira\",,89.90,expense,10/01/2024");
    }

    #[test]
    fn test_export_empty_still_has_header() {
        let mut output = Vec::new();
        assert_eq!(export_transactions_csv(&[], &mut output).unwrap(), 0);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "id,name,description,value,type,date\n"
        );
    }
}
