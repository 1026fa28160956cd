//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::error::PoupeResult;
use crate::export::export_transactions_csv;
use crate::models::{Ledger, Month};

use super::parse_month;

/// Arguments of `poupe export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Month (1-12 or name), defaults to the current month
    #[arg(short, long, value_parser = parse_month)]
    pub month: Option<Month>,

    /// Output file path; writes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `poupe export`
pub fn handle_export_command(ledger: &Ledger, args: ExportArgs) -> PoupeResult<()> {
    let month = args.month.unwrap_or_else(Month::current);
    let transactions = ledger.month(month);

    match args.output {
        Some(path) => {
            let file = File::create(&path)?;
            let count = export_transactions_csv(transactions, BufWriter::new(file))?;
            info!(path = %path.display(), count, "exported transactions");
            println!(
                "Exported {} transaction(s) from {} to {}",
                count,
                month,
                path.display()
            );
        }
        None => {
            export_transactions_csv(transactions, io::stdout().lock())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionInput, TransactionKind};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("june.csv");
        let month = Month::new(5).unwrap();

        let mut ledger = Ledger::new();
        ledger
            .add_transaction(
                month,
                TransactionInput::new("Festa", "250", TransactionKind::Expense),
                &Utc.timestamp_millis_opt(7).unwrap(),
                "%d/%m/%Y",
            )
            .unwrap();

        handle_export_command(
            &ledger,
            ExportArgs {
                month: Some(month),
                output: Some(path.clone()),
            },
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("id,name,description,value,type,date\n"));
        assert!(contents.contains("7,Festa,,250.00,expense,01/01/1970"));
    }
}
