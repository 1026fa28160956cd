//! Transaction CLI commands
//!
//! Implements the `add`, `list` and `delete` commands.

use clap::Args;

use crate::display::{format_transaction_details, format_transaction_table, MoneyFormat};
use crate::error::{PoupeError, PoupeResult};
use crate::models::{Month, TransactionId, TransactionInput, TransactionKind};
use crate::reports::Totals;
use crate::services::LedgerService;
use crate::storage::KeyValueStore;

use super::{parse_kind, parse_month};

/// Arguments of `poupe add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction name
    pub name: String,
    /// Value, e.g. "150" or "150,00"
    #[arg(allow_hyphen_values = true)]
    pub value: String,
    /// Free-form description
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// income or expense
    #[arg(short = 't', long = "type", value_parser = parse_kind, default_value = "expense")]
    pub kind: TransactionKind,
    /// Month (1-12 or name), defaults to the current month
    #[arg(short, long, value_parser = parse_month)]
    pub month: Option<Month>,
}

/// Arguments of `poupe delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Transaction ID
    pub id: TransactionId,
    /// Only look for the transaction in this month
    #[arg(short, long, value_parser = parse_month)]
    pub month: Option<Month>,
}

/// Handle `poupe add`
pub fn handle_add_command<S: KeyValueStore>(
    service: &mut LedgerService<S>,
    money: &MoneyFormat,
    args: AddArgs,
) -> PoupeResult<()> {
    let month = args.month.unwrap_or_else(Month::current);
    let input = TransactionInput::new(args.name, args.value, args.kind)
        .with_description(args.description);

    let txn = service.add_transaction(month, input)?;

    println!(
        "Added {} '{}' of {} to {} (ID: {})",
        txn.kind.to_string().to_lowercase(),
        txn.name,
        money.format(txn.value),
        month,
        txn.id
    );

    Ok(())
}

/// Handle `poupe list`
pub fn handle_list_command<S: KeyValueStore>(
    service: &LedgerService<S>,
    money: &MoneyFormat,
    month: Option<Month>,
) -> PoupeResult<()> {
    let month = month.unwrap_or_else(Month::current);
    let transactions = service.month(month);

    print!("{}", format_transaction_table(month, transactions, money));

    if !transactions.is_empty() {
        let totals = Totals::from_transactions(transactions);
        println!(
            "Income: {}  Expenses: {}  Balance: {}",
            money.format(totals.income),
            money.format(totals.expenses),
            money.format(totals.balance)
        );
    }

    Ok(())
}

/// Handle `poupe delete`
pub fn handle_delete_command<S: KeyValueStore>(
    service: &mut LedgerService<S>,
    money: &MoneyFormat,
    args: DeleteArgs,
) -> PoupeResult<()> {
    let (month, txn) = match args.month {
        Some(month) => service
            .delete_transaction(month, args.id)?
            .map(|txn| (month, txn))
            .ok_or_else(|| PoupeError::transaction_not_found(args.id.to_string()))?,
        None => service.delete_by_id(args.id)?,
    };

    println!("Deleted transaction:");
    print!("{}", format_transaction_details(&txn, month, money));

    Ok(())
}
