//! CLI command for the audit history

use clap::Args;

use crate::audit::AuditLogger;
use crate::error::PoupeResult;

/// Arguments of `poupe history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,
}

/// Handle `poupe history`
pub fn handle_history_command(audit: &AuditLogger, args: HistoryArgs) -> PoupeResult<()> {
    let entries = audit.read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
