//! Aligned text table for terminal display

use crate::io::{format_amount, format_timestamp};
use crate::types::{DetectionError, FlaggedResult};
use comfy_table::{presets, Table};
use std::io::Write;

const HEADINGS: [&str; 6] = ["ID", "ACCOUNT", "MERCHANT", "AMOUNT", "TIMESTAMP", "REASON"];

/// Write results as a column-aligned table
///
/// Prints `No fraudulent transactions detected.` when `results` is empty.
///
/// # Errors
///
/// Returns `DetectionError::IoError` if the output cannot be written.
pub fn render_table(results: &[FlaggedResult], output: &mut dyn Write) -> Result<(), DetectionError> {
    if results.is_empty() {
        writeln!(output, "No fraudulent transactions detected.")?;
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::ASCII_MARKDOWN).set_header(HEADINGS);

    for result in results {
        let tx = &result.transaction;
        table.add_row([
            tx.id.clone(),
            tx.account_id.clone(),
            tx.merchant.clone(),
            format!("${}", format_amount(tx.amount)),
            format_timestamp(&tx.timestamp),
            result.reason.clone(),
        ]);
    }

    writeln!(output, "Potentially Fraudulent Transactions:")?;
    writeln!(output, "{}", table)?;

    Ok(())
}
