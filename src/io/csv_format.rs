//! CSV format handling for transaction records and result output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Flagged result output serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::io::{format_amount, format_timestamp};
use crate::types::{DetectionError, FlaggedResult, Transaction};
use chrono::DateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Column names of the input CSV, in order
pub const INPUT_HEADER: [&str; 5] = ["id", "amount", "timestamp", "account_id", "merchant"];

/// Column names of the result CSV, in order
pub const OUTPUT_HEADER: [&str; 7] = [
    "id",
    "account_id",
    "merchant",
    "amount",
    "timestamp",
    "rule",
    "reason",
];

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: id, amount, timestamp,
/// account_id, merchant. Amount and timestamp are kept as strings so that
/// conversion errors can be reported with the offending value.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub id: String,
    pub amount: String,
    pub timestamp: String,
    pub account_id: String,
    pub merchant: String,
}

/// Convert a CsvRecord to a Transaction
///
/// - Parses the amount as a decimal (any sign)
/// - Parses the timestamp as RFC 3339, keeping its UTC offset
///
/// # Returns
///
/// * `Ok(Transaction)` - Successfully converted record
/// * `Err(String)` - Description of the first field that failed to parse
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<Transaction, String> {
    let amount = Decimal::from_str(csv_record.amount.trim())
        .map_err(|e| format!("invalid amount '{}': {}", csv_record.amount, e))?;

    let timestamp = DateTime::parse_from_rfc3339(csv_record.timestamp.trim())
        .map_err(|e| format!("invalid timestamp '{}': {}", csv_record.timestamp, e))?;

    Ok(Transaction {
        id: csv_record.id,
        amount,
        timestamp,
        account_id: csv_record.account_id,
        merchant: csv_record.merchant,
    })
}

/// Write flagged results in CSV format
///
/// Columns: id, account_id, merchant, amount, timestamp, rule, reason.
/// Results are written in the order given.
///
/// # Errors
///
/// Returns `DetectionError::IoError` if the output cannot be written.
pub fn write_results_csv(
    results: &[FlaggedResult],
    output: &mut dyn Write,
) -> Result<(), DetectionError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(OUTPUT_HEADER).map_err(write_error)?;

    for result in results {
        let tx = &result.transaction;
        writer.write_record([
            tx.id.as_str(),
            tx.account_id.as_str(),
            tx.merchant.as_str(),
            format_amount(tx.amount).as_str(),
            format_timestamp(&tx.timestamp).as_str(),
            result.rule.as_str(),
            result.reason.as_str(),
        ])
        .map_err(write_error)?;
    }

    writer.flush()?;

    Ok(())
}

fn write_error(error: csv::Error) -> DetectionError {
    DetectionError::IoError {
        message: format!("Failed to write result record: {}", error),
    }
}
