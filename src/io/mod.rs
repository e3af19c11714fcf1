//! I/O module
//!
//! Adapters between files/terminals and the detection core. The core never
//! sees file formats; these functions produce `Transaction` values and
//! consume `FlaggedResult` values.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, result output)
//! - `csv_reader` - CSV transaction reader with iterator interface
//! - `json_format` - JSON transaction input and result export
//! - `table` - Aligned text table for terminal display

pub mod csv_format;
pub mod csv_reader;
pub mod json_format;
pub mod table;

pub use csv_format::{convert_csv_record, write_results_csv, CsvRecord};
pub use csv_reader::{read_csv_transactions, CsvTransactionReader};
pub use json_format::{export_results_json, export_results_to_file, read_json_transactions};
pub use table::render_table;
pub use crate::types::format_amount;

use crate::cli::InputFormat;
use crate::types::{DetectionError, Transaction};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use std::fs::File;
use std::path::Path;

/// Load all transactions from `path` in the given format
///
/// # Errors
///
/// Returns `FileNotFound`/`IoError` if the file cannot be opened and
/// `MalformedTransaction` for the first record that cannot be parsed.
pub fn read_transactions(
    path: &Path,
    format: InputFormat,
) -> Result<Vec<Transaction>, DetectionError> {
    match format {
        InputFormat::Csv => read_csv_transactions(path),
        InputFormat::Json => read_json_transactions(open_input(path)?),
    }
}

/// Open an input file, mapping a missing path to `FileNotFound`
pub(crate) fn open_input(path: &Path) -> Result<File, DetectionError> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DetectionError::file_not_found(path),
        _ => DetectionError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        },
    })
}

/// Render a timestamp as RFC 3339, using `Z` for UTC
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
