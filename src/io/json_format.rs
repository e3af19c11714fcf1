//! JSON input and result export
//!
//! Input is a single JSON array of transaction objects:
//!
//! ```json
//! [{"id": "t1", "amount": 50.0, "timestamp": "2024-01-01T10:00:00Z",
//!   "account_id": "acc1", "merchant": "Shop"}]
//! ```
//!
//! Export writes the flagged results as a pretty-printed array of
//! `{ "transaction": {...}, "rule": "...", "reason": "..." }` objects, with
//! the transaction amount as a JSON number.

use crate::types::{DetectionError, FlaggedResult, Transaction};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Parse a JSON array of transactions
///
/// # Errors
///
/// Returns `MalformedTransaction` (with the line when known) if the document
/// is not a valid array of transactions.
pub fn read_json_transactions<R: Read>(input: R) -> Result<Vec<Transaction>, DetectionError> {
    Ok(serde_json::from_reader(BufReader::new(input))?)
}

/// Write results as pretty-printed JSON followed by a newline
///
/// # Errors
///
/// Returns `ExportError` if serialization or writing fails.
pub fn export_results_json<W: Write>(
    results: &[FlaggedResult],
    output: W,
) -> Result<(), DetectionError> {
    let mut writer = BufWriter::new(output);

    serde_json::to_writer_pretty(&mut writer, results)
        .map_err(|e| DetectionError::export_error(e.to_string()))?;
    writeln!(writer).map_err(|e| DetectionError::export_error(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| DetectionError::export_error(e.to_string()))?;

    Ok(())
}

/// Create (or truncate) `path` and export the results into it
///
/// # Errors
///
/// Returns `ExportError` if the file cannot be created or written.
pub fn export_results_to_file(
    results: &[FlaggedResult],
    path: &Path,
) -> Result<(), DetectionError> {
    let file = File::create(path).map_err(|e| {
        DetectionError::export_error(format!("cannot create '{}': {}", path.display(), e))
    })?;

    export_results_json(results, file)
}
