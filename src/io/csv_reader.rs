//! CSV transaction reader with iterator interface
//!
//! Provides a streaming iterator over transactions from a CSV source.
//! Delegates field conversion to the csv_format module.
//!
//! # Design
//!
//! The reader requires a header row naming the columns `id`, `amount`,
//! `timestamp`, `account_id` and `merchant` (in any order; extra columns are
//! ignored). Each data row is read into a reusable `StringRecord`,
//! deserialized into a `CsvRecord` and converted into a `Transaction`.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, unreadable header) are returned from the
//!   constructors
//! - Individual row errors are yielded as `MalformedTransaction` with the
//!   1-based line number of the offending row
//!
//! ```no_run
//! use rust_fraud_detector::io::CsvTransactionReader;
//! use std::path::Path;
//!
//! let reader = CsvTransactionReader::from_path(Path::new("transactions.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(tx) => println!("{} {}", tx.id, tx.amount),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::io::open_input;
use crate::types::{DetectionError, Transaction};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// CSV transaction reader
#[derive(Debug)]
pub struct CsvTransactionReader<R> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    record: StringRecord,
}

impl CsvTransactionReader<File> {
    /// Open a CSV file for streaming iteration
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the path does not exist, `IoError` for other
    /// open failures, and `MalformedTransaction` if the header row is invalid.
    pub fn from_path(path: &Path) -> Result<Self, DetectionError> {
        Self::from_reader(open_input(path)?)
    }
}

impl<R: Read> CsvTransactionReader<R> {
    /// Wrap any reader producing CSV text
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (short rows surface as missing fields)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Errors
    ///
    /// Returns `MalformedTransaction` if the header row cannot be read.
    pub fn from_reader(input: R) -> Result<Self, DetectionError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(input);

        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }
}

impl<R: Read> Iterator for CsvTransactionReader<R> {
    type Item = Result<Transaction, DetectionError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
            Ok(true) => {
                let line = self.record.position().map(|pos| pos.line());

                Some(
                    self.record
                        .deserialize::<CsvRecord>(Some(&self.headers))
                        .map_err(|e| e.to_string())
                        .and_then(convert_csv_record)
                        .map_err(|message| DetectionError::malformed_transaction(line, message)),
                )
            }
        }
    }
}

/// Load every transaction of a CSV file, failing on the first malformed row
///
/// # Errors
///
/// Any error from [`CsvTransactionReader::from_path`] or from a row.
pub fn read_csv_transactions(path: &Path) -> Result<Vec<Transaction>, DetectionError> {
    CsvTransactionReader::from_path(path)?.collect()
}
