//! Rust Fraud Detector CLI
//!
//! Command-line interface for flagging suspicious transactions from CSV or
//! JSON files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv
//! cargo run -- --type json transactions.json
//! cargo run -- --amount 500 --window 10 transactions.csv
//! cargo run -- --strategy sync --format csv transactions.csv > flagged.csv
//! cargo run -- --batch-size 200 --max-concurrent 8 --output flagged.json transactions.csv
//! ```
//!
//! Flagged transactions are written to stdout; logs go to stderr and are
//! controlled with `RUST_LOG` (default `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (bad configuration, unreadable input, failed batch, failed export)

use rust_fraud_detector::cli::{self, CliArgs, OutputFormat};
use rust_fraud_detector::io::{self, export_results_to_file};
use rust_fraud_detector::strategy;
use rust_fraud_detector::DetectionError;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), DetectionError> {
    // Reject bad configuration before touching the input
    let config = args.to_detection_config()?;

    let transactions = io::read_transactions(&args.input_file, args.input_format)?;

    let strategy =
        strategy::create_strategy(args.strategy.clone(), Some(args.to_scheduler_config()));
    let report = strategy.detect(transactions, &config)?;

    let mut stdout = std::io::stdout().lock();
    match args.output_format {
        OutputFormat::Table => io::render_table(&report.results, &mut stdout)?,
        OutputFormat::Csv => io::write_results_csv(&report.results, &mut stdout)?,
    }

    let mut outcome = Ok(());

    if let Some(path) = &args.output_file {
        match export_results_to_file(&report.results, path) {
            Ok(()) => eprintln!("\nResults exported to {}", path.display()),
            Err(e) => outcome = Err(e),
        }
    }

    for failure in &report.failures {
        error!(batch_index = failure.batch_index, error = %failure.error, "batch failed");
    }
    if let Some(failure) = report.failures.into_iter().next() {
        return Err(failure.error);
    }

    outcome
}
