use crate::strategy::SchedulerConfig;
use crate::types::config::{
    DEFAULT_BATCH_SIZE, DEFAULT_HIGH_AMOUNT_THRESHOLD, DEFAULT_TIME_WINDOW_MINUTES,
};
use crate::types::{DetectionConfig, DetectionError};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Flag suspicious transactions: high amounts and rapid same-account activity
#[derive(Parser, Debug)]
#[command(name = "fraud-detector")]
#[command(about = "Flag high-amount and rapid-succession transactions", long_about = None)]
pub struct CliArgs {
    /// Input file path containing transaction records
    #[arg(value_name = "INPUT", help = "Path to the input file (CSV or JSON)")]
    pub input_file: PathBuf,

    /// Input file format
    #[arg(
        long = "type",
        value_name = "TYPE",
        default_value = "csv",
        help = "Input file type: 'csv' or 'json'"
    )]
    pub input_format: InputFormat,

    /// High amount threshold
    #[arg(
        long = "amount",
        value_name = "AMOUNT",
        default_value_t = DEFAULT_HIGH_AMOUNT_THRESHOLD,
        help = "Flag transactions with an amount strictly above this value"
    )]
    pub high_amount: Decimal,

    /// Rapid-succession window in minutes
    #[arg(
        long = "window",
        value_name = "MINUTES",
        default_value_t = DEFAULT_TIME_WINDOW_MINUTES,
        allow_negative_numbers = true,
        help = "Time window in minutes for rapid transactions"
    )]
    pub window_minutes: i64,

    /// Number of transactions per batch
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        default_value_t = DEFAULT_BATCH_SIZE,
        help = "Transactions per batch; rapid pairs are only found within one batch"
    )]
    pub batch_size: usize,

    /// Execution strategy
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Execution strategy: 'sync' for sequential or 'async' for concurrent batches"
    )]
    pub strategy: StrategyType,

    /// Maximum number of concurrent batches (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum number of batches evaluated in parallel (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,

    /// Stdout rendering
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "table",
        help = "Output format on stdout: 'table' or 'csv'"
    )]
    pub output_format: OutputFormat,

    /// JSON export destination
    #[arg(
        long = "output",
        value_name = "PATH",
        help = "Also export flagged transactions as JSON to this file"
    )]
    pub output_file: Option<PathBuf>,
}

/// Available execution strategies
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Supported input file formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Csv,
    Json,
}

/// Supported stdout renderings
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
}

impl CliArgs {
    /// Build the validated detection configuration
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::InvalidConfiguration` for a zero batch size
    /// or a non-positive window.
    pub fn to_detection_config(&self) -> Result<DetectionConfig, DetectionError> {
        DetectionConfig::with_window_minutes(self.high_amount, self.window_minutes, self.batch_size)
    }

    /// Create a SchedulerConfig from CLI arguments
    ///
    /// Falls back to the default worker count when none (or zero) is given.
    pub fn to_scheduler_config(&self) -> SchedulerConfig {
        match self.max_concurrent_batches {
            Some(max) => SchedulerConfig::new(max),
            None => SchedulerConfig::default(),
        }
    }
}
