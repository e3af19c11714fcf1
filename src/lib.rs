//! Rust Fraud Detector Library
//! # Overview
//!
//! This library flags suspicious financial transactions with two heuristics,
//! evaluated over fixed-size batches that run concurrently.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, FlaggedResult, DetectionConfig, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Detection components:
//!   - [`core::partitioner`] - Contiguous fixed-size batching
//!   - [`core::rules`] - High-amount and rapid-succession rules
//!   - [`core::engine`] - Pure evaluation of all rules over one batch
//!   - [`core::scheduler`] - One task per batch, merged into a single report
//! - [`strategy`] - Sequential or concurrent execution, selectable at runtime
//! - [`io`] - CSV/JSON input, table/CSV display and JSON export
//!
//! # Rules
//!
//! - **High amount**: `amount > threshold` (strict)
//! - **Rapid succession**: two transactions on the same account in the same
//!   batch, the later one (by position) strictly between zero and the window
//!   after the earlier one. Both transactions are flagged.
//!
//! # Batch Boundaries
//!
//! Rapid-succession pairs are only compared within one batch. A qualifying
//! pair split across two batches is not flagged, so the batch size is part of
//! the detection semantics.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{BatchScheduler, DetectionReport, Partitioner, RuleEngine};
pub use io::{read_transactions, render_table, write_results_csv};
pub use types::{DetectionConfig, DetectionError, FlaggedResult, RuleKind, Transaction};
