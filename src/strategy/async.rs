//! Asynchronous batch detection strategy
//!
//! This module provides a multi-threaded implementation of the
//! DetectionStrategy trait. It builds a tokio runtime and hands the whole
//! transaction sequence to the `BatchScheduler`, which spawns one task per
//! batch.
//!
//! # Architecture
//!
//! ```text
//! AsyncDetectionStrategy
//!     ├── SchedulerConfig (max_concurrent_batches)
//!     └── BatchScheduler (partitioning + one task per batch)
//!         ├── Partitioner
//!         └── RuleEngine (shared read-only across tasks)
//! ```
//!
//! The number of tasks equals the number of batches; `max_concurrent_batches`
//! only bounds how many of them run at the same time (runtime worker threads).

use crate::core::{BatchScheduler, DetectionReport};
use crate::strategy::DetectionStrategy;
use crate::types::{DetectionConfig, DetectionError, Transaction};
use std::sync::Arc;
use tracing::{info, warn};

/// Configuration for the concurrent scheduler
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Maximum number of batches evaluated in parallel (runtime worker threads)
    pub max_concurrent_batches: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl SchedulerConfig {
    /// Create a new SchedulerConfig, falling back to the default for zero
    pub fn new(max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            warn!(
                requested = max_concurrent_batches,
                fallback = default.max_concurrent_batches,
                "invalid max_concurrent_batches, using default"
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch detection strategy
///
/// # Thread Safety
///
/// AsyncDetectionStrategy is Send + Sync. Each call to `detect` builds its own
/// runtime, so concurrent calls do not share workers.
#[derive(Debug, Clone)]
pub struct AsyncDetectionStrategy {
    config: SchedulerConfig,
}

impl AsyncDetectionStrategy {
    /// Create a new AsyncDetectionStrategy with the specified configuration
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }
}

impl DetectionStrategy for AsyncDetectionStrategy {
    /// Run the concurrent fan-out / fan-in pipeline
    ///
    /// The configuration is validated by building the scheduler before the
    /// runtime exists, so a bad configuration never starts any work.
    fn detect(
        &self,
        transactions: Vec<Transaction>,
        config: &DetectionConfig,
    ) -> Result<DetectionReport, DetectionError> {
        let scheduler = BatchScheduler::new(config)?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| DetectionError::RuntimeError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        let transactions: Arc<[Transaction]> = Arc::from(transactions);
        let total = transactions.len();
        let report = runtime.block_on(scheduler.run(transactions));

        info!(
            transactions = total,
            batches = report.batches,
            flagged = report.results.len(),
            failed_batches = report.failures.len(),
            workers = self.config.max_concurrent_batches,
            "concurrent detection finished"
        );

        Ok(report)
    }
}
