//! Detection strategy module
//!
//! This module defines the Strategy pattern for running a complete detection
//! pass over an in-memory transaction sequence. This allows different
//! execution models (sequential, concurrent batch) to be selected at runtime
//! while producing the same result multiset for the same input.

use crate::cli::StrategyType;
use crate::core::DetectionReport;
use crate::types::{DetectionConfig, DetectionError, Transaction};

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncDetectionStrategy, SchedulerConfig};
pub use sync::SyncDetectionStrategy;

/// Detection strategy trait
///
/// Each strategy partitions `transactions` with `config.batch_size()`,
/// evaluates every batch with the rule engine and merges the output.
pub trait DetectionStrategy: Send + Sync {
    /// Run detection over the full transaction sequence
    ///
    /// # Arguments
    ///
    /// * `transactions` - Ordered transaction sequence
    /// * `config` - Validated detection configuration
    ///
    /// # Returns
    ///
    /// * `Ok(DetectionReport)` once every batch has been evaluated
    /// * `Err(DetectionError)` if the run could not be started
    ///
    /// # Errors
    ///
    /// Returns an error if the execution environment (e.g. the async runtime)
    /// cannot be created. Batch-level failures are reported inside the
    /// `DetectionReport`, not as an error.
    fn detect(
        &self,
        transactions: Vec<Transaction>,
        config: &DetectionConfig,
    ) -> Result<DetectionReport, DetectionError>;
}

/// Create a detection strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of strategy to create (Sync or Async)
/// * `config` - Optional scheduler configuration (ignored for sync)
///
/// # Returns
///
/// A boxed trait object implementing the DetectionStrategy trait
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<SchedulerConfig>,
) -> Box<dyn DetectionStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncDetectionStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncDetectionStrategy::new(config))
        }
    }
}
