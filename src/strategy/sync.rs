//! Synchronous detection strategy
//!
//! Evaluates batches one after another on the calling thread. Partitioning is
//! identical to the async strategy, so the result multiset is identical too;
//! only the order differs, and here it is fully deterministic (batch order,
//! then encounter order within each batch).

use crate::core::{DetectionReport, Partitioner, RuleEngine};
use crate::strategy::DetectionStrategy;
use crate::types::{DetectionConfig, DetectionError, Transaction};
use tracing::{debug, info};

/// Synchronous detection strategy
///
/// # Examples
///
/// ```
/// use rust_fraud_detector::strategy::{DetectionStrategy, SyncDetectionStrategy};
/// use rust_fraud_detector::DetectionConfig;
///
/// let report = SyncDetectionStrategy
///     .detect(Vec::new(), &DetectionConfig::default())
///     .unwrap();
/// assert!(report.results.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncDetectionStrategy;

impl DetectionStrategy for SyncDetectionStrategy {
    fn detect(
        &self,
        transactions: Vec<Transaction>,
        config: &DetectionConfig,
    ) -> Result<DetectionReport, DetectionError> {
        let partitioner = Partitioner::new(config.batch_size())?;
        let engine = RuleEngine::from_config(config);

        let batches = partitioner.split(&transactions);
        let mut report = DetectionReport::with_batches(batches.len());

        for (batch_index, batch) in batches.into_iter().enumerate() {
            let results = engine.evaluate_batch(batch);
            debug!(batch_index, flagged = results.len(), "batch completed");
            report.merge_batch(results);
        }

        info!(
            transactions = transactions.len(),
            batches = report.batches,
            flagged = report.results.len(),
            "sequential detection finished"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_utils::{at_minute, quiet_sequence, tx};
    use crate::types::RuleKind;
    use rust_decimal::Decimal;

    #[test]
    fn test_sync_strategy_flags_high_amount() {
        let report = SyncDetectionStrategy
            .detect(
                vec![tx("t1", "1500", "acc", at_minute(0))],
                &DetectionConfig::default(),
            )
            .unwrap();

        assert_eq!(report.results.len(), 1);
        assert_eq!(report.count_by_rule(RuleKind::HighAmount), 1);
    }

    #[test]
    fn test_sync_strategy_output_is_in_batch_order() {
        let config = DetectionConfig::with_window_minutes(Decimal::from(100), 5, 2).unwrap();
        let transactions = vec![
            tx("t1", "500", "a", at_minute(0)),
            tx("t2", "1", "b", at_minute(0)),
            tx("t3", "600", "c", at_minute(0)),
            tx("t4", "700", "d", at_minute(0)),
            tx("t5", "800", "e", at_minute(0)),
        ];

        let report = SyncDetectionStrategy.detect(transactions, &config).unwrap();
        let ids: Vec<&str> = report
            .results
            .iter()
            .map(|r| r.transaction.id.as_str())
            .collect();

        assert_eq!(report.batches, 3);
        assert_eq!(ids, vec!["t1", "t3", "t4", "t5"]);
    }

    #[test]
    fn test_sync_strategy_misses_boundary_pair() {
        let mut transactions = quiet_sequence(150);
        transactions[99] = tx("left", "50", "shared", at_minute(0));
        transactions[100] = tx("right", "60", "shared", at_minute(1));

        let report = SyncDetectionStrategy
            .detect(transactions, &DetectionConfig::default())
            .unwrap();

        assert_eq!(report.batches, 2);
        assert!(report.results.is_empty());
    }

    #[test]
    fn test_sync_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncDetectionStrategy>();
    }
}
