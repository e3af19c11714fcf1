//! Concurrent batch scheduling with fan-out / fan-in
//!
//! This module provides the `BatchScheduler`, which partitions the input and
//! runs the rule engine over every batch in its own tokio task.
//!
//! # Design
//!
//! ```text
//! Arc<[Transaction]> ──► Partitioner ──► ranges
//!                                         │
//!                 ┌───────────────────────┼───────────────────────┐
//!                 ▼                       ▼                       ▼
//!          task(batch 0)           task(batch 1)    ...    task(batch N-1)
//!          RuleEngine              RuleEngine              RuleEngine
//!                 │                       │                       │
//!                 └────────► FuturesUnordered (single reducer) ◄──┘
//!                                         │
//!                                  DetectionReport
//! ```
//!
//! Each worker only reads the shared input and writes into its own `Vec`. The
//! scheduler is the single owner of the merged report and appends one whole
//! batch at a time as tasks complete, so no lock is held on the
//! per-transaction path.
//!
//! # Guarantees
//!
//! - One task per batch; the caller waits until all of them finish
//! - The merged result multiset does not depend on scheduling
//! - Results of a single batch keep their encounter order
//! - A failing worker is reported in `DetectionReport::failures` and does
//!   not affect the results of other batches

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, warn};

use crate::core::engine::RuleEngine;
use crate::core::partitioner::Partitioner;
use crate::core::report::DetectionReport;
use crate::types::{DetectionConfig, DetectionError, Transaction};

/// Fan-out / fan-in scheduler over fixed-size batches
#[derive(Debug, Clone)]
pub struct BatchScheduler {
    partitioner: Partitioner,
    engine: RuleEngine,
}

impl BatchScheduler {
    /// Create a scheduler for the given configuration
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::InvalidConfiguration` if the batch size is zero.
    pub fn new(config: &DetectionConfig) -> Result<Self, DetectionError> {
        Ok(Self::with_engine(
            Partitioner::new(config.batch_size())?,
            RuleEngine::from_config(config),
        ))
    }

    /// Create a scheduler from explicit parts
    pub fn with_engine(partitioner: Partitioner, engine: RuleEngine) -> Self {
        Self {
            partitioner,
            engine,
        }
    }

    /// Run the engine over every batch concurrently and merge the output
    ///
    /// Must be called from within a tokio runtime. Returns once every batch
    /// has completed or failed.
    pub async fn run(&self, transactions: Arc<[Transaction]>) -> DetectionReport {
        let ranges = self.partitioner.ranges(transactions.len());
        let mut report = DetectionReport::with_batches(ranges.len());

        debug!(
            transactions = transactions.len(),
            batches = ranges.len(),
            batch_size = self.partitioner.batch_size(),
            "dispatching batches"
        );

        let mut pending = FuturesUnordered::new();
        for (batch_index, range) in ranges.into_iter().enumerate() {
            let engine = self.engine.clone();
            let transactions = Arc::clone(&transactions);
            let handle =
                tokio::spawn(async move { engine.evaluate_batch(&transactions[range]) });
            pending.push(async move { (batch_index, handle.await) });
        }

        while let Some((batch_index, outcome)) = pending.next().await {
            match outcome {
                Ok(results) => {
                    debug!(batch_index, flagged = results.len(), "batch completed");
                    report.merge_batch(results);
                }
                Err(e) => {
                    warn!(batch_index, error = %e, "batch worker failed");
                    report.record_failure(
                        batch_index,
                        DetectionError::BatchPanicked {
                            message: e.to_string(),
                        },
                    );
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::{HighAmountRule, RapidSuccessionRule};
    use crate::core::test_utils::{at_minute, at_second, multiset, quiet_sequence, tx};
    use crate::core::traits::Rule;
    use crate::types::{FlaggedResult, RuleKind};
    use rust_decimal::Decimal;

    fn scheduler(batch_size: usize) -> BatchScheduler {
        let config = DetectionConfig::with_window_minutes(Decimal::from(1000), 5, batch_size)
            .unwrap();
        BatchScheduler::new(&config).unwrap()
    }

    /// Panics whenever it sees the account "boom"
    #[derive(Debug)]
    struct ExplodingRule;

    impl Rule for ExplodingRule {
        fn kind(&self) -> RuleKind {
            RuleKind::HighAmount
        }

        fn evaluate_at(&self, batch: &[Transaction], position: usize, _: &mut Vec<FlaggedResult>) {
            if batch[position].account_id == "boom" {
                panic!("exploding rule hit position {}", position);
            }
        }
    }

    #[test]
    fn test_new_uses_configured_batch_size() {
        let scheduler = scheduler(7);
        assert_eq!(scheduler.partitioner.batch_size(), 7);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_empty_input() {
        let report = scheduler(100).run(Arc::from(Vec::new())).await;

        assert!(report.results.is_empty());
        assert!(report.is_complete());
        assert_eq!(report.batches, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_pair_across_batch_boundary_is_missed() {
        let mut transactions = quiet_sequence(150);
        transactions[99] = tx("left", "50", "shared", at_second(0));
        transactions[100] = tx("right", "60", "shared", at_second(60));

        let report = scheduler(100).run(Arc::from(transactions)).await;

        assert_eq!(report.batches, 2);
        assert!(report.results.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_same_pair_inside_one_batch_is_found() {
        let mut transactions = quiet_sequence(150);
        transactions[98] = tx("left", "50", "shared", at_second(0));
        transactions[99] = tx("right", "60", "shared", at_second(60));

        let report = scheduler(100).run(Arc::from(transactions)).await;

        assert_eq!(report.results.len(), 2);
        assert_eq!(report.count_by_rule(RuleKind::RapidSuccession), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_matches_sequential_evaluation() {
        let mut transactions = Vec::new();
        for i in 0..57i64 {
            let account = format!("acc-{}", i % 4);
            let amount = if i % 9 == 0 { "2500" } else { "20" };
            transactions.push(tx(&format!("t{}", i), amount, &account, at_second(i * 45)));
        }

        let scheduler = scheduler(10);
        let report = scheduler.run(Arc::from(transactions.clone())).await;

        let engine = RuleEngine::from_config(
            &DetectionConfig::with_window_minutes(Decimal::from(1000), 5, 10).unwrap(),
        );
        let sequential: Vec<FlaggedResult> = transactions
            .chunks(10)
            .flat_map(|batch| engine.evaluate_batch(batch))
            .collect();

        assert_eq!(report.batches, 6);
        assert!(!sequential.is_empty());
        assert_eq!(multiset(&report.results), multiset(&sequential));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_repeated_runs_agree_as_multisets() {
        let transactions: Arc<[Transaction]> = (0..300i64)
            .map(|i| {
                tx(
                    &format!("t{}", i),
                    if i % 7 == 0 { "1200" } else { "15" },
                    &format!("acc-{}", i % 5),
                    at_second(i * 20),
                )
            })
            .collect();

        let scheduler = scheduler(25);
        let first = scheduler.run(Arc::clone(&transactions)).await;
        let second = scheduler.run(transactions).await;

        assert_eq!(first.results.len(), second.results.len());
        assert_eq!(multiset(&first.results), multiset(&second.results));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_intra_batch_order_is_preserved() {
        // One batch per account burst, so each batch's output is contiguous
        let transactions: Vec<Transaction> = vec![
            tx("a1", "5000", "a", at_minute(0)),
            tx("a2", "10", "a", at_minute(1)),
            tx("b1", "5000", "b", at_minute(0)),
            tx("b2", "10", "b", at_minute(1)),
        ];

        let report = scheduler(2).run(Arc::from(transactions)).await;

        for prefix in ["a", "b"] {
            let ids: Vec<(&str, RuleKind)> = report
                .results
                .iter()
                .filter(|r| r.transaction.id.starts_with(prefix))
                .map(|r| (r.transaction.id.as_str(), r.rule))
                .collect();
            let first = format!("{}1", prefix);
            let second = format!("{}2", prefix);
            assert_eq!(
                ids,
                vec![
                    (first.as_str(), RuleKind::HighAmount),
                    (first.as_str(), RuleKind::RapidSuccession),
                    (second.as_str(), RuleKind::RapidSuccession),
                ]
            );
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_failed_batch_is_reported_without_losing_others() {
        let engine = RuleEngine::new(vec![
            Box::new(HighAmountRule::new(Decimal::from(100))),
            Box::new(RapidSuccessionRule::new(chrono::TimeDelta::minutes(5))),
            Box::new(ExplodingRule),
        ]);
        let scheduler = BatchScheduler::with_engine(Partitioner::new(2).unwrap(), engine);

        let transactions = vec![
            tx("ok1", "500", "x", at_minute(0)),
            tx("ok2", "1", "y", at_minute(0)),
            tx("bad", "500", "boom", at_minute(0)),
            tx("ok3", "1", "z", at_minute(0)),
            tx("ok4", "700", "w", at_minute(0)),
        ];

        let report = scheduler.run(Arc::from(transactions)).await;

        assert_eq!(report.batches, 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].batch_index, 1);
        assert!(matches!(
            report.failures[0].error,
            DetectionError::BatchPanicked { .. }
        ));

        let mut ids: Vec<&str> = report
            .results
            .iter()
            .map(|r| r.transaction.id.as_str())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["ok1", "ok4"]);
    }
}
