//! Outcome of one detection run

use crate::types::{DetectionError, FlaggedResult, RuleKind};

/// A batch whose worker did not complete
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    /// Position of the batch in partition order
    pub batch_index: usize,

    /// What went wrong
    pub error: DetectionError,
}

/// Merged output of every batch of a detection run
///
/// `results` holds the flagged results of every batch that completed.
/// Results of one batch keep their relative order; the interleaving of
/// different batches is unspecified. Batches that failed are listed in
/// `failures` and contribute no results, without affecting other batches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionReport {
    /// Flagged results from all completed batches
    pub results: Vec<FlaggedResult>,

    /// Side channel of batches that did not complete
    pub failures: Vec<BatchFailure>,

    /// Number of batches the input was partitioned into
    pub batches: usize,
}

impl DetectionReport {
    /// Create an empty report for a run over `batches` batches
    pub fn with_batches(batches: usize) -> Self {
        Self {
            batches,
            ..Self::default()
        }
    }

    /// Append the results of one completed batch
    pub fn merge_batch(&mut self, results: Vec<FlaggedResult>) {
        self.results.extend(results);
    }

    /// Record a batch that did not complete
    pub fn record_failure(&mut self, batch_index: usize, error: DetectionError) {
        self.failures.push(BatchFailure { batch_index, error });
    }

    /// True when every batch completed
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of results produced by `rule`
    pub fn count_by_rule(&self, rule: RuleKind) -> usize {
        self.results.iter().filter(|r| r.rule == rule).count()
    }
}
