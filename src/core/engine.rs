//! Rule evaluation engine
//!
//! This module provides the RuleEngine that applies every detection rule to a
//! single batch of transactions.
//!
//! The engine is a pure function of the batch and its rules:
//! - No shared mutable state and no I/O
//! - The same batch always yields the same results in the same order
//! - Safe to call from any number of threads at once
//!
//! # Result Order
//!
//! Results are produced in encounter order. For each position `i` the rules
//! run in registration order, so with the default rule set the high-amount
//! result for `i` comes first, followed by every rapid-succession pair
//! `(i, j)` with `j > i`.

use crate::core::rules::{HighAmountRule, RapidSuccessionRule};
use crate::core::traits::Rule;
use crate::types::{DetectionConfig, FlaggedResult, Transaction};
use std::sync::Arc;

/// Rule evaluation engine
///
/// Cloning is cheap: the rule set is shared behind an `Arc` so each batch
/// worker can own a handle.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Arc<[Box<dyn Rule>]>,
}

impl RuleEngine {
    /// Create an engine evaluating the given rules in order
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    /// Create an engine with the high-amount and rapid-succession rules
    pub fn from_config(config: &DetectionConfig) -> Self {
        Self::new(vec![
            Box::new(HighAmountRule::new(config.high_amount_threshold())),
            Box::new(RapidSuccessionRule::new(config.time_window())),
        ])
    }

    /// Rules evaluated by this engine, in evaluation order
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Evaluate every rule against one batch
    ///
    /// # Arguments
    ///
    /// * `batch` - Contiguous transactions in their original relative order
    ///
    /// # Returns
    ///
    /// Flagged results in encounter order. Only pairs inside `batch` are ever
    /// compared.
    pub fn evaluate_batch(&self, batch: &[Transaction]) -> Vec<FlaggedResult> {
        let mut results = Vec::new();

        for position in 0..batch.len() {
            for rule in self.rules.iter() {
                rule.evaluate_at(batch, position, &mut results);
            }
        }

        results
    }
}
