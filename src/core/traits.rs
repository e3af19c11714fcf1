//! Core traits for detection rules
//!
//! This module defines the seam between the rule engine and the individual
//! detection rules, so the engine can evaluate any set of rules in a single
//! pass over a batch.

use crate::types::{FlaggedResult, RuleKind, Transaction};

/// A detection rule evaluated position by position over one batch
///
/// Implementations must be pure: no I/O, no interior mutability, and the same
/// output for the same batch. They are shared across concurrent batch workers.
pub trait Rule: Send + Sync + std::fmt::Debug {
    /// Which rule this is
    fn kind(&self) -> RuleKind;

    /// Evaluate the rule for the transaction at `position` within `batch`
    ///
    /// Rules may look at any other position in the same batch but never
    /// outside it. Flagged results are appended to `out` in encounter order.
    fn evaluate_at(&self, batch: &[Transaction], position: usize, out: &mut Vec<FlaggedResult>);
}
