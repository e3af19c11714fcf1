//! Transaction and flagged-result types for the fraud detector
//!
//! This module defines the input record the engine evaluates and the output
//! record produced whenever a detection rule fires.

use chrono::{DateTime, FixedOffset};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account identifier
///
/// Opaque string; two transactions belong to the same account when their
/// identifiers compare equal byte for byte.
pub type AccountId = String;

/// A single financial transaction
///
/// Values are constructed by the I/O layer and never mutated by the engine.
/// Nothing here is validated: identifiers need not be unique, amounts may be
/// zero or negative and timestamps need not be ordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction identifier (opaque, not required to be unique)
    pub id: String,

    /// Transaction amount, exported as a JSON number
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub amount: Decimal,

    /// Instant the transaction happened, including its UTC offset
    pub timestamp: DateTime<FixedOffset>,

    /// Account the transaction was made on
    pub account_id: AccountId,

    /// Merchant name
    pub merchant: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: impl Into<String>,
        amount: Decimal,
        timestamp: DateTime<FixedOffset>,
        account_id: impl Into<AccountId>,
        merchant: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            timestamp,
            account_id: account_id.into(),
            merchant: merchant.into(),
        }
    }
}

/// Render an amount rounded to exactly two decimal places
///
/// Halves round away from zero, so `60.005` becomes `60.01`. A value that
/// rounds to zero prints as `0.00`, never `-0.00`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("{:.2}", rounded)
}

/// Detection rule that produced a flagged result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Amount strictly above the configured threshold
    HighAmount,

    /// Two transactions on one account inside the time window
    RapidSuccession,
}

impl RuleKind {
    /// Stable machine-readable name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::HighAmount => "high_amount",
            RuleKind::RapidSuccession => "rapid_succession",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction flagged by one detection rule
///
/// Results carry their own copy of the transaction and have no identity
/// beyond their content. Duplicates are expected: a transaction flagged by
/// both rules, or part of several rapid pairs, appears once per trigger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlaggedResult {
    /// The flagged transaction
    pub transaction: Transaction,

    /// Rule that fired
    pub rule: RuleKind,

    /// Human-readable explanation including the measured value
    pub reason: String,
}

impl FlaggedResult {
    /// Create a result for `transaction` flagged by `rule`
    pub fn new(transaction: &Transaction, rule: RuleKind, reason: String) -> Self {
        Self {
            transaction: transaction.clone(),
            rule,
            reason,
        }
    }
}
