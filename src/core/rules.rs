//! Detection rules
//!
//! Two rules are provided:
//!
//! - [`HighAmountRule`]: flags a transaction whose amount strictly exceeds a
//!   threshold.
//! - [`RapidSuccessionRule`]: flags both sides of every same-account pair in a
//!   batch whose timestamps are strictly between zero and the window apart.
//!
//! Both rules only ever see one batch. The rapid-succession scan compares each
//! position with every later position of the same batch (O(batch²)) and is
//! defined over position order, not timestamp order.

use crate::core::traits::Rule;
use crate::types::{format_amount, FlaggedResult, RuleKind, Transaction};
use chrono::TimeDelta;
use rust_decimal::Decimal;
use std::fmt::Display;

/// Flags transactions with `amount > threshold`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighAmountRule {
    threshold: Decimal,
}

impl HighAmountRule {
    /// Create the rule with the given threshold
    pub fn new(threshold: Decimal) -> Self {
        Self { threshold }
    }

    /// Check a single transaction
    ///
    /// Strictly greater-than: an amount equal to the threshold is not flagged.
    pub fn check(&self, transaction: &Transaction) -> Option<FlaggedResult> {
        (transaction.amount > self.threshold).then(|| {
            FlaggedResult::new(
                transaction,
                RuleKind::HighAmount,
                format!("High amount: ${}", format_amount(transaction.amount)),
            )
        })
    }
}

impl Rule for HighAmountRule {
    fn kind(&self) -> RuleKind {
        RuleKind::HighAmount
    }

    fn evaluate_at(&self, batch: &[Transaction], position: usize, out: &mut Vec<FlaggedResult>) {
        if let Some(result) = batch.get(position).and_then(|tx| self.check(tx)) {
            out.push(result);
        }
    }
}

/// Flags pairs of same-account transactions less than `window` apart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RapidSuccessionRule {
    window: TimeDelta,
}

impl RapidSuccessionRule {
    /// Create the rule with the given window
    pub fn new(window: TimeDelta) -> Self {
        Self { window }
    }

    /// Check one ordered pair, `earlier` preceding `later` in the batch
    ///
    /// Returns the two results (earlier first) when both transactions share an
    /// account and `0 < later.timestamp - earlier.timestamp < window`. A zero or
    /// negative difference never matches, so out-of-order timestamps suppress
    /// the pair entirely.
    pub fn check_pair(
        &self,
        earlier: &Transaction,
        later: &Transaction,
    ) -> Option<[FlaggedResult; 2]> {
        if earlier.account_id != later.account_id {
            return None;
        }

        let elapsed = later.timestamp.signed_duration_since(earlier.timestamp);
        if elapsed <= TimeDelta::zero() || elapsed >= self.window {
            return None;
        }

        let elapsed = format_elapsed(elapsed);
        Some([
            FlaggedResult::new(
                earlier,
                RuleKind::RapidSuccession,
                format!(
                    "Rapid transaction: {} later with ${}",
                    elapsed,
                    format_amount(later.amount)
                ),
            ),
            FlaggedResult::new(
                later,
                RuleKind::RapidSuccession,
                format!(
                    "Rapid transaction: following ${} after {}",
                    format_amount(earlier.amount),
                    elapsed
                ),
            ),
        ])
    }
}

impl Rule for RapidSuccessionRule {
    fn kind(&self) -> RuleKind {
        RuleKind::RapidSuccession
    }

    fn evaluate_at(&self, batch: &[Transaction], position: usize, out: &mut Vec<FlaggedResult>) {
        let Some(earlier) = batch.get(position) else {
            return;
        };

        for later in &batch[position + 1..] {
            if let Some(pair) = self.check_pair(earlier, later) {
                out.extend(pair);
            }
        }
    }
}

/// Render a duration compactly, e.g. `2m0s`, `1h30m0s`, `1.5s`, `250ms`
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let sign = if elapsed < TimeDelta::zero() { "-" } else { "" };
    let elapsed = elapsed.abs();

    let total_secs = elapsed.num_seconds();
    let nanos = elapsed.subsec_nanos().unsigned_abs();

    if total_secs == 0 {
        return match nanos {
            0 => "0s".to_string(),
            1..=999 => format!("{}{}ns", sign, nanos),
            1_000..=999_999 => format!("{}{}µs", sign, with_fraction(nanos / 1_000, nanos % 1_000, 3)),
            _ => format!(
                "{}{}ms",
                sign,
                with_fraction(nanos / 1_000_000, nanos % 1_000_000, 6)
            ),
        };
    }

    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = with_fraction(total_secs % 60, nanos, 9);

    if hours > 0 {
        format!("{}{}h{}m{}s", sign, hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}{}m{}s", sign, minutes, seconds)
    } else {
        format!("{}{}s", sign, seconds)
    }
}

fn with_fraction(whole: impl Display, fraction: u32, digits: usize) -> String {
    if fraction == 0 {
        return whole.to_string();
    }

    let fraction = format!("{:0width$}", fraction, width = digits);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}
