//! Builders shared by the core unit tests

use crate::types::{FlaggedResult, Transaction};
use chrono::{DateTime, FixedOffset, TimeDelta};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

/// Fixed reference instant, `2024-01-01T10:00:00Z`, shifted by `minutes`
pub fn at_minute(minutes: i64) -> DateTime<FixedOffset> {
    at_second(minutes * 60)
}

/// Fixed reference instant, `2024-01-01T10:00:00Z`, shifted by `seconds`
pub fn at_second(seconds: i64) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-01-01T10:00:00Z").unwrap() + TimeDelta::seconds(seconds)
}

/// Build a transaction with a fixed merchant
pub fn tx(id: &str, amount: &str, account: &str, timestamp: DateTime<FixedOffset>) -> Transaction {
    Transaction::new(
        id,
        Decimal::from_str(amount).unwrap(),
        timestamp,
        account,
        "Test Merchant",
    )
}

/// `count` transactions on distinct accounts, one minute apart, none flaggable
/// under the default configuration
pub fn quiet_sequence(count: usize) -> Vec<Transaction> {
    (0..count)
        .map(|i| {
            tx(
                &format!("q{}", i),
                "10",
                &format!("quiet-{}", i),
                at_minute(i as i64),
            )
        })
        .collect()
}

/// Count occurrences of each distinct result, ignoring order
pub fn multiset(results: &[FlaggedResult]) -> HashMap<&FlaggedResult, usize> {
    let mut counts = HashMap::new();
    for result in results {
        *counts.entry(result).or_insert(0) += 1;
    }
    counts
}
