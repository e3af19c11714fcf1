//! Detection configuration
//!
//! Holds the rule thresholds and the batch size used to partition input.
//! A `DetectionConfig` can only be built through [`DetectionConfig::new`],
//! which rejects out-of-range values, so every engine component may assume
//! the values are valid.

use crate::types::DetectionError;
use chrono::TimeDelta;
use rust_decimal::Decimal;

/// Default high-amount threshold
pub const DEFAULT_HIGH_AMOUNT_THRESHOLD: Decimal = Decimal::ONE_THOUSAND;

/// Default rapid-succession window, in minutes
pub const DEFAULT_TIME_WINDOW_MINUTES: i64 = 5;

/// Default number of transactions per batch
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Immutable configuration for one detection run
///
/// Shared read-only by every concurrent batch worker.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionConfig {
    high_amount_threshold: Decimal,
    time_window: TimeDelta,
    batch_size: usize,
}

impl DetectionConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::InvalidConfiguration` if `batch_size` is zero
    /// or `time_window` is zero or negative.
    pub fn new(
        high_amount_threshold: Decimal,
        time_window: TimeDelta,
        batch_size: usize,
    ) -> Result<Self, DetectionError> {
        if batch_size == 0 {
            return Err(DetectionError::invalid_configuration(
                "batch_size",
                "must be greater than zero",
            ));
        }

        if time_window <= TimeDelta::zero() {
            return Err(DetectionError::invalid_configuration(
                "time_window",
                format!("must be positive, got {}", time_window),
            ));
        }

        Ok(Self {
            high_amount_threshold,
            time_window,
            batch_size,
        })
    }

    /// Build a configuration from a window expressed in whole minutes
    ///
    /// # Errors
    ///
    /// Same as [`DetectionConfig::new`], plus an out-of-range minute count.
    pub fn with_window_minutes(
        high_amount_threshold: Decimal,
        window_minutes: i64,
        batch_size: usize,
    ) -> Result<Self, DetectionError> {
        let time_window = TimeDelta::try_minutes(window_minutes).ok_or_else(|| {
            DetectionError::invalid_configuration(
                "time_window",
                format!("{} minutes is out of range", window_minutes),
            )
        })?;

        Self::new(high_amount_threshold, time_window, batch_size)
    }

    /// Amount a transaction must strictly exceed to be flagged
    pub fn high_amount_threshold(&self) -> Decimal {
        self.high_amount_threshold
    }

    /// Exclusive upper bound on the gap between two rapid transactions
    pub fn time_window(&self) -> TimeDelta {
        self.time_window
    }

    /// Maximum number of transactions per batch
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            high_amount_threshold: DEFAULT_HIGH_AMOUNT_THRESHOLD,
            time_window: TimeDelta::minutes(DEFAULT_TIME_WINDOW_MINUTES),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_values() {
        let config = DetectionConfig::default();
        assert_eq!(config.high_amount_threshold(), Decimal::from(1000));
        assert_eq!(config.time_window(), TimeDelta::minutes(5));
        assert_eq!(config.batch_size(), 100);
    }

    #[rstest]
    #[case::zero_batch_size(0, TimeDelta::minutes(5), "batch_size")]
    #[case::zero_window(100, TimeDelta::zero(), "time_window")]
    #[case::negative_window(100, TimeDelta::seconds(-30), "time_window")]
    fn test_invalid_configuration(
        #[case] batch_size: usize,
        #[case] window: TimeDelta,
        #[case] expected_parameter: &str,
    ) {
        let result = DetectionConfig::new(Decimal::from(1000), window, batch_size);
        match result {
            Err(DetectionError::InvalidConfiguration { parameter, .. }) => {
                assert_eq!(parameter, expected_parameter)
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[rstest]
    #[case::zero_minutes(0)]
    #[case::negative_minutes(-5)]
    #[case::overflowing_minutes(i64::MAX)]
    fn test_with_window_minutes_rejects(#[case] minutes: i64) {
        let result = DetectionConfig::with_window_minutes(Decimal::from(1000), minutes, 100);
        assert!(matches!(
            result,
            Err(DetectionError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_with_window_minutes_accepts_positive() {
        let config = DetectionConfig::with_window_minutes(Decimal::from(250), 10, 7).unwrap();
        assert_eq!(config.time_window(), TimeDelta::minutes(10));
        assert_eq!(config.batch_size(), 7);
        assert_eq!(config.high_amount_threshold(), Decimal::from(250));
    }
}
