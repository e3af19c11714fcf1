//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Transaction and flagged-result types
//! - `config`: Validated detection configuration
//! - `error`: Error types for the fraud detector

pub mod config;
pub mod error;
pub mod transaction;

pub use config::DetectionConfig;
pub use error::DetectionError;
pub use transaction::{format_amount, AccountId, FlaggedResult, RuleKind, Transaction};
