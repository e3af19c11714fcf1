//! Core detection logic module
//!
//! This module contains the detection components, leaves first:
//! - `traits` - The `Rule` abstraction evaluated by the engine
//! - `partitioner` - Fixed-size contiguous batching of the input
//! - `rules` - High-amount and rapid-succession rules
//! - `engine` - Pure evaluation of all rules over one batch
//! - `report` - Merged outcome of a run
//! - `scheduler` - Concurrent fan-out / fan-in over all batches

pub mod engine;
pub mod partitioner;
pub mod report;
pub mod rules;
pub mod scheduler;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_utils;

pub use engine::RuleEngine;
pub use partitioner::Partitioner;
pub use report::{BatchFailure, DetectionReport};
pub use rules::{HighAmountRule, RapidSuccessionRule};
pub use scheduler::BatchScheduler;
pub use traits::Rule;
