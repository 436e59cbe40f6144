//! Error types
//!
//! The matching core itself never fails; these cover loading configuration
//! and the caller-level checks made before an analysis run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Alias rule {index} has no trigger keywords")]
    EmptyTrigger { index: usize },

    #[error("Alias rule {index} has no aliases")]
    EmptyAliases { index: usize },

    #[error("Threshold {name} must be within 0.0..=1.0, got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No inventory provided")]
    NoInventory,

    #[error("No recipes provided")]
    NoRecipes,
}
