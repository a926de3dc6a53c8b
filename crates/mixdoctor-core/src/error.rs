//! Error types for mixdoctor-core.

use thiserror::Error;

/// Error type for mixdoctor-core operations.
///
/// Scoring itself never fails; these errors come from building or loading
/// a [`ScoringConfig`](crate::ScoringConfig).
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid score weights: sum is {sum}, expected 1.0")]
    InvalidWeights { sum: f32 },

    #[cfg(feature = "serialization")]
    #[error("Config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
