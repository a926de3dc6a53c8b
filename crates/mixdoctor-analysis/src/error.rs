//! Error types for mixdoctor-analysis.

use thiserror::Error;

/// Error type for feature extraction.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Audio buffer is empty")]
    EmptyBuffer,

    #[error("Channel length mismatch: left has {left} samples, right has {right}")]
    ChannelLengthMismatch { left: usize, right: usize },

    #[error("Invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),

    #[error("Invalid extraction config: {0}")]
    InvalidConfig(String),

    #[error("Loudness measurement failed: {0}")]
    Loudness(String),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
