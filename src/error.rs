//! Centralized error type for the mixdoctor umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] mixdoctor_core::Error),

    #[cfg(feature = "analysis")]
    #[error("Analysis: {0}")]
    Analysis(#[from] mixdoctor_analysis::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
