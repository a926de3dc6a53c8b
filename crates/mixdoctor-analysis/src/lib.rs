//! # MixDoctor Analysis
//!
//! Feature extraction from stereo PCM for mix scoring.
//!
//! This crate provides:
//! - **Stereo correlation**: phase correlation, width, balance and mid/side levels
//! - **Band energy**: FFT power spectrum binned into five scoring bands
//! - **Levels**: sample peak, RMS, crest factor and short-term block levels
//! - **Loudness**: EBU R128 integrated loudness and true peak
//! - **Cohesion estimates**: five 0-100 sub-scores derived from the above
//!
//! All functions operate on raw `&[f32]` sample buffers. Decoding audio
//! files is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use mixdoctor_analysis::{correlation::analyze_stereo, FeatureExtractor};
//!
//! let left: Vec<f32> = (0..48_000).map(|i| (i as f32 * 0.05).sin() * 0.5).collect();
//! let right = left.clone();
//!
//! let stereo = analyze_stereo(&left, &right);
//! assert!(stereo.is_mono());
//!
//! let features = FeatureExtractor::default().extract(&left, &right, 48_000).unwrap();
//! assert!(features.loudness_lufs < 0.0);
//! ```

pub mod cohesion;
pub mod config;
pub mod correlation;
pub mod error;
pub mod levels;
pub mod loudness;
pub mod spectrum;

mod extractor;

pub use cohesion::estimate_cohesion;
pub use config::ExtractionConfig;
pub use correlation::{analyze_stereo, analyze_stereo_interleaved, StereoAnalysis};
pub use error::{Error, Result};
pub use extractor::FeatureExtractor;
pub use levels::{analyze_levels, LevelAnalysis};
pub use loudness::{analyze_loudness, LoudnessAnalysis};
pub use spectrum::{analyze_bands, band_entropy};
