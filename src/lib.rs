//! # MixDoctor - Mix Quality Scoring
//!
//! Scores a stereo mix from a handful of measured features and explains
//! the score with an issue list and fixed recommendation texts.
//!
//! ## Architecture
//!
//! MixDoctor is an umbrella crate that coordinates:
//! - **mixdoctor-core** - Feature bundle, scoring configuration, result types
//! - **mixdoctor-scoring** - Classifiers, overall score aggregation, recommendations
//! - **mixdoctor-analysis** - Feature extraction from PCM (correlation, FFT bands, LUFS)
//! - **mixdoctor-insights** - Optional free-text feedback bucketing
//!
//! ## Quick Start
//!
//! ```rust
//! use mixdoctor::prelude::*;
//!
//! let doctor = MixDoctor::builder().build().unwrap();
//!
//! let features = FeatureBundle {
//!     correlation: -0.3,
//!     dynamic_range: 3.0,
//!     ..FeatureBundle::default()
//! };
//!
//! let result = doctor.score(&features);
//! println!("{:.0}/100 ({})", result.overall_score, result.rating().label());
//! for rec in &result.recommendations {
//!     println!("- {rec}");
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - Scoring plus feature extraction
//! - `full` - Everything enabled
//! - `analysis` - Feature extraction from PCM
//! - `insights` - Free-text insight bucketing
//! - `serialization` - serde on configs and results, JSON loading

/// Re-export of mixdoctor-core for direct access
pub use mixdoctor_core as core;

/// Re-export of mixdoctor-scoring for direct access
pub use mixdoctor_scoring as scoring;

// Core types
pub use mixdoctor_core::{
    AnalysisResult, Band, BandRatios, CohesionGrade, CohesionInputs, DimensionScores,
    FeatureBundle, Issue, IssueKind, IssueSeverity, IssueTier, ScoreRating, ScoreWeights,
    ScoringConfig, VerdictSummary,
};

// Scoring
pub use mixdoctor_scoring::{Classifier, ClassifierOutputs, ScoringEngine, ScoringEngineBuilder, Verdict};

// Analysis tools
#[cfg(feature = "analysis")]
pub use mixdoctor_analysis as analysis;

#[cfg(feature = "analysis")]
pub use mixdoctor_analysis::{ExtractionConfig, FeatureExtractor, StereoAnalysis};

// Text insights
#[cfg(feature = "insights")]
pub use mixdoctor_insights as insights;

#[cfg(feature = "insights")]
pub use mixdoctor_insights::{InsightExtractor, Insights};

mod builder;
mod engine;
mod error;

pub use builder::MixDoctorBuilder;
pub use engine::MixDoctor;
pub use error::{Error, Result};

/// Convenience prelude for common imports
pub mod prelude {
    // Main facade
    pub use crate::{MixDoctor, MixDoctorBuilder};

    // Essential types
    pub use crate::core::{AnalysisResult, FeatureBundle, IssueKind, ScoringConfig};

    // Scoring
    pub use crate::scoring::{Classifier, ScoringEngine};

    // Analysis
    #[cfg(feature = "analysis")]
    pub use crate::analysis::FeatureExtractor;

    // Insights
    #[cfg(feature = "insights")]
    pub use crate::insights::InsightExtractor;
}
