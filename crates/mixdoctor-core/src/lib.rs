//! # MixDoctor Core
//!
//! Shared value types for mix quality scoring:
//! - **Feature bundle**: scalar audio features of one file (stereo, spectral, level, cohesion)
//! - **Scoring configuration**: thresholds, band calibration, weights, issue tiers
//! - **Analysis result**: overall score, per-dimension scores, flags, issues, recommendations
//!
//! No audio processing happens here. Features are produced by an extractor
//! (`mixdoctor-analysis`) and scored by `mixdoctor-scoring`.

pub mod config;
pub mod error;
pub mod features;
pub mod result;
pub mod sanitize;
pub mod verdict;

pub use config::{
    BandTarget, CohesionBands, DynamicsThresholds, FrequencyCalibration, IssuePolicy,
    LenientThresholds, PhaseThresholds, ScoreWeights, ScoringConfig, StereoThresholds,
};
pub use error::{Error, Result};
pub use features::{
    Band, BandRatios, CohesionInputs, FeatureBundle, LEVEL_CEILING_DB, LEVEL_FLOOR_DB,
    LOUDNESS_FLOOR_LUFS, MAX_MID_SIDE_RATIO, NEUTRAL_BAND_RATIO, NEUTRAL_COHESION,
    NEUTRAL_CORRELATION, NEUTRAL_DYNAMIC_RANGE_DB, NEUTRAL_LOUDNESS_LUFS,
};
pub use result::{
    AnalysisResult, DimensionScores, Issue, IssueKind, IssueSeverity, IssueTier, ScoreRating,
};
pub use verdict::{
    BandFlags, BandStatus, CohesionGrade, DynamicRangeClass, LoudnessClass, PhaseSeverity,
    StereoWidthClass, VerdictSummary,
};
