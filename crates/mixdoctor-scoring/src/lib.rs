//! # MixDoctor Scoring
//!
//! Rule-based mix quality classifiers and the aggregator that turns their
//! verdicts into an overall score, an issue list and recommendations.
//!
//! This crate provides:
//! - **Phase**: correlation to severity buckets
//! - **Stereo width**: too narrow / good / too wide
//! - **Frequency balance**: per-band deviation from calibrated ratios
//! - **Dynamics**: dynamic range, loudness, clipping and true-peak checks
//! - **Cohesion**: mean of five cohesion sub-scores with a grade
//! - **Aggregation**: weighted overall score, tiered issues, recommendations
//!
//! Every classifier sits behind the [`Classifier`] trait so a trained model
//! can replace the threshold rules without touching the aggregator.
//!
//! ## Example
//!
//! ```rust
//! use mixdoctor_core::FeatureBundle;
//! use mixdoctor_scoring::ScoringEngine;
//!
//! let engine = ScoringEngine::builder().build().unwrap();
//!
//! let muddy = FeatureBundle {
//!     correlation: -0.4,
//!     ..FeatureBundle::default()
//! };
//! let result = engine.score(&muddy);
//! assert!(result.has_phase_issues);
//! assert!(!result.recommendations.is_empty());
//! ```

pub mod aggregate;
pub mod classifier;
pub mod cohesion;
pub mod dynamics;
pub mod engine;
pub mod frequency;
pub mod issues;
pub mod phase;
pub mod recommend;
pub mod scores;
pub mod stereo;

pub use aggregate::Aggregator;
pub use classifier::{Classifier, Verdict};
pub use cohesion::{Cohesion, CohesionAggregator, CohesionVerdict};
pub use dynamics::{DynamicsAssessment, DynamicsClassifier, DynamicsInput, DynamicsVerdict};
pub use engine::{ScoringEngine, ScoringEngineBuilder};
pub use frequency::{FrequencyBalance, FrequencyBalanceClassifier, FrequencyVerdict};
pub use issues::IssueReporter;
pub use phase::{PhaseClassifier, PhaseVerdict};
pub use recommend::RecommendationGenerator;
pub use stereo::{StereoWidthClassifier, StereoWidthVerdict};

/// One verdict per classifier for a single feature bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierOutputs {
    pub phase: PhaseVerdict,
    pub stereo_width: StereoWidthVerdict,
    pub frequency: FrequencyVerdict,
    pub dynamics: DynamicsVerdict,
    pub cohesion: CohesionVerdict,
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use mixdoctor_core::FeatureBundle;

    /// Verdicts from the default threshold classifiers.
    pub fn outputs_for(bundle: &FeatureBundle) -> ClassifierOutputs {
        let bundle = bundle.sanitized();
        ClassifierOutputs {
            phase: PhaseClassifier::default().classify(bundle.correlation),
            stereo_width: StereoWidthClassifier::default().classify(bundle.stereo_width),
            frequency: FrequencyBalanceClassifier::default().classify(bundle.bands),
            dynamics: DynamicsClassifier::default().classify(DynamicsInput::from_bundle(&bundle)),
            cohesion: CohesionAggregator::default().classify(bundle.cohesion),
        }
    }
}
