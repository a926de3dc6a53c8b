//! MixDoctor facade that coordinates the subsystems

use crate::core::{AnalysisResult, FeatureBundle, ScoringConfig};
use crate::scoring::ScoringEngine;

#[cfg(feature = "analysis")]
use crate::analysis::FeatureExtractor;
#[cfg(feature = "analysis")]
use crate::Result;
#[cfg(feature = "analysis")]
use tracing::info;

#[cfg(feature = "insights")]
use crate::insights::{InsightExtractor, Insights};

/// Mix quality analyzer.
///
/// Wraps a [`ScoringEngine`] and, depending on enabled Cargo features:
/// - Feature extraction from PCM (feature "analysis")
/// - Free-text insight bucketing (feature "insights")
///
/// # Example
///
/// ```rust
/// use mixdoctor::prelude::*;
///
/// let doctor = MixDoctor::builder().build().unwrap();
///
/// let narrow = FeatureBundle {
///     stereo_width: 0.1,
///     ..FeatureBundle::default()
/// };
/// let result = doctor.score(&narrow);
/// assert!(result.has_stereo_issues);
/// ```
#[derive(Debug, Clone)]
pub struct MixDoctor {
    scoring: ScoringEngine,

    #[cfg(feature = "analysis")]
    extractor: FeatureExtractor,

    #[cfg(feature = "insights")]
    insights: InsightExtractor,
}

impl MixDoctor {
    /// Create a new builder
    pub fn builder() -> crate::MixDoctorBuilder {
        crate::MixDoctorBuilder::default()
    }

    pub(crate) fn from_parts(
        scoring: ScoringEngine,
        #[cfg(feature = "analysis")] extractor: FeatureExtractor,
        #[cfg(feature = "insights")] insights: InsightExtractor,
    ) -> Self {
        Self {
            scoring,
            #[cfg(feature = "analysis")]
            extractor,
            #[cfg(feature = "insights")]
            insights,
        }
    }

    pub fn scoring(&self) -> &ScoringEngine {
        &self.scoring
    }

    pub fn config(&self) -> &ScoringConfig {
        self.scoring.config()
    }

    /// Score pre-extracted features. Never fails.
    pub fn score(&self, features: &FeatureBundle) -> AnalysisResult {
        self.scoring.score(features)
    }

    /// Score many feature bundles in parallel, preserving order.
    pub fn score_batch(&self, features: &[FeatureBundle]) -> Vec<AnalysisResult> {
        self.scoring.score_batch(features)
    }

    #[cfg(feature = "analysis")]
    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    /// Extract features from planar stereo PCM and score them.
    #[cfg(feature = "analysis")]
    pub fn analyze(&self, left: &[f32], right: &[f32], sample_rate: u32) -> Result<AnalysisResult> {
        let features = self.extractor.extract(left, right, sample_rate)?;
        let result = self.scoring.score(&features);
        info!(
            "Analyzed {:.2}s of audio: score {:.1} ({})",
            left.len() as f64 / sample_rate as f64,
            result.overall_score,
            result.rating().label()
        );
        Ok(result)
    }

    /// Extract features from interleaved stereo PCM and score them.
    #[cfg(feature = "analysis")]
    pub fn analyze_interleaved(&self, samples: &[f32], sample_rate: u32) -> Result<AnalysisResult> {
        let features = self.extractor.extract_interleaved(samples, sample_rate)?;
        Ok(self.scoring.score(&features))
    }

    /// Bucket free-text feedback into recommendations, strengths and issues.
    #[cfg(feature = "insights")]
    pub fn insights(&self, text: &str) -> Insights {
        self.insights.extract(text)
    }
}
