//! Builder for configuring and constructing a `MixDoctor`.

use crate::core::ScoringConfig;
use crate::scoring::ScoringEngine;
use crate::{MixDoctor, Result};

#[cfg(feature = "analysis")]
use crate::analysis::{ExtractionConfig, FeatureExtractor};

#[cfg(feature = "insights")]
use crate::insights::InsightExtractor;

/// Subsystems (feature extraction, text insights) are enabled when their
/// corresponding Cargo features are compiled.
///
/// # Example
///
/// ```rust
/// use mixdoctor::prelude::*;
///
/// let mut config = ScoringConfig::default();
/// config.max_recommendations = 4;
///
/// let doctor = MixDoctor::builder().config(config).build().unwrap();
/// assert_eq!(doctor.config().max_recommendations, 4);
/// ```
#[derive(Default)]
pub struct MixDoctorBuilder {
    config: ScoringConfig,
    engine: Option<ScoringEngine>,

    #[cfg(feature = "analysis")]
    extraction: ExtractionConfig,

    #[cfg(feature = "insights")]
    insight_extractor: Option<InsightExtractor>,
}

impl MixDoctorBuilder {
    /// Scoring thresholds, weights and caps. Ignored when
    /// [`scoring_engine`](Self::scoring_engine) is set.
    pub fn config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a pre-built engine, e.g. one with model-backed classifiers.
    pub fn scoring_engine(mut self, engine: ScoringEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    #[cfg(feature = "analysis")]
    pub fn extraction(mut self, config: ExtractionConfig) -> Self {
        self.extraction = config;
        self
    }

    #[cfg(feature = "insights")]
    pub fn insight_extractor(mut self, extractor: InsightExtractor) -> Self {
        self.insight_extractor = Some(extractor);
        self
    }

    pub fn build(self) -> Result<MixDoctor> {
        let scoring = match self.engine {
            Some(engine) => engine,
            None => ScoringEngine::builder().config(self.config).build()?,
        };

        #[cfg(feature = "analysis")]
        let extractor = FeatureExtractor::new(self.extraction)?;

        #[cfg(feature = "insights")]
        let insights = self.insight_extractor.unwrap_or_default();

        Ok(MixDoctor::from_parts(
            scoring,
            #[cfg(feature = "analysis")]
            extractor,
            #[cfg(feature = "insights")]
            insights,
        ))
    }
}
