//! Scoring engine: fan out to the classifiers, join in the aggregator.

use crate::aggregate::Aggregator;
use crate::classifier::Classifier;
use crate::cohesion::{CohesionAggregator, CohesionVerdict};
use crate::dynamics::{DynamicsClassifier, DynamicsInput, DynamicsVerdict};
use crate::frequency::{FrequencyBalanceClassifier, FrequencyVerdict};
use crate::phase::{PhaseClassifier, PhaseVerdict};
use crate::stereo::{StereoWidthClassifier, StereoWidthVerdict};
use crate::ClassifierOutputs;
use mixdoctor_core::{AnalysisResult, BandRatios, CohesionInputs, FeatureBundle, Result, ScoringConfig};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, trace, warn};

pub type SharedPhaseClassifier = Arc<dyn Classifier<Input = f32, Output = PhaseVerdict>>;
pub type SharedStereoWidthClassifier =
    Arc<dyn Classifier<Input = f32, Output = StereoWidthVerdict>>;
pub type SharedFrequencyClassifier =
    Arc<dyn Classifier<Input = BandRatios, Output = FrequencyVerdict>>;
pub type SharedDynamicsClassifier =
    Arc<dyn Classifier<Input = DynamicsInput, Output = DynamicsVerdict>>;
pub type SharedCohesionClassifier =
    Arc<dyn Classifier<Input = CohesionInputs, Output = CohesionVerdict>>;

/// Stateless scoring engine.
///
/// Cheap to clone; every classifier and the configuration are shared
/// read-only, so one engine can score any number of bundles concurrently.
///
/// # Example
///
/// ```rust
/// use mixdoctor_core::FeatureBundle;
/// use mixdoctor_scoring::ScoringEngine;
///
/// let engine = ScoringEngine::builder().build().unwrap();
/// let result = engine.score(&FeatureBundle::default());
/// assert!(result.overall_score >= 85.0);
/// ```
#[derive(Clone)]
pub struct ScoringEngine {
    config: Arc<ScoringConfig>,
    phase: SharedPhaseClassifier,
    stereo_width: SharedStereoWidthClassifier,
    frequency: SharedFrequencyClassifier,
    dynamics: SharedDynamicsClassifier,
    cohesion: SharedCohesionClassifier,
    aggregator: Aggregator,
}

impl std::fmt::Debug for ScoringEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringEngine")
            .field("config", &self.config)
            .field("phase", &self.phase.backend())
            .field("stereo_width", &self.stereo_width.backend())
            .field("frequency", &self.frequency.backend())
            .field("dynamics", &self.dynamics.backend())
            .field("cohesion", &self.cohesion.backend())
            .finish()
    }
}

impl ScoringEngine {
    pub fn builder() -> ScoringEngineBuilder {
        ScoringEngineBuilder::default()
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    /// Run every classifier on `bundle`.
    ///
    /// The five classifiers are independent and run as a fork-join on the
    /// rayon pool.
    pub fn classify_all(&self, bundle: &FeatureBundle) -> ClassifierOutputs {
        let bundle = bundle.sanitized();
        self.classify_sanitized(&bundle)
    }

    fn classify_sanitized(&self, bundle: &FeatureBundle) -> ClassifierOutputs {
        let ((phase, stereo_width), (frequency, (dynamics, cohesion))) = rayon::join(
            || {
                rayon::join(
                    || self.phase.classify(bundle.correlation),
                    || self.stereo_width.classify(bundle.stereo_width),
                )
            },
            || {
                rayon::join(
                    || self.frequency.classify(bundle.bands),
                    || {
                        rayon::join(
                            || self.dynamics.classify(DynamicsInput::from_bundle(bundle)),
                            || self.cohesion.classify(bundle.cohesion),
                        )
                    },
                )
            },
        );

        ClassifierOutputs {
            phase,
            stereo_width,
            frequency,
            dynamics,
            cohesion,
        }
    }

    /// Score one feature bundle. Never fails: invalid features are clamped.
    pub fn score(&self, bundle: &FeatureBundle) -> AnalysisResult {
        let bad = bundle.non_finite_count();
        if bad > 0 {
            warn!("Feature bundle has {} non-finite values, clamping", bad);
        }

        let bundle = bundle.sanitized();
        let outputs = self.classify_sanitized(&bundle);
        trace!(
            "Verdicts: phase={:?} width={:?} balance={:.1} dynamics={:?} cohesion={:?}",
            outputs.phase.kind,
            outputs.stereo_width.kind,
            outputs.frequency.kind.balance_score,
            outputs.dynamics.kind,
            outputs.cohesion.kind.grade
        );

        let result = self.aggregator.aggregate(&bundle, &outputs);
        debug!(
            "Scored mix: overall={:.1} tier={:?} issues={} recommendations={}",
            result.overall_score,
            result.issue_tier,
            result.issues.len(),
            result.recommendations.len()
        );
        result
    }

    /// Score many bundles in parallel. Output order matches input order.
    pub fn score_batch(&self, bundles: &[FeatureBundle]) -> Vec<AnalysisResult> {
        debug!("Scoring batch of {} bundles", bundles.len());
        bundles.par_iter().map(|bundle| self.score(bundle)).collect()
    }
}

/// Builder for [`ScoringEngine`].
///
/// Any classifier left unset uses the threshold classifier configured from
/// [`ScoringConfig`].
#[derive(Default)]
pub struct ScoringEngineBuilder {
    config: ScoringConfig,
    phase: Option<SharedPhaseClassifier>,
    stereo_width: Option<SharedStereoWidthClassifier>,
    frequency: Option<SharedFrequencyClassifier>,
    dynamics: Option<SharedDynamicsClassifier>,
    cohesion: Option<SharedCohesionClassifier>,
}

impl ScoringEngineBuilder {
    pub fn config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    pub fn phase_classifier(
        mut self,
        classifier: impl Classifier<Input = f32, Output = PhaseVerdict> + 'static,
    ) -> Self {
        self.phase = Some(Arc::new(classifier));
        self
    }

    pub fn stereo_width_classifier(
        mut self,
        classifier: impl Classifier<Input = f32, Output = StereoWidthVerdict> + 'static,
    ) -> Self {
        self.stereo_width = Some(Arc::new(classifier));
        self
    }

    pub fn frequency_classifier(
        mut self,
        classifier: impl Classifier<Input = BandRatios, Output = FrequencyVerdict> + 'static,
    ) -> Self {
        self.frequency = Some(Arc::new(classifier));
        self
    }

    pub fn dynamics_classifier(
        mut self,
        classifier: impl Classifier<Input = DynamicsInput, Output = DynamicsVerdict> + 'static,
    ) -> Self {
        self.dynamics = Some(Arc::new(classifier));
        self
    }

    pub fn cohesion_classifier(
        mut self,
        classifier: impl Classifier<Input = CohesionInputs, Output = CohesionVerdict> + 'static,
    ) -> Self {
        self.cohesion = Some(Arc::new(classifier));
        self
    }

    /// Validate the configuration and assemble the engine.
    pub fn build(self) -> Result<ScoringEngine> {
        self.config.validate()?;
        let config = Arc::new(self.config);

        let engine = ScoringEngine {
            phase: self
                .phase
                .unwrap_or_else(|| Arc::new(PhaseClassifier::new(config.phase.clone()))),
            stereo_width: self
                .stereo_width
                .unwrap_or_else(|| Arc::new(StereoWidthClassifier::new(config.stereo.clone()))),
            frequency: self.frequency.unwrap_or_else(|| {
                Arc::new(FrequencyBalanceClassifier::new(config.frequency.clone()))
            }),
            dynamics: self
                .dynamics
                .unwrap_or_else(|| Arc::new(DynamicsClassifier::new(config.dynamics.clone()))),
            cohesion: self
                .cohesion
                .unwrap_or_else(|| Arc::new(CohesionAggregator::new(config.cohesion.clone()))),
            aggregator: Aggregator::new(Arc::clone(&config)),
            config,
        };

        debug!("Built scoring engine: {:?}", engine);
        Ok(engine)
    }
}
