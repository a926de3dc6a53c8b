//! Join point: combines classifier outputs into an [`AnalysisResult`].

use crate::issues::{has_instrument_balance_issues, IssueReporter};
use crate::recommend::RecommendationGenerator;
use crate::scores::{dimension_scores, overall_score};
use crate::ClassifierOutputs;
use mixdoctor_core::sanitize::percent;
use mixdoctor_core::{
    AnalysisResult, FeatureBundle, PhaseSeverity, ScoringConfig, StereoWidthClass, VerdictSummary,
};
use std::sync::Arc;

/// Overall score aggregator and recommendation generator.
#[derive(Debug, Clone)]
pub struct Aggregator {
    config: Arc<ScoringConfig>,
    issues: IssueReporter,
    recommendations: RecommendationGenerator,
}

impl Aggregator {
    pub fn new(config: Arc<ScoringConfig>) -> Self {
        let issues = IssueReporter::new(config.issues.clone(), config.stereo.max_balance_offset);
        let recommendations = RecommendationGenerator::new(
            config.max_recommendations,
            config.max_band_insights,
            config.stereo.max_balance_offset,
        );
        Self {
            config,
            issues,
            recommendations,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn issue_reporter(&self) -> &IssueReporter {
        &self.issues
    }

    /// Build the result record. `bundle` is sanitized again here so callers
    /// holding raw features cannot leak NaN into the scores.
    pub fn aggregate(&self, bundle: &FeatureBundle, outputs: &ClassifierOutputs) -> AnalysisResult {
        let bundle = bundle.sanitized();
        let config = &*self.config;

        let dimension_scores = dimension_scores(&bundle, outputs, config);
        let overall = overall_score(&dimension_scores, &config.weights);
        let (issue_tier, issues) = self.issues.report(overall, &bundle, outputs);
        let recommendations = self.recommendations.generate(&bundle, outputs);

        let dynamics = &outputs.dynamics.kind;
        let cohesion = &outputs.cohesion.kind;

        AnalysisResult {
            overall_score: overall,

            stereo_width_score: bundle.stereo_width * 100.0,
            phase_coherence: bundle.correlation,
            frequency_balance_score: dimension_scores.frequency,
            dynamic_range: bundle.dynamic_range,
            loudness_lufs: bundle.loudness_lufs,
            peak_level: bundle.peak_level,
            rms_level: bundle.rms_level,
            true_peak_level: bundle.true_peak_level,

            mix_cohesion_score: percent(cohesion.score),
            spectral_coherence: bundle.cohesion.spectral_coherence,
            phase_integrity: bundle.cohesion.phase_integrity,
            dynamic_consistency: bundle.cohesion.dynamic_consistency,
            spatial_balance: bundle.cohesion.spatial_balance,
            mix_depth: bundle.cohesion.mix_depth,

            dimension_scores,
            verdicts: VerdictSummary {
                phase: outputs.phase.kind,
                stereo_width: outputs.stereo_width.kind,
                bands: outputs.frequency.kind.bands,
                dynamic_range: dynamics.range,
                loudness: dynamics.loudness,
                cohesion: cohesion.grade,
            },

            has_phase_issues: outputs.phase.kind != PhaseSeverity::None,
            has_stereo_issues: outputs.stereo_width.kind != StereoWidthClass::Good,
            has_frequency_imbalance: outputs.frequency.kind.imbalance,
            has_dynamic_range_issues: dynamics.has_dynamic_range_issues(),
            has_clipping: dynamics.clipping,
            has_true_peak_overs: dynamics.true_peak_over,
            has_loudness_issues: dynamics.has_loudness_issues(),
            has_instrument_balance_issues: has_instrument_balance_issues(
                &bundle,
                outputs,
                config.stereo.max_balance_offset,
            ),

            issue_tier,
            issues,
            recommendations,
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(Arc::new(ScoringConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::outputs_for;
    use approx::assert_abs_diff_eq;
    use mixdoctor_core::{IssueTier, ScoreWeights};

    #[test]
    fn test_ideal_mix() {
        let bundle = FeatureBundle::default();
        let result = Aggregator::default().aggregate(&bundle, &outputs_for(&bundle));

        assert_abs_diff_eq!(result.overall_score, 100.0, epsilon = 1e-3);
        assert_eq!(result.issue_tier, IssueTier::None);
        assert!(result.issues.is_empty());
        assert!(result.recommendations.is_empty());
        assert!(!result.has_any_issue());
        assert_abs_diff_eq!(result.stereo_width_score, 50.0);
        assert_abs_diff_eq!(result.mix_cohesion_score, 75.0);
    }

    #[test]
    fn test_custom_weights_change_overall() {
        let bundle = FeatureBundle {
            correlation: -0.5,
            ..FeatureBundle::default()
        };
        let outputs = outputs_for(&bundle);

        let default = Aggregator::default().aggregate(&bundle, &outputs);
        assert_abs_diff_eq!(default.overall_score, 80.0, epsilon = 1e-3);

        let config = ScoringConfig {
            weights: ScoreWeights {
                phase: 0.5,
                frequency: 0.2,
                dynamics: 0.1,
                stereo: 0.1,
                loudness: 0.1,
            },
            ..ScoringConfig::default()
        };
        let heavy = Aggregator::new(Arc::new(config)).aggregate(&bundle, &outputs);
        assert_abs_diff_eq!(heavy.overall_score, 60.0, epsilon = 1e-3);
    }

    #[test]
    fn test_nan_bundle_yields_finite_result() {
        let bundle = FeatureBundle {
            correlation: f32::NAN,
            stereo_width: f32::NAN,
            dynamic_range: f32::INFINITY,
            loudness_lufs: f32::NAN,
            peak_level: f32::NAN,
            ..FeatureBundle::default()
        };
        let outputs = outputs_for(&bundle);
        let result = Aggregator::default().aggregate(&bundle, &outputs);

        assert!(result.overall_score.is_finite());
        assert!((0.0..=100.0).contains(&result.overall_score));
        assert!(result.phase_coherence.is_finite());
        assert!(result.loudness_lufs.is_finite());
        assert!(!result.has_clipping);
    }
}
