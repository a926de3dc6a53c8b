//! Dimension sub-scores (0-100) derived from classifier outputs.
//!
//! Each sub-score is 100 inside the classifier's "no issue" bucket and falls
//! off linearly with distance from it. The overall score is their weighted
//! mean.

use crate::dynamics::DynamicsAssessment;
use mixdoctor_core::sanitize::percent;
use mixdoctor_core::{
    DimensionScores, DynamicRangeClass, DynamicsThresholds, FeatureBundle, LoudnessClass,
    PhaseSeverity, PhaseThresholds, ScoreWeights, ScoringConfig, StereoThresholds,
    StereoWidthClass,
};

/// Score ceiling inside the moderate phase bucket starts here.
const MODERATE_PHASE_FLOOR: f32 = 60.0;
/// Severe phase never scores above this.
const SEVERE_PHASE_CEILING: f32 = 40.0;
/// Points lost per unit of width outside the good band.
const WIDTH_SLOPE: f32 = 200.0;
/// Points lost per dB of dynamic range below the over-compression threshold.
const COMPRESSION_SLOPE: f32 = 20.0;
/// Points lost per dB of dynamic range above the excessive threshold.
const EXCESS_RANGE_SLOPE: f32 = 5.0;
/// Points lost per LU outside the loudness range.
const LOUDNESS_SLOPE: f32 = 5.0;
const CLIPPING_PENALTY: f32 = 30.0;
const TRUE_PEAK_PENALTY: f32 = 10.0;

pub fn phase_score(severity: PhaseSeverity, correlation: f32, t: &PhaseThresholds) -> f32 {
    let score = match severity {
        PhaseSeverity::None => 100.0,
        PhaseSeverity::Moderate => {
            let span = t.warning_threshold - t.error_threshold;
            let pos = ((correlation - t.error_threshold) / span).clamp(0.0, 1.0);
            MODERATE_PHASE_FLOOR + (100.0 - MODERATE_PHASE_FLOOR) * pos
        }
        PhaseSeverity::Severe => {
            let span = t.error_threshold + 1.0;
            if span <= 0.0 {
                0.0
            } else {
                (SEVERE_PHASE_CEILING * (correlation + 1.0) / span).clamp(0.0, SEVERE_PHASE_CEILING)
            }
        }
    };
    percent(score)
}

pub fn stereo_score(class: StereoWidthClass, width: f32, t: &StereoThresholds) -> f32 {
    let distance = match class {
        StereoWidthClass::Good => 0.0,
        StereoWidthClass::TooNarrow => t.narrow_threshold - width,
        StereoWidthClass::TooWide => width - t.wide_threshold,
    };
    percent(100.0 - WIDTH_SLOPE * distance.max(0.0))
}

pub fn dynamics_score(range: DynamicRangeClass, dynamic_range: f32, t: &DynamicsThresholds) -> f32 {
    let score = match range {
        DynamicRangeClass::Good => 100.0,
        DynamicRangeClass::SeverelyCompressed | DynamicRangeClass::OverCompressed => {
            100.0 - COMPRESSION_SLOPE * (t.over_compression_db - dynamic_range).max(0.0)
        }
        DynamicRangeClass::Excessive => {
            100.0 - EXCESS_RANGE_SLOPE * (dynamic_range - t.excessive_range_db).max(0.0)
        }
    };
    percent(score)
}

pub fn loudness_score(assessment: &DynamicsAssessment, lufs: f32, t: &DynamicsThresholds) -> f32 {
    let outside = match assessment.loudness {
        LoudnessClass::Acceptable => 0.0,
        LoudnessClass::TooQuiet => t.min_loudness_lufs - lufs,
        LoudnessClass::TooLoud => lufs - t.max_loudness_lufs,
    };
    let mut score = 100.0 - LOUDNESS_SLOPE * outside.max(0.0);
    if assessment.clipping {
        score -= CLIPPING_PENALTY;
    }
    if assessment.true_peak_over {
        score -= TRUE_PEAK_PENALTY;
    }
    percent(score)
}

/// Weighted mean of the dimension scores, clamped to 0-100.
pub fn overall_score(scores: &DimensionScores, weights: &ScoreWeights) -> f32 {
    let total = weights.sum();
    if total <= 0.0 {
        return 0.0;
    }
    let blended = scores.phase * weights.phase
        + scores.frequency * weights.frequency
        + scores.dynamics * weights.dynamics
        + scores.stereo * weights.stereo
        + scores.loudness * weights.loudness;
    percent(blended / total)
}

/// All five sub-scores for one sanitized bundle.
pub fn dimension_scores(
    bundle: &FeatureBundle,
    outputs: &crate::ClassifierOutputs,
    config: &ScoringConfig,
) -> DimensionScores {
    DimensionScores {
        phase: phase_score(outputs.phase.kind, bundle.correlation, &config.phase),
        stereo: stereo_score(outputs.stereo_width.kind, bundle.stereo_width, &config.stereo),
        frequency: percent(outputs.frequency.kind.balance_score),
        dynamics: dynamics_score(
            outputs.dynamics.kind.range,
            bundle.dynamic_range,
            &config.dynamics,
        ),
        loudness: loudness_score(&outputs.dynamics.kind, bundle.loudness_lufs, &config.dynamics),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_phase_score_shape() {
        let t = PhaseThresholds::default();
        assert_eq!(phase_score(PhaseSeverity::None, 0.8, &t), 100.0);
        assert_abs_diff_eq!(phase_score(PhaseSeverity::Moderate, 0.0, &t), 60.0);
        assert_abs_diff_eq!(phase_score(PhaseSeverity::Moderate, 0.15, &t), 80.0, epsilon = 1e-4);
        assert_abs_diff_eq!(phase_score(PhaseSeverity::Severe, -0.5, &t), 20.0, epsilon = 1e-4);
        assert_eq!(phase_score(PhaseSeverity::Severe, -1.0, &t), 0.0);
    }

    #[test]
    fn test_stereo_score_slope() {
        let t = StereoThresholds::default();
        assert_eq!(stereo_score(StereoWidthClass::Good, 0.5, &t), 100.0);
        assert_abs_diff_eq!(stereo_score(StereoWidthClass::TooNarrow, 0.2, &t), 80.0, epsilon = 1e-3);
        assert_abs_diff_eq!(stereo_score(StereoWidthClass::TooWide, 0.9, &t), 60.0, epsilon = 1e-3);
    }

    #[test]
    fn test_dynamics_score_slope() {
        let t = DynamicsThresholds::default();
        assert_eq!(dynamics_score(DynamicRangeClass::Good, 10.0, &t), 100.0);
        assert_abs_diff_eq!(dynamics_score(DynamicRangeClass::SeverelyCompressed, 2.0, &t), 20.0);
        assert_abs_diff_eq!(dynamics_score(DynamicRangeClass::OverCompressed, 5.0, &t), 80.0);
        assert_abs_diff_eq!(dynamics_score(DynamicRangeClass::Excessive, 22.0, &t), 80.0);
    }

    #[test]
    fn test_loudness_score_penalties() {
        let t = DynamicsThresholds::default();
        let mut a = DynamicsAssessment {
            range: DynamicRangeClass::Good,
            loudness: LoudnessClass::Acceptable,
            clipping: false,
            true_peak_over: false,
        };
        assert_eq!(loudness_score(&a, -14.0, &t), 100.0);

        a.clipping = true;
        a.true_peak_over = true;
        assert_abs_diff_eq!(loudness_score(&a, -14.0, &t), 60.0);

        a.loudness = LoudnessClass::TooLoud;
        assert_abs_diff_eq!(loudness_score(&a, -4.0, &t), 40.0);
    }

    #[test]
    fn test_overall_weighting() {
        let weights = ScoreWeights::default();
        let perfect = DimensionScores {
            phase: 100.0,
            stereo: 100.0,
            frequency: 100.0,
            dynamics: 100.0,
            loudness: 100.0,
        };
        assert_abs_diff_eq!(overall_score(&perfect, &weights), 100.0, epsilon = 1e-3);

        let bad_phase = DimensionScores {
            phase: 20.0,
            ..perfect
        };
        assert_abs_diff_eq!(overall_score(&bad_phase, &weights), 80.0, epsilon = 1e-3);
    }
}
