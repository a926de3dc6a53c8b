//! End-to-end scoring scenarios through the `MixDoctor` facade.

mod helpers;

use approx::assert_abs_diff_eq;
use helpers::tolerances::SCORE_EPSILON;
use helpers::{broken_bundle, ideal_bundle, test_doctor};
use mixdoctor::core::{IssueSeverity, IssueTier, PhaseSeverity, ScoreWeights};
use mixdoctor::prelude::*;
use mixdoctor::scoring::dynamics::CLIPPING_TEXT;
use mixdoctor::{BandRatios, CohesionInputs, ScoreRating};
use proptest::prelude::*;

#[test]
fn severe_phase_is_the_only_penalty() {
    let doctor = test_doctor();
    let features = FeatureBundle {
        correlation: -0.5,
        ..ideal_bundle()
    };

    let result = doctor.score(&features);

    assert_eq!(result.verdicts.phase, PhaseSeverity::Severe);
    assert!(result.has_phase_issues);
    assert!(!result.has_stereo_issues);
    assert!(!result.has_frequency_imbalance);
    assert!(!result.has_dynamic_range_issues);
    assert!(!result.has_loudness_issues);
    assert!(!result.has_clipping);

    let dims = result.dimension_scores;
    assert!(dims.phase < 100.0);
    assert_eq!(dims.stereo, 100.0);
    assert_eq!(dims.dynamics, 100.0);
    assert_eq!(dims.loudness, 100.0);
    assert_abs_diff_eq!(dims.frequency, 100.0, epsilon = SCORE_EPSILON);

    // Weighted phase loss only: 0.25 * (100 - 20)
    assert_abs_diff_eq!(result.overall_score, 80.0, epsilon = SCORE_EPSILON);
    assert_eq!(result.issue_tier, IssueTier::Standard);
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].kind, IssueKind::Phase);
    assert_eq!(result.issues[0].severity, IssueSeverity::Critical);
}

#[test]
fn ideal_mix_scores_high_with_no_advice() {
    let result = test_doctor().score(&ideal_bundle());

    assert!(result.overall_score >= 85.0, "score {}", result.overall_score);
    assert!(result.recommendations.is_empty(), "{:?}", result.recommendations);
    assert!(result.issues.is_empty());
    assert_eq!(result.issue_tier, IssueTier::None);
    assert_eq!(result.rating(), ScoreRating::Excellent);
}

#[test]
fn hot_peak_flags_clipping() {
    let result = test_doctor().score(&FeatureBundle {
        peak_level: 0.2,
        ..ideal_bundle()
    });
    assert!(result.has_clipping);
    assert!(!result.has_true_peak_overs);

    // Loudness loses the 30 point clipping penalty at weight 0.15.
    assert_abs_diff_eq!(result.overall_score, 95.5, epsilon = SCORE_EPSILON);
    assert_eq!(result.issue_tier, IssueTier::None);
    assert!(result.issues.is_empty());
    assert!(result
        .recommendations
        .iter()
        .any(|r| r == CLIPPING_TEXT));
}

#[test]
fn low_score_reports_critical_issues_only() {
    let doctor = test_doctor();
    let squashed = FeatureBundle {
        correlation: -1.0,
        stereo_width: 0.05,
        loudness_lufs: -5.0,
        dynamic_range: 2.0,
        ..ideal_bundle()
    };

    let result = doctor.score(&squashed);
    assert!(result.overall_score < 55.0, "score {}", result.overall_score);
    assert_eq!(result.issue_tier, IssueTier::CriticalOnly);

    // Flags still describe every dimension...
    assert!(result.has_stereo_issues);
    assert!(result.has_loudness_issues);

    // ...but the issue list is narrowed to critical problems.
    let kinds: Vec<IssueKind> = result.issues.iter().map(|i| i.kind).collect();
    assert_eq!(kinds, vec![IssueKind::Phase, IssueKind::DynamicRange]);
    assert!(result
        .issues
        .iter()
        .all(|i| i.severity == IssueSeverity::Critical));
}

#[test]
fn forced_low_score_with_compression_only() {
    let config = ScoringConfig {
        weights: ScoreWeights {
            phase: 0.0,
            frequency: 0.0,
            dynamics: 1.0,
            stereo: 0.0,
            loudness: 0.0,
        },
        ..ScoringConfig::default()
    };
    let doctor = MixDoctor::builder().config(config).build().unwrap();

    let result = doctor.score(&FeatureBundle {
        dynamic_range: 2.0,
        ..ideal_bundle()
    });

    assert!(result.overall_score < 55.0);
    assert_eq!(result.issue_tier, IssueTier::CriticalOnly);
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].kind, IssueKind::DynamicRange);
}

#[test]
fn mid_score_lists_every_flagged_dimension() {
    let doctor = test_doctor();
    let result = doctor.score(&FeatureBundle {
        stereo_width: 0.05,
        loudness_lufs: -5.0,
        dynamic_range: 2.0,
        ..ideal_bundle()
    });

    assert_eq!(result.issue_tier, IssueTier::Standard);
    assert!(result.has_issue(IssueKind::StereoWidth));
    assert!(result.has_issue(IssueKind::DynamicRange));
    assert!(result.has_issue(IssueKind::Loudness));
}

#[test]
fn broken_mix_caps_recommendations() {
    let doctor = test_doctor();
    let result = doctor.score(&broken_bundle());

    assert!(result.overall_score < 55.0);
    assert_eq!(
        result.recommendations.len(),
        doctor.config().max_recommendations
    );
    assert!(result.has_any_issue());
    assert_eq!(result.rating(), ScoreRating::Poor);
}

#[test]
fn batch_matches_single_scoring() {
    let doctor = test_doctor();
    let bundles: Vec<FeatureBundle> = (0..16)
        .map(|i| FeatureBundle {
            correlation: 1.0 - i as f32 * 0.125,
            stereo_width: i as f32 / 16.0,
            dynamic_range: 1.0 + i as f32 * 1.5,
            ..ideal_bundle()
        })
        .collect();

    let batch = doctor.score_batch(&bundles);
    let single: Vec<_> = bundles.iter().map(|b| doctor.score(b)).collect();
    assert_eq!(batch, single);
}

#[test]
fn non_finite_features_never_abort() {
    let result = test_doctor().score(&FeatureBundle {
        correlation: f32::NAN,
        stereo_width: f32::INFINITY,
        bands: BandRatios::new(f32::NAN, 0.1, f32::NEG_INFINITY, 0.2, 0.1),
        peak_level: f32::NAN,
        loudness_lufs: f32::NEG_INFINITY,
        dynamic_range: f32::NAN,
        ..ideal_bundle()
    });

    assert!(result.overall_score.is_finite());
    assert!((0.0..=100.0).contains(&result.overall_score));
    assert!(result.loudness_lufs.is_finite());
}

#[test]
fn single_missing_feature_adds_no_diagnosis() {
    let doctor = test_doctor();
    let cases = [
        FeatureBundle {
            correlation: f32::NAN,
            ..ideal_bundle()
        },
        FeatureBundle {
            dynamic_range: f32::NAN,
            ..ideal_bundle()
        },
        FeatureBundle {
            loudness_lufs: f32::NAN,
            ..ideal_bundle()
        },
        FeatureBundle {
            bands: BandRatios::new(f32::NAN, 0.15, 0.30, 0.18, 0.12),
            ..ideal_bundle()
        },
        FeatureBundle {
            cohesion: CohesionInputs::new(75.0, f32::NAN, 75.0, 75.0, 75.0),
            ..ideal_bundle()
        },
    ];

    for features in &cases {
        let result = doctor.score(features);
        assert!(!result.has_any_issue(), "{features:?} -> {result:?}");
        assert!(result.issues.is_empty(), "{:?}", result.issues);
        assert_eq!(result.issue_tier, IssueTier::None);
        assert!(!result
            .issues
            .iter()
            .any(|i| i.severity == IssueSeverity::Critical));
    }
}

#[cfg(feature = "serialization")]
#[test]
fn result_serializes_to_camel_case_json() {
    let result = test_doctor().score(&broken_bundle());
    let json = result.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value.get("overallScore").is_some());
    assert!(value.get("hasClipping").is_some());
    assert_eq!(
        value["recommendations"].as_array().map(|a| a.len()),
        Some(result.recommendations.len())
    );
}

fn any_bundle() -> impl Strategy<Value = FeatureBundle> {
    (
        -1.0f32..=1.0,
        0.0f32..=1.0,
        -1.0f32..=1.0,
        prop::array::uniform5(0.0f32..=0.6),
        -30.0f32..=3.0,
        -50.0f32..=0.0,
        0.0f32..=30.0,
        0.0f32..=100.0,
    )
        .prop_map(
            |(correlation, width, balance, bands, peak, lufs, dr, cohesion)| FeatureBundle {
                correlation,
                stereo_width: width,
                left_right_balance: balance,
                bands: BandRatios::from_array(bands),
                peak_level: peak,
                true_peak_level: peak + 0.5,
                loudness_lufs: lufs,
                dynamic_range: dr,
                cohesion: CohesionInputs::uniform(cohesion),
                ..ideal_bundle()
            },
        )
}

proptest! {
    #[test]
    fn high_scores_report_no_issues(bundle in any_bundle()) {
        let result = test_doctor().score(&bundle);
        if result.overall_score >= 85.0 {
            prop_assert!(result.issues.is_empty());
            prop_assert_eq!(result.issue_tier, IssueTier::None);
        }
    }

    #[test]
    fn clipping_flag_ignores_other_inputs(bundle in any_bundle(), peak in 0.0f32..=12.0) {
        let result = test_doctor().score(&FeatureBundle { peak_level: peak, ..bundle });
        prop_assert!(result.has_clipping);
    }

    #[test]
    fn scoring_is_pure(bundle in any_bundle()) {
        let doctor = test_doctor();
        prop_assert_eq!(doctor.score(&bundle), doctor.score(&bundle));
    }

    #[test]
    fn overall_score_stays_in_range(bundle in any_bundle()) {
        let result = test_doctor().score(&bundle);
        prop_assert!((0.0..=100.0).contains(&result.overall_score));
        prop_assert!(result.recommendations.len() <= 8);
    }
}
