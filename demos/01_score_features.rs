//! # 01 - Score Features
//!
//! Score a few hand-written feature bundles and print the verdicts,
//! issues and recommendations.
//!
//! **Concepts:** MixDoctor builder, feature bundles, issue tiers
//!
//! ```bash
//! RUST_LOG=debug cargo run --example 01_score_features
//! ```

use mixdoctor::prelude::*;
use mixdoctor::BandRatios;

fn report(name: &str, result: &AnalysisResult) {
    println!(
        "{name}: {:.1}/100 ({}), issue tier {:?}",
        result.overall_score,
        result.rating().label(),
        result.issue_tier
    );
    let d = &result.dimension_scores;
    println!(
        "  phase {:.0}  stereo {:.0}  frequency {:.0}  dynamics {:.0}  loudness {:.0}  cohesion {:.0}",
        d.phase, d.stereo, d.frequency, d.dynamics, d.loudness, result.mix_cohesion_score
    );
    for issue in &result.issues {
        println!("  [{:?}] {}", issue.severity, issue.message);
    }
    for rec in &result.recommendations {
        println!("  -> {rec}");
    }
    println!();
}

fn main() -> mixdoctor::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let doctor = MixDoctor::builder().build()?;

    let mixes = [
        ("Balanced mix", FeatureBundle::default()),
        (
            "Phase problem",
            FeatureBundle {
                correlation: -0.5,
                ..FeatureBundle::default()
            },
        ),
        (
            "Loud and squashed",
            FeatureBundle {
                peak_level: 0.2,
                true_peak_level: 0.9,
                loudness_lufs: -6.0,
                dynamic_range: 3.0,
                ..FeatureBundle::default()
            },
        ),
        (
            "Bass heavy, narrow",
            FeatureBundle {
                stereo_width: 0.15,
                bands: BandRatios::new(0.45, 0.20, 0.20, 0.10, 0.05),
                ..FeatureBundle::default()
            },
        ),
    ];

    let features: Vec<FeatureBundle> = mixes.iter().map(|(_, f)| *f).collect();
    let results = doctor.score_batch(&features);

    for ((name, _), result) in mixes.iter().zip(&results) {
        report(name, result);
    }

    Ok(())
}
