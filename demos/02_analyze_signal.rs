//! # 02 - Analyze Signal
//!
//! Synthesize a short stereo mix, extract its features and score it.
//! Then flip the right channel's polarity and score it again.
//!
//! **Concepts:** Feature extraction, EBU R128 loudness, phase correlation
//!
//! ```bash
//! cargo run --example 02_analyze_signal
//! ```

use mixdoctor::prelude::*;
use std::f32::consts::PI;

const SAMPLE_RATE: u32 = 48_000;

fn tone(freq: f32, amp: f32, seconds: f32) -> Vec<f32> {
    let n = (SAMPLE_RATE as f32 * seconds) as usize;
    (0..n)
        .map(|i| amp * (2.0 * PI * freq * i as f32 / SAMPLE_RATE as f32).sin())
        .collect()
}

fn main() -> mixdoctor::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let doctor = MixDoctor::builder().build()?;

    // Bass and lead in the center, a detuned pad spread to the sides.
    let bass = tone(90.0, 0.25, 4.0);
    let lead = tone(880.0, 0.15, 4.0);
    let pad_l = tone(3_000.0, 0.06, 4.0);
    let pad_r = tone(3_007.0, 0.06, 4.0);

    let left: Vec<f32> = (0..bass.len()).map(|i| bass[i] + lead[i] + pad_l[i]).collect();
    let right: Vec<f32> = (0..bass.len()).map(|i| bass[i] + lead[i] + pad_r[i]).collect();

    let features = doctor.extractor().extract(&left, &right, SAMPLE_RATE)?;
    println!(
        "Features: correlation {:.2}, width {:.2}, {:.1} LUFS, peak {:.1} dBFS, DR {:.1} dB",
        features.correlation,
        features.stereo_width,
        features.loudness_lufs,
        features.peak_level,
        features.dynamic_range
    );
    for (band, ratio) in features.bands.iter() {
        println!("  {:<9} {:5.1}%", band.name(), ratio * 100.0);
    }

    let result = doctor.score(&features);
    println!(
        "\nOriginal: {:.1}/100 ({})",
        result.overall_score,
        result.rating().label()
    );
    for rec in &result.recommendations {
        println!("  -> {rec}");
    }

    let flipped: Vec<f32> = right.iter().map(|s| -s).collect();
    let result = doctor.analyze(&left, &flipped, SAMPLE_RATE)?;
    println!(
        "\nRight channel inverted: {:.1}/100 ({}), phase {:?}",
        result.overall_score,
        result.rating().label(),
        result.verdicts.phase
    );
    for rec in &result.recommendations {
        println!("  -> {rec}");
    }

    Ok(())
}
