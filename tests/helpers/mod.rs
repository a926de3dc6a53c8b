//! Test helpers and fixtures for MixDoctor integration tests
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `SCORE_EPSILON` (1e-3): Score arithmetic
//! - `LEVEL_EPSILON_DB` (0.05): Peak / RMS of synthetic signals
//! - `LOUDNESS_EPSILON_LU` (1.5): Integrated loudness of synthetic signals
//! - `BAND_LEAKAGE` (0.1): Spectral leakage out of a tone's band

#![allow(dead_code)]

pub mod tolerances;

use mixdoctor::prelude::*;
use mixdoctor::BandRatios;

/// Default test sample rate
pub const TEST_SAMPLE_RATE: u32 = 48_000;

/// Engine with default configuration.
pub fn test_doctor() -> MixDoctor {
    MixDoctor::builder()
        .build()
        .expect("Failed to create test analyzer")
}

/// Every feature at the center of its "no issue" range.
pub fn ideal_bundle() -> FeatureBundle {
    FeatureBundle {
        correlation: 0.6,
        stereo_width: 0.5,
        left_right_balance: 0.0,
        mid_side_ratio: 4.0,
        bands: BandRatios::new(0.25, 0.15, 0.30, 0.18, 0.12),
        peak_level: -3.0,
        true_peak_level: -2.5,
        rms_level: -13.0,
        loudness_lufs: -14.0,
        dynamic_range: 10.0,
        ..FeatureBundle::default()
    }
}

/// A mix with problems in every dimension.
pub fn broken_bundle() -> FeatureBundle {
    FeatureBundle {
        correlation: -0.8,
        stereo_width: 0.05,
        left_right_balance: 0.5,
        bands: BandRatios::new(0.55, 0.25, 0.10, 0.05, 0.05),
        peak_level: 0.3,
        true_peak_level: 1.2,
        loudness_lufs: -5.0,
        dynamic_range: 2.0,
        cohesion: mixdoctor::CohesionInputs::uniform(20.0),
        ..ideal_bundle()
    }
}

/// Generate a sine wave at `frequency` Hz.
pub fn generate_sine(frequency: f32, amplitude: f32, sample_rate: u32, seconds: f32) -> Vec<f32> {
    let num_samples = (sample_rate as f32 * seconds) as usize;
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            (amplitude as f64 * (2.0 * std::f64::consts::PI * frequency as f64 * t).sin()) as f32
        })
        .collect()
}

/// Generate white noise (random samples in -amplitude..amplitude).
pub fn generate_noise(num_samples: usize, amplitude: f32, seed: u64) -> Vec<f32> {
    // Simple LCG for reproducible "random" noise
    let mut rng = seed;
    (0..num_samples)
        .map(|_| {
            rng = rng
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (((rng >> 33) as f32 / (1u64 << 31) as f32) * 2.0 - 1.0) * amplitude
        })
        .collect()
}

/// Stereo pair from a shared mid signal and a side signal: L = M + S, R = M - S.
pub fn mid_side_pair(mid: &[f32], side: &[f32]) -> (Vec<f32>, Vec<f32>) {
    mid.iter()
        .zip(side)
        .map(|(&m, &s)| (m + s, m - s))
        .unzip()
}

/// Sum of several equal-length signals.
pub fn mix(signals: &[&[f32]]) -> Vec<f32> {
    let len = signals.iter().map(|s| s.len()).min().unwrap_or(0);
    (0..len)
        .map(|i| signals.iter().map(|s| s[i]).sum())
        .collect()
}

/// Calculate peak amplitude of a signal.
pub fn peak(samples: &[f32]) -> f32 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f32, |a, b| a.max(b))
}
