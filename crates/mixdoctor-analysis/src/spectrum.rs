//! Band energy ratios from an averaged power spectrum.
//!
//! Frames are Hann-windowed and transformed with `rustfft`; power per bin is
//! summed over all frames and then binned into the five scoring bands.

use crate::config::ExtractionConfig;
use mixdoctor_core::{Band, BandRatios};
use rustfft::{num_complex::Complex, FftPlanner};
use tracing::trace;

/// Create Hann window. Below two samples the window is rectangular.
fn hann_window(size: usize) -> Vec<f32> {
    if size < 2 {
        return vec![1.0; size];
    }
    (0..size)
        .map(|i| {
            let angle = 2.0 * core::f32::consts::PI * i as f32 / (size - 1) as f32;
            0.5 * (1.0 - angle.cos())
        })
        .collect()
}

/// Power spectrum summed over frames, `frame_size / 2 + 1` bins.
///
/// A signal shorter than one frame is zero-padded into a single frame.
pub fn power_spectrum(samples: &[f32], config: &ExtractionConfig) -> Vec<f64> {
    let fft_size = config.frame_size();
    let hop = config.hop_size.max(1);
    let bins = fft_size / 2 + 1;
    let mut power = vec![0.0f64; bins];

    if samples.is_empty() {
        return power;
    }

    // A short signal is windowed over its own length, then zero-padded.
    let (window, num_frames) = if samples.len() <= fft_size {
        (hann_window(samples.len()), 1)
    } else {
        (hann_window(fft_size), (samples.len() - fft_size) / hop + 1)
    };
    let fft = FftPlanner::<f32>::new().plan_fft_forward(fft_size);
    let mut buffer = vec![Complex::new(0.0f32, 0.0); fft_size];

    for frame_idx in 0..num_frames {
        let start = frame_idx * hop;
        let end = (start + fft_size).min(samples.len());
        let frame = &samples[start..end];

        for (i, slot) in buffer.iter_mut().enumerate() {
            let s = frame.get(i).copied().unwrap_or(0.0);
            let w = window.get(i).copied().unwrap_or(0.0);
            *slot = Complex::new(s * w, 0.0);
        }
        fft.process(&mut buffer);

        for (p, c) in power.iter_mut().zip(&buffer[..bins]) {
            *p += c.norm_sqr() as f64;
        }
    }

    trace!("Power spectrum: {} frames of {} samples", num_frames, fft_size);
    power
}

/// Energy fraction of each scoring band. Silence gives all zeros.
///
/// Energy outside the outer band edges (sub-bass rumble, ultrasonics) is
/// excluded, so the ratios of a non-silent signal sum to 1.
pub fn analyze_bands(samples: &[f32], sample_rate: u32, config: &ExtractionConfig) -> BandRatios {
    let power = power_spectrum(samples, config);
    let fft_size = config.frame_size();
    let bin_hz = sample_rate as f32 / fft_size as f32;
    let edges = &config.band_edges;

    let mut energy = [0.0f64; Band::COUNT];
    for (bin, &p) in power.iter().enumerate() {
        let freq = bin as f32 * bin_hz;
        if freq < edges[0] || freq > edges[Band::COUNT] {
            continue;
        }
        let band = (0..Band::COUNT)
            .find(|&b| freq < edges[b + 1])
            .unwrap_or(Band::COUNT - 1);
        energy[band] += p;
    }

    let total: f64 = energy.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return BandRatios::from_array([0.0; Band::COUNT]);
    }
    BandRatios::from_array(energy.map(|e| (e / total) as f32))
}

/// Shannon entropy of the band ratios normalized to `[0, 1]`.
///
/// 1 means energy spread evenly over all bands, 0 means a single band.
pub fn band_entropy(bands: &BandRatios) -> f32 {
    let total = bands.sum();
    if total <= 0.0 || !total.is_finite() {
        return 0.0;
    }
    let entropy: f32 = bands
        .iter()
        .map(|(_, r)| r / total)
        .filter(|&p| p > 0.0)
        .map(|p| -p * p.ln())
        .sum();
    (entropy / (Band::COUNT as f32).ln()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const SR: u32 = 44_100;

    fn tone(freq: f32, seconds: f32) -> Vec<f32> {
        let n = (SR as f32 * seconds) as usize;
        (0..n)
            .map(|i| (2.0 * core::f32::consts::PI * freq * i as f32 / SR as f32).sin())
            .collect()
    }

    #[test]
    fn test_tone_lands_in_its_band() {
        let config = ExtractionConfig::default();
        let cases = [
            (100.0, Band::Bass),
            (350.0, Band::LowMid),
            (1_000.0, Band::Mid),
            (4_000.0, Band::HighMid),
            (10_000.0, Band::High),
        ];
        for (freq, band) in cases {
            let ratios = analyze_bands(&tone(freq, 1.0), SR, &config);
            assert!(
                ratios.get(band) > 0.9,
                "{freq} Hz should be in {}: {ratios:?}",
                band.name()
            );
            assert_abs_diff_eq!(ratios.sum(), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_silence_gives_zero_ratios() {
        let ratios = analyze_bands(&vec![0.0; 8192], SR, &ExtractionConfig::default());
        assert_eq!(ratios.sum(), 0.0);
        assert_eq!(band_entropy(&ratios), 0.0);
    }

    #[test]
    fn test_short_signal_is_padded() {
        let short = tone(1_000.0, 0.01);
        assert!(short.len() < ExtractionConfig::default().frame_size());
        let ratios = analyze_bands(&short, SR, &ExtractionConfig::default());
        assert!(ratios.mid > 0.5);
    }

    #[test]
    fn test_band_entropy_extremes() {
        assert_abs_diff_eq!(
            band_entropy(&BandRatios::from_array([0.2; 5])),
            1.0,
            epsilon = 1e-5
        );
        assert_eq!(
            band_entropy(&BandRatios::new(1.0, 0.0, 0.0, 0.0, 0.0)),
            0.0
        );
        let ideal = band_entropy(&BandRatios::default());
        assert!(ideal > 0.9 && ideal < 1.0);
    }

    #[test]
    fn test_single_sample_keeps_its_energy() {
        let power = power_spectrum(&[0.5], &ExtractionConfig::default());
        // An impulse has a flat spectrum
        assert_abs_diff_eq!(power[0], 0.25, epsilon = 1e-9);
        assert_abs_diff_eq!(power[power.len() - 1], 0.25, epsilon = 1e-9);
        assert_eq!(hann_window(1), vec![1.0]);
    }

    #[test]
    fn test_hann_window_shape() {
        let w = hann_window(64);
        assert_abs_diff_eq!(w[0], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(w[63], 0.0, epsilon = 1e-6);
        assert!(w[31] > 0.99);
    }
}
