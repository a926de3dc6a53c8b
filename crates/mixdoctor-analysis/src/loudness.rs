//! Batch loudness analysis (EBU R128 / ITU-R BS.1770)

use crate::error::{Error, Result};
use ebur128::{EbuR128, Mode};
use mixdoctor_core::{LEVEL_FLOOR_DB, LOUDNESS_FLOOR_LUFS};

/// Result of loudness analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct LoudnessAnalysis {
    /// Integrated loudness in LUFS, floored at -70 for silence.
    pub integrated_lufs: f32,
    /// Maximum true peak over both channels in dBTP.
    pub true_peak_dbtp: f32,
    /// Loudness range in LU.
    pub loudness_range_lu: f32,
}

fn meter_error(err: ebur128::Error) -> Error {
    Error::Loudness(err.to_string())
}

/// One-shot EBU R128 loudness analysis of a stereo buffer.
pub fn analyze_loudness(left: &[f32], right: &[f32], sample_rate: u32) -> Result<LoudnessAnalysis> {
    let mut meter = EbuR128::new(2, sample_rate, Mode::I | Mode::LRA | Mode::TRUE_PEAK)
        .map_err(meter_error)?;

    let len = left.len().min(right.len());
    if len > 0 {
        meter
            .add_frames_planar_f32(&[&left[..len], &right[..len]])
            .map_err(meter_error)?;
    }

    // Below the absolute gate the meter reports -inf.
    let integrated = meter.loudness_global().unwrap_or(f64::NEG_INFINITY);
    let integrated_lufs = if integrated.is_finite() {
        (integrated as f32).max(LOUDNESS_FLOOR_LUFS)
    } else {
        LOUDNESS_FLOOR_LUFS
    };

    let loudness_range_lu = meter.loudness_range().unwrap_or(0.0) as f32;

    let true_peak_l = meter.true_peak(0).unwrap_or(0.0);
    let true_peak_r = meter.true_peak(1).unwrap_or(0.0);
    let true_peak_linear = true_peak_l.max(true_peak_r);
    let true_peak_dbtp = if true_peak_linear > 0.0 {
        ((20.0 * true_peak_linear.log10()) as f32).max(LEVEL_FLOOR_DB)
    } else {
        LEVEL_FLOOR_DB
    };

    Ok(LoudnessAnalysis {
        integrated_lufs,
        true_peak_dbtp,
        loudness_range_lu: if loudness_range_lu.is_finite() {
            loudness_range_lu
        } else {
            0.0
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f32, amp: f32, sample_rate: u32, seconds: f32) -> Vec<f32> {
        let n = (sample_rate as f32 * seconds) as usize;
        (0..n)
            .map(|i| {
                amp * (2.0 * core::f32::consts::PI * freq * i as f32 / sample_rate as f32).sin()
            })
            .collect()
    }

    #[test]
    fn test_silence_loudness() {
        let silence = vec![0.0f32; 44_100];
        let result = analyze_loudness(&silence, &silence, 44_100).unwrap();
        assert_eq!(result.integrated_lufs, LOUDNESS_FLOOR_LUFS);
        assert_eq!(result.true_peak_dbtp, LEVEL_FLOOR_DB);
    }

    #[test]
    fn test_full_scale_sine() {
        let left = sine(1_000.0, 1.0, 44_100, 4.0);
        let result = analyze_loudness(&left, &left, 44_100).unwrap();

        assert!(
            result.integrated_lufs > -2.0 && result.integrated_lufs < 2.0,
            "Expected ~0 LUFS, got {}",
            result.integrated_lufs
        );
        assert!(result.true_peak_dbtp > -0.5);
    }

    #[test]
    fn test_quieter_sine_is_quieter() {
        let loud = sine(1_000.0, 0.5, 48_000, 3.0);
        let quiet = sine(1_000.0, 0.05, 48_000, 3.0);
        let loud = analyze_loudness(&loud, &loud, 48_000).unwrap();
        let quiet = analyze_loudness(&quiet, &quiet, 48_000).unwrap();

        let delta = loud.integrated_lufs - quiet.integrated_lufs;
        assert!((delta - 20.0).abs() < 0.5, "delta {delta}");
    }
}
