//! Sample peak, RMS and short-term block levels.

use mixdoctor_core::sanitize::amplitude_to_db;
use mixdoctor_core::LEVEL_FLOOR_DB;

/// Peak and RMS of a stereo buffer in dBFS.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct LevelAnalysis {
    /// Highest absolute sample value over both channels, dBFS.
    pub peak_db: f32,
    /// RMS over both channels, dBFS.
    pub rms_db: f32,
}

impl LevelAnalysis {
    /// Crest factor in dB. Used as the dynamic range feature.
    pub fn dynamic_range(&self) -> f32 {
        (self.peak_db - self.rms_db).max(0.0)
    }
}

impl Default for LevelAnalysis {
    fn default() -> Self {
        Self {
            peak_db: LEVEL_FLOOR_DB,
            rms_db: LEVEL_FLOOR_DB,
        }
    }
}

pub fn analyze_levels(left: &[f32], right: &[f32]) -> LevelAnalysis {
    let len = left.len().min(right.len());
    if len == 0 {
        return LevelAnalysis::default();
    }

    let mut peak = 0.0f32;
    let mut sum_sq = 0.0f64;
    for (&l, &r) in left[..len].iter().zip(&right[..len]) {
        peak = peak.max(l.abs()).max(r.abs());
        sum_sq += (l as f64) * (l as f64) + (r as f64) * (r as f64);
    }

    let rms = (sum_sq / (2 * len) as f64).sqrt() as f32;
    LevelAnalysis {
        peak_db: amplitude_to_db(peak, LEVEL_FLOOR_DB),
        rms_db: amplitude_to_db(rms, LEVEL_FLOOR_DB),
    }
}

/// RMS level in dBFS of consecutive `block_len` blocks.
///
/// A trailing partial block is included. Blocks at or below `gate_db` are
/// dropped so silence between sections does not count as dynamics.
pub fn block_levels(samples: &[f32], block_len: usize, gate_db: f32) -> Vec<f32> {
    samples
        .chunks(block_len.max(1))
        .map(|block| {
            let sum_sq: f64 = block.iter().map(|&s| (s as f64) * (s as f64)).sum();
            let rms = (sum_sq / block.len() as f64).sqrt() as f32;
            amplitude_to_db(rms, LEVEL_FLOOR_DB)
        })
        .filter(|&db| db > gate_db)
        .collect()
}

/// Population standard deviation. Empty input gives 0.
pub fn std_dev(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f32;
    let mean = values.iter().sum::<f32>() / n;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f32>() / n;
    var.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_square_wave_levels() {
        let left: Vec<f32> = (0..1000).map(|i| if i % 2 == 0 { 0.5 } else { -0.5 }).collect();
        let levels = analyze_levels(&left, &left);

        assert_abs_diff_eq!(levels.peak_db, -6.0206, epsilon = 1e-3);
        assert_abs_diff_eq!(levels.rms_db, -6.0206, epsilon = 1e-3);
        assert_abs_diff_eq!(levels.dynamic_range(), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_sine_crest_factor() {
        let sine: Vec<f32> = (0..48_000)
            .map(|i| (2.0 * core::f32::consts::PI * 1_000.0 * i as f32 / 48_000.0).sin())
            .collect();
        let levels = analyze_levels(&sine, &sine);
        assert_abs_diff_eq!(levels.peak_db, 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(levels.dynamic_range(), 3.01, epsilon = 0.02);
    }

    #[test]
    fn test_silence_hits_floor() {
        let silence = vec![0.0; 100];
        assert_eq!(analyze_levels(&silence, &silence), LevelAnalysis::default());
        assert_eq!(analyze_levels(&[], &[]).peak_db, LEVEL_FLOOR_DB);
    }

    #[test]
    fn test_block_levels_gate_silence() {
        let mut samples = vec![0.5f32; 300];
        samples.extend(vec![0.0; 300]);
        let blocks = block_levels(&samples, 100, -70.0);
        assert_eq!(blocks.len(), 3);
        for db in blocks {
            assert_abs_diff_eq!(db, -6.0206, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_std_dev() {
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(std_dev(&[3.0]), 0.0);
        assert_abs_diff_eq!(std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 2.0);
    }
}
