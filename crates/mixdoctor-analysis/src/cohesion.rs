//! Cohesion sub-score estimates (0-100) from measured features.

use crate::correlation::StereoAnalysis;
use crate::levels::std_dev;
use crate::spectrum::band_entropy;
use mixdoctor_core::{BandRatios, CohesionInputs};

/// Points lost per dB of short-term level spread.
const CONSISTENCY_SLOPE: f32 = 5.0;
/// Width at which mix depth saturates.
const FULL_DEPTH_WIDTH: f32 = 0.5;

/// 100 for perfectly correlated channels, 0 for fully inverted ones.
pub fn phase_integrity(correlation: f32) -> f32 {
    ((correlation + 1.0) * 50.0).clamp(0.0, 100.0)
}

/// 100 when centered, 0 when hard-panned to one side.
pub fn spatial_balance(balance: f32) -> f32 {
    ((1.0 - balance.abs()) * 100.0).clamp(0.0, 100.0)
}

/// Even spread of energy across bands.
pub fn spectral_coherence(bands: &BandRatios) -> f32 {
    band_entropy(bands) * 100.0
}

/// Stability of short-term block levels.
///
/// No gated blocks gives 0; a single block is perfectly consistent.
pub fn dynamic_consistency(block_levels_db: &[f32]) -> f32 {
    match block_levels_db.len() {
        0 => 0.0,
        1 => 100.0,
        _ => (100.0 - CONSISTENCY_SLOPE * std_dev(block_levels_db)).clamp(0.0, 100.0),
    }
}

/// Sense of front-to-back space from the stereo width.
pub fn mix_depth(width: f32) -> f32 {
    (width / FULL_DEPTH_WIDTH * 100.0).clamp(0.0, 100.0)
}

pub fn estimate_cohesion(
    stereo: &StereoAnalysis,
    bands: &BandRatios,
    block_levels_db: &[f32],
) -> CohesionInputs {
    CohesionInputs::new(
        spectral_coherence(bands),
        phase_integrity(stereo.correlation),
        dynamic_consistency(block_levels_db),
        spatial_balance(stereo.balance),
        mix_depth(stereo.width),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_phase_integrity_range() {
        assert_eq!(phase_integrity(1.0), 100.0);
        assert_eq!(phase_integrity(0.0), 50.0);
        assert_eq!(phase_integrity(-1.0), 0.0);
    }

    #[test]
    fn test_spatial_balance() {
        assert_eq!(spatial_balance(0.0), 100.0);
        assert_abs_diff_eq!(spatial_balance(-0.25), 75.0);
        assert_eq!(spatial_balance(1.0), 0.0);
    }

    #[test]
    fn test_dynamic_consistency() {
        assert_eq!(dynamic_consistency(&[]), 0.0);
        assert_eq!(dynamic_consistency(&[-20.0]), 100.0);
        assert_eq!(dynamic_consistency(&[-20.0, -20.0, -20.0]), 100.0);
        // std dev 2 dB
        assert_abs_diff_eq!(dynamic_consistency(&[-22.0, -18.0]), 90.0);
        assert_eq!(dynamic_consistency(&[-60.0, -10.0]), 0.0);
    }

    #[test]
    fn test_mix_depth_saturates() {
        assert_eq!(mix_depth(0.0), 0.0);
        assert_abs_diff_eq!(mix_depth(0.25), 50.0);
        assert_eq!(mix_depth(0.9), 100.0);
    }

    #[test]
    fn test_estimate_uses_each_input() {
        let stereo = StereoAnalysis {
            correlation: 0.6,
            width: 0.3,
            balance: 0.1,
            ..StereoAnalysis::default()
        };
        let cohesion = estimate_cohesion(&stereo, &BandRatios::from_array([0.2; 5]), &[-14.0]);

        assert_abs_diff_eq!(cohesion.phase_integrity, 80.0, epsilon = 1e-4);
        assert_abs_diff_eq!(cohesion.spatial_balance, 90.0, epsilon = 1e-4);
        assert_abs_diff_eq!(cohesion.spectral_coherence, 100.0, epsilon = 1e-3);
        assert_eq!(cohesion.dynamic_consistency, 100.0);
        assert_abs_diff_eq!(cohesion.mix_depth, 60.0, epsilon = 1e-4);
    }
}
