//! PCM to [`FeatureBundle`].

use crate::cohesion::estimate_cohesion;
use crate::config::{check_sample_rate, ExtractionConfig};
use crate::correlation::{analyze_stereo, deinterleave};
use crate::error::{Error, Result};
use crate::levels::{analyze_levels, block_levels};
use crate::loudness::analyze_loudness;
use crate::spectrum::analyze_bands;
use mixdoctor_core::FeatureBundle;
use tracing::debug;

/// Extracts the scalar features the scoring engine consumes.
///
/// # Example
///
/// ```rust
/// use mixdoctor_analysis::FeatureExtractor;
///
/// let sample_rate = 48_000;
/// let tone: Vec<f32> = (0..sample_rate * 2)
///     .map(|i| 0.5 * (2.0 * std::f32::consts::PI * 440.0 * i as f32 / sample_rate as f32).sin())
///     .collect();
///
/// let extractor = FeatureExtractor::default();
/// let features = extractor.extract(&tone, &tone, sample_rate as u32).unwrap();
/// assert!(features.correlation > 0.99);
/// assert!(features.stereo_width < 0.01);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    config: ExtractionConfig,
}

impl FeatureExtractor {
    pub fn new(config: ExtractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Measure one stereo file given as planar channels.
    pub fn extract(&self, left: &[f32], right: &[f32], sample_rate: u32) -> Result<FeatureBundle> {
        if left.is_empty() || right.is_empty() {
            return Err(Error::EmptyBuffer);
        }
        if left.len() != right.len() {
            return Err(Error::ChannelLengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        check_sample_rate(sample_rate)?;

        debug!(
            "Extracting features: {} frames at {} Hz ({:.2}s)",
            left.len(),
            sample_rate,
            left.len() as f64 / sample_rate as f64
        );

        let stereo = analyze_stereo(left, right);
        let levels = analyze_levels(left, right);
        let loudness = analyze_loudness(left, right, sample_rate)?;

        let mono: Vec<f32> = left
            .iter()
            .zip(right)
            .map(|(&l, &r)| (l + r) * 0.5)
            .collect();
        let bands = analyze_bands(&mono, sample_rate, &self.config);
        let blocks = block_levels(
            &mono,
            self.config.block_len(sample_rate),
            self.config.block_gate_db,
        );
        let cohesion = estimate_cohesion(&stereo, &bands, &blocks);

        let bundle = FeatureBundle {
            correlation: stereo.correlation,
            stereo_width: stereo.width,
            left_right_balance: stereo.balance,
            mid_side_ratio: stereo.mid_side_ratio(),
            bands,
            peak_level: levels.peak_db,
            true_peak_level: loudness.true_peak_dbtp,
            rms_level: levels.rms_db,
            loudness_lufs: loudness.integrated_lufs,
            dynamic_range: levels.dynamic_range(),
            cohesion,
        };

        debug!(
            "Features: corr={:.2} width={:.2} lufs={:.1} peak={:.1} dr={:.1}",
            bundle.correlation,
            bundle.stereo_width,
            bundle.loudness_lufs,
            bundle.peak_level,
            bundle.dynamic_range
        );
        Ok(bundle)
    }

    /// Measure one stereo file given as interleaved L/R samples.
    pub fn extract_interleaved(&self, samples: &[f32], sample_rate: u32) -> Result<FeatureBundle> {
        let (left, right) = deinterleave(samples);
        self.extract(&left, &right, sample_rate)
    }
}
