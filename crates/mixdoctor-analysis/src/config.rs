//! Extraction configuration.

use crate::error::{Error, Result};
use mixdoctor_core::Band;

/// Lowest supported sample rate in Hz.
pub const MIN_SAMPLE_RATE: u32 = 8_000;
/// Highest supported sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 384_000;

/// Parameters for [`FeatureExtractor`](crate::FeatureExtractor).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ExtractionConfig {
    /// FFT frame size for band energy. Rounded up to a power of two.
    pub fft_size: usize,
    /// Samples between FFT frames.
    pub hop_size: usize,
    /// Block length for short-term RMS (dynamic consistency), in ms.
    pub block_ms: f32,
    /// Band edges in Hz: bass, low-mid, mid, high-mid, high.
    pub band_edges: [f32; Band::COUNT + 1],
    /// Short-term blocks quieter than this are ignored for dynamic consistency.
    pub block_gate_db: f32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fft_size: 4096,
            hop_size: 2048,
            block_ms: 400.0,
            band_edges: [20.0, 250.0, 500.0, 2_000.0, 6_000.0, 20_000.0],
            block_gate_db: -70.0,
        }
    }
}

impl ExtractionConfig {
    /// Check that sizes are non-zero and band edges strictly increase.
    pub fn validate(&self) -> Result<()> {
        if self.fft_size < 64 {
            return Err(Error::InvalidConfig(format!(
                "fft_size must be at least 64, got {}",
                self.fft_size
            )));
        }
        if self.hop_size == 0 || self.hop_size > self.fft_size {
            return Err(Error::InvalidConfig(format!(
                "hop_size must be in 1..={}, got {}",
                self.fft_size, self.hop_size
            )));
        }
        if !(self.block_ms.is_finite() && self.block_ms > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "block_ms must be positive, got {}",
                self.block_ms
            )));
        }
        if !self.block_gate_db.is_finite() {
            return Err(Error::InvalidConfig("block_gate_db must be finite".into()));
        }
        if self.band_edges[0] < 0.0
            || self
                .band_edges
                .windows(2)
                .any(|w| !(w[0].is_finite() && w[1].is_finite() && w[0] < w[1]))
        {
            return Err(Error::InvalidConfig(format!(
                "band edges must be non-negative and strictly increasing, got {:?}",
                self.band_edges
            )));
        }
        Ok(())
    }

    /// Frame size actually used by the FFT.
    pub fn frame_size(&self) -> usize {
        self.fft_size.next_power_of_two()
    }

    /// Short-term block length in samples, at least one.
    pub fn block_len(&self, sample_rate: u32) -> usize {
        ((self.block_ms / 1000.0 * sample_rate as f32) as usize).max(1)
    }
}

/// Reject sample rates outside what the loudness meter supports.
pub fn check_sample_rate(sample_rate: u32) -> Result<()> {
    if (MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&sample_rate) {
        Ok(())
    } else {
        Err(Error::InvalidSampleRate(sample_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ExtractionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_edges() {
        let config = ExtractionConfig {
            band_edges: [20.0, 500.0, 250.0, 2_000.0, 6_000.0, 20_000.0],
            ..ExtractionConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_bad_sizes() {
        let config = ExtractionConfig {
            hop_size: 0,
            ..ExtractionConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ExtractionConfig {
            fft_size: 16,
            ..ExtractionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_block_len() {
        let config = ExtractionConfig::default();
        assert_eq!(config.block_len(48_000), 19_200);
        assert_eq!(config.frame_size(), 4096);
    }

    #[test]
    fn test_sample_rate_bounds() {
        assert!(check_sample_rate(44_100).is_ok());
        assert!(matches!(
            check_sample_rate(0),
            Err(Error::InvalidSampleRate(0))
        ));
        assert!(check_sample_rate(1_000_000).is_err());
    }
}
