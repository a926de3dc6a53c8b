//! Stereo correlation and mid/side analysis
//!
//! - **Correlation**: phase coherence between L/R channels (-1 to +1)
//! - **Width**: side level relative to mid level (0 = mono, 1 = side dominant)
//! - **Balance**: left/right level balance (-1 to +1)
//! - **Mid/Side ratio**: mid energy over side energy

use mixdoctor_core::MAX_MID_SIDE_RATIO;

/// Stereo analysis results
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct StereoAnalysis {
    /// Phase correlation (-1.0 to 1.0)
    /// - 1.0 = Mono (L and R identical)
    /// - 0.0 = Uncorrelated (independent L/R)
    /// - -1.0 = Out of phase (L and R are inverted)
    pub correlation: f32,

    /// Stereo width (0.0 to 1.0), side RMS over mid RMS, clamped
    /// - 0.0 = Mono
    /// - 0.5 = Typical stereo mix
    /// - 1.0 = Side at or above mid level
    pub width: f32,

    /// Left/right balance (-1.0 = full left, 1.0 = full right)
    pub balance: f32,

    /// Mid (L+R)/2 RMS level
    pub mid_level: f32,

    /// Side (L-R)/2 RMS level
    pub side_level: f32,

    /// Left channel RMS level
    pub left_level: f32,

    /// Right channel RMS level
    pub right_level: f32,
}

impl StereoAnalysis {
    /// Mid energy over side energy, capped at [`MAX_MID_SIDE_RATIO`].
    ///
    /// Silence and pure side signals give 0.
    pub fn mid_side_ratio(&self) -> f32 {
        let mid = self.mid_level * self.mid_level;
        let side = self.side_level * self.side_level;
        if mid <= 0.0 {
            0.0
        } else if side <= 0.0 {
            MAX_MID_SIDE_RATIO
        } else {
            (mid / side).min(MAX_MID_SIDE_RATIO)
        }
    }

    /// Check if the signal is essentially mono
    pub fn is_mono(&self) -> bool {
        self.correlation > 0.95
    }
}

/// Analyze a stereo buffer.
///
/// Only the first `min(left.len(), right.len())` frames are used.
pub fn analyze_stereo(left: &[f32], right: &[f32]) -> StereoAnalysis {
    let len = left.len().min(right.len());
    if len == 0 {
        return StereoAnalysis::default();
    }

    let mut sum_l_sq = 0.0f64;
    let mut sum_r_sq = 0.0f64;
    let mut sum_lr = 0.0f64;
    let mut sum_mid_sq = 0.0f64;
    let mut sum_side_sq = 0.0f64;

    for (&l, &r) in left[..len].iter().zip(&right[..len]) {
        let l = l as f64;
        let r = r as f64;

        sum_l_sq += l * l;
        sum_r_sq += r * r;
        sum_lr += l * r;

        let mid = (l + r) * 0.5;
        let side = (l - r) * 0.5;
        sum_mid_sq += mid * mid;
        sum_side_sq += side * side;
    }

    let n = len as f64;

    let left_rms = (sum_l_sq / n).sqrt() as f32;
    let right_rms = (sum_r_sq / n).sqrt() as f32;
    let mid_rms = (sum_mid_sq / n).sqrt() as f32;
    let side_rms = (sum_side_sq / n).sqrt() as f32;

    // r = Σ(L*R) / sqrt(Σ(L²) * Σ(R²))
    let correlation = if sum_l_sq > 0.0 && sum_r_sq > 0.0 {
        ((sum_lr / (sum_l_sq.sqrt() * sum_r_sq.sqrt())) as f32).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    let width = if mid_rms > 0.0 {
        (side_rms / mid_rms).clamp(0.0, 1.0)
    } else if side_rms > 0.0 {
        1.0
    } else {
        0.0
    };

    let total_level = left_rms + right_rms;
    let balance = if total_level > 0.0 {
        (right_rms - left_rms) / total_level
    } else {
        0.0
    };

    StereoAnalysis {
        correlation,
        width,
        balance,
        mid_level: mid_rms,
        side_level: side_rms,
        left_level: left_rms,
        right_level: right_rms,
    }
}

/// Analyze stereo from interleaved samples
pub fn analyze_stereo_interleaved(samples: &[f32]) -> StereoAnalysis {
    let (left, right) = deinterleave(samples);
    analyze_stereo(&left, &right)
}

/// Split interleaved L/R samples into two channels. A trailing odd sample is dropped.
pub fn deinterleave(samples: &[f32]) -> (Vec<f32>, Vec<f32>) {
    samples
        .chunks_exact(2)
        .map(|frame| (frame[0], frame[1]))
        .unzip()
}
