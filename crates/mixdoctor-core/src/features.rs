//! Feature bundle: the scalar audio features of one analyzed file.
//!
//! Produced by a feature extractor (see `mixdoctor-analysis`) and consumed by
//! the scoring classifiers. Field ranges are documented per field; values
//! outside them are clamped by [`FeatureBundle::sanitized`].

use crate::sanitize::clamp_or;

/// Lowest level reported for silence (dBFS / dBTP).
pub const LEVEL_FLOOR_DB: f32 = -144.0;

/// Highest level accepted for peak/RMS readings (float files can exceed 0 dBFS).
pub const LEVEL_CEILING_DB: f32 = 24.0;

/// Integrated loudness reported for silence.
pub const LOUDNESS_FLOOR_LUFS: f32 = -70.0;

/// Upper bound for the mid/side energy ratio.
pub const MAX_MID_SIDE_RATIO: f32 = 1000.0;

// Stand-ins for NaN readings. Each sits inside the no-issue bucket of the
// default classifiers and the lenient issue tier, so a missing feature
// never produces a diagnosis of its own.
pub const NEUTRAL_CORRELATION: f32 = 0.6;
pub const NEUTRAL_DYNAMIC_RANGE_DB: f32 = 12.0;
pub const NEUTRAL_LOUDNESS_LUFS: f32 = -15.0;
/// Even share across the five bands.
pub const NEUTRAL_BAND_RATIO: f32 = 0.2;
pub const NEUTRAL_COHESION: f32 = 50.0;

/// The five analysis bands, low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Band {
    Bass,
    LowMid,
    Mid,
    HighMid,
    High,
}

impl Band {
    pub const COUNT: usize = 5;

    pub const ALL: [Band; Band::COUNT] = [
        Band::Bass,
        Band::LowMid,
        Band::Mid,
        Band::HighMid,
        Band::High,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Band::Bass => "bass",
            Band::LowMid => "low-mid",
            Band::Mid => "mid",
            Band::HighMid => "high-mid",
            Band::High => "high",
        }
    }
}

/// Fraction of total spectral energy per band.
///
/// Each ratio is in `[0, 1]`. They are treated as approximately normalized
/// but are not required to sum to exactly 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(rename_all = "camelCase"))]
pub struct BandRatios {
    pub bass: f32,
    pub low_mid: f32,
    pub mid: f32,
    pub high_mid: f32,
    pub high: f32,
}

impl BandRatios {
    pub fn new(bass: f32, low_mid: f32, mid: f32, high_mid: f32, high: f32) -> Self {
        Self {
            bass,
            low_mid,
            mid,
            high_mid,
            high,
        }
    }

    /// Build from an array ordered like [`Band::ALL`].
    pub fn from_array(values: [f32; Band::COUNT]) -> Self {
        Self::new(values[0], values[1], values[2], values[3], values[4])
    }

    pub fn to_array(self) -> [f32; Band::COUNT] {
        [self.bass, self.low_mid, self.mid, self.high_mid, self.high]
    }

    pub fn get(&self, band: Band) -> f32 {
        match band {
            Band::Bass => self.bass,
            Band::LowMid => self.low_mid,
            Band::Mid => self.mid,
            Band::HighMid => self.high_mid,
            Band::High => self.high,
        }
    }

    /// Iterate `(band, ratio)` pairs from low to high.
    pub fn iter(&self) -> impl Iterator<Item = (Band, f32)> + '_ {
        Band::ALL.iter().map(move |&band| (band, self.get(band)))
    }

    pub fn sum(&self) -> f32 {
        self.to_array().iter().sum()
    }

    pub fn sanitized(&self) -> Self {
        Self::from_array(
            self.to_array()
                .map(|r| clamp_or(r, 0.0, 1.0, NEUTRAL_BAND_RATIO)),
        )
    }
}

/// Mix cohesion sub-metrics, each on a `[0, 100]` scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(rename_all = "camelCase"))]
pub struct CohesionInputs {
    pub spectral_coherence: f32,
    pub phase_integrity: f32,
    pub dynamic_consistency: f32,
    pub spatial_balance: f32,
    pub mix_depth: f32,
}

impl CohesionInputs {
    pub fn new(
        spectral_coherence: f32,
        phase_integrity: f32,
        dynamic_consistency: f32,
        spatial_balance: f32,
        mix_depth: f32,
    ) -> Self {
        Self {
            spectral_coherence,
            phase_integrity,
            dynamic_consistency,
            spatial_balance,
            mix_depth,
        }
    }

    /// All five sub-scores set to the same value.
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value, value)
    }

    pub fn to_array(self) -> [f32; 5] {
        [
            self.spectral_coherence,
            self.phase_integrity,
            self.dynamic_consistency,
            self.spatial_balance,
            self.mix_depth,
        ]
    }

    pub fn sanitized(&self) -> Self {
        let [a, b, c, d, e] = self
            .to_array()
            .map(|v| clamp_or(v, 0.0, 100.0, NEUTRAL_COHESION));
        Self::new(a, b, c, d, e)
    }
}

/// All scalar features for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(rename_all = "camelCase"))]
pub struct FeatureBundle {
    /// Stereo correlation (-1.0 to 1.0). Negative values mean cancellation in mono.
    pub correlation: f32,

    /// Stereo width (0.0 = mono, 1.0 = side energy at or above mid energy)
    pub stereo_width: f32,

    /// Left/right balance (-1.0 = full left, 1.0 = full right)
    pub left_right_balance: f32,

    /// Mid to side energy ratio (linear, >= 0)
    pub mid_side_ratio: f32,

    pub bands: BandRatios,

    /// Sample peak in dBFS
    pub peak_level: f32,

    /// True (inter-sample) peak in dBTP
    pub true_peak_level: f32,

    /// RMS level in dBFS
    pub rms_level: f32,

    /// Integrated loudness in LUFS
    pub loudness_lufs: f32,

    /// Peak to RMS distance in dB
    pub dynamic_range: f32,

    pub cohesion: CohesionInputs,
}

impl Default for FeatureBundle {
    /// A well-balanced reference mix.
    fn default() -> Self {
        Self {
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
            cohesion: CohesionInputs::uniform(75.0),
        }
    }
}

impl FeatureBundle {
    /// Copy with every field clamped to its documented range.
    ///
    /// NaN maps to a neutral reading that raises no flag: the `NEUTRAL_*`
    /// constants for correlation, dynamic range, loudness, band ratios and
    /// cohesion, the centre of the good band for width, centred balance and
    /// silence for peak and RMS levels.
    pub fn sanitized(&self) -> Self {
        Self {
            correlation: clamp_or(self.correlation, -1.0, 1.0, NEUTRAL_CORRELATION),
            stereo_width: clamp_or(self.stereo_width, 0.0, 1.0, 0.5),
            left_right_balance: clamp_or(self.left_right_balance, -1.0, 1.0, 0.0),
            mid_side_ratio: clamp_or(self.mid_side_ratio, 0.0, MAX_MID_SIDE_RATIO, 1.0),
            bands: self.bands.sanitized(),
            peak_level: clamp_or(self.peak_level, LEVEL_FLOOR_DB, LEVEL_CEILING_DB, LEVEL_FLOOR_DB),
            true_peak_level: clamp_or(
                self.true_peak_level,
                LEVEL_FLOOR_DB,
                LEVEL_CEILING_DB,
                LEVEL_FLOOR_DB,
            ),
            rms_level: clamp_or(self.rms_level, LEVEL_FLOOR_DB, LEVEL_CEILING_DB, LEVEL_FLOOR_DB),
            loudness_lufs: clamp_or(
                self.loudness_lufs,
                LOUDNESS_FLOOR_LUFS,
                LEVEL_CEILING_DB,
                NEUTRAL_LOUDNESS_LUFS,
            ),
            dynamic_range: clamp_or(
                self.dynamic_range,
                0.0,
                LEVEL_CEILING_DB - LEVEL_FLOOR_DB,
                NEUTRAL_DYNAMIC_RANGE_DB,
            ),
            cohesion: self.cohesion.sanitized(),
        }
    }

    /// Number of NaN or infinite fields.
    pub fn non_finite_count(&self) -> usize {
        let scalars = [
            self.correlation,
            self.stereo_width,
            self.left_right_balance,
            self.mid_side_ratio,
            self.peak_level,
            self.true_peak_level,
            self.rms_level,
            self.loudness_lufs,
            self.dynamic_range,
        ];
        scalars
            .iter()
            .chain(self.bands.to_array().iter())
            .chain(self.cohesion.to_array().iter())
            .filter(|v| !v.is_finite())
            .count()
    }
}
