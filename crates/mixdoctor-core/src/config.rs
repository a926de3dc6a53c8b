//! Scoring configuration: every threshold, calibration constant and weight
//! the classifiers and the aggregator read.
//!
//! Shared read-only between concurrent analyses once built.

use crate::features::Band;
use crate::{Error, Result};

/// Correlation thresholds for the phase classifier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct PhaseThresholds {
    /// Below this correlation the mix has severe cancellation
    pub error_threshold: f32,
    /// Below this correlation the mix has moderate phase problems
    pub warning_threshold: f32,
}

impl Default for PhaseThresholds {
    fn default() -> Self {
        Self {
            error_threshold: 0.0,
            warning_threshold: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct StereoThresholds {
    /// Widths below this are too narrow
    pub narrow_threshold: f32,
    /// Widths above this are too wide
    pub wide_threshold: f32,
    /// Largest acceptable |left/right balance|
    pub max_balance_offset: f32,
}

impl Default for StereoThresholds {
    fn default() -> Self {
        Self {
            narrow_threshold: 0.3,
            wide_threshold: 0.7,
            max_balance_offset: 0.2,
        }
    }
}

/// Expected energy share of one band in a typical mix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct BandTarget {
    pub ideal: f32,
    /// Below this the band is deficient
    pub low: f32,
    /// Above this the band is excessive
    pub high: f32,
    /// Whether leaving the range trips the overall imbalance flag
    pub critical: bool,
}

impl BandTarget {
    pub const fn new(ideal: f32, low: f32, high: f32, critical: bool) -> Self {
        Self {
            ideal,
            low,
            high,
            critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct FrequencyCalibration {
    pub bass: BandTarget,
    pub low_mid: BandTarget,
    pub mid: BandTarget,
    pub high_mid: BandTarget,
    pub high: BandTarget,
    /// How far outside its range a critical band must be to count as imbalance
    pub tolerance: f32,
    /// Mean absolute deviation is multiplied by this before being subtracted from 1
    pub deviation_scale: f32,
}

impl Default for FrequencyCalibration {
    fn default() -> Self {
        Self {
            bass: BandTarget::new(0.25, 0.15, 0.35, true),
            low_mid: BandTarget::new(0.15, 0.08, 0.24, false),
            mid: BandTarget::new(0.30, 0.20, 0.42, true),
            high_mid: BandTarget::new(0.18, 0.10, 0.27, false),
            high: BandTarget::new(0.12, 0.05, 0.20, true),
            tolerance: 0.02,
            deviation_scale: 3.0,
        }
    }
}

impl FrequencyCalibration {
    pub fn target(&self, band: Band) -> &BandTarget {
        match band {
            Band::Bass => &self.bass,
            Band::LowMid => &self.low_mid,
            Band::Mid => &self.mid,
            Band::HighMid => &self.high_mid,
            Band::High => &self.high,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct DynamicsThresholds {
    /// Dynamic range (dB) below which the mix is severely compressed
    pub severe_compression_db: f32,
    /// Dynamic range (dB) below which the mix is over-compressed
    pub over_compression_db: f32,
    /// Dynamic range (dB) above which the mix is overly dynamic
    pub excessive_range_db: f32,
    /// Sample peak (dBFS) above which the file is clipping
    pub clipping_peak_dbfs: f32,
    /// True peak (dBTP) above which inter-sample overs are likely
    pub true_peak_ceiling_dbtp: f32,
    pub min_loudness_lufs: f32,
    pub max_loudness_lufs: f32,
}

impl Default for DynamicsThresholds {
    fn default() -> Self {
        Self {
            severe_compression_db: 4.0,
            over_compression_db: 6.0,
            excessive_range_db: 18.0,
            clipping_peak_dbfs: -0.1,
            true_peak_ceiling_dbtp: -1.0,
            min_loudness_lufs: -30.0,
            max_loudness_lufs: -8.0,
        }
    }
}

/// Lower bounds of the cohesion grades.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct CohesionBands {
    pub excellent: f32,
    pub good: f32,
    pub fair: f32,
}

impl Default for CohesionBands {
    fn default() -> Self {
        Self {
            excellent: 70.0,
            good: 50.0,
            fair: 30.0,
        }
    }
}

/// Weights of the dimension sub-scores in the overall score. Must sum to 1.0.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct ScoreWeights {
    pub phase: f32,
    pub frequency: f32,
    pub dynamics: f32,
    pub stereo: f32,
    pub loudness: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            phase: 0.25,
            frequency: 0.25,
            dynamics: 0.20,
            stereo: 0.15,
            loudness: 0.15,
        }
    }
}

impl ScoreWeights {
    pub fn sum(&self) -> f32 {
        self.phase + self.frequency + self.dynamics + self.stereo + self.loudness
    }
}

/// Looser thresholds applied in the lenient issue tier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct LenientThresholds {
    pub min_correlation: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub min_dynamic_range_db: f32,
    pub min_balance_score: f32,
    pub min_loudness_lufs: f32,
    pub max_loudness_lufs: f32,
}

impl Default for LenientThresholds {
    fn default() -> Self {
        Self {
            min_correlation: 0.5,
            min_width: 0.35,
            max_width: 0.65,
            min_dynamic_range_db: 8.0,
            min_balance_score: 80.0,
            min_loudness_lufs: -20.0,
            max_loudness_lufs: -10.0,
        }
    }
}

/// Which issues are surfaced, by overall score.
///
/// - `score >= fast_path_score`: nothing
/// - `lenient_below <= score < fast_path_score`: one issue per raised flag
/// - `critical_below <= score < lenient_below`: flags plus [`LenientThresholds`]
/// - `score < critical_below`: critical problems only
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct IssuePolicy {
    pub fast_path_score: f32,
    pub lenient_below: f32,
    pub critical_below: f32,
    pub lenient: LenientThresholds,
    /// Balance score under which frequency balance is reported as critical
    pub critical_balance_score: f32,
}

impl Default for IssuePolicy {
    fn default() -> Self {
        Self {
            fast_path_score: 85.0,
            lenient_below: 60.0,
            critical_below: 55.0,
            lenient: LenientThresholds::default(),
            critical_balance_score: 40.0,
        }
    }
}

/// Configuration for the scoring engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct ScoringConfig {
    pub phase: PhaseThresholds,
    pub stereo: StereoThresholds,
    pub frequency: FrequencyCalibration,
    pub dynamics: DynamicsThresholds,
    pub cohesion: CohesionBands,
    pub weights: ScoreWeights,
    pub issues: IssuePolicy,
    pub max_recommendations: usize,
    /// Cap on per-band frequency recommendations
    pub max_band_insights: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            phase: PhaseThresholds::default(),
            stereo: StereoThresholds::default(),
            frequency: FrequencyCalibration::default(),
            dynamics: DynamicsThresholds::default(),
            cohesion: CohesionBands::default(),
            weights: ScoreWeights::default(),
            issues: IssuePolicy::default(),
            max_recommendations: 8,
            max_band_insights: 3,
        }
    }
}

const WEIGHT_SUM_TOLERANCE: f32 = 1e-3;

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidConfig(msg.into())
}

fn ensure_finite(name: &str, values: &[f32]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(invalid(format!("{name} contains a non-finite value")))
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        let phase = &self.phase;
        ensure_finite("phase", &[phase.error_threshold, phase.warning_threshold])?;
        if !(-1.0 < phase.error_threshold
            && phase.error_threshold < phase.warning_threshold
            && phase.warning_threshold <= 1.0)
        {
            return Err(invalid(format!(
                "phase thresholds must satisfy -1 < error ({}) < warning ({}) <= 1",
                phase.error_threshold, phase.warning_threshold
            )));
        }

        let stereo = &self.stereo;
        ensure_finite(
            "stereo",
            &[
                stereo.narrow_threshold,
                stereo.wide_threshold,
                stereo.max_balance_offset,
            ],
        )?;
        if !(0.0 <= stereo.narrow_threshold
            && stereo.narrow_threshold < stereo.wide_threshold
            && stereo.wide_threshold <= 1.0)
        {
            return Err(invalid(format!(
                "stereo width thresholds must satisfy 0 <= narrow ({}) < wide ({}) <= 1",
                stereo.narrow_threshold, stereo.wide_threshold
            )));
        }
        if !(0.0..=1.0).contains(&stereo.max_balance_offset) {
            return Err(invalid("max_balance_offset must be within 0-1"));
        }

        for band in Band::ALL {
            let t = self.frequency.target(band);
            ensure_finite(band.name(), &[t.ideal, t.low, t.high])?;
            if !(0.0 <= t.low && t.low <= t.ideal && t.ideal <= t.high && t.high <= 1.0) {
                return Err(invalid(format!(
                    "{} band must satisfy 0 <= low ({}) <= ideal ({}) <= high ({}) <= 1",
                    band.name(),
                    t.low,
                    t.ideal,
                    t.high
                )));
            }
        }
        ensure_finite(
            "frequency",
            &[self.frequency.tolerance, self.frequency.deviation_scale],
        )?;
        if self.frequency.tolerance < 0.0 || self.frequency.deviation_scale <= 0.0 {
            return Err(invalid(
                "frequency tolerance must be >= 0 and deviation_scale > 0",
            ));
        }

        let d = &self.dynamics;
        ensure_finite(
            "dynamics",
            &[
                d.severe_compression_db,
                d.over_compression_db,
                d.excessive_range_db,
                d.clipping_peak_dbfs,
                d.true_peak_ceiling_dbtp,
                d.min_loudness_lufs,
                d.max_loudness_lufs,
            ],
        )?;
        if !(0.0 <= d.severe_compression_db
            && d.severe_compression_db <= d.over_compression_db
            && d.over_compression_db < d.excessive_range_db)
        {
            return Err(invalid(format!(
                "dynamic range thresholds must satisfy 0 <= severe ({}) <= over ({}) < excessive ({})",
                d.severe_compression_db, d.over_compression_db, d.excessive_range_db
            )));
        }
        if d.min_loudness_lufs >= d.max_loudness_lufs {
            return Err(invalid(format!(
                "loudness range is empty ({} to {} LUFS)",
                d.min_loudness_lufs, d.max_loudness_lufs
            )));
        }

        let c = &self.cohesion;
        ensure_finite("cohesion", &[c.excellent, c.good, c.fair])?;
        if !(0.0 <= c.fair && c.fair <= c.good && c.good <= c.excellent && c.excellent <= 100.0) {
            return Err(invalid(
                "cohesion bands must satisfy 0 <= fair <= good <= excellent <= 100",
            ));
        }

        let w = &self.weights;
        ensure_finite(
            "weights",
            &[w.phase, w.frequency, w.dynamics, w.stereo, w.loudness],
        )?;
        if [w.phase, w.frequency, w.dynamics, w.stereo, w.loudness]
            .iter()
            .any(|&v| v < 0.0)
        {
            return Err(invalid("score weights must be non-negative"));
        }
        let sum = w.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(Error::InvalidWeights { sum });
        }

        let p = &self.issues;
        ensure_finite(
            "issues",
            &[
                p.fast_path_score,
                p.lenient_below,
                p.critical_below,
                p.critical_balance_score,
            ],
        )?;
        if !(p.critical_below <= p.lenient_below && p.lenient_below <= p.fast_path_score) {
            return Err(invalid(format!(
                "issue tiers must satisfy critical ({}) <= lenient ({}) <= fast path ({})",
                p.critical_below, p.lenient_below, p.fast_path_score
            )));
        }
        let l = &p.lenient;
        if l.min_width > l.max_width || l.min_loudness_lufs > l.max_loudness_lufs {
            return Err(invalid("lenient thresholds describe an empty range"));
        }

        if self.max_recommendations == 0 {
            return Err(invalid("max_recommendations must be at least 1"));
        }

        Ok(())
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    #[cfg(feature = "serialization")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
