//! Frequency balance classification over the five band-energy ratios.
//!
//! Each band is compared against its calibrated `[low, high]` range and ideal
//! centre. The balance score falls with the mean absolute distance from the
//! ideal centres; the imbalance flag only trips on critical bands.

use crate::classifier::{Classifier, Verdict};
use mixdoctor_core::sanitize::percent;
use mixdoctor_core::{Band, BandFlags, BandRatios, BandStatus, FrequencyCalibration};

/// Outcome of frequency balance classification.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct FrequencyBalance {
    /// 0-100, 100 = every band at its ideal share
    pub balance_score: f32,
    pub imbalance: bool,
    pub bands: BandFlags,
    /// Signed `ratio - ideal` per band, ordered like [`Band::ALL`]
    pub deviations: [f32; Band::COUNT],
}

impl FrequencyBalance {
    pub fn deviation(&self, band: Band) -> f32 {
        self.deviations[band.index()]
    }
}

pub type FrequencyVerdict = Verdict<FrequencyBalance>;

const BALANCED_TEXT: &str = "Frequency balance is well distributed across the spectrum.";
const UNEVEN_TEXT: &str = "Some bands drift from typical mix proportions. Minor EQ adjustments \
may help.";
const IMBALANCED_TEXT: &str = "Frequency balance needs attention. Use EQ to bring the flagged \
bands back toward typical mix proportions.";

/// Threshold frequency balance classifier.
#[derive(Debug, Clone, Default)]
pub struct FrequencyBalanceClassifier {
    calibration: FrequencyCalibration,
}

impl FrequencyBalanceClassifier {
    pub fn new(calibration: FrequencyCalibration) -> Self {
        Self { calibration }
    }

    pub fn calibration(&self) -> &FrequencyCalibration {
        &self.calibration
    }

    fn band_status(&self, band: Band, ratio: f32) -> BandStatus {
        let target = self.calibration.target(band);
        if ratio < target.low {
            BandStatus::Deficient
        } else if ratio > target.high {
            BandStatus::Excessive
        } else {
            BandStatus::Balanced
        }
    }

    /// Distance of `ratio` outside the band's `[low, high]` range (0 inside).
    fn overshoot(&self, band: Band, ratio: f32) -> f32 {
        let target = self.calibration.target(band);
        (target.low - ratio).max(ratio - target.high).max(0.0)
    }
}

impl Classifier for FrequencyBalanceClassifier {
    type Input = BandRatios;
    type Output = FrequencyVerdict;

    fn classify(&self, bands: BandRatios) -> FrequencyVerdict {
        let bands = bands.sanitized();

        let deviations = Band::ALL.map(|band| bands.get(band) - self.calibration.target(band).ideal);
        let mean_deviation =
            deviations.iter().map(|d| d.abs()).sum::<f32>() / Band::COUNT as f32;
        let balance_score =
            percent(100.0 * (1.0 - (mean_deviation * self.calibration.deviation_scale).min(1.0)));

        let flags = BandFlags::from_fn(|band| self.band_status(band, bands.get(band)));
        let imbalance = Band::ALL.iter().any(|&band| {
            self.calibration.target(band).critical
                && self.overshoot(band, bands.get(band)) > self.calibration.tolerance
        });

        let text = if imbalance {
            IMBALANCED_TEXT
        } else if flags.all_balanced() {
            BALANCED_TEXT
        } else {
            UNEVEN_TEXT
        };

        Verdict::new(
            FrequencyBalance {
                balance_score,
                imbalance,
                bands: flags,
                deviations,
            },
            0.85,
            text,
        )
    }
}
