//! Verdict buckets produced by the classifiers.

use crate::features::Band;

/// Phase problem severity. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum PhaseSeverity {
    None,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum StereoWidthClass {
    TooNarrow,
    Good,
    TooWide,
}

/// Per-band energy verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum BandStatus {
    Deficient,
    #[default]
    Balanced,
    Excessive,
}

/// [`BandStatus`] for each of the five bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct BandFlags([BandStatus; Band::COUNT]);

impl BandFlags {
    pub fn from_fn(f: impl FnMut(Band) -> BandStatus) -> Self {
        Self(Band::ALL.map(f))
    }

    pub fn get(&self, band: Band) -> BandStatus {
        self.0[band.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Band, BandStatus)> + '_ {
        Band::ALL.iter().map(move |&band| (band, self.get(band)))
    }

    /// Bands not flagged as balanced.
    pub fn flagged(&self) -> impl Iterator<Item = (Band, BandStatus)> + '_ {
        self.iter()
            .filter(|(_, status)| *status != BandStatus::Balanced)
    }

    pub fn all_balanced(&self) -> bool {
        self.flagged().next().is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum DynamicRangeClass {
    SeverelyCompressed,
    OverCompressed,
    Good,
    Excessive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum LoudnessClass {
    TooQuiet,
    Acceptable,
    TooLoud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum CohesionGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl CohesionGrade {
    pub fn name(self) -> &'static str {
        match self {
            CohesionGrade::Excellent => "excellent",
            CohesionGrade::Good => "good",
            CohesionGrade::Fair => "fair",
            CohesionGrade::Poor => "poor",
        }
    }
}

/// Which bucket each classifier landed in for one analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(rename_all = "camelCase"))]
pub struct VerdictSummary {
    pub phase: PhaseSeverity,
    pub stereo_width: StereoWidthClass,
    pub bands: BandFlags,
    pub dynamic_range: DynamicRangeClass,
    pub loudness: LoudnessClass,
    pub cohesion: CohesionGrade,
}
