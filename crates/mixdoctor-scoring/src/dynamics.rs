//! Dynamic range and loudness classification.
//!
//! Four independent checks, any combination may fire at once:
//! - dynamic range bucket (severely compressed / over-compressed / good / excessive)
//! - sample peak above the clipping threshold
//! - true peak above the true-peak ceiling
//! - integrated loudness outside the acceptable range

use crate::classifier::{Classifier, Verdict};
use mixdoctor_core::sanitize::clamp_or;
use mixdoctor_core::{
    DynamicRangeClass, DynamicsThresholds, LoudnessClass, LEVEL_CEILING_DB, LEVEL_FLOOR_DB,
    LOUDNESS_FLOOR_LUFS, NEUTRAL_DYNAMIC_RANGE_DB, NEUTRAL_LOUDNESS_LUFS,
};

/// Level readings consumed by [`DynamicsClassifier`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicsInput {
    /// dB
    pub dynamic_range: f32,
    /// LUFS
    pub loudness_lufs: f32,
    /// dBFS
    pub peak_level: f32,
    /// dBTP
    pub true_peak_level: f32,
}

impl DynamicsInput {
    pub fn from_bundle(bundle: &mixdoctor_core::FeatureBundle) -> Self {
        Self {
            dynamic_range: bundle.dynamic_range,
            loudness_lufs: bundle.loudness_lufs,
            peak_level: bundle.peak_level,
            true_peak_level: bundle.true_peak_level,
        }
    }

    fn sanitized(&self) -> Self {
        Self {
            dynamic_range: clamp_or(
                self.dynamic_range,
                0.0,
                LEVEL_CEILING_DB - LEVEL_FLOOR_DB,
                NEUTRAL_DYNAMIC_RANGE_DB,
            ),
            loudness_lufs: clamp_or(
                self.loudness_lufs,
                LOUDNESS_FLOOR_LUFS,
                LEVEL_CEILING_DB,
                NEUTRAL_LOUDNESS_LUFS,
            ),
            peak_level: clamp_or(self.peak_level, LEVEL_FLOOR_DB, LEVEL_CEILING_DB, LEVEL_FLOOR_DB),
            true_peak_level: clamp_or(
                self.true_peak_level,
                LEVEL_FLOOR_DB,
                LEVEL_CEILING_DB,
                LEVEL_FLOOR_DB,
            ),
        }
    }
}

/// Outcome of dynamics classification.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DynamicsAssessment {
    pub range: DynamicRangeClass,
    pub loudness: LoudnessClass,
    /// Sample peak above the clipping threshold
    pub clipping: bool,
    /// True peak above the ceiling (inter-sample overs after conversion)
    pub true_peak_over: bool,
}

impl DynamicsAssessment {
    pub fn has_dynamic_range_issues(&self) -> bool {
        self.range != DynamicRangeClass::Good
    }

    pub fn has_loudness_issues(&self) -> bool {
        self.loudness != LoudnessClass::Acceptable
    }
}

pub type DynamicsVerdict = Verdict<DynamicsAssessment>;

/// Fixed text per dynamic range bucket.
pub fn range_text(class: DynamicRangeClass) -> &'static str {
    match class {
        DynamicRangeClass::SeverelyCompressed => {
            "The mix is severely compressed. Back off bus compression and limiting to restore \
transients and punch."
        }
        DynamicRangeClass::OverCompressed => {
            "The mix sounds over-compressed. Ease off the limiter or use gentler compression \
ratios."
        }
        DynamicRangeClass::Good => "Dynamic range is healthy.",
        DynamicRangeClass::Excessive => {
            "Dynamic range is very wide. Gentle compression will keep quiet passages audible \
on small speakers."
        }
    }
}

/// Fixed text per loudness bucket.
pub fn loudness_text(class: LoudnessClass) -> &'static str {
    match class {
        LoudnessClass::TooQuiet => {
            "The mix is very quiet. Raise the overall level toward -14 LUFS for streaming \
platforms."
        }
        LoudnessClass::Acceptable => "Loudness is within the acceptable range.",
        LoudnessClass::TooLoud => {
            "The mix is extremely loud. Streaming platforms will turn it down; reduce limiting \
to regain dynamics."
        }
    }
}

pub const CLIPPING_TEXT: &str =
    "Clipping detected. Lower the master level so sample peaks stay below 0 dBFS.";
pub const TRUE_PEAK_TEXT: &str = "True peak exceeds -1 dBTP. Use a true-peak limiter to avoid \
distortion after lossy encoding.";

/// Threshold dynamics classifier.
#[derive(Debug, Clone, Default)]
pub struct DynamicsClassifier {
    thresholds: DynamicsThresholds,
}

impl DynamicsClassifier {
    pub fn new(thresholds: DynamicsThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &DynamicsThresholds {
        &self.thresholds
    }

    fn range_class(&self, dynamic_range: f32) -> DynamicRangeClass {
        let t = &self.thresholds;
        if dynamic_range < t.severe_compression_db {
            DynamicRangeClass::SeverelyCompressed
        } else if dynamic_range < t.over_compression_db {
            DynamicRangeClass::OverCompressed
        } else if dynamic_range > t.excessive_range_db {
            DynamicRangeClass::Excessive
        } else {
            DynamicRangeClass::Good
        }
    }

    fn loudness_class(&self, lufs: f32) -> LoudnessClass {
        if lufs < self.thresholds.min_loudness_lufs {
            LoudnessClass::TooQuiet
        } else if lufs > self.thresholds.max_loudness_lufs {
            LoudnessClass::TooLoud
        } else {
            LoudnessClass::Acceptable
        }
    }
}

impl Classifier for DynamicsClassifier {
    type Input = DynamicsInput;
    type Output = DynamicsVerdict;

    fn classify(&self, input: DynamicsInput) -> DynamicsVerdict {
        let input = input.sanitized();

        let assessment = DynamicsAssessment {
            range: self.range_class(input.dynamic_range),
            loudness: self.loudness_class(input.loudness_lufs),
            clipping: input.peak_level > self.thresholds.clipping_peak_dbfs,
            true_peak_over: input.true_peak_level > self.thresholds.true_peak_ceiling_dbtp,
        };

        Verdict::new(assessment, 0.9, range_text(assessment.range))
    }
}
