//! Stereo width classification.

use crate::classifier::{Classifier, Verdict};
use mixdoctor_core::sanitize::clamp_or;
use mixdoctor_core::{StereoThresholds, StereoWidthClass};

pub type StereoWidthVerdict = Verdict<StereoWidthClass>;

const NARROW_TEXT: &str = "Stereo image is too narrow. Pan supporting instruments wider or add \
stereo reverbs and doubles to open up the mix.";
const GOOD_TEXT: &str = "Stereo width is well balanced.";
const WIDE_TEXT: &str = "Stereo image is too wide. Keep bass and lead elements centred and \
reduce stereo widening to protect mono compatibility.";

/// Splits width into three contiguous buckets: `[0, narrow)`, `[narrow, wide]`, `(wide, 1]`.
#[derive(Debug, Clone, Default)]
pub struct StereoWidthClassifier {
    thresholds: StereoThresholds,
}

impl StereoWidthClassifier {
    pub fn new(thresholds: StereoThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &StereoThresholds {
        &self.thresholds
    }
}

impl Classifier for StereoWidthClassifier {
    type Input = f32;
    type Output = StereoWidthVerdict;

    fn classify(&self, width: f32) -> StereoWidthVerdict {
        let width = clamp_or(width, 0.0, 1.0, 0.5);

        if width < self.thresholds.narrow_threshold {
            Verdict::new(StereoWidthClass::TooNarrow, 0.8, NARROW_TEXT)
        } else if width > self.thresholds.wide_threshold {
            Verdict::new(StereoWidthClass::TooWide, 0.8, WIDE_TEXT)
        } else {
            Verdict::new(StereoWidthClass::Good, 0.9, GOOD_TEXT)
        }
    }
}
