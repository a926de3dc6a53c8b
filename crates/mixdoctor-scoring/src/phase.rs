//! Phase problem classification from stereo correlation.
//!
//! - correlation < error threshold: severe cancellation when summed to mono
//! - error <= correlation < warning: moderate phase problems
//! - correlation >= warning: no issue

use crate::classifier::{Classifier, Verdict};
use mixdoctor_core::sanitize::clamp_or;
use mixdoctor_core::{PhaseSeverity, PhaseThresholds, NEUTRAL_CORRELATION};

pub type PhaseVerdict = Verdict<PhaseSeverity>;

const SEVERE_TEXT: &str = "Severe phase cancellation detected. Check polarity on stereo sources \
and avoid extreme stereo wideners; parts of the mix will disappear in mono.";
const MODERATE_TEXT: &str = "Moderate phase issues detected. Check mono compatibility and \
time-align doubled or multi-miked sources.";
const NONE_TEXT: &str = "Phase coherence is good. The mix should translate well to mono.";

/// Threshold phase classifier.
#[derive(Debug, Clone, Default)]
pub struct PhaseClassifier {
    thresholds: PhaseThresholds,
}

impl PhaseClassifier {
    pub fn new(thresholds: PhaseThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &PhaseThresholds {
        &self.thresholds
    }
}

impl Classifier for PhaseClassifier {
    type Input = f32;
    type Output = PhaseVerdict;

    fn classify(&self, correlation: f32) -> PhaseVerdict {
        let correlation = clamp_or(correlation, -1.0, 1.0, NEUTRAL_CORRELATION);

        if correlation < self.thresholds.error_threshold {
            Verdict::new(PhaseSeverity::Severe, 0.9, SEVERE_TEXT)
        } else if correlation < self.thresholds.warning_threshold {
            Verdict::new(PhaseSeverity::Moderate, 0.7, MODERATE_TEXT)
        } else {
            Verdict::new(PhaseSeverity::None, 0.95, NONE_TEXT)
        }
    }
}
