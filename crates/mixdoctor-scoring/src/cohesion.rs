//! Mix cohesion: uniform mean of the five cohesion sub-scores.

use crate::classifier::{Classifier, Verdict};
use mixdoctor_core::{CohesionBands, CohesionGrade, CohesionInputs};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Cohesion {
    /// 0-100
    pub score: f32,
    pub grade: CohesionGrade,
}

pub type CohesionVerdict = Verdict<Cohesion>;

pub fn grade_text(grade: CohesionGrade) -> &'static str {
    match grade {
        CohesionGrade::Excellent => {
            "The mix elements blend into a cohesive whole with clear depth and space."
        }
        CohesionGrade::Good => "The mix holds together well with minor separation issues.",
        CohesionGrade::Fair => {
            "Mix elements feel somewhat disconnected. Shared reverb, bus processing and \
careful level balancing can glue them together."
        }
        CohesionGrade::Poor => {
            "The mix lacks cohesion. Rebalance levels and panning and place elements in a \
common acoustic space."
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CohesionAggregator {
    bands: CohesionBands,
}

impl CohesionAggregator {
    pub fn new(bands: CohesionBands) -> Self {
        Self { bands }
    }

    pub fn aggregate(&self, inputs: CohesionInputs) -> CohesionVerdict {
        self.classify(inputs)
    }

    fn grade(&self, score: f32) -> CohesionGrade {
        if score >= self.bands.excellent {
            CohesionGrade::Excellent
        } else if score >= self.bands.good {
            CohesionGrade::Good
        } else if score >= self.bands.fair {
            CohesionGrade::Fair
        } else {
            CohesionGrade::Poor
        }
    }
}

impl Classifier for CohesionAggregator {
    type Input = CohesionInputs;
    type Output = CohesionVerdict;

    fn classify(&self, inputs: CohesionInputs) -> CohesionVerdict {
        let values = inputs.sanitized().to_array();
        let score = values.iter().sum::<f32>() / values.len() as f32;
        let grade = self.grade(score);

        Verdict::new(Cohesion { score, grade }, 0.8, grade_text(grade))
    }
}
