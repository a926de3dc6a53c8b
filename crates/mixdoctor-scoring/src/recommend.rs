//! Recommendation text generation.
//!
//! Text is fixed per verdict bucket, never templated from live values, so
//! identical buckets always produce identical advice.

use crate::dynamics::{loudness_text, range_text, CLIPPING_TEXT, TRUE_PEAK_TEXT};
use crate::ClassifierOutputs;
use mixdoctor_core::{
    Band, BandStatus, CohesionGrade, FeatureBundle, PhaseSeverity, StereoWidthClass,
};

const LR_BALANCE_TEXT: &str = "The mix leans to one side. Check panning and level balance \
between left and right channels.";

/// Fixed insight for a band that left its calibrated range.
pub fn band_text(band: Band, status: BandStatus) -> Option<&'static str> {
    let text = match (band, status) {
        (_, BandStatus::Balanced) => return None,
        (Band::Bass, BandStatus::Excessive) => {
            "Low end is heavy. Tighten the bass and kick with a high-pass on non-bass elements."
        }
        (Band::Bass, BandStatus::Deficient) => {
            "Low end is thin. Add weight to the bass and kick around 60-120 Hz."
        }
        (Band::LowMid, BandStatus::Excessive) => {
            "Low-mids are muddy. Cut around 250-500 Hz on guitars, keys and pads."
        }
        (Band::LowMid, BandStatus::Deficient) => {
            "Low-mids are hollow. Restore body around 250-500 Hz."
        }
        (Band::Mid, BandStatus::Excessive) => {
            "Midrange is crowded and boxy. Carve space between instruments around 500 Hz-2 kHz."
        }
        (Band::Mid, BandStatus::Deficient) => {
            "Midrange is scooped. Bring vocals and lead instruments forward around 1-2 kHz."
        }
        (Band::HighMid, BandStatus::Excessive) => {
            "Upper mids are harsh. Tame 2-6 kHz on vocals, cymbals and distorted guitars."
        }
        (Band::HighMid, BandStatus::Deficient) => {
            "Upper mids lack presence. Add clarity around 3-5 kHz."
        }
        (Band::High, BandStatus::Excessive) => {
            "Top end is bright and sibilant. De-ess vocals and soften the highs above 6 kHz."
        }
        (Band::High, BandStatus::Deficient) => {
            "Top end is dull. Add air with a gentle high shelf above 8 kHz."
        }
    };
    Some(text)
}

/// Turns classifier outputs into an ordered, deduplicated, capped list.
#[derive(Debug, Clone)]
pub struct RecommendationGenerator {
    max_recommendations: usize,
    max_band_insights: usize,
    max_balance_offset: f32,
}

impl Default for RecommendationGenerator {
    fn default() -> Self {
        Self {
            max_recommendations: 8,
            max_band_insights: 3,
            max_balance_offset: 0.2,
        }
    }
}

impl RecommendationGenerator {
    pub fn new(max_recommendations: usize, max_band_insights: usize, max_balance_offset: f32) -> Self {
        Self {
            max_recommendations,
            max_band_insights,
            max_balance_offset,
        }
    }

    /// Order: phase, stereo, frequency bands (largest deviation first),
    /// dynamics, clipping, true peak, loudness, cohesion, left/right balance.
    pub fn generate(&self, bundle: &FeatureBundle, outputs: &ClassifierOutputs) -> Vec<String> {
        let mut texts: Vec<&str> = Vec::new();

        if outputs.phase.kind != PhaseSeverity::None {
            texts.push(&outputs.phase.recommendation);
        }
        if outputs.stereo_width.kind != StereoWidthClass::Good {
            texts.push(&outputs.stereo_width.recommendation);
        }

        let frequency = &outputs.frequency.kind;
        let mut flagged: Vec<(Band, BandStatus)> = frequency.bands.flagged().collect();
        flagged.sort_by(|a, b| {
            frequency
                .deviation(b.0)
                .abs()
                .total_cmp(&frequency.deviation(a.0).abs())
        });
        texts.extend(
            flagged
                .into_iter()
                .filter_map(|(band, status)| band_text(band, status))
                .take(self.max_band_insights),
        );

        let dynamics = &outputs.dynamics.kind;
        if dynamics.has_dynamic_range_issues() {
            texts.push(range_text(dynamics.range));
        }
        if dynamics.clipping {
            texts.push(CLIPPING_TEXT);
        }
        if dynamics.true_peak_over {
            texts.push(TRUE_PEAK_TEXT);
        }
        if dynamics.has_loudness_issues() {
            texts.push(loudness_text(dynamics.loudness));
        }

        if matches!(
            outputs.cohesion.kind.grade,
            CohesionGrade::Fair | CohesionGrade::Poor
        ) {
            texts.push(&outputs.cohesion.recommendation);
        }
        if bundle.left_right_balance.abs() > self.max_balance_offset {
            texts.push(LR_BALANCE_TEXT);
        }

        let mut recommendations: Vec<String> = Vec::with_capacity(texts.len());
        for text in texts {
            if recommendations.len() >= self.max_recommendations {
                break;
            }
            if !recommendations.iter().any(|r| r == text) {
                recommendations.push(text.to_owned());
            }
        }
        recommendations
    }
}
