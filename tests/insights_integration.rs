//! Free-text insight bucketing through the facade.

#![cfg(feature = "insights")]

mod helpers;

use helpers::test_doctor;
use mixdoctor::insights::Section;
use mixdoctor::prelude::*;

const REVIEW: &str = "\
# Feedback

**Strengths**
- Drums hit hard and sit well with the bass
- Vocal is clear and intelligible

**Issues**
- Low-mids get muddy in the chorus
- Hi-hats are harsh

**Recommendations**
1. Cut 300 Hz on the guitars
2. De-ess the hi-hat bus
3. Cut 300 Hz on the guitars
";

#[test]
fn review_is_bucketed() {
    let insights = test_doctor().insights(REVIEW);

    assert_eq!(insights.get(Section::Strengths).len(), 2);
    assert_eq!(insights.get(Section::Issues).len(), 2);
    assert_eq!(
        insights.recommendations,
        vec!["Cut 300 Hz on the guitars", "De-ess the hi-hat bus"]
    );
}

#[test]
fn custom_extractor_caps_sections() {
    let doctor = MixDoctor::builder()
        .insight_extractor(InsightExtractor::new(1, 4))
        .build()
        .unwrap();

    let insights = doctor.insights(REVIEW);
    assert_eq!(insights.strengths.len(), 1);
    assert_eq!(insights.issues.len(), 1);
    assert_eq!(insights.recommendations.len(), 1);
}

#[test]
fn insights_do_not_touch_the_score() {
    let doctor = test_doctor();
    let before = doctor.score(&helpers::ideal_bundle());
    let _ = doctor.insights(REVIEW);
    assert_eq!(before, doctor.score(&helpers::ideal_bundle()));
}
