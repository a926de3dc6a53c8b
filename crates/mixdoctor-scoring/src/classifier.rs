//! Classifier seam and the verdict wrapper every classifier returns.

use std::borrow::Cow;

/// A classifier output: the bucket, how sure the classifier is, and the
/// fixed recommendation text for that bucket.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Verdict<K> {
    pub kind: K,
    /// Confidence (0.0 to 1.0)
    pub confidence: f32,
    pub recommendation: Cow<'static, str>,
}

impl<K> Verdict<K> {
    pub fn new(kind: K, confidence: f32, recommendation: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            confidence: mixdoctor_core::sanitize::unit(confidence),
            recommendation: recommendation.into(),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(K) -> U) -> Verdict<U> {
        Verdict {
            kind: f(self.kind),
            confidence: self.confidence,
            recommendation: self.recommendation,
        }
    }
}

/// Maps one group of features to a verdict.
///
/// The threshold classifiers in this crate are the reference implementation.
/// Any other implementation (a trained model, a remote service) can be
/// plugged into [`ScoringEngine`](crate::ScoringEngine) through its builder
/// without touching the aggregator.
///
/// Implementations must be pure: the same input always yields the same
/// output, and classification never fails.
pub trait Classifier: Send + Sync {
    type Input;
    type Output;

    fn classify(&self, input: Self::Input) -> Self::Output;

    /// Short label for logs ("rules", "coreml", ...).
    fn backend(&self) -> &'static str {
        "rules"
    }
}
