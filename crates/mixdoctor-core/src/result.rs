//! Analysis result record returned to the caller.

use crate::verdict::VerdictSummary;

/// The five 0-100 quality sub-scores blended into the overall score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DimensionScores {
    pub phase: f32,
    pub stereo: f32,
    pub frequency: f32,
    pub dynamics: f32,
    pub loudness: f32,
}

/// What a reported issue is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum IssueKind {
    Phase,
    StereoWidth,
    FrequencyBalance,
    DynamicRange,
    Clipping,
    TruePeak,
    Loudness,
    InstrumentBalance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum IssueSeverity {
    Warning,
    Critical,
}

/// Which issue reporting policy applied, selected by the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum IssueTier {
    /// Score high enough that nothing is reported
    None,
    /// One issue per raised flag
    Standard,
    /// Flags plus looser marginal checks
    Lenient,
    /// Only critical problems
    CriticalOnly,
}

/// A user-visible issue.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    pub message: String,
}

impl Issue {
    pub fn warning(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: IssueSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn critical(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: IssueSeverity::Critical,
            message: message.into(),
        }
    }
}

/// Outcome of scoring one feature bundle.
///
/// Created once per analysis and never mutated afterwards. Persistence and
/// display are up to the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(rename_all = "camelCase"))]
pub struct AnalysisResult {
    /// Weighted blend of [`DimensionScores`] (0-100)
    pub overall_score: f32,

    /// Stereo width as a percentage (0-100)
    pub stereo_width_score: f32,
    /// Stereo correlation (-1.0 to 1.0)
    pub phase_coherence: f32,
    pub frequency_balance_score: f32,
    pub dynamic_range: f32,
    pub loudness_lufs: f32,
    pub peak_level: f32,
    pub rms_level: f32,
    pub true_peak_level: f32,

    pub mix_cohesion_score: f32,
    pub spectral_coherence: f32,
    pub phase_integrity: f32,
    pub dynamic_consistency: f32,
    pub spatial_balance: f32,
    pub mix_depth: f32,

    pub dimension_scores: DimensionScores,
    pub verdicts: VerdictSummary,

    pub has_phase_issues: bool,
    pub has_stereo_issues: bool,
    pub has_frequency_imbalance: bool,
    pub has_dynamic_range_issues: bool,
    pub has_clipping: bool,
    pub has_true_peak_overs: bool,
    pub has_loudness_issues: bool,
    pub has_instrument_balance_issues: bool,

    pub issue_tier: IssueTier,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// Whether any boolean issue flag is raised.
    pub fn has_any_issue(&self) -> bool {
        self.has_phase_issues
            || self.has_stereo_issues
            || self.has_frequency_imbalance
            || self.has_dynamic_range_issues
            || self.has_clipping
            || self.has_true_peak_overs
            || self.has_loudness_issues
            || self.has_instrument_balance_issues
    }

    pub fn has_issue(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|issue| issue.kind == kind)
    }

    /// Display bucket for the overall score.
    pub fn rating(&self) -> ScoreRating {
        ScoreRating::from_score(self.overall_score)
    }

    #[cfg(feature = "serialization")]
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Coarse rating shown next to the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum ScoreRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreRating {
    pub fn from_score(score: f32) -> Self {
        match score {
            s if s >= 85.0 => ScoreRating::Excellent,
            s if s >= 70.0 => ScoreRating::Good,
            s if s >= 50.0 => ScoreRating::Fair,
            _ => ScoreRating::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreRating::Excellent => "Excellent",
            ScoreRating::Good => "Good",
            ScoreRating::Fair => "Fair",
            ScoreRating::Poor => "Needs work",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_rating_buckets() {
        assert_eq!(ScoreRating::from_score(100.0), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(85.0), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(84.9), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(50.0), ScoreRating::Fair);
        assert_eq!(ScoreRating::from_score(12.0), ScoreRating::Poor);
    }

    #[test]
    fn test_issue_constructors() {
        let issue = Issue::critical(IssueKind::Clipping, "clipped");
        assert_eq!(issue.severity, IssueSeverity::Critical);
        assert!(IssueSeverity::Critical > IssueSeverity::Warning);
    }
}
