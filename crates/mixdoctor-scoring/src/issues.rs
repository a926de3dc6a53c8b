//! User-visible issue list, selected by a score-tiered policy.
//!
//! The boolean flags on [`AnalysisResult`](mixdoctor_core::AnalysisResult)
//! always reflect the classifiers. Which of them surface as issues depends on
//! the overall score:
//!
//! | score                         | tier          | checks                                 |
//! |-------------------------------|---------------|----------------------------------------|
//! | `>= fast_path_score` (85)     | None          | nothing                                |
//! | `>= lenient_below` (60)       | Standard      | one issue per raised flag              |
//! | `>= critical_below` (55)      | Lenient       | standard + looser marginal thresholds  |
//! | below                         | CriticalOnly  | severe phase, crushed dynamics, clipping, broken balance |

use crate::ClassifierOutputs;
use mixdoctor_core::{
    DynamicRangeClass, FeatureBundle, Issue, IssueKind, IssuePolicy, IssueTier, LoudnessClass,
    PhaseSeverity, StereoWidthClass,
};

const SEVERE_PHASE: &str = "Severe phase cancellation: parts of the mix vanish in mono";
const MODERATE_PHASE: &str = "Phase problems reduce mono compatibility";
const NARROW_IMAGE: &str = "Stereo image is too narrow";
const WIDE_IMAGE: &str = "Stereo image is too wide";
const FREQUENCY_IMBALANCE: &str = "Frequency balance is uneven";
const SEVERE_IMBALANCE: &str = "Frequency balance is severely skewed";
const SEVERELY_COMPRESSED: &str = "Severely compressed: almost no dynamic range left";
const OVER_COMPRESSED: &str = "Over-compressed: dynamics are limited";
const EXCESSIVE_RANGE: &str = "Dynamic range is very wide for playback on small speakers";
const CLIPPING: &str = "Clipping detected on sample peaks";
const TRUE_PEAK: &str = "True peak above -1 dBTP";
const TOO_QUIET: &str = "Mix is too quiet";
const TOO_LOUD: &str = "Mix is too loud";
const INSTRUMENT_BALANCE: &str = "Instrument balance and cohesion need work";

const LOW_CORRELATION: &str = "Stereo correlation is lower than typical";
const WIDTH_MARGINAL: &str = "Stereo width is at the edge of the typical range";
const LIMITED_DYNAMICS: &str = "Dynamics are on the compressed side";
const BALANCE_MARGINAL: &str = "Frequency balance could be more even";
const LOUDNESS_MARGINAL: &str = "Loudness is away from common streaming targets";

/// Builds the issue list for one analysis.
#[derive(Debug, Clone, Default)]
pub struct IssueReporter {
    policy: IssuePolicy,
    max_balance_offset: f32,
}

impl IssueReporter {
    pub fn new(policy: IssuePolicy, max_balance_offset: f32) -> Self {
        Self {
            policy,
            max_balance_offset,
        }
    }

    pub fn tier(&self, overall_score: f32) -> IssueTier {
        let p = &self.policy;
        if overall_score >= p.fast_path_score {
            IssueTier::None
        } else if overall_score < p.critical_below {
            IssueTier::CriticalOnly
        } else if overall_score < p.lenient_below {
            IssueTier::Lenient
        } else {
            IssueTier::Standard
        }
    }

    /// Issue list for a sanitized bundle. At most one issue per [`IssueKind`].
    pub fn report(
        &self,
        overall_score: f32,
        bundle: &FeatureBundle,
        outputs: &ClassifierOutputs,
    ) -> (IssueTier, Vec<Issue>) {
        let tier = self.tier(overall_score);
        let issues = match tier {
            IssueTier::None => Vec::new(),
            IssueTier::Standard => self.standard(bundle, outputs),
            IssueTier::Lenient => {
                let mut issues = self.standard(bundle, outputs);
                self.lenient(bundle, outputs, &mut issues);
                issues
            }
            IssueTier::CriticalOnly => self.critical(outputs),
        };
        (tier, issues)
    }

    fn standard(&self, bundle: &FeatureBundle, outputs: &ClassifierOutputs) -> Vec<Issue> {
        let mut issues = Vec::new();

        match outputs.phase.kind {
            PhaseSeverity::Severe => issues.push(Issue::critical(IssueKind::Phase, SEVERE_PHASE)),
            PhaseSeverity::Moderate => issues.push(Issue::warning(IssueKind::Phase, MODERATE_PHASE)),
            PhaseSeverity::None => {}
        }

        match outputs.stereo_width.kind {
            StereoWidthClass::TooNarrow => {
                issues.push(Issue::warning(IssueKind::StereoWidth, NARROW_IMAGE))
            }
            StereoWidthClass::TooWide => {
                issues.push(Issue::warning(IssueKind::StereoWidth, WIDE_IMAGE))
            }
            StereoWidthClass::Good => {}
        }

        if outputs.frequency.kind.imbalance {
            issues.push(Issue::warning(IssueKind::FrequencyBalance, FREQUENCY_IMBALANCE));
        }

        let dynamics = &outputs.dynamics.kind;
        match dynamics.range {
            DynamicRangeClass::SeverelyCompressed => {
                issues.push(Issue::critical(IssueKind::DynamicRange, SEVERELY_COMPRESSED))
            }
            DynamicRangeClass::OverCompressed => {
                issues.push(Issue::warning(IssueKind::DynamicRange, OVER_COMPRESSED))
            }
            DynamicRangeClass::Excessive => {
                issues.push(Issue::warning(IssueKind::DynamicRange, EXCESSIVE_RANGE))
            }
            DynamicRangeClass::Good => {}
        }

        if dynamics.clipping {
            issues.push(Issue::critical(IssueKind::Clipping, CLIPPING));
        }
        if dynamics.true_peak_over {
            issues.push(Issue::warning(IssueKind::TruePeak, TRUE_PEAK));
        }

        match dynamics.loudness {
            LoudnessClass::TooQuiet => issues.push(Issue::warning(IssueKind::Loudness, TOO_QUIET)),
            LoudnessClass::TooLoud => issues.push(Issue::warning(IssueKind::Loudness, TOO_LOUD)),
            LoudnessClass::Acceptable => {}
        }

        if has_instrument_balance_issues(bundle, outputs, self.max_balance_offset) {
            issues.push(Issue::warning(IssueKind::InstrumentBalance, INSTRUMENT_BALANCE));
        }

        issues
    }

    /// Looser checks for dimensions the standard tier left alone.
    fn lenient(&self, bundle: &FeatureBundle, outputs: &ClassifierOutputs, issues: &mut Vec<Issue>) {
        let l = &self.policy.lenient;
        let mut push_if_new = |kind: IssueKind, hit: bool, message: &'static str| {
            if hit && !issues.iter().any(|i| i.kind == kind) {
                issues.push(Issue::warning(kind, message));
            }
        };

        push_if_new(
            IssueKind::Phase,
            bundle.correlation < l.min_correlation,
            LOW_CORRELATION,
        );
        push_if_new(
            IssueKind::StereoWidth,
            bundle.stereo_width < l.min_width || bundle.stereo_width > l.max_width,
            WIDTH_MARGINAL,
        );
        push_if_new(
            IssueKind::DynamicRange,
            bundle.dynamic_range < l.min_dynamic_range_db,
            LIMITED_DYNAMICS,
        );
        push_if_new(
            IssueKind::FrequencyBalance,
            outputs.frequency.kind.balance_score < l.min_balance_score,
            BALANCE_MARGINAL,
        );
        push_if_new(
            IssueKind::Loudness,
            bundle.loudness_lufs < l.min_loudness_lufs || bundle.loudness_lufs > l.max_loudness_lufs,
            LOUDNESS_MARGINAL,
        );
    }

    fn critical(&self, outputs: &ClassifierOutputs) -> Vec<Issue> {
        let mut issues = Vec::new();

        if outputs.phase.kind == PhaseSeverity::Severe {
            issues.push(Issue::critical(IssueKind::Phase, SEVERE_PHASE));
        }
        if outputs.dynamics.kind.range == DynamicRangeClass::SeverelyCompressed {
            issues.push(Issue::critical(IssueKind::DynamicRange, SEVERELY_COMPRESSED));
        }
        if outputs.dynamics.kind.clipping {
            issues.push(Issue::critical(IssueKind::Clipping, CLIPPING));
        }
        if outputs.frequency.kind.balance_score < self.policy.critical_balance_score {
            issues.push(Issue::critical(IssueKind::FrequencyBalance, SEVERE_IMBALANCE));
        }

        issues
    }
}

/// Cohesion graded fair or poor, or left/right balance pulled off centre.
pub fn has_instrument_balance_issues(
    bundle: &FeatureBundle,
    outputs: &ClassifierOutputs,
    max_balance_offset: f32,
) -> bool {
    use mixdoctor_core::CohesionGrade;
    matches!(
        outputs.cohesion.kind.grade,
        CohesionGrade::Fair | CohesionGrade::Poor
    ) || bundle.left_right_balance.abs() > max_balance_offset
}
