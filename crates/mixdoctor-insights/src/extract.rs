use tracing::{debug, trace};

const RECOMMENDATION_HEADINGS: &[&str] = &[
    "recommendation",
    "suggestion",
    "improvement",
    "next step",
    "action",
    "to do",
    "fix",
];
const STRENGTH_HEADINGS: &[&str] = &["strength", "positive", "what works", "highlight", "good"];
const ISSUE_HEADINGS: &[&str] = &["issue", "problem", "weakness", "concern", "warning", "needs work"];

const RECOMMENDATION_WORDS: &[&str] = &[
    "recommend", "should", "consider", "try ", "suggest", "add ", "cut ", "reduce", "boost",
    "increase", "decrease", "use ",
];
const ISSUE_WORDS: &[&str] = &[
    "issue", "problem", "too ", "lack", "muddy", "harsh", "clipping", "distort", "boxy",
    "thin", "weak", "overcompressed", "over-compressed", "phase",
];
const STRENGTH_WORDS: &[&str] = &[
    "strength", "well", "good", "great", "excellent", "clean", "clear", "nice", "solid",
    "balanced",
];

/// Which bucket a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Section {
    Recommendations,
    Strengths,
    Issues,
}

impl Section {
    fn from_heading(heading: &str) -> Option<Self> {
        let lower = heading.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));
        if has(RECOMMENDATION_HEADINGS) {
            Some(Self::Recommendations)
        } else if has(ISSUE_HEADINGS) {
            Some(Self::Issues)
        } else if has(STRENGTH_HEADINGS) {
            Some(Self::Strengths)
        } else {
            None
        }
    }

    /// Keyword guess for a line outside any recognised section.
    fn from_keywords(line: &str) -> Option<Self> {
        let lower = line.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));
        if has(RECOMMENDATION_WORDS) {
            Some(Self::Recommendations)
        } else if has(ISSUE_WORDS) {
            Some(Self::Issues)
        } else if has(STRENGTH_WORDS) {
            Some(Self::Strengths)
        } else {
            None
        }
    }
}

/// Bucketed insights, each list in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Insights {
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub issues: Vec<String>,
}

impl Insights {
    pub fn get(&self, section: Section) -> &[String] {
        match section {
            Section::Recommendations => &self.recommendations,
            Section::Strengths => &self.strengths,
            Section::Issues => &self.issues,
        }
    }

    fn get_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Recommendations => &mut self.recommendations,
            Section::Strengths => &mut self.strengths,
            Section::Issues => &mut self.issues,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty() && self.strengths.is_empty() && self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recommendations.len() + self.strengths.len() + self.issues.len()
    }
}

/// Line-oriented heuristic extractor.
#[derive(Debug, Clone)]
pub struct InsightExtractor {
    max_per_section: usize,
    min_chars: usize,
}

impl Default for InsightExtractor {
    fn default() -> Self {
        Self {
            max_per_section: 5,
            min_chars: 8,
        }
    }
}

impl InsightExtractor {
    pub fn new(max_per_section: usize, min_chars: usize) -> Self {
        Self {
            max_per_section,
            min_chars,
        }
    }

    /// Bucket `text` line by line.
    ///
    /// A heading (`#`, `**bold**` or a short line ending in `:`) selects the
    /// section for the lines under it. A `Label: text` line goes to the
    /// section its label names. Other lines outside a recognised section
    /// are bucketed by keyword, or dropped when none match.
    pub fn extract(&self, text: &str) -> Insights {
        let mut insights = Insights::default();
        let mut current: Option<Section> = None;

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(heading) = heading_text(line) {
                current = Section::from_heading(heading);
                trace!("Heading {:?} -> {:?}", heading, current);
                continue;
            }

            let item = strip_list_marker(line).replace("**", "");
            let (section, body) = match labelled(&item) {
                Some((section, body)) => (Some(section), body),
                None => (
                    current.or_else(|| Section::from_keywords(&item)),
                    item.as_str(),
                ),
            };

            let Some(section) = section else {
                continue;
            };
            let body = body.trim();
            if body.chars().count() < self.min_chars {
                continue;
            }
            self.push(&mut insights, section, body);
        }

        debug!(
            "Extracted insights: {} recommendations, {} strengths, {} issues",
            insights.recommendations.len(),
            insights.strengths.len(),
            insights.issues.len()
        );
        insights
    }

    fn push(&self, insights: &mut Insights, section: Section, body: &str) {
        let bucket = insights.get_mut(section);
        if bucket.len() >= self.max_per_section {
            return;
        }
        if bucket.iter().any(|b| b.eq_ignore_ascii_case(body)) {
            return;
        }
        bucket.push(body.to_string());
    }
}

/// Heading text without its markup, or `None` for body lines.
fn heading_text(line: &str) -> Option<&str> {
    if line.starts_with('#') {
        return Some(line.trim_start_matches('#').trim());
    }
    if line.len() > 4 && line.starts_with("**") && line.ends_with("**") {
        let inner = line[2..line.len() - 2].trim();
        return Some(inner.trim_end_matches(':').trim());
    }
    if let Some(inner) = line.strip_suffix(':') {
        if inner.split_whitespace().count() <= 4 && strip_list_marker(inner) == inner {
            return Some(inner.trim());
        }
    }
    None
}

/// `Recommendation: cut the lows` style inline labels.
fn labelled(item: &str) -> Option<(Section, &str)> {
    let (label, body) = item.split_once(':')?;
    if label.split_whitespace().count() > 3 || body.trim().is_empty() {
        return None;
    }
    Section::from_heading(label).map(|section| (section, body))
}

/// Remove a leading `-`, `*`, `•` or `1.` / `1)` marker.
fn strip_list_marker(line: &str) -> &str {
    let line = line.trim_start();
    for marker in ["- ", "* ", "• ", "+ "] {
        if let Some(rest) = line.strip_prefix(marker) {
            return rest.trim_start();
        }
    }
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return rest.trim_start();
        }
    }
    line
}
