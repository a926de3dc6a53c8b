//! # MixDoctor Insights
//!
//! Heuristic bucketing of free-text mix feedback (for example a reply from
//! a language model) into recommendations, strengths and issues.
//!
//! This is text-mining glue, kept apart from the scoring crates: nothing in
//! the numeric score depends on it.
//!
//! ## Example
//!
//! ```rust
//! use mixdoctor_insights::InsightExtractor;
//!
//! let text = "\
//! ## Strengths
//! - Vocals sit nicely on top of the mix
//!
//! ## Recommendations
//! 1. Cut 300 Hz on the rhythm guitars
//! 2. Add a touch of air to the vocal bus
//! ";
//!
//! let insights = InsightExtractor::default().extract(text);
//! assert_eq!(insights.strengths.len(), 1);
//! assert_eq!(insights.recommendations.len(), 2);
//! ```

mod extract;

pub use extract::{InsightExtractor, Insights, Section};
