//! Tolerance constants for scoring and extraction tests.
//!
//! Scores are computed in f32 through a weighted mean, so exact equality
//! only holds for identical inputs. Measurements from synthetic signals
//! carry windowing and filter error on top.

/// Score arithmetic (weighted means, linear slopes).
pub const SCORE_EPSILON: f32 = 1e-3;

/// Sample peak / RMS measured from a synthetic sine, in dB.
pub const LEVEL_EPSILON_DB: f32 = 0.05;

/// Integrated loudness of a synthetic sine vs. its nominal level, in LU.
/// Covers the K-weighting gain at the test frequency.
pub const LOUDNESS_EPSILON_LU: f32 = 1.5;

/// Fraction of band energy allowed to leak out of a pure tone's band.
pub const BAND_LEAKAGE: f32 = 0.1;
