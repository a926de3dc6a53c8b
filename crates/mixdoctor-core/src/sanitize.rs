//! Clamping helpers for untrusted feature values.
//!
//! Every scalar that reaches a classifier goes through [`clamp_or`]: NaN is
//! replaced by a fallback, everything else (infinities included) is clamped
//! into `[min, max]`.

/// Clamp `value` into `[min, max]`, mapping NaN to `fallback`.
#[inline]
pub fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

/// Clamp into `[0, 1]`, NaN becomes 0.
#[inline]
pub fn unit(value: f32) -> f32 {
    clamp_or(value, 0.0, 1.0, 0.0)
}

/// Clamp into `[0, 100]`, NaN becomes 0.
#[inline]
pub fn percent(value: f32) -> f32 {
    clamp_or(value, 0.0, 100.0, 0.0)
}

/// Convert a linear amplitude to dBFS with a floor for silence.
#[inline]
pub fn amplitude_to_db(amplitude: f32, floor_db: f32) -> f32 {
    if amplitude > 0.0 {
        (20.0 * amplitude.log10()).max(floor_db)
    } else {
        floor_db
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_clamp_or_handles_non_finite() {
        assert_eq!(clamp_or(f32::NAN, -1.0, 1.0, 0.5), 0.5);
        assert_eq!(clamp_or(f32::INFINITY, -1.0, 1.0, 0.5), 1.0);
        assert_eq!(clamp_or(f32::NEG_INFINITY, -1.0, 1.0, 0.5), -1.0);
        assert_eq!(clamp_or(0.25, -1.0, 1.0, 0.5), 0.25);
    }

    #[test]
    fn test_unit_and_percent() {
        assert_eq!(unit(1.5), 1.0);
        assert_eq!(unit(-0.1), 0.0);
        assert_eq!(percent(140.0), 100.0);
        assert_eq!(percent(f32::NAN), 0.0);
    }

    #[test]
    fn test_amplitude_to_db() {
        assert_eq!(amplitude_to_db(0.0, -144.0), -144.0);
        assert_abs_diff_eq!(amplitude_to_db(1.0, -144.0), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(amplitude_to_db(0.5, -144.0), -6.0206, epsilon = 1e-3);
    }
}
