//! Scalar building blocks for the cross-processing curves.

/// Margin that keeps the logit argument strictly inside (0, 1).
///
/// Must stay well below one table step (1/255) so it never shows in output.
pub const LOG_EPSILON: f64 = 1e-6;

/// Logistic curve with midpoint `a` and steepness `b`, evaluated at `x`.
#[inline]
pub fn sigmoid(a: f64, b: f64, x: f64) -> f64 {
    1.0 / (1.0 + (b * (a - x)).exp())
}

/// Convert a real value to an 8-bit channel value.
///
/// Clamps to [0, 255] and rounds half up (add 0.5, truncate). NaN maps to 0.
#[inline]
pub fn clamp_channel(value: f64) -> u8 {
    (value.clamp(0.0, 255.0) + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_channel_clamps_high() {
        assert_eq!(clamp_channel(12.34 * 56.78), 255);
    }

    #[test]
    fn test_clamp_channel_rounds_half_up() {
        assert_eq!(clamp_channel(9.9 * 1.2), 12);
        assert_eq!(clamp_channel(2.5), 3);
        assert_eq!(clamp_channel(3.5), 4);
        assert_eq!(clamp_channel(3.49), 3);
    }

    #[test]
    fn test_clamp_channel_clamps_low() {
        assert_eq!(clamp_channel(-0.4), 0);
        assert_eq!(clamp_channel(-1000.0), 0);
        assert_eq!(clamp_channel(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_clamp_channel_top_of_range() {
        assert_eq!(clamp_channel(255.0), 255);
        assert_eq!(clamp_channel(254.5), 255);
        assert_eq!(clamp_channel(f64::INFINITY), 255);
    }

    #[test]
    fn test_clamp_channel_nan_is_zero() {
        assert_eq!(clamp_channel(f64::NAN), 0);
    }

    #[test]
    fn test_sigmoid_saturates_far_from_midpoint() {
        // exp(245 * 7) overflows to infinity, so the curve collapses to exactly zero
        assert_eq!(sigmoid(10.0, 245.0, 3.0), 0.0);
    }

    #[test]
    fn test_sigmoid_midpoint_is_half() {
        for b in [0.0, 0.1, 1.0, 10.0, 50.0] {
            let v = sigmoid(0.3, b, 0.3);
            assert!((v - 0.5).abs() < 1e-12, "b={} gave {}", b, v);
        }
    }

    #[test]
    fn test_sigmoid_is_increasing_for_positive_factor() {
        let mut prev = sigmoid(0.5, 10.0, 0.0);
        for i in 1..=100 {
            let v = sigmoid(0.5, 10.0, i as f64 / 100.0);
            assert!(v > prev, "not increasing at step {}", i);
            prev = v;
        }
    }

    #[test]
    fn test_epsilon_below_table_resolution() {
        assert!(LOG_EPSILON > 0.0);
        assert!(LOG_EPSILON < 1.0 / 255.0);
    }
}
