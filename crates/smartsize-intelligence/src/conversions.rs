// ABOUTME: Unit conversion and rounding helpers for length measurements
// ABOUTME: Inch/centimetre conversion rounded to one decimal, round-half-up precision rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

use smartsize_core::constants::units::{CM_PER_INCH, CONVERSION_PRECISION};

/// Round `value` to `precision` decimal places, halves rounding toward +infinity
///
/// Computes `floor(value * 10^p + 0.5) / 10^p`, so `-2.5` rounds to `-2`
/// rather than `-3` as `f64::round` would.
#[must_use]
#[allow(clippy::suboptimal_flops)] // mul_add skips the intermediate rounding of value * multiplier
pub fn round_half_up(value: f64, precision: u32) -> f64 {
    let multiplier = 10_f64.powi(precision as i32);
    (value * multiplier + 0.5).floor() / multiplier
}

/// Convert inches to centimetres, rounded to one decimal place
///
/// ```rust
/// use smartsize_intelligence::conversions::inches_to_cm;
///
/// assert!((inches_to_cm(10.0) - 25.4).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    round_half_up(inches * CM_PER_INCH, CONVERSION_PRECISION)
}

/// Convert centimetres to inches, rounded to one decimal place
#[must_use]
pub fn cm_to_inches(centimeters: f64) -> f64 {
    round_half_up(centimeters / CM_PER_INCH, CONVERSION_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_inches_to_cm_reference_points() {
        assert!(close(inches_to_cm(0.0), 0.0));
        assert!(close(inches_to_cm(10.0), 25.4));
        assert!(close(inches_to_cm(18.0), 45.7));
        assert!(close(inches_to_cm(36.0), 91.4));
    }

    #[test]
    fn test_inches_to_cm_is_monotonic() {
        let mut previous = inches_to_cm(0.0);
        for step in 1..=600 {
            let current = inches_to_cm(f64::from(step) * 0.1);
            assert!(current >= previous, "not monotonic at step {step}");
            previous = current;
        }
    }

    #[test]
    fn test_round_half_up() {
        assert!(close(round_half_up(2.5, 0), 3.0));
        assert!(close(round_half_up(-2.5, 0), -2.0));
        assert!(close(round_half_up(17.449, 1), 17.4));
        assert!(close(round_half_up(41.6, 0), 42.0));
    }

    #[test]
    fn test_cm_to_inches() {
        assert!(close(cm_to_inches(25.4), 10.0));
        assert!(close(cm_to_inches(100.0), 39.4));
    }
}
