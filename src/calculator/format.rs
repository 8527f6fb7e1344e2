//! Numeric rounding and display formatting.

/// Round to 12 decimal places to suppress floating-point noise.
///
/// Non-finite values pass through unchanged so that infinity still signals an
/// error upstream.
pub fn clamp(n: f64) -> f64 {
    if !n.is_finite() {
        return n;
    }
    format!("{n:.12}").parse().unwrap_or(n)
}

/// Format a rounded value for display: shortest decimal form, trailing zeros
/// and a dangling decimal point stripped, `-0` normalized to `0`.
pub fn format_value(n: f64) -> String {
    strip_trailing_zeros(&n.to_string())
}

fn strip_trailing_zeros(s: &str) -> String {
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_suppresses_float_noise() {
        assert_eq!(clamp(0.1 + 0.2), 0.3);
        assert_eq!(clamp(0.30000000000000004), 0.3);
    }

    #[test]
    fn test_clamp_leaves_finite_values_alone() {
        assert_eq!(clamp(20.0), 20.0);
        assert_eq!(clamp(-2.5), -2.5);
    }

    #[test]
    fn test_clamp_passes_non_finite_through() {
        assert!(clamp(f64::INFINITY).is_infinite());
        assert!(clamp(f64::NAN).is_nan());
    }

    #[test]
    fn test_format_is_idempotent_for_clean_values() {
        assert_eq!(format_value(20.0), "20");
        assert_eq!(format_value(0.3), "0.3");
        assert_eq!(format_value(-8.0), "-8");
    }

    #[test]
    fn test_negative_zero_normalized() {
        assert_eq!(format_value(-0.0), "0");
    }
}
