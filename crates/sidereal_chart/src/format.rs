//! Display helpers.

/// `"12.34°"` for finite input, `"--"` otherwise.
pub fn format_degrees(deg: f64) -> String {
    if deg.is_finite() {
        format!("{deg:.2}°")
    } else {
        "--".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_decimals() {
        assert_eq!(format_degrees(12.345_6), "12.35°");
        assert_eq!(format_degrees(0.0), "0.00°");
    }

    #[test]
    fn non_finite_dashes() {
        assert_eq!(format_degrees(f64::NAN), "--");
        assert_eq!(format_degrees(f64::NEG_INFINITY), "--");
    }
}
