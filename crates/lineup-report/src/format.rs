//! Presentation-boundary number formatting.

/// Rounds to two decimals, halves away from zero.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid writing "-0".
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Formats an optional metric for a CSV cell.
///
/// Missing values become empty cells. Present values are rounded with
/// [`round2`] and printed in shortest form (`40.0` → `40`, `12.345` → `12.35`).
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => round2(v).to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_value(Some(12.345)), "12.35");
        assert_eq!(format_value(Some(-12.345)), "-12.35");
        assert_eq!(format_value(Some(2.5)), "2.5");
    }

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_value(Some(40.0)), "40");
        assert_eq!(format_value(Some(10.50)), "10.5");
        assert_eq!(format_value(Some(100.0)), "100");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_value(Some(-0.001)), "0");
    }

    #[test]
    fn missing_is_empty() {
        assert_eq!(format_value(None), "");
        assert_eq!(format_value(Some(f64::NAN)), "");
        assert_eq!(format_value(Some(f64::INFINITY)), "");
    }
}
