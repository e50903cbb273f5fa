//! Numeric normalization utilities.

use lineup_model::PlayerId;

/// Parses a string as a finite f64, returning None for invalid or empty strings.
///
/// `nan` and `inf` spellings are rejected so that missing values stay `None`
/// all the way to the report.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a player id, accepting float spellings such as `"1234.0"`.
///
/// Fractional ids truncate toward zero. Returns None for empty, non-numeric,
/// non-finite, or out-of-range values.
pub fn parse_player_id(value: &str) -> Option<PlayerId> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(id) = trimmed.parse::<PlayerId>() {
        return Some(id);
    }
    let float = parse_f64(trimmed)?.trunc();
    if float < PlayerId::MIN as f64 || float >= PlayerId::MAX as f64 {
        return None;
    }
    Some(float as PlayerId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_f64_tolerates_noise() {
        assert_eq!(parse_f64(" 12.5 "), Some(12.5));
        assert_eq!(parse_f64("-3"), Some(-3.0));
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("n/a"), None);
        assert_eq!(parse_f64("NaN"), None);
        assert_eq!(parse_f64("inf"), None);
    }

    #[test]
    fn parse_player_id_accepts_float_forms() {
        assert_eq!(parse_player_id("4433"), Some(4433));
        assert_eq!(parse_player_id("4433.0"), Some(4433));
        assert_eq!(parse_player_id(" 4433.9 "), Some(4433));
        assert_eq!(parse_player_id("1e3"), Some(1000));
        assert_eq!(parse_player_id("0"), Some(0));
    }

    #[test]
    fn parse_player_id_rejects_garbage() {
        assert_eq!(parse_player_id(""), None);
        assert_eq!(parse_player_id("abc"), None);
        assert_eq!(parse_player_id("nan"), None);
        assert_eq!(parse_player_id("1e300"), None);
    }
}
