//! Numeric coercion and derived metrics.

use lineup_model::{DerivedRow, LineupRow, Metrics};

use crate::canonical::canonicalize;
use crate::normalization::parse_f64;
use crate::players::PlayerLookup;

const PER40_MINUTES: f64 = 40.0;

/// Plus-minus normalized to a 40-minute basis.
///
/// Missing when either input is missing or `minutes` is zero.
pub fn per40(plus_minus: Option<f64>, minutes: Option<f64>) -> Option<f64> {
    match (plus_minus, minutes) {
        (Some(pm), Some(mins)) if mins != 0.0 => {
            Some(pm / mins * PER40_MINUTES).filter(|v| v.is_finite())
        }
        _ => None,
    }
}

fn coerce(row: &LineupRow) -> Metrics {
    Metrics {
        possessions: parse_f64(&row.possessions),
        minutes: parse_f64(&row.minutes),
        plus_minus: parse_f64(&row.plus_minus),
        net_rating: parse_f64(&row.net_rating),
        off_rating: parse_f64(&row.off_rating),
        def_rating: parse_f64(&row.def_rating),
    }
}

/// Canonicalizes the lineup and derives metrics for one row.
pub fn derive(row: &LineupRow, lookup: &PlayerLookup) -> DerivedRow {
    let metrics = coerce(row);
    DerivedRow {
        lineup: canonicalize(&row.player_slots, lookup),
        plus_minus_per40: per40(metrics.plus_minus, metrics.minutes),
        metrics,
        interval: row.interval.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per40_scales_to_forty_minutes() {
        assert_eq!(per40(Some(5.0), Some(10.0)), Some(20.0));
        assert_eq!(per40(Some(-3.0), Some(40.0)), Some(-3.0));
    }

    #[test]
    fn per40_zero_minutes_is_missing() {
        assert_eq!(per40(Some(5.0), Some(0.0)), None);
        assert_eq!(per40(Some(0.0), Some(0.0)), None);
        assert_eq!(per40(Some(5.0), Some(-0.0)), None);
    }

    #[test]
    fn per40_missing_operand_is_missing() {
        assert_eq!(per40(None, Some(10.0)), None);
        assert_eq!(per40(Some(4.0), None), None);
    }

    #[test]
    fn derive_coerces_every_numeric_field() {
        let row = LineupRow {
            player_slots: ["1", "2", "3", "4", "5"].map(String::from),
            possessions: "45".to_string(),
            minutes: "12.5".to_string(),
            plus_minus: "n/a".to_string(),
            net_rating: "".to_string(),
            off_rating: "110.2".to_string(),
            def_rating: "98".to_string(),
            interval: None,
        };
        let derived = derive(&row, &PlayerLookup::default());

        assert_eq!(derived.metrics.possessions, Some(45.0));
        assert_eq!(derived.metrics.minutes, Some(12.5));
        assert_eq!(derived.metrics.plus_minus, None);
        assert_eq!(derived.metrics.net_rating, None);
        assert_eq!(derived.metrics.off_rating, Some(110.2));
        assert_eq!(derived.plus_minus_per40, None);
        assert_eq!(derived.lineup.as_str(), "P1-P2-P3-P4-P5");
    }
}
