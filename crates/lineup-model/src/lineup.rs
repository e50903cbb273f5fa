//! Lineup rows at each stage of the pipeline.

use std::fmt;

use crate::interval::IntervalTag;

/// Number of player identifier slots in every lineup row.
pub const PLAYER_SLOTS: usize = 5;

/// Separator between member initials in a canonical lineup label.
pub const LINEUP_SEPARATOR: &str = "-";

/// Placeholder for a lineup slot whose player id could not be recovered.
pub const UNKNOWN_PLAYER_TOKEN: &str = "UNK";

/// A lineup row after schema normalization, before any numeric coercion.
///
/// Every field holds the raw cell text. A field is empty when the cell was
/// blank or the source table has no such column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineupRow {
    /// Player identifiers in source order (not height order).
    pub player_slots: [String; PLAYER_SLOTS],
    pub possessions: String,
    pub minutes: String,
    pub plus_minus: String,
    pub net_rating: String,
    pub off_rating: String,
    pub def_rating: String,
    /// Present only for rows read from an interval table.
    pub interval: Option<IntervalTag>,
}

/// Height-sorted lineup signature.
///
/// Two rows holding the same five players yield identical labels regardless of
/// the order the players appear in the source row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalLineup {
    label: String,
    unknown_slots: usize,
}

impl CanonicalLineup {
    pub fn new(label: impl Into<String>, unknown_slots: usize) -> Self {
        Self {
            label: label.into(),
            unknown_slots,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.label
    }

    /// Number of slots rendered as [`UNKNOWN_PLAYER_TOKEN`].
    pub fn unknown_slots(&self) -> usize {
        self.unknown_slots
    }

    /// True when at least one member has no recoverable player id.
    pub fn has_unknown(&self) -> bool {
        self.unknown_slots > 0
    }

    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.label.split(LINEUP_SEPARATOR)
    }
}

impl fmt::Display for CanonicalLineup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Coerced numeric fields of a lineup row. `None` marks a missing value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metrics {
    pub possessions: Option<f64>,
    pub minutes: Option<f64>,
    pub plus_minus: Option<f64>,
    pub net_rating: Option<f64>,
    pub off_rating: Option<f64>,
    pub def_rating: Option<f64>,
}

/// A lineup row with its canonical signature and derived metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRow {
    pub lineup: CanonicalLineup,
    pub metrics: Metrics,
    /// Plus-minus normalized to 40 minutes; `None` when minutes is zero or
    /// either operand is missing.
    pub plus_minus_per40: Option<f64>,
    pub interval: Option<IntervalTag>,
}

/// Both report tables for one team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamReport {
    pub team: String,
    pub top_lineups: Vec<DerivedRow>,
    /// `None` when no interval table was discovered for the team.
    pub progression: Option<Vec<DerivedRow>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_lineup_exposes_members() {
        let lineup = CanonicalLineup::new("AB-CD-P12-UNK-UNK", 2);
        assert_eq!(
            lineup.members().collect::<Vec<_>>(),
            vec!["AB", "CD", "P12", "UNK", "UNK"]
        );
        assert!(lineup.has_unknown());
        assert_eq!(lineup.to_string(), "AB-CD-P12-UNK-UNK");
    }

    #[test]
    fn placeholder_ids_are_not_unknown() {
        let lineup = CanonicalLineup::new("AB-CD-EF-GH-P99", 0);
        assert!(!lineup.has_unknown());
    }
}
