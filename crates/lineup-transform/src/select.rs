//! Top-lineup selection and progression ordering.

use std::cmp::Ordering;

use lineup_model::DerivedRow;

/// Larger possession counts first; rows without a count go last.
fn by_possessions_desc(a: &DerivedRow, b: &DerivedRow) -> Ordering {
    match (a.metrics.possessions, b.metrics.possessions) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The `limit` most-used lineups with fully resolved membership.
///
/// Lineups holding an `UNK` member are dropped. Ties on possessions keep input
/// order.
pub fn select_top(rows: &[DerivedRow], limit: usize) -> Vec<DerivedRow> {
    let mut kept: Vec<&DerivedRow> = rows.iter().filter(|row| !row.lineup.has_unknown()).collect();
    kept.sort_by(|a, b| by_possessions_desc(a, b));
    kept.into_iter().take(limit).cloned().collect()
}

/// Orders interval rows by ascending interval ordinal, keeping input order
/// within each interval. Nothing is filtered.
pub fn build_progression(rows: impl IntoIterator<Item = DerivedRow>) -> Vec<DerivedRow> {
    let mut rows: Vec<DerivedRow> = rows.into_iter().collect();
    rows.sort_by_key(|row| row.interval.as_ref().map_or(usize::MAX, |tag| tag.ordinal));
    rows
}
