//! Player reference index.

use std::collections::HashMap;

use lineup_ingest::PlayerReferenceRow;
use lineup_model::{PlayerId, PlayerRecord};
use tracing::{debug, warn};

use crate::normalization::{parse_f64, parse_player_id};

/// Immutable id → player lookup, built once per run and shared by reference.
#[derive(Debug, Clone, Default)]
pub struct PlayerLookup {
    players: HashMap<PlayerId, PlayerRecord>,
    skipped: usize,
}

impl PlayerLookup {
    /// Builds the index from raw reference rows.
    ///
    /// Rows whose id cannot be coerced are skipped. When an id repeats, the
    /// last row wins.
    pub fn build(rows: &[PlayerReferenceRow]) -> Self {
        let mut players = HashMap::with_capacity(rows.len());
        let mut skipped = 0usize;
        for row in rows {
            let Some(id) = parse_player_id(&row.player_id) else {
                warn!(
                    player_id = %row.player_id,
                    full_name = %row.full_name,
                    "skipping reference row with invalid player id"
                );
                skipped += 1;
                continue;
            };
            let record = PlayerRecord {
                id,
                initial: display_initial(&row.full_name),
                height: parse_f64(&row.height),
                team: row.team.clone(),
            };
            if players.insert(id, record).is_some() {
                debug!(player_id = id, "duplicate reference id, keeping last row");
            }
        }
        Self { players, skipped }
    }

    pub fn from_records(records: impl IntoIterator<Item = PlayerRecord>) -> Self {
        Self {
            players: records.into_iter().map(|r| (r.id, r)).collect(),
            skipped: 0,
        }
    }

    pub fn get(&self, id: PlayerId) -> Option<&PlayerRecord> {
        self.players.get(&id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Reference rows dropped because their id was not numeric.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Records sorted by team, then initial, then id.
    pub fn sorted_records(&self) -> Vec<&PlayerRecord> {
        let mut records: Vec<&PlayerRecord> = self.players.values().collect();
        records.sort_by(|a, b| {
            a.team
                .cmp(&b.team)
                .then_with(|| a.initial.cmp(&b.initial))
                .then_with(|| a.id.cmp(&b.id))
        });
        records
    }
}

/// Short display code: first initial plus the first three letters of the last
/// name, upper-cased (`Brandi Williams` → `BWIL`).
///
/// Single-word names fall back to their first two characters (`Cher` → `CH`).
pub fn display_initial(full_name: &str) -> String {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    match (parts.first(), parts.last()) {
        (Some(first), Some(last)) if parts.len() >= 2 => {
            let mut initial: String = first.chars().take(1).collect();
            initial.extend(last.chars().take(3));
            initial.to_uppercase()
        }
        _ => full_name.chars().take(2).collect::<String>().to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, id: &str, height: &str) -> PlayerReferenceRow {
        PlayerReferenceRow {
            full_name: name.to_string(),
            team: "Gonzaga".to_string(),
            player_id: id.to_string(),
            height: height.to_string(),
        }
    }

    #[test]
    fn display_initial_uses_first_and_last_parts() {
        assert_eq!(display_initial("Brandi Williams"), "BWIL");
        assert_eq!(display_initial("Mary Ann Li"), "MLI");
        assert_eq!(display_initial("  jo   de la cruz "), "JCRU");
    }

    #[test]
    fn display_initial_single_word_falls_back() {
        assert_eq!(display_initial("Cher"), "CH");
        assert_eq!(display_initial("X"), "X");
        assert_eq!(display_initial(""), "");
    }

    #[test]
    fn build_coerces_ids_and_heights() {
        let lookup = PlayerLookup::build(&[
            row("Brandi Williams", "101.0", "72"),
            row("Ana Diaz", "102", "six feet"),
            row("No Id", "", "70"),
        ]);

        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.skipped(), 1);
        let brandi = lookup.get(101).unwrap();
        assert_eq!(brandi.initial, "BWIL");
        assert_eq!(brandi.height, Some(72.0));
        assert_eq!(brandi.team, "Gonzaga");
        assert_eq!(lookup.get(102).unwrap().height, None);
    }

    #[test]
    fn build_last_duplicate_wins() {
        let lookup = PlayerLookup::build(&[
            row("Brandi Williams", "101", "72"),
            row("Bea Wong", "101", "68"),
        ]);
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup.get(101).unwrap().initial, "BWON");
    }
}
