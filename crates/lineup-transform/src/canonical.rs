//! Height-sorted lineup signatures.

use std::cmp::Ordering;

use lineup_model::{CanonicalLineup, LINEUP_SEPARATOR, UNKNOWN_PLAYER_TOKEN};

use crate::normalization::parse_player_id;
use crate::players::PlayerLookup;

#[derive(Debug)]
struct Member {
    height: f64,
    initial: String,
}

fn resolve(slot: &str, lookup: &PlayerLookup) -> (Member, bool) {
    let id = parse_player_id(slot);
    match id.and_then(|id| lookup.get(id)) {
        Some(record) => (
            Member {
                height: record.sort_height(),
                initial: record.initial.clone(),
            },
            false,
        ),
        None => {
            let initial = match id {
                Some(id) => format!("P{id}"),
                None => UNKNOWN_PLAYER_TOKEN.to_string(),
            };
            (
                Member {
                    height: f64::INFINITY,
                    initial,
                },
                id.is_none(),
            )
        }
    }
}

fn by_height_then_initial(a: &Member, b: &Member) -> Ordering {
    a.height
        .total_cmp(&b.height)
        .then_with(|| a.initial.cmp(&b.initial))
}

/// Builds the canonical label for a row's player slots.
///
/// Members are ordered by height (shortest first), ties broken by initial.
/// Ids missing from `lookup` render as `P<id>` and ids that cannot be parsed
/// render as `UNK`; both sort after every known height. Repeated ids are kept
/// as separate members.
pub fn canonicalize<S: AsRef<str>>(slots: &[S], lookup: &PlayerLookup) -> CanonicalLineup {
    let mut unknown = 0usize;
    let mut members: Vec<Member> = slots
        .iter()
        .map(|slot| {
            let (member, is_unknown) = resolve(slot.as_ref(), lookup);
            if is_unknown {
                unknown += 1;
            }
            member
        })
        .collect();
    members.sort_by(by_height_then_initial);
    let label = members
        .iter()
        .map(|member| member.initial.as_str())
        .collect::<Vec<_>>()
        .join(LINEUP_SEPARATOR);
    CanonicalLineup::new(label, unknown)
}

#[cfg(test)]
mod tests {
    use lineup_model::PlayerRecord;

    use super::*;

    fn lookup() -> PlayerLookup {
        PlayerLookup::from_records([
            PlayerRecord {
                id: 1,
                initial: "AGUA".to_string(),
                height: Some(66.0),
                team: "Gonzaga".to_string(),
            },
            PlayerRecord {
                id: 2,
                initial: "BFOR".to_string(),
                height: Some(72.0),
                team: "Gonzaga".to_string(),
            },
            PlayerRecord {
                id: 3,
                initial: "CCEN".to_string(),
                height: Some(76.0),
                team: "Gonzaga".to_string(),
            },
            PlayerRecord {
                id: 4,
                initial: "AWIN".to_string(),
                height: Some(72.0),
                team: "Gonzaga".to_string(),
            },
            PlayerRecord {
                id: 5,
                initial: "NHGT".to_string(),
                height: None,
                team: "Gonzaga".to_string(),
            },
        ])
    }

    #[test]
    fn sorts_by_height_then_initial() {
        let lineup = canonicalize(&["3", "2", "1", "4", "5"], &lookup());
        assert_eq!(lineup.as_str(), "AGUA-AWIN-BFOR-CCEN-NHGT");
        assert!(!lineup.has_unknown());
    }

    #[test]
    fn unresolved_players_sort_last() {
        let lineup = canonicalize(&["999", "", "1", "2", "3"], &lookup());
        assert_eq!(lineup.as_str(), "AGUA-BFOR-CCEN-P999-UNK");
        assert_eq!(lineup.unknown_slots(), 1);
    }

    #[test]
    fn missing_height_ties_with_placeholders_by_initial() {
        let lineup = canonicalize(&["5", "10", "1", "2", "3"], &lookup());
        assert_eq!(lineup.as_str(), "AGUA-BFOR-CCEN-NHGT-P10");
    }

    #[test]
    fn float_ids_resolve() {
        let lineup = canonicalize(&["1.0", "2.0", "3.0", "4.0", "5.0"], &lookup());
        assert_eq!(lineup.as_str(), "AGUA-AWIN-BFOR-CCEN-NHGT");
    }

    #[test]
    fn zero_id_is_a_placeholder_not_unknown() {
        let lineup = canonicalize(&["0", "1", "2", "3", "4"], &lookup());
        assert_eq!(lineup.as_str(), "AGUA-AWIN-BFOR-CCEN-P0");
        assert!(!lineup.has_unknown());
    }
}
