//! Maps both export generations onto one lineup row shape.
//!
//! | field       | legacy (case-insensitive) | modern (exact)  |
//! |-------------|---------------------------|-----------------|
//! | player ids  | `PID1`..`PID5`            | `pId1`..`pId5`  |
//! | possessions | `POSS`                    | `POSS`          |
//! | minutes     | `MP*`, then `MINSPBP`     | `MP*`           |
//! | plus-minus  | `PLUS-MINUS`              | `Plus-Minus`    |
//! | net rating  | `NET RTG`                 | `Net Rtg`       |
//! | off rating  | `ORTG`                    | `ORtg`          |
//! | def rating  | `DRTG`                    | `DRtg`          |
//!
//! Optional numeric columns that are absent leave the field empty on every row.

use lineup_ingest::CsvTable;
use lineup_model::{IntervalTag, LineupRow, PLAYER_SLOTS, SchemaVariant};

use crate::error::{Result, SchemaError};

struct Layout {
    slots: [&'static str; PLAYER_SLOTS],
    possessions: &'static [&'static str],
    minutes: &'static [&'static str],
    plus_minus: &'static [&'static str],
    net_rating: &'static [&'static str],
    off_rating: &'static [&'static str],
    def_rating: &'static [&'static str],
}

const LEGACY: Layout = Layout {
    slots: ["PID1", "PID2", "PID3", "PID4", "PID5"],
    possessions: &["POSS"],
    minutes: &["MP*", "MINSPBP"],
    plus_minus: &["PLUS-MINUS"],
    net_rating: &["NET RTG"],
    off_rating: &["ORTG"],
    def_rating: &["DRTG"],
};

const MODERN: Layout = Layout {
    slots: ["pId1", "pId2", "pId3", "pId4", "pId5"],
    possessions: &["POSS"],
    minutes: &["MP*"],
    plus_minus: &["Plus-Minus"],
    net_rating: &["Net Rtg"],
    off_rating: &["ORtg"],
    def_rating: &["DRtg"],
};

fn layout(variant: SchemaVariant) -> &'static Layout {
    match variant {
        SchemaVariant::Legacy => &LEGACY,
        SchemaVariant::Modern => &MODERN,
    }
}

fn find_column(table: &CsvTable, variant: SchemaVariant, name: &str) -> Option<usize> {
    match variant {
        SchemaVariant::Legacy => table.column_ignore_case(name),
        SchemaVariant::Modern => table.column(name),
    }
}

fn first_column(table: &CsvTable, variant: SchemaVariant, names: &[&str]) -> Option<usize> {
    names
        .iter()
        .find_map(|name| find_column(table, variant, name))
}

/// Column positions resolved once per table.
struct ColumnMap {
    slots: [usize; PLAYER_SLOTS],
    possessions: Option<usize>,
    minutes: Option<usize>,
    plus_minus: Option<usize>,
    net_rating: Option<usize>,
    off_rating: Option<usize>,
    def_rating: Option<usize>,
}

impl ColumnMap {
    fn resolve(table: &CsvTable, variant: SchemaVariant) -> Result<Self> {
        let layout = layout(variant);
        let mut slots = [0usize; PLAYER_SLOTS];
        for (slot, name) in slots.iter_mut().zip(layout.slots) {
            *slot = find_column(table, variant, name)
                .ok_or(SchemaError::MissingColumn { variant, column: name })?;
        }
        Ok(Self {
            slots,
            possessions: first_column(table, variant, layout.possessions),
            minutes: first_column(table, variant, layout.minutes),
            plus_minus: first_column(table, variant, layout.plus_minus),
            net_rating: first_column(table, variant, layout.net_rating),
            off_rating: first_column(table, variant, layout.off_rating),
            def_rating: first_column(table, variant, layout.def_rating),
        })
    }
}

fn cell(row: &[String], idx: Option<usize>) -> String {
    idx.and_then(|i| row.get(i)).cloned().unwrap_or_default()
}

/// Detects which export generation produced `table`.
///
/// An exact `pId1` header marks the modern export; otherwise any casing of
/// `PID1` marks the legacy one.
pub fn detect_variant(table: &CsvTable) -> Result<SchemaVariant> {
    if table.column(MODERN.slots[0]).is_some() {
        Ok(SchemaVariant::Modern)
    } else if table.column_ignore_case(LEGACY.slots[0]).is_some() {
        Ok(SchemaVariant::Legacy)
    } else {
        Err(SchemaError::UnrecognizedTable {
            headers: table.headers.join(", "),
        })
    }
}

/// Maps every row of `table` onto [`LineupRow`], attaching `tag` when the
/// table is an interval table.
pub fn normalize(
    table: &CsvTable,
    variant: SchemaVariant,
    tag: Option<&IntervalTag>,
) -> Result<Vec<LineupRow>> {
    let columns = ColumnMap::resolve(table, variant)?;
    let rows = table
        .rows
        .iter()
        .map(|row| LineupRow {
            player_slots: columns.slots.map(|idx| cell(row, Some(idx))),
            possessions: cell(row, columns.possessions),
            minutes: cell(row, columns.minutes),
            plus_minus: cell(row, columns.plus_minus),
            net_rating: cell(row, columns.net_rating),
            off_rating: cell(row, columns.off_rating),
            def_rating: cell(row, columns.def_rating),
            interval: tag.cloned(),
        })
        .collect();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect(),
        }
    }

    #[test]
    fn detects_modern_headers() {
        let t = table(&["pId1", "pId2", "pId3", "pId4", "pId5"], &[]);
        assert_eq!(detect_variant(&t).unwrap(), SchemaVariant::Modern);
    }

    #[test]
    fn detects_legacy_headers_in_any_case() {
        let t = table(&["pid1", "Pid2", "PID3", "PID4", "PID5"], &[]);
        assert_eq!(detect_variant(&t).unwrap(), SchemaVariant::Legacy);
    }

    #[test]
    fn rejects_tables_without_player_columns() {
        let t = table(&["lineup", "POSS"], &[]);
        let err = detect_variant(&t).unwrap_err();
        assert!(err.to_string().contains("lineup, POSS"));
    }

    #[test]
    fn missing_slot_column_is_an_error() {
        let t = table(&["PID1", "PID2", "PID3", "PID4"], &[]);
        let err = normalize(&t, SchemaVariant::Legacy, None).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::MissingColumn { column: "PID5", .. }
        ));
    }

    #[test]
    fn legacy_falls_back_to_minspbp() {
        let t = table(
            &["PID1", "PID2", "PID3", "PID4", "PID5", "Poss", "MinsPbp"],
            &[&["1", "2", "3", "4", "5", "40", "11.5"]],
        );
        let rows = normalize(&t, SchemaVariant::Legacy, None).unwrap();
        assert_eq!(rows[0].possessions, "40");
        assert_eq!(rows[0].minutes, "11.5");
        assert_eq!(rows[0].plus_minus, "");
    }

    #[test]
    fn modern_matches_exact_case_only() {
        let t = table(
            &["pId1", "pId2", "pId3", "pId4", "pId5", "NET RTG", "Net Rtg"],
            &[&["1", "2", "3", "4", "5", "wrong", "7.5"]],
        );
        let rows = normalize(&t, SchemaVariant::Modern, None).unwrap();
        assert_eq!(rows[0].net_rating, "7.5");
    }

    #[test]
    fn interval_tag_is_attached() {
        let t = table(
            &["pId1", "pId2", "pId3", "pId4", "pId5"],
            &[&["5", "4", "3", "2", "1"]],
        );
        let tag = IntervalTag::new("1-10", 1);
        let rows = normalize(&t, SchemaVariant::Modern, Some(&tag)).unwrap();
        assert_eq!(rows[0].player_slots, ["5", "4", "3", "2", "1"].map(String::from));
        assert_eq!(rows[0].interval, Some(tag));
    }
}
