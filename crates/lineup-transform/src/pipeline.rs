//! Table-level composition of the transform stages.

use lineup_ingest::CsvTable;
use lineup_model::{DerivedRow, IntervalTag, SchemaVariant, TeamReport};
use tracing::debug;

use crate::derive::derive;
use crate::error::Result;
use crate::players::PlayerLookup;
use crate::schema::{detect_variant, normalize};
use crate::select::{build_progression, select_top};

/// One season or interval table after normalization and derivation.
#[derive(Debug, Clone)]
pub struct ProcessedTable {
    pub variant: SchemaVariant,
    pub rows: Vec<DerivedRow>,
}

/// Detects the schema of `table` and derives every row.
pub fn process_table(
    table: &CsvTable,
    tag: Option<&IntervalTag>,
    lookup: &PlayerLookup,
) -> Result<ProcessedTable> {
    let variant = detect_variant(table)?;
    let rows: Vec<DerivedRow> = normalize(table, variant, tag)?
        .iter()
        .map(|row| derive(row, lookup))
        .collect();
    debug!(
        schema = %variant,
        rows = rows.len(),
        interval = tag.map(|t| t.label.as_str()),
        "processed lineup table"
    );
    Ok(ProcessedTable { variant, rows })
}

/// Assembles a team's report from its processed season table and the interval
/// tables that were found.
///
/// `intervals` is `None` when the team has no interval tables at all, in which
/// case no progression table is produced.
pub fn build_team_report(
    team: &str,
    season: &ProcessedTable,
    intervals: Option<Vec<ProcessedTable>>,
    limit: usize,
) -> TeamReport {
    TeamReport {
        team: team.to_string(),
        top_lineups: select_top(&season.rows, limit),
        progression: intervals
            .map(|tables| build_progression(tables.into_iter().flat_map(|table| table.rows))),
    }
}
