//! Batch run orchestration.
//!
//! Stages per run:
//!
//! 1. Load the player reference table and build the lookup (fatal on failure).
//! 2. List team folders (fatal when the teams folder is missing).
//! 3. For each team, independently: read the season table, discover and read
//!    interval tables, transform, select, and write both reports.
//!
//! A team without a season table is skipped. Any other failure is recorded
//! against that team only.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, error, info, info_span, warn};

use lineup_ingest::{
    TeamDir, discover_intervals, list_team_dirs, read_csv_table, read_player_reference,
    resolve_interval_strategy, season_table_path,
};
use lineup_model::{RunConfig, SchemaVariant, TeamReport};
use lineup_report::write_team_report;
use lineup_transform::{PlayerLookup, ProcessedTable, build_team_report, process_table};

use crate::types::{RunResult, TeamStatus, TeamSummary};

/// Lines above the header row in every lineup export.
pub const BANNER_LINES: usize = 1;

/// Builds the player lookup from the reference table.
pub fn load_player_lookup(path: &Path) -> Result<PlayerLookup> {
    let rows = read_player_reference(path)
        .with_context(|| format!("load player reference: {}", path.display()))?;
    let lookup = PlayerLookup::build(&rows);
    info!(
        path = %path.display(),
        players = lookup.len(),
        skipped = lookup.skipped(),
        "player reference loaded"
    );
    Ok(lookup)
}

/// A team's transformed tables, before anything is written.
#[derive(Debug)]
pub struct TeamAnalysis {
    pub report: TeamReport,
    pub schema: SchemaVariant,
    pub season_rows: usize,
    pub interval_strategy: &'static str,
    pub intervals: usize,
    pub warnings: Vec<String>,
}

/// Reads and transforms one team folder.
///
/// Returns `Ok(None)` when the team has no season table.
pub fn analyze_team(
    team: &TeamDir,
    config: &RunConfig,
    lookup: &PlayerLookup,
) -> Result<Option<TeamAnalysis>> {
    let Some(season_path) = season_table_path(team, &config.season_file) else {
        return Ok(None);
    };
    let season_table = read_csv_table(&season_path, BANNER_LINES)
        .with_context(|| format!("read season table for {}", team.name))?;
    let season = process_table(&season_table, None, lookup)
        .with_context(|| format!("process {}", season_path.display()))?;

    let strategy = resolve_interval_strategy(&team.path, &config.intervals);
    let discovered = discover_intervals(&team.path, &strategy);
    debug!(
        team = %team.name,
        strategy = strategy.name(),
        found = discovered.len(),
        "interval discovery"
    );

    let mut warnings = Vec::new();
    let mut interval_tables: Vec<ProcessedTable> = Vec::with_capacity(discovered.len());
    for interval in &discovered {
        let processed = read_csv_table(&interval.path, BANNER_LINES)
            .map_err(anyhow::Error::from)
            .and_then(|table| {
                process_table(&table, Some(&interval.tag), lookup).map_err(anyhow::Error::from)
            });
        match processed {
            Ok(table) => interval_tables.push(table),
            Err(err) => {
                let message = format!("{}: {err:#}", interval.path.display());
                warn!(
                    team = %team.name,
                    interval = %interval.tag.label,
                    error = %format!("{err:#}"),
                    "skipping interval table"
                );
                warnings.push(message);
            }
        }
    }

    let intervals = interval_tables.len();
    let progression = (!discovered.is_empty()).then_some(interval_tables);
    let report = build_team_report(&team.name, &season, progression, config.top_lineups);

    Ok(Some(TeamAnalysis {
        report,
        schema: season.variant,
        season_rows: season.rows.len(),
        interval_strategy: strategy.name(),
        intervals,
        warnings,
    }))
}

/// Processes one team and records the outcome; never fails the run.
pub fn process_team(
    team: &TeamDir,
    config: &RunConfig,
    lookup: &PlayerLookup,
    dry_run: bool,
) -> TeamSummary {
    let span = info_span!("team", team = %team.name);
    let _guard = span.enter();
    let start = Instant::now();

    let analysis = match analyze_team(team, config, lookup) {
        Ok(Some(analysis)) => analysis,
        Ok(None) => {
            warn!(season_file = %config.season_file, "no season file, skipping team");
            return TeamSummary::new(
                &team.name,
                TeamStatus::Skipped(format!("no {}", config.season_file)),
            );
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "team failed");
            return TeamSummary::new(&team.name, TeamStatus::Failed(format!("{err:#}")));
        }
    };

    let mut summary = TeamSummary::new(&team.name, TeamStatus::Checked);
    summary.schema = Some(analysis.schema);
    summary.season_rows = analysis.season_rows;
    summary.top_lineups = analysis.report.top_lineups.len();
    summary.interval_strategy = Some(analysis.interval_strategy);
    summary.intervals = analysis.intervals;
    summary.progression_rows = analysis.report.progression.as_ref().map(Vec::len);
    summary.warnings = analysis.warnings;

    if !dry_run {
        match write_team_report(&analysis.report, &config.output_dir) {
            Ok(paths) => {
                summary.outputs = paths;
                summary.status = TeamStatus::Written;
            }
            Err(err) => {
                error!(error = %format!("{err:#}"), "failed to write reports");
                summary.status = TeamStatus::Failed(format!("{err:#}"));
            }
        }
    }

    info!(
        schema = %analysis.schema,
        season_rows = summary.season_rows,
        top_lineups = summary.top_lineups,
        intervals = summary.intervals,
        duration_ms = start.elapsed().as_millis(),
        "team complete"
    );
    summary
}

/// Runs every team folder under `config.teams_dir`.
pub fn run(config: &RunConfig, lookup: &PlayerLookup, dry_run: bool) -> Result<RunResult> {
    let span = info_span!("run", teams_dir = %config.teams_dir.display());
    let _guard = span.enter();

    let teams = list_team_dirs(&config.teams_dir).context("list team folders")?;
    info!(teams = teams.len(), dry_run, "analyzing teams");

    let summaries: Vec<TeamSummary> = teams
        .iter()
        .map(|team| process_team(team, config, lookup, dry_run))
        .collect();

    let result = RunResult {
        output_dir: config.output_dir.clone(),
        teams: summaries,
        dry_run,
    };
    info!(
        written = result.count(|s| matches!(s, TeamStatus::Written)),
        skipped = result.count(|s| matches!(s, TeamStatus::Skipped(_))),
        failed = result.count(|s| matches!(s, TeamStatus::Failed(_))),
        "analysis complete"
    );
    Ok(result)
}
