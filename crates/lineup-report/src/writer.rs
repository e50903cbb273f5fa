use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::Writer;
use tracing::info;

use lineup_model::{DerivedRow, TeamReport};

use crate::format::format_value;

pub const TOP_LINEUP_COLUMNS: [&str; 8] = [
    "lineup",
    "possessions",
    "minutes",
    "plusminus",
    "plusminus_per40",
    "netrating",
    "offrating",
    "defrating",
];

pub const PROGRESSION_COLUMNS: [&str; 8] = [
    "lineup",
    "interval",
    "interval_num",
    "possessions",
    "minutes",
    "plusminus_per40",
    "netrating",
    "plusminus",
];

/// Files written for one team.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportPaths {
    pub top_lineups: Option<PathBuf>,
    pub progression: Option<PathBuf>,
}

pub fn top_lineups_path(output_dir: &Path, team: &str) -> PathBuf {
    output_dir.join(format!("{team}_top_lineups.csv"))
}

pub fn progression_path(output_dir: &Path, team: &str) -> PathBuf {
    output_dir.join(format!("{team}_progression.csv"))
}

fn top_lineup_record(row: &DerivedRow) -> [String; 8] {
    let m = &row.metrics;
    [
        row.lineup.to_string(),
        format_value(m.possessions),
        format_value(m.minutes),
        format_value(m.plus_minus),
        format_value(row.plus_minus_per40),
        format_value(m.net_rating),
        format_value(m.off_rating),
        format_value(m.def_rating),
    ]
}

fn progression_record(row: &DerivedRow) -> [String; 8] {
    let m = &row.metrics;
    let (label, ordinal) = match &row.interval {
        Some(tag) => (tag.label.clone(), tag.ordinal.to_string()),
        None => (String::new(), String::new()),
    };
    [
        row.lineup.to_string(),
        label,
        ordinal,
        format_value(m.possessions),
        format_value(m.minutes),
        format_value(row.plus_minus_per40),
        format_value(m.net_rating),
        format_value(m.plus_minus),
    ]
}

/// Writes the top-lineups table.
pub fn write_top_lineups<W: Write>(writer: W, rows: &[DerivedRow]) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(TOP_LINEUP_COLUMNS)
        .context("write top lineups header")?;
    for row in rows {
        csv.write_record(top_lineup_record(row))
            .context("write top lineups row")?;
    }
    csv.flush().context("flush top lineups")?;
    Ok(())
}

/// Writes the progression table.
pub fn write_progression<W: Write>(writer: W, rows: &[DerivedRow]) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(PROGRESSION_COLUMNS)
        .context("write progression header")?;
    for row in rows {
        csv.write_record(progression_record(row))
            .context("write progression row")?;
    }
    csv.flush().context("flush progression")?;
    Ok(())
}

/// Writes both report files for a team into `output_dir`.
///
/// The progression file is only written when the report has a progression
/// table (at least one interval file was found).
pub fn write_team_report(report: &TeamReport, output_dir: &Path) -> Result<ReportPaths> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;

    let top_path = top_lineups_path(output_dir, &report.team);
    let file = File::create(&top_path)
        .with_context(|| format!("create {}", top_path.display()))?;
    write_top_lineups(file, &report.top_lineups)
        .with_context(|| format!("write {}", top_path.display()))?;
    info!(
        team = %report.team,
        rows = report.top_lineups.len(),
        path = %top_path.display(),
        "top lineups saved"
    );

    let mut paths = ReportPaths {
        top_lineups: Some(top_path),
        progression: None,
    };

    if let Some(progression) = &report.progression {
        let path = progression_path(output_dir, &report.team);
        let file =
            File::create(&path).with_context(|| format!("create {}", path.display()))?;
        write_progression(file, progression)
            .with_context(|| format!("write {}", path.display()))?;
        info!(
            team = %report.team,
            rows = progression.len(),
            path = %path.display(),
            "progression saved"
        );
        paths.progression = Some(path);
    }

    Ok(paths)
}
