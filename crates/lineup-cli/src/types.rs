use std::path::PathBuf;

use lineup_model::SchemaVariant;
use lineup_report::ReportPaths;

#[derive(Debug)]
pub struct RunResult {
    pub output_dir: PathBuf,
    pub teams: Vec<TeamSummary>,
    pub dry_run: bool,
}

impl RunResult {
    /// True when any team failed for a reason other than a missing season file.
    pub fn has_errors(&self) -> bool {
        self.teams
            .iter()
            .any(|team| matches!(team.status, TeamStatus::Failed(_)))
    }

    pub fn count(&self, predicate: impl Fn(&TeamStatus) -> bool) -> usize {
        self.teams.iter().filter(|team| predicate(&team.status)).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamStatus {
    Written,
    /// Processed but not written (`--dry-run`).
    Checked,
    Skipped(String),
    Failed(String),
}

#[derive(Debug)]
pub struct TeamSummary {
    pub team: String,
    pub schema: Option<SchemaVariant>,
    pub season_rows: usize,
    pub top_lineups: usize,
    /// Interval strategy used for this team (`named` or `game-windows`).
    pub interval_strategy: Option<&'static str>,
    pub intervals: usize,
    pub progression_rows: Option<usize>,
    pub outputs: ReportPaths,
    pub warnings: Vec<String>,
    pub status: TeamStatus,
}

impl TeamSummary {
    pub fn new(team: impl Into<String>, status: TeamStatus) -> Self {
        Self {
            team: team.into(),
            schema: None,
            season_rows: 0,
            top_lineups: 0,
            interval_strategy: None,
            intervals: 0,
            progression_rows: None,
            outputs: ReportPaths::default(),
            warnings: Vec::new(),
            status,
        }
    }
}
