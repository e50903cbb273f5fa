//! Run configuration.
//!
//! Every field has a default so an empty `lineup.toml` (or none at all) runs
//! against the conventional folder layout:
//!
//! ```text
//! wcc_players.csv
//! teams/<team>/top_lineups.csv
//! teams/<team>/interval1.csv | games_1_10.csv ...
//! output/
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::interval::IntervalStrategy;

pub const DEFAULT_PLAYERS_CSV: &str = "wcc_players.csv";
pub const DEFAULT_TEAMS_DIR: &str = "teams";
pub const DEFAULT_SEASON_FILE: &str = "top_lineups.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_TOP_LINEUPS: usize = 12;
pub const DEFAULT_FILE_PATTERN: &str = "games_{start}_{end}.csv";
pub const DEFAULT_TOTAL_GAMES: u32 = 30;
pub const DEFAULT_GAME_SPLIT: u32 = 10;

/// How interval tables are located inside a team folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntervalMode {
    /// Use the named files when any exist for the team, otherwise game windows.
    #[default]
    Auto,
    /// Fixed list of interval file names.
    Named,
    /// Computed game-range windows.
    GameWindows,
}

/// Settings for both interval discovery strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntervalOptions {
    pub strategy: IntervalMode,
    pub files: Vec<String>,
    pub file_pattern: String,
    pub total_games: u32,
    pub game_split: u32,
}

impl Default for IntervalOptions {
    fn default() -> Self {
        Self {
            strategy: IntervalMode::Auto,
            files: (1..=4).map(|n| format!("interval{n}.csv")).collect(),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            total_games: DEFAULT_TOTAL_GAMES,
            game_split: DEFAULT_GAME_SPLIT,
        }
    }
}

impl IntervalOptions {
    pub fn named(&self) -> IntervalStrategy {
        IntervalStrategy::Named {
            files: self.files.clone(),
        }
    }

    pub fn game_windows(&self) -> IntervalStrategy {
        IntervalStrategy::GameWindows {
            total_games: self.total_games,
            game_split: self.game_split,
            file_pattern: self.file_pattern.clone(),
        }
    }
}

/// Top-level configuration for a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Player reference table (`fullName`, `teamMarket`, `playerId`, `height`).
    pub players_csv: PathBuf,
    /// Folder holding one sub-folder per team.
    pub teams_dir: PathBuf,
    /// Season lineup table name inside each team folder.
    pub season_file: String,
    pub output_dir: PathBuf,
    /// Maximum number of lineups in the top-lineups report.
    pub top_lineups: usize,
    pub intervals: IntervalOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            players_csv: PathBuf::from(DEFAULT_PLAYERS_CSV),
            teams_dir: PathBuf::from(DEFAULT_TEAMS_DIR),
            season_file: DEFAULT_SEASON_FILE.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            top_lineups: DEFAULT_TOP_LINEUPS,
            intervals: IntervalOptions::default(),
        }
    }
}

impl RunConfig {
    /// Checks values that deserialize fine but cannot drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.top_lineups == 0 {
            return Err(ConfigError::Invalid {
                field: "top_lineups",
                message: "must be at least 1".to_string(),
            });
        }
        if self.season_file.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "season_file",
                message: "must not be empty".to_string(),
            });
        }
        if self.intervals.game_split == 0 {
            return Err(ConfigError::Invalid {
                field: "intervals.game_split",
                message: "must be at least 1".to_string(),
            });
        }
        let pattern = &self.intervals.file_pattern;
        if !pattern.contains("{start}") || !pattern.contains("{end}") {
            return Err(ConfigError::Invalid {
                field: "intervals.file_pattern",
                message: format!("`{pattern}` must contain both {{start}} and {{end}}"),
            });
        }
        Ok(())
    }
}
