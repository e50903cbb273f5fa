//! Run configuration loading.
//!
//! Precedence, lowest to highest: built-in defaults, `lineup.toml` (or the
//! file passed with `--config`), command-line flags.

use std::path::{Path, PathBuf};

use lineup_model::{ConfigError, IntervalMode, RunConfig};
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "lineup.toml";

/// Command-line values that override the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub players_csv: Option<PathBuf>,
    pub teams_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub season_file: Option<String>,
    pub top_lineups: Option<usize>,
    pub interval_mode: Option<IntervalMode>,
    pub total_games: Option<u32>,
    pub game_split: Option<u32>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut RunConfig) {
        if let Some(path) = self.players_csv {
            config.players_csv = path;
        }
        if let Some(path) = self.teams_dir {
            config.teams_dir = path;
        }
        if let Some(path) = self.output_dir {
            config.output_dir = path;
        }
        if let Some(name) = self.season_file {
            config.season_file = name;
        }
        if let Some(limit) = self.top_lineups {
            config.top_lineups = limit;
        }
        if let Some(mode) = self.interval_mode {
            config.intervals.strategy = mode;
        }
        if let Some(total) = self.total_games {
            config.intervals.total_games = total;
        }
        if let Some(split) = self.game_split {
            config.intervals.game_split = split;
        }
    }
}

/// Parses a TOML config file.
pub fn read_config_file(path: &Path) -> Result<RunConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Resolves the effective configuration.
///
/// An explicit `path` must exist. Without one, `lineup.toml` in the working
/// directory is used when present, and defaults otherwise.
pub fn load_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<RunConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => {
            let implicit = Path::new(DEFAULT_CONFIG_FILE);
            if implicit.is_file() {
                debug!(path = %implicit.display(), "using config file from working directory");
                read_config_file(implicit)?
            } else {
                RunConfig::default()
            }
        }
    };
    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}
