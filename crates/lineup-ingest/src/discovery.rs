//! Team folder and interval file discovery.

use std::path::{Path, PathBuf};

use lineup_model::{IntervalMode, IntervalOptions, IntervalStrategy, IntervalTag};
use tracing::debug;

use crate::error::{IngestError, Result};

/// A team sub-folder of the teams root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDir {
    /// Folder name, used as the team name in output file names.
    pub name: String,
    pub path: PathBuf,
}

/// An interval table that exists on disk, with the tag its rows receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredInterval {
    pub path: PathBuf,
    pub tag: IntervalTag,
}

/// Lists the team folders directly under `root`.
///
/// Returns folders sorted by name. Hidden folders are ignored.
pub fn list_team_dirs(root: &Path) -> Result<Vec<TeamDir>> {
    if !root.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(root).map_err(|e| IngestError::DirectoryRead {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut teams = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: root.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        teams.push(TeamDir { name, path });
    }

    teams.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(teams)
}

/// Path of the season table for a team, if the file exists.
pub fn season_table_path(team: &TeamDir, season_file: &str) -> Option<PathBuf> {
    let path = team.path.join(season_file);
    path.is_file().then_some(path)
}

/// Picks the interval strategy for one team folder.
///
/// In [`IntervalMode::Auto`] the named list wins when any of its files is
/// present; otherwise the game-window naming is assumed.
pub fn resolve_interval_strategy(team_path: &Path, options: &IntervalOptions) -> IntervalStrategy {
    match options.strategy {
        IntervalMode::Named => options.named(),
        IntervalMode::GameWindows => options.game_windows(),
        IntervalMode::Auto => {
            let has_named = options
                .files
                .iter()
                .any(|file| team_path.join(file).is_file());
            if has_named {
                options.named()
            } else {
                options.game_windows()
            }
        }
    }
}

/// Returns the planned interval files that exist, in ascending ordinal order.
///
/// Missing files are skipped; an absent interval is not an error.
pub fn discover_intervals(
    team_path: &Path,
    strategy: &IntervalStrategy,
) -> Vec<DiscoveredInterval> {
    let mut found = Vec::new();
    for spec in strategy.plan() {
        let path = team_path.join(&spec.file_name);
        if path.is_file() {
            found.push(DiscoveredInterval {
                path,
                tag: spec.tag,
            });
        } else {
            debug!(file = %spec.file_name, "interval file not present");
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), "banner\nheader\n").unwrap();
    }

    #[test]
    fn test_list_team_dirs_sorted_and_filtered() {
        let root = TempDir::new().unwrap();
        for name in ["santa-clara", "gonzaga", ".cache"] {
            std::fs::create_dir(root.path().join(name)).unwrap();
        }
        touch(root.path(), "notes.csv");

        let teams = list_team_dirs(root.path()).unwrap();
        let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["gonzaga", "santa-clara"]);
    }

    #[test]
    fn test_list_team_dirs_missing_root() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("nope");
        assert!(matches!(
            list_team_dirs(&missing),
            Err(IngestError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_auto_prefers_named_files() {
        let team = TempDir::new().unwrap();
        touch(team.path(), "interval2.csv");
        let strategy = resolve_interval_strategy(team.path(), &IntervalOptions::default());
        assert_eq!(strategy.name(), "named");
    }

    #[test]
    fn test_auto_falls_back_to_game_windows() {
        let team = TempDir::new().unwrap();
        touch(team.path(), "games_1_10.csv");
        let strategy = resolve_interval_strategy(team.path(), &IntervalOptions::default());
        assert_eq!(strategy.name(), "game-windows");
    }

    #[test]
    fn test_discover_intervals_skips_missing_and_keeps_ordinals() {
        let team = TempDir::new().unwrap();
        touch(team.path(), "interval1.csv");
        touch(team.path(), "interval3.csv");
        let strategy = IntervalOptions::default().named();

        let found = discover_intervals(team.path(), &strategy);
        let tags: Vec<(&str, usize)> = found
            .iter()
            .map(|d| (d.tag.label.as_str(), d.tag.ordinal))
            .collect();
        assert_eq!(tags, vec![("Interval 1", 1), ("Interval 3", 3)]);
    }
}
