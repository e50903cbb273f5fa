//! Interval (game-range) table planning.
//!
//! A team folder can hold zero or more interval tables that slice the season
//! into contiguous ranges of games. Two naming schemes are in use:
//!
//! - a fixed list of file names (`interval1.csv` .. `interval4.csv`);
//! - files named after fixed-size game windows (`games_1_10.csv`,
//!   `games_11_20.csv`, ...) derived from a total game count and split size.
//!
//! Planning is pure. Checking which planned files exist is left to ingest.

/// Label and 1-based ordinal attached to every row read from an interval table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalTag {
    pub label: String,
    pub ordinal: usize,
}

impl IntervalTag {
    pub fn new(label: impl Into<String>, ordinal: usize) -> Self {
        Self {
            label: label.into(),
            ordinal,
        }
    }
}

/// One expected interval file and the tag its rows receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSpec {
    pub file_name: String,
    pub tag: IntervalTag,
}

/// Resolved interval discovery strategy for a single team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalStrategy {
    /// Fixed list of file names, labelled `Interval <n>`.
    Named { files: Vec<String> },
    /// Game-range windows of `game_split` games up to `total_games`.
    GameWindows {
        total_games: u32,
        game_split: u32,
        file_pattern: String,
    },
}

impl IntervalStrategy {
    /// Expected interval files in ascending ordinal order.
    pub fn plan(&self) -> Vec<IntervalSpec> {
        match self {
            Self::Named { files } => named_plan(files),
            Self::GameWindows {
                total_games,
                game_split,
                file_pattern,
            } => game_window_plan(*total_games, *game_split, file_pattern),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Named { .. } => "named",
            Self::GameWindows { .. } => "game-windows",
        }
    }
}

fn named_plan(files: &[String]) -> Vec<IntervalSpec> {
    // Ordinals follow list position so a missing file leaves a gap.
    files
        .iter()
        .enumerate()
        .map(|(idx, file)| IntervalSpec {
            file_name: file.clone(),
            tag: IntervalTag::new(format!("Interval {}", idx + 1), idx + 1),
        })
        .collect()
}

/// Zero-based `(start, end)` game windows covering `0..total_games`.
///
/// The final window keeps its full width even when it runs past
/// `total_games`, which matches the file names the exporter produces.
/// Bounds are widened to `u64` so no `u32` configuration can overflow them.
pub fn game_windows(total_games: u32, game_split: u32) -> Vec<(u64, u64)> {
    if game_split == 0 {
        return Vec::new();
    }
    let split = u64::from(game_split);
    (0..u64::from(total_games))
        .step_by(game_split as usize)
        .map(|start| (start, start + split - 1))
        .collect()
}

/// Renders a window file name, substituting 1-based `{start}` and `{end}`.
pub fn window_file_name(pattern: &str, start: u64, end: u64) -> String {
    pattern
        .replace("{start}", &start.to_string())
        .replace("{end}", &end.to_string())
}

fn game_window_plan(total_games: u32, game_split: u32, pattern: &str) -> Vec<IntervalSpec> {
    game_windows(total_games, game_split)
        .into_iter()
        .enumerate()
        .map(|(idx, (start, end))| {
            let (first, last) = (start + 1, end + 1);
            IntervalSpec {
                file_name: window_file_name(pattern, first, last),
                tag: IntervalTag::new(format!("{first}-{last}"), idx + 1),
            }
        })
        .collect()
}
