//! CLI argument definitions for the lineup merger.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lineup-merge",
    version,
    about = "Merge basketball lineup exports into readable lineup reports",
    long_about = "Merge per-team lineup exports with a player reference table.\n\n\
                  Writes a top-lineups report per team and, when interval exports\n\
                  are present, a progression report across intervals."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process every team folder and write lineup reports.
    Run(RunArgs),

    /// List the player reference index.
    Players(PlayersArgs),
}

/// Options shared by every command that reads the config file.
#[derive(Args)]
pub struct ConfigArgs {
    /// Config file (default: ./lineup.toml when present).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Player reference CSV.
    #[arg(long = "players", value_name = "PATH")]
    pub players: Option<PathBuf>,
}

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Folder containing one subfolder per team.
    #[arg(long = "teams-dir", value_name = "DIR")]
    pub teams_dir: Option<PathBuf>,

    /// Output directory for report files.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Season lineup file name inside each team folder.
    #[arg(long = "season-file", value_name = "NAME")]
    pub season_file: Option<String>,

    /// Number of lineups kept in the top-lineups report.
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// How interval files are located.
    #[arg(long = "intervals", value_enum)]
    pub intervals: Option<IntervalArg>,

    /// Total games covered by game-window intervals.
    #[arg(long = "total-games", value_name = "N")]
    pub total_games: Option<u32>,

    /// Games per window.
    #[arg(long = "game-split", value_name = "N")]
    pub game_split: Option<u32>,

    /// Process and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct PlayersArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Only list players whose team matches (case-insensitive).
    #[arg(long = "team", value_name = "NAME")]
    pub team: Option<String>,
}

/// Interval discovery choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum IntervalArg {
    Auto,
    Named,
    GameWindows,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
