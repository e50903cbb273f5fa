//! CSV report writers.
//!
//! Column names and order are a compatibility contract with downstream
//! consumers; see [`TOP_LINEUP_COLUMNS`] and [`PROGRESSION_COLUMNS`].

pub mod format;
pub mod writer;

pub use format::{format_value, round2};
pub use writer::{
    PROGRESSION_COLUMNS, ReportPaths, TOP_LINEUP_COLUMNS, progression_path, top_lineups_path,
    write_progression, write_team_report, write_top_lineups,
};
