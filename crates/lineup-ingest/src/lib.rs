//! Reading lineup exports and player reference data from disk.

pub mod csv_table;
pub mod discovery;
pub mod error;
pub mod reference;

pub use csv_table::{CsvTable, read_csv_table};
pub use discovery::{
    DiscoveredInterval, TeamDir, discover_intervals, list_team_dirs, resolve_interval_strategy,
    season_table_path,
};
pub use error::{IngestError, Result};
pub use reference::{PlayerReferenceRow, read_player_reference};
