pub mod error;
pub mod interval;
pub mod lineup;
pub mod options;
pub mod player;
pub mod schema;

pub use error::{ConfigError, Result};
pub use interval::{IntervalSpec, IntervalStrategy, IntervalTag};
pub use lineup::{
    CanonicalLineup, DerivedRow, LINEUP_SEPARATOR, LineupRow, Metrics, PLAYER_SLOTS, TeamReport,
    UNKNOWN_PLAYER_TOKEN,
};
pub use options::{IntervalMode, IntervalOptions, RunConfig};
pub use player::{PlayerId, PlayerRecord};
pub use schema::SchemaVariant;
