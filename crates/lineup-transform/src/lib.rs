//! Turns raw lineup tables into canonical, derived lineup rows.
//!
//! The stages run in this order for every table:
//!
//! 1. [`schema`] detects the export generation and maps its columns onto
//!    [`LineupRow`](lineup_model::LineupRow).
//! 2. [`canonical`] turns the five player slots into a height-sorted label
//!    using the [`PlayerLookup`] built by [`players`].
//! 3. [`derive`] coerces numeric cells and computes the per-40 plus-minus.
//! 4. [`select`] picks the top lineups and orders the progression table.

pub mod canonical;
pub mod derive;
pub mod error;
pub mod normalization;
pub mod pipeline;
pub mod players;
pub mod schema;
pub mod select;

pub use canonical::canonicalize;
pub use derive::{derive, per40};
pub use error::{Result, SchemaError};
pub use pipeline::{ProcessedTable, build_team_report, process_table};
pub use players::{PlayerLookup, display_initial};
pub use schema::{detect_variant, normalize};
pub use select::{build_progression, select_top};
