//! Cell-level coercion helpers.

pub mod numeric;

pub use numeric::{parse_f64, parse_player_id};
