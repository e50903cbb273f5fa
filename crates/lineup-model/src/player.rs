//! Player reference records.

/// Numeric player identifier as exported by the play-by-play source.
pub type PlayerId = i64;

/// One entry of the player reference index.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub id: PlayerId,
    /// Short display code, e.g. `BWIL` for "Brandi Williams".
    pub initial: String,
    /// Height in inches; `None` when the reference value was missing or not numeric.
    pub height: Option<f64>,
    pub team: String,
}

impl PlayerRecord {
    /// Height used for ordering lineup members. Missing heights sort last.
    pub fn sort_height(&self) -> f64 {
        self.height.unwrap_or(f64::INFINITY)
    }
}
