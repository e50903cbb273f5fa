//! Player reference table rows.

use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::debug;

use crate::error::{IngestError, Result};

/// One raw row of the conference player table.
///
/// Values are kept as text; id and height coercion happens when the index is
/// built so that bad cells degrade to missing values instead of failing the
/// read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlayerReferenceRow {
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "teamMarket", default)]
    pub team: String,
    #[serde(rename = "playerId")]
    pub player_id: String,
    #[serde(default)]
    pub height: String,
}

/// Reads the player reference table (`fullName`, `teamMarket`, `playerId`, `height`).
///
/// Any failure here is fatal to a run: every team depends on the index.
pub fn read_player_reference(path: &Path) -> Result<Vec<PlayerReferenceRow>> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| IngestError::csv(path, source))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: PlayerReferenceRow = record.map_err(|source| IngestError::csv(path, source))?;
        rows.push(row);
    }
    debug!(path = %path.display(), rows = rows.len(), "read player reference");
    Ok(rows)
}
