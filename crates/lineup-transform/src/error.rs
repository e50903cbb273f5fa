use lineup_model::SchemaVariant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("no player id columns (PID1 or pId1) among headers: {headers}")]
    UnrecognizedTable { headers: String },
    #[error("{variant} lineup table is missing column {column}")]
    MissingColumn {
        variant: SchemaVariant,
        column: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
