//! Upstream export schema generations.

use std::fmt;

/// Which generation of the lineup export a table was produced by.
///
/// The legacy export is matched case-insensitively (its headers were upper-cased
/// before use); the modern export uses mixed-case headers such as `pId1` and
/// `Net Rtg` and is matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaVariant {
    Legacy,
    Modern,
}

impl SchemaVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Modern => "modern",
        }
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
