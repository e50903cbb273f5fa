//! CLI library components for the lineup merge tool.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
