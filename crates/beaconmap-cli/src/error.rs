//! Error types for the beaconmap CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur reading inputs or configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading an input file failed
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input was not the expected JSON shape
    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// An environment variable held an unusable value
    #[error("invalid value {value:?} for {var}: expected a boolean")]
    InvalidConfig { var: &'static str, value: String },
}
