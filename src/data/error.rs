//! Data loading error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the country list or the GDP series
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File missing or unreadable
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Country list is not valid JSON for the expected shape
    #[error("Malformed country list {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// GDP series is not a valid CSV for the expected columns
    #[error("Malformed GDP series {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Parsed, but violates a table invariant
    #[error("Invalid data in {path:?}: {message}")]
    Invalid { path: PathBuf, message: String },
}

/// Result type alias for data loading
pub type DataResult<T> = Result<T, DataLoadError>;
