//! Error types for dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing datasets.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Dataset file not found.
    #[error("TSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === TSV Parsing Errors ===
    /// Failed to parse the file as tab-separated values.
    #[error("failed to parse TSV {path}: {message}")]
    TsvParse { path: PathBuf, message: String },

    /// File is empty or has no header row.
    #[error("TSV file is empty: {path}")]
    EmptyTsv { path: PathBuf },

    // === Layout Errors ===
    /// The table does not have the expected number of columns.
    #[error("expected {expected} columns in {path}, found {found}")]
    ColumnCount {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    /// A year cell could not be read as a calendar year.
    #[error("invalid year value '{value}'")]
    InvalidYear { value: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
