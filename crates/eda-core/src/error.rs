//! Error types for search, resolution and aggregation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    // === Schema Errors ===
    /// Input has no columns at all.
    #[error("expected a table with at least one column")]
    NotATable,

    /// Table lacks columns the operation needs.
    #[error("table is missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// A row slice is too narrow to hold id, code and label.
    #[error("row slice has {found} columns, expected at least 3")]
    TooFewColumns { found: usize },

    // === Column Lookup Errors ===
    #[error("column '{name}' not found")]
    UnknownColumn { name: String },

    #[error("column index {index} out of range for table with {width} columns")]
    ColumnIndexOutOfRange { index: usize, width: usize },

    // === DataFrame Errors ===
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl CoreError {
    /// True for errors caused by the shape of the input table.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            CoreError::NotATable
                | CoreError::MissingColumns { .. }
                | CoreError::TooFewColumns { .. }
        )
    }
}

impl From<polars::prelude::PolarsError> for CoreError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
