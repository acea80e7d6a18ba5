use serde::{Deserialize, Serialize};

/// Options for parsing delimited dataset files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TsvOptions {
    /// Field separator byte.
    pub separator: u8,
    /// Whether the first line holds column names.
    pub has_header: bool,
    /// Number of rows scanned to infer column types (`None` scans all rows).
    pub infer_schema_length: Option<usize>,
}

impl Default for TsvOptions {
    fn default() -> Self {
        Self {
            separator: b'\t',
            has_header: true,
            infer_schema_length: Some(100),
        }
    }
}

impl TsvOptions {
    #[must_use]
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn with_has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    #[must_use]
    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }
}
