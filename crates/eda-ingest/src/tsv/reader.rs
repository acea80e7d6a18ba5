//! TSV file reading.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::*;

use crate::error::{IngestError, Result};

use super::options::TsvOptions;

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

fn read_header_row(path: &Path, separator: u8) -> Result<Vec<String>> {
    let file = open_file(path)?;
    let mut reader = ReaderBuilder::new()
        .delimiter(separator)
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    let headers = reader.headers().map_err(|e| IngestError::TsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let columns: Vec<String> = headers
        .iter()
        .map(|value| value.trim().trim_start_matches('\u{feff}').to_string())
        .collect();
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::EmptyTsv {
            path: path.to_path_buf(),
        });
    }
    Ok(columns)
}

/// Reads the column names from the header row of a TSV file.
pub fn read_tsv_headers(path: &Path) -> Result<Vec<String>> {
    read_header_row(path, TsvOptions::default().separator)
}

/// Reads a TSV file with a header row into a DataFrame.
pub fn read_tsv(path: &Path) -> Result<DataFrame> {
    read_tsv_with_options(path, &TsvOptions::default())
}

/// Reads a delimited file into a DataFrame using explicit parse options.
pub fn read_tsv_with_options(path: &Path, options: &TsvOptions) -> Result<DataFrame> {
    if options.has_header {
        // Surfaces missing and empty files before Polars does.
        read_header_row(path, options.separator)?;
    } else {
        open_file(path)?;
    }

    let separator = options.separator;
    let df = CsvReadOptions::default()
        .with_has_header(options.has_header)
        .with_infer_schema_length(options.infer_schema_length)
        .map_parse_options(|parse_options| parse_options.with_separator(separator))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::TsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::TsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded TSV"
    );
    Ok(df)
}
