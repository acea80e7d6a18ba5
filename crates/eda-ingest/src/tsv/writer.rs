//! TSV file writing.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

fn write_tsv<W: Write>(df: &mut DataFrame, writer: W) -> Result<()> {
    CsvWriter::new(writer)
        .include_header(true)
        .with_separator(b'\t')
        .finish(df)?;
    Ok(())
}

/// Writes a DataFrame to a TSV file, header row included.
pub fn to_tsv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_tsv(df, file)?;
    tracing::debug!(path = %path.display(), rows = df.height(), "wrote TSV");
    Ok(())
}

/// Renders a DataFrame as TSV text.
pub fn to_tsv_string(df: &mut DataFrame) -> Result<String> {
    let mut buffer = Vec::new();
    write_tsv(df, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| IngestError::DataFrame {
        message: e.to_string(),
    })
}
