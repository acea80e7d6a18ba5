//! Dataset ingestion for country-indexed tables.
//!
//! Datasets are distributed as tab-separated files with a header row. This
//! crate loads them into Polars DataFrames, writes DataFrames back out, and
//! knows the layout of MFI indicator tables.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use eda_ingest::{read_mfi, read_tsv};
//!
//! let countries = read_tsv(Path::new("data/countries.tsv"))?;
//! let mortality = read_mfi(Path::new("data/mortality.tsv"), "Mortality Rate", &["AFG", "JPN"])?;
//! ```

mod error;
mod mfi;
mod tsv;

// === Error Types ===
pub use error::{IngestError, Result};

// === TSV Reading and Writing ===
pub use tsv::{
    TsvOptions, read_tsv, read_tsv_headers, read_tsv_with_options, to_tsv, to_tsv_string,
};

// === MFI Tables ===
pub use mfi::{CODE_COLUMN, LABEL_COLUMN, YEAR_COLUMN, read_mfi};
