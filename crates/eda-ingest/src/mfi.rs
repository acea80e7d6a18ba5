//! MFI indicator tables.
//!
//! An MFI export has four columns: country code, country name, year and the
//! indicator value. [`read_mfi`] gives them stable names, keeps the requested
//! countries, turns the year into a date and sorts by country then year.

use std::path::Path;

use chrono::NaiveDate;
use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::tsv::read_tsv;

pub const CODE_COLUMN: &str = "Code";
pub const LABEL_COLUMN: &str = "Country";
pub const YEAR_COLUMN: &str = "Year";

const MFI_WIDTH: usize = 4;

fn year_from_any(value: &AnyValue<'_>) -> Option<i32> {
    match value {
        AnyValue::Int8(v) => Some(i32::from(*v)),
        AnyValue::Int16(v) => Some(i32::from(*v)),
        AnyValue::Int32(v) => Some(*v),
        AnyValue::Int64(v) => i32::try_from(*v).ok(),
        AnyValue::UInt8(v) => Some(i32::from(*v)),
        AnyValue::UInt16(v) => Some(i32::from(*v)),
        AnyValue::UInt32(v) => i32::try_from(*v).ok(),
        AnyValue::UInt64(v) => i32::try_from(*v).ok(),
        AnyValue::String(s) => s.trim().parse().ok(),
        AnyValue::StringOwned(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn year_dates(column: &Column) -> Result<Vec<NaiveDate>> {
    let mut dates = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        let value = column.get(idx)?;
        let date = year_from_any(&value)
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .ok_or_else(|| IngestError::InvalidYear {
                value: value.to_string(),
            })?;
        dates.push(date);
    }
    Ok(dates)
}

/// Reads an MFI table, keeping only rows whose code is in `countries`.
///
/// The value column is renamed to `title`.
pub fn read_mfi<S: AsRef<str>>(path: &Path, title: &str, countries: &[S]) -> Result<DataFrame> {
    let mut df = read_tsv(path)?;
    if df.width() != MFI_WIDTH {
        return Err(IngestError::ColumnCount {
            path: path.to_path_buf(),
            expected: MFI_WIDTH,
            found: df.width(),
        });
    }
    df.set_column_names([CODE_COLUMN, LABEL_COLUMN, YEAR_COLUMN, title])?;

    let keep: Vec<bool> = df
        .column(CODE_COLUMN)?
        .str()?
        .into_iter()
        .map(|code| {
            code.is_some_and(|code| countries.iter().any(|wanted| wanted.as_ref() == code))
        })
        .collect();
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    df = df.filter(&mask)?;

    let dates = year_dates(df.column(YEAR_COLUMN)?)?;
    df.with_column(Series::new(YEAR_COLUMN.into(), dates))?;

    let df = df.sort([CODE_COLUMN, YEAR_COLUMN], SortMultipleOptions::default())?;
    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        countries = countries.len(),
        "loaded MFI table"
    );
    Ok(df)
}
