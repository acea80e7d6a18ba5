//! Exact-value search across a DataFrame.

use std::collections::BTreeSet;

use polars::prelude::*;
use tracing::warn;

use eda_model::Value;

use crate::error::Result;
use crate::frame::any_to_value;

/// How cell matches along an axis combine into a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryMode {
    /// Selected when any cell matches.
    #[default]
    Any,
    /// Selected only when every cell matches.
    All,
}

/// What [`find_in`] selects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Axis {
    /// Keep rows, judging the cells across each row.
    #[default]
    Rows,
    /// Keep columns, judging the cells down each column.
    Columns,
}

/// Per-column hit flags, indexed `[column][row]`.
fn match_grid(df: &DataFrame, value: &Value) -> Result<Vec<Vec<bool>>> {
    let mut grid = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let mut hits = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            hits.push(any_to_value(column.get(idx)?).matches(value));
        }
        grid.push(hits);
    }
    Ok(grid)
}

fn combine(mut flags: impl Iterator<Item = bool>, mode: QueryMode) -> bool {
    match mode {
        QueryMode::Any => flags.any(|hit| hit),
        QueryMode::All => flags.all(|hit| hit),
    }
}

fn select(df: &DataFrame, grid: &[Vec<bool>], mode: QueryMode, axis: Axis) -> Result<DataFrame> {
    match axis {
        Axis::Rows => {
            let keep: Vec<bool> = (0..df.height())
                .map(|row| combine(grid.iter().map(|hits| hits[row]), mode))
                .collect();
            let mask = BooleanChunked::from_slice("keep".into(), &keep);
            Ok(df.filter(&mask)?)
        }
        Axis::Columns => {
            let names: Vec<PlSmallStr> = df
                .get_columns()
                .iter()
                .zip(grid)
                .filter(|(_, hits)| combine(hits.iter().copied(), mode))
                .map(|(column, _)| column.name().clone())
                .collect();
            Ok(df.select(names)?)
        }
    }
}

fn is_empty_selection(df: &DataFrame, axis: Axis) -> bool {
    match axis {
        Axis::Rows => df.height() == 0,
        Axis::Columns => df.width() == 0,
    }
}

/// [`find_in`] without the numeric-text hint.
pub(crate) fn find_exact(
    df: &DataFrame,
    value: &Value,
    mode: QueryMode,
    axis: Axis,
) -> Result<DataFrame> {
    let grid = match_grid(df, value)?;
    select(df, &grid, mode, axis)
}

/// Finds rows (or columns) containing an exact match for `value`.
///
/// Integers and text are not interchangeable: searching for `"4"` does not
/// match a cell holding the integer `4`. When such a search comes back empty
/// but the integer form would have matched, a warning is logged so the
/// caller can fix the term.
///
/// An empty selection is returned as a zero-height frame for [`Axis::Rows`]
/// and a zero-width frame for [`Axis::Columns`].
pub fn find_in(df: &DataFrame, value: &Value, mode: QueryMode, axis: Axis) -> Result<DataFrame> {
    let results = find_exact(df, value, mode, axis)?;

    if is_empty_selection(&results, axis)
        && matches!(value, Value::Text(_))
        && let Some(number) = value.as_integer()
    {
        let numeric = find_exact(df, &Value::Int(number), mode, axis)?;
        if !is_empty_selection(&numeric, axis) {
            let matches = match axis {
                Axis::Rows => numeric.height(),
                Axis::Columns => numeric.width(),
            };
            warn!(
                term = %value,
                matches,
                "text search term only matches as an integer"
            );
        }
    }

    Ok(results)
}

/// Values present in every input, in sorted order.
///
/// Returns `None` when no inputs are given.
pub fn find_intersection<T: Ord + Clone>(sets: &[Vec<T>]) -> Option<Vec<T>> {
    let (first, rest) = sets.split_first()?;
    let mut common: BTreeSet<T> = first.iter().cloned().collect();
    for set in rest {
        let other: BTreeSet<&T> = set.iter().collect();
        common.retain(|value| other.contains(value));
    }
    Some(common.into_iter().collect())
}
