//! Conversions between Polars cells and [`Value`].

use polars::prelude::*;

use eda_model::Value;

use crate::error::Result;

/// Converts a Polars `AnyValue` into a [`Value`], keeping integers, floats
/// and text distinct.
pub fn any_to_value(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(v) => Value::Bool(v),
        AnyValue::Int8(v) => Value::Int(i64::from(v)),
        AnyValue::Int16(v) => Value::Int(i64::from(v)),
        AnyValue::Int32(v) => Value::Int(i64::from(v)),
        AnyValue::Int64(v) => Value::Int(v),
        AnyValue::UInt8(v) => Value::Int(i64::from(v)),
        AnyValue::UInt16(v) => Value::Int(i64::from(v)),
        AnyValue::UInt32(v) => Value::Int(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).map_or(Value::Float(v as f64), Value::Int),
        AnyValue::Float32(v) => Value::Float(f64::from(v)),
        AnyValue::Float64(v) => Value::Float(v),
        AnyValue::String(s) => Value::Text(s.to_string()),
        AnyValue::StringOwned(s) => Value::Text(s.to_string()),
        other => Value::Text(other.to_string()),
    }
}

/// Reads one cell of a column as a [`Value`].
pub fn cell_value(column: &Column, idx: usize) -> Result<Value> {
    Ok(any_to_value(column.get(idx)?))
}

/// Reads the cells of the named columns at one row, in the given order.
pub fn row_values(df: &DataFrame, columns: &[&str], idx: usize) -> Result<Vec<Value>> {
    columns
        .iter()
        .map(|name| cell_value(df.column(name)?, idx))
        .collect()
}

/// Reads the first `count` cells of a row by position.
pub fn leading_values(df: &DataFrame, count: usize, idx: usize) -> Result<Vec<Value>> {
    df.get_columns()
        .iter()
        .take(count)
        .map(|column| cell_value(column, idx))
        .collect()
}

/// Names from `required` that are not columns of `df`.
pub fn missing_columns(df: &DataFrame, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|name| df.column(name).is_err())
        .map(|name| (*name).to_string())
        .collect()
}
