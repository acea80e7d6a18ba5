//! Integration tests for descriptive aggregation.

use eda_core::{AggFn, ColumnRef, agg, describe_numeric};
use polars::prelude::*;

fn cell(df: &DataFrame, name: &str, row: usize) -> f64 {
    df.column(name)
        .unwrap()
        .cast(&DataType::Float64)
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .get(row)
        .unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn describes_whole_column() {
    let df = df! {
        "Code" => ["AFG", "AFG", "ALB", "ALB", "ALB"],
        "Rate" => [1.0f64, 2.0, 3.0, 4.0, 6.0],
    }
    .unwrap();
    let out = describe_numeric(&df, &ColumnRef::from("Rate"), &[]).unwrap();

    assert_eq!(out.height(), 1);
    assert_close(cell(&out, "count", 0), 5.0);
    assert_close(cell(&out, "mean", 0), 3.2);
    assert_close(cell(&out, "var", 0), 3.7);
    assert_close(cell(&out, "std", 0), 3.7f64.sqrt());
    assert_close(cell(&out, "min", 0), 1.0);
    assert_close(cell(&out, "max", 0), 6.0);
    assert_close(cell(&out, "range", 0), 5.0);
    assert_close(cell(&out, "25%", 0), 2.0);
    assert_close(cell(&out, "75%", 0), 4.0);
    assert_close(cell(&out, "IQR", 0), 2.0);
}

#[test]
fn groups_in_first_seen_order() {
    let df = df! {
        "Code" => ["JPN", "AFG", "JPN", "AFG"],
        "Rate" => [1i64, 2, 3, 4],
    }
    .unwrap();
    let out = agg(&df, &ColumnRef::from(1usize), &[AggFn::Mean, AggFn::Max], &["Code"]).unwrap();

    assert_eq!(out.height(), 2);
    assert_eq!(out.column("Code").unwrap().get(0).unwrap(), AnyValue::String("JPN"));
    assert_eq!(out.column("Code").unwrap().get(1).unwrap(), AnyValue::String("AFG"));
    assert_close(cell(&out, "mean", 0), 2.0);
    assert_close(cell(&out, "mean", 1), 3.0);
    assert_close(cell(&out, "max", 1), 4.0);
}

#[test]
fn unknown_column_is_an_error() {
    let df = df! {
        "Rate" => [1.0f64],
    }
    .unwrap();
    assert!(describe_numeric(&df, &ColumnRef::from("Deaths"), &[]).is_err());
}
