//! Descriptive aggregates over one numeric column.
//!
//! [`describe_numeric`] extends the usual summary with the range, the
//! quartiles and the inter-quartile range. Aggregates are evaluated with the
//! lazy API, either over the whole table or per group.

use polars::prelude::*;

use crate::error::{CoreError, Result};

/// A single aggregate. Sample statistics use one delta degree of freedom and
/// percentiles interpolate linearly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggFn {
    Count,
    Mean,
    Std,
    Var,
    Min,
    Max,
    /// `max - min`.
    Spread,
    /// Quantile in `0.0..=1.0`.
    Percentile(f64),
    /// `Q3 - Q1`.
    Iqr,
}

impl AggFn {
    /// Output column name.
    pub fn name(&self) -> String {
        match self {
            AggFn::Count => "count".to_string(),
            AggFn::Mean => "mean".to_string(),
            AggFn::Std => "std".to_string(),
            AggFn::Var => "var".to_string(),
            AggFn::Min => "min".to_string(),
            AggFn::Max => "max".to_string(),
            AggFn::Spread => "range".to_string(),
            AggFn::Percentile(q) => format!("{:2.0}%", q * 100.0),
            AggFn::Iqr => "IQR".to_string(),
        }
    }

    fn expr(&self, column: &str) -> Expr {
        let values = col(column).cast(DataType::Float64);
        let expr = match self {
            AggFn::Count => values.count(),
            AggFn::Mean => values.mean(),
            AggFn::Std => values.std(1),
            AggFn::Var => values.var(1),
            AggFn::Min => values.min(),
            AggFn::Max => values.max(),
            AggFn::Spread => values.clone().max() - values.min(),
            AggFn::Percentile(q) => values.quantile(lit(*q), QuantileMethod::Linear),
            AggFn::Iqr => {
                values.clone().quantile(lit(0.75), QuantileMethod::Linear)
                    - values.quantile(lit(0.25), QuantileMethod::Linear)
            }
        };
        expr.alias(self.name())
    }
}

/// Aggregates used by [`describe_numeric`].
pub fn default_describe_fns() -> Vec<AggFn> {
    vec![
        AggFn::Count,
        AggFn::Mean,
        AggFn::Std,
        AggFn::Var,
        AggFn::Min,
        AggFn::Max,
        AggFn::Spread,
        AggFn::Percentile(0.0),
        AggFn::Percentile(0.25),
        AggFn::Percentile(0.75),
        AggFn::Percentile(1.0),
        AggFn::Iqr,
    ]
}

/// Identifies the column to aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    Name(String),
    /// Zero-based position.
    Index(usize),
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        ColumnRef::Name(name.to_string())
    }
}

impl From<usize> for ColumnRef {
    fn from(index: usize) -> Self {
        ColumnRef::Index(index)
    }
}

fn resolve_column(df: &DataFrame, target: &ColumnRef) -> Result<String> {
    match target {
        ColumnRef::Name(name) => {
            if df.column(name).is_ok() {
                Ok(name.clone())
            } else {
                Err(CoreError::UnknownColumn { name: name.clone() })
            }
        }
        ColumnRef::Index(index) => df
            .get_column_names()
            .get(*index)
            .map(|name| name.to_string())
            .ok_or(CoreError::ColumnIndexOutOfRange {
                index: *index,
                width: df.width(),
            }),
    }
}

/// Evaluates `fns` over the target column.
///
/// Without `group_by` the result has a single row. With it, the result has
/// one row per group in first-seen order, key columns first.
pub fn agg(
    df: &DataFrame,
    target: &ColumnRef,
    fns: &[AggFn],
    group_by: &[&str],
) -> Result<DataFrame> {
    let column = resolve_column(df, target)?;
    let exprs: Vec<Expr> = fns.iter().map(|f| f.expr(&column)).collect();
    let lazy = df.clone().lazy();
    let out = if group_by.is_empty() {
        lazy.select(exprs).collect()?
    } else {
        let keys: Vec<Expr> = group_by.iter().map(|key| col(*key)).collect();
        lazy.group_by_stable(keys).agg(exprs).collect()?
    };
    tracing::debug!(
        column = %column,
        aggregates = fns.len(),
        rows = out.height(),
        "aggregated column"
    );
    Ok(out)
}

/// [`agg`] with [`default_describe_fns`].
pub fn describe_numeric(
    df: &DataFrame,
    target: &ColumnRef,
    group_by: &[&str],
) -> Result<DataFrame> {
    agg(df, target, &default_describe_fns(), group_by)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let names: Vec<String> = default_describe_fns().iter().map(AggFn::name).collect();
        assert_eq!(
            names,
            vec![
                "count", "mean", "std", "var", "min", "max", "range", " 0%", "25%", "75%",
                "100%", "IQR"
            ]
        );
    }

    #[test]
    fn test_resolve_column() {
        let df = df! {
            "Code" => ["AFG"],
            "Rate" => [1.0f64],
        }
        .unwrap();
        assert_eq!(resolve_column(&df, &ColumnRef::from(1usize)).unwrap(), "Rate");
        assert_eq!(resolve_column(&df, &ColumnRef::from("Code")).unwrap(), "Code");
        assert!(matches!(
            resolve_column(&df, &ColumnRef::from("Year")),
            Err(CoreError::UnknownColumn { .. })
        ));
        assert!(matches!(
            resolve_column(&df, &ColumnRef::from(5usize)),
            Err(CoreError::ColumnIndexOutOfRange { index: 5, width: 2 })
        ));
    }
}
