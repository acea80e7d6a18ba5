//! Country resolution from tabular data.
//!
//! A country table has one row per country with id, code and label columns
//! (`ID`, `Code`, `Country` by default). [`CountryResolver`] builds
//! [`Country`] keys from such a table by row position or by search term.
//! Lookups that find nothing return `Ok(None)`; only a malformed table is an
//! error.

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use eda_model::{Country, Value};

use crate::error::{CoreError, Result};
use crate::frame::{leading_values, missing_columns, row_values};
use crate::search::{Axis, QueryMode, find_exact};

/// Column names of a country table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountrySchema {
    pub id_column: String,
    pub code_column: String,
    pub label_column: String,
}

impl Default for CountrySchema {
    fn default() -> Self {
        Self {
            id_column: "ID".to_string(),
            code_column: "Code".to_string(),
            label_column: "Country".to_string(),
        }
    }
}

impl CountrySchema {
    #[must_use]
    pub fn with_id_column(mut self, name: impl Into<String>) -> Self {
        self.id_column = name.into();
        self
    }

    #[must_use]
    pub fn with_code_column(mut self, name: impl Into<String>) -> Self {
        self.code_column = name.into();
        self
    }

    #[must_use]
    pub fn with_label_column(mut self, name: impl Into<String>) -> Self {
        self.label_column = name.into();
        self
    }

    /// Column names in `(id, code, label)` order.
    pub fn columns(&self) -> [&str; 3] {
        [
            self.id_column.as_str(),
            self.code_column.as_str(),
            self.label_column.as_str(),
        ]
    }
}

/// What to look for in a country table.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchTerm {
    /// One value; resolves to at most one country.
    Single(Value),
    /// Several values, each resolved independently.
    Multiple(Vec<Value>),
}

impl SearchTerm {
    pub fn single(value: impl Into<Value>) -> Self {
        SearchTerm::Single(value.into())
    }

    pub fn multiple<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        SearchTerm::Multiple(values.into_iter().map(Into::into).collect())
    }
    /// True when no value in the term is usable: null, empty or blank.
    pub fn is_absent(&self) -> bool {
        match self {
            SearchTerm::Single(value) => value.is_absent(),
            SearchTerm::Multiple(values) => values.iter().all(Value::is_absent),
        }
    }
}

/// Result of a lookup that can produce one or several countries.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    One(Country),
    Many(Vec<Country>),
}

impl Resolution {
    pub fn len(&self) -> usize {
        match self {
            Resolution::One(_) => 1,
            Resolution::Many(countries) => countries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn first(&self) -> Option<&Country> {
        match self {
            Resolution::One(country) => Some(country),
            Resolution::Many(countries) => countries.first(),
        }
    }

    pub fn into_vec(self) -> Vec<Country> {
        match self {
            Resolution::One(country) => vec![country],
            Resolution::Many(countries) => countries,
        }
    }
}

/// Builds [`Country`] keys from a country table.
///
/// The table is only read, never modified.
#[derive(Debug, Clone, Default)]
pub struct CountryResolver {
    schema: CountrySchema,
}

impl CountryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(schema: CountrySchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &CountrySchema {
        &self.schema
    }

    fn ensure_table(&self, df: &DataFrame) -> Result<()> {
        if df.width() == 0 {
            return Err(CoreError::NotATable);
        }
        let missing = missing_columns(df, &self.schema.columns());
        if !missing.is_empty() {
            return Err(CoreError::MissingColumns { columns: missing });
        }
        Ok(())
    }

    /// Builds the country at `idx`; the caller has checked the schema and
    /// the bounds.
    fn country_at(&self, df: &DataFrame, idx: usize) -> Result<Country> {
        let values = row_values(df, &self.schema.columns(), idx)?;
        Ok(Country::from_values(&values))
    }

    /// The country at row `index`, or `None` past the end of the table.
    pub fn from_row(&self, df: &DataFrame, index: usize) -> Result<Option<Country>> {
        self.ensure_table(df)?;
        if index >= df.height() {
            debug!(index, rows = df.height(), "row index out of range");
            return Ok(None);
        }
        self.country_at(df, index).map(Some)
    }

    /// The country held by a single-row slice.
    ///
    /// Schema columns are used when present; otherwise the first three
    /// columns are read as id, code and label. Only the first row is read.
    pub fn from_series(&self, slice: &DataFrame) -> Result<Option<Country>> {
        if slice.width() == 0 {
            return Err(CoreError::NotATable);
        }
        if slice.height() == 0 {
            return Ok(None);
        }
        if missing_columns(slice, &self.schema.columns()).is_empty() {
            return self.country_at(slice, 0).map(Some);
        }
        if slice.width() < 3 {
            return Err(CoreError::TooFewColumns {
                found: slice.width(),
            });
        }
        let values = leading_values(slice, 3, 0)?;
        Ok(Some(Country::from_values(&values)))
    }

    /// One country per row, in row order; `None` for an empty table.
    pub fn all(&self, df: &DataFrame) -> Result<Option<Vec<Country>>> {
        self.ensure_table(df)?;
        if df.height() == 0 {
            return Ok(None);
        }
        let countries = (0..df.height())
            .map(|idx| self.country_at(df, idx))
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(countries))
    }

    /// Resolves a search term against the table.
    ///
    /// A single term yields [`Resolution::One`]. Multiple terms yield
    /// [`Resolution::Many`] with one country per term that matched, in term
    /// order; terms without a match are dropped and the number that did match
    /// is logged. `None` when nothing matched at all.
    pub fn search(&self, df: &DataFrame, term: &SearchTerm) -> Result<Option<Resolution>> {
        self.ensure_table(df)?;
        match term {
            SearchTerm::Single(value) => Ok(self.lookup(df, value)?.map(Resolution::One)),
            SearchTerm::Multiple(values) => {
                let mut found = Vec::with_capacity(values.len());
                for value in values {
                    match self.lookup(df, value)? {
                        Some(country) => found.push(country),
                        None => debug!(term = %value, "no country matched search term"),
                    }
                }
                info!(
                    terms = values.len(),
                    matched = found.len(),
                    "resolved country search terms"
                );
                if found.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(Resolution::Many(found)))
                }
            }
        }
    }

    /// First row containing `term`, retrying numeric text as an integer.
    /// Absent terms match nothing.
    fn lookup(&self, df: &DataFrame, term: &Value) -> Result<Option<Country>> {
        if term.is_absent() {
            return Ok(None);
        }
        let mut matches = find_exact(df, term, QueryMode::Any, Axis::Rows)?;
        if matches.height() == 0
            && matches!(term, Value::Text(_))
            && let Some(number) = term.as_integer()
        {
            matches = find_exact(df, &Value::Int(number), QueryMode::Any, Axis::Rows)?;
        }
        if matches.height() == 0 {
            return Ok(None);
        }
        self.country_at(&matches, 0).map(Some)
    }

    /// Resolves countries by search term, by row index, or all rows.
    ///
    /// A search term takes precedence over an index, unless it is absent
    /// (null, empty or blank), in which case it is ignored. Without either,
    /// every row becomes a country.
    pub fn from_frame(
        &self,
        df: &DataFrame,
        search: Option<&SearchTerm>,
        index: Option<usize>,
    ) -> Result<Option<Resolution>> {
        self.ensure_table(df)?;
        let search = search.filter(|term| !term.is_absent());
        match (search, index) {
            (Some(term), _) => self.search(df, term),
            (None, Some(index)) => Ok(self.from_row(df, index)?.map(Resolution::One)),
            (None, None) => Ok(self.all(df)?.map(Resolution::Many)),
        }
    }

    /// Countries from either a single-row slice or a full country table.
    ///
    /// A one-row input is read as by [`CountryResolver::from_series`]; any
    /// other input must carry the schema columns.
    pub fn get_countries(&self, df: &DataFrame) -> Result<Option<Vec<Country>>> {
        if df.height() == 1 {
            return Ok(self.from_series(df)?.map(|country| vec![country]));
        }
        self.all(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn countries() -> DataFrame {
        df! {
            "ID" => [1i64, 2],
            "Code" => ["AFG", "ALB"],
            "Country" => ["Afghanistan", "Albania"],
        }
        .unwrap()
    }

    #[test]
    fn test_numeric_text_falls_back_to_id() {
        let resolver = CountryResolver::new();
        let found = resolver
            .search(&countries(), &SearchTerm::single("2"))
            .unwrap()
            .unwrap();
        assert_eq!(found, Resolution::One(Country::from_parts(2, "ALB", "Albania")));
    }

    #[test]
    fn test_search_by_label() {
        let resolver = CountryResolver::new();
        let found = resolver
            .search(&countries(), &SearchTerm::single("Afghanistan"))
            .unwrap()
            .unwrap();
        assert_eq!(found.first().and_then(Country::code), Some("AFG"));
    }

    #[test]
    fn test_search_prefers_term_over_index() {
        let resolver = CountryResolver::new();
        let found = resolver
            .from_frame(&countries(), Some(&SearchTerm::single("ALB")), Some(0))
            .unwrap()
            .unwrap();
        assert_eq!(found.first().and_then(Country::id), Some(2));
    }

    #[test]
    fn test_from_series_positional() {
        let slice = df! {
            "country_id" => [7i64],
            "iso" => ["ARG"],
            "name" => ["Argentina"],
        }
        .unwrap();
        let country = CountryResolver::new().from_series(&slice).unwrap().unwrap();
        assert_eq!(country, Country::from_parts(7, "ARG", "Argentina"));
    }

    #[test]
    fn test_from_series_too_narrow() {
        let slice = df! {
            "iso" => ["ARG"],
        }
        .unwrap();
        assert!(matches!(
            CountryResolver::new().from_series(&slice),
            Err(CoreError::TooFewColumns { found: 1 })
        ));
    }

    #[test]
    fn test_custom_schema() {
        let df = df! {
            "gtd_id" => [4i64],
            "iso3" => ["DZA"],
            "name" => ["Algeria"],
            "extra" => ["x"],
        }
        .unwrap();
        let schema = CountrySchema::default()
            .with_id_column("gtd_id")
            .with_code_column("iso3")
            .with_label_column("name");
        let resolver = CountryResolver::with_schema(schema);
        let all = resolver.all(&df).unwrap().unwrap();
        assert_eq!(all, vec![Country::from_parts(4, "DZA", "Algeria")]);
    }

    #[test]
    fn test_empty_frame_is_not_a_table() {
        let resolver = CountryResolver::new();
        assert!(matches!(
            resolver.from_frame(&DataFrame::empty(), None, None),
            Err(CoreError::NotATable)
        ));
    }

    #[test]
    fn test_resolution_helpers() {
        let many = Resolution::Many(vec![]);
        assert!(many.is_empty());
        let one = Resolution::One(Country::from_parts(1, "AFG", "Afghanistan"));
        assert_eq!(one.len(), 1);
        assert_eq!(one.into_vec().len(), 1);
    }
}
