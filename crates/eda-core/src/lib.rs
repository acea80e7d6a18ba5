//! Exploratory analysis helpers for country-indexed datasets.
//!
//! - [`search`]: exact-value lookups across a DataFrame and set intersection.
//! - [`resolver`]: turns rows of a country table into [`eda_model::Country`] keys.
//! - [`describe`]: descriptive aggregates (count, spread, percentiles, IQR).
//! - [`format`]: printable renderings of country keys.
//! - [`logging`]: `tracing` subscriber setup.

pub mod describe;
pub mod error;
pub mod format;
pub mod frame;
pub mod logging;
pub mod resolver;
pub mod search;

pub use describe::{AggFn, ColumnRef, agg, default_describe_fns, describe_numeric};
pub use error::{CoreError, Result};
pub use format::{format_country, format_each, format_key, format_keys, format_obj, format_value};
pub use frame::any_to_value;
pub use resolver::{CountryResolver, CountrySchema, Resolution, SearchTerm};
pub use search::{Axis, QueryMode, find_in, find_intersection};
