//! Country key identity model.
//!
//! Country-indexed datasets identify a country in three interchangeable ways:
//! a numeric id, a three-letter code, and a human-readable label. This crate
//! provides the [`Country`] key that holds all three, the classifier that
//! decides which slot a raw value belongs to, and the small validation
//! helpers the classifier is built on.
//!
//! # Example
//!
//! ```
//! use eda_model::{Country, IdentifierKind, Value, classify};
//!
//! assert_eq!(classify(&Value::from("AFG")), Some(IdentifierKind::Code));
//!
//! let afghanistan = Country::from_parts(1, "AFG", "Afghanistan");
//! assert!(afghanistan.is_valid());
//! assert_eq!(afghanistan, Country::from_parts(1, "AFG", "Other Label"));
//! ```

pub mod country;
pub mod error;
pub mod kind;
pub mod validate;
pub mod value;

pub use country::{Country, IdentifierMap};
pub use error::{Result, ValidationError};
pub use kind::{IdentifierKind, classify};
pub use value::Value;
