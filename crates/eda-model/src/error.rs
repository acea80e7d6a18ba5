use thiserror::Error;

use crate::kind::IdentifierKind;

/// Errors raised when a value cannot be stored in a country identifier slot.
///
/// A failed assignment never leaves a [`crate::Country`] partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value classifies to a different kind (or to none at all).
    #[error("'{value}' is not a valid {expected} identifier")]
    InvalidIdentifier {
        expected: IdentifierKind,
        found: Option<IdentifierKind>,
        value: String,
    },

    /// The value is an integer but negative.
    #[error("country id {value} is negative")]
    IdOutOfRange { value: i64 },

    /// A bulk update did not provide every identifier kind.
    #[error("identifier {kind} missing from bulk update")]
    MissingIdentifier { kind: IdentifierKind },

    /// Neither a value nor a target kind was supplied.
    #[error("cannot assign an identifier without a value or a kind")]
    EmptyAssignment,
}

pub type Result<T> = std::result::Result<T, ValidationError>;
