//! Identifier kinds and value classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validate;
use crate::value::Value;

/// The three interchangeable ways a country is identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// Numeric id.
    Id,
    /// Three-letter code.
    Code,
    /// Human-readable name.
    Label,
}

impl IdentifierKind {
    /// All kinds in export order.
    pub const ALL: [IdentifierKind; 3] = [
        IdentifierKind::Id,
        IdentifierKind::Code,
        IdentifierKind::Label,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierKind::Id => "ID",
            IdentifierKind::Code => "CODE",
            IdentifierKind::Label => "LABEL",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infers which identifier slot a raw value belongs to.
///
/// - `None` for null, empty or blank text, booleans and non-integral floats.
/// - `Id` for anything that coerces to an integer, including numeric text.
/// - `Code` for other text exactly three characters long.
/// - `Label` for any other non-blank text.
///
/// Every slot assignment on [`crate::Country`] is validated through this
/// function.
pub fn classify(value: &Value) -> Option<IdentifierKind> {
    if value.is_absent() {
        return None;
    }
    if value.as_integer().is_some() {
        return Some(IdentifierKind::Id);
    }
    let text = value.as_text()?;
    if validate::is_whitespace(text) {
        return None;
    }
    if text.chars().count() == 3 {
        Some(IdentifierKind::Code)
    } else {
        Some(IdentifierKind::Label)
    }
}
