//! The [`Country`] key.
//!
//! A country holds at most one value per identifier slot. Strict setters
//! ([`Country::set`], [`Country::set_id`], ...) reject values that classify to
//! another kind; the lenient path ([`Country::try_set`], used by all
//! constructors) skips them instead, so a partially valid record still yields
//! a partially filled key.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::kind::{IdentifierKind, classify};
use crate::value::Value;

/// Identifier values keyed by kind, as used for bulk import and export.
pub type IdentifierMap = BTreeMap<IdentifierKind, Value>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "CountryRecord", into = "CountryRecord")]
pub struct Country {
    id: Option<u64>,
    code: Option<String>,
    label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CountryRecord {
    id: Option<u64>,
    code: Option<String>,
    label: Option<String>,
}

impl Country {
    /// An empty key with every slot unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a key from positional identifiers, skipping any that do not
    /// classify to their slot.
    pub fn from_parts(
        id: impl Into<Value>,
        code: impl Into<Value>,
        label: impl Into<Value>,
    ) -> Self {
        let mut country = Self::new();
        country.try_set(IdentifierKind::Id, id);
        country.try_set(IdentifierKind::Code, code);
        country.try_set(IdentifierKind::Label, label);
        country
    }

    /// Builds a key from whichever kinds the mapping provides.
    pub fn from_mapping(identifiers: &IdentifierMap) -> Self {
        let mut country = Self::new();
        for (kind, value) in identifiers {
            country.try_set(*kind, value.clone());
        }
        country
    }

    /// Builds a key from an `(id, code, label)` triple.
    pub fn from_tuple(identifiers: (Value, Value, Value)) -> Self {
        let (id, code, label) = identifiers;
        Self::from_parts(id, code, label)
    }

    /// Builds a key from an ordered `[id, code, label]` sequence.
    ///
    /// Missing trailing positions are left unset and extra positions are
    /// ignored.
    pub fn from_values(values: &[Value]) -> Self {
        let mut country = Self::new();
        for (kind, value) in IdentifierKind::ALL.iter().zip(values) {
            country.try_set(*kind, value.clone());
        }
        country
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the value held in a slot, or [`Value::Null`] when unset.
    pub fn get(&self, kind: IdentifierKind) -> Value {
        match kind {
            IdentifierKind::Id => self.id.into(),
            IdentifierKind::Code => self.code.clone().into(),
            IdentifierKind::Label => self.label.clone().into(),
        }
    }

    /// A key is valid once both `id` and `code` are known.
    pub fn is_valid(&self) -> bool {
        self.id.is_some() && self.code.is_some()
    }

    /// Stores `value` in the `kind` slot.
    ///
    /// Null or blank values clear the slot. Anything that classifies to a
    /// different kind is rejected and the slot keeps its previous value.
    pub fn set(&mut self, kind: IdentifierKind, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if value.is_absent() {
            self.clear(kind);
            return Ok(());
        }
        let found = classify(&value);
        if found != Some(kind) {
            return Err(ValidationError::InvalidIdentifier {
                expected: kind,
                found,
                value: value.to_string(),
            });
        }
        match kind {
            IdentifierKind::Id => {
                let raw = value
                    .as_integer()
                    .ok_or_else(|| ValidationError::InvalidIdentifier {
                        expected: kind,
                        found,
                        value: value.to_string(),
                    })?;
                let id = u64::try_from(raw)
                    .map_err(|_| ValidationError::IdOutOfRange { value: raw })?;
                self.id = Some(id);
            }
            IdentifierKind::Code => self.code = value.as_text().map(str::to_string),
            IdentifierKind::Label => self.label = value.as_text().map(str::to_string),
        }
        Ok(())
    }

    pub fn set_id(&mut self, value: impl Into<Value>) -> Result<()> {
        self.set(IdentifierKind::Id, value)
    }

    pub fn set_code(&mut self, value: impl Into<Value>) -> Result<()> {
        self.set(IdentifierKind::Code, value)
    }

    pub fn set_label(&mut self, value: impl Into<Value>) -> Result<()> {
        self.set(IdentifierKind::Label, value)
    }

    /// Lenient counterpart of [`Country::set`].
    ///
    /// Returns true only when a value was stored; absent or mismatched values
    /// leave the key untouched.
    pub fn try_set(&mut self, kind: IdentifierKind, value: impl Into<Value>) -> bool {
        let value = value.into();
        if value.is_absent() {
            return false;
        }
        self.set(kind, value).is_ok()
    }

    /// Stores `value` in the slot named by `expected`, or in the slot it
    /// classifies to when no kind is given.
    ///
    /// Nothing is stored (and `Ok(false)` returned) when the inferred kind and
    /// the expected kind disagree.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyAssignment`] when both the value and the
    /// expected kind are absent.
    pub fn set_inferred(
        &mut self,
        value: impl Into<Value>,
        expected: Option<IdentifierKind>,
    ) -> Result<bool> {
        let value = value.into();
        if value.is_absent() && expected.is_none() {
            return Err(ValidationError::EmptyAssignment);
        }
        let Some(inferred) = classify(&value) else {
            return Ok(false);
        };
        let target = expected.unwrap_or(inferred);
        if target != inferred {
            return Ok(false);
        }
        Ok(self.try_set(target, value))
    }

    /// Replaces all three identifiers at once.
    ///
    /// Every kind must be present in the mapping (null values clear the slot).
    /// On any failure the key is restored to its state before the call.
    pub fn set_identifiers(&mut self, identifiers: &IdentifierMap) -> Result<()> {
        let snapshot = self.clone();
        let result = IdentifierKind::ALL.iter().try_for_each(|&kind| {
            let value = identifiers
                .get(&kind)
                .ok_or(ValidationError::MissingIdentifier { kind })?;
            self.set(kind, value.clone())
        });
        if result.is_err() {
            *self = snapshot;
        }
        result
    }

    pub fn clear(&mut self, kind: IdentifierKind) {
        match kind {
            IdentifierKind::Id => self.id = None,
            IdentifierKind::Code => self.code = None,
            IdentifierKind::Label => self.label = None,
        }
    }

    pub fn clear_id(&mut self) {
        self.clear(IdentifierKind::Id);
    }

    pub fn clear_code(&mut self) {
        self.clear(IdentifierKind::Code);
    }

    pub fn clear_label(&mut self) {
        self.clear(IdentifierKind::Label);
    }

    pub fn clear_all(&mut self) {
        *self = Self::new();
    }

    pub fn to_mapping(&self) -> IdentifierMap {
        IdentifierKind::ALL
            .iter()
            .map(|&kind| (kind, self.get(kind)))
            .collect()
    }

    pub fn to_tuple(&self) -> (Value, Value, Value) {
        (
            self.get(IdentifierKind::Id),
            self.get(IdentifierKind::Code),
            self.get(IdentifierKind::Label),
        )
    }

    pub fn to_values(&self) -> Vec<Value> {
        IdentifierKind::ALL.iter().map(|&kind| self.get(kind)).collect()
    }

    /// The `(id, code)` pair used for comparisons, if the key is valid.
    fn identity(&self) -> Option<(u64, &str)> {
        Some((self.id?, self.code.as_deref()?))
    }
}

/// Keys compare by `id` and `code` only; labels are free to differ.
///
/// A key that is not valid is equal to nothing, itself included.
impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        match (self.identity(), other.identity()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Orders valid keys by `id`, then `code`. Invalid keys are unordered, so
/// every comparison operator involving one returns false.
impl PartialOrd for Country {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.identity(), other.identity()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => None,
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<[{} {}]: \"{}\">",
            self.code().unwrap_or_default(),
            self.get(IdentifierKind::Id),
            self.label().unwrap_or_default()
        )
    }
}

impl TryFrom<CountryRecord> for Country {
    type Error = ValidationError;

    fn try_from(record: CountryRecord) -> Result<Self> {
        let mut country = Country::new();
        country.set_id(record.id)?;
        country.set_code(record.code)?;
        country.set_label(record.label)?;
        Ok(country)
    }
}

impl From<Country> for CountryRecord {
    fn from(country: Country) -> Self {
        Self {
            id: country.id,
            code: country.code,
            label: country.label,
        }
    }
}
