//! Loosely typed cell values.
//!
//! Dataset cells and search terms arrive as integers, floats or text depending
//! on how a column was parsed. [`Value`] keeps that distinction so that an
//! integer `1` and the text `"1"` can be told apart when matching, while
//! [`Value::as_integer`] provides the numeric coercion used for id lookups.

use std::fmt;

use crate::validate;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Null or text that is blank once trimmed.
    pub fn is_absent(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => validate::is_whitespace(s),
            _ => false,
        }
    }

    /// Coerces the value to an integer.
    ///
    /// Floats qualify only when finite and integral; text only when it parses
    /// as an integer after trimming. Booleans never coerce.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Float(v) => {
                if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
                    Some(*v as i64)
                } else {
                    None
                }
            }
            Value::Text(s) => validate::parse_integer(s),
            Value::Null | Value::Bool(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Exact match as used by table searches.
    ///
    /// Text only equals text. Integers and floats compare numerically so an
    /// integer term still finds an id column that was parsed as float.
    pub fn matches(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

fn format_float(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => f.write_str(&format_float(*v)),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Value::Float(value as f64), Value::Int)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_integer() {
        assert_eq!(Value::from(7).as_integer(), Some(7));
        assert_eq!(Value::from(7.0).as_integer(), Some(7));
        assert_eq!(Value::from(7.5).as_integer(), None);
        assert_eq!(Value::from(f64::NAN).as_integer(), None);
        assert_eq!(Value::from(" 12 ").as_integer(), Some(12));
        assert_eq!(Value::from("AFG").as_integer(), None);
        assert_eq!(Value::from(true).as_integer(), None);
        assert_eq!(Value::Null.as_integer(), None);
    }

    #[test]
    fn test_matches_keeps_text_and_numbers_apart() {
        assert!(Value::from(1).matches(&Value::from(1)));
        assert!(Value::from(1).matches(&Value::from(1.0)));
        assert!(!Value::from(1).matches(&Value::from("1")));
        assert!(Value::from("AFG").matches(&Value::from("AFG")));
        assert!(!Value::from("AFG").matches(&Value::from("afg")));
        assert!(!Value::Null.matches(&Value::Null));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(1.50).to_string(), "1.5");
        assert_eq!(Value::from(3.0).to_string(), "3");
        assert_eq!(Value::from("Albania").to_string(), "Albania");
    }

    #[test]
    fn test_absent() {
        assert!(Value::Null.is_absent());
        assert!(Value::from("").is_absent());
        assert!(Value::from("  ").is_absent());
        assert!(!Value::from(0).is_absent());
        assert!(Value::from(None::<i32>).is_null());
    }
}
