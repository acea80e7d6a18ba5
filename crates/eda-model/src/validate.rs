//! String checks shared by the classifier and the dataframe helpers.

/// Returns true if the string has no characters at all.
pub fn is_empty(value: &str) -> bool {
    value.is_empty()
}

/// Returns true if the string is empty or contains only whitespace.
pub fn is_whitespace(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns true if the string converts to an integer.
///
/// Surrounding whitespace is ignored, so `" 42 "` is numeric while `"4.2"`
/// and `""` are not.
pub fn is_numeric(value: &str) -> bool {
    parse_integer(value).is_some()
}

/// Parses a string as `i64`, returning `None` for blank or non-integer input.
pub fn parse_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}
