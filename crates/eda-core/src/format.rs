//! Printable renderings of country keys and other values.

use std::fmt::Display;

use eda_model::Country;

/// Placeholder replaced by the value in [`format_value`] templates.
pub const PLACEHOLDER: &str = "{}";

/// Renders a key as `< "CODE": (ID) "LABEL" >`.
pub fn format_key(id: impl Display, code: impl Display, label: impl Display) -> String {
    format!("< \"{code}\": ({id}) \"{label}\" >")
}

pub fn format_country(country: &Country) -> String {
    let (id, code, label) = country.to_tuple();
    format_key(id, code, label)
}

/// One [`format_country`] line per key.
pub fn format_keys<'a, I>(countries: I) -> String
where
    I: IntoIterator<Item = &'a Country>,
{
    countries
        .into_iter()
        .map(format_country)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Substitutes `value` for every `{}` in `template`.
pub fn format_value<T: Display + ?Sized>(value: &T, template: &str) -> String {
    template.replace(PLACEHOLDER, &value.to_string())
}

/// Formats each item with `template`.
pub fn format_each<T: Display>(items: &[T], template: &str) -> Vec<String> {
    items
        .iter()
        .map(|item| format_value(item, template))
        .collect()
}

/// Formats each item with `template` and joins the results.
pub fn format_obj<T: Display>(items: &[T], template: &str, separator: &str) -> String {
    format_each(items, template).join(separator)
}
