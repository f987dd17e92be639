//! Raw field lookup helpers shared by the normalizers

use crate::types::JsonValue;

/// Look up a value by a possibly-dotted alias ("CustomerRef.Name")
fn value_at<'a>(raw: &'a JsonValue, alias: &str) -> Option<&'a JsonValue> {
    let mut current = raw;
    for part in alias.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

/// Render a raw value as a non-empty string, if it has one.
///
/// Numbers are rendered rather than dropped since tenants disagree about
/// whether codes like zip or document numbers are strings.
fn as_non_empty_string(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First non-empty string among the aliases, else `""`
pub(super) fn str_at(raw: &JsonValue, aliases: &[&str]) -> String {
    aliases
        .iter()
        .filter_map(|alias| value_at(raw, alias))
        .find_map(as_non_empty_string)
        .unwrap_or_default()
}

/// Coerce any truthy/falsy representation at the first present alias
pub(super) fn bool_at(raw: &JsonValue, aliases: &[&str]) -> bool {
    aliases
        .iter()
        .filter_map(|alias| value_at(raw, alias))
        .find(|v| !v.is_null())
        .is_some_and(truthy)
}

/// First numeric value among the aliases, else `0.0`
pub(super) fn f64_at(raw: &JsonValue, aliases: &[&str]) -> f64 {
    aliases
        .iter()
        .filter_map(|alias| value_at(raw, alias))
        .find_map(|v| match v {
            JsonValue::Number(n) => n.as_f64(),
            JsonValue::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .unwrap_or(0.0)
}

/// The record's id under its common spellings, else `0`
pub(super) fn id_at(raw: &JsonValue) -> i64 {
    ["Id", "ID", "id"]
        .iter()
        .filter_map(|alias| value_at(raw, alias))
        .find_map(|v| match v {
            JsonValue::Number(n) => n.as_i64(),
            JsonValue::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .unwrap_or(0)
}

/// The nested object under the first present alias
pub(super) fn object_at<'a>(raw: &'a JsonValue, aliases: &[&str]) -> Option<&'a JsonValue> {
    aliases
        .iter()
        .filter_map(|alias| value_at(raw, alias))
        .find(|v| v.is_object())
}

/// Truthiness across the representations tenants use for booleans
pub(super) fn truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => {
            matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1")
        }
        _ => false,
    }
}
