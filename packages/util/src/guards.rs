//! Runtime guards over dynamic JSON values.
//!
//! UI code frequently receives `serde_json::Value` from stores, messages
//! or user input. These guards check "is this an array whose every
//! element is X" at the runtime boundary, where static typing cannot.
//!
//! Each `is_array_of_*` predicate returns `false` for non-array input
//! (misuse is not a fault) and `true` for the empty array (vacuous
//! truth). The matching `as_*_array` accessor is the narrowing
//! counterpart: it returns the typed elements when the predicate would
//! hold, `None` otherwise.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Whether `value` is an array containing only numbers.
pub fn is_array_of_numbers(value: &Value) -> bool {
    match value.as_array() {
        Some(items) => items.iter().all(Value::is_number),
        None => false,
    }
}

/// Whether `value` is an array containing only strings.
pub fn is_array_of_strings(value: &Value) -> bool {
    match value.as_array() {
        Some(items) => items.iter().all(Value::is_string),
        None => false,
    }
}

/// Whether `value` is an array containing only booleans.
pub fn is_array_of_booleans(value: &Value) -> bool {
    match value.as_array() {
        Some(items) => items.iter().all(Value::is_boolean),
        None => false,
    }
}

/// Whether `value` is an array containing only RFC 3339 date strings.
///
/// JSON has no date type; dates on this boundary are strings like
/// `"2026-01-05T13:45:00Z"`.
pub fn is_array_of_dates(value: &Value) -> bool {
    match value.as_array() {
        Some(items) => items.iter().all(is_date_string),
        None => false,
    }
}

fn is_date_string(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok())
}

/// The elements of `value` as `f64`s, when it is an array of numbers.
pub fn as_number_array(value: &Value) -> Option<Vec<f64>> {
    value
        .as_array()?
        .iter()
        .map(Value::as_f64)
        .collect()
}

/// The elements of `value` as `String`s, when it is an array of strings.
pub fn as_string_array(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

/// The elements of `value` as `bool`s, when it is an array of booleans.
pub fn as_bool_array(value: &Value) -> Option<Vec<bool>> {
    value
        .as_array()?
        .iter()
        .map(Value::as_bool)
        .collect()
}

/// The elements of `value` as UTC instants, when it is an array of
/// RFC 3339 date strings.
pub fn as_date_array(value: &Value) -> Option<Vec<DateTime<Utc>>> {
    value
        .as_array()?
        .iter()
        .map(|item| {
            item.as_str()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|dt| dt.with_timezone(&Utc))
        })
        .collect()
}
