//! Pure business-rule predicates.
//!
//! None of these functions panic or touch shared state.

use crate::IS_HQ_FIELD;
use chrono::{Local, NaiveDate};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Date format expected in `last_updated`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Strict `YYYY-MM-DD` shape. Calendar validity is left to chrono.
static DATE_SHAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid date shape regex"));

/// Returns true if `value` is a `YYYY-MM-DD` date not after today (local time).
pub fn is_valid_date(value: &str) -> bool {
    is_valid_date_on(value, Local::now().date_naive())
}

/// Returns true if `value` is a `YYYY-MM-DD` date not after `today`.
pub fn is_valid_date_on(value: &str, today: NaiveDate) -> bool {
    parse_date(value).is_some_and(|date| date <= today)
}

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE_REGEX.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Returns true if `value` is a string with non-whitespace content.
pub fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

/// Returns true if exactly one location has `is_hq` set to boolean `true`.
///
/// Entries that are not objects, or whose `is_hq` is missing or not a boolean,
/// simply do not count.
pub fn has_exactly_one_hq(locations: &[Value]) -> bool {
    count_hq(locations) == 1
}

/// Counts locations whose `is_hq` is boolean `true`.
pub fn count_hq(locations: &[Value]) -> usize {
    locations
        .iter()
        .filter(|location| location.get(IS_HQ_FIELD) == Some(&Value::Bool(true)))
        .count()
}

/// Trims and case-folds a value for duplicate comparison.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
