//! Ordering and classification helpers over `serde_yaml::Value`
//!
//! Merged list values are emitted as sorted deduplicated unions, which needs
//! a total order over YAML scalars. The order used everywhere in this crate:
//! type rank (null < bool < number < string < everything else), then natural
//! order within a rank.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_yaml::Value;

/// Parse a string as an ISO-8601 timestamp.
///
/// A literal trailing `Z` is treated as a UTC offset. Bare dates and
/// offset-less datetimes are read as UTC midnight / UTC wall time, which
/// keeps comparisons between the common frontmatter date shapes meaningful.
pub fn parse_datestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&dt));
        }
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

/// Check whether a value is a string that looks like a datetime.
pub fn is_datestamp(value: &Value) -> bool {
    match value {
        Value::String(s) => parse_datestamp(s).is_some(),
        _ => false,
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        _ => 4,
    }
}

/// Total order over YAML values.
///
/// Within a rank: booleans false < true, numbers by numeric value, strings
/// lexicographically. Compound values (rank 4) compare by their serialized
/// form so the order stays total and deterministic.
pub fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => {
            let rank = type_rank(a).cmp(&type_rank(b));
            if rank != Ordering::Equal {
                return rank;
            }
            let x = serde_yaml::to_string(a).unwrap_or_default();
            let y = serde_yaml::to_string(b).unwrap_or_default();
            x.cmp(&y)
        }
    }
}

/// Plain text of a mapping key, for diagnostics and raw-line matching.
///
/// String keys are used verbatim; other scalars use their natural textual
/// form. Compound keys fall back to their serialized form.
pub fn key_text(key: &Value) -> String {
    match key {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .unwrap_or_default()
            .trim_end()
            .to_string(),
    }
}
