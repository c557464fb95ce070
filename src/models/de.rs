//! Lenient deserializers for loosely typed source records.
//!
//! Source dumps are assembled from several APIs, so the same field may show up
//! as a number in one record and a string in the next. These helpers turn
//! anything unusable into `None` instead of failing the whole file.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::paper::{ExternalIds, RawAuthor};

/// Render a scalar JSON value as text. Arrays, objects and `null` have no text form.
pub(crate) fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Read an integer from a number (floats are truncated) or a numeric string.
pub(crate) fn value_to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}

pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_text))
}

pub(crate) fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_to_int)
        .and_then(|n| i32::try_from(n).ok()))
}

pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_to_int)
        .and_then(|n| u64::try_from(n).ok()))
}

/// Decode a nested value of the expected JSON shape, `None` for anything else
fn nested<T: DeserializeOwned>(value: Option<Value>, shape_ok: fn(&Value) -> bool) -> Option<T> {
    value
        .filter(shape_ok)
        .and_then(|value| serde_json::from_value(value).ok())
}

pub(crate) fn lenient_authors<'de, D>(deserializer: D) -> Result<Option<Vec<RawAuthor>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(nested(value, Value::is_array))
}

pub(crate) fn lenient_external_ids<'de, D>(deserializer: D) -> Result<Option<ExternalIds>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(nested(value, Value::is_object))
}
