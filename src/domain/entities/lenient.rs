//! Tolerant field deserializers for upstream payloads.
//!
//! Upstream responses are loosely shaped: numbers arrive as `null`, objects
//! go missing, and error envelopes replace whole records. Each helper here
//! maps anything unexpected to `None` so one odd field never fails a payload.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Date layouts seen in upstream records, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Keeps finite JSON numbers, drops everything else.
pub(crate) fn finite_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|v| v.is_finite()))
}

/// Deserializes a nested object, or `None` when the value is not an object
/// of the expected shape.
pub(crate) fn object_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Reads a provider error message. Non-string values keep their JSON text.
pub(crate) fn message_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Parses a date in any of [`DATE_FORMATS`].
pub(crate) fn date_or_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(parse_date))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "finite_or_none")]
        number: Option<f64>,
        #[serde(default, deserialize_with = "date_or_none")]
        date: Option<NaiveDate>,
        #[serde(default, deserialize_with = "message_or_none")]
        error: Option<String>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn numbers() {
        assert_eq!(probe(r#"{"number": 45000}"#).number, Some(45000.0));
        assert_eq!(probe(r#"{"number": 1200.5}"#).number, Some(1200.5));
        assert_eq!(probe(r#"{"number": null}"#).number, None);
        assert_eq!(probe(r#"{"number": "1200"}"#).number, None);
        assert_eq!(probe(r#"{}"#).number, None);
    }

    #[test]
    fn dates_in_both_layouts() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 10);
        assert_eq!(probe(r#"{"date": "2025-01-10"}"#).date, expected);
        assert_eq!(probe(r#"{"date": "01/10/2025"}"#).date, expected);
        assert_eq!(probe(r#"{"date": "10 Jan"}"#).date, None);
        assert_eq!(probe(r#"{"date": 20250110}"#).date, None);
    }

    #[test]
    fn messages() {
        assert_eq!(
            probe(r#"{"error": "captcha"}"#).error.as_deref(),
            Some("captcha")
        );
        assert_eq!(
            probe(r#"{"error": {"code": 7}}"#).error.as_deref(),
            Some(r#"{"code":7}"#)
        );
        assert_eq!(probe(r#"{"error": "  "}"#).error, None);
        assert_eq!(probe(r#"{"error": null}"#).error, None);
    }
}
