use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

/// Epoch values past this point are treated as milliseconds
const MILLIS_CUTOFF: i64 = 100_000_000_000;

fn from_epoch(value: i64) -> Option<DateTime<Utc>> {
    if value >= MILLIS_CUTOFF {
        Utc.timestamp_millis_opt(value).single()
    } else {
        Utc.timestamp_opt(value, 0).single()
    }
}

/// Normalise the various timestamp shapes found in stored documents to a
/// single datetime type
///
/// Accepts an RFC 3339 string, an epoch number (seconds or milliseconds),
/// a `{seconds}`-shaped object or an extended JSON `{$date}` document.
/// Anything else yields `None` rather than an error.
pub fn normalize_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|datetime| datetime.with_timezone(&Utc)),
        Value::Number(number) => number.as_i64().and_then(from_epoch),
        Value::Object(map) => {
            if let Some(seconds) = map.get("seconds").and_then(Value::as_i64) {
                Utc.timestamp_opt(seconds, 0).single()
            } else if let Some(date) = map.get("$date") {
                normalize_extended_json_date(date)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Native BSON datetimes surface as `{"$date": ...}` once a document has
/// been lifted into JSON
fn normalize_extended_json_date(date: &Value) -> Option<DateTime<Utc>> {
    match date {
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|datetime| datetime.with_timezone(&Utc)),
        Value::Number(number) => number.as_i64().and_then(from_epoch),
        Value::Object(map) => map
            .get("$numberLong")
            .and_then(Value::as_str)
            .and_then(|millis| millis.parse::<i64>().ok())
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}

/// Deserialize a `created_at`-style field leniently, see
/// [`normalize_timestamp`]
pub fn lenient_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let value = Value::deserialize(deserializer)?;
    normalize_timestamp(&value)
        .ok_or_else(|| serde::de::Error::custom("unrecognised timestamp shape"))
}

/// Normalise a BSON value to a datetime, see [`normalize_timestamp`]
#[cfg(feature = "mongodb")]
pub fn normalize_bson_timestamp(value: &bson::Bson) -> Option<DateTime<Utc>> {
    use bson::Bson;

    match value {
        Bson::DateTime(datetime) => Some(datetime.to_chrono()),
        Bson::String(text) => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|datetime| datetime.with_timezone(&Utc)),
        Bson::Int32(number) => from_epoch(*number as i64),
        Bson::Int64(number) => from_epoch(*number),
        Bson::Double(number) => from_epoch(*number as i64),
        Bson::Document(document) => document
            .get("seconds")
            .and_then(|seconds| seconds.as_i64())
            .and_then(|seconds| Utc.timestamp_opt(seconds, 0).single()),
        _ => None,
    }
}
