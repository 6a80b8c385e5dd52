use super::error::AppError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// One history sample as returned by the API.
///
/// Only `datetime` is interpreted up front; every other field is kept as
/// raw JSON so a metric can check whether its field is present at all.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryRecord {
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub datetime: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl HistoryRecord {
    pub fn new(datetime: DateTime<Utc>, fields: Map<String, Value>) -> Self {
        Self { datetime, fields }
    }

    /// Record holding a single numeric field
    pub fn with_value(datetime: DateTime<Utc>, field: &str, value: f64) -> Self {
        let mut fields = Map::new();
        fields.insert(field.to_string(), Value::from(value));
        Self { datetime, fields }
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Numeric value of `field`, `None` when absent, null or not a number
    pub fn value(&self, field: &str) -> Option<f64> {
        self.fields.get(field).and_then(Value::as_f64)
    }
}

/// History payload for one metric and zone. Records are not guaranteed to be sorted.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_history")]
    pub history: Vec<HistoryRecord>,
}

impl HistoryResponse {
    pub fn new(history: Vec<HistoryRecord>) -> Self {
        Self {
            zone: None,
            history,
        }
    }

    /// Interprets a decoded response body.
    ///
    /// `null` and `{}` are treated as an absent response rather than an
    /// empty history, so they surface as a fetch failure.
    pub fn from_json(value: Value) -> Result<Option<Self>, AppError> {
        match &value {
            Value::Null => return Ok(None),
            Value::Object(map) if map.is_empty() => return Ok(None),
            _ => {}
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| AppError::DataError(format!("Failed to parse history: {e}")))
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// True when at least one record carries `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.history.iter().any(|r| r.has_field(field))
    }
}

/// `"history": null` reads as an empty history
fn deserialize_nullable_history<'de, D>(deserializer: D) -> Result<Vec<HistoryRecord>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<HistoryRecord>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Accepts RFC 3339 timestamps as well as UTC timestamps without seconds or offset
fn deserialize_flexible_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = serde::Deserialize::deserialize(deserializer)?;

    parse_datetime(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("Failed to parse datetime '{s}'")))
}

pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // No offset at all, or a bare 'Z' the RFC 3339 parser rejected
    let naive = s.strip_suffix('Z').unwrap_or(s);
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .map(|naive| naive.and_utc())
}
