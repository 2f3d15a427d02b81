use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::DATE_FORMAT;

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let pattern = r"^\d{4}-\d{2}-\d{2}$";
    Regex::new(pattern).expect("date pattern compiles")
});

/// Date range the user asked about. Both dates stay exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub start_date: String,
    pub end_date: String,
}

impl AvailabilityQuery {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        AvailabilityQuery {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// True when both dates are real calendar days written as yyyy-mm-dd.
    pub fn is_well_formed(&self) -> bool {
        parse_date(&self.start_date).is_some() && parse_date(&self.end_date).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub ok: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "room_id_from_any")]
    pub room_id: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

/// Strict yyyy-mm-dd parsing; chrono alone would accept unpadded fields.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !DATE_PATTERN.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

// room_id shows up as a number or as a string depending on the server
fn room_id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(String::new()),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(other) => Err(D::Error::custom(format!("unexpected room_id {other}"))),
    }
}
