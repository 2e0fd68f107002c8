//! Lenient date parsing for request DTOs.
//!
//! Accepts either a calendar date (`1972-03-24`, read as midnight UTC) or a
//! full RFC 3339 timestamp.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer};

use crate::messages;
use crate::types::Timestamp;

pub fn parse_date(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `deserialize_with` target for `Option<Timestamp>` fields.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|value| parse_date(&value).ok_or_else(|| de::Error::custom(messages::PROVIDE_VALID_DATE)))
        .transpose()
}
