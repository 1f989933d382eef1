//! JSON wire formats for dates.
//!
//! Report rows carry their date the way the existing web consumer reads it,
//! as a midnight date-time (`2024-03-04T00:00:00`). Incoming dates may be a
//! plain date, a naive date-time or an RFC 3339 timestamp; only the date part
//! is kept.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

/// Format of a date written as a midnight date-time.
const MIDNIGHT_FORMAT: &str = "%Y-%m-%dT00:00:00";

/// Parses the date part of an ISO 8601 date or date-time.
pub(crate) fn parse_date_part(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Deserializes any accepted date shape into its date part.
pub(crate) fn deserialize_date_part<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date_part(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid date '{}': expected an ISO 8601 date", raw))
    })
}

/// `NaiveDate` written as `YYYY-MM-DDT00:00:00`, read from any accepted
/// date shape.
pub(crate) mod midnight_date_time {
    use super::*;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(MIDNIGHT_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_date_part(deserializer)
    }
}
