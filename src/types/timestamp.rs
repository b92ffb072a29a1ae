use crate::types::errors::FormatError;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";
const ISO_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// A timestamp as it arrives from a caller, either already an instant or ISO-8601 text.
#[derive(Debug, Clone, PartialEq)]
pub enum RawTimestamp {
    Instant(DateTime<Utc>),
    Text(String)
}

impl From<DateTime<Utc>> for RawTimestamp {
    fn from(value: DateTime<Utc>) -> Self {
        RawTimestamp::Instant(value)
    }
}

impl From<DateTime<FixedOffset>> for RawTimestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        RawTimestamp::Instant(value.with_timezone(&Utc))
    }
}

impl From<&str> for RawTimestamp {
    fn from(value: &str) -> Self {
        RawTimestamp::Text(value.to_string())
    }
}

impl From<String> for RawTimestamp {
    fn from(value: String) -> Self {
        RawTimestamp::Text(value)
    }
}

impl RawTimestamp {
    pub fn to_utc(&self) -> Result<DateTime<Utc>, FormatError> {
        match self {
            RawTimestamp::Instant(instant) => within_iso_years(*instant),
            RawTimestamp::Text(text) => parse_iso_to_utc(text)
        }
    }
}

/// Parses ISO-8601 text into a UTC instant.
///
/// Text carrying an offset is converted to UTC. Text without one (a naive
/// date-time or a bare date) is taken to already be in UTC.
pub fn parse_iso_to_utc(text: &str) -> Result<DateTime<Utc>, FormatError> {
    parse_any_format(text.trim())
        .ok_or_else(|| FormatError::invalid_timestamp(text))
        .and_then(within_iso_years)
}

fn parse_any_format(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Only four-digit years survive `to_iso_utc` followed by `parse_iso_to_utc`, so nothing else is accepted.
fn within_iso_years(instant: DateTime<Utc>) -> Result<DateTime<Utc>, FormatError> {
    if !ISO_YEARS.contains(&instant.year()) {
        return Err(FormatError::invalid_timestamp(to_iso_utc(&instant)));
    }

    Ok(instant)
}

/// Formats an instant as `2024-01-01T00:00:00Z`, adding fractional seconds only when present.
pub fn to_iso_utc(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
