//! Time utilities: timestamp parsing and HH:MM handling.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Formats accepted for timestamps without an explicit offset.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 timestamp.
///
/// RFC 3339 strings keep their offset. Naive timestamps are read as local
/// time; an ambiguous or non-existent local time (DST switch) is rejected.
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .and_then(|naive| naive.and_local_timezone(Local).single())
        .map(|dt| dt.fixed_offset())
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// `date` + `HH:MM`, or a full timestamp as-is.
///
/// `HH:MM` is placed in `offset` when given (e.g. the offset an entry was
/// recorded with), otherwise in local time.
pub fn resolve_instant(
    date: NaiveDate,
    value: &str,
    offset: Option<FixedOffset>,
) -> AppResult<DateTime<FixedOffset>> {
    if let Some(t) = parse_time(value) {
        let naive = date.and_time(t);
        let resolved = match offset {
            Some(off) => naive.and_local_timezone(off).single(),
            None => naive
                .and_local_timezone(Local)
                .single()
                .map(|dt| dt.fixed_offset()),
        };
        return resolved.ok_or_else(|| AppError::InvalidTimestamp(format!("{} {}", date, value)));
    }

    parse_timestamp(value).ok_or_else(|| AppError::InvalidTimestamp(value.to_string()))
}

pub fn parse_optional_instant(
    date: NaiveDate,
    input: Option<&String>,
    offset: Option<FixedOffset>,
) -> AppResult<Option<DateTime<FixedOffset>>> {
    match input {
        Some(s) => Ok(Some(resolve_instant(date, s, offset)?)),
        None => Ok(None),
    }
}
