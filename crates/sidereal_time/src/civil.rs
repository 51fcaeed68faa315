//! Civil date/time parsing and time-zone resolution.
//!
//! A civil string without an offset is a wall-clock reading in some zone.
//! It is resolved against a caller-supplied [`TimeZone`]; a string that
//! carries its own RFC 3339 offset keeps that offset.

use chrono::{
    DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
};

use crate::error::TimeError;

/// Naive forms accepted by [`parse_naive`], tried in order.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Offset-bearing forms beyond strict RFC 3339 (which requires seconds).
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// Parse a civil date/time with no offset.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` and `YYYY-MM-DDTHH:MM:SS[.fff]`;
/// a space may replace the `T`. A bare date means local midnight.
pub fn parse_naive(s: &str) -> Result<NaiveDateTime, TimeError> {
    let s = s.trim();
    for fmt in DATE_TIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ndt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| TimeError::InvalidCivilTime(s.to_string()))
}

/// Parse a string that carries an explicit UTC offset, if it has one.
fn parse_with_offset(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
}

/// Resolve a naive wall-clock value in `tz`.
///
/// Ambiguous readings (DST fall-back) take the earlier instant; readings in
/// a DST gap fail with [`TimeError::NonexistentLocalTime`].
pub fn resolve_local<Tz: TimeZone>(
    naive: &NaiveDateTime,
    tz: &Tz,
) -> Result<DateTime<FixedOffset>, TimeError> {
    let resolved = match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => return Err(TimeError::NonexistentLocalTime(naive.to_string())),
    };
    let offset = resolved.offset().fix();
    Ok(resolved.with_timezone(&offset))
}

/// Parse a civil date/time and resolve it in `tz`.
///
/// An explicit offset in the string wins over `tz`.
pub fn parse_civil<Tz: TimeZone>(s: &str, tz: &Tz) -> Result<DateTime<FixedOffset>, TimeError> {
    let trimmed = s.trim();
    if let Some(dt) = parse_with_offset(trimmed) {
        return Ok(dt);
    }
    let naive = parse_naive(trimmed)?;
    resolve_local(&naive, tz)
}

/// Parse a `±HH:MM` UTC offset (also `Z` and `±HHMM`).
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset, TimeError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return Ok(Offset::fix(&chrono::Utc));
    }
    let invalid = || TimeError::InvalidCivilTime(format!("bad UTC offset: {s}"));
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let hours: i32 = digits[..2].parse().map_err(|_| invalid())?;
    let minutes: i32 = digits[2..].parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}
