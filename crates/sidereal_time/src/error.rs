//! Error types for civil-time normalization.

use thiserror::Error;

/// Errors from parsing or resolving a civil date/time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The string is not a recognised date/time form, or names an
    /// impossible calendar value (month 13, Feb 30, 25:00, ...).
    #[error("invalid date/time: {0}")]
    InvalidCivilTime(String),
    /// The wall-clock time does not exist in the zone (DST gap).
    #[error("local time does not exist in this time zone: {0}")]
    NonexistentLocalTime(String),
}
