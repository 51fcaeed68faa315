//! Time normalization for sidereal chart computation.
//!
//! Civil date/time strings are resolved in a time zone, then reduced to an
//! [`Instant`]: a pair of Julian Dates on the UT and TT scales. Every
//! downstream formula consumes an `Instant`, never the civil string.

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{parse_civil, parse_naive, parse_utc_offset, resolve_local};
pub use delta_t::{delta_t_seconds, jd_ut_to_tt};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd,
};
pub use sidereal::{gmst_hours, gmst_rad, local_sidereal_time_hours};

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00 UTC.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Days in a mean Gregorian year.
pub const DAYS_PER_GREGORIAN_YEAR: f64 = 365.2425;

/// A point in time on the UT and TT scales.
///
/// Built once per chart from a civil date/time and shared by every
/// computation of that chart.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Instant {
    /// Julian Date, Universal Time.
    pub jd_ut: f64,
    /// Julian Date, Terrestrial Time.
    pub jd_tt: f64,
}

impl Instant {
    /// Instant from a UT Julian Date; TT follows from ΔT.
    pub fn from_jd_ut(jd_ut: f64) -> Self {
        Self {
            jd_ut,
            jd_tt: jd_ut_to_tt(jd_ut),
        }
    }

    /// Instant from a zone-aware date/time.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self::from_utc(&dt.with_timezone(&Utc))
    }

    /// Instant from a UTC date/time.
    pub fn from_utc(dt: &DateTime<Utc>) -> Self {
        let seconds = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) * 1e-9;
        Self::from_jd_ut(UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY)
    }

    /// TT Julian centuries since J2000.0.
    pub fn centuries_tt(&self) -> f64 {
        (self.jd_tt - J2000_JD) / DAYS_PER_JULIAN_CENTURY
    }

    /// TT Gregorian years since J2000.0.
    pub fn years_tt(&self) -> f64 {
        (self.jd_tt - J2000_JD) / DAYS_PER_GREGORIAN_YEAR
    }

    /// TT − UT in seconds.
    pub fn delta_t_seconds(&self) -> f64 {
        (self.jd_tt - self.jd_ut) * SECONDS_PER_DAY
    }
}
