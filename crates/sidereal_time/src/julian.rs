//! Gregorian calendar → Julian Date.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Julian Date for a Gregorian calendar date.
///
/// `day` carries the time of day as its fractional part, so
/// `calendar_to_jd(2000, 1, 1.5)` is J2000.0.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_from_calendar() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn meeus_example_7a() {
        // Sputnik launch, 1957 Oct 4.81 → JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn january_uses_previous_year_branch() {
        // 1988 Jan 27.0 → JD 2447187.5 (Meeus 7.b table)
        assert_eq!(calendar_to_jd(1988, 1, 27.0), 2_447_187.5);
    }
}
