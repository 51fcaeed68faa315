//! ΔT = TT − UT, in seconds.
//!
//! Espenak & Meeus (2006) piecewise polynomials, "Five Millennium Canon of
//! Solar Eclipses", NASA/TP-2006-214141. Outside -500..2150 the long-term
//! parabola `-20 + 32 u²` (u = centuries since 1820) is used.

use crate::julian::{J2000_JD, SECONDS_PER_DAY};

/// Mean tropical year in days, used to turn a Julian Date into a decimal year.
const DAYS_PER_TROPICAL_YEAR: f64 = 365.242_217;

/// Decimal year for a UT Julian Date.
pub fn decimal_year(jd_ut: f64) -> f64 {
    2000.0 + (jd_ut - J2000_JD - 14.0) / DAYS_PER_TROPICAL_YEAR
}

fn long_term_parabola(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT in seconds at a decimal year.
pub fn delta_t_seconds_at_year(y: f64) -> f64 {
    if y < -500.0 {
        return long_term_parabola(y);
    }
    if y < 500.0 {
        let u = y / 100.0;
        return 10583.6 - 1014.41 * u + 33.78311 * u.powi(2) - 5.952053 * u.powi(3)
            - 0.1798452 * u.powi(4)
            + 0.022174192 * u.powi(5)
            + 0.0090316521 * u.powi(6);
    }
    if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        return 1574.2 - 556.01 * u + 71.23472 * u.powi(2) + 0.319781 * u.powi(3)
            - 0.8503463 * u.powi(4)
            - 0.005050998 * u.powi(5)
            + 0.0083572073 * u.powi(6);
    }
    if y < 1700.0 {
        let t = y - 1600.0;
        return 120.0 - 0.9808 * t - 0.01532 * t.powi(2) + t.powi(3) / 7129.0;
    }
    if y < 1800.0 {
        let t = y - 1700.0;
        return 8.83 + 0.1603 * t - 0.0059285 * t.powi(2) + 0.00013336 * t.powi(3)
            - t.powi(4) / 1_174_000.0;
    }
    if y < 1860.0 {
        let t = y - 1800.0;
        return 13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7);
    }
    if y < 1900.0 {
        let t = y - 1860.0;
        return 7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0;
    }
    if y < 1920.0 {
        let t = y - 1900.0;
        return -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4);
    }
    if y < 1941.0 {
        let t = y - 1920.0;
        return 21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3);
    }
    if y < 1961.0 {
        let t = y - 1950.0;
        return 29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0;
    }
    if y < 1986.0 {
        let t = y - 1975.0;
        return 45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0;
    }
    if y < 2005.0 {
        let t = y - 2000.0;
        return 63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5);
    }
    if y < 2050.0 {
        let t = y - 2000.0;
        return 62.92 + 0.32217 * t + 0.005589 * t.powi(2);
    }
    if y < 2150.0 {
        return long_term_parabola(y) - 0.5628 * (2150.0 - y);
    }
    long_term_parabola(y)
}

/// ΔT in seconds at a UT Julian Date.
pub fn delta_t_seconds(jd_ut: f64) -> f64 {
    delta_t_seconds_at_year(decimal_year(jd_ut))
}

/// Convert a UT Julian Date to TT.
pub fn jd_ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(jd_ut) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_t_2000() {
        let dt = delta_t_seconds_at_year(2000.0);
        assert!((dt - 63.86).abs() < 0.01, "ΔT(2000) = {dt}");
    }

    #[test]
    fn delta_t_1900() {
        let dt = delta_t_seconds_at_year(1900.0);
        assert!((dt - (-2.79)).abs() < 0.01, "ΔT(1900) = {dt}");
    }

    #[test]
    fn delta_t_2024_near_74s() {
        let dt = delta_t_seconds(2_460_389.854_166_666_5);
        assert!((dt - 73.98).abs() < 0.05, "ΔT(2024.2) = {dt}");
    }

    #[test]
    fn continuity_at_2005_boundary() {
        let below = delta_t_seconds_at_year(2005.0 - 1e-9);
        let above = delta_t_seconds_at_year(2005.0);
        assert!((below - above).abs() < 0.5, "jump {below} → {above}");
    }

    #[test]
    fn long_term_is_large_in_antiquity() {
        assert!(delta_t_seconds_at_year(-1000.0) > 20_000.0);
    }

    #[test]
    fn tt_is_ahead_of_ut_today() {
        let jd = 2_460_000.5;
        assert!(jd_ut_to_tt(jd) > jd);
    }
}
