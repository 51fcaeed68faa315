//! Greenwich Mean Sidereal Time and Earth Rotation Angle.
//!
//! All functions take UT Julian Dates. UT1 − UTC is below a second and is
//! not modelled, so the UT value of an [`crate::Instant`] is used directly.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Arcseconds to radians: 1″ = π / (180 × 3600).
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle, radians in [0, 2π).
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × Du), Du = JD_UT − 2451545.0.
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time, radians in [0, 2π).
///
/// GMST = ERA + polynomial(T) with the polynomial in arcseconds:
///   0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
///   − 0.000029956·T⁴ − 0.0000000368·T⁵
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut);
    let t = (jd_ut - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in hours, [0, 24).
pub fn gmst_hours(jd_ut: f64) -> f64 {
    wrap_hours(gmst_rad(jd_ut).to_degrees() / 15.0)
}

/// Local sidereal time in hours: `(gst + longitude/15) mod 24`.
///
/// `longitude_east_deg` is positive east of Greenwich.
pub fn local_sidereal_time_hours(gst_hours: f64, longitude_east_deg: f64) -> f64 {
    wrap_hours(gst_hours + longitude_east_deg / 15.0)
}

/// Reduce to [0, 24). `rem_euclid` rounds tiny negatives up to 24.0.
fn wrap_hours(hours: f64) -> f64 {
    let h = hours.rem_euclid(24.0);
    if h >= 24.0 { 0.0 } else { h }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000_noon() {
        let theta_deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!(
            (theta_deg - 280.46).abs() < 0.1,
            "ERA at J2000 = {theta_deg}°, expected ~280.46°"
        );
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST ≈ 6h 39m 51s
        let h = gmst_hours(2_451_544.5);
        assert!((h - 6.6642).abs() < 0.001, "GMST = {h} h");
    }

    #[test]
    fn gmst_hours_matches_radians() {
        let jd = 2_460_389.854_166_666_5;
        let from_rad = gmst_rad(jd) * 12.0 / PI;
        assert!((gmst_hours(jd) - from_rad).abs() < 1e-12);
    }

    #[test]
    fn gmst_2024_equinox_noon_tehran() {
        // 2024-03-20 08:30 UT
        let h = gmst_hours(2_460_389.854_166_666_5);
        assert!((h - 20.3912).abs() < 0.001, "GMST = {h} h");
    }

    #[test]
    fn lst_wraps_past_midnight() {
        let lst = local_sidereal_time_hours(23.0, 30.0);
        assert!((lst - 1.0).abs() < 1e-12);
    }

    #[test]
    fn lst_west_longitude_wraps_negative() {
        let lst = local_sidereal_time_hours(1.0, -30.0);
        assert!((lst - 23.0).abs() < 1e-12);
    }

    #[test]
    fn lst_tiny_negative_wraps_to_zero() {
        assert_eq!(local_sidereal_time_hours(-1e-17, 0.0), 0.0);
        let lst = local_sidereal_time_hours(0.0, -1e-15);
        assert!((0.0..24.0).contains(&lst), "{lst}");
    }

    #[test]
    fn gmst_range() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5] {
            let g = gmst_hours(jd);
            assert!((0.0..24.0).contains(&g), "GMST out of range: {g}");
        }
    }
}
