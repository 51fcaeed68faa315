//! Lagna (ascendant) longitude.
//!
//! With L the local sidereal time as an angle, φ the latitude and ε the
//! mean obliquity:
//!
//! ```text
//! λ = atan2(sin L, cos L·cos ε − tan φ·sin ε)
//! ```
//!
//! GST is the mean sidereal time at UT, and `lst = (gst + lon/15) mod 24`.

use sidereal_frames::{COS_OBL, SIN_OBL};
use sidereal_time::{Instant, gmst_hours, local_sidereal_time_hours};

use crate::error::VedicError;
use crate::location::GeoLocation;
use crate::util::normalize_360;

/// Below this, both atan2 arguments are treated as zero.
const DEGENERATE_EPS: f64 = 1e-12;

/// Local sidereal time in hours, [0, 24).
pub fn local_sidereal_time(instant: &Instant, location: &GeoLocation) -> f64 {
    local_sidereal_time_hours(gmst_hours(instant.jd_ut), location.longitude_deg)
}

/// Tropical ascendant from local sidereal time (hours) and latitude (degrees).
///
/// Fails with `AscendantUndefined` when `|cos φ| < 1e-12`. This is stricter
/// than checking the result for non-finite values: at exactly ±90° `tan φ`
/// is huge but finite in f64, yet those latitudes are rejected too.
pub fn ascendant_from_lst(lst_hours: f64, latitude_deg: f64) -> Result<f64, VedicError> {
    let undefined = || VedicError::AscendantUndefined {
        lst_deg: lst_hours * 15.0,
        latitude_deg,
    };
    let lst = (lst_hours * 15.0).to_radians();
    let phi = latitude_deg.to_radians();
    if phi.cos().abs() < DEGENERATE_EPS {
        return Err(undefined());
    }

    let numerator = lst.sin();
    let denominator = lst.cos() * COS_OBL - phi.tan() * SIN_OBL;
    if numerator.abs() < DEGENERATE_EPS && denominator.abs() < DEGENERATE_EPS {
        return Err(undefined());
    }

    let asc = normalize_360(numerator.atan2(denominator).to_degrees());
    if !asc.is_finite() {
        return Err(undefined());
    }
    Ok(asc)
}

/// Tropical ascendant longitude at an instant and location, degrees [0, 360).
pub fn ascendant_tropical_deg(
    instant: &Instant,
    location: &GeoLocation,
) -> Result<f64, VedicError> {
    let lst = local_sidereal_time(instant, location);
    ascendant_from_lst(lst, location.latitude_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_lst_zero() {
        // sin L = 0, denominator = cos ε > 0
        let asc = ascendant_from_lst(0.0, 0.0).unwrap();
        assert!(asc.abs() < 1e-12, "{asc}");
    }

    #[test]
    fn equator_lst_six_hours() {
        let asc = ascendant_from_lst(6.0, 0.0).unwrap();
        assert!((asc - 90.0).abs() < 1e-9, "{asc}");
    }

    #[test]
    fn tehran_equinox_noon() {
        let asc = ascendant_from_lst(23.817_138, 35.6892).unwrap();
        assert!((asc - 355.66).abs() < 0.02, "{asc}");
    }

    #[test]
    fn polar_latitude_undefined() {
        // tan(±90°) stays finite in f64; the cos φ check still rejects it.
        assert!(90.0_f64.to_radians().tan().is_finite());
        for lat in [90.0, -90.0] {
            assert!(matches!(
                ascendant_from_lst(3.0, lat),
                Err(VedicError::AscendantUndefined { .. })
            ));
        }
    }

    #[test]
    fn arctic_circle_critical_point_undefined() {
        // tan φ = cot ε at L = 0 zeroes both atan2 arguments.
        let phi = (COS_OBL / SIN_OBL).atan().to_degrees();
        let r = ascendant_from_lst(0.0, phi);
        assert!(matches!(r, Err(VedicError::AscendantUndefined { .. })), "{r:?}");
    }

    #[test]
    fn non_finite_lst_undefined() {
        assert!(ascendant_from_lst(f64::NAN, 10.0).is_err());
    }
}
