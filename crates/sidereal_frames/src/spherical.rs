//! Cartesian → spherical conversion.

use serde::Serialize;

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SphericalCoords {
    /// Longitude in degrees, [0, 360), from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, [-90, 90].
    pub lat_deg: f64,
    /// Distance from origin, in the input's length unit.
    pub distance: f64,
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
///
/// The origin maps to all zeros. Non-finite components propagate as NaN.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }

    let lon = y.atan2(x).to_degrees().rem_euclid(360.0);
    SphericalCoords {
        lon_deg: if lon >= 360.0 { 0.0 } else { lon },
        lat_deg: (z / r).asin().to_degrees(),
        distance: r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_y_wraps_to_upper_half() {
        let s = cartesian_to_spherical(&[0.0, -1.0, 0.0]);
        assert!((s.lon_deg - 270.0).abs() < 1e-12);
    }

    #[test]
    fn pole_latitude() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 2.0]);
        assert!((s.lat_deg - 90.0).abs() < 1e-12);
        assert!((s.distance - 2.0).abs() < 1e-12);
    }

    #[test]
    fn origin_is_zero() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 0.0]);
        assert_eq!(s.distance, 0.0);
    }

    #[test]
    fn nan_propagates() {
        let s = cartesian_to_spherical(&[f64::NAN, 1.0, 0.0]);
        assert!(s.lon_deg.is_nan());
    }
}
