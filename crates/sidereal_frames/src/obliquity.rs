//! Mean obliquity of the ecliptic, held fixed at its J2000.0 value.

/// Mean obliquity ε in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_11;

/// Mean obliquity ε in radians.
pub const OBLIQUITY_J2000_RAD: f64 = OBLIQUITY_J2000_DEG * std::f64::consts::PI / 180.0;

/// sin ε. Pinned so that const contexts can use it; checked against
/// `OBLIQUITY_J2000_RAD.sin()` in tests.
pub const SIN_OBL: f64 = 0.397_777_155_914_121_4;

/// cos ε.
pub const COS_OBL: f64 = 0.917_482_062_076_895_8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_trig_matches() {
        assert!((SIN_OBL - OBLIQUITY_J2000_RAD.sin()).abs() < 1e-15);
        assert!((COS_OBL - OBLIQUITY_J2000_RAD.cos()).abs() < 1e-15);
    }

    #[test]
    fn unit_circle() {
        assert!((SIN_OBL * SIN_OBL + COS_OBL * COS_OBL - 1.0).abs() < 1e-15);
    }
}
