//! Rotation from equatorial to ecliptic Cartesian frames.
//!
//! A rotation about +x by the mean obliquity.

use crate::obliquity::{COS_OBL, SIN_OBL};

/// Equatorial `[x, y, z]` → ecliptic `[x, y, z]`.
///
/// ```text
/// x' = x
/// y' =  y·cos ε + z·sin ε
/// z' = −y·sin ε + z·cos ε
/// ```
#[inline]
pub fn equatorial_to_ecliptic(v: &[f64; 3]) -> [f64; 3] {
    [
        v[0],
        v[1] * COS_OBL + v[2] * SIN_OBL,
        -v[1] * SIN_OBL + v[2] * COS_OBL,
    ]
}
