//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// Wraps rather than clamps. Tiny negative inputs whose wrapped value
/// rounds up to 360.0 map to 0.0, so the result is always strictly below
/// 360. Non-finite input yields NaN.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}
