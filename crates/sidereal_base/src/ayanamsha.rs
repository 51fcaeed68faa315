//! Lahiri ayanamsa, linear model.
//!
//! `ayanamsa = 23.856111° + 0.013968886°/yr × years`, with years counted
//! on the TT scale from J2000.0 in mean Gregorian years (365.2425 d).
//! A linear fit, not a precession-theory evaluation.

use sidereal_time::Instant;

use crate::util::normalize_360;

/// Ayanamsa at J2000.0, degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.856_111;

/// Ayanamsa growth rate, degrees per year.
pub const LAHIRI_RATE_DEG_PER_YEAR: f64 = 0.013_968_886;

/// Ayanamsa for a count of TT years since J2000.0, normalized to [0, 360).
pub fn ayanamsa_at_years(years_tt: f64) -> f64 {
    normalize_360(LAHIRI_J2000_DEG + LAHIRI_RATE_DEG_PER_YEAR * years_tt)
}

/// Ayanamsa at an instant, degrees in [0, 360).
pub fn ayanamsa_deg(instant: &Instant) -> f64 {
    ayanamsa_at_years(instant.years_tt())
}

/// Sidereal longitude from a tropical one.
pub fn tropical_to_sidereal(tropical_deg: f64, ayanamsa_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsa_deg)
}
