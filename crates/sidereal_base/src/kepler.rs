//! Two-body Keplerian propagation for bodies without provider support.
//!
//! Elements are heliocentric, referred to the ecliptic. The geocentric
//! longitude subtracts Earth's heliocentric vector, supplied in equatorial
//! axes and rotated to the ecliptic with the fixed mean obliquity.

use serde::Serialize;
use sidereal_frames::{SphericalCoords, cartesian_to_spherical, equatorial_to_ecliptic};

use crate::util::normalize_360;

/// Newton–Raphson iteration cap.
pub const KEPLER_MAX_ITERATIONS: u32 = 12;

/// Convergence threshold on the per-step correction, radians.
pub const KEPLER_TOLERANCE: f64 = 1e-10;

/// Osculating orbital elements at a reference epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalElements {
    /// Semi-major axis, AU.
    pub a_au: f64,
    /// Eccentricity, [0, 1).
    pub e: f64,
    /// Inclination, degrees.
    pub i_deg: f64,
    /// Longitude of the ascending node Ω, degrees.
    pub node_deg: f64,
    /// Argument of perihelion ω, degrees.
    pub peri_deg: f64,
    /// Mean anomaly at epoch M₀, degrees.
    pub m0_deg: f64,
    /// Mean daily motion n, degrees/day.
    pub n_deg_per_day: f64,
    /// Epoch, Julian Date (TT).
    pub epoch_jd: f64,
}

/// Mean elements of 2060 Chiron, JPL SBDB, epoch JD 2461000.5.
pub const CHIRON_ELEMENTS: OrbitalElements = OrbitalElements {
    a_au: 13.7,
    e: 0.379,
    i_deg: 6.93,
    node_deg: 209.0,
    peri_deg: 339.0,
    m0_deg: 213.0,
    n_deg_per_day: 0.0195,
    epoch_jd: 2_461_000.5,
};

/// Result of solving Kepler's equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeplerSolution {
    /// Eccentric anomaly E, radians.
    pub eccentric_anomaly_rad: f64,
    /// Newton steps taken.
    pub iterations: u32,
    /// Whether the last correction fell below [`KEPLER_TOLERANCE`].
    pub converged: bool,
}

/// Solve `E − e·sin E = M` for E by Newton–Raphson, starting at E = M.
///
/// Stops when a correction is below [`KEPLER_TOLERANCE`] or after
/// [`KEPLER_MAX_ITERATIONS`] steps. Hitting the cap is not an error; the
/// last iterate is returned with `converged = false`.
pub fn solve_kepler(mean_anomaly_rad: f64, e: f64) -> KeplerSolution {
    let mut ecc = mean_anomaly_rad;
    let mut iterations = 0;
    let mut converged = false;
    while iterations < KEPLER_MAX_ITERATIONS {
        let delta = (ecc - e * ecc.sin() - mean_anomaly_rad) / (1.0 - e * ecc.cos());
        ecc -= delta;
        iterations += 1;
        if delta.abs() < KEPLER_TOLERANCE {
            converged = true;
            break;
        }
    }
    KeplerSolution {
        eccentric_anomaly_rad: ecc,
        iterations,
        converged,
    }
}

/// Mean anomaly at `jd`, degrees [0, 360).
pub fn mean_anomaly_deg(el: &OrbitalElements, jd: f64) -> f64 {
    normalize_360(el.m0_deg + el.n_deg_per_day * (jd - el.epoch_jd))
}

/// True anomaly ν from eccentric anomaly, radians.
pub fn true_anomaly_rad(eccentric_anomaly_rad: f64, e: f64) -> f64 {
    let half = eccentric_anomaly_rad / 2.0;
    2.0 * f64::atan2((1.0 + e).sqrt() * half.sin(), (1.0 - e).sqrt() * half.cos())
}

/// Heliocentric ecliptic position `[x, y, z]` in AU at `jd`.
pub fn heliocentric_ecliptic_au(el: &OrbitalElements, jd: f64) -> [f64; 3] {
    let m = mean_anomaly_deg(el, jd).to_radians();
    let sol = solve_kepler(m, el.e);
    if !sol.converged {
        log::warn!(
            "Kepler solve hit the {KEPLER_MAX_ITERATIONS}-step cap (M = {m}, e = {})",
            el.e
        );
    }
    let ecc = sol.eccentric_anomaly_rad;
    let v = true_anomaly_rad(ecc, el.e);
    let r = el.a_au * (1.0 - el.e * ecc.cos());

    let (sin_o, cos_o) = el.node_deg.to_radians().sin_cos();
    let (sin_i, cos_i) = el.i_deg.to_radians().sin_cos();
    let (sin_u, cos_u) = (el.peri_deg.to_radians() + v).sin_cos();

    [
        r * (cos_o * cos_u - sin_o * sin_u * cos_i),
        r * (sin_o * cos_u + cos_o * sin_u * cos_i),
        r * (sin_i * sin_u),
    ]
}

/// Geocentric ecliptic coordinates, distance in AU.
///
/// `earth_helio_equatorial_au` is Earth's heliocentric position in
/// equatorial J2000 axes. Non-finite inputs propagate as NaN.
pub fn geocentric_ecliptic(
    el: &OrbitalElements,
    jd: f64,
    earth_helio_equatorial_au: &[f64; 3],
) -> SphericalCoords {
    let body = heliocentric_ecliptic_au(el, jd);
    let earth = equatorial_to_ecliptic(earth_helio_equatorial_au);
    cartesian_to_spherical(&[body[0] - earth[0], body[1] - earth[1], body[2] - earth[2]])
}

/// Geocentric ecliptic longitude in degrees [0, 360), or NaN when any
/// input is non-finite; the caller decides how to report that.
pub fn geocentric_ecliptic_longitude_deg(
    el: &OrbitalElements,
    jd: f64,
    earth_helio_equatorial_au: &[f64; 3],
) -> f64 {
    normalize_360(geocentric_ecliptic(el, jd, earth_helio_equatorial_au).lon_deg)
}
