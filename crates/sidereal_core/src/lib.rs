//! Position-provider contract for the chart engine.
//!
//! The engine does not integrate planetary orbits itself. Geocentric
//! ecliptic longitudes of the ten standard bodies, and Earth's heliocentric
//! vector, come from an [`EclipticProvider`]. [`PositionTable`] is the
//! provider shipped here: positions computed by any external ephemeris,
//! loaded from TOML or JSON.

pub mod table;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sidereal_time::Instant;
use thiserror::Error;

pub use table::PositionTable;

/// Bodies whose positions come from the provider.
///
/// Computed points (lunar nodes, Chiron) are not here; they are derived in
/// `sidereal_base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All provider bodies in chart order.
pub const ALL_PROVIDER_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// Lower-case identifier, as used in position tables.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
        }
    }

    /// 0-based index into [`ALL_PROVIDER_BODIES`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Body {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PROVIDER_BODIES
            .iter()
            .copied()
            .find(|b| b.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::InvalidTable(format!("unknown body: {s}")))
    }
}

/// Provider errors.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// The provider has no longitude for this body.
    #[error("no position available for {0}")]
    MissingBody(Body),
    /// The provider cannot supply Earth's heliocentric vector.
    #[error("no heliocentric Earth vector available")]
    MissingEarthVector,
    /// The query instant is outside what the provider covers.
    #[error("epoch out of range: JD(TT) {epoch_jd_tt}")]
    EpochOutOfRange { epoch_jd_tt: f64 },
    /// A position table could not be read or is malformed.
    #[error("invalid position table: {0}")]
    InvalidTable(String),
}

/// Source of geocentric ecliptic positions.
///
/// Implementations must be pure: the same instant yields the same values.
/// Any number of charts may share one provider across threads.
pub trait EclipticProvider: Send + Sync {
    /// Geocentric apparent ecliptic longitude of date, degrees.
    fn longitude_deg(&self, body: Body, instant: &Instant) -> Result<f64, EngineError>;

    /// Heliocentric position of Earth, equatorial J2000 axes, AU.
    fn earth_heliocentric_equatorial_au(&self, instant: &Instant)
    -> Result<[f64; 3], EngineError>;
}

impl<P: EclipticProvider + ?Sized> EclipticProvider for &P {
    fn longitude_deg(&self, body: Body, instant: &Instant) -> Result<f64, EngineError> {
        (**self).longitude_deg(body, instant)
    }

    fn earth_heliocentric_equatorial_au(
        &self,
        instant: &Instant,
    ) -> Result<[f64; 3], EngineError> {
        (**self).earth_heliocentric_equatorial_au(instant)
    }
}

impl<P: EclipticProvider + ?Sized> EclipticProvider for std::sync::Arc<P> {
    fn longitude_deg(&self, body: Body, instant: &Instant) -> Result<f64, EngineError> {
        (**self).longitude_deg(body, instant)
    }

    fn earth_heliocentric_equatorial_au(
        &self,
        instant: &Instant,
    ) -> Result<[f64; 3], EngineError> {
        (**self).earth_heliocentric_equatorial_au(instant)
    }
}
