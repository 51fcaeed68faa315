//! Sidereal chart primitives built on tropical longitudes.
//!
//! This crate provides:
//! - Lahiri ayanamsa (linear model)
//! - Ascendant from sidereal time and latitude
//! - Mean lunar nodes and two-body Kepler propagation (Chiron)
//! - Rashi, nakshatra/pada and house mapping
//! - Major-aspect detection
//!
//! Every function here is pure; nothing touches a provider or a clock.

pub mod aspect;
pub mod ayanamsha;
pub mod bhava;
pub mod body;
pub mod error;
pub mod kepler;
pub mod lagna;
pub mod location;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use aspect::{
    ASPECT_TABLE, AspectKind, AspectMatch, angular_separation, classify_separation,
    detect_aspects, find_aspect,
};
pub use ayanamsha::{
    LAHIRI_J2000_DEG, LAHIRI_RATE_DEG_PER_YEAR, ayanamsa_at_years, ayanamsa_deg,
    tropical_to_sidereal,
};
pub use bhava::{
    HouseCusp, HouseSystem, UnknownHouseSystem, equal_house, house_cusps, house_for_longitude,
    whole_sign_house,
};
pub use body::{ALL_BODIES, BodyKey, UnknownBody};
pub use error::VedicError;
pub use kepler::{
    CHIRON_ELEMENTS, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE, KeplerSolution, OrbitalElements,
    geocentric_ecliptic, geocentric_ecliptic_longitude_deg, heliocentric_ecliptic_au,
    mean_anomaly_deg, solve_kepler, true_anomaly_rad,
};
pub use lagna::{ascendant_from_lst, ascendant_tropical_deg, local_sidereal_time};
pub use location::GeoLocation;
pub use lunar_nodes::{ALL_NODES, LunarNode, lunar_node_deg, mean_ketu_deg, mean_rahu_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude};
pub use util::normalize_360;
