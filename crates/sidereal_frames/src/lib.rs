//! Reference-frame helpers shared by the ascendant and minor-body code.
//!
//! Both consumers use one fixed mean obliquity, so the ascendant and the
//! Earth-vector rotation always agree on ε.

pub mod obliquity;
pub mod rotation;
pub mod spherical;

pub use obliquity::{COS_OBL, OBLIQUITY_J2000_DEG, OBLIQUITY_J2000_RAD, SIN_OBL};
pub use rotation::equatorial_to_ecliptic;
pub use spherical::{SphericalCoords, cartesian_to_spherical};
