//! Observer location.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Geographic observer position. Longitude is positive east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Validated location: both values finite, latitude in [-90, 90],
    /// longitude in [-180, 180].
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, VedicError> {
        if !latitude_deg.is_finite() {
            return Err(VedicError::InvalidLocation("latitude must be a finite number"));
        }
        if !longitude_deg.is_finite() {
            return Err(VedicError::InvalidLocation("longitude must be a finite number"));
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(VedicError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(VedicError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }
}
