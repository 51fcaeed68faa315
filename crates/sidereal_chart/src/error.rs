//! Chart build errors.

use sidereal_base::VedicError;
use sidereal_core::EngineError;
use sidereal_time::TimeError;
use thiserror::Error;

/// Whole-chart failures. Nothing is returned when one of these occurs.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Latitude or longitude missing, non-finite or out of range.
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(&'static str),
    /// The date/time string did not resolve to an instant.
    #[error(transparent)]
    InvalidTime(#[from] TimeError),
    /// The ascendant is undefined for this place and time.
    #[error(
        "ascendant undefined at this location/time (LST {lst_deg:.4}°, latitude {latitude_deg:.4}°)"
    )]
    AscendantUndefined { lst_deg: f64, latitude_deg: f64 },
}

impl From<VedicError> for ChartError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::AscendantUndefined {
                lst_deg,
                latitude_deg,
            } => Self::AscendantUndefined {
                lst_deg,
                latitude_deg,
            },
            VedicError::InvalidLocation(msg) => Self::InvalidCoordinates(msg),
            _ => Self::InvalidCoordinates("unrecognized location error"),
        }
    }
}

/// Why one body is missing from a chart.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FaultReason {
    /// The provider could not supply a position.
    #[error("provider: {0}")]
    Provider(#[from] EngineError),
    /// The computed longitude was NaN or infinite.
    #[error("non-finite longitude")]
    NonFiniteLongitude,
}
