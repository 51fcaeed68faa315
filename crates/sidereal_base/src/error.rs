//! Error types for sidereal base calculations.

use thiserror::Error;

/// Errors from base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// The ascendant formula degenerates at this sidereal time and latitude.
    #[error(
        "ascendant undefined at local sidereal time {lst_deg:.6}° and latitude {latitude_deg:.6}°"
    )]
    AscendantUndefined { lst_deg: f64, latitude_deg: f64 },
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
}
