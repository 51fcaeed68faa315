//! A provider backed by precomputed positions.
//!
//! ```toml
//! epoch_jd_tt = 2460389.855
//! epoch_tolerance_days = 0.01
//! earth_heliocentric_equatorial_au = [-0.9993, -0.0263, -0.0114]
//!
//! [longitudes]
//! sun = 0.05
//! moon = 115.2
//! ```
//!
//! Without `epoch_jd_tt` the table answers for any instant. With it,
//! queries farther than `epoch_tolerance_days` from the epoch fail.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sidereal_time::Instant;

use crate::{ALL_PROVIDER_BODIES, Body, EclipticProvider, EngineError};

/// Default epoch tolerance: one minute.
pub const DEFAULT_EPOCH_TOLERANCE_DAYS: f64 = 1.0 / 1440.0;

/// On-disk shape of a position table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PositionTableFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    epoch_jd_tt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    epoch_tolerance_days: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    earth_heliocentric_equatorial_au: Option<[f64; 3]>,
    #[serde(default)]
    longitudes: BTreeMap<String, f64>,
}

/// Tabulated positions for a single instant (or for any instant when no
/// epoch is pinned).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PositionTableFile", into = "PositionTableFile")]
pub struct PositionTable {
    longitudes: [Option<f64>; 10],
    earth_au: Option<[f64; 3]>,
    epoch_jd_tt: Option<f64>,
    tolerance_days: f64,
}

impl TryFrom<PositionTableFile> for PositionTable {
    type Error = EngineError;

    fn try_from(file: PositionTableFile) -> Result<Self, Self::Error> {
        let mut table = Self::new();
        for (key, lon) in file.longitudes {
            let body: Body = key.parse()?;
            table.longitudes[body.index()] = Some(lon);
        }
        table.earth_au = file.earth_heliocentric_equatorial_au;
        if let Some(epoch) = file.epoch_jd_tt {
            if !epoch.is_finite() {
                return Err(EngineError::InvalidTable(
                    "epoch_jd_tt must be finite".into(),
                ));
            }
            let tol = file
                .epoch_tolerance_days
                .unwrap_or(DEFAULT_EPOCH_TOLERANCE_DAYS);
            if !(tol.is_finite() && tol >= 0.0) {
                return Err(EngineError::InvalidTable(
                    "epoch_tolerance_days must be a non-negative number".into(),
                ));
            }
            table = table.with_epoch(epoch, tol);
        }
        Ok(table)
    }
}

impl From<PositionTable> for PositionTableFile {
    fn from(table: PositionTable) -> Self {
        let longitudes = ALL_PROVIDER_BODIES
            .iter()
            .filter_map(|b| table.longitudes[b.index()].map(|l| (b.key().to_string(), l)))
            .collect();
        Self {
            epoch_jd_tt: table.epoch_jd_tt,
            epoch_tolerance_days: table.epoch_jd_tt.map(|_| table.tolerance_days),
            earth_heliocentric_equatorial_au: table.earth_au,
            longitudes,
        }
    }
}

impl PositionTable {
    /// An empty table with no epoch restriction.
    pub fn new() -> Self {
        Self {
            tolerance_days: DEFAULT_EPOCH_TOLERANCE_DAYS,
            ..Self::default()
        }
    }

    /// Set the longitude for one body.
    pub fn with_longitude(mut self, body: Body, lon_deg: f64) -> Self {
        self.longitudes[body.index()] = Some(lon_deg);
        self
    }

    /// Set Earth's heliocentric equatorial vector (AU).
    pub fn with_earth_vector(mut self, au: [f64; 3]) -> Self {
        self.earth_au = Some(au);
        self
    }

    /// Pin the table to a TT epoch.
    pub fn with_epoch(mut self, epoch_jd_tt: f64, tolerance_days: f64) -> Self {
        self.epoch_jd_tt = Some(epoch_jd_tt);
        self.tolerance_days = tolerance_days;
        self
    }

    /// Pinned epoch, if any.
    pub fn epoch_jd_tt(&self) -> Option<f64> {
        self.epoch_jd_tt
    }

    /// Number of bodies with a tabulated longitude.
    pub fn len(&self) -> usize {
        self.longitudes.iter().filter(|l| l.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn from_toml_str(s: &str) -> Result<Self, EngineError> {
        toml::from_str(s).map_err(|e| EngineError::InvalidTable(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> Result<Self, EngineError> {
        serde_json::from_str(s).map_err(|e| EngineError::InvalidTable(e.to_string()))
    }

    /// Load a table file. `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| EngineError::InvalidTable(format!("{}: {e}", path.display())))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let table = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_toml_str(&text)?
        };
        log::debug!(
            "loaded position table {} ({} bodies, epoch {:?})",
            path.display(),
            table.len(),
            table.epoch_jd_tt
        );
        Ok(table)
    }

    fn check_epoch(&self, instant: &Instant) -> Result<(), EngineError> {
        match self.epoch_jd_tt {
            Some(epoch) if (instant.jd_tt - epoch).abs() > self.tolerance_days => {
                Err(EngineError::EpochOutOfRange {
                    epoch_jd_tt: instant.jd_tt,
                })
            }
            _ => Ok(()),
        }
    }
}

impl EclipticProvider for PositionTable {
    fn longitude_deg(&self, body: Body, instant: &Instant) -> Result<f64, EngineError> {
        self.check_epoch(instant)?;
        self.longitudes[body.index()].ok_or(EngineError::MissingBody(body))
    }

    fn earth_heliocentric_equatorial_au(
        &self,
        instant: &Instant,
    ) -> Result<[f64; 3], EngineError> {
        self.check_epoch(instant)?;
        self.earth_au.ok_or(EngineError::MissingEarthVector)
    }
}
