//! Configuration file loading.
//!
//! Lookup order: an explicit path, then `$SIDEREAL_CONFIG`, then
//! `configs/sidereal.toml` in the working directory. When none of these
//! names a file the defaults apply. An explicitly named file that is
//! missing is an error; the fallback path is optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sidereal_base::{GeoLocation, HouseSystem};
use sidereal_core::PositionTable;

/// Environment variable naming a configuration file.
pub const CONFIG_ENV_VAR: &str = "SIDEREAL_CONFIG";

/// Fallback configuration path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/sidereal.toml";

/// Default observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationConfig {
    pub fn to_geo(self) -> anyhow::Result<GeoLocation> {
        GeoLocation::new(self.latitude, self.longitude)
            .with_context(|| format!("[location] {}, {}", self.latitude, self.longitude))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSection {
    pub house_system: HouseSystem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EphemerisSection {
    /// Position table file (TOML, or JSON by `.json` extension).
    /// Relative paths resolve against the config file's directory.
    pub positions: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub location: Option<LocationConfig>,
    pub chart: ChartSection,
    pub ephemeris: EphemerisSection,
    /// File this config was read from; `None` for defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("failed to parse configuration")
    }

    /// Read one file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read config {}", path.display()))?;
        let mut config = Self::from_toml_str(&text)
            .with_context(|| format!("in {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load using the lookup order (explicit, environment, fallback, defaults).
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::load_from(explicit, env.as_deref(), Path::new(DEFAULT_CONFIG_PATH))
    }

    /// [`AppConfig::load`] with the environment value and fallback path
    /// passed in.
    pub fn load_from(
        explicit: Option<&Path>,
        env: Option<&Path>,
        fallback: &Path,
    ) -> anyhow::Result<Self> {
        if let Some(path) = explicit.or(env) {
            return Self::from_file(path);
        }
        if fallback.is_file() {
            return Self::from_file(fallback);
        }
        log::debug!("no configuration file; using defaults");
        Ok(Self::default())
    }

    /// Position table path, resolved against the config file's directory.
    pub fn positions_path(&self) -> Option<PathBuf> {
        let p = self.ephemeris.positions.as_ref()?;
        if p.is_absolute() {
            return Some(p.clone());
        }
        let base = self
            .source
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new(""));
        Some(base.join(p))
    }

    /// Load the configured position table, if one is named.
    pub fn load_position_table(&self) -> anyhow::Result<Option<PositionTable>> {
        let Some(path) = self.positions_path() else {
            return Ok(None);
        };
        let table = PositionTable::load(&path)
            .with_context(|| format!("could not load positions from {}", path.display()))?;
        Ok(Some(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_default() {
        let c = AppConfig::from_toml_str("").unwrap();
        assert_eq!(c, AppConfig::default());
        assert_eq!(c.chart.house_system, HouseSystem::Equal);
    }

    #[test]
    fn full_file() {
        let c = AppConfig::from_toml_str(
            r#"
            [location]
            latitude = 35.6892
            longitude = 51.389

            [chart]
            house_system = "whole_sign"

            [ephemeris]
            positions = "positions.toml"
            "#,
        )
        .unwrap();
        let loc = c.location.unwrap();
        assert_eq!(loc.latitude, 35.6892);
        assert_eq!(c.chart.house_system, HouseSystem::WholeSign);
        assert_eq!(c.ephemeris.positions, Some(PathBuf::from("positions.toml")));
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(AppConfig::from_toml_str("[chart]\nhouses = \"equal\"\n").is_err());
    }

    #[test]
    fn bad_house_system_rejected() {
        assert!(AppConfig::from_toml_str("[chart]\nhouse_system = \"placidus\"\n").is_err());
    }

    #[test]
    fn location_range_checked() {
        let loc = LocationConfig {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(loc.to_geo().is_err());
    }

    #[test]
    fn positions_resolve_against_config_dir() {
        let mut c = AppConfig::from_toml_str("[ephemeris]\npositions = \"p.toml\"\n").unwrap();
        assert_eq!(c.positions_path(), Some(PathBuf::from("p.toml")));
        c.source = Some(PathBuf::from("/etc/sidereal/sidereal.toml"));
        assert_eq!(
            c.positions_path(),
            Some(PathBuf::from("/etc/sidereal/p.toml"))
        );
    }

    #[test]
    fn absolute_positions_kept() {
        let mut c = AppConfig::from_toml_str("[ephemeris]\npositions = \"/data/p.toml\"\n").unwrap();
        c.source = Some(PathBuf::from("/etc/sidereal.toml"));
        assert_eq!(c.positions_path(), Some(PathBuf::from("/data/p.toml")));
    }
}
