//! Bhava (house) assignment relative to the ascendant.
//!
//! [`HouseSystem::Equal`] anchors house 1 at the exact ascendant degree,
//! so houses may straddle sign borders. [`HouseSystem::WholeSign`] makes
//! the ascendant's whole sign house 1.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// House division scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    /// Twelve 30° houses from the ascendant degree.
    #[default]
    Equal,
    /// Twelve houses aligned to signs, from the ascendant's sign.
    WholeSign,
}

impl HouseSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::WholeSign => "whole_sign",
        }
    }
}

impl Display for HouseSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized house-system name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown house system: {0} (expected equal or whole_sign)")]
pub struct UnknownHouseSystem(pub String);

impl FromStr for HouseSystem {
    type Err = UnknownHouseSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "equal" => Ok(Self::Equal),
            "whole_sign" | "wholesign" => Ok(Self::WholeSign),
            _ => Err(UnknownHouseSystem(s.to_string())),
        }
    }
}

/// Equal-house number (1-12) of `lon` for an ascendant at `asc`.
///
/// `house = floor(normalize(lon − asc) / 30) + 1`.
pub fn equal_house(sidereal_lon_deg: f64, asc_sidereal_deg: f64) -> u8 {
    let delta = normalize_360(sidereal_lon_deg - asc_sidereal_deg);
    ((delta / 30.0).floor() as u8).min(11) + 1
}

/// Whole-sign house number (1-12): sign offset from the ascendant's sign.
pub fn whole_sign_house(sidereal_lon_deg: f64, asc_sidereal_deg: f64) -> u8 {
    let body = rashi_from_longitude(sidereal_lon_deg).rashi_index;
    let asc = rashi_from_longitude(asc_sidereal_deg).rashi_index;
    (body + 12 - asc) % 12 + 1
}

/// House number (1-12) of a sidereal longitude.
pub fn house_for_longitude(sidereal_lon_deg: f64, asc_sidereal_deg: f64, system: HouseSystem) -> u8 {
    match system {
        HouseSystem::Equal => equal_house(sidereal_lon_deg, asc_sidereal_deg),
        HouseSystem::WholeSign => whole_sign_house(sidereal_lon_deg, asc_sidereal_deg),
    }
}

/// One house: its span and the sign its cusp falls in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseCusp {
    /// House number, 1-12.
    pub house: u8,
    /// Sidereal longitude where the house begins, [0, 360).
    pub start_deg: f64,
    /// Sidereal longitude where the house ends, [0, 360).
    pub end_deg: f64,
    /// Sign containing `start_deg`.
    pub rashi: Rashi,
}

/// All twelve houses for an ascendant.
pub fn house_cusps(asc_sidereal_deg: f64, system: HouseSystem) -> [HouseCusp; 12] {
    let first = match system {
        HouseSystem::Equal => normalize_360(asc_sidereal_deg),
        HouseSystem::WholeSign => rashi_from_longitude(asc_sidereal_deg).rashi_index as f64 * 30.0,
    };
    std::array::from_fn(|i| {
        let start_deg = normalize_360(first + 30.0 * i as f64);
        HouseCusp {
            house: i as u8 + 1,
            start_deg,
            end_deg: normalize_360(start_deg + 30.0),
            rashi: rashi_from_longitude(start_deg).rashi,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascendant_degree_is_house_one() {
        assert_eq!(equal_house(123.4, 123.4), 1);
    }

    #[test]
    fn equal_house_straddles_sign() {
        // Asc 25° Aries: 10° Taurus is still house 1.
        assert_eq!(equal_house(40.0, 25.0), 1);
        assert_eq!(whole_sign_house(40.0, 25.0), 2);
    }

    #[test]
    fn just_before_ascendant_is_house_twelve() {
        assert_eq!(equal_house(99.999, 100.0), 12);
    }

    #[test]
    fn whole_sign_wraps() {
        assert_eq!(whole_sign_house(5.0, 350.0), 2);
        assert_eq!(whole_sign_house(345.0, 350.0), 1);
    }

    #[test]
    fn cusps_equal() {
        let cusps = house_cusps(331.47, HouseSystem::Equal);
        assert!((cusps[0].start_deg - 331.47).abs() < 1e-12);
        assert_eq!(cusps[0].rashi, Rashi::Meena);
        assert!((cusps[1].start_deg - 1.47).abs() < 1e-9);
        assert_eq!(cusps[1].rashi, Rashi::Mesha);
        assert!((cusps[11].end_deg - 331.47).abs() < 1e-9);
    }

    #[test]
    fn cusps_whole_sign_start_at_sign() {
        let cusps = house_cusps(331.47, HouseSystem::WholeSign);
        assert_eq!(cusps[0].start_deg, 330.0);
        assert_eq!(cusps[1].start_deg, 0.0);
        assert_eq!(cusps[1].rashi, Rashi::Mesha);
    }

    #[test]
    fn parse_names() {
        assert_eq!("equal".parse::<HouseSystem>().unwrap(), HouseSystem::Equal);
        assert_eq!("Whole-Sign".parse::<HouseSystem>().unwrap(), HouseSystem::WholeSign);
        assert!("placidus".parse::<HouseSystem>().is_err());
        assert_eq!(HouseSystem::default(), HouseSystem::Equal);
    }
}
