//! Chart data types.

use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};
use sidereal_base::{
    AspectMatch, BodyKey, CHIRON_ELEMENTS, GeoLocation, HouseCusp, HouseSystem, NakshatraInfo,
    OrbitalElements, Rashi, detect_aspects,
};
use sidereal_time::Instant;

use crate::error::FaultReason;

/// Options for a chart build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartConfig {
    /// House division. Defaults to equal houses from the ascendant degree.
    pub house_system: HouseSystem,
    /// Elements used to propagate Chiron.
    pub chiron_elements: OrbitalElements,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::Equal,
            chiron_elements: CHIRON_ELEMENTS,
        }
    }
}

impl ChartConfig {
    pub fn with_house_system(mut self, house_system: HouseSystem) -> Self {
        self.house_system = house_system;
        self
    }
}

/// Ascendant placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AscendantPosition {
    /// Tropical longitude, [0, 360).
    pub tropical_longitude_deg: f64,
    /// Sidereal longitude, [0, 360).
    pub sidereal_longitude_deg: f64,
    pub rashi: Rashi,
    /// 0 = Mesha .. 11 = Meena.
    pub sign_index: u8,
    /// [0, 30).
    pub degree_in_sign: f64,
    pub nakshatra: NakshatraInfo,
}

/// One body's placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    pub key: BodyKey,
    pub label: &'static str,
    /// Tropical longitude, [0, 360).
    pub tropical_longitude_deg: f64,
    /// Sidereal longitude, [0, 360).
    pub sidereal_longitude_deg: f64,
    pub rashi: Rashi,
    /// 0 = Mesha .. 11 = Meena.
    pub sign_index: u8,
    /// [0, 30).
    pub degree_in_sign: f64,
    /// 1-12.
    pub house: u8,
    pub nakshatra: NakshatraInfo,
}

/// A body left out of the chart and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyFault {
    pub body: BodyKey,
    #[serde(serialize_with = "serialize_display")]
    pub reason: FaultReason,
}

fn serialize_display<S: Serializer>(reason: &FaultReason, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(reason)
}

/// A built chart. Immutable; rebuilt from scratch for every input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// The civil date/time as resolved, with its UTC offset.
    pub civil_time: DateTime<FixedOffset>,
    pub instant: Instant,
    pub location: GeoLocation,
    pub house_system: HouseSystem,
    /// Lahiri ayanamsa, [0, 360).
    pub ayanamsa_deg: f64,
    pub ascendant: AscendantPosition,
    pub houses: [HouseCusp; 12],
    /// Placed bodies, in [`sidereal_base::ALL_BODIES`] order.
    pub bodies: Vec<BodyPosition>,
    /// Bodies that could not be placed.
    pub faults: Vec<BodyFault>,
}

impl Chart {
    pub fn body(&self, key: BodyKey) -> Option<&BodyPosition> {
        self.bodies.iter().find(|b| b.key == key)
    }

    /// Bodies in house `house` (1-12), in chart order.
    pub fn bodies_in_house(&self, house: u8) -> impl Iterator<Item = &BodyPosition> + '_ {
        self.bodies.iter().filter(move |b| b.house == house)
    }

    /// Major aspects among placed bodies, by ascending orb delta.
    pub fn aspects(&self) -> Vec<AspectMatch> {
        let lons: Vec<_> = self
            .bodies
            .iter()
            .map(|b| (b.key, b.sidereal_longitude_deg))
            .collect();
        detect_aspects(&lons)
    }

    /// True when every body was placed.
    pub fn is_complete(&self) -> bool {
        self.faults.is_empty()
    }
}
