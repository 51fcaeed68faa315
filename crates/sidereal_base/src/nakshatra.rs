//! Nakshatra (lunar mansion) and pada lookup, 27-fold scheme.
//!
//! Each nakshatra spans 13°20′; each of its four padas spans 3°20′.

use serde::Serialize;

use crate::body::BodyKey;
use crate::util::normalize_360;

/// Span of one nakshatra in degrees: 360/27 = 13.3333...
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada in degrees: 13.3333.../4 = 3.3333...
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras, starting from Ashwini at 0° sidereal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order.
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Vimshottari lords, cycling every nine nakshatras from Ashwini.
const VIMSHOTTARI_LORDS: [BodyKey; 9] = [
    BodyKey::SouthNode,
    BodyKey::Venus,
    BodyKey::Sun,
    BodyKey::Moon,
    BodyKey::Mars,
    BodyKey::MeanNode,
    BodyKey::Jupiter,
    BodyKey::Saturn,
    BodyKey::Mercury,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashirsha",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (0 = Ashwini, 26 = Revati).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Vimshottari dasha lord.
    pub const fn lord(self) -> BodyKey {
        VIMSHOTTARI_LORDS[(self as usize) % 9]
    }

    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada within the nakshatra, 1-4.
    pub pada: u8,
    /// Degrees within the nakshatra, [0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Degrees within the pada, [0, 3.333...).
    pub degrees_in_pada: f64,
}

/// Total number of padas around the ecliptic.
const PADA_COUNT: f64 = 108.0;

/// Nakshatra and pada from a sidereal ecliptic longitude.
///
/// The pada is located first, on the 108-fold grid, and the nakshatra
/// follows from it. Scaling by 108/360 keeps exact multiples of the pada
/// span on the correct side of every boundary.
///
/// A longitude sitting exactly on a pada boundary therefore always opens
/// the later pada, even where `floor(within / PADA_SPAN)` evaluated in f64
/// would land one pada short: 20.0° is Bharani pada 3, not pada 2.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let pada_global = ((lon * PADA_COUNT / 360.0).floor() as u8).min(107);
    let nak_idx = pada_global / 4;
    let pada_idx = pada_global % 4;
    let degrees_in_nakshatra = (lon - (nak_idx as f64) * NAKSHATRA_SPAN_27).max(0.0);
    let degrees_in_pada = (lon - (pada_global as f64) * PADA_SPAN).max(0.0);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[nak_idx as usize],
        nakshatra_index: nak_idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
        degrees_in_pada,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS_27.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn lords_cycle() {
        assert_eq!(Nakshatra::Ashwini.lord(), BodyKey::SouthNode);
        assert_eq!(Nakshatra::Magha.lord(), BodyKey::SouthNode);
        assert_eq!(Nakshatra::Rohini.lord(), BodyKey::Moon);
        assert_eq!(Nakshatra::Ardra.lord(), BodyKey::MeanNode);
        assert_eq!(Nakshatra::Revati.lord(), BodyKey::Mercury);
    }

    #[test]
    fn start_of_ashwini() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
    }

    #[test]
    fn last_pada_of_revati() {
        let info = nakshatra_from_longitude(359.99);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn whole_degree_pada_boundary() {
        // 20° is exactly six padas in: Bharani pada 3.
        let info = nakshatra_from_longitude(20.0);
        assert_eq!(info.nakshatra, Nakshatra::Bharani);
        assert_eq!(info.pada, 3);
        assert!(info.degrees_in_pada < 1e-9);
    }

    #[test]
    fn pada_details() {
        // 5° sits in Ashwini pada 2, 1°40′ into it.
        let info = nakshatra_from_longitude(5.0);
        assert_eq!(info.pada, 2);
        assert!((info.degrees_in_pada - (5.0 - PADA_SPAN)).abs() < 1e-12);
    }
}
