//! Chart bodies: the ten provider bodies plus derived points.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every body placed in a chart, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKey {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    /// Mean ascending lunar node (Rahu).
    MeanNode,
    /// Mean descending lunar node (Ketu), always opposite [`BodyKey::MeanNode`].
    SouthNode,
    /// 2060 Chiron, propagated from osculating elements.
    Chiron,
}

/// All 13 bodies in chart order.
pub const ALL_BODIES: [BodyKey; 13] = [
    BodyKey::Sun,
    BodyKey::Moon,
    BodyKey::Mercury,
    BodyKey::Venus,
    BodyKey::Mars,
    BodyKey::Jupiter,
    BodyKey::Saturn,
    BodyKey::Uranus,
    BodyKey::Neptune,
    BodyKey::Pluto,
    BodyKey::MeanNode,
    BodyKey::SouthNode,
    BodyKey::Chiron,
];

impl BodyKey {
    /// Stable snake_case identifier.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
            Self::MeanNode => "mean_node",
            Self::SouthNode => "south_node",
            Self::Chiron => "chiron",
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::MeanNode => "Rahu (Mean Node)",
            Self::SouthNode => "Ketu (South Node)",
            Self::Chiron => "Chiron",
        }
    }

    /// Astronomical symbol.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Sun => "☉",
            Self::Moon => "☽",
            Self::Mercury => "☿",
            Self::Venus => "♀",
            Self::Mars => "♂",
            Self::Jupiter => "♃",
            Self::Saturn => "♄",
            Self::Uranus => "♅",
            Self::Neptune => "♆",
            Self::Pluto => "♇",
            Self::MeanNode => "☊",
            Self::SouthNode => "☋",
            Self::Chiron => "⚷",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [BodyKey; 13] {
        &ALL_BODIES
    }
}

impl Display for BodyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Unrecognized body name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown body: {0}")]
pub struct UnknownBody(pub String);

impl FromStr for BodyKey {
    type Err = UnknownBody;

    /// Accepts the snake_case key, the label's first word, and the
    /// common aliases `rahu`, `ketu`, `north_node`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match norm.as_str() {
            "rahu" | "north_node" | "node" => return Ok(Self::MeanNode),
            "ketu" => return Ok(Self::SouthNode),
            _ => {}
        }
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.key() == norm)
            .ok_or_else(|| UnknownBody(s.to_string()))
    }
}
