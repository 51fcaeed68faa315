//! Mean lunar nodes (Rahu and Ketu).
//!
//! Meeus, "Astronomical Algorithms" (2nd ed), eq. 47.7:
//! `Ω = 125.04452 − 1934.136261 T + 0.0020708 T² + T³/450000`,
//! T in Julian centuries of TT since J2000.0.

use serde::Serialize;

use crate::util::normalize_360;

/// The two lunar nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LunarNode {
    /// Ascending node.
    Rahu,
    /// Descending node.
    Ketu,
}

pub const ALL_NODES: [LunarNode; 2] = [LunarNode::Rahu, LunarNode::Ketu];

impl LunarNode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    pub const fn all() -> &'static [LunarNode] {
        &ALL_NODES
    }
}

/// Mean Rahu longitude in degrees [0, 360).
pub fn mean_rahu_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    normalize_360(125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0)
}

/// Mean Ketu longitude in degrees [0, 360), exactly opposite Rahu.
pub fn mean_ketu_deg(t: f64) -> f64 {
    normalize_360(mean_rahu_deg(t) + 180.0)
}

pub fn lunar_node_deg(node: LunarNode, t: f64) -> f64 {
    match node {
        LunarNode::Rahu => mean_rahu_deg(t),
        LunarNode::Ketu => mean_ketu_deg(t),
    }
}
