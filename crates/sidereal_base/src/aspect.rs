//! Major aspects between chart bodies.
//!
//! Separation between two longitudes is folded into [0, 180]. The aspect
//! table is scanned in priority order and the first entry whose orb covers
//! the separation is taken, even when a later entry would fit more
//! tightly. Matches are then listed by ascending orb delta.

use serde::Serialize;

use crate::body::BodyKey;
use crate::util::normalize_360;

/// The five major aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

/// Aspect definitions in match priority order.
pub const ASPECT_TABLE: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
];

impl AspectKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Opposition => "Opposition",
            Self::Trine => "Trine",
            Self::Square => "Square",
            Self::Sextile => "Sextile",
        }
    }

    /// Exact angle in degrees.
    pub const fn exact_angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
            Self::Sextile => 60.0,
        }
    }

    /// Orb tolerance in degrees.
    pub const fn orb(self) -> f64 {
        match self {
            Self::Conjunction | Self::Opposition => 6.0,
            Self::Trine | Self::Square => 5.0,
            Self::Sextile => 4.0,
        }
    }

    pub const fn all() -> &'static [AspectKind; 5] {
        &ASPECT_TABLE
    }
}

/// Angular separation of two longitudes, degrees in [0, 180].
pub fn angular_separation(lon_a: f64, lon_b: f64) -> f64 {
    let d = (normalize_360(lon_a) - normalize_360(lon_b)).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// First aspect in [`ASPECT_TABLE`] order within orb of `separation`.
///
/// Returns the aspect and its orb delta `|separation − exact|`.
pub fn classify_separation(separation: f64) -> Option<(AspectKind, f64)> {
    ASPECT_TABLE.iter().find_map(|&kind| {
        let gap = (separation - kind.exact_angle()).abs();
        (gap <= kind.orb()).then_some((kind, gap))
    })
}

/// One detected aspect between two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectMatch {
    pub body_a: BodyKey,
    pub body_b: BodyKey,
    pub kind: AspectKind,
    /// Separation in degrees, [0, 180].
    pub separation_deg: f64,
    /// `|separation − exact angle|`.
    pub orb_delta_deg: f64,
}

/// Aspect between two longitudes, if any.
pub fn find_aspect(
    body_a: BodyKey,
    lon_a: f64,
    body_b: BodyKey,
    lon_b: f64,
) -> Option<AspectMatch> {
    let separation = angular_separation(lon_a, lon_b);
    classify_separation(separation).map(|(kind, orb_delta)| AspectMatch {
        body_a,
        body_b,
        kind,
        separation_deg: separation,
        orb_delta_deg: orb_delta,
    })
}

/// All aspects among unordered pairs of `bodies`, by ascending orb delta.
///
/// Pairs are visited in input order (`i < j`); the sort is stable, so equal
/// deltas keep that order.
pub fn detect_aspects(bodies: &[(BodyKey, f64)]) -> Vec<AspectMatch> {
    let mut out = Vec::new();
    for (i, &(a, lon_a)) in bodies.iter().enumerate() {
        for &(b, lon_b) in &bodies[i + 1..] {
            if let Some(m) = find_aspect(a, lon_a, b, lon_b) {
                out.push(m);
            }
        }
    }
    out.sort_by(|x, y| x.orb_delta_deg.total_cmp(&y.orb_delta_deg));
    out
}
