//! Aspect detection: priority order, orb handling and sorting.

use sidereal_base::{
    ASPECT_TABLE, AspectKind, BodyKey, angular_separation, classify_separation, detect_aspects,
    find_aspect,
};

#[test]
fn table_priority_order() {
    let names: Vec<_> = ASPECT_TABLE.iter().map(|k| k.name()).collect();
    assert_eq!(names, ["Conjunction", "Opposition", "Trine", "Square", "Sextile"]);
    let angles: Vec<_> = ASPECT_TABLE.iter().map(|k| k.exact_angle()).collect();
    assert_eq!(angles, [0.0, 180.0, 120.0, 90.0, 60.0]);
    let orbs: Vec<_> = ASPECT_TABLE.iter().map(|k| k.orb()).collect();
    assert_eq!(orbs, [6.0, 6.0, 5.0, 5.0, 4.0]);
}

#[test]
fn sixty_three_degrees_is_sextile() {
    let m = find_aspect(BodyKey::Venus, 10.0, BodyKey::Mars, 73.0).unwrap();
    assert_eq!(m.kind, AspectKind::Sextile);
    assert!((m.orb_delta_deg - 3.0).abs() < 1e-12);
}

#[test]
fn two_degrees_is_conjunction() {
    let m = find_aspect(BodyKey::Sun, 359.0, BodyKey::Mercury, 1.0).unwrap();
    assert_eq!(m.kind, AspectKind::Conjunction);
    assert!((m.separation_deg - 2.0).abs() < 1e-12);
}

#[test]
fn separation_always_in_half_circle() {
    let mut a = -720.0;
    while a < 720.0 {
        let s = angular_separation(a, 37.5);
        assert!((0.0..=180.0).contains(&s), "sep({a}, 37.5) = {s}");
        a += 7.3;
    }
}

#[test]
fn separation_symmetric() {
    for (a, b) in [(10.0, 200.0), (359.0, 1.0), (123.4, 5.6)] {
        assert_eq!(angular_separation(a, b), angular_separation(b, a));
    }
}

#[test]
fn sweep_matches_table_windows() {
    // Every separation in [0, 180] matches at most one window, and the
    // match agrees with a direct window check.
    for tenth in 0..=1800 {
        let sep = tenth as f64 / 10.0;
        let expected = ASPECT_TABLE
            .iter()
            .copied()
            .find(|k| (sep - k.exact_angle()).abs() <= k.orb());
        assert_eq!(classify_separation(sep).map(|m| m.0), expected, "sep = {sep}");
    }
}

#[test]
fn full_chart_pairs_and_order() {
    let bodies = [
        (BodyKey::Sun, 0.0),
        (BodyKey::Moon, 119.0),
        (BodyKey::Mars, 240.5),
        (BodyKey::Jupiter, 300.0),
    ];
    let found = detect_aspects(&bodies);
    // Orb deltas: Sun-Jupiter 0, Sun-Mars 0.5, Mars-Jupiter 0.5,
    // Sun-Moon 1, Moon-Jupiter 1 (179°), Moon-Mars 1.5 (121.5°).
    let pairs: Vec<_> = found
        .iter()
        .map(|m| (m.body_a, m.body_b, m.kind))
        .collect();
    assert_eq!(
        pairs,
        [
            (BodyKey::Sun, BodyKey::Jupiter, AspectKind::Sextile),
            (BodyKey::Sun, BodyKey::Mars, AspectKind::Trine),
            (BodyKey::Mars, BodyKey::Jupiter, AspectKind::Sextile),
            (BodyKey::Sun, BodyKey::Moon, AspectKind::Trine),
            (BodyKey::Moon, BodyKey::Jupiter, AspectKind::Opposition),
            (BodyKey::Moon, BodyKey::Mars, AspectKind::Trine),
        ]
    );
}

#[test]
fn equal_orbs_keep_pair_order() {
    let bodies = [
        (BodyKey::Sun, 0.0),
        (BodyKey::Moon, 90.0),
        (BodyKey::Mars, 180.0),
    ];
    let found = detect_aspects(&bodies);
    // Sun-Moon square, Sun-Mars opposition, Moon-Mars square: all exact.
    let pairs: Vec<_> = found.iter().map(|m| (m.body_a, m.body_b)).collect();
    assert_eq!(
        pairs,
        [
            (BodyKey::Sun, BodyKey::Moon),
            (BodyKey::Sun, BodyKey::Mars),
            (BodyKey::Moon, BodyKey::Mars),
        ]
    );
}
