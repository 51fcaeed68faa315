//! Ayanamsa, mean nodes and ascendant at known instants.

use sidereal_base::{
    GeoLocation, LAHIRI_J2000_DEG, VedicError, ascendant_from_lst, ascendant_tropical_deg,
    ayanamsa_deg, local_sidereal_time, mean_ketu_deg, mean_rahu_deg, normalize_360,
};
use sidereal_time::Instant;

fn tehran_equinox_noon() -> Instant {
    // 2024-03-20 12:00 at UTC+03:30
    Instant::from_jd_ut(2_460_389.854_166_666_5)
}

fn tehran() -> GeoLocation {
    GeoLocation::new(35.6892, 51.389).unwrap()
}

#[test]
fn ayanamsa_at_j2000() {
    let t = Instant {
        jd_ut: 2_451_545.0,
        jd_tt: 2_451_545.0,
    };
    assert_eq!(ayanamsa_deg(&t), LAHIRI_J2000_DEG);
}

#[test]
fn ayanamsa_2024_equinox() {
    let a = ayanamsa_deg(&tehran_equinox_noon());
    assert!((a - 24.1944).abs() < 1e-3, "ayanamsa = {a}");
}

#[test]
fn ayanamsa_increases_with_time() {
    let a = ayanamsa_deg(&Instant::from_jd_ut(2_440_000.5));
    let b = ayanamsa_deg(&Instant::from_jd_ut(2_470_000.5));
    assert!(b > a);
}

#[test]
fn south_node_opposite_mean_node() {
    for i in -50..50 {
        let t = i as f64 * 0.037;
        let rahu = mean_rahu_deg(t);
        let ketu = mean_ketu_deg(t);
        assert_eq!(ketu, normalize_360(rahu + 180.0), "T = {t}");
        assert!((0.0..360.0).contains(&rahu) && (0.0..360.0).contains(&ketu));
    }
}

#[test]
fn mean_node_2024() {
    let t = tehran_equinox_noon().centuries_tt();
    let rahu = mean_rahu_deg(t);
    assert!((rahu - 16.676).abs() < 0.01, "Rahu = {rahu}");
}

#[test]
fn tehran_lst() {
    let lst = local_sidereal_time(&tehran_equinox_noon(), &tehran());
    assert!((lst - 23.8171).abs() < 1e-3, "LST = {lst} h");
}

#[test]
fn tehran_ascendant() {
    let asc = ascendant_tropical_deg(&tehran_equinox_noon(), &tehran()).unwrap();
    assert!((asc - 355.66).abs() < 0.02, "asc = {asc}");
}

#[test]
fn ascendant_always_normalized() {
    for lat in [-66.0, -45.0, -10.0, 0.0, 10.0, 45.0, 66.0] {
        for step in 0..96 {
            let lst = step as f64 * 0.25;
            let asc = ascendant_from_lst(lst, lat).unwrap();
            assert!((0.0..360.0).contains(&asc), "lat {lat}, lst {lst}: {asc}");
        }
    }
}

#[test]
fn ascendant_undefined_at_pole() {
    let pole = GeoLocation::new(-90.0, 0.0).unwrap();
    assert!(matches!(
        ascendant_tropical_deg(&tehran_equinox_noon(), &pole),
        Err(VedicError::AscendantUndefined { .. })
    ));
}
