use std::path::{Path, PathBuf};

use sidereal_base::HouseSystem;
use sidereal_config::AppConfig;

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn sample() -> PathBuf {
    repo_root().join("configs/sidereal.toml")
}

#[test]
fn sample_config_loads() {
    let c = AppConfig::from_file(&sample()).unwrap();
    assert_eq!(c.chart.house_system, HouseSystem::Equal);
    let loc = c.location.unwrap().to_geo().unwrap();
    assert!((loc.latitude_deg - 35.6892).abs() < 1e-12);
}

#[test]
fn sample_positions_resolve_and_load() {
    let c = AppConfig::from_file(&sample()).unwrap();
    let table = c.load_position_table().unwrap().unwrap();
    assert_eq!(table.len(), 10);
}

#[test]
fn explicit_beats_environment() {
    let missing = repo_root().join("configs/does-not-exist.toml");
    let c = AppConfig::load_from(Some(&sample()), Some(&missing), Path::new("nope")).unwrap();
    assert_eq!(c.source.as_deref(), Some(sample().as_path()));
}

#[test]
fn environment_used_when_no_explicit() {
    let c = AppConfig::load_from(None, Some(&sample()), Path::new("nope")).unwrap();
    assert!(c.location.is_some());
}

#[test]
fn missing_explicit_is_error() {
    let missing = repo_root().join("configs/does-not-exist.toml");
    assert!(AppConfig::load_from(Some(&missing), None, Path::new("nope")).is_err());
}

#[test]
fn missing_fallback_gives_defaults() {
    let missing = repo_root().join("configs/does-not-exist.toml");
    let c = AppConfig::load_from(None, None, &missing).unwrap();
    assert_eq!(c, AppConfig::default());
    assert!(c.load_position_table().unwrap().is_none());
}

#[test]
fn fallback_used_when_present() {
    let c = AppConfig::load_from(None, None, &sample()).unwrap();
    assert!(c.source.is_some());
}
