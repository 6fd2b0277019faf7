//! Tests for configuration loading

use std::fs;

use tempfile::tempdir;

use super::{is_verbose, load_config_from, set_verbose, ConfigCandidate, CrossfilmConfig};
use crate::models::{CurveParams, FilterSettings};

#[test]
fn test_parse_full_config() {
    let yaml = "\
defaults:
  curve:
    midpoint: 0.4
    factor: 12.5
  filmstrip: true
  jpeg_quality: 80
";
    let (config, warnings) = CrossfilmConfig::from_yaml_str(yaml).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(config.defaults.curve, CurveParams::new(0.4, 12.5));
    assert!(config.defaults.filmstrip);
    assert_eq!(config.defaults.jpeg_quality, 80);
}

#[test]
fn test_empty_document_uses_defaults() {
    let (config, _) = CrossfilmConfig::from_yaml_str("{}").unwrap();
    assert_eq!(config.defaults, FilterSettings::default());
}

#[test]
fn test_out_of_range_values_are_sanitized() {
    let yaml = "defaults:\n  jpeg_quality: 0\n  curve:\n    factor: .inf\n";
    let (config, warnings) = CrossfilmConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.defaults.jpeg_quality, 1);
    assert_eq!(config.defaults.curve, CurveParams::default());
    assert_eq!(warnings.len(), 2);
}

#[test]
fn test_invalid_yaml_is_error() {
    assert!(CrossfilmConfig::from_yaml_str("defaults: [1, 2").is_err());
}

#[test]
fn test_load_first_valid_candidate() {
    let dir = tempdir().unwrap();
    let broken = dir.path().join("broken.yml");
    let good = dir.path().join("good.yml");
    fs::write(&broken, "defaults: {curve: [").unwrap();
    fs::write(&good, "defaults:\n  filmstrip: true\n").unwrap();

    let handle = load_config_from(vec![
        ConfigCandidate::searched(dir.path().join("missing.yml")),
        ConfigCandidate::searched(broken),
        ConfigCandidate::searched(&good),
    ]);

    assert!(handle.config.defaults.filmstrip);
    assert_eq!(handle.source, Some(fs::canonicalize(&good).unwrap()));
    assert_eq!(handle.warnings.len(), 1);
    assert!(handle.warnings[0].contains("Failed to parse"));
}

#[test]
fn test_load_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let handle = load_config_from(vec![ConfigCandidate::searched(dir.path().join("nothing.yml"))]);

    assert!(handle.source.is_none());
    assert_eq!(handle.config, CrossfilmConfig::default());
    assert!(handle.warnings.is_empty());
}

#[test]
fn test_missing_explicit_path_is_reported() {
    let dir = tempdir().unwrap();
    let typo = dir.path().join("typo.yml");
    let fallback = dir.path().join("crossfilm.yml");
    fs::write(&fallback, "defaults:\n  jpeg_quality: 75\n").unwrap();

    let handle = load_config_from(vec![
        ConfigCandidate::explicit(&typo),
        ConfigCandidate::searched(&fallback),
    ]);

    assert_eq!(handle.config.defaults.jpeg_quality, 75);
    assert_eq!(handle.warnings.len(), 1);
    assert!(handle.warnings[0].contains("not found"));
    assert!(handle.warnings[0].contains("typo.yml"));
}

#[test]
fn test_directory_candidate_is_skipped() {
    let dir = tempdir().unwrap();
    let handle = load_config_from(vec![ConfigCandidate::searched(dir.path())]);
    assert!(handle.source.is_none());
}

#[test]
fn test_verbose_flag_round_trip() {
    let before = is_verbose();
    set_verbose(true);
    assert!(is_verbose());
    set_verbose(before);
}
