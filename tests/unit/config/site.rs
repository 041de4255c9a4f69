use super::*;
use crate::foundation::core::Millis;

#[test]
fn defaults_are_valid_and_round_trip() {
    let cfg = SiteConfig::default();
    cfg.validate().unwrap();
    let json = cfg.to_json_pretty().unwrap();
    let back = SiteConfig::from_json_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let cfg = SiteConfig::from_json_str(
        r#"{
            "theme": "dark",
            "typewriter": { "texts": ["A", "BC"], "pause": 1500 },
            "counters": [{ "id": "stars", "target": "250", "duration": 1000 }]
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.theme, Theme::Dark);
    assert_eq!(cfg.typewriter.texts, vec!["A", "BC"]);
    assert_eq!(cfg.typewriter.type_speed, Millis(100));
    assert_eq!(cfg.counters[0].config.duration, Millis(1000));
    assert_eq!(cfg.counters[0].config.frame, Millis(16));
    assert_eq!(cfg.loading, LoadingConfig::default());
    cfg.validate().unwrap();
}

#[test]
fn validate_surfaces_preset_errors() {
    let mut cfg = SiteConfig::default();
    cfg.typewriter.texts.clear();
    assert!(cfg.validate().is_err());

    let mut cfg = SiteConfig::default();
    cfg.counters[0].target = "many".to_string();
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, FolioError::Config(_)), "{err:?}");

    let mut cfg = SiteConfig::default();
    cfg.counters[1].id = cfg.counters[0].id.clone();
    assert!(cfg.validate().unwrap_err().to_string().contains("duplicate"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SiteConfig::from_json_str("{ not json").unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = SiteConfig::from_path("target/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, FolioError::Config(_)));
}
