use super::*;

#[test]
fn default_is_neutral() {
    let cfg = GradeConfig::default();
    assert_eq!(cfg.contrast, 1.0);
    assert_eq!(cfg.brightness, 0.0);
    assert_eq!(cfg.saturation, 1.0);
    assert_eq!(cfg.hue_deg, 0.0);
    assert!(cfg.is_neutral());

    let tweaked = GradeConfig {
        hue_deg: 30.0,
        ..GradeConfig::default()
    };
    assert!(!tweaked.is_neutral());
}

#[test]
fn preset_fills_missing_fields_with_defaults() {
    let cfg = GradeConfig::from_reader(r#"{ "saturation": 0.25, "hue_deg": -90 }"#.as_bytes())
        .unwrap();
    assert_eq!(
        cfg,
        GradeConfig {
            contrast: 1.0,
            brightness: 0.0,
            saturation: 0.25,
            hue_deg: -90.0,
        }
    );
}

#[test]
fn preset_rejects_unknown_fields() {
    let err = GradeConfig::from_reader(r#"{ "gamma": 2.2 }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, LottieGradeError::Config(_)));
}

#[test]
fn preset_missing_file_is_io_error() {
    let err = GradeConfig::from_path("target/does-not-exist/preset.json").unwrap_err();
    assert!(matches!(err, LottieGradeError::Io { .. }));
}
