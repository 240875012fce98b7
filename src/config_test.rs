#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn empty_document_uses_defaults() {
    let cfg = SliderConfig::from_json("{}").unwrap();
    assert_eq!(cfg, SliderConfig::default());
    assert_eq!(cfg.minimum_value, DEFAULT_MINIMUM_VALUE);
    assert_eq!(cfg.maximum_value, DEFAULT_MAXIMUM_VALUE);
    assert_eq!(cfg.step, DEFAULT_STEP);
    assert_eq!(cfg.label_fade_ms, LABEL_FADE_MS);
    assert_eq!(cfg.thumb_size, ThumbSize { width: DEFAULT_THUMB_SIZE_PX, height: DEFAULT_THUMB_SIZE_PX });
    assert!(cfg.track_width.is_none());
}

#[test]
fn camel_case_fields_parse() {
    let raw = r#"{
        "minimumValue": 10,
        "maximumValue": 40,
        "step": 1,
        "trackWidth": 351,
        "thumbSize": { "width": 32, "height": 28 },
        "alwaysShowValue": true,
        "hasTrackPoint": true,
        "tapToSeek": true,
        "roundToValue": 2,
        "labelFadeMs": 120,
        "initialRange": { "minimum": 15, "maximum": 30 }
    }"#;
    let cfg = SliderConfig::from_json(raw).unwrap();
    assert_eq!(cfg.minimum_value, 10.0);
    assert_eq!(cfg.maximum_value, 40.0);
    assert_eq!(cfg.track_width, Some(351.0));
    assert_eq!(cfg.thumb_size, ThumbSize { width: 32.0, height: 28.0 });
    assert!(cfg.always_show_value && cfg.has_track_point && cfg.tap_to_seek);
    assert_eq!(cfg.round_to_value, Some(2));
    assert_eq!(cfg.label_fade_ms, 120);
    assert_eq!(cfg.initial_range, Some(RangeValue::new(15.0, 30.0)));
}

#[test]
fn malformed_document_is_parse_error() {
    let err = SliderConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn wrong_field_type_is_parse_error() {
    let err = SliderConfig::from_json(r#"{"step": "big"}"#).unwrap_err();
    assert!(err.to_string().contains("failed to parse slider config"));
}

#[test]
fn config_roundtrips_through_json() {
    let cfg = SliderConfig { tap_to_seek: true, initial_value: Some(50.0), ..SliderConfig::new(0.0, 100.0, 25.0) };
    let raw = serde_json::to_string(&cfg).unwrap();
    assert!(raw.contains("\"tapToSeek\":true"));
    assert_eq!(SliderConfig::from_json(&raw).unwrap(), cfg);
}

#[test]
fn scale_validates_values() {
    assert_eq!(SliderConfig::new(0.0, 100.0, 25.0).scale().unwrap().total_steps, 4);
    assert_eq!(SliderConfig::new(0.0, 100.0, 0.0).scale(), Err(ConfigError::InvalidStep(0.0)));
}

#[test]
fn with_track_width_sets_width() {
    assert_eq!(SliderConfig::new(0.0, 1.0, 0.1).with_track_width(200.0).track_width, Some(200.0));
}

#[test]
fn fallback_value_is_minimum_when_finite() {
    assert_eq!(SliderConfig::new(5.0, 5.0, 1.0).fallback_value(), 5.0);
    assert_eq!(SliderConfig::new(f64::NAN, 5.0, 1.0).fallback_value(), DEFAULT_MINIMUM_VALUE);
}
