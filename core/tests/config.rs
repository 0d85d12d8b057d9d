use folio_core::config::{ConfigError, SnapSettings};
use folio_core::ease::Ease;

#[test]
fn defaults_match_tuning_constants() {
    let settings = SnapSettings::default();
    assert!(settings.enabled);
    assert_eq!(settings.buffer, 0.02);
    assert_eq!(settings.duration_min, 0.15);
    assert_eq!(settings.duration_max, 0.35);
    assert_eq!(settings.settle_delay_ms, 100);
    assert_eq!(settings.min_viewport_width, 768);
    assert_eq!(settings.ease, Ease::Power2Out);
    assert!(settings.validate().is_ok());
}

#[test]
fn overrides_apply() {
    let mut settings = SnapSettings::default();
    settings.apply_override("snap_buffer", "0.05").expect("buffer");
    settings.apply_override("snap_min_width", "1024").expect("width");
    settings.apply_override("snap_ease", "power3.out").expect("ease");
    settings.apply_override("snap", "off").expect("toggle");
    assert_eq!(settings.buffer, 0.05);
    assert_eq!(settings.min_viewport_width, 1024);
    assert_eq!(settings.ease, Ease::Power3Out);
    assert!(!settings.enabled);
}

#[test]
fn bad_overrides_leave_settings_untouched() {
    let mut settings = SnapSettings::default();
    assert!(matches!(
        settings.apply_override("snap_buffer", "wide"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        settings.apply_override("snap_buffer", "-0.1"),
        Err(ConfigError::Buffer(_))
    ));
    assert!(matches!(
        settings.apply_override("snap_min", "0.9"),
        Err(ConfigError::DurationRange { .. })
    ));
    assert!(matches!(
        settings.apply_override("zoom", "2"),
        Err(ConfigError::UnknownKey(_))
    ));
    assert_eq!(settings, SnapSettings::default());
}

#[test]
fn width_gate_respects_toggle() {
    let mut settings = SnapSettings::default();
    assert!(settings.active_for_width(1280.0));
    assert!(!settings.active_for_width(600.0));
    settings.enabled = false;
    assert!(!settings.active_for_width(1280.0));
}
