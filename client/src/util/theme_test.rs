#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::i18n::Language;
use crate::state::accessibility::{FontSize, SettingsUpdate};

#[test]
fn default_settings_map_to_normal_attributes() {
    let attrs = root_attributes(&AccessibilitySettings::default());
    assert_eq!(
        attrs,
        [
            ("data-contrast", "normal"),
            ("data-font", "default"),
            ("data-font-size", "medium"),
            ("lang", "en"),
        ]
    );
}

#[test]
fn enabled_settings_map_to_attribute_values() {
    let mut settings = AccessibilitySettings::default();
    settings.apply(SettingsUpdate::HighContrast(true));
    settings.apply(SettingsUpdate::DyslexiaFont(true));
    settings.apply(SettingsUpdate::FontSize(FontSize::Large));
    settings.apply(SettingsUpdate::Language(Language::Fr));
    let attrs = root_attributes(&settings);
    assert_eq!(attrs[0], ("data-contrast", "high"));
    assert_eq!(attrs[1], ("data-font", "dyslexic"));
    assert_eq!(attrs[2], ("data-font-size", "large"));
    assert_eq!(attrs[3], ("lang", "fr"));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(&AccessibilitySettings::default());
}
