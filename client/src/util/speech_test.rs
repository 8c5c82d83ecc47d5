#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::accessibility::SettingsUpdate;

#[test]
fn speak_requires_toggle_and_text() {
    let mut settings = AccessibilitySettings::default();
    assert!(!should_speak(&settings, "hello"));
    settings.apply(SettingsUpdate::TextToSpeech(true));
    assert!(should_speak(&settings, "hello"));
    assert!(!should_speak(&settings, "   "));
}

#[test]
fn speak_outside_browser_queues_nothing() {
    let mut settings = AccessibilitySettings::default();
    settings.apply(SettingsUpdate::TextToSpeech(true));
    assert!(!speak(&settings, "hello"));
}

#[test]
fn check_listen_reports_disabled_before_support() {
    let settings = AccessibilitySettings::default();
    assert_eq!(check_listen(&settings, false), Err(SpeechError::Disabled));
}

#[test]
fn check_listen_reports_unsupported_when_enabled() {
    let mut settings = AccessibilitySettings::default();
    settings.apply(SettingsUpdate::SpeechToText(true));
    assert_eq!(check_listen(&settings, false), Err(SpeechError::Unsupported));
    assert_eq!(check_listen(&settings, true), Ok(()));
}

#[test]
fn listen_outside_browser_is_unsupported() {
    let mut settings = AccessibilitySettings::default();
    settings.apply(SettingsUpdate::SpeechToText(true));
    assert!(matches!(listen(&settings, |_| {}, || {}), Err(SpeechError::Unsupported)));
}

// =============================================================================
// Listener
// =============================================================================

#[test]
fn listener_holds_nothing_after_failed_start() {
    let mut settings = AccessibilitySettings::default();
    settings.apply(SettingsUpdate::SpeechToText(true));
    let mut listener = Listener::default();
    assert_eq!(listener.start(&settings, |_| {}, || {}), Err(SpeechError::Unsupported));
    assert!(!listener.is_holding());
}

#[test]
fn listener_releases_previous_session_on_restart() {
    let mut listener = Listener { session: Some(ListenSession::default()) };
    assert!(listener.is_holding());

    let settings = AccessibilitySettings::default();
    assert_eq!(listener.start(&settings, |_| {}, || {}), Err(SpeechError::Disabled));
    assert!(!listener.is_holding());
}

#[test]
fn listener_stop_drops_session() {
    let mut listener = Listener { session: Some(ListenSession::default()) };
    listener.stop();
    assert!(!listener.is_holding());
}
