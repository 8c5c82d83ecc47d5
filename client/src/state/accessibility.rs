//! Accessibility preferences shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided at the app root as `RwSignal<AccessibilitySettings>`. The theme
//! helper mirrors these values onto the document root, the speech helpers
//! consult them before speaking or listening, and the tutor uses the language.

#[cfg(test)]
#[path = "accessibility_test.rs"]
mod accessibility_test;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::util::storage::{self, ACCESSIBILITY_KEY, LocalStore, StorageKey};

/// Base text size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilitySettings {
    pub text_to_speech: bool,
    pub speech_to_text: bool,
    pub high_contrast: bool,
    pub dyslexia_font: bool,
    pub language: Language,
    pub font_size: FontSize,
}

/// A single-field change. Applying one leaves every other field untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsUpdate {
    TextToSpeech(bool),
    SpeechToText(bool),
    HighContrast(bool),
    DyslexiaFont(bool),
    Language(Language),
    FontSize(FontSize),
}

/// Boolean feature toggles shown on the accessibility page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    TextToSpeech,
    SpeechToText,
    HighContrast,
    DyslexiaFont,
}

impl Feature {
    pub const ALL: [Self; 4] =
        [Self::TextToSpeech, Self::SpeechToText, Self::HighContrast, Self::DyslexiaFont];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::TextToSpeech => "Text-to-Speech",
            Self::SpeechToText => "Speech-to-Text",
            Self::HighContrast => "High Contrast Mode",
            Self::DyslexiaFont => "Dyslexia-Friendly Font",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::TextToSpeech => "Have content read aloud to you",
            Self::SpeechToText => "Use voice commands for input",
            Self::HighContrast => "Increase visibility with enhanced contrast",
            Self::DyslexiaFont => "Use fonts optimized for dyslexia",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::TextToSpeech => "🔊",
            Self::SpeechToText => "🎤",
            Self::HighContrast => "🎨",
            Self::DyslexiaFont => "🔤",
        }
    }
}

impl AccessibilitySettings {
    /// Load persisted settings, defaulting when absent or malformed.
    pub fn load<S: LocalStore + ?Sized>(store: &S) -> Self {
        storage::load_or_default(store, &StorageKey::fixed(ACCESSIBILITY_KEY))
    }

    pub fn persist<S: LocalStore + ?Sized>(&self, store: &S) {
        storage::save_logged(store, &StorageKey::fixed(ACCESSIBILITY_KEY), self);
    }

    pub fn apply(&mut self, update: SettingsUpdate) {
        match update {
            SettingsUpdate::TextToSpeech(on) => self.text_to_speech = on,
            SettingsUpdate::SpeechToText(on) => self.speech_to_text = on,
            SettingsUpdate::HighContrast(on) => self.high_contrast = on,
            SettingsUpdate::DyslexiaFont(on) => self.dyslexia_font = on,
            SettingsUpdate::Language(lang) => self.language = lang,
            SettingsUpdate::FontSize(size) => self.font_size = size,
        }
    }

    #[must_use]
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::TextToSpeech => self.text_to_speech,
            Feature::SpeechToText => self.speech_to_text,
            Feature::HighContrast => self.high_contrast,
            Feature::DyslexiaFont => self.dyslexia_font,
        }
    }

    /// The update that flips `feature`.
    #[must_use]
    pub fn toggle(&self, feature: Feature) -> SettingsUpdate {
        let next = !self.is_enabled(feature);
        match feature {
            Feature::TextToSpeech => SettingsUpdate::TextToSpeech(next),
            Feature::SpeechToText => SettingsUpdate::SpeechToText(next),
            Feature::HighContrast => SettingsUpdate::HighContrast(next),
            Feature::DyslexiaFont => SettingsUpdate::DyslexiaFont(next),
        }
    }
}

/// One-click combinations offered by the accessibility center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Reset,
    VisualAssistance,
    AudioAssistance,
}

impl Preset {
    pub const ALL: [Self; 3] = [Self::Reset, Self::VisualAssistance, Self::AudioAssistance];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Reset => "Reset All Settings",
            Self::VisualAssistance => "Visual Assistance Mode",
            Self::AudioAssistance => "Audio Assistance Mode",
        }
    }

    /// Reset keeps the language.
    #[must_use]
    pub fn updates(self) -> &'static [SettingsUpdate] {
        match self {
            Self::Reset => &[
                SettingsUpdate::TextToSpeech(false),
                SettingsUpdate::SpeechToText(false),
                SettingsUpdate::HighContrast(false),
                SettingsUpdate::DyslexiaFont(false),
                SettingsUpdate::FontSize(FontSize::Medium),
            ],
            Self::VisualAssistance => &[
                SettingsUpdate::TextToSpeech(true),
                SettingsUpdate::HighContrast(true),
                SettingsUpdate::FontSize(FontSize::Large),
            ],
            Self::AudioAssistance => &[SettingsUpdate::TextToSpeech(true), SettingsUpdate::SpeechToText(true)],
        }
    }
}

impl AccessibilitySettings {
    pub fn apply_preset(&mut self, preset: Preset) {
        for update in preset.updates() {
            self.apply(*update);
        }
    }
}

/// Sign-language helper vocabulary: word and its visual cue.
pub const SIGN_WORDS: [(&str, &str); 8] = [
    ("Hello", "👋"),
    ("Thank you", "🙏"),
    ("Yes", "👍"),
    ("No", "👎"),
    ("Help", "🤝"),
    ("Good", "✅"),
    ("Learn", "📚"),
    ("Study", "📖"),
];
