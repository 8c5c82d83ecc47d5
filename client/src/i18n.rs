//! UI string tables.
//!
//! Lookups go through [`t`] with a dotted key (`"tutor.title"`). Only English
//! and Spanish carry tables; every other language, and any key missing from a
//! table, falls back to English and finally to the key itself.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use serde::{Deserialize, Serialize};

/// Interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    It,
}

impl Language {
    pub const ALL: [Self; 5] = [Self::En, Self::Es, Self::Fr, Self::De, Self::It];

    /// BCP 47 primary tag, used for `lang` attributes and speech APIs.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::It => "it",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or(code);
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(primary))
    }

    /// Name of the language written in itself.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::De => "Deutsch",
            Self::It => "Italiano",
        }
    }

    #[must_use]
    pub fn flag(self) -> &'static str {
        match self {
            Self::En => "🇺🇸",
            Self::Es => "🇪🇸",
            Self::Fr => "🇫🇷",
            Self::De => "🇩🇪",
            Self::It => "🇮🇹",
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("tutor.title", "AI Tutor"),
    (
        "tutor.initialMessage",
        "Hi! I'm your AI tutor. I can help you with any subject - math, science, history, and more. What would you like to learn today?",
    ),
    ("tutor.errorResponse", "Sorry, I'm having trouble connecting right now. Please try again later."),
    ("tutor.suggestedQuestions", "Suggested questions"),
    ("tutor.placeholder", "Ask me anything about any subject..."),
    ("tutor.settings", "Tutor Settings"),
    ("tutor.language", "Language"),
    ("languages.en", "English"),
    ("languages.es", "Spanish"),
    ("languages.fr", "French"),
    ("languages.de", "German"),
    ("languages.it", "Italian"),
    ("settings.highContrast", "High Contrast"),
    ("settings.dyslexiaFont", "Dyslexia-Friendly Font"),
    ("settings.speechToText", "Speech-to-Text"),
    ("questions.quadratic", "Explain quadratic equations"),
    ("questions.photosynthesis", "Help with photosynthesis"),
    ("questions.wwii", "World War II timeline"),
    ("questions.python", "Python programming basics"),
    ("quickActions.homeworkHelp", "Homework Help"),
    ("quickActions.conceptExplanation", "Concept Explanation"),
    ("quickActions.practiceProblems", "Practice Questions"),
];

const ES: &[(&str, &str)] = &[
    ("tutor.title", "Tutor de IA"),
    (
        "tutor.initialMessage",
        "¡Hola! Soy tu tutor de IA. Puedo ayudarte con cualquier materia: matemáticas, ciencias, historia y más. ¿Qué te gustaría aprender hoy?",
    ),
    (
        "tutor.errorResponse",
        "Lo siento, tengo problemas para conectarme en este momento. Por favor, inténtalo de nuevo más tarde.",
    ),
    ("tutor.suggestedQuestions", "Preguntas sugeridas"),
    ("tutor.placeholder", "Pregúntame cualquier cosa sobre cualquier materia..."),
    ("tutor.settings", "Configuración del Tutor"),
    ("tutor.language", "Idioma"),
    ("languages.en", "Inglés"),
    ("languages.es", "Español"),
    ("languages.fr", "Francés"),
    ("languages.de", "Alemán"),
    ("languages.it", "Italiano"),
    ("settings.highContrast", "Alto Contraste"),
    ("settings.dyslexiaFont", "Fuente para dislexia"),
    ("settings.speechToText", "Voz a texto"),
    ("questions.quadratic", "Explicar ecuaciones cuadráticas"),
    ("questions.photosynthesis", "Ayuda con la fotosíntesis"),
    ("questions.wwii", "Línea de tiempo de la Segunda Guerra Mundial"),
    ("questions.python", "Conceptos básicos de programación en Python"),
    ("quickActions.homeworkHelp", "Ayuda con la tarea"),
    ("quickActions.conceptExplanation", "Explicación de conceptos"),
    ("quickActions.practiceProblems", "Preguntas de práctica"),
];

/// Keys of the suggested tutor questions, in display order.
pub const SUGGESTED_QUESTION_KEYS: [&str; 4] =
    ["questions.quadratic", "questions.photosynthesis", "questions.wwii", "questions.python"];

/// Keys of the tutor quick actions, in display order.
pub const QUICK_ACTION_KEYS: [&str; 3] = [
    "quickActions.homeworkHelp",
    "quickActions.conceptExplanation",
    "quickActions.practiceProblems",
];

fn table(lang: Language) -> Option<&'static [(&'static str, &'static str)]> {
    match lang {
        Language::En => Some(EN),
        Language::Es => Some(ES),
        Language::Fr | Language::De | Language::It => None,
    }
}

fn lookup(entries: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Translate `key` for `lang`.
pub fn t<'a>(lang: Language, key: &'a str) -> &'a str {
    table(lang)
        .and_then(|entries| lookup(entries, key))
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
}
