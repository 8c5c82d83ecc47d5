use super::*;

#[test]
fn spanish_table_translates_known_keys() {
    assert_eq!(t(Language::Es, "tutor.title"), "Tutor de IA");
    assert_eq!(t(Language::Es, "quickActions.homeworkHelp"), "Ayuda con la tarea");
}

#[test]
fn languages_without_table_fall_back_to_english() {
    assert_eq!(t(Language::Fr, "tutor.title"), "AI Tutor");
    assert_eq!(t(Language::De, "questions.python"), "Python programming basics");
}

#[test]
fn unknown_key_falls_back_to_key() {
    assert_eq!(t(Language::Es, "tutor.nope"), "tutor.nope");
}

#[test]
fn every_english_key_has_spanish_entry() {
    for (key, _) in EN {
        assert_ne!(t(Language::Es, key), *key, "missing es entry for {key}");
    }
}

#[test]
fn from_code_accepts_region_tags() {
    assert_eq!(Language::from_code("es"), Some(Language::Es));
    assert_eq!(Language::from_code("en-US"), Some(Language::En));
    assert_eq!(Language::from_code("IT"), Some(Language::It));
    assert_eq!(Language::from_code("pt"), None);
}

#[test]
fn language_serializes_as_code() {
    assert_eq!(serde_json::to_string(&Language::De).unwrap(), "\"de\"");
    for lang in Language::ALL {
        assert_eq!(Language::from_code(lang.code()), Some(lang));
    }
}
