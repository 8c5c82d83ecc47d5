use super::*;

#[test]
fn scoped_key_joins_prefix_and_user_id() {
    assert_eq!(StorageKey::scoped(Namespace::StudyTasks, "u1").as_str(), "study_tasks_u1");
    assert_eq!(StorageKey::scoped(Namespace::Mood, "u1").as_str(), "mood_u1");
    assert_eq!(StorageKey::scoped(Namespace::Journal, "u1").as_str(), "journal_u1");
    assert_eq!(
        StorageKey::scoped(Namespace::CompletedLessons, "u1").as_str(),
        "completed_lessons_u1"
    );
}

#[test]
fn load_absent_key_is_none() {
    let store = MemoryStore::new();
    let key = StorageKey::fixed("missing");
    let value: Option<Vec<String>> = load(&store, &key).unwrap();
    assert!(value.is_none());
}

#[test]
fn save_then_load_returns_value() {
    let store = MemoryStore::new();
    let key = StorageKey::scoped(Namespace::CompletedLessons, "u1");
    save(&store, &key, &vec!["algebra-1".to_owned()]).unwrap();
    let loaded: Option<Vec<String>> = load(&store, &key).unwrap();
    assert_eq!(loaded, Some(vec!["algebra-1".to_owned()]));
}

#[test]
fn save_overwrites_whole_value() {
    let store = MemoryStore::new();
    let key = StorageKey::fixed("k");
    save(&store, &key, &vec![1, 2, 3]).unwrap();
    save(&store, &key, &vec![4]).unwrap();
    assert_eq!(store.get_raw("k").unwrap().as_deref(), Some("[4]"));
}

#[test]
fn load_malformed_value_reports_key() {
    let store = MemoryStore::new();
    store.set_raw("study_tasks_u1", "{not json").unwrap();
    let key = StorageKey::scoped(Namespace::StudyTasks, "u1");
    let err = load::<Vec<String>, _>(&store, &key).unwrap_err();
    assert!(matches!(err, StorageError::Malformed { ref key, .. } if key == "study_tasks_u1"));
}

#[test]
fn load_wrong_shape_is_malformed() {
    let store = MemoryStore::new();
    store.set_raw("k", r#"{"a":1}"#).unwrap();
    let err = load::<Vec<String>, _>(&store, &StorageKey::fixed("k")).unwrap_err();
    assert!(matches!(err, StorageError::Malformed { .. }));
}

#[test]
fn load_or_default_recovers_and_removes_malformed_key() {
    let store = MemoryStore::new();
    store.set_raw("k", "garbage").unwrap();
    store.set_raw("other", "1").unwrap();
    let value: Vec<u32> = load_or_default(&store, &StorageKey::fixed("k"));
    assert!(value.is_empty());
    assert!(store.get_raw("k").unwrap().is_none());
    assert_eq!(store.get_raw("other").unwrap().as_deref(), Some("1"));
}

#[test]
fn load_text_accepts_json_and_bare_strings() {
    let store = MemoryStore::new();
    save(&store, &StorageKey::fixed("json"), "calm day").unwrap();
    store.set_raw("bare", "happy").unwrap();
    assert_eq!(load_text(&store, &StorageKey::fixed("json")).unwrap().as_deref(), Some("calm day"));
    assert_eq!(load_text(&store, &StorageKey::fixed("bare")).unwrap().as_deref(), Some("happy"));
}

#[test]
fn memory_store_clear_removes_everything() {
    let store = MemoryStore::new();
    store.set_raw("a", "1").unwrap();
    store.set_raw("b", "2").unwrap();
    assert_eq!(store.len(), 2);
    store.clear().unwrap();
    assert!(store.is_empty());
}

#[test]
fn browser_store_is_inert_outside_browser() {
    let store = BrowserStore;
    store.set_raw("k", "v").unwrap();
    assert!(store.get_raw("k").unwrap().is_none());
}
