use super::*;
use crate::util::storage::MemoryStore;

fn user(name: &str) -> User {
    User {
        id: "u1".to_owned(),
        name: name.to_owned(),
        email: "ana@example.com".to_owned(),
        role: Role::Student,
        grade: Some("N/A".to_owned()),
        photo: None,
        is_verified: true,
        xp: 0,
        level: 1,
        badges: Vec::new(),
    }
}

#[test]
fn pending_session_is_loading() {
    let state = SessionState::pending();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn login_then_restore_round_trips() {
    let store = MemoryStore::new();
    let mut state = SessionState::pending();
    state.login(user("Ana Lopez"), "tok".to_owned(), &store);
    assert!(!state.loading);

    let restored = SessionState::restore(&store);
    assert_eq!(restored.user, Some(user("Ana Lopez")));
    assert_eq!(restored.token.as_deref(), Some("tok"));
    assert!(!restored.loading);
}

#[test]
fn restore_accepts_legacy_bare_token() {
    let store = MemoryStore::new();
    storage::save(&store, &StorageKey::fixed(SESSION_USER_KEY), &user("Ana")).unwrap();
    store.set_raw(SESSION_TOKEN_KEY, "bare-token").unwrap();
    let restored = SessionState::restore(&store);
    assert_eq!(restored.token.as_deref(), Some("bare-token"));
}

#[test]
fn restore_without_token_is_signed_out() {
    let store = MemoryStore::new();
    storage::save(&store, &StorageKey::fixed(SESSION_USER_KEY), &user("Ana")).unwrap();
    let restored = SessionState::restore(&store);
    assert!(restored.user.is_none());
    assert!(!restored.loading);
}

#[test]
fn malformed_user_clears_session_slots_only() {
    let store = MemoryStore::new();
    store.set_raw(SESSION_USER_KEY, "{broken").unwrap();
    store.set_raw(SESSION_TOKEN_KEY, "\"tok\"").unwrap();
    store.set_raw("study_tasks_u1", "[]").unwrap();

    let restored = SessionState::restore(&store);
    assert!(restored.user.is_none());
    assert!(store.get_raw(SESSION_USER_KEY).unwrap().is_none());
    assert!(store.get_raw(SESSION_TOKEN_KEY).unwrap().is_none());
    assert_eq!(store.get_raw("study_tasks_u1").unwrap().as_deref(), Some("[]"));
}

#[test]
fn logout_clears_memory_and_storage() {
    let store = MemoryStore::new();
    let mut state = SessionState::default();
    state.login(user("Ana"), "tok".to_owned(), &store);
    state.logout(&store);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(store.is_empty());
}

#[test]
fn award_progress_updates_and_persists_user() {
    let store = MemoryStore::new();
    let mut state = SessionState::default();
    state.login(user("Ana"), "tok".to_owned(), &store);
    state.award_progress(
        ProgressUpdate { xp: 250, level: 2, badges: vec!["Perfect Score".to_owned()] },
        &store,
    );
    let stored: User = storage::load(&store, &StorageKey::fixed(SESSION_USER_KEY)).unwrap().unwrap();
    assert_eq!(stored.xp, 250);
    assert_eq!(stored.level, 2);
    assert_eq!(stored.badges, vec!["Perfect Score".to_owned()]);
    assert_eq!(state.user.unwrap().xp, 250);
}

#[test]
fn award_progress_when_signed_out_is_noop() {
    let store = MemoryStore::new();
    let mut state = SessionState::default();
    state.award_progress(ProgressUpdate { xp: 10, level: 1, badges: Vec::new() }, &store);
    assert!(store.is_empty());
}

#[test]
fn first_name_uses_first_word() {
    let state = SessionState { user: Some(user("Ana Lopez")), token: None, loading: false };
    assert_eq!(state.first_name(), "Ana");
    assert_eq!(SessionState::default().first_name(), "");
}

#[test]
fn award_progress_keeps_user_id() {
    let store = MemoryStore::new();
    let mut state = SessionState::default();
    state.login(user("Ana"), "tok".to_owned(), &store);
    let before = state.user_id().map(str::to_owned);
    state.award_progress(ProgressUpdate { xp: 40, level: 1, badges: Vec::new() }, &store);
    assert_eq!(state.user_id().map(str::to_owned), before);
    assert!(before.is_some());
}
