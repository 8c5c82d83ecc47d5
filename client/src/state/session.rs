//! Signed-in session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided at the app root as `RwSignal<SessionState>`. Route guards wait
//! for `loading` to clear before deciding to redirect; gamification writes
//! XP and badges back through [`SessionState::award_progress`].
//!
//! ERROR HANDLING
//! ==============
//! A stored user record that no longer parses is logged and both session
//! slots are removed. Other local data is left alone.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, User};
use crate::state::gamified::ProgressUpdate;
use crate::util::storage::{self, LocalStore, SESSION_TOKEN_KEY, SESSION_USER_KEY, StorageKey};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True until the stored session has been checked.
    pub loading: bool,
}

fn user_key() -> StorageKey {
    StorageKey::fixed(SESSION_USER_KEY)
}

fn token_key() -> StorageKey {
    StorageKey::fixed(SESSION_TOKEN_KEY)
}

impl SessionState {
    /// Initial state before restore has run.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, token: None, loading: true }
    }

    /// Rebuild the session from storage. Both slots must be present.
    pub fn restore<S: LocalStore + ?Sized>(store: &S) -> Self {
        let empty = Self::default();
        let token = match storage::load_text(store, &token_key()) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(err) => {
                log::warn!("session token unreadable: {err}");
                None
            }
        };
        match storage::load::<User, _>(store, &user_key()) {
            Ok(Some(user)) => match token {
                Some(token) => Self { user: Some(user), token: Some(token), loading: false },
                None => empty,
            },
            Ok(None) => empty,
            Err(err) => {
                storage::discard(store, &user_key(), &err);
                if let Err(remove_err) = store.remove(SESSION_TOKEN_KEY) {
                    log::warn!("could not remove session token: {remove_err}");
                }
                empty
            }
        }
    }

    pub fn login<S: LocalStore + ?Sized>(&mut self, user: User, token: String, store: &S) {
        storage::save_logged(store, &user_key(), &user);
        storage::save_logged(store, &token_key(), &token);
        log::info!("signed in as {} ({})", user.email, user.role.as_str());
        self.user = Some(user);
        self.token = Some(token);
        self.loading = false;
    }

    pub fn logout<S: LocalStore + ?Sized>(&mut self, store: &S) {
        for key in [SESSION_USER_KEY, SESSION_TOKEN_KEY] {
            if let Err(err) = store.remove(key) {
                log::warn!("could not remove `{key}`: {err}");
            }
        }
        self.user = None;
        self.token = None;
        self.loading = false;
    }

    /// Store new gamification totals on the user and persist the record.
    /// No-op when signed out.
    pub fn award_progress<S: LocalStore + ?Sized>(&mut self, update: ProgressUpdate, store: &S) {
        let Some(user) = self.user.as_mut() else {
            return;
        };
        user.xp = update.xp;
        user.level = update.level;
        user.badges = update.badges;
        storage::save_logged(store, &user_key(), user);
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Given name for greetings: the first word of the display name.
    #[must_use]
    pub fn first_name(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.name.split_whitespace().next())
            .unwrap_or_default()
            .to_owned()
    }
}
