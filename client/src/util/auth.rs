//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboard routes apply identical unauthenticated redirect behavior, each
//! sending the visitor to its own role's login page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::session::SessionState;

/// True once session restore has finished and nobody is signed in.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.user.is_none()
}

/// The signed-in user's role when it differs from `expected`.
pub fn wrong_role(state: &SessionState, expected: Role) -> Option<Role> {
    state
        .user
        .as_ref()
        .map(|u| u.role)
        .filter(|role| *role != expected)
}

/// Redirect to `role`'s login page whenever the session has loaded and no
/// user is present, or to the user's own dashboard when the role differs.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, role: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if should_redirect_unauth(&state) {
            navigate(role.login_path(), NavigateOptions::default());
        } else if let Some(actual) = wrong_role(&state, role) {
            navigate(actual.dashboard_path(), NavigateOptions::default());
        }
    });
}
