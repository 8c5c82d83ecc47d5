//! Signed-in page chrome: brand, navigation, lesson search, notifications,
//! identity and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the dashboards and the accessibility center. The search box writes
//! `UiState::search_query`, which the student lesson list reads.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::accessibility::{AccessibilitySettings, Feature};
use crate::state::session::SessionState;
use crate::state::ui::{NOTIFICATIONS, UiState};
use crate::util::storage::BrowserStore;

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let settings = expect_context::<RwSignal<AccessibilitySettings>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        if let Some(user_id) = session.get_untracked().user_id() {
            log::info!("logout user_id={user_id}");
        }
        session.update(|s| s.logout(&BrowserStore));
        ui.set(UiState::default());
        navigate("/", NavigateOptions::default());
    };

    let user_name = move || session.get().user.map(|u| u.name).unwrap_or_default();
    let user_role = move || session.get().role().map(|r| r.as_str()).unwrap_or_default();
    let user_photo = move || session.get().user.and_then(|u| u.photo);

    let active_features = move || {
        let current = settings.get();
        [Feature::TextToSpeech, Feature::HighContrast, Feature::DyslexiaFont]
            .into_iter()
            .filter(|f| current.is_enabled(*f))
            .map(Feature::title)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="dashboard">
            <nav class="dashboard__nav">
                <div class="dashboard__nav-left">
                    <span class="brand">"🎓 EduNexus"</span>
                    <a class="btn btn--ghost btn--sm" href="/">"🏠 Home"</a>
                    <a class="btn btn--ghost btn--sm" href="/accessibility">"♿ Accessibility"</a>
                </div>

                <form class="dashboard__search" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                    <input
                        type="search"
                        placeholder="Search lessons, assignments, or resources..."
                        prop:value=move || ui.get().search_query
                        on:input=move |ev| ui.update(|u| u.search_query = event_target_value(&ev))
                    />
                </form>

                <div class="dashboard__nav-right">
                    <div class="notifications">
                        <button
                            class="btn btn--ghost btn--sm"
                            title="Notifications"
                            on:click=move |_| ui.update(UiState::toggle_notifications)
                        >
                            "🔔"
                        </button>
                        <Show when=move || ui.get().notifications_open>
                            <div class="notifications__menu">
                                <h4>"Notifications"</h4>
                                <ul>
                                    {NOTIFICATIONS.iter().map(|n| view! { <li>{*n}</li> }).collect_view()}
                                </ul>
                            </div>
                        </Show>
                    </div>

                    <div class="dashboard__identity">
                        {move || {
                            user_photo()
                                .map(|src| view! { <img class="avatar" src=src alt="Profile photo"/> })
                        }}
                        <div>
                            <div class="dashboard__name">{user_name}</div>
                            <div class="dashboard__role">{user_role}</div>
                        </div>
                    </div>

                    <button class="btn btn--ghost btn--sm" title="Logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </nav>

            <main class="dashboard__main">{children()}</main>

            <Show when=move || !active_features().is_empty()>
                <aside class="a11y-badge">
                    <div class="a11y-badge__title">"Active Accessibility:"</div>
                    {move || {
                        active_features()
                            .into_iter()
                            .map(|title| view! { <div>"• " {title}</div> })
                            .collect_view()
                    }}
                </aside>
            </Show>
        </div>
    }
}
