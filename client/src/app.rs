//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    accessibility::AccessibilityPage,
    landing::LandingPage,
    login::{StudentLoginPage, TeacherLoginPage},
    student_dashboard::StudentDashboardPage,
    teacher_dashboard::TeacherDashboardPage,
    verification::VerificationSuccessPage,
};
use crate::state::{accessibility::AccessibilitySettings, session::SessionState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, accessibility and UI contexts, restores the stored
/// session once mounted, and keeps the document root in sync with the
/// accessibility settings.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::pending());
    let accessibility = RwSignal::new(AccessibilitySettings::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(accessibility);
    provide_context(ui);

    // Effects only run in the browser, so SSR renders the pending session.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        session.set(SessionState::restore(&crate::util::storage::BrowserStore));
    });

    let settings_loaded = StoredValue::new(false);
    Effect::new(move || {
        let current = accessibility.get();
        #[cfg(feature = "hydrate")]
        {
            use crate::util::storage::BrowserStore;
            if !settings_loaded.get_value() {
                settings_loaded.set_value(true);
                let stored = AccessibilitySettings::load(&BrowserStore);
                if stored != current {
                    accessibility.set(stored);
                    return;
                }
            }
            crate::util::theme::apply(&current);
            current.persist(&BrowserStore);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (current, settings_loaded);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/edunexus.css"/>
        <Title text="EduNexus"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("student-login") view=StudentLoginPage/>
                <Route path=StaticSegment("teacher-login") view=TeacherLoginPage/>
                <Route path=StaticSegment("student") view=StudentDashboardPage/>
                <Route path=StaticSegment("teacher") view=TeacherDashboardPage/>
                <Route path=StaticSegment("accessibility") view=AccessibilityPage/>
                <Route path=StaticSegment("verification-success") view=VerificationSuccessPage/>
            </Routes>
        </Router>
    }
}
