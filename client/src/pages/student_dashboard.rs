//! Student dashboard: welcome banner, overview cards and feature tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the student's task list signal (shared by the overview's upcoming
//! card and the planner tab) and the account deletion flow. Redirects to
//! `/student-login` once the session has loaded without a user.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::gamified_learning::GamifiedLearning;
use crate::components::progress_ring::ProgressRing;
use crate::components::study_planner::StudyPlanner;
use crate::components::tutor_chat::TutorChatPanel;
use crate::components::wellness_center::WellnessCenter;
use crate::net::api::{self, DELETE_ACCOUNT_FAILED};
use crate::net::types::Role;
use crate::state::gamified::{CompletedLessons, LESSONS, level_progress_percent};
use crate::state::overview::{
    LEARNING_MODULES, RECENT_BADGES, STREAK_DAYS, WEEKLY_GOAL_PERCENT, badge_icon, quote_for_weekday,
};
use crate::state::planner::TaskList;
use crate::state::session::SessionState;
use crate::state::ui::{StudentTab, UiState};
use crate::util::auth::install_unauth_redirect;
use crate::util::clock::{display_date, today_iso, weekday_from_sunday};
use crate::util::storage::BrowserStore;

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, Role::Student, navigate.clone());

    let tasks = RwSignal::new(TaskList::default());
    let completed_count = RwSignal::new(0_usize);
    // Reload only when the signed-in user changes.
    let user_id = Memo::new(move |_| session.with(|s| s.user_id().map(str::to_owned)));
    Effect::new(move || {
        if let Some(user_id) = user_id.get() {
            tasks.set(TaskList::load(&BrowserStore, &user_id));
            completed_count.set(CompletedLessons::load(&BrowserStore, &user_id).len());
        }
    });

    let delete_error = RwSignal::new(None::<String>);
    let delete_requested = RwSignal::new(false);
    let on_delete_cancel = Callback::new(move |()| ui.update(|u| u.confirm_delete_open = false));
    let on_delete_confirm = Callback::new(move |()| delete_requested.set(true));

    Effect::new(move || {
        if !delete_requested.get() {
            return;
        }
        delete_requested.set(false);
        let Some(token) = session.get_untracked().token else {
            ui.update(|u| u.confirm_delete_open = false);
            return;
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::delete_account(&token).await {
                Ok(_) => {
                    if let Some(user_id) = session.get_untracked().user_id() {
                        log::info!("account deleted user_id={user_id}");
                    }
                    session.update(|s| s.logout(&BrowserStore));
                    ui.set(UiState::default());
                    navigate(Role::Student.login_path(), NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("delete account failed: {err}");
                    delete_error.set(Some(err.user_message(DELETE_ACCOUNT_FAILED)));
                    ui.update(|u| u.confirm_delete_open = false);
                }
            }
        });
    });

    let level = move || session.get().user.map_or(1, |u| u.level);
    let xp = move || session.get().user.map_or(0, |u| u.xp);

    let tab_content = move || match ui.get().student_tab {
        StudentTab::Overview => view! { <StudentOverview tasks=tasks completed_count=completed_count/> }.into_any(),
        StudentTab::Tutor => view! { <TutorChatPanel/> }.into_any(),
        StudentTab::Gamified => view! { <GamifiedLearning/> }.into_any(),
        StudentTab::Planner => view! { <StudyPlanner tasks=tasks/> }.into_any(),
        StudentTab::Wellness => view! { <WellnessCenter/> }.into_any(),
    };

    view! {
        <DashboardLayout>
            <div class="stack">
                <section class="card card--hero">
                    <div class="row row--between">
                        <div>
                            <h1>"Welcome back, " {move || session.get().first_name()} "!"</h1>
                            <p>{quote_for_weekday(weekday_from_sunday())}</p>
                        </div>
                        <div class="hero__stats">
                            <div class="hero__level">"Level " {level}</div>
                            <div>{xp} " XP"</div>
                            <div class="bar bar--light">
                                <div class="bar__fill" style:width=move || format!("{}%", level_progress_percent(xp()))></div>
                            </div>
                        </div>
                    </div>
                </section>

                <nav class="tabs">
                    {StudentTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || ui.get().student_tab == tab
                                    on:click=move |_| ui.update(|u| u.student_tab = tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                {tab_content}

                {move || delete_error.get().map(|msg| view! { <p class="error">{msg}</p> })}

                <section class="card card--danger">
                    <div class="row row--between">
                        <div>
                            <h3>"Delete Account"</h3>
                            <p class="muted">"Permanently remove your account and all of your data."</p>
                        </div>
                        <button
                            class="btn btn--danger"
                            on:click=move |_| {
                                delete_error.set(None);
                                ui.update(|u| u.confirm_delete_open = true);
                            }
                        >
                            "Delete Account"
                        </button>
                    </div>
                </section>

                <Show when=move || ui.get().confirm_delete_open>
                    <DeleteAccountDialog on_cancel=on_delete_cancel on_confirm=on_delete_confirm/>
                </Show>
            </div>
        </DashboardLayout>
    }
}

#[component]
fn StudentOverview(tasks: RwSignal<TaskList>, completed_count: RwSignal<usize>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let badges = move || session.get().user.map(|u| u.badges).unwrap_or_default();
    let lessons = move || {
        let state = ui.get();
        let query = state.active_query().unwrap_or_default();
        LESSONS.iter().filter(|l| l.matches(query)).collect::<Vec<_>>()
    };
    let upcoming = move || tasks.with(|list| list.upcoming(&today_iso()));

    view! {
        <div class="grid-4">
            <div class="card card--center">
                <ProgressRing progress=f64::from(WEEKLY_GOAL_PERCENT)/>
                <div class="stat__value">{WEEKLY_GOAL_PERCENT} "%"</div>
                <div class="stat__label">"Weekly Goal"</div>
            </div>
            <div class="card">
                <div class="stat__value">"⚡ " {STREAK_DAYS}</div>
                <div class="stat__label">"Day Streak"</div>
            </div>
            <div class="card">
                <div class="stat__value">"📘 " {move || completed_count.get()}</div>
                <div class="stat__label">"Lessons Completed"</div>
            </div>
            <div class="card">
                <div class="stat__value">"🏅 " {move || badges().len()}</div>
                <div class="stat__label">"Badges Earned"</div>
            </div>
        </div>

        <section class="card">
            <h2>"🎯 Your Learning Hub"</h2>
            <div class="grid-4">
                {LEARNING_MODULES
                    .iter()
                    .map(|module| {
                        let tab = module.tab;
                        view! {
                            <button class="hub-card" on:click=move |_| ui.update(|u| u.student_tab = tab)>
                                <span class="hub-card__icon">{module.icon}</span>
                                <strong>{module.title}</strong>
                                <span class="muted">{module.description}</span>
                                <span class="hub-card__open">"Open ›"</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="card">
            <h2>"📚 Available Lessons"</h2>
            {move || {
                let found = lessons();
                if found.is_empty() {
                    let query = ui.get().search_query;
                    view! {
                        <div class="empty">
                            <p>"🔍"</p>
                            <p>"No lessons found for \"" {query} "\". Try a different keyword!"</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="grid-3">
                            {found
                                .into_iter()
                                .map(|lesson| {
                                    view! {
                                        <div class="lesson-card">
                                            <div class="lesson-card__head">
                                                <h3>{lesson.title}</h3>
                                                <span class="muted">{lesson.level}</span>
                                            </div>
                                            <p>{lesson.description}</p>
                                            <div class="lesson-card__foot">
                                                <span class="muted">"⚡ " {lesson.xp} " XP"</span>
                                                <span class="muted">"⏱ " {lesson.duration}</span>
                                            </div>
                                            <button class="btn btn--block" on:click=move |_| ui.update(|u| u.open_lesson(lesson.id))>
                                                "Start"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>

        <div class="grid-2">
            <section class="card">
                <h3>"⭐ Recent Badges"</h3>
                {move || {
                    let earned = badges();
                    if earned.is_empty() {
                        RECENT_BADGES
                            .iter()
                            .map(|b| view! {
                                <div class="badge-row">
                                    <span class="badge-row__icon">{b.icon}</span>
                                    <div>
                                        <strong>{b.name}</strong>
                                        <div class="muted">{b.description}</div>
                                    </div>
                                </div>
                            })
                            .collect_view()
                            .into_any()
                    } else {
                        earned
                            .into_iter()
                            .rev()
                            .map(|name| view! {
                                <div class="badge-row">
                                    <span class="badge-row__icon">{badge_icon(&name)}</span>
                                    <strong>{name}</strong>
                                </div>
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </section>
            <section class="card">
                <h3>"⏰ Upcoming Tasks"</h3>
                {move || {
                    let due = upcoming();
                    if due.is_empty() {
                        view! { <p class="muted">"Nothing due. Add tasks in the Study Planner."</p> }.into_any()
                    } else {
                        let today = today_iso();
                        due.into_iter()
                            .map(|task| {
                                let urgent = task.due_date == today;
                                view! {
                                    <div class="task-row" class:task-row--urgent=urgent>
                                        <div>
                                            <strong>{task.title}</strong>
                                            <div class="muted">{task.subject}</div>
                                        </div>
                                        <span>{display_date(&task.due_date)}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}

/// Confirmation before the irreversible account deletion call.
#[component]
fn DeleteAccountDialog(on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Are you absolutely sure?"</h2>
                <p class="dialog__danger">
                    "This action cannot be undone. This will permanently delete your account and remove your data from our servers."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete Account"
                    </button>
                </div>
            </div>
        </div>
    }
}
