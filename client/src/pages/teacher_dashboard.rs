//! Teacher dashboard: classroom overview, analytics and teaching tools.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::attendance_tool::AttendanceTool;
use crate::components::dashboard_layout::DashboardLayout;
use crate::components::engagement_chart::EngagementChart;
use crate::components::grading_tool::GradingToolPanel;
use crate::components::lesson_planner::LessonPlannerPanel;
use crate::net::types::Role;
use crate::state::overview::{
    ACTIVE_CLASSES, CLASS_ANALYTICS, ENGAGEMENT_TREND, RECENT_ACTIVITY, TEACHER_STATS, TEACHING_MODULES,
    TOTAL_STUDENTS,
};
use crate::state::session::SessionState;
use crate::state::ui::{TeacherTab, UiState};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn TeacherDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    install_unauth_redirect(session, Role::Teacher, use_navigate());

    let tab_content = move || match ui.get().teacher_tab {
        TeacherTab::Overview => view! { <TeacherOverview/> }.into_any(),
        TeacherTab::Analytics => view! { <AnalyticsTab/> }.into_any(),
        TeacherTab::Planner => view! { <LessonPlannerPanel/> }.into_any(),
        TeacherTab::Grading => view! { <GradingToolPanel/> }.into_any(),
        TeacherTab::Attendance => view! { <AttendanceTool/> }.into_any(),
    };

    view! {
        <DashboardLayout>
            <div class="stack">
                <section class="card card--hero card--hero-teacher">
                    <div class="row row--between">
                        <div>
                            <h1>"Good morning, " {move || session.get().user.map(|u| u.name).unwrap_or_default()} "!"</h1>
                            <p>"Ready to inspire and educate today? ✨"</p>
                        </div>
                        <div class="hero__stats">
                            <div class="hero__level">{TOTAL_STUDENTS} " Students"</div>
                            <div>{ACTIVE_CLASSES} " Active Classes"</div>
                        </div>
                    </div>
                </section>

                <nav class="tabs">
                    {TeacherTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || ui.get().teacher_tab == tab
                                    on:click=move |_| ui.update(|u| u.teacher_tab = tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                {tab_content}
            </div>
        </DashboardLayout>
    }
}

#[component]
fn TeacherOverview() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = move |tab: TeacherTab| ui.update(|u| u.teacher_tab = tab);

    view! {
        <div class="grid-6">
            {TEACHER_STATS
                .iter()
                .map(|stat| view! {
                    <div class="stat">
                        <div class="stat__icon">{stat.icon}</div>
                        <div class="stat__value">{stat.value}</div>
                        <div class="stat__label">{stat.label}</div>
                    </div>
                })
                .collect_view()}
        </div>

        <section class="card">
            <h2>"🧠 Teaching Tools"</h2>
            <div class="grid-4">
                {TEACHING_MODULES
                    .iter()
                    .map(|module| {
                        let tab = module.tab;
                        view! {
                            <div class="hub-card">
                                <span class="hub-card__icon">{module.icon}</span>
                                <strong>{module.title}</strong>
                                <span class="muted">{module.description}</span>
                                <button class="btn btn--sm btn--block" on:click=move |_| open(tab)>"Open"</button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <div class="grid-2">
            <section class="card">
                <h3>"Recent Activity"</h3>
                <div class="stack stack--tight">
                    {RECENT_ACTIVITY
                        .iter()
                        .map(|item| view! {
                            <div class="activity-row">
                                <div>
                                    <strong>{item.activity}</strong>
                                    <div class="muted">{item.class}</div>
                                </div>
                                <div class="activity-row__count">
                                    <div>{item.submitted} "/" {item.total}</div>
                                    <div class="muted">"Submitted"</div>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="card">
                <h3>"Quick Actions"</h3>
                <div class="stack stack--tight">
                    <button class="btn btn--left" on:click=move |_| open(TeacherTab::Planner)>
                        "＋ Create New Lesson Plan"
                    </button>
                    <button class="btn btn--outline btn--left" on:click=move |_| open(TeacherTab::Grading)>
                        "✅ Grade Assignments"
                    </button>
                    <button class="btn btn--outline btn--left" on:click=move |_| open(TeacherTab::Attendance)>
                        "🗓 Take Attendance"
                    </button>
                    <button class="btn btn--outline btn--left" on:click=move |_| open(TeacherTab::Analytics)>
                        "📊 View Class Analytics"
                    </button>
                </div>
            </section>
        </div>
    }
}

#[component]
fn AnalyticsTab() -> impl IntoView {
    view! {
        <section class="card">
            <h3>"Student Engagement Trends"</h3>
            <EngagementChart points=&ENGAGEMENT_TREND/>
        </section>
        <section class="card">
            <h3>"Class Performance Overview"</h3>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Class"</th>
                        <th>"Students"</th>
                        <th>"Engagement"</th>
                        <th>"Avg Grade"</th>
                    </tr>
                </thead>
                <tbody>
                    {CLASS_ANALYTICS
                        .iter()
                        .map(|row| view! {
                            <tr>
                                <td><strong>{row.class}</strong></td>
                                <td>{row.students}</td>
                                <td>
                                    <span class="pill" class:pill--good=row.is_highly_engaged() class:pill--warn=!row.is_highly_engaged()>
                                        {row.engagement} "%"
                                    </span>
                                </td>
                                <td>{row.avg_grade} "%"</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}
