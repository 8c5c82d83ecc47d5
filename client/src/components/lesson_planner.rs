//! AI lesson planner form, generated plan view and PDF export.

use leptos::prelude::*;

use crate::net::api::{self, LESSON_PDF_FAILED, LESSON_PLAN_FAILED};
use crate::net::types::LessonPlan;
use crate::state::lesson_plan::{DURATIONS, GRADE_LEVELS, LessonPlanner};
use crate::util::download::{PDF_MIME, lesson_plan_file_name, save_bytes};

fn bullet_section(title: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <div class="plan__section">
            <h4>{title}</h4>
            <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
        </div>
    }
}

fn select_options(options: &'static [&'static str], placeholder: &'static str) -> impl IntoView {
    view! {
        <option value="">{placeholder}</option>
        {options.iter().map(|o| view! { <option value=*o>{*o}</option> }).collect_view()}
    }
}

fn plan_view(plan: LessonPlan) -> impl IntoView {
    view! {
        <div class="plan">
            <div class="plan__header">
                <h3>{plan.title}</h3>
                <span class="pill">"⏱ " {plan.duration}</span>
            </div>
            {bullet_section("🎯 Learning Objectives", plan.objectives)}
            {bullet_section("🧰 Materials Needed", plan.materials)}
            <div class="plan__section">
                <h4>"📝 Lesson Activities"</h4>
                <ol class="plan__activities">
                    {plan
                        .activities
                        .into_iter()
                        .map(|a| {
                            view! {
                                <li>
                                    <div class="row row--between">
                                        <strong>{a.name}</strong>
                                        <span class="muted">{a.duration}</span>
                                    </div>
                                    <p>{a.description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
            {bullet_section("✅ Assessment", plan.assessment)}
            {bullet_section("🧩 Differentiation", plan.differentiation)}
        </div>
    }
}

#[component]
pub fn LessonPlannerPanel() -> impl IntoView {
    let planner = RwSignal::new(LessonPlanner::default());
    let exporting = RwSignal::new(false);

    let generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        planner.update(|p| request = p.begin());
        let Some(request) = request else {
            return;
        };
        log::info!("lesson plan requested topic={} grade={}", request.topic, request.grade);
        leptos::task::spawn_local(async move {
            match api::generate_lesson_plan(&request.topic, &request.grade, &request.duration).await {
                Ok(plan) => planner.update(|p| p.succeed(plan)),
                Err(err) => {
                    log::warn!("lesson plan generation failed: {err}");
                    planner.update(|p| p.fail(err.user_message(LESSON_PLAN_FAILED)));
                }
            }
        });
    };

    let export = move |_| {
        let Some(payload) = planner.with_untracked(LessonPlanner::export_payload) else {
            return;
        };
        exporting.set(true);
        leptos::task::spawn_local(async move {
            let file_name = lesson_plan_file_name(&payload.plan.title);
            let result = api::export_lesson_plan_pdf(&payload)
                .await
                .map_err(|err| err.user_message(LESSON_PDF_FAILED))
                .and_then(|bytes| save_bytes(&bytes, PDF_MIME, &file_name));
            match result {
                Ok(()) => planner.update(LessonPlanner::export_succeeded),
                Err(message) => {
                    log::warn!("lesson plan export failed: {message}");
                    planner.update(|p| p.export_failed(message));
                }
            }
            exporting.set(false);
        });
    };

    view! {
        <div class="grid-2 grid-2--wide-right">
            <section class="card">
                <h2>"🧠 AI Lesson Planner"</h2>
                <form class="stack" on:submit=generate>
                    <label class="field">
                        <span>"Topic"</span>
                        <input
                            type="text"
                            placeholder="e.g. Photosynthesis, Fractions, World War II"
                            prop:value=move || planner.get().topic
                            on:input=move |ev| planner.update(|p| p.topic = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Grade Level"</span>
                        <select
                            prop:value=move || planner.get().grade
                            on:change=move |ev| planner.update(|p| p.grade = event_target_value(&ev))
                        >
                            {select_options(&GRADE_LEVELS, "Select grade level")}
                        </select>
                    </label>
                    <label class="field">
                        <span>"Duration"</span>
                        <select
                            prop:value=move || planner.get().duration
                            on:change=move |ev| planner.update(|p| p.duration = event_target_value(&ev))
                        >
                            {select_options(&DURATIONS, "Select duration")}
                        </select>
                    </label>
                    {move || planner.get().error().map(|msg| view! { <p class="error">{msg.to_owned()}</p> })}
                    <button type="submit" class="btn btn--block" disabled=move || planner.get().is_generating()>
                        {move || if planner.get().is_generating() { "Generating..." } else { "✨ Generate Lesson Plan" }}
                    </button>
                </form>
            </section>

            <section class="card">
                <div class="card__head">
                    <h2>"Generated Plan"</h2>
                    <Show when=move || planner.get().plan().is_some()>
                        <button class="btn btn--sm btn--outline" disabled=move || exporting.get() on:click=export>
                            {move || if exporting.get() { "Exporting..." } else { "⬇ Export PDF" }}
                        </button>
                    </Show>
                </div>
                {move || match planner.get().plan().cloned() {
                    Some(plan) => plan_view(plan).into_any(),
                    None if planner.get().is_generating() => {
                        view! { <p class="muted">"Building your lesson plan..."</p> }.into_any()
                    }
                    None => view! {
                        <p class="muted empty">"Fill in the form and generate a plan to see it here."</p>
                    }
                    .into_any(),
                }}
            </section>
        </div>
    }
}
