//! Smart grading: answer input, rubric choice, graded report and exports.

use leptos::prelude::*;

use crate::net::api::{self, GRADES_PDF_FAILED, GRADING_FAILED};
use crate::net::types::GradingReport;
use crate::state::grading::{GradingMode, GradingTool, Rubric, distribution_percent, letter_grade};
use crate::util::download::{GRADED_RESULTS_FILE, GRADING_REPORT_FILE, PDF_MIME, save_bytes, save_json};

const ANSWERS_PLACEHOLDER: &str = "Paste student answers here, one student per block. For example:\n\nAlice: The mitochondria is the powerhouse of the cell...\nBob: Photosynthesis converts light energy into chemical energy...";

fn report_view(report: GradingReport) -> impl IntoView {
    let total = report.total_submissions;
    view! {
        <div class="stack">
            <div class="grid-4">
                <div class="stat">
                    <div class="stat__value">{report.total_submissions}</div>
                    <div class="stat__label">"Submissions"</div>
                </div>
                <div class="stat">
                    <div class="stat__value">{format!("{:.1}%", report.avg_score)}</div>
                    <div class="stat__label">"Average Score"</div>
                </div>
                <div class="stat">
                    <div class="stat__value">{report.graded_count}</div>
                    <div class="stat__label">"Graded"</div>
                </div>
                <div class="stat">
                    <div class="stat__value">{report.time_to_grade}</div>
                    <div class="stat__label">"Time to Grade"</div>
                </div>
            </div>

            <div>
                <h4>"Grade Distribution"</h4>
                {report
                    .distribution
                    .into_iter()
                    .map(|(band, count)| {
                        let width = format!("{:.0}%", distribution_percent(count, total));
                        view! {
                            <div class="dist-row">
                                <span class="dist-row__label">{band}</span>
                                <div class="bar"><div class="bar__fill" style:width=width></div></div>
                                <span class="dist-row__count">{count}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div>
                <h4>"Student Results"</h4>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Student"</th>
                            <th>"Score"</th>
                            <th>"Grade"</th>
                            <th>"Feedback"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {report
                            .student_results
                            .into_iter()
                            .map(|r| {
                                let grade = letter_grade(r.score);
                                view! {
                                    <tr>
                                        <td>{r.name}</td>
                                        <td>{format!("{:.0}%", r.score)}</td>
                                        <td><span class=format!("grade grade--{}", grade.to_ascii_lowercase())>{grade.to_string()}</span></td>
                                        <td>{r.feedback}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
pub fn GradingToolPanel() -> impl IntoView {
    let tool = RwSignal::new(GradingTool::default());
    let exporting = RwSignal::new(false);

    let grade = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        tool.update(|t| request = t.begin());
        let Some(request) = request else {
            return;
        };
        log::info!("grading requested rubric={}", request.rubric);
        leptos::task::spawn_local(async move {
            match api::grade_assignments(&request.manual_answers, &request.rubric).await {
                Ok(report) => tool.update(|t| t.succeed(report)),
                Err(err) => {
                    log::warn!("grading failed: {err}");
                    tool.update(|t| t.fail(err.user_message(GRADING_FAILED)));
                }
            }
        });
    };

    let export_pdf = move |_| {
        let Some(report) = tool.with_untracked(|t| t.report().cloned()) else {
            return;
        };
        exporting.set(true);
        leptos::task::spawn_local(async move {
            let result = api::export_grades_pdf(&report)
                .await
                .map_err(|err| err.user_message(GRADES_PDF_FAILED))
                .and_then(|bytes| save_bytes(&bytes, PDF_MIME, GRADING_REPORT_FILE));
            match result {
                Ok(()) => tool.update(GradingTool::export_succeeded),
                Err(message) => {
                    log::warn!("grading report export failed: {message}");
                    tool.update(|t| t.export_failed(message));
                }
            }
            exporting.set(false);
        });
    };

    let export_json = move |_| {
        let Some(report) = tool.with_untracked(|t| t.report().cloned()) else {
            return;
        };
        match save_json(&report, GRADED_RESULTS_FILE) {
            Ok(()) => tool.update(GradingTool::export_succeeded),
            Err(message) => {
                log::warn!("graded results download failed: {message}");
                tool.update(|t| t.export_failed(message));
            }
        }
    };

    let mode_button = move |mode: GradingMode, label: &'static str| {
        view! {
            <button
                type="button"
                class="btn btn--sm"
                class:btn--outline=move || tool.get().mode != mode
                on:click=move |_| tool.update(|t| t.mode = mode)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="stack">
            <section class="card">
                <h2>"🧮 Smart Grading"</h2>
                <form class="stack" on:submit=grade>
                    <div class="row">
                        {mode_button(GradingMode::Manual, "✍ Manual Input")}
                        {mode_button(GradingMode::Upload, "📤 File Upload")}
                    </div>
                    {move || match tool.get().mode {
                        GradingMode::Manual => view! {
                            <textarea
                                rows="8"
                                placeholder=ANSWERS_PLACEHOLDER
                                prop:value=move || tool.get().answers
                                on:input=move |ev| tool.update(|t| t.answers = event_target_value(&ev))
                            ></textarea>
                        }
                        .into_any(),
                        GradingMode::Upload => view! {
                            <div class="dropzone">
                                <p>"Drag and drop assignment files here"</p>
                                <p class="muted">"PDF, DOCX or TXT"</p>
                            </div>
                        }
                        .into_any(),
                    }}
                    <label class="field">
                        <span>"Grading Rubric"</span>
                        <select
                            prop:value=move || tool.get().rubric.as_str()
                            on:change=move |ev| {
                                if let Some(rubric) = Rubric::from_str_opt(&event_target_value(&ev)) {
                                    tool.update(|t| t.rubric = rubric);
                                }
                            }
                        >
                            {Rubric::ALL
                                .into_iter()
                                .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    {move || tool.get().error().map(|msg| view! { <p class="error">{msg.to_owned()}</p> })}
                    <button type="submit" class="btn btn--block" disabled=move || tool.get().is_grading()>
                        {move || if tool.get().is_grading() { "Grading..." } else { "Grade Assignments" }}
                    </button>
                </form>
            </section>

            <Show when=move || tool.get().report().is_some()>
                <section class="card">
                    <div class="card__head">
                        <h2>"📊 Grading Results"</h2>
                        <div class="row">
                            <button class="btn btn--sm btn--outline" on:click=export_json>
                                "⬇ Download Results"
                            </button>
                            <button class="btn btn--sm" disabled=move || exporting.get() on:click=export_pdf>
                                {move || if exporting.get() { "Exporting..." } else { "⬇ Export PDF" }}
                            </button>
                        </div>
                    </div>
                    {move || tool.get().report().cloned().map(report_view)}
                </section>
            </Show>
        </div>
    }
}
