//! Attendance register for the teacher dashboard.

use leptos::prelude::*;

use crate::state::attendance::{AttendanceSheet, ROSTER, Status};
use crate::util::clock::today_iso;

#[component]
pub fn AttendanceTool() -> impl IntoView {
    let sheet = RwSignal::new(AttendanceSheet::new(today_iso()));
    let notice = RwSignal::new(None::<String>);

    let summary = move || sheet.with(AttendanceSheet::summary);

    view! {
        <section class="card">
            <div class="card__head">
                <h2>"🗓 Attendance"</h2>
                <div class="row">
                    <input
                        type="date"
                        prop:value=move || sheet.get().date
                        on:change=move |ev| {
                            sheet.update(|s| s.set_date(event_target_value(&ev)));
                            notice.set(None);
                        }
                    />
                    <button
                        class="btn btn--sm"
                        on:click=move |_| notice.set(Some(sheet.with_untracked(AttendanceSheet::export)))
                    >
                        "Export Report"
                    </button>
                </div>
            </div>

            <div class="grid-4">
                <div class="stat stat--present">
                    <div class="stat__value">{move || summary().present}</div>
                    <div class="stat__label">"Present"</div>
                </div>
                <div class="stat stat--absent">
                    <div class="stat__value">{move || summary().absent}</div>
                    <div class="stat__label">"Absent"</div>
                </div>
                <div class="stat stat--tardy">
                    <div class="stat__value">{move || summary().tardy}</div>
                    <div class="stat__label">"Tardy"</div>
                </div>
                <div class="stat">
                    <div class="stat__value">{move || summary().unmarked}</div>
                    <div class="stat__label">"Unmarked"</div>
                </div>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Student"</th>
                        <th>"Status"</th>
                        <th>"Mark"</th>
                    </tr>
                </thead>
                <tbody>
                    {ROSTER
                        .iter()
                        .map(|student| {
                            let id = student.id;
                            let status = move || sheet.with(|s| s.status(id));
                            view! {
                                <tr>
                                    <td>{student.name}</td>
                                    <td>
                                        {move || match status() {
                                            Some(st) => view! {
                                                <span class=format!("pill pill--{}", st.css_class())>{st.label()}</span>
                                            }
                                            .into_any(),
                                            None => view! { <span class="muted">"N/A"</span> }.into_any(),
                                        }}
                                    </td>
                                    <td class="row">
                                        {Status::ALL
                                            .into_iter()
                                            .map(|choice| {
                                                view! {
                                                    <button
                                                        class="btn btn--xs"
                                                        class:btn--outline=move || status() != Some(choice)
                                                        on:click=move |_| sheet.update(|s| {
                                                            s.mark(id, choice);
                                                        })
                                                    >
                                                        {choice.label()}
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>

            {move || notice.get().map(|text| view! { <p class="notice">{text}</p> })}
        </section>
    }
}
