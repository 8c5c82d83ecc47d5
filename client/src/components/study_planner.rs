//! Study planner: task form, task list and completion stats.
//!
//! The task list signal is owned by the student dashboard so the overview's
//! upcoming-deadlines card sees edits made here. Every mutation persists the
//! whole list for the signed-in user.

use leptos::prelude::*;

use crate::state::planner::{Priority, Task, TaskDraft, TaskList};
use crate::state::session::SessionState;
use crate::util::clock::{display_date, today_iso};
use crate::util::storage::BrowserStore;

#[component]
pub fn StudyPlanner(tasks: RwSignal<TaskList>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<String>);
    let draft = RwSignal::new(TaskDraft::default());
    let error = RwSignal::new(None::<String>);

    let persist = move || {
        if let Some(user_id) = session.get_untracked().user_id() {
            tasks.with_untracked(|list| list.persist(&BrowserStore, user_id));
        }
    };

    let close_form = move || {
        form_open.set(false);
        editing.set(None);
        draft.set(TaskDraft::default());
        error.set(None);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        let mut result = Ok(());
        tasks.update(|list| {
            result = match editing.get_untracked() {
                Some(id) => list.update(&id, current),
                None => list.add(current, uuid::Uuid::new_v4().to_string()).map(|_| ()),
            };
        });
        match result {
            Ok(()) => {
                persist();
                close_form();
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let begin_edit = move |id: String| {
        let Some(current) = tasks.with_untracked(|list| list.get(&id).map(TaskDraft::from_task)) else {
            log::warn!("edit task failed: task `{id}` not found");
            return;
        };
        draft.set(current);
        editing.set(Some(id));
        error.set(None);
        form_open.set(true);
    };

    let toggle = move |id: String| {
        let mut changed = false;
        tasks.update(|list| match list.toggle(&id) {
            Ok(_) => changed = true,
            Err(err) => log::warn!("toggle task failed: {err}"),
        });
        if changed {
            persist();
        }
    };

    let delete = move |id: String| {
        let mut removed = false;
        tasks.update(|list| removed = list.delete(&id));
        if removed {
            persist();
        }
    };

    let stats = move || tasks.with(|list| list.stats(&today_iso()));

    let task_row = move |task: Task| {
        let today = today_iso();
        let overdue = task.is_overdue(&today);
        let toggle_id = task.id.clone();
        let delete_id = task.id.clone();
        let edit_id = task.id.clone();
        view! {
            <li class="task" class:task--done=task.completed class:task--overdue=overdue>
                <input
                    type="checkbox"
                    prop:checked=task.completed
                    on:change=move |_| toggle(toggle_id.clone())
                />
                <div class="task__body">
                    <div class="task__title">{task.title.clone()}</div>
                    {(!task.description.is_empty()).then(|| view! { <p class="muted">{task.description.clone()}</p> })}
                    <div class="task__meta">
                        <span class=format!("pill pill--{}", task.priority.as_str())>{task.priority.label()}</span>
                        {(!task.subject.is_empty()).then(|| view! { <span class="pill">{task.subject.clone()}</span> })}
                        {(!task.due_date.is_empty()).then(|| view! {
                            <span class="muted">"📅 " {display_date(&task.due_date)}</span>
                        })}
                        {overdue.then(|| view! { <span class="pill pill--high">"Overdue"</span> })}
                    </div>
                </div>
                <div class="task__actions">
                    <button class="btn btn--ghost btn--xs" title="Edit task" on:click=move |_| begin_edit(edit_id.clone())>
                        "✏️"
                    </button>
                    <button class="btn btn--ghost btn--xs" title="Delete task" on:click=move |_| delete(delete_id.clone())>
                        "🗑️"
                    </button>
                </div>
            </li>
        }
    };

    view! {
        <div class="stack">
            <section class="grid-3">
                <div class="stat">
                    <div class="stat__value">{move || stats().total}</div>
                    <div class="stat__label">"Total Tasks"</div>
                </div>
                <div class="stat">
                    <div class="stat__value">{move || stats().completed}</div>
                    <div class="stat__label">"Completed"</div>
                </div>
                <div class="stat">
                    <div class="stat__value">{move || stats().overdue}</div>
                    <div class="stat__label">"Overdue"</div>
                </div>
            </section>

            <section class="card">
                <div class="card__head">
                    <h2>"📋 Study Planner"</h2>
                    <button
                        class="btn btn--sm"
                        on:click=move |_| {
                            if form_open.get_untracked() {
                                close_form();
                            } else {
                                form_open.set(true);
                            }
                        }
                    >
                        {move || if form_open.get() { "Cancel" } else { "+ Add Task" }}
                    </button>
                </div>

                <Show when=move || form_open.get()>
                    <form class="task-form" on:submit=on_save>
                        <label class="field">
                            <span>"Title"</span>
                            <input
                                type="text"
                                placeholder="e.g. Review chapter 5"
                                prop:value=move || draft.get().title
                                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Description"</span>
                            <textarea
                                rows="2"
                                prop:value=move || draft.get().description
                                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <div class="grid-3">
                            <label class="field">
                                <span>"Due date"</span>
                                <input
                                    type="date"
                                    prop:value=move || draft.get().due_date
                                    on:input=move |ev| draft.update(|d| d.due_date = event_target_value(&ev))
                                />
                            </label>
                            <label class="field">
                                <span>"Priority"</span>
                                <select
                                    prop:value=move || draft.get().priority.as_str()
                                    on:change=move |ev| {
                                        if let Some(priority) = Priority::from_str_opt(&event_target_value(&ev)) {
                                            draft.update(|d| d.priority = priority);
                                        }
                                    }
                                >
                                    {Priority::ALL
                                        .into_iter()
                                        .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                            <label class="field">
                                <span>"Subject"</span>
                                <input
                                    type="text"
                                    placeholder="e.g. Math"
                                    prop:value=move || draft.get().subject
                                    on:input=move |ev| draft.update(|d| d.subject = event_target_value(&ev))
                                />
                            </label>
                        </div>
                        {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}
                        <button type="submit" class="btn">
                            {move || if editing.get().is_some() { "Save Changes" } else { "Add Task" }}
                        </button>
                    </form>
                </Show>

                {move || {
                    let sorted = tasks.with(TaskList::sorted_for_display);
                    if sorted.is_empty() {
                        view! { <p class="muted empty">"No tasks yet. Add one to start planning your studies."</p> }
                            .into_any()
                    } else {
                        view! { <ul class="task-list">{sorted.into_iter().map(task_row).collect_view()}</ul> }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}
