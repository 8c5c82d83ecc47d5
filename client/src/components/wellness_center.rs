//! Wellness center: mood check-in, journal, guided activities and riddles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mood and journal text persist per user through `BrowserStore`. The
//! breathing and meditation timers share one `Ticker`; opening another
//! activity, closing the modal, or unmounting the tab stops it.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::wellness::{
    Activity, BreathingCycle, JOURNAL_MAX_CHARS, MeditationTimer, Mood, Puzzle, RIDDLES, TimerStatus, clamp_journal,
    format_clock, load_journal, load_mood, pick_riddle, save_journal, save_mood,
};
use crate::util::clock::now_millis;
use crate::util::storage::BrowserStore;
use crate::util::ticker::{TICK, TickFlow, Ticker};

#[allow(clippy::cast_sign_loss)]
fn riddle_seed() -> u64 {
    now_millis().max(0) as u64
}

#[component]
pub fn WellnessCenter() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let mood = RwSignal::new(None::<Mood>);
    let journal = RwSignal::new(String::new());
    let journal_saved = RwSignal::new(false);
    let activity = RwSignal::new(None::<Activity>);
    let breathing = RwSignal::new(BreathingCycle::new());
    let meditation = RwSignal::new(MeditationTimer::new());
    let timer_running = RwSignal::new(false);
    let riddle = RwSignal::new(None::<usize>);
    let guess = RwSignal::new(String::new());
    let riddle_feedback = RwSignal::new(None::<String>);

    let ticker = StoredValue::new(Ticker::new());
    on_cleanup(move || ticker.with_value(Ticker::stop));

    Effect::new(move || {
        if let Some(user_id) = session.get().user_id() {
            mood.set(load_mood(&BrowserStore, user_id));
            journal.set(load_journal(&BrowserStore, user_id));
        }
    });

    let choose_mood = move |choice: Mood| {
        mood.set(Some(choice));
        if let Some(user_id) = session.get_untracked().user_id() {
            save_mood(&BrowserStore, user_id, choice);
        }
    };

    let save_entry = move |_| {
        let Some(user_id) = session.get_untracked().user_id().map(str::to_owned) else {
            return;
        };
        let saved = journal.with_untracked(|text| save_journal(&BrowserStore, &user_id, text));
        journal_saved.set(saved);
    };

    let stop_timer = move || {
        ticker.with_value(Ticker::stop);
        timer_running.set(false);
    };

    let start_timer = move || {
        let Some(current) = activity.get_untracked() else {
            return;
        };
        timer_running.set(true);
        ticker.with_value(|t| {
            t.start(TICK, move || match current {
                Activity::Breathing => {
                    breathing.update(BreathingCycle::tick);
                    TickFlow::Continue
                }
                Activity::Meditation => {
                    let mut status = TimerStatus::Running;
                    meditation.update(|m| status = m.tick());
                    if status == TimerStatus::Finished {
                        timer_running.set(false);
                        TickFlow::Stop
                    } else {
                        TickFlow::Continue
                    }
                }
                _ => TickFlow::Stop,
            })
        });
    };

    let open_activity = move |choice: Activity| {
        stop_timer();
        breathing.set(BreathingCycle::new());
        meditation.set(MeditationTimer::new());
        if choice == Activity::MindPuzzle {
            riddle.set(None);
            riddle_feedback.set(None);
        }
        activity.set(Some(choice));
    };

    let close_activity = move || {
        stop_timer();
        activity.set(None);
    };

    let new_riddle = move || {
        let next = pick_riddle(riddle_seed(), riddle.get_untracked());
        riddle.set(Some(next));
        guess.set(String::new());
        riddle_feedback.set(None);
    };

    let check_riddle = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(index) = riddle.get_untracked() {
            riddle_feedback.set(Some(RIDDLES[index].feedback(&guess.get_untracked())));
        }
    };

    let timer_controls = move || {
        view! {
            <div class="row row--center">
                <button
                    class="btn"
                    on:click=move |_| if timer_running.get_untracked() { stop_timer() } else { start_timer() }
                >
                    {move || if timer_running.get() { "Pause" } else { "Start" }}
                </button>
                <button
                    class="btn btn--outline"
                    on:click=move |_| {
                        stop_timer();
                        breathing.set(BreathingCycle::new());
                        meditation.set(MeditationTimer::new());
                    }
                >
                    "Reset"
                </button>
            </div>
        }
    };

    let puzzle_picker = move || {
        view! {
            <div class="grid-2">
                {Puzzle::ALL
                    .into_iter()
                    .map(|puzzle| {
                        view! {
                            <button
                                class="puzzle-card"
                                disabled=!puzzle.is_available()
                                on:click=move |_| if puzzle == Puzzle::Riddles { new_riddle() }
                            >
                                <strong>{puzzle.title()}</strong>
                                <span class="muted">{puzzle.description()}</span>
                                {(!puzzle.is_available()).then(|| view! { <span class="pill">"Coming soon"</span> })}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    };

    let riddle_view = move |index: usize| {
        let current = &RIDDLES[index];
        view! {
            <div class="riddle">
                <p class="riddle__question">{current.question}</p>
                <form class="row" on:submit=check_riddle>
                    <input
                        type="text"
                        placeholder="Your answer"
                        prop:value=move || guess.get()
                        on:input=move |ev| guess.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn">"Check"</button>
                </form>
                {move || riddle_feedback.get().map(|text| view! { <p class="riddle__feedback">{text}</p> })}
                <div class="row">
                    <button class="btn btn--outline" on:click=move |_| new_riddle()>"New Riddle"</button>
                    <button class="btn btn--ghost" on:click=move |_| riddle.set(None)>"Back to puzzles"</button>
                </div>
            </div>
        }
    };

    let activity_body = move |current: Activity| match current {
        Activity::Breathing => view! {
            <div class="timer">
                <div class="timer__phase">{move || breathing.get().phase.label()}</div>
                <div class="timer__count">{move || breathing.get().remaining.max(0)}</div>
                <p class="muted">"Inhale for 4 seconds, hold for 7, exhale for 8."</p>
                {timer_controls()}
            </div>
        }
        .into_any(),
        Activity::Meditation => view! {
            <div class="timer">
                <div class="timer__count">{move || format_clock(meditation.get().remaining)}</div>
                <Show
                    when=move || meditation.get().is_finished()
                    fallback=|| view! { <p class="muted">"Close your eyes and focus on your breath."</p> }
                >
                    <p>"Session complete. Well done! 🧘"</p>
                </Show>
                {timer_controls()}
            </div>
        }
        .into_any(),
        Activity::MindPuzzle => view! {
            <div>
                {move || match riddle.get() {
                    Some(index) => riddle_view(index).into_any(),
                    None => puzzle_picker().into_any(),
                }}
            </div>
        }
        .into_any(),
        other => match other.guide() {
            Some(guide) => view! {
                <div class="guide">
                    <p>{guide.intro}</p>
                    <ol>{guide.steps.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}</ol>
                    <p class="muted">{guide.footnote}</p>
                </div>
            }
            .into_any(),
            None => view! { <p>{other.description()}</p> }.into_any(),
        },
    };

    view! {
        <div class="stack">
            <section class="card">
                <h2>"💭 How are you feeling today?"</h2>
                <div class="mood-grid">
                    {Mood::ALL
                        .into_iter()
                        .map(|m| {
                            view! {
                                <button
                                    class="mood"
                                    class:mood--selected=move || mood.get() == Some(m)
                                    on:click=move |_| choose_mood(m)
                                >
                                    <span class="mood__emoji">{m.emoji()}</span>
                                    <span>{m.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || mood.get().map(|m| view! { <p class="notice">{m.message()}</p> })}
            </section>

            <section class="card">
                <h2>"🌿 Wellness Activities"</h2>
                <div class="grid-3">
                    {Activity::ALL
                        .into_iter()
                        .map(|a| {
                            view! {
                                <button
                                    class="activity-card"
                                    class:activity-card--suggested=move || mood.get().is_some_and(Mood::suggests_activity)
                                    on:click=move |_| open_activity(a)
                                >
                                    <span class="activity-card__icon">{a.icon()}</span>
                                    <strong>{a.title()}</strong>
                                    <span class="muted">{a.description()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="card">
                <h2>"📓 Journal"</h2>
                <textarea
                    rows="5"
                    placeholder="Write about your day, your feelings, or anything on your mind..."
                    prop:value=move || journal.get()
                    on:input=move |ev| {
                        journal.set(clamp_journal(&event_target_value(&ev)));
                        journal_saved.set(false);
                    }
                ></textarea>
                <div class="row row--between">
                    <span class="muted">{move || journal.with(|j| j.chars().count())} "/" {JOURNAL_MAX_CHARS}</span>
                    <button class="btn" disabled=move || journal.with(|j| j.trim().is_empty()) on:click=save_entry>
                        "Save Entry"
                    </button>
                </div>
                <Show when=move || journal_saved.get()>
                    <p class="notice">"Journal entry saved."</p>
                </Show>
            </section>

            {move || {
                activity
                    .get()
                    .map(|current| {
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| close_activity()>
                                <div class="dialog dialog--wide" on:click=|ev| ev.stop_propagation()>
                                    <div class="card__head">
                                        <h2>{current.icon()} " " {current.title()}</h2>
                                        <button class="btn btn--ghost" title="Close" on:click=move |_| close_activity()>
                                            "✕"
                                        </button>
                                    </div>
                                    {activity_body(current)}
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
