//! Lesson catalog, quiz runner and leaderboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the signed-in user from the session context and writes XP, level and
//! badges back through `SessionState::award_progress` when a quiz completes.

use leptos::prelude::*;

use crate::state::gamified::{
    CompletedLessons, LEADERBOARD, LESSONS, Lesson, QuizPhase, QuizSession, lesson_by_id, progress_after,
};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStore;

#[component]
pub fn GamifiedLearning() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let quiz = RwSignal::new(None::<QuizSession>);
    let completed = RwSignal::new(CompletedLessons::default());

    Effect::new(move || {
        if let Some(user_id) = session.get().user_id() {
            completed.set(CompletedLessons::load(&BrowserStore, user_id));
        }
    });

    // A lesson picked from the overview list opens straight away.
    Effect::new(move || {
        if let Some(id) = ui.get().pending_lesson {
            ui.update(|u| u.pending_lesson = None);
            if let Some(lesson) = lesson_by_id(id) {
                quiz.set(Some(QuizSession::new(lesson)));
            }
        }
    });

    let finish = move |session_state: &QuizSession| {
        let Some(lesson) = session_state.lesson() else {
            return;
        };
        let score = session_state.score;
        session.update(|s| {
            let Some(user) = s.user.as_ref() else {
                return;
            };
            let update = progress_after(user, lesson, score);
            let user_id = user.id.clone();
            log::info!(
                "lesson complete user_id={user_id} lesson={} score={score}/{} xp={}",
                lesson.id,
                lesson.quiz.len(),
                update.xp
            );
            s.award_progress(update, &BrowserStore);
            completed.update(|c| {
                c.mark(lesson.id, &BrowserStore, &user_id);
            });
        });
    };

    let lesson_card = move |lesson: &'static Lesson| {
        let done = move || completed.get().contains(lesson.id);
        view! {
            <div class="lesson-card" class:lesson-card--done=done>
                <div class="lesson-card__head">
                    <div>
                        <h3>{lesson.title}</h3>
                        <p class="muted">{lesson.subject} " • " {lesson.level}</p>
                    </div>
                    <Show when=done>
                        <span class="check">"✔"</span>
                    </Show>
                </div>
                <p>{lesson.description}</p>
                <div class="lesson-card__foot">
                    <span class="muted">"⚡ " {lesson.xp} " XP"</span>
                    <span class="muted">{lesson.duration}</span>
                    <button
                        class="btn btn--sm"
                        class:btn--outline=done
                        on:click=move |_| quiz.set(Some(QuizSession::new(lesson)))
                    >
                        {move || if done() { "▶ Review" } else { "▶ Start" }}
                    </button>
                </div>
            </div>
        }
    };

    let catalog = move || {
        view! {
            <div class="stack">
                <section class="card">
                    <h2>"📘 Available Lessons"</h2>
                    <div class="grid-3">{LESSONS.iter().map(lesson_card).collect_view()}</div>
                </section>
                <section class="card">
                    <h2>"🏆 Global Leaderboard"</h2>
                    <ol class="leaderboard">
                        {LEADERBOARD
                            .iter()
                            .enumerate()
                            .map(|(rank, entry)| {
                                let is_me = move || {
                                    session.get().user.is_some_and(|u| u.name == entry.name)
                                };
                                view! {
                                    <li class="leaderboard__row" class:leaderboard__row--me=is_me>
                                        <span class="leaderboard__rank">"#" {rank + 1}</span>
                                        <span class="avatar avatar--initials">{entry.avatar}</span>
                                        <div class="leaderboard__who">
                                            <div>{entry.name}</div>
                                            <div class="muted">"Level " {entry.level}</div>
                                        </div>
                                        <div class="leaderboard__score">
                                            <div>{entry.xp} " XP"</div>
                                            <div class="muted">{entry.badges} " badges"</div>
                                        </div>
                                        <span class="leaderboard__streak">"⚡ " {entry.streak}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </section>
            </div>
        }
    };

    let runner = move |state: QuizSession| {
        let Some(lesson) = state.lesson() else {
            return view! { <p>"Lesson not found."</p> }.into_any();
        };
        let body = match state.phase {
            QuizPhase::Overview => view! {
                <div class="lesson-overview">
                    <h3>"Lesson Overview"</h3>
                    <p>{lesson.content.theory}</p>
                    {lesson.content.equation.map(|eq| view! { <pre class="equation">{eq}</pre> })}
                    <h4>"Examples:"</h4>
                    <ul>{lesson.content.examples.iter().map(|e| view! { <li>{*e}</li> }).collect_view()}</ul>
                    <button class="btn" on:click=move |_| quiz.update(|q| if let Some(q) = q { q.begin() })>
                        "Start Quiz"
                    </button>
                </div>
            }
            .into_any(),
            QuizPhase::Question | QuizPhase::Answered => {
                let Some(question) = state.question() else {
                    return view! { <p>"Question not found."</p> }.into_any();
                };
                let answered = state.phase == QuizPhase::Answered;
                let selected = state.selected;
                let verdict = state.last_answer_correct();
                let next_label = if state.is_last_question() { "Complete Lesson" } else { "Next Question" };
                view! {
                    <div class="quiz">
                        <div class="quiz__progress">
                            <span>"Question " {state.current + 1} " of " {state.total()}</span>
                            <div class="bar"><div class="bar__fill" style:width=format!("{}%", state.progress_percent())></div></div>
                        </div>
                        <h3>{question.question}</h3>
                        <div class="quiz__options">
                            {question
                                .options
                                .iter()
                                .enumerate()
                                .map(|(i, option)| {
                                    let is_selected = selected == Some(i);
                                    let is_correct = answered && i == question.correct;
                                    let is_wrong = answered && is_selected && i != question.correct;
                                    view! {
                                        <button
                                            class="quiz__option"
                                            class:quiz__option--selected=is_selected
                                            class:quiz__option--correct=is_correct
                                            class:quiz__option--wrong=is_wrong
                                            disabled=answered
                                            on:click=move |_| quiz.update(|q| if let Some(q) = q { q.select(i) })
                                        >
                                            {*option}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        {verdict.map(|correct| view! {
                            <div class="quiz__explanation" class:quiz__explanation--correct=correct>
                                <strong>{if correct { "Correct! " } else { "Not quite. " }}</strong>
                                {question.explanation}
                            </div>
                        })}
                        {if answered {
                            view! {
                                <button
                                    class="btn"
                                    on:click=move |_| {
                                        let mut finished = None;
                                        quiz.update(|q| {
                                            if let Some(q) = q {
                                                if q.next() {
                                                    finished = Some(q.clone());
                                                }
                                            }
                                        });
                                        if let Some(done) = finished {
                                            finish(&done);
                                        }
                                    }
                                >
                                    {next_label}
                                </button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <button
                                    class="btn"
                                    disabled=selected.is_none()
                                    on:click=move |_| quiz.update(|q| if let Some(q) = q { let _ = q.submit(); })
                                >
                                    "Submit Answer"
                                </button>
                            }
                            .into_any()
                        }}
                    </div>
                }
                .into_any()
            }
            QuizPhase::Complete => {
                let level = session.get_untracked().user.map_or(1, |u| u.level);
                view! {
                    <div class="quiz-complete">
                        <div class="quiz-complete__trophy">"🏆"</div>
                        <h3>"Lesson Complete!"</h3>
                        <p>"You scored " {state.score} " out of " {state.total()}</p>
                        <div class="quiz-complete__reward">
                            <div>"+" {lesson.xp} " XP Earned!"</div>
                            <div class="muted">"Level " {level}</div>
                        </div>
                        <button class="btn btn--block" on:click=move |_| quiz.set(None)>
                            "Continue Learning"
                        </button>
                    </div>
                }
                .into_any()
            }
        };
        view! {
            <section class="card">
                <div class="card__head">
                    <h2>{lesson.title}</h2>
                    <button class="btn btn--ghost" title="Close lesson" on:click=move |_| quiz.set(None)>
                        "✕"
                    </button>
                </div>
                {body}
            </section>
        }
        .into_any()
    };

    move || match quiz.get() {
        Some(state) => runner(state),
        None => catalog().into_any(),
    }
}
