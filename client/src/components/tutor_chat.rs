//! AI tutor conversation panel.
//!
//! Bot replies render as Markdown. The microphone and speaker buttons follow
//! the accessibility toggles; the language picker writes the shared settings
//! so the tutor and the rest of the UI switch together.

use leptos::prelude::*;

use crate::i18n::{Language, t};
use crate::net::api;
use crate::state::accessibility::{AccessibilitySettings, SettingsUpdate};
use crate::state::tutor::{Sender, TutorChat, TutorMessage, quick_actions, suggested_questions};
use crate::util::clock::{now_millis, time_of_day};
use crate::util::markdown::render_markdown_html;
use crate::util::speech::{self, SpeechError};

#[component]
pub fn TutorChatPanel() -> impl IntoView {
    let settings = expect_context::<RwSignal<AccessibilitySettings>>();
    let lang = move || settings.get().language;

    let chat = RwSignal::new(TutorChat::new(settings.get_untracked().language, now_millis()));
    let input = RwSignal::new(String::new());
    let listening = RwSignal::new(false);
    let listener = StoredValue::new_local(speech::Listener::default());
    let notice = RwSignal::new(String::new());

    let send = move |text: String| {
        let language = settings.get_untracked().language;
        let mut history = None;
        chat.update(|c| history = c.begin_send(&text, language, now_millis()));
        let Some(history) = history else {
            return;
        };
        input.set(String::new());
        leptos::task::spawn_local(async move {
            match api::tutor_chat(history).await {
                Ok(reply) => {
                    speech::speak(&settings.get_untracked(), &reply);
                    chat.update(|c| c.receive(reply, now_millis()));
                }
                Err(err) => {
                    log::warn!("tutor chat failed: {err}");
                    chat.update(|c| c.fail(language, now_millis()));
                }
            }
        });
    };

    let start_listening = move |_| {
        notice.set(String::new());
        let mut result = Ok(());
        listener.update_value(|l| {
            result = l.start(
                &settings.get_untracked(),
                move |text| input.set(text),
                move || listening.set(false),
            );
        });
        match result {
            Ok(()) => listening.set(true),
            Err(SpeechError::Disabled) => {
                notice.set("Enable Speech-to-Text in the Accessibility Center to use the microphone.".to_owned());
            }
            Err(err) => notice.set(err.to_string()),
        }
    };

    let bubble = move |message: TutorMessage| {
        let stamp = time_of_day(message.sent_at_ms);
        let content = message.content.clone();
        let body = match message.sender {
            Sender::Bot => view! {
                <div class="chat__markdown" inner_html=render_markdown_html(&message.content)></div>
            }
            .into_any(),
            Sender::User => view! { <p>{message.content}</p> }.into_any(),
        };
        let is_bot = message.sender == Sender::Bot;
        view! {
            <div class="chat__row" class:chat__row--user=!is_bot>
                <div class="chat__bubble" class:chat__bubble--bot=is_bot>
                    {body}
                    <div class="chat__meta">
                        <span>{stamp}</span>
                        {is_bot.then(move || view! {
                            <button
                                class="btn btn--ghost btn--xs"
                                title="Read aloud"
                                on:click=move |_| {
                                    if !speech::speak(&settings.get_untracked(), &content) {
                                        notice.set("Enable Text-to-Speech to hear replies.".to_owned());
                                    }
                                }
                            >
                                "🔊"
                            </button>
                        })}
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <div class="tutor">
            <section class="card tutor__chat">
                <div class="card__head">
                    <h2>"🤖 " {move || t(lang(), "tutor.title")}</h2>
                </div>
                <div class="chat__log">
                    {move || chat.get().messages().iter().cloned().map(bubble).collect_view()}
                    <Show when=move || chat.get().is_pending()>
                        <div class="chat__row">
                            <div class="chat__bubble chat__bubble--bot chat__typing">"…"</div>
                        </div>
                    </Show>
                </div>
                <Show when=move || !notice.get().is_empty()>
                    <p class="notice">{move || notice.get()}</p>
                </Show>
                <form
                    class="chat__composer"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        send(input.get_untracked());
                    }
                >
                    <input
                        type="text"
                        placeholder=move || t(lang(), "tutor.placeholder")
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        disabled=move || chat.get().is_pending()
                    />
                    <button
                        type="button"
                        class="btn btn--ghost"
                        title="Speak your question"
                        disabled=move || listening.get()
                        on:click=start_listening
                    >
                        {move || if listening.get() { "🎙️" } else { "🎤" }}
                    </button>
                    <button
                        type="submit"
                        class="btn"
                        disabled=move || chat.get().is_pending() || input.get().trim().is_empty()
                    >
                        "Send"
                    </button>
                </form>
            </section>

            <aside class="tutor__side">
                <section class="card">
                    <h3>{move || t(lang(), "tutor.settings")}</h3>
                    <label class="field">
                        <span>{move || t(lang(), "tutor.language")}</span>
                        <select
                            prop:value=move || lang().code()
                            on:change=move |ev| {
                                if let Some(language) = Language::from_code(&event_target_value(&ev)) {
                                    settings.update(|s| s.apply(SettingsUpdate::Language(language)));
                                }
                            }
                        >
                            {Language::ALL
                                .into_iter()
                                .map(|l| view! { <option value=l.code()>{l.flag()} " " {l.native_name()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                </section>
                <section class="card">
                    <h3>{move || t(lang(), "tutor.suggestedQuestions")}</h3>
                    <div class="stack stack--tight">
                        {move || {
                            suggested_questions(lang())
                                .into_iter()
                                .map(|q| view! {
                                    <button class="btn btn--outline btn--left" on:click=move |_| input.set(q.to_owned())>
                                        {q}
                                    </button>
                                })
                                .collect_view()
                        }}
                    </div>
                </section>
                <section class="card">
                    <h3>"⚡ Quick Actions"</h3>
                    <div class="stack stack--tight">
                        {move || {
                            quick_actions(lang())
                                .into_iter()
                                .map(|action| view! {
                                    <button class="btn btn--ghost btn--left" on:click=move |_| send(action.to_owned())>
                                        {action}
                                    </button>
                                })
                                .collect_view()
                        }}
                    </div>
                </section>
            </aside>
        </div>
    }
}
