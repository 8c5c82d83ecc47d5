//! Accessibility center: feature toggles, language, font size, sign-language
//! helper, speech-to-text demo and presets.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::i18n::Language;
use crate::state::accessibility::{AccessibilitySettings, Feature, FontSize, Preset, SIGN_WORDS, SettingsUpdate};
use crate::util::speech::{self, SpeechError};

const TTS_DEMO: &str = "This is a demonstration of text-to-speech functionality.";

#[component]
pub fn AccessibilityPage() -> impl IntoView {
    let settings = expect_context::<RwSignal<AccessibilitySettings>>();
    let listening = RwSignal::new(false);
    let listener = StoredValue::new_local(speech::Listener::default());
    let transcript = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    let start_listening = move || {
        if listening.get_untracked() {
            return;
        }
        notice.set(String::new());
        let mut result = Ok(());
        listener.update_value(|l| {
            result = l.start(
                &settings.get_untracked(),
                move |text| {
                    transcript.update(|t| {
                        if !t.is_empty() {
                            t.push(' ');
                        }
                        t.push_str(&text);
                    });
                },
                move || listening.set(false),
            );
        });
        match result {
            Ok(()) => listening.set(true),
            Err(SpeechError::Disabled) => notice.set("Please enable Speech-to-Text first.".to_owned()),
            Err(err) => {
                log::warn!("speech-to-text demo unavailable: {err}");
                notice.set(err.to_string());
            }
        }
    };

    let feature_card = move |feature: Feature| {
        let active = move || settings.get().is_enabled(feature);
        let demo = match feature {
            Feature::TextToSpeech => Some(view! {
                <button
                    class="btn btn--ghost btn--sm"
                    on:click=move |_| {
                        if !speech::speak(&settings.get_untracked(), TTS_DEMO) {
                            notice.set("Enable Text-to-Speech to hear the demo.".to_owned());
                        }
                    }
                >
                    "Demo"
                </button>
            }
            .into_any()),
            Feature::SpeechToText => Some(view! {
                <button class="btn btn--ghost btn--sm" on:click=move |_| start_listening()>
                    "Demo"
                </button>
            }
            .into_any()),
            Feature::HighContrast | Feature::DyslexiaFont => None,
        };
        view! {
            <div class="feature-card" class:feature-card--active=active>
                <div class="feature-card__head">
                    <span class="feature-card__icon">{feature.icon()}</span>
                    <div>
                        <h3>{feature.title()}</h3>
                        <p>{feature.description()}</p>
                    </div>
                    <Show when=active>
                        <span class="feature-card__check">"✔"</span>
                    </Show>
                </div>
                <div class="feature-card__actions">
                    <button
                        class="btn btn--sm"
                        class:btn--outline=move || !active()
                        on:click=move |_| settings.update(|s| {
                            let update = s.toggle(feature);
                            s.apply(update);
                        })
                    >
                        {move || if active() { "Enabled" } else { "Enable" }}
                    </button>
                    {demo}
                </div>
            </div>
        }
    };

    view! {
        <DashboardLayout>
            <div class="stack">
                <section class="card card--hero">
                    <h1>"Accessibility Center"</h1>
                    <p>"Customize your learning experience for optimal accessibility and comfort"</p>
                </section>

                <Show when=move || !notice.get().is_empty()>
                    <p class="notice">{move || notice.get()}</p>
                </Show>

                <section class="card">
                    <h2>"Accessibility Features"</h2>
                    <div class="grid-2">{Feature::ALL.into_iter().map(feature_card).collect_view()}</div>
                </section>

                <section class="card">
                    <h2>"🌐 Language Settings"</h2>
                    <div class="grid-4">
                        {Language::ALL
                            .into_iter()
                            .map(|lang| {
                                view! {
                                    <button
                                        class="btn"
                                        class:btn--outline=move || settings.get().language != lang
                                        on:click=move |_| settings.update(|s| s.apply(SettingsUpdate::Language(lang)))
                                    >
                                        {lang.flag()}
                                        " "
                                        {lang.native_name()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="card">
                    <h2>"Font Size"</h2>
                    <div class="row">
                        {FontSize::ALL
                            .into_iter()
                            .map(|size| {
                                view! {
                                    <button
                                        class="btn"
                                        class:btn--outline=move || settings.get().font_size != size
                                        on:click=move |_| settings.update(|s| s.apply(SettingsUpdate::FontSize(size)))
                                    >
                                        {size.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="card">
                    <h2>"✋ Sign Language Helper"</h2>
                    <p>"Common words and phrases with visual representations"</p>
                    <div class="grid-4">
                        {SIGN_WORDS
                            .into_iter()
                            .map(|(word, cue)| {
                                view! {
                                    <button
                                        class="sign-tile"
                                        on:click=move |_| {
                                            speech::speak(&settings.get_untracked(), word);
                                        }
                                    >
                                        <span class="sign-tile__cue">{cue}</span>
                                        <span>{word}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <Show when=move || settings.get().speech_to_text>
                    <section class="card">
                        <h2>"🎤 Speech-to-Text Demo"</h2>
                        <div class="row">
                            <button class="btn" disabled=move || listening.get() on:click=move |_| start_listening()>
                                {move || if listening.get() { "Listening..." } else { "Start Listening" }}
                            </button>
                            <button class="btn btn--outline" on:click=move |_| transcript.set(String::new())>
                                "Clear"
                            </button>
                        </div>
                        <div class="transcript">
                            <div class="transcript__label">"Transcript:"</div>
                            <div>
                                {move || {
                                    let text = transcript.get();
                                    if !text.is_empty() {
                                        text
                                    } else if listening.get() {
                                        "Listening...".to_owned()
                                    } else {
                                        "Click \"Start Listening\" and speak".to_owned()
                                    }
                                }}
                            </div>
                        </div>
                    </section>
                </Show>

                <section class="card">
                    <h2>"⚙ Quick Actions"</h2>
                    <div class="grid-3">
                        {Preset::ALL
                            .into_iter()
                            .map(|preset| {
                                view! {
                                    <button
                                        class="btn btn--outline btn--tall"
                                        on:click=move |_| settings.update(|s| s.apply_preset(preset))
                                    >
                                        {preset.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>
        </DashboardLayout>
    }
}
