//! Text-to-speech and speech-to-text through the browser speech APIs.
//!
//! Both helpers do nothing unless the matching accessibility toggle is on.
//! Synthesis goes through `web-sys`; recognition is reached through
//! `js_sys::Reflect` because `SpeechRecognition` (and its `webkit` prefix) is
//! not part of the stable `web-sys` surface.
//!
//! ERROR HANDLING
//! ==============
//! Recognition runtime errors are logged to the console and end the session;
//! callers only learn about failures to start.
//!
//! A recognition session owns its JS callbacks. Dropping the session detaches
//! them from the recognizer, aborts it and frees the closures, so each
//! [`Listener`] holds at most one set of callbacks at a time.

#[cfg(test)]
#[path = "speech_test.rs"]
mod speech_test;

use crate::state::accessibility::AccessibilitySettings;

/// Reasons a recognition session could not start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeechError {
    #[error("speech-to-text is disabled")]
    Disabled,
    #[error("speech recognition is not supported in this browser")]
    Unsupported,
    #[error("speech recognition failed to start: {0}")]
    Failed(String),
}

const SPEECH_RATE: f32 = 0.9;
const SPEECH_PITCH: f32 = 1.0;

/// Whether `text` should be read aloud under `settings`.
pub fn should_speak(settings: &AccessibilitySettings, text: &str) -> bool {
    settings.text_to_speech && !text.trim().is_empty()
}

/// Read `text` aloud in the configured language. Returns whether an
/// utterance was queued.
pub fn speak(settings: &AccessibilitySettings, text: &str) -> bool {
    if !should_speak(settings, text) {
        return false;
    }
    #[cfg(feature = "hydrate")]
    {
        let Some(synth) = web_sys::window().and_then(|w| w.speech_synthesis().ok()) else {
            return false;
        };
        let Ok(utterance) = web_sys::SpeechSynthesisUtterance::new_with_text(text) else {
            return false;
        };
        utterance.set_lang(settings.language.code());
        utterance.set_rate(SPEECH_RATE);
        utterance.set_pitch(SPEECH_PITCH);
        synth.speak(&utterance);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (SPEECH_RATE, SPEECH_PITCH);
        false
    }
}

/// Gate shared by every recognition entry point.
pub fn check_listen(settings: &AccessibilitySettings, supported: bool) -> Result<(), SpeechError> {
    if !settings.speech_to_text {
        return Err(SpeechError::Disabled);
    }
    if !supported {
        return Err(SpeechError::Unsupported);
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
const HANDLER_PROPS: [&str; 3] = ["onresult", "onend", "onerror"];

/// A started recognition session.
#[derive(Default)]
pub struct ListenSession {
    #[cfg(feature = "hydrate")]
    inner: Option<RecognizerHandle>,
}

#[cfg(feature = "hydrate")]
struct RecognizerHandle {
    recognition: wasm_bindgen::JsValue,
    on_result: wasm_bindgen::closure::Closure<dyn FnMut(wasm_bindgen::JsValue)>,
    on_end: wasm_bindgen::closure::Closure<dyn FnMut()>,
    on_error: wasm_bindgen::closure::Closure<dyn FnMut(wasm_bindgen::JsValue)>,
}

#[cfg(feature = "hydrate")]
impl Drop for RecognizerHandle {
    fn drop(&mut self) {
        use js_sys::Reflect;
        use wasm_bindgen::JsCast;

        // Handlers go first so the abort below cannot call a freed closure.
        for prop in HANDLER_PROPS {
            let _ = Reflect::set(&self.recognition, &prop.into(), &wasm_bindgen::JsValue::NULL);
        }
        if let Ok(abort) = Reflect::get(&self.recognition, &"abort".into()) {
            if let Some(abort) = abort.dyn_ref::<js_sys::Function>() {
                let _ = abort.call0(&self.recognition);
            }
        }
    }
}

/// Owner slot for recognition sessions: starting a new session releases the
/// previous one.
#[derive(Default)]
pub struct Listener {
    session: Option<ListenSession>,
}

impl Listener {
    /// Release any previous session and start a new one.
    ///
    /// # Errors
    ///
    /// Same as [`listen`]; on failure the slot is left empty.
    pub fn start<R, E>(&mut self, settings: &AccessibilitySettings, on_result: R, on_end: E) -> Result<(), SpeechError>
    where
        R: Fn(String) + 'static,
        E: Fn() + 'static,
    {
        self.session = None;
        self.session = Some(listen(settings, on_result, on_end)?);
        Ok(())
    }

    pub fn stop(&mut self) {
        self.session = None;
    }

    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.session.is_some()
    }
}

/// Start one single-utterance recognition session. `on_result` receives the
/// final transcript; `on_end` fires when the session closes either way. The
/// callbacks live as long as the returned session.
///
/// # Errors
///
/// Returns [`SpeechError`] when speech-to-text is off, unsupported, or the
/// recognizer refuses to start.
pub fn listen<R, E>(settings: &AccessibilitySettings, on_result: R, on_end: E) -> Result<ListenSession, SpeechError>
where
    R: Fn(String) + 'static,
    E: Fn() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use js_sys::Reflect;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::JsValue;
        use wasm_bindgen::closure::Closure;

        let ctor = recognition_constructor();
        check_listen(settings, ctor.is_some())?;
        let ctor = ctor.ok_or(SpeechError::Unsupported)?;
        let fail = |e: JsValue| SpeechError::Failed(format!("{e:?}"));

        let recognition = Reflect::construct(&ctor, &js_sys::Array::new()).map_err(fail)?;
        Reflect::set(&recognition, &"lang".into(), &settings.language.code().into()).map_err(fail)?;
        Reflect::set(&recognition, &"continuous".into(), &JsValue::FALSE).map_err(fail)?;
        Reflect::set(&recognition, &"interimResults".into(), &JsValue::FALSE).map_err(fail)?;

        let result_cb = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            if let Some(text) = first_transcript(&event) {
                on_result(text);
            }
        });
        let end_cb = Closure::<dyn FnMut()>::new(move || on_end());
        let error_cb = Closure::<dyn FnMut(JsValue)>::new(|event: JsValue| {
            let reason = Reflect::get(&event, &"error".into())
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default();
            log::error!("speech recognition error: {reason}");
        });
        let handle = RecognizerHandle {
            recognition,
            on_result: result_cb,
            on_end: end_cb,
            on_error: error_cb,
        };
        let recognition = &handle.recognition;
        Reflect::set(recognition, &"onresult".into(), handle.on_result.as_ref()).map_err(fail)?;
        Reflect::set(recognition, &"onend".into(), handle.on_end.as_ref()).map_err(fail)?;
        Reflect::set(recognition, &"onerror".into(), handle.on_error.as_ref()).map_err(fail)?;

        let start = Reflect::get(recognition, &"start".into())
            .map_err(fail)?
            .dyn_into::<js_sys::Function>()
            .map_err(fail)?;
        start.call0(recognition).map_err(fail)?;
        Ok(ListenSession { inner: Some(handle) })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (on_result, on_end);
        check_listen(settings, false).map(|()| ListenSession::default())
    }
}

#[cfg(feature = "hydrate")]
fn recognition_constructor() -> Option<js_sys::Function> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window()?;
    ["SpeechRecognition", "webkitSpeechRecognition"]
        .into_iter()
        .filter_map(|name| js_sys::Reflect::get(&window, &name.into()).ok())
        .find(wasm_bindgen::JsValue::is_function)
        .map(|ctor| ctor.unchecked_into::<js_sys::Function>())
}

/// `event.results[0][0].transcript`
#[cfg(feature = "hydrate")]
fn first_transcript(event: &wasm_bindgen::JsValue) -> Option<String> {
    use js_sys::Reflect;

    let results = Reflect::get(event, &"results".into()).ok()?;
    let first = Reflect::get_u32(&results, 0).ok()?;
    let alternative = Reflect::get_u32(&first, 0).ok()?;
    Reflect::get(&alternative, &"transcript".into()).ok()?.as_string()
}
