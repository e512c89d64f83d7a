use crate::model::{pick_voice, SpeechError};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}

// Chrome only ships the prefixed constructor
const RECOGNITION_CTORS: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

/// Platform speech-to-text, configured for single final results.
pub struct Recognizer {
    inner: web::SpeechRecognition,
}

impl Recognizer {
    pub fn new(lang: &str) -> Result<Self, SpeechError> {
        let window = web::window().ok_or(SpeechError::Unsupported)?;
        let ctor = RECOGNITION_CTORS
            .iter()
            .find_map(|name| {
                js_sys::Reflect::get(&window, &JsValue::from_str(name))
                    .ok()
                    .filter(|v| v.is_function())
            })
            .ok_or(SpeechError::Unsupported)?;
        let ctor: js_sys::Function = ctor.unchecked_into();
        let obj = js_sys::Reflect::construct(&ctor, &js_sys::Array::new())
            .map_err(|e| SpeechError::Capture(js_err(e)))?;
        let inner: web::SpeechRecognition = obj.unchecked_into();
        inner.set_lang(lang);
        inner.set_interim_results(false);
        inner.set_max_alternatives(1);
        Ok(Self { inner })
    }

    pub fn start(&self) -> Result<(), SpeechError> {
        self.inner
            .start()
            .map_err(|e| SpeechError::Capture(js_err(e)))
    }

    pub fn stop(&self) {
        self.inner.stop();
    }

    pub fn on_start(&self, mut handler: impl FnMut() + 'static) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        self.inner.set_onstart(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    pub fn on_end(&self, mut handler: impl FnMut() + 'static) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        self.inner.set_onend(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    /// Called with the first alternative of the first result.
    pub fn on_result(&self, mut handler: impl FnMut(String) + 'static) {
        let closure = Closure::wrap(Box::new(move |ev: web::SpeechRecognitionEvent| {
            let transcript = ev
                .results()
                .and_then(|list| list.get(0))
                .and_then(|result| result.get(0))
                .map(|alt| alt.transcript());
            match transcript {
                Some(t) => handler(t),
                None => log::warn!("[voice] result event without a transcript"),
            }
        }) as Box<dyn FnMut(_)>);
        self.inner.set_onresult(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    pub fn on_error(&self, mut handler: impl FnMut(SpeechError) + 'static) {
        let closure = Closure::wrap(Box::new(move |ev: web::SpeechRecognitionError| {
            handler(SpeechError::Capture(format!(
                "{:?} {}",
                ev.error(),
                ev.message()
            )));
        }) as Box<dyn FnMut(_)>);
        self.inner.set_onerror(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }
}

/// Callbacks for one utterance; each fires at most once.
pub struct UtteranceHooks {
    pub on_start: Box<dyn FnOnce()>,
    pub on_end: Box<dyn FnOnce()>,
    pub on_error: Box<dyn FnOnce(SpeechError)>,
}

/// Platform text-to-speech with ranked voice preference.
pub struct Synthesizer {
    synth: web::SpeechSynthesis,
    preferences: Rc<Vec<String>>,
    cached_voice: Rc<RefCell<Option<web::SpeechSynthesisVoice>>>,
    waiting_for_voices: Rc<Cell<bool>>,
}

fn resolve_from_list(
    synth: &web::SpeechSynthesis,
    preferences: &[String],
) -> Option<Option<web::SpeechSynthesisVoice>> {
    let voices: Vec<web::SpeechSynthesisVoice> = synth
        .get_voices()
        .iter()
        .map(|v| v.unchecked_into::<web::SpeechSynthesisVoice>())
        .collect();
    if voices.is_empty() {
        return None;
    }
    let names: Vec<String> = voices.iter().map(|v| v.name()).collect();
    Some(pick_voice(&names, preferences).map(|i| voices[i].clone()))
}

impl Synthesizer {
    /// `None` when the page has no `speechSynthesis`.
    pub fn new(preferences: Vec<String>) -> Option<Self> {
        let window = web::window()?;
        if !js_sys::Reflect::has(&window, &JsValue::from_str("speechSynthesis")).unwrap_or(false) {
            return None;
        }
        let synth = window.speech_synthesis().ok()?;
        Some(Self {
            synth,
            preferences: Rc::new(preferences),
            cached_voice: Rc::new(RefCell::new(None)),
            waiting_for_voices: Rc::new(Cell::new(false)),
        })
    }

    // The voice list may still be loading; in that case hook voiceschanged
    // once and fall back to whatever was cached (usually the default voice).
    fn resolve_voice(&self) -> Option<web::SpeechSynthesisVoice> {
        match resolve_from_list(&self.synth, &self.preferences) {
            Some(choice) => {
                *self.cached_voice.borrow_mut() = choice.clone();
                choice
            }
            None => {
                self.wait_for_voices();
                self.cached_voice.borrow().clone()
            }
        }
    }

    fn wait_for_voices(&self) {
        if self.waiting_for_voices.replace(true) {
            return;
        }
        let synth = self.synth.clone();
        let preferences = self.preferences.clone();
        let cache = self.cached_voice.clone();
        let waiting = self.waiting_for_voices.clone();
        let callback = Closure::once_into_js(move || {
            synth.set_onvoiceschanged(None);
            waiting.set(false);
            if let Some(choice) = resolve_from_list(&synth, &preferences) {
                log::info!(
                    "[tts] voices ready; preferred={:?}",
                    choice.as_ref().map(|v| v.name())
                );
                *cache.borrow_mut() = choice;
            }
        });
        self.synth
            .set_onvoiceschanged(Some(callback.unchecked_ref()));
    }

    /// Cancel anything in flight, then speak `text`.
    pub fn speak(&self, text: &str, hooks: UtteranceHooks) -> Result<(), SpeechError> {
        self.synth.cancel();
        let utterance = web::SpeechSynthesisUtterance::new_with_text(text)
            .map_err(|e| SpeechError::Synthesis(js_err(e)))?;
        if let Some(voice) = self.resolve_voice() {
            utterance.set_voice(Some(&voice));
        }

        let UtteranceHooks {
            on_start,
            on_end,
            on_error,
        } = hooks;
        let start_cb = Closure::once_into_js(move || on_start());
        let end_cb = Closure::once_into_js(move || on_end());
        let error_cb = Closure::once_into_js(move |ev: web::SpeechSynthesisErrorEvent| {
            on_error(SpeechError::Synthesis(format!("{:?}", ev.error())));
        });
        utterance.set_onstart(Some(start_cb.unchecked_ref()));
        utterance.set_onend(Some(end_cb.unchecked_ref()));
        utterance.set_onerror(Some(error_cb.unchecked_ref()));

        self.synth.speak(&utterance);
        Ok(())
    }
}
