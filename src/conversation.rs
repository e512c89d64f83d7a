use crate::model::{CaptureState, Effect, Effects, ModeState, SpeechError, UtteranceId, VoiceBridge};
use crate::speech::{Recognizer, Synthesizer, UtteranceHooks};
use crate::transport;
use crate::ui::{ChatView, MicButton};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Browser side of the voice bridge: feeds platform events into
/// [`VoiceBridge`] and carries out the effects it returns.
#[derive(Clone)]
pub struct Conversation {
    bridge: Rc<RefCell<VoiceBridge>>,
    mode: Rc<Cell<ModeState>>,
    recognizer: Option<Rc<Recognizer>>,
    synth: Option<Rc<Synthesizer>>,
    chat_view: ChatView,
    mic: MicButton,
    endpoint: Rc<str>,
}

pub struct ConversationParts {
    pub bridge: VoiceBridge,
    pub mode: Rc<Cell<ModeState>>,
    pub recognizer: Option<Recognizer>,
    pub synth: Option<Synthesizer>,
    pub chat_view: ChatView,
    pub mic: MicButton,
    pub endpoint: String,
}

impl Conversation {
    pub fn new(parts: ConversationParts) -> Self {
        let this = Self {
            bridge: Rc::new(RefCell::new(parts.bridge)),
            mode: parts.mode,
            recognizer: parts.recognizer.map(Rc::new),
            synth: parts.synth.map(Rc::new),
            chat_view: parts.chat_view,
            mic: parts.mic,
            endpoint: parts.endpoint.into(),
        };
        this.wire_recognizer();
        this.wire_mic_button();
        this
    }

    /// Run one bridge transition, publish the resulting mode, then execute
    /// its effects with the bridge released.
    fn dispatch(&self, f: impl FnOnce(&mut VoiceBridge) -> Effects) {
        let (effects, mode, capture) = {
            let Ok(mut bridge) = self.bridge.try_borrow_mut() else {
                log::error!("[voice] bridge busy; dropping event");
                return;
            };
            let fx = f(&mut *bridge);
            (fx, bridge.mode(), bridge.capture_state())
        };
        self.mode.set(mode);
        self.mic.set_active(capture == CaptureState::Listening);
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::StartCapture => {
                let Some(rec) = &self.recognizer else {
                    return;
                };
                if let Err(e) = rec.start() {
                    self.dispatch(|b| {
                        b.capture_start_failed(&e);
                        Effects::new()
                    });
                }
            }
            Effect::StopCapture => {
                if let Some(rec) = &self.recognizer {
                    rec.stop();
                }
            }
            Effect::Append(entry) => self.chat_view.append(&entry),
            Effect::Send(request) => {
                let this = self.clone();
                spawn_local(async move {
                    let result = transport::send(&this.endpoint, &request).await;
                    this.dispatch(|b| b.reply(result));
                });
            }
            Effect::Speak { id, text } => self.speak(id, &text),
        }
    }

    fn speak(&self, id: UtteranceId, text: &str) {
        let Some(synth) = &self.synth else {
            log::info!("[tts] speech synthesis unavailable; reply not spoken");
            return;
        };
        let (on_start, on_end, on_error) = (self.clone(), self.clone(), self.clone());
        let hooks = UtteranceHooks {
            on_start: Box::new(move || {
                on_start.dispatch(|b| {
                    b.utterance_started(id);
                    Effects::new()
                })
            }),
            on_end: Box::new(move || {
                on_end.dispatch(|b| {
                    b.utterance_ended(id);
                    Effects::new()
                })
            }),
            on_error: Box::new(move |e: SpeechError| {
                on_error.dispatch(|b| {
                    b.utterance_failed(id, &e);
                    Effects::new()
                })
            }),
        };
        if let Err(e) = synth.speak(text, hooks) {
            self.dispatch(|b| {
                b.utterance_failed(id, &e);
                Effects::new()
            });
        }
    }

    fn wire_recognizer(&self) {
        let Some(rec) = &self.recognizer else {
            return;
        };
        let this = self.clone();
        rec.on_start(move || {
            this.dispatch(|b| {
                b.capture_started();
                Effects::new()
            })
        });
        let this = self.clone();
        rec.on_end(move || {
            this.dispatch(|b| {
                b.capture_ended();
                Effects::new()
            })
        });
        let this = self.clone();
        rec.on_result(move |transcript| this.dispatch(|b| b.transcript(&transcript)));
        let this = self.clone();
        rec.on_error(move |e| {
            this.dispatch(|b| {
                b.capture_error(&e);
                Effects::new()
            })
        });
    }

    fn wire_mic_button(&self) {
        let Some(el) = self.mic.element() else {
            log::warn!("[ui] mic button not found; voice capture unavailable");
            return;
        };
        let this = self.clone();
        crate::dom::add_click_listener(el, move || {
            if this.recognizer.is_none() {
                log::warn!("[voice] speech recognition unsupported");
                return;
            }
            this.dispatch(|b| b.toggle());
        });
    }

    /// Stop an active capture, e.g. when the page is being hidden.
    pub fn stop_capture(&self) {
        self.dispatch(|b| b.stop());
    }
}
