//! Voice I/O bridge state machine.
//!
//! Platform speech events come in as method calls; what the page has to do
//! next comes back out as a short list of [`Effect`]s. The bridge is the only
//! writer of [`ModeState`] and of the chat log.

use super::chat::{ChatEntry, ChatLog, ChatRequest, ChatResponse, Sender, TransportError};
use super::mode::ModeState;
use smallvec::{smallvec, SmallVec};
use thiserror::Error;

pub type UtteranceId = u64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    #[error("speech recognition is not supported by this browser")]
    Unsupported,

    #[error("capture error: {0}")]
    Capture(String),

    #[error("synthesis error: {0}")]
    Synthesis(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Listening,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    StartCapture,
    StopCapture,
    Append(ChatEntry),
    Send(ChatRequest),
    /// Cancel whatever is playing, then speak `text`.
    Speak { id: UtteranceId, text: String },
}

pub type Effects = SmallVec<[Effect; 2]>;

pub struct VoiceBridge {
    capture: CaptureState,
    mode: ModeState,
    log: ChatLog,
    fallback_reply: String,
    next_utterance: UtteranceId,
    active_utterance: Option<UtteranceId>,
}

impl VoiceBridge {
    pub fn new(fallback_reply: impl Into<String>) -> Self {
        Self {
            capture: CaptureState::Idle,
            mode: ModeState::default(),
            log: ChatLog::default(),
            fallback_reply: fallback_reply.into(),
            next_utterance: 1,
            active_utterance: None,
        }
    }

    pub fn mode(&self) -> ModeState {
        self.mode
    }

    pub fn capture_state(&self) -> CaptureState {
        self.capture
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    /// Mic button: start when idle, stop when listening.
    pub fn toggle(&mut self) -> Effects {
        match self.capture {
            CaptureState::Idle => smallvec![Effect::StartCapture],
            CaptureState::Listening => smallvec![Effect::StopCapture],
        }
    }

    /// Explicit stop; nothing to do while idle.
    pub fn stop(&mut self) -> Effects {
        match self.capture {
            CaptureState::Idle => Effects::new(),
            CaptureState::Listening => smallvec![Effect::StopCapture],
        }
    }

    pub fn capture_started(&mut self) {
        self.capture = CaptureState::Listening;
        self.mode.listening = true;
    }

    pub fn capture_start_failed(&mut self, err: &SpeechError) {
        log::error!("[voice] recognition start error: {}", err);
        self.set_idle();
    }

    pub fn capture_ended(&mut self) {
        self.set_idle();
    }

    pub fn capture_error(&mut self, err: &SpeechError) {
        log::error!("[voice] speech recognition error: {}", err);
        self.set_idle();
    }

    fn set_idle(&mut self) {
        self.capture = CaptureState::Idle;
        self.mode.listening = false;
    }

    /// Best transcript of a finished capture: log it and forward it.
    pub fn transcript(&mut self, text: &str) -> Effects {
        if text.trim().is_empty() {
            log::debug!("[voice] ignoring empty transcript");
            return Effects::new();
        }
        let entry = self.log.append(text, Sender::User).clone();
        smallvec![Effect::Append(entry), Effect::Send(ChatRequest::new(text))]
    }

    /// Outcome of a chat round-trip. Failures append the fallback reply and
    /// are never spoken.
    pub fn reply(&mut self, result: Result<ChatResponse, TransportError>) -> Effects {
        match result {
            Ok(resp) => {
                let entry = self.log.append(resp.response.as_str(), Sender::Assistant).clone();
                let mut fx: Effects = smallvec![Effect::Append(entry)];
                if !resp.response.trim().is_empty() {
                    let id = self.begin_utterance();
                    fx.push(Effect::Speak {
                        id,
                        text: resp.response,
                    });
                }
                fx
            }
            Err(e) => {
                log::error!("[chat] {}", e);
                let entry = self
                    .log
                    .append(self.fallback_reply.as_str(), Sender::Assistant)
                    .clone();
                smallvec![Effect::Append(entry)]
            }
        }
    }

    fn begin_utterance(&mut self) -> UtteranceId {
        let id = self.next_utterance;
        self.next_utterance += 1;
        self.active_utterance = Some(id);
        id
    }

    /// Events from superseded utterances are dropped.
    pub fn utterance_started(&mut self, id: UtteranceId) {
        if self.active_utterance == Some(id) {
            self.mode.speaking = true;
        }
    }

    pub fn utterance_ended(&mut self, id: UtteranceId) {
        if self.active_utterance == Some(id) {
            self.active_utterance = None;
            self.mode.speaking = false;
        }
    }

    pub fn utterance_failed(&mut self, id: UtteranceId, err: &SpeechError) {
        log::warn!("[tts] utterance {} failed: {}", id, err);
        self.utterance_ended(id);
    }
}

/// Ranked voice choice: the first preference that is a substring of any
/// voice name wins; within a preference the first matching voice is taken.
pub fn pick_voice<S: AsRef<str>>(voice_names: &[S], preferences: &[String]) -> Option<usize> {
    preferences.iter().find_map(|pref| {
        voice_names
            .iter()
            .position(|name| name.as_ref().contains(pref.as_str()))
    })
}
