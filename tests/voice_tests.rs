// Host-side tests for the voice bridge state machine.
// The main crate is wasm-only, so we pull the pure model tree in by path.

#![allow(dead_code)]
#[path = "../src/model/mod.rs"]
mod model;

use model::*;

fn bridge() -> VoiceBridge {
    VoiceBridge::new(ReactorConfig::default().fallback_reply)
}

fn ok(text: &str) -> Result<ChatResponse, TransportError> {
    Ok(ChatResponse {
        response: text.to_string(),
    })
}

fn speak_id(effects: &Effects) -> UtteranceId {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::Speak { id, .. } => Some(*id),
            _ => None,
        })
        .expect("speak effect")
}

#[test]
fn full_voice_turn() {
    let mut b = bridge();
    assert_eq!(b.toggle().as_slice(), &[Effect::StartCapture]);
    assert!(!b.mode().listening);

    b.capture_started();
    assert!(b.mode().listening);
    assert_eq!(b.capture_state(), CaptureState::Listening);

    let fx = b.transcript("turn on the lights");
    let user = ChatEntry {
        text: "turn on the lights".into(),
        sender: Sender::User,
    };
    assert_eq!(
        fx.as_slice(),
        &[
            Effect::Append(user),
            Effect::Send(ChatRequest::new("turn on the lights"))
        ]
    );
    let Effect::Send(req) = &fx[1] else {
        panic!("expected send");
    };
    assert_eq!(req.to_json().unwrap(), r#"{"message":"turn on the lights"}"#);

    b.capture_ended();
    assert!(!b.mode().listening);

    let fx = b.reply(ok("Lights on."));
    assert_eq!(fx.len(), 2);
    assert_eq!(
        fx[0],
        Effect::Append(ChatEntry {
            text: "Lights on.".into(),
            sender: Sender::Assistant
        })
    );
    let id = speak_id(&fx);
    assert!(matches!(&fx[1], Effect::Speak { text, .. } if text == "Lights on."));

    b.utterance_started(id);
    assert!(b.mode().speaking);
    assert_eq!(b.mode().visual_mode(), VisualMode::Speaking);
    b.utterance_ended(id);
    assert!(!b.mode().speaking);
    assert_eq!(b.mode().visual_mode(), VisualMode::Idle);

    assert_eq!(b.log().len(), 2);
}

#[test]
fn server_error_appends_single_fallback() {
    let mut b = bridge();
    b.transcript("hello");
    let fx = b.reply(ChatResponse::from_reply(500, ""));
    assert_eq!(
        fx.as_slice(),
        &[Effect::Append(ChatEntry {
            text: "Server unreachable.".into(),
            sender: Sender::Assistant
        })]
    );
    assert_eq!(b.log().len(), 2);
    assert!(!b.mode().speaking);
}

#[test]
fn network_error_is_not_spoken() {
    let mut b = bridge();
    let fx = b.reply(Err(TransportError::Network("offline".into())));
    assert_eq!(fx.len(), 1);
    assert!(!fx.iter().any(|e| matches!(e, Effect::Speak { .. })));
}

#[test]
fn empty_reply_is_logged_but_silent() {
    let mut b = bridge();
    let fx = b.reply(ok(""));
    assert_eq!(fx.len(), 1);
    assert!(matches!(&fx[0], Effect::Append(e) if e.text.is_empty()));
}

#[test]
fn empty_transcript_is_ignored() {
    let mut b = bridge();
    assert!(b.transcript("").is_empty());
    assert!(b.transcript("   ").is_empty());
    assert!(b.log().is_empty());
}

#[test]
fn stale_utterance_end_keeps_speaking() {
    let mut b = bridge();
    let first = speak_id(&b.reply(ok("one")));
    b.utterance_started(first);
    let second = speak_id(&b.reply(ok("two")));
    assert_ne!(first, second);

    // the cancelled first utterance reports its end late
    b.utterance_ended(first);
    assert!(b.mode().speaking);

    b.utterance_started(second);
    b.utterance_ended(second);
    assert!(!b.mode().speaking);
}

#[test]
fn utterance_failure_clears_speaking() {
    let mut b = bridge();
    let id = speak_id(&b.reply(ok("hi")));
    b.utterance_started(id);
    b.utterance_failed(id, &SpeechError::Synthesis("interrupted".into()));
    assert!(!b.mode().speaking);
}

#[test]
fn toggle_while_listening_stops() {
    let mut b = bridge();
    b.capture_started();
    assert_eq!(b.toggle().as_slice(), &[Effect::StopCapture]);
    assert_eq!(b.stop().as_slice(), &[Effect::StopCapture]);
}

#[test]
fn stop_when_idle_is_noop() {
    let mut b = bridge();
    assert!(b.stop().is_empty());
    assert_eq!(b.mode(), ModeState::default());
}

#[test]
fn capture_errors_return_to_idle() {
    let mut b = bridge();
    b.capture_started();
    b.capture_error(&SpeechError::Capture("no-speech".into()));
    assert!(!b.mode().listening);
    assert_eq!(b.capture_state(), CaptureState::Idle);

    b.capture_started();
    b.capture_start_failed(&SpeechError::Capture("InvalidStateError".into()));
    assert_eq!(b.capture_state(), CaptureState::Idle);
    assert_eq!(b.toggle().as_slice(), &[Effect::StartCapture]);
}

#[test]
fn listening_and_speaking_can_overlap() {
    let mut b = bridge();
    let id = speak_id(&b.reply(ok("working on it")));
    b.utterance_started(id);
    b.capture_started();
    assert!(b.mode().listening && b.mode().speaking);
    assert_eq!(b.mode().visual_mode(), VisualMode::Listening);
}

#[test]
fn voice_preference_is_ranked() {
    let prefs = ReactorConfig::default().preferred_voices;
    let names = ["Samantha", "Google US English", "Alex"];
    assert_eq!(pick_voice(&names, &prefs), Some(1));

    let names = ["Alex", "Microsoft Zira - English (United States)"];
    assert_eq!(pick_voice(&names, &prefs), Some(1));

    let names = ["Alex", "Daniel"];
    assert_eq!(pick_voice(&names, &prefs), None);
    assert_eq!(pick_voice::<&str>(&[], &prefs), None);
}
