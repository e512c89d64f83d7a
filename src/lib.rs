#![cfg(target_arch = "wasm32")]
use crate::conversation::{Conversation, ConversationParts};
use crate::model::{LoopCommand, ModeState, PointerOffset, ReactorConfig, SpeechError, VoiceBridge};
use crate::speech::{Recognizer, Synthesizer};
use crate::ui::{ChatView, MicButton};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod conversation;
mod dom;
mod events;
mod frame;
pub mod model;
mod render;
mod scene;
mod speech;
mod transport;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reactor-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn load_config(document: &web::Document) -> ReactorConfig {
    let body = document.body();
    let attr = |name: &str| body.as_ref().and_then(|b| b.get_attribute(name));
    let config = ReactorConfig::default()
        .with_endpoint_override(attr(constants::ENDPOINT_ATTRIBUTE).as_deref())
        .with_seed_override(attr(constants::SEED_ATTRIBUTE).as_deref());
    log::info!(
        "[ui] chat endpoint={} lang={} seed={:?}",
        config.chat_endpoint,
        config.recognition_lang,
        config.seed
    );
    config
}

fn build_recognizer(window: &web::Window, lang: &str) -> Option<Recognizer> {
    match Recognizer::new(lang) {
        Ok(r) => Some(r),
        Err(SpeechError::Unsupported) => {
            log::warn!("[voice] speech recognition unsupported");
            _ = window.alert_with_message(constants::UNSUPPORTED_SPEECH_ALERT);
            None
        }
        Err(e) => {
            log::error!("[voice] recognizer setup failed: {}", e);
            None
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = load_config(&document);

    // Written by the conversation and pointer handlers, read once per tick
    let mode = Rc::new(Cell::new(ModeState::default()));
    let pointer = Rc::new(Cell::new(PointerOffset::default()));

    let recognizer = build_recognizer(&window, &config.recognition_lang);
    let synth = Synthesizer::new(config.preferred_voices.clone());
    if synth.is_none() {
        log::warn!("[tts] speech synthesis unsupported; replies are text-only");
    }
    let conversation = Conversation::new(ConversationParts {
        bridge: VoiceBridge::new(config.fallback_reply.clone()),
        mode: mode.clone(),
        recognizer,
        synth,
        chat_view: ChatView::new(&document, &config.chat_area_id),
        mic: MicButton::new(&document, &config.mic_button_id),
        endpoint: config.chat_endpoint.clone(),
    });

    let render_loop = match scene::initialize(&document, &config).await {
        Some(handle) => {
            events::wire_pointermove(&document, pointer.clone());
            let ctx = frame::FrameContext::new(handle, mode, pointer);
            let render_loop = Rc::new(frame::RenderLoop::new(ctx));
            render_loop.start();
            Some(render_loop)
        }
        None => None,
    };

    events::wire_page_transitions(move |transition| {
        log::info!("[ui] {:?}", transition);
        if let Some(l) = &render_loop {
            match transition.loop_command() {
                LoopCommand::Start => l.start(),
                LoopCommand::Stop => l.stop(),
                LoopCommand::Keep => {}
            }
        }
        if transition.stops_capture() {
            conversation.stop_capture();
        }
    });

    Ok(())
}
