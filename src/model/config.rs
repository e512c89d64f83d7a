/// Runtime knobs for the page wiring. Visual laws are compile-time
/// constants and live in `constants.rs`.
#[derive(Clone, Debug)]
pub struct ReactorConfig {
    pub chat_endpoint: String,
    pub recognition_lang: String,
    /// Ranked voice-name substrings; the first one that matches wins.
    pub preferred_voices: Vec<String>,
    pub fallback_reply: String,
    pub canvas_container_id: String,
    pub mic_button_id: String,
    pub chat_area_id: String,
    /// `None` seeds the particle RNG from entropy.
    pub seed: Option<u64>,
}

impl Default for ReactorConfig {
    fn default() -> Self {
        Self {
            chat_endpoint: "/api/chat".to_string(),
            recognition_lang: "en-US".to_string(),
            preferred_voices: ["Google US English", "Microsoft Zira", "Samantha"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            fallback_reply: "Server unreachable.".to_string(),
            canvas_container_id: "canvas-container".to_string(),
            mic_button_id: "mic-button".to_string(),
            chat_area_id: "chat-area".to_string(),
            seed: None,
        }
    }
}

impl ReactorConfig {
    /// Apply an endpoint override (e.g. from a `data-chat-endpoint`
    /// attribute); blank values keep the default.
    pub fn with_endpoint_override(mut self, endpoint: Option<&str>) -> Self {
        if let Some(ep) = endpoint.map(str::trim).filter(|ep| !ep.is_empty()) {
            self.chat_endpoint = ep.to_string();
        }
        self
    }

    /// Apply a decimal seed override (e.g. from `data-seed`); anything that
    /// does not parse as a `u64` keeps the entropy default.
    pub fn with_seed_override(mut self, seed: Option<&str>) -> Self {
        if let Some(s) = seed.map(str::trim).filter(|s| !s.is_empty()) {
            match s.parse::<u64>() {
                Ok(v) => self.seed = Some(v),
                Err(e) => log::warn!("[ui] ignoring seed {:?}: {}", s, e),
            }
        }
        self
    }
}
