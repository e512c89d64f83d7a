// Render-loop and surface tuning constants.
//
// Scene laws (spin rates, palette, particle flow) live in
// `model::constants`; these only concern the browser-side plumbing.
use std::time::Duration;

// Surface is composited over the page, so clear to transparent
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::TRANSPARENT;

// Frame diagnostics
pub const STATS_WINDOW_TICKS: u32 = 600;
pub const SLOW_TICK: Duration = Duration::from_millis(50);

// Shown once at load when speech capture is missing
pub const UNSUPPORTED_SPEECH_ALERT: &str =
    "Your browser does not support Speech Recognition. Please use Chrome or Edge.";

// <body data-chat-endpoint="..."> overrides the default chat endpoint
pub const ENDPOINT_ATTRIBUTE: &str = "data-chat-endpoint";
// <body data-seed="42"> pins the particle RNG for reproducible runs
pub const SEED_ATTRIBUTE: &str = "data-seed";
