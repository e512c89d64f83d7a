use std::f32::consts::FRAC_PI_2;

// Fixed scene parameters and per-tick animation laws.

// Time
pub const TIME_STEP: f32 = 0.01; // logical step per tick, not wall-clock derived

// Parallax
pub const PARALLAX_SMOOTHING: f32 = 0.05; // exponential easing factor per tick
pub const POINTER_OFFSET_SCALE: f32 = 0.001; // px from viewport center -> radians

// Fixed per-tick angular increments (radians)
pub const CORE_SPIN_Y: f32 = -0.02;
pub const CORE_SPIN_Z: f32 = -0.01;
pub const INNER_SPIN_X: f32 = 0.01;
pub const INNER_SPIN_Y: f32 = 0.015;
pub const INNER_SPIN_Y_LISTENING_BONUS: f32 = 0.05;
pub const OUTER_SPIN_Y: f32 = 0.005;

// Outer ring wobble
pub const OUTER_BASE_TILT: f32 = FRAC_PI_2;
pub const OUTER_WOBBLE_AMPLITUDE: f32 = 0.1;

// Particle flow
pub const PARTICLE_COUNT: usize = 800;
pub const PARTICLE_DECAY: f32 = 0.99;
pub const PARTICLE_RESPAWN_THRESHOLD: f32 = 0.1; // checked on X only
pub const PARTICLE_SPAWN_EXTENT: f32 = 10.0; // side of the centered spawn cube

// Core scale laws per mode
pub const LISTENING_SCALE_BASE: f32 = 1.2;
pub const LISTENING_PULSE_FREQ: f32 = 10.0;
pub const LISTENING_PULSE_AMPLITUDE: f32 = 0.1;
pub const SPEAKING_SCALE_BASE: f32 = 1.0;
pub const SPEAKING_PULSE_FREQ: f32 = 20.0;
pub const SPEAKING_PULSE_AMPLITUDE: f32 = 0.2;
pub const IDLE_SCALE: f32 = 1.0;

// Palette (0xRRGGBB)
pub const COLOR_REACTOR_BLUE: u32 = 0x00a8ff;
pub const COLOR_REACTOR_CYAN: u32 = 0x00f3ff;
pub const COLOR_ALERT_RED: u32 = 0xff4757;

// Material opacities
pub const CORE_OPACITY: f32 = 0.8;
pub const INNER_RING_OPACITY: f32 = 0.3;
pub const OUTER_RING_OPACITY: f32 = 0.5;
pub const PARTICLE_OPACITY: f32 = 0.6;

// Geometry
pub const CORE_RADIUS: f32 = 0.8;
pub const CORE_DETAIL: u32 = 2;
pub const INNER_KNOT_RADIUS: f32 = 1.2;
pub const INNER_KNOT_TUBE: f32 = 0.1;
pub const INNER_KNOT_TUBULAR_SEGMENTS: u32 = 100;
pub const INNER_KNOT_RADIAL_SEGMENTS: u32 = 16;
pub const INNER_KNOT_P: u32 = 2;
pub const INNER_KNOT_Q: u32 = 3;
pub const OUTER_TORUS_RADIUS: f32 = 2.2;
pub const OUTER_TORUS_TUBE: f32 = 0.05;
pub const OUTER_TORUS_RADIAL_SEGMENTS: u32 = 16;
pub const OUTER_TORUS_TUBULAR_SEGMENTS: u32 = 100;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;

// Light (kept with the scene; basic materials ignore it)
pub const LIGHT_COLOR: u32 = COLOR_REACTOR_BLUE;
pub const LIGHT_INTENSITY: f32 = 2.0;
pub const LIGHT_DISTANCE: f32 = 20.0;

// Fog
pub const FOG_COLOR: u32 = 0x000000;
pub const FOG_DENSITY: f32 = 0.02;

/// Unpack a `0xRRGGBB` color into linear-ish `[r, g, b]` in 0..1.
#[inline]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
