use super::constants::*;
use super::interaction::PointerOffset;
use super::mode::{ModeState, VisualMode};
use super::scene::ReactorScene;
use rand::Rng;

/// Immutable view of the inputs for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub mode: ModeState,
    pub pointer: PointerOffset,
}

/// One step of a first-order low-pass filter. Never overshoots for
/// `factor` in (0, 1].
#[inline]
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

impl ReactorScene {
    /// Advance the scene by one tick. Steps run in a fixed order; the
    /// returned mode is the one applied to the materials this tick.
    pub fn advance<R: Rng>(&mut self, input: &FrameInput, rng: &mut R) -> VisualMode {
        self.time += TIME_STEP;

        // parallax: pointer x drives yaw, pointer y drives pitch
        let rot = &mut self.group.rotation;
        rot.y = ease_toward(rot.y, input.pointer.x, PARALLAX_SMOOTHING);
        rot.x = ease_toward(rot.x, input.pointer.y, PARALLAX_SMOOTHING);

        let core = &mut self.core.transform.rotation;
        core.y += CORE_SPIN_Y;
        core.z += CORE_SPIN_Z;
        let inner = &mut self.inner_ring.transform.rotation;
        inner.x += INNER_SPIN_X;
        inner.y += INNER_SPIN_Y;

        let outer = &mut self.outer_ring.transform.rotation;
        outer.x = OUTER_BASE_TILT + self.time.sin() * OUTER_WOBBLE_AMPLITUDE;
        outer.y += OUTER_SPIN_Y;

        self.particles.step(rng);

        let mode = input.mode.visual_mode();
        let (core_color, inner_color) = mode.palette();
        self.core.material.color = core_color;
        self.inner_ring.material.color = inner_color;
        self.core.transform.set_uniform_scale(mode.core_scale(self.time));
        self.inner_ring.transform.rotation.y += mode.inner_spin_bonus();
        mode
    }
}
