use super::constants::*;

/// Voice activity flags. Both may be set at once; [`ModeState::visual_mode`]
/// resolves the priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeState {
    pub listening: bool,
    pub speaking: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualMode {
    Listening,
    Speaking,
    Idle,
}

impl ModeState {
    /// listening > speaking > idle
    #[inline]
    pub fn visual_mode(&self) -> VisualMode {
        if self.listening {
            VisualMode::Listening
        } else if self.speaking {
            VisualMode::Speaking
        } else {
            VisualMode::Idle
        }
    }
}

impl VisualMode {
    /// (core color, inner ring color)
    pub fn palette(self) -> (u32, u32) {
        match self {
            VisualMode::Listening => (COLOR_ALERT_RED, COLOR_ALERT_RED),
            VisualMode::Speaking => (COLOR_REACTOR_CYAN, COLOR_REACTOR_CYAN),
            VisualMode::Idle => (COLOR_REACTOR_BLUE, COLOR_REACTOR_CYAN),
        }
    }

    pub fn core_scale(self, time: f32) -> f32 {
        match self {
            VisualMode::Listening => {
                LISTENING_SCALE_BASE + (time * LISTENING_PULSE_FREQ).sin() * LISTENING_PULSE_AMPLITUDE
            }
            VisualMode::Speaking => {
                SPEAKING_SCALE_BASE + (time * SPEAKING_PULSE_FREQ).sin() * SPEAKING_PULSE_AMPLITUDE
            }
            VisualMode::Idle => IDLE_SCALE,
        }
    }

    /// Extra inner-ring Y spin applied on top of the fixed increment.
    pub fn inner_spin_bonus(self) -> f32 {
        match self {
            VisualMode::Listening => INNER_SPIN_Y_LISTENING_BONUS,
            _ => 0.0,
        }
    }
}
