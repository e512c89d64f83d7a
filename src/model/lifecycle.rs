/// `pagehide` / `pageshow`, with the event's `persisted` flag (bfcache).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTransition {
    Hide { persisted: bool },
    Show { persisted: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopCommand {
    Start,
    Stop,
    Keep,
}

impl PageTransition {
    /// Hiding always stops the loop. A restore from the bfcache restarts it;
    /// a fresh load's `pageshow` arrives after startup already began it.
    pub fn loop_command(self) -> LoopCommand {
        match self {
            PageTransition::Hide { .. } => LoopCommand::Stop,
            PageTransition::Show { persisted: true } => LoopCommand::Start,
            PageTransition::Show { persisted: false } => LoopCommand::Keep,
        }
    }

    /// Capture is ended whenever the page goes away.
    pub fn stops_capture(self) -> bool {
        matches!(self, PageTransition::Hide { .. })
    }
}
