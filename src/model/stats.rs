use std::time::Duration;

/// Rolling frame timing over a fixed number of ticks.
pub struct FrameStats {
    window: u32,
    slow_threshold: Duration,
    ticks: u32,
    interval_sum: Duration,
    slow_ticks: u32,
    worst: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub ticks: u32,
    pub avg_fps: f32,
    pub slow_ticks: u32,
    pub worst: Duration,
}

impl FrameStats {
    pub fn new(window: u32, slow_threshold: Duration) -> Self {
        Self {
            window: window.max(1),
            slow_threshold,
            ticks: 0,
            interval_sum: Duration::ZERO,
            slow_ticks: 0,
            worst: Duration::ZERO,
        }
    }

    /// `interval` is the time since the previous tick started, `work` the time
    /// spent inside this tick. Yields a report once per window and resets.
    pub fn record(&mut self, interval: Duration, work: Duration) -> Option<FrameReport> {
        self.ticks += 1;
        self.interval_sum += interval;
        if work > self.slow_threshold {
            self.slow_ticks += 1;
        }
        self.worst = self.worst.max(work);
        if self.ticks < self.window {
            return None;
        }
        let secs = self.interval_sum.as_secs_f32();
        let report = FrameReport {
            ticks: self.ticks,
            avg_fps: if secs > 0.0 {
                self.ticks as f32 / secs
            } else {
                0.0
            },
            slow_ticks: self.slow_ticks,
            worst: self.worst,
        };
        self.ticks = 0;
        self.interval_sum = Duration::ZERO;
        self.slow_ticks = 0;
        self.worst = Duration::ZERO;
        Some(report)
    }
}
