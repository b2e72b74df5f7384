//! Tick feedback pulse.
//!
//! The terminal stand-in for a selection haptic: every distinct tick
//! briefly highlights the center cursor. The pulse is a timestamp, not an
//! animation; the render path just asks whether it is still live.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TickPulse {
    fired_at: Option<Instant>,
    window: Duration,
}

impl TickPulse {
    pub fn new(window: Duration) -> Self {
        Self {
            fired_at: None,
            window,
        }
    }

    /// Fire the pulse. Retriggering restarts the window.
    pub fn trigger(&mut self) {
        self.fired_at = Some(Instant::now());
    }

    /// Whether the pulse should still be rendered.
    pub fn is_live(&self) -> bool {
        self.fired_at
            .is_some_and(|fired| fired.elapsed() < self.window)
    }

    pub fn clear(&mut self) {
        self.fired_at = None;
    }
}
