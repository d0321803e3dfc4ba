//! Host frame callback adapter
//!
//! Turns the host's monotonic frame timestamps into `(dt, t)` pairs and runs
//! one tick per frame. The 50 ms clamp itself lives in [`tick`].

use super::input::Controls;
use super::state::GameState;
use super::tick::tick;

/// Drives the simulation from a refresh-rate callback.
///
/// Events queue up on the [`GameState`]; the host drains them with
/// [`GameState::drain_events`] after each frame.
#[derive(Debug, Clone, Default)]
pub struct TickDriver {
    last_frame_ms: Option<f64>,
    paused: bool,
}

impl TickDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop ticking; state stays exactly as the last completed tick left it
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume ticking; the first frame after resuming covers no time
    pub fn resume(&mut self) {
        self.paused = false;
        self.last_frame_ms = None;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Handle one host frame at monotonic time `now_ms`.
    /// Returns the elapsed time handed to the tick, or `None` while paused.
    pub fn frame(&mut self, state: &mut GameState, controls: &Controls, now_ms: f64) -> Option<f32> {
        if self.paused {
            return None;
        }
        let dt = match self.last_frame_ms {
            Some(last) => (now_ms - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        tick(state, controls.snapshot(), dt, now_ms);
        Some(dt)
    }
}
