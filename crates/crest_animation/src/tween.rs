//! Fixed-duration value tweens
//!
//! A `Tween` interpolates a single value from a start to a target over a
//! fixed duration. The host ticks it at frame cadence and reads the
//! current value; the tween holds no references and mutates nothing, so
//! cancelling is just dropping it.

use crate::easing::Easing;

#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: u32,
    elapsed_ms: f32,
    easing: Easing,
    playing: bool,
}

impl Tween {
    /// Start a tween. A zero duration completes on the first tick.
    pub fn new(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0.0,
            easing,
            playing: true,
        }
    }

    /// Halt the tween where it is. No further ticks advance it.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Normalized progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Advance the tween by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.elapsed_ms += dt_ms;

        if self.elapsed_ms >= self.duration_ms as f32 {
            self.elapsed_ms = self.duration_ms as f32;
            self.playing = false;
            tracing::trace!("tween settled at {}", self.to);
        }
    }
}
