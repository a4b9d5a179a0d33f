//! Opacity tween for the hover tray.
//!
//! A tween is a pure function of elapsed time: the caller records when it
//! started and samples it every frame.

use std::time::Duration;

/// Length of the hover tray fade in either direction.
pub const HOVER_FADE_DURATION: Duration = Duration::from_millis(180);

/// Quadratic ease-in-ease-out over `t` in `0.0..=1.0`.
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeTween {
    from: f32,
    to: f32,
    duration: Duration,
}

impl FadeTween {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from: from.clamp(0.0, 1.0),
            to: to.clamp(0.0, 1.0),
            duration,
        }
    }

    /// A tween that is already at `value`.
    pub fn settled(value: f32) -> Self {
        Self::new(value, value, Duration::ZERO)
    }

    pub fn sample(&self, elapsed: Duration) -> f32 {
        if self.is_finished(elapsed) {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_in_out_quad(t)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
