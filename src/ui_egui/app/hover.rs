use std::time::{Duration, Instant};

use crate::ui_egui::fade::{FadeTween, HOVER_FADE_DURATION};

/// Visibility of the pause/reset/close tray, faded in and out as the
/// pointer enters and leaves the window.
#[derive(Debug, Clone, Copy)]
pub(super) struct HoverTray {
    tween: FadeTween,
    started_at: Instant,
    shown: bool,
}

impl HoverTray {
    /// Starts hidden, without animating.
    pub(super) fn hidden(now: Instant) -> Self {
        Self {
            tween: FadeTween::settled(0.0),
            started_at: now,
            shown: false,
        }
    }

    /// Fade towards shown or hidden, starting from the current opacity.
    /// Repeating the current target does not restart the fade.
    pub(super) fn set_visible(&mut self, visible: bool, now: Instant) {
        if visible == self.shown {
            return;
        }
        let from = self.opacity(now);
        let to = if visible { 1.0 } else { 0.0 };
        self.tween = FadeTween::new(from, to, HOVER_FADE_DURATION);
        self.started_at = now;
        self.shown = visible;
    }

    pub(super) fn opacity(&self, now: Instant) -> f32 {
        self.tween.sample(self.elapsed(now))
    }

    pub(super) fn is_animating(&self, now: Instant) -> bool {
        !self.tween.is_finished(self.elapsed(now))
    }

    /// Fully faded out: the tray takes no input and is not drawn.
    pub(super) fn is_hidden(&self, now: Instant) -> bool {
        !self.shown && !self.is_animating(now)
    }

    fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_hidden_without_animation() {
        let t0 = Instant::now();
        let tray = HoverTray::hidden(t0);
        assert!(tray.is_hidden(t0));
        assert!(!tray.is_animating(t0));
        assert_eq!(tray.opacity(t0), 0.0);
    }

    #[test]
    fn fades_in_over_180ms() {
        let t0 = Instant::now();
        let mut tray = HoverTray::hidden(t0);
        tray.set_visible(true, t0);

        assert!(!tray.is_hidden(t0));
        assert!(tray.is_animating(t0 + ms(90)));
        let midway = tray.opacity(t0 + ms(90));
        assert!(midway > 0.0 && midway < 1.0);
        assert_eq!(tray.opacity(t0 + ms(180)), 1.0);
        assert!(!tray.is_animating(t0 + ms(180)));
    }

    #[test]
    fn hidden_only_after_fade_out_completes() {
        let t0 = Instant::now();
        let mut tray = HoverTray::hidden(t0);
        tray.set_visible(true, t0);
        tray.set_visible(false, t0 + ms(500));

        assert!(!tray.is_hidden(t0 + ms(600)));
        assert!(tray.is_hidden(t0 + ms(680)));
    }

    #[test]
    fn reversing_midway_starts_from_current_opacity() {
        let t0 = Instant::now();
        let mut tray = HoverTray::hidden(t0);
        tray.set_visible(true, t0);
        let partial = tray.opacity(t0 + ms(60));

        tray.set_visible(false, t0 + ms(60));

        assert_eq!(tray.opacity(t0 + ms(60)), partial);
        assert_eq!(tray.opacity(t0 + ms(240)), 0.0);
    }

    #[test]
    fn repeated_target_does_not_restart() {
        let t0 = Instant::now();
        let mut tray = HoverTray::hidden(t0);
        tray.set_visible(true, t0);
        tray.set_visible(true, t0 + ms(170));
        assert!(!tray.is_animating(t0 + ms(180)));
    }
}
