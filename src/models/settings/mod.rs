// Widget settings
// Read once at startup from an optional TOML file; never written back.

use serde::Deserialize;

use crate::models::timer::{clamp_minutes, DEFAULT_MINUTES};

pub const DEFAULT_FONT_SIZE: f32 = 40.0;
pub const MIN_FONT_SIZE: f32 = 12.0;
pub const MAX_FONT_SIZE: f32 = 160.0;
pub const DEFAULT_POSITION_X_FRACTION: f32 = 0.7;
pub const DEFAULT_POSITION_Y_FRACTION: f32 = 0.1;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    /// Countdown length the widget opens with, in minutes.
    pub default_minutes: u32,
    /// Show the pause/reset/close tray when the pointer is over the widget.
    pub show_hover_controls: bool,
    /// Point size of the `MM:SS` label.
    pub font_size: f32,
    /// Initial horizontal position as a fraction of the primary work area.
    pub position_x_fraction: f32,
    /// Initial vertical position as a fraction of the primary work area.
    pub position_y_fraction: f32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            default_minutes: DEFAULT_MINUTES,
            show_hover_controls: true,
            font_size: DEFAULT_FONT_SIZE,
            position_x_fraction: DEFAULT_POSITION_X_FRACTION,
            position_y_fraction: DEFAULT_POSITION_Y_FRACTION,
        }
    }
}

impl WidgetConfig {
    /// Pull every value back into its supported range, logging what changed.
    pub fn sanitized(mut self) -> Self {
        let minutes = clamp_minutes(i64::from(self.default_minutes));
        if minutes != self.default_minutes {
            log::warn!(
                "default_minutes {} out of range, using {}",
                self.default_minutes,
                minutes
            );
            self.default_minutes = minutes;
        }

        self.font_size = sanitize_f32(
            "font_size",
            self.font_size,
            MIN_FONT_SIZE,
            MAX_FONT_SIZE,
            DEFAULT_FONT_SIZE,
        );
        self.position_x_fraction = sanitize_f32(
            "position_x_fraction",
            self.position_x_fraction,
            0.0,
            1.0,
            DEFAULT_POSITION_X_FRACTION,
        );
        self.position_y_fraction = sanitize_f32(
            "position_y_fraction",
            self.position_y_fraction,
            0.0,
            1.0,
            DEFAULT_POSITION_Y_FRACTION,
        );
        self
    }
}

fn sanitize_f32(name: &str, value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if !value.is_finite() {
        log::warn!("{} is not a finite number, using {}", name, fallback);
        return fallback;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::warn!("{} {} out of range, using {}", name, value, clamped);
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_presentation_layout() {
        let config = WidgetConfig::default();
        assert_eq!(config.default_minutes, 15);
        assert!(config.show_hover_controls);
        assert_eq!(config.font_size, 40.0);
        assert_eq!(config.position_x_fraction, 0.7);
        assert_eq!(config.position_y_fraction, 0.1);
    }

    #[test]
    fn sanitized_clamps_every_field() {
        let config = WidgetConfig {
            default_minutes: 0,
            show_hover_controls: false,
            font_size: 4.0,
            position_x_fraction: 1.5,
            position_y_fraction: f32::NAN,
        }
        .sanitized();

        assert_eq!(config.default_minutes, 1);
        assert!(!config.show_hover_controls);
        assert_eq!(config.font_size, MIN_FONT_SIZE);
        assert_eq!(config.position_x_fraction, 1.0);
        assert_eq!(config.position_y_fraction, DEFAULT_POSITION_Y_FRACTION);
    }

    #[test]
    fn sanitized_leaves_valid_config_untouched() {
        let config = WidgetConfig {
            default_minutes: 45,
            ..WidgetConfig::default()
        };
        assert_eq!(config.clone().sanitized(), config);
    }
}
