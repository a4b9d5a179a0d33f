//! Display colour policy for the countdown label.
//!
//! The colour is derived from the timer state on every refresh and never
//! stored.

use crate::models::color::RgbaColor;
use crate::models::timer::{format_time, TimerState, CRITICAL_SECONDS, WARNING_SECONDS};

/// Dark red shown while plenty of time remains.
pub const COLOR_NORMAL: RgbaColor = RgbaColor::opaque(0x8B, 0x00, 0x00);
/// Orange shown during the warning window.
pub const COLOR_WARNING: RgbaColor = RgbaColor::opaque(0xFF, 0x8C, 0x00);
/// Bright half of the critical flash.
pub const COLOR_CRITICAL_ON: RgbaColor = RgbaColor::opaque(0xFF, 0x00, 0x00);
/// Dim half of the critical flash.
pub const COLOR_CRITICAL_OFF: RgbaColor = RgbaColor::opaque(0xAA, 0x00, 0x00);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// More than 30 seconds left
    Normal,
    /// 11 to 30 seconds left
    Warning,
    /// 10 seconds or less, including the finished state
    Critical,
}

impl Urgency {
    pub fn for_remaining(remaining_seconds: u32) -> Self {
        if remaining_seconds <= CRITICAL_SECONDS {
            Urgency::Critical
        } else if remaining_seconds <= WARNING_SECONDS {
            Urgency::Warning
        } else {
            Urgency::Normal
        }
    }
}

pub fn time_color(remaining_seconds: u32, blink_on: bool) -> RgbaColor {
    match Urgency::for_remaining(remaining_seconds) {
        Urgency::Critical if blink_on => COLOR_CRITICAL_ON,
        Urgency::Critical => COLOR_CRITICAL_OFF,
        Urgency::Warning => COLOR_WARNING,
        Urgency::Normal => COLOR_NORMAL,
    }
}

/// Everything the label needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockDisplay {
    pub text: String,
    pub color: RgbaColor,
}

impl ClockDisplay {
    pub fn for_state(state: &TimerState) -> Self {
        Self {
            text: format_time(i64::from(state.remaining_seconds)),
            color: time_color(state.remaining_seconds, state.blink_on),
        }
    }
}
