//! Countdown timer state and the plain functions used to display and edit it.

use std::num::IntErrorKind;

/// Shortest duration the minutes field accepts.
pub const MIN_MINUTES: u32 = 1;
/// Longest duration the minutes field accepts (three hours).
pub const MAX_MINUTES: u32 = 180;
/// Duration used when nothing else is configured.
pub const DEFAULT_MINUTES: u32 = 15;

/// At or below this many seconds the display flashes red.
pub const CRITICAL_SECONDS: u32 = 10;
/// At or below this many seconds (and above [`CRITICAL_SECONDS`]) the display turns orange.
pub const WARNING_SECONDS: u32 = 30;

/// Snapshot of the presentation clock.
///
/// `remaining_seconds` never exceeds `total_seconds`, and `total_seconds`
/// always lies within `MIN_MINUTES..=MAX_MINUTES` minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub total_seconds: u32,
    pub remaining_seconds: u32,
    pub is_running: bool,
    pub blink_on: bool,
}

impl TimerState {
    pub fn with_minutes(minutes: u32) -> Self {
        let total_seconds = clamp_minutes(i64::from(minutes)) * 60;
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
            is_running: false,
            blink_on: false,
        }
    }

    /// Whole minutes of the configured duration, never below [`MIN_MINUTES`].
    pub fn total_minutes(&self) -> u32 {
        (self.total_seconds / 60).max(MIN_MINUTES)
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_seconds == 0
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::with_minutes(DEFAULT_MINUTES)
    }
}

pub fn clamp_minutes(minutes: i64) -> u32 {
    minutes.clamp(i64::from(MIN_MINUTES), i64::from(MAX_MINUTES)) as u32
}

/// Parse the minutes field. Surrounding whitespace and a leading sign are
/// accepted; integers too large for `i64` saturate so they still clamp to
/// the nearest bound instead of being rejected.
pub fn parse_minutes(text: &str) -> Option<i64> {
    match text.trim().parse::<i64>() {
        Ok(minutes) => Some(minutes),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Render seconds as `MM:SS`. Minutes grow past 59 without rolling over
/// into hours; negative input shows as `00:00`.
pub fn format_time(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
