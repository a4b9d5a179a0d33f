// Test fixtures - reusable clocks and config files
// Provides consistent starting points across integration tests

#![allow(dead_code)]

use std::time::{Duration, Instant};

use ppt_countdown::services::clock::ClockEngine;

/// Whole seconds after `t0`.
pub fn secs(t0: Instant, seconds: u64) -> Instant {
    t0 + Duration::from_secs(seconds)
}

/// Milliseconds after `t0`.
pub fn millis(t0: Instant, ms: u64) -> Instant {
    t0 + Duration::from_millis(ms)
}

/// A one-minute clock started at `t0` and polled until `remaining`
/// seconds are left. Ticks land on whole seconds after `t0`.
pub fn running_clock_with_remaining(t0: Instant, remaining: u32) -> ClockEngine {
    assert!(remaining <= 60, "fixture clock only holds one minute");
    let mut clock = ClockEngine::new(1);
    clock.start(t0);
    clock.poll(secs(t0, u64::from(60 - remaining)));
    clock
}

/// Config files as a user would write them
pub mod configs {
    pub const LARGE_FONT_NO_TRAY: &str = r#"
default_minutes = 20
show_hover_controls = false
font_size = 64.0
"#;

    pub const OUT_OF_RANGE: &str = r#"
default_minutes = 500
font_size = 4.0
position_x_fraction = 1.5
"#;

    pub const UNKNOWN_KEY: &str = r#"
default_minutes = 10
theme = "dark"
"#;

    pub const MALFORMED: &str = "default_minutes = [";
}
