// Integration tests for the presentation clock and config loading
mod fixtures;

use fixtures::{configs, millis, running_clock_with_remaining, secs};
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::io::Write;
use std::time::Instant;
use test_case::test_case;

use ppt_countdown::models::settings::WidgetConfig;
use ppt_countdown::services::clock::{
    ClockEngine, Urgency, COLOR_CRITICAL_OFF, COLOR_CRITICAL_ON, COLOR_NORMAL, COLOR_WARNING,
};
use ppt_countdown::services::settings::{load_config_or_default, CONFIG_PATH_ENV};

#[test]
fn test_full_presentation_run() {
    let t0 = Instant::now();
    let mut clock = ClockEngine::new(1);
    assert_eq!(clock.display().text, "01:00");

    clock.start(t0);
    clock.poll(secs(t0, 29));
    assert_eq!(clock.display().text, "00:31");
    assert_eq!(clock.display().color, COLOR_NORMAL);

    clock.poll(secs(t0, 30));
    assert_eq!(Urgency::for_remaining(clock.remaining_seconds()), Urgency::Warning);
    assert_eq!(clock.display().color, COLOR_WARNING);

    clock.poll(secs(t0, 49));
    assert!(!clock.is_blink_active());

    clock.poll(secs(t0, 50));
    assert_eq!(clock.remaining_seconds(), 10);
    assert!(clock.is_blink_active());
    assert_eq!(clock.display().color, COLOR_CRITICAL_OFF);

    clock.poll(millis(t0, 50_500));
    assert!(clock.state().blink_on);
    assert_eq!(clock.display().color, COLOR_CRITICAL_ON);

    clock.poll(secs(t0, 60));
    assert_eq!(clock.display().text, "00:00");
    assert!(!clock.is_running());
    assert!(clock.is_finish_flash_pending());
    assert!(clock.is_blink_active());

    clock.poll(millis(t0, 62_200));
    assert!(!clock.is_blink_active());
    assert!(!clock.is_finish_flash_pending());
    assert!(!clock.state().blink_on);
    assert_eq!(clock.next_deadline(), None);

    // Starting again after the finish restarts from the full duration
    clock.start(secs(t0, 70));
    assert!(clock.is_running());
    assert_eq!(clock.remaining_seconds(), 60);
}

#[test]
fn test_pause_holds_remaining_time() {
    let t0 = Instant::now();
    let mut clock = running_clock_with_remaining(t0, 55);

    clock.pause();
    clock.poll(secs(t0, 100));
    assert_eq!(clock.remaining_seconds(), 55);

    clock.start(secs(t0, 100));
    clock.poll(millis(t0, 100_999));
    assert_eq!(clock.remaining_seconds(), 55);
    clock.poll(secs(t0, 101));
    assert_eq!(clock.remaining_seconds(), 54);
}

#[test]
fn test_late_poll_catches_up() {
    let t0 = Instant::now();
    let mut clock = ClockEngine::new(1);
    clock.start(t0);

    // A single late poll replays every missed tick
    clock.poll(secs(t0, 45));
    assert_eq!(clock.remaining_seconds(), 15);
    assert!(clock.is_running());
}

#[test]
fn test_reset_is_idempotent() {
    let t0 = Instant::now();
    let mut clock = running_clock_with_remaining(t0, 5);

    clock.reset();
    let once = clock.clone();
    clock.reset();

    assert_eq!(clock, once);
    assert_eq!(clock.remaining_seconds(), 60);
    assert!(!clock.is_running());
    assert!(!clock.is_blink_active());
    assert!(!clock.state().blink_on);
}

#[test]
fn test_only_idle_clock_is_editable() {
    let t0 = Instant::now();
    let mut clock = running_clock_with_remaining(t0, 40);
    assert!(!clock.can_edit());

    clock.pause();
    assert!(clock.can_edit());
}

#[test_case("0", 1 ; "zero clamps to minimum")]
#[test_case("200", 180 ; "large clamps to maximum")]
#[test_case("-5", 1 ; "negative clamps to minimum")]
#[test_case(" 45 ", 45 ; "surrounding whitespace is ignored")]
#[test_case("abc", 15 ; "non numeric keeps current")]
#[test_case("", 15 ; "empty keeps current")]
#[test_case("99999999999999999999", 180 ; "overflowing number clamps to maximum")]
fn test_commit_duration(text: &str, expected_minutes: u32) {
    let mut clock = ClockEngine::new(15);
    assert_eq!(clock.commit_duration(text), expected_minutes);
    assert_eq!(clock.total_seconds(), expected_minutes * 60);
    assert_eq!(clock.remaining_seconds(), expected_minutes * 60);
}

#[test]
fn test_commit_after_finish_clears_flash() {
    let t0 = Instant::now();
    let mut clock = running_clock_with_remaining(t0, 0);
    assert!(clock.is_finish_flash_pending());

    clock.commit_duration("5");

    assert_eq!(clock.display().text, "05:00");
    assert!(!clock.is_finish_flash_pending());
    assert!(!clock.is_blink_active());
}

#[test]
fn test_shutdown_disarms_everything() {
    let t0 = Instant::now();
    let mut clock = running_clock_with_remaining(t0, 3);
    assert!(clock.next_deadline().is_some());

    clock.shutdown();

    assert_eq!(clock.next_deadline(), None);
    assert_eq!(clock.poll(secs(t0, 600)), 0);
    assert_eq!(clock.remaining_seconds(), 3);
}

fn load_with_config_file(contents: &str) -> WidgetConfig {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config");

    std::env::set_var(CONFIG_PATH_ENV, file.path());
    let config = load_config_or_default();
    std::env::remove_var(CONFIG_PATH_ENV);
    config
}

#[test]
#[serial]
fn test_config_from_env_path() {
    let config = load_with_config_file(configs::LARGE_FONT_NO_TRAY);

    assert_eq!(config.default_minutes, 20);
    assert!(!config.show_hover_controls);
    assert_eq!(config.font_size, 64.0);
    assert_eq!(config.position_x_fraction, WidgetConfig::default().position_x_fraction);
}

#[test]
#[serial]
fn test_config_values_are_clamped() {
    let config = load_with_config_file(configs::OUT_OF_RANGE);

    assert_eq!(config.default_minutes, 180);
    assert_eq!(config.font_size, 12.0);
    assert_eq!(config.position_x_fraction, 1.0);
}

#[test_case(configs::UNKNOWN_KEY ; "unknown key")]
#[test_case(configs::MALFORMED ; "malformed toml")]
#[serial]
fn test_bad_config_falls_back_to_defaults(contents: &str) {
    assert_eq!(load_with_config_file(contents), WidgetConfig::default());
}

#[test]
#[serial]
fn test_missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::env::set_var(CONFIG_PATH_ENV, dir.path().join("absent.toml"));
    let config = load_config_or_default();
    std::env::remove_var(CONFIG_PATH_ENV);

    assert_eq!(config, WidgetConfig::default());
}
