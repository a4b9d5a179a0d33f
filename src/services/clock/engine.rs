use std::time::{Duration, Instant};

use super::trigger::{OneShotTrigger, PeriodicTrigger};
use super::visuals::ClockDisplay;
use crate::models::timer::{clamp_minutes, parse_minutes, TimerState, CRITICAL_SECONDS};

/// Period of the countdown tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1_000);
/// Period of the urgent-colour flash.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);
/// How long the flash keeps running after the countdown reaches zero.
pub const FINISH_FLASH_DURATION: Duration = Duration::from_millis(2_200);

// Upper bound on firings replayed by one poll (e.g. after resuming from sleep).
const MAX_FIRINGS_PER_POLL: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum TriggerSource {
    Tick,
    Blink,
    FinishFlash,
}

/// The presentation clock: timer state plus the three triggers that drive it.
///
/// Every operation takes effect synchronously. Time only enters through the
/// `now` arguments, so the engine can be driven by the UI frame loop or by
/// tests with synthetic instants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockEngine {
    state: TimerState,
    tick_trigger: PeriodicTrigger,
    blink_trigger: PeriodicTrigger,
    finish_flash: OneShotTrigger,
}

impl ClockEngine {
    pub fn new(minutes: u32) -> Self {
        Self {
            state: TimerState::with_minutes(minutes),
            tick_trigger: PeriodicTrigger::new(TICK_INTERVAL),
            blink_trigger: PeriodicTrigger::new(BLINK_INTERVAL),
            finish_flash: OneShotTrigger::new(FINISH_FLASH_DURATION),
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    pub fn total_seconds(&self) -> u32 {
        self.state.total_seconds
    }

    pub fn total_minutes(&self) -> u32 {
        self.state.total_minutes()
    }

    pub fn is_tick_active(&self) -> bool {
        self.tick_trigger.is_active()
    }

    pub fn is_blink_active(&self) -> bool {
        self.blink_trigger.is_active()
    }

    pub fn is_finish_flash_pending(&self) -> bool {
        self.finish_flash.is_active()
    }

    /// The duration may only be edited while the clock is paused or finished.
    pub fn can_edit(&self) -> bool {
        !self.state.is_running
    }

    pub fn display(&self) -> ClockDisplay {
        ClockDisplay::for_state(&self.state)
    }

    /// Earliest armed trigger deadline, used to schedule the next repaint.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.tick_trigger.deadline(),
            self.blink_trigger.deadline(),
            self.finish_flash.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Run every trigger firing due at `now`, oldest first, and return how
    /// many fired.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while fired < MAX_FIRINGS_PER_POLL {
            let Some(source) = self.next_due(now) else {
                return fired;
            };
            match source {
                TriggerSource::Tick => {
                    if let Some(due) = self.tick_trigger.take_due(now) {
                        self.tick(due);
                    }
                }
                TriggerSource::Blink => {
                    if self.blink_trigger.take_due(now).is_some() {
                        self.blink();
                    }
                }
                TriggerSource::FinishFlash => {
                    if self.finish_flash.take_due(now).is_some() {
                        self.end_finish_flash();
                    }
                }
            }
            fired += 1;
        }

        log::warn!(
            "clock fell {} firings behind; skipping the remaining backlog",
            fired
        );
        self.tick_trigger.resync(now);
        self.blink_trigger.resync(now);
        fired
    }

    fn next_due(&self, now: Instant) -> Option<TriggerSource> {
        [
            (TriggerSource::Tick, self.tick_trigger.deadline()),
            (TriggerSource::Blink, self.blink_trigger.deadline()),
            (TriggerSource::FinishFlash, self.finish_flash.deadline()),
        ]
        .into_iter()
        .filter_map(|(source, deadline)| {
            deadline
                .filter(|deadline| *deadline <= now)
                .map(|deadline| (deadline, source))
        })
        .min()
        .map(|(_, source)| source)
    }

    /// One-second countdown step. Reaching zero finishes the run in the same step.
    pub fn tick(&mut self, now: Instant) {
        if self.state.is_finished() {
            self.finish(now);
            return;
        }

        self.state.remaining_seconds -= 1;
        log::trace!("tick: {} seconds remaining", self.state.remaining_seconds);

        if self.state.is_finished() {
            self.finish(now);
            return;
        }

        if self.state.remaining_seconds <= CRITICAL_SECONDS && !self.blink_trigger.is_active() {
            log::debug!(
                "{} seconds remaining, starting urgent flash",
                self.state.remaining_seconds
            );
            self.blink_trigger.start(now);
        }
    }

    /// Half-second flash step; stops itself once the urgent window is left.
    pub fn blink(&mut self) {
        if self.state.remaining_seconds <= CRITICAL_SECONDS {
            self.state.blink_on = !self.state.blink_on;
        } else {
            self.blink_trigger.stop();
            self.state.blink_on = false;
        }
    }

    pub fn start(&mut self, now: Instant) {
        if self.state.is_finished() {
            self.state.remaining_seconds = self.state.total_seconds;
        }
        self.tick_trigger.start(now);
        if !self.state.is_running {
            log::info!(
                "countdown started with {} seconds remaining",
                self.state.remaining_seconds
            );
        }
        self.state.is_running = true;
    }

    pub fn pause(&mut self) {
        self.tick_trigger.stop();
        if self.state.is_running {
            log::info!(
                "countdown paused with {} seconds remaining",
                self.state.remaining_seconds
            );
        }
        self.state.is_running = false;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.state.is_running {
            self.pause();
        } else {
            self.start(now);
        }
    }

    pub fn reset(&mut self) {
        self.pause();
        self.state.remaining_seconds = self.state.total_seconds;
        self.clear_flash();
        log::info!("countdown reset to {} seconds", self.state.total_seconds);
    }

    /// Apply the minutes field. Unparseable text keeps the current duration;
    /// anything else is clamped into range. Returns the committed minutes.
    pub fn commit_duration(&mut self, minutes_text: &str) -> u32 {
        let minutes = match parse_minutes(minutes_text) {
            Some(minutes) => clamp_minutes(minutes),
            None => {
                log::debug!(
                    "ignoring non-numeric duration {:?}, keeping current value",
                    minutes_text
                );
                clamp_minutes(i64::from(self.state.total_seconds / 60))
            }
        };

        self.state.total_seconds = minutes * 60;
        self.state.remaining_seconds = self.state.total_seconds;
        self.clear_flash();
        log::info!("countdown duration set to {} minutes", minutes);
        minutes
    }

    /// Disarm every trigger. Runs on each close path before the window goes away.
    pub fn shutdown(&mut self) {
        self.tick_trigger.stop();
        self.blink_trigger.stop();
        self.finish_flash.stop();
        self.state.is_running = false;
    }

    fn finish(&mut self, now: Instant) {
        self.pause();
        self.state.remaining_seconds = 0;
        self.state.blink_on = false;
        self.blink_trigger.start(now);
        self.finish_flash.start(now);
        log::info!("countdown finished");
    }

    fn end_finish_flash(&mut self) {
        self.blink_trigger.stop();
        self.state.blink_on = false;
        log::debug!("finish flash ended");
    }

    fn clear_flash(&mut self) {
        self.blink_trigger.stop();
        self.finish_flash.stop();
        self.state.blink_on = false;
    }
}

impl Default for ClockEngine {
    fn default() -> Self {
        Self::new(crate::models::timer::DEFAULT_MINUTES)
    }
}
