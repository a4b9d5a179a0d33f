//! Deadline-based timers polled from the UI frame loop.
//!
//! Both trigger kinds are inert values: they never call back on their own.
//! The owner asks for due firings with [`PeriodicTrigger::take_due`] /
//! [`OneShotTrigger::take_due`] and runs its handler. Starting an armed
//! trigger or stopping a disarmed one does nothing.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicTrigger {
    interval: Duration,
    deadline: Option<Instant>,
}

impl PeriodicTrigger {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.interval);
        }
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume one firing that is due at `now`, re-arming one interval after
    /// the consumed deadline. Returns the instant the firing was scheduled for.
    pub fn take_due(&mut self, now: Instant) -> Option<Instant> {
        let due = self.deadline.filter(|deadline| *deadline <= now)?;
        self.deadline = Some(due + self.interval);
        Some(due)
    }

    /// Drop any backlog and schedule the next firing one interval from `now`.
    pub fn resync(&mut self, now: Instant) {
        if self.deadline.is_some() {
            self.deadline = Some(now + self.interval);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneShotTrigger {
    delay: Duration,
    deadline: Option<Instant>,
}

impl OneShotTrigger {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the trigger to fire once, `delay` after `now`.
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn take_due(&mut self, now: Instant) -> Option<Instant> {
        let due = self.deadline.filter(|deadline| *deadline <= now)?;
        self.deadline = None;
        Some(due)
    }
}
