mod engine;
mod trigger;
mod visuals;

pub use engine::{ClockEngine, BLINK_INTERVAL, FINISH_FLASH_DURATION, TICK_INTERVAL};
pub use trigger::{OneShotTrigger, PeriodicTrigger};
pub use visuals::{
    time_color, ClockDisplay, Urgency, COLOR_CRITICAL_OFF, COLOR_CRITICAL_ON, COLOR_NORMAL,
    COLOR_WARNING,
};
