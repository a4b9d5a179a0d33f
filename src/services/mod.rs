// Service module exports

pub mod clock;
pub mod settings;
