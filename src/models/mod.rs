// Module exports for models

pub mod color;
pub mod settings;
pub mod timer;
