// Module exports for models

pub mod preset;
pub mod settings;
