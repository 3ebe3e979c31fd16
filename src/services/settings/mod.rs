mod service;

pub use service::{resolve_settings_path, SettingsService, CONFIG_ENV_VAR};
