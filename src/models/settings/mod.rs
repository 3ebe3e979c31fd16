// Settings module
// User configuration read from settings.toml

use crate::models::preset::{builtin_presets, sanitize_catalog, Preset};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_WINDOW_TITLE: &str = "Egg Timer";
pub const DEFAULT_ALERT_TITLE: &str = "🥚 Eggs Ready!";

#[cfg(target_os = "linux")]
const DEFAULT_ALARM_SOUND: Option<&str> = Some("/usr/share/sounds/freedesktop/stereo/complete.oga");
#[cfg(not(target_os = "linux"))]
const DEFAULT_ALARM_SOUND: Option<&str> = None;

/// Which colour scheme the window uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    System,
}

/// Title flash sequence played on completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashSettings {
    pub alert_title: String,
    pub interval_ms: u64,
    /// Title changes per flash; the last change restores the original title
    pub alternations: u32,
}

impl Default for FlashSettings {
    fn default() -> Self {
        Self {
            alert_title: DEFAULT_ALERT_TITLE.to_string(),
            interval_ms: 500,
            alternations: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    pub theme: ThemePreference,
    pub notifications_enabled: bool,
    /// Keep the process alive when the window is closed (macOS convention)
    pub keep_running_after_close: bool,
    pub alarm_sound: Option<PathBuf>,
    pub flash: FlashSettings,
    pub presets: Vec<Preset>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            theme: ThemePreference::Light,
            notifications_enabled: true,
            keep_running_after_close: cfg!(target_os = "macos"),
            alarm_sound: DEFAULT_ALARM_SOUND.map(PathBuf::from),
            flash: FlashSettings::default(),
            presets: builtin_presets(),
        }
    }
}

impl Settings {
    /// Repair values that would make the timer unusable.
    pub fn sanitized(mut self) -> Self {
        self.presets = sanitize_catalog(self.presets);

        if self.window_title.trim().is_empty() {
            self.window_title = DEFAULT_WINDOW_TITLE.to_string();
        }

        if self.flash.interval_ms == 0 {
            log::warn!("Title flash interval of 0ms is not allowed, using default");
            self.flash.interval_ms = FlashSettings::default().interval_ms;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.window_title, "Egg Timer");
        assert_eq!(settings.theme, ThemePreference::Light);
        assert!(settings.notifications_enabled);
        assert_eq!(settings.flash.alternations, 10);
        assert_eq!(settings.flash.interval_ms, 500);
        assert_eq!(settings.presets, builtin_presets());
    }

    #[test]
    fn test_sanitized_repairs_values() {
        let settings = Settings {
            window_title: "  ".into(),
            flash: FlashSettings {
                interval_ms: 0,
                ..FlashSettings::default()
            },
            presets: vec![Preset::new("Zero", 0)],
            ..Settings::default()
        }
        .sanitized();

        assert_eq!(settings.window_title, DEFAULT_WINDOW_TITLE);
        assert_eq!(settings.flash.interval_ms, 500);
        assert_eq!(settings.presets, builtin_presets());
    }
}
