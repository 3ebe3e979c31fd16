// Preset module
// A named duration offered as a one-tap timer configuration

use serde::{Deserialize, Serialize};

/// A single entry of the preset catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub label: String,
    pub duration_seconds: u32,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Preset {
    pub fn new(label: impl Into<String>, duration_seconds: u32) -> Self {
        Self {
            label: label.into(),
            duration_seconds,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Check if this preset can be used to start a countdown
    pub fn is_valid(&self) -> bool {
        self.duration_seconds > 0 && !self.label.trim().is_empty()
    }

    /// Text shown on the preset button, e.g. "🥚 Soft-boiled".
    pub fn button_text(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", icon, self.label),
            None => self.label.clone(),
        }
    }
}

/// The catalog shipped with the application.
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset::new("Soft-boiled", 300).with_icon("🥚"),
        Preset::new("Medium", 420).with_icon("🍳"),
        Preset::new("Hard-boiled", 600).with_icon("🥚"),
    ]
}

/// Drop unusable entries from a configured catalog.
///
/// Falls back to [`builtin_presets`] when nothing usable remains.
pub fn sanitize_catalog(presets: Vec<Preset>) -> Vec<Preset> {
    let mut valid = Vec::with_capacity(presets.len());
    for preset in presets {
        if preset.is_valid() {
            valid.push(preset);
        } else {
            log::warn!(
                "Ignoring preset '{}' with duration {}s",
                preset.label,
                preset.duration_seconds
            );
        }
    }

    if valid.is_empty() {
        log::warn!("No usable presets configured, using built-in catalog");
        return builtin_presets();
    }

    valid
}
