use crate::models::settings::Settings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternative settings file.
pub const CONFIG_ENV_VAR: &str = "EGG_TIMER_CONFIG";
const SETTINGS_FILE_NAME: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the settings file of the current user.
    pub fn from_environment() -> Self {
        Self::new(resolve_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the settings file.
    pub fn load(&self) -> Result<Settings> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(settings.sanitized())
    }

    /// Settings from disk, or defaults when the file is missing or invalid.
    pub fn load_or_default(&self) -> Settings {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Settings::default();
        }

        match self.load() {
            Ok(settings) => {
                log::info!(
                    "Loaded settings from {} ({} presets)",
                    self.path.display(),
                    settings.presets.len()
                );
                settings
            }
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                Settings::default()
            }
        }
    }
}

pub fn resolve_settings_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()) {
        return PathBuf::from(path);
    }

    if let Some(dirs) = ProjectDirs::from("com", "EggTimer", "EggTimer") {
        dirs.config_dir().join(SETTINGS_FILE_NAME)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from(SETTINGS_FILE_NAME)
    }
}
