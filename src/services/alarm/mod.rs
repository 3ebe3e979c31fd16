//! Completion alarm playback with a synthesized fallback tone.

mod backend;
mod error;
mod tone;

pub use backend::{platform_players, PlayerCommand, SoundBackend, SystemSoundBackend};
#[cfg(test)]
pub use backend::MockSoundBackend;
pub use error::AlarmError;
pub use tone::ToneSpec;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const TONE_FILE_NAME: &str = "fallback-tone.wav";

/// Which sound (if any) was started by [`AlarmService::sound_alarm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmOutcome {
    Primary,
    FallbackTone,
    Silent,
}

pub struct AlarmService {
    backend: Box<dyn SoundBackend>,
    sound_path: Option<PathBuf>,
    tone_path: PathBuf,
    tone: ToneSpec,
    tone_ready: bool,
    /// The configured asset is playing and may still fail
    primary_playing: bool,
}

impl AlarmService {
    pub fn new(
        backend: Box<dyn SoundBackend>,
        sound_path: Option<PathBuf>,
        tone_path: PathBuf,
    ) -> Self {
        Self {
            backend,
            sound_path,
            tone_path,
            tone: ToneSpec::default(),
            tone_ready: false,
            primary_playing: false,
        }
    }

    /// Service using the system player and the per-user cache directory.
    pub fn system(sound_path: Option<PathBuf>) -> Self {
        Self::new(
            Box::new(SystemSoundBackend::new()),
            sound_path,
            default_tone_path(),
        )
    }

    pub fn sound_path(&self) -> Option<&Path> {
        self.sound_path.as_deref()
    }

    /// Play the alarm from the start. Never fails: an unplayable asset falls
    /// back to the synthesized tone, and that falls back to silence.
    pub fn sound_alarm(&mut self) -> AlarmOutcome {
        self.stop();

        match self.play_primary() {
            Ok(()) => {
                self.primary_playing = true;
                return AlarmOutcome::Primary;
            }
            Err(err) => log::debug!("Alarm sound unavailable ({}), synthesizing tone", err),
        }

        self.play_fallback()
    }

    /// Check on the running player once per frame.
    ///
    /// A player that rejects the configured asset after starting is replaced
    /// by the synthesized tone; the new outcome is returned in that case.
    pub fn poll(&mut self) -> Option<AlarmOutcome> {
        if !self.backend.check_failed() || !self.primary_playing {
            return None;
        }

        self.primary_playing = false;
        log::info!("Alarm player could not play the sound, switching to tone");
        Some(self.play_fallback())
    }

    /// Stop and rewind any playing alarm.
    pub fn stop(&mut self) {
        self.primary_playing = false;
        self.backend.stop();
    }

    fn play_fallback(&mut self) -> AlarmOutcome {
        match self.play_fallback_tone() {
            Ok(()) => AlarmOutcome::FallbackTone,
            Err(err) => {
                log::warn!("Unable to play fallback alarm tone: {:#}", err);
                AlarmOutcome::Silent
            }
        }
    }

    fn play_primary(&mut self) -> Result<(), AlarmError> {
        let path = self.sound_path.as_deref().ok_or(AlarmError::NoAsset)?;
        self.backend.play_file(path)
    }

    fn play_fallback_tone(&mut self) -> Result<()> {
        self.ensure_tone_file()?;
        self.backend
            .play_file(&self.tone_path)
            .context("Failed to play synthesized tone")
    }

    fn ensure_tone_file(&mut self) -> Result<()> {
        if self.tone_ready && self.tone_path.is_file() {
            return Ok(());
        }

        if let Some(parent) = self.tone_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create tone directory {}", parent.display())
            })?;
        }
        std::fs::write(&self.tone_path, self.tone.to_wav_bytes())
            .with_context(|| format!("Failed to write {}", self.tone_path.display()))?;

        log::debug!("Wrote fallback tone to {}", self.tone_path.display());
        self.tone_ready = true;
        Ok(())
    }
}

pub fn default_tone_path() -> PathBuf {
    match ProjectDirs::from("com", "EggTimer", "EggTimer") {
        Some(dirs) => dirs.cache_dir().join(TONE_FILE_NAME),
        None => {
            log::warn!("Unable to resolve cache directory; using temp dir for alarm tone");
            std::env::temp_dir().join(TONE_FILE_NAME)
        }
    }
}
