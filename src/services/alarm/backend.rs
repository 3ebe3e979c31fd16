use std::io::ErrorKind;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use super::error::AlarmError;

/// Plays sound files. Implementations must never block the UI thread.
#[cfg_attr(test, mockall::automock)]
pub trait SoundBackend {
    /// Start playing `path` from the beginning.
    fn play_file(&mut self, path: &Path) -> Result<(), AlarmError>;

    /// Stop and rewind whatever is playing.
    fn stop(&mut self);

    /// Reap a player that has finished on its own. Returns `true` once if it
    /// exited with an error, meaning the file could not be played.
    fn check_failed(&mut self) -> bool;
}

/// A command line audio player and the arguments preceding the file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCommand {
    pub program: String,
    pub args: Vec<String>,
    /// File extensions the player can decode; empty means any
    pub formats: Vec<String>,
}

impl PlayerCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            formats: Vec::new(),
        }
    }

    pub fn with_formats(mut self, formats: &[&str]) -> Self {
        self.formats = formats.iter().map(|format| format.to_string()).collect();
        self
    }

    pub fn supports(&self, path: &Path) -> bool {
        if self.formats.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.formats
                    .iter()
                    .any(|format| format.eq_ignore_ascii_case(ext))
            })
    }

    fn command_for(&self, path: &Path) -> Command {
        let mut command = Command::new(&self.program);
        if self.program == "powershell" {
            let script = format!(
                "(New-Object Media.SoundPlayer '{}').PlaySync()",
                path.display().to_string().replace('\'', "''")
            );
            command.args(&self.args).arg(script);
        } else {
            command.args(&self.args).arg(path);
        }
        command
    }
}

/// Players tried in order on this platform.
pub fn platform_players() -> Vec<PlayerCommand> {
    if cfg!(target_os = "macos") {
        vec![PlayerCommand::new("afplay", &[])]
    } else if cfg!(target_os = "windows") {
        vec![PlayerCommand::new(
            "powershell",
            &["-NoProfile", "-NonInteractive", "-Command"],
        )]
    } else {
        vec![
            PlayerCommand::new("pw-play", &[]),
            PlayerCommand::new("paplay", &[]),
            PlayerCommand::new("aplay", &["-q"]).with_formats(&["wav"]),
        ]
    }
}

/// Plays files by spawning the platform's command line player.
pub struct SystemSoundBackend {
    players: Vec<PlayerCommand>,
    current: Option<Child>,
}

impl SystemSoundBackend {
    pub fn new() -> Self {
        Self::with_players(platform_players())
    }

    pub fn with_players(players: Vec<PlayerCommand>) -> Self {
        Self {
            players,
            current: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.current.is_some()
    }
}

impl Default for SystemSoundBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundBackend for SystemSoundBackend {
    fn play_file(&mut self, path: &Path) -> Result<(), AlarmError> {
        if !path.is_file() {
            return Err(AlarmError::MissingAsset(path.to_path_buf()));
        }

        self.stop();

        for player in self.players.iter().filter(|player| player.supports(path)) {
            let spawned = player
                .command_for(path)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            match spawned {
                Ok(child) => {
                    log::debug!("Playing {} with {}", path.display(), player.program);
                    self.current = Some(child);
                    return Ok(());
                }
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    log::trace!("Audio player {} not installed", player.program);
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(AlarmError::NoPlayer)
    }

    fn stop(&mut self) {
        let Some(mut child) = self.current.take() else {
            return;
        };

        // Already exited means try_wait has reaped it
        if let Ok(Some(_)) = child.try_wait() {
            return;
        }
        if let Err(err) = child.kill() {
            log::debug!("Failed to stop audio player: {}", err);
        }
        if let Err(err) = child.wait() {
            log::debug!("Failed to reap audio player: {}", err);
        }
    }

    fn check_failed(&mut self) -> bool {
        let Some(child) = self.current.as_mut() else {
            return false;
        };

        match child.try_wait() {
            Ok(None) => false,
            Ok(Some(status)) => {
                self.current = None;
                if status.success() {
                    false
                } else {
                    log::debug!("Audio player exited with {}", status);
                    true
                }
            }
            Err(err) => {
                log::debug!("Unable to query audio player: {}", err);
                self.stop();
                false
            }
        }
    }
}

impl Drop for SystemSoundBackend {
    fn drop(&mut self) {
        self.stop();
    }
}
