// Test fixtures - reusable fakes for the platform boundaries
// Records every request so tests can assert on side effects

#![allow(dead_code)]

use egg_timer::models::preset::Preset;
use egg_timer::services::alarm::{AlarmError, SoundBackend};
use egg_timer::services::shell::PresentationShell;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Sample presets used across tests
pub mod presets {
    use super::*;

    pub fn soft_boiled() -> Preset {
        Preset::new("soft-boiled", 300)
    }

    pub fn hard_boiled() -> Preset {
        Preset::new("hard-boiled", 600)
    }
}

/// Everything the fake shell was asked to do
#[derive(Debug, Default)]
pub struct ShellLog {
    pub notifications: Vec<String>,
    pub titles: Vec<String>,
    pub minimized: u32,
}

#[derive(Clone, Default)]
pub struct RecordingShell {
    pub log: Rc<RefCell<ShellLog>>,
}

impl PresentationShell for RecordingShell {
    fn notify_completion(&mut self, label: &str) {
        self.log.borrow_mut().notifications.push(label.to_owned());
    }

    fn minimize_window(&mut self) {
        self.log.borrow_mut().minimized += 1;
    }

    fn set_title(&mut self, title: &str) {
        self.log.borrow_mut().titles.push(title.to_owned());
    }
}

/// Sound backend that plays nothing and remembers what it was given.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    pub played: Rc<RefCell<Vec<PathBuf>>>,
    pub stops: Rc<RefCell<u32>>,
    /// Paths that fail as if the file did not exist
    pub broken: Vec<PathBuf>,
    /// Paths whose player starts, then exits with an error
    pub rejected: Vec<PathBuf>,
    /// Path handed to the most recent play_file call, until stopped
    pub current: Option<PathBuf>,
}

impl SoundBackend for RecordingBackend {
    fn play_file(&mut self, path: &Path) -> Result<(), AlarmError> {
        if self.broken.iter().any(|broken| broken == path) {
            return Err(AlarmError::MissingAsset(path.to_path_buf()));
        }
        self.played.borrow_mut().push(path.to_path_buf());
        self.current = Some(path.to_path_buf());
        Ok(())
    }

    fn stop(&mut self) {
        self.current = None;
        *self.stops.borrow_mut() += 1;
    }

    fn check_failed(&mut self) -> bool {
        match self.current.take() {
            Some(path) if self.rejected.contains(&path) => true,
            current => {
                self.current = current;
                false
            }
        }
    }
}
