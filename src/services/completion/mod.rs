//! Side effects of a finished countdown: alarm, notification and title
//! flash.

mod flash;

pub use flash::TitleFlasher;

use std::time::Instant;

use crate::services::alarm::{AlarmOutcome, AlarmService};
use crate::services::shell::PresentationShell;
use crate::services::timer::Completion;

pub struct CompletionService {
    alarm: AlarmService,
    shell: Box<dyn PresentationShell>,
    flasher: TitleFlasher,
}

impl CompletionService {
    pub fn new(
        alarm: AlarmService,
        shell: Box<dyn PresentationShell>,
        flasher: TitleFlasher,
    ) -> Self {
        Self {
            alarm,
            shell,
            flasher,
        }
    }

    /// Run every completion side effect once.
    ///
    /// The controller has already left the running state when this is
    /// called, and the controller only reports each run once.
    pub fn fire(&mut self, completion: &Completion, now: Instant) -> AlarmOutcome {
        let outcome = self.alarm.sound_alarm();
        log::info!(
            "Timer '{}' finished, alarm: {:?}",
            completion.label,
            outcome
        );

        self.shell.notify_completion(&completion.label);
        self.flasher.start(now);
        outcome
    }

    /// Advance the title flash, pushing any title change to the shell, and
    /// check on the alarm player. Returns the alarm outcome if the player
    /// failed and the fallback took over.
    pub fn poll(&mut self, now: Instant) -> Option<AlarmOutcome> {
        if let Some(title) = self.flasher.poll(now) {
            self.shell.set_title(title);
        }
        self.alarm.poll()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.flasher.next_due()
    }

    pub fn is_flashing(&self) -> bool {
        self.flasher.is_active()
    }

    /// Silence the alarm and stop any flash, restoring the title.
    pub fn dismiss(&mut self) {
        self.alarm.stop();
        if let Some(title) = self.flasher.cancel() {
            self.shell.set_title(title);
        }
    }

    pub fn minimize_window(&mut self) {
        self.shell.minimize_window();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::FlashSettings;
    use crate::services::alarm::{AlarmError, MockSoundBackend};
    use crate::services::shell::MockPresentationShell;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::tempdir;

    fn silent_alarm(dir: &std::path::Path) -> AlarmService {
        let mut backend = MockSoundBackend::new();
        backend.expect_stop().returning(|| ());
        backend.expect_check_failed().returning(|| false);
        backend
            .expect_play_file()
            .returning(|_| Err(AlarmError::NoPlayer));
        AlarmService::new(Box::new(backend), None, dir.join("tone.wav"))
    }

    fn completion(label: &str) -> Completion {
        Completion {
            label: label.into(),
            duration_seconds: 300,
        }
    }

    #[test]
    fn fire_notifies_with_label_and_starts_flash() {
        let dir = tempdir().unwrap();
        let mut shell = MockPresentationShell::new();
        shell
            .expect_notify_completion()
            .withf(|value| value == "soft-boiled")
            .times(1)
            .returning(|_| ());
        shell.expect_set_title().returning(|_| ());

        let flasher = TitleFlasher::new("Egg Timer", &FlashSettings::default());
        let mut service = CompletionService::new(silent_alarm(dir.path()), Box::new(shell), flasher);

        let now = Instant::now();
        assert_eq!(
            service.fire(&completion("soft-boiled"), now),
            AlarmOutcome::Silent
        );
        assert!(service.is_flashing());
        assert_eq!(service.next_due(), Some(now + Duration::from_millis(500)));
    }

    #[test]
    fn poll_pushes_titles_to_shell() {
        let dir = tempdir().unwrap();
        let mut shell = MockPresentationShell::new();
        shell.expect_notify_completion().returning(|_| ());
        shell
            .expect_set_title()
            .withf(|value| value == "🥚 Eggs Ready!")
            .times(1)
            .returning(|_| ());

        let flasher = TitleFlasher::new("Egg Timer", &FlashSettings::default());
        let mut service = CompletionService::new(silent_alarm(dir.path()), Box::new(shell), flasher);

        let now = Instant::now();
        service.fire(&completion("medium"), now);
        assert_eq!(service.poll(now + Duration::from_millis(100)), None);
        assert_eq!(service.poll(now + Duration::from_millis(500)), None);
    }

    #[test]
    fn poll_reports_fallback_after_player_failure() {
        let dir = tempdir().unwrap();
        let mut backend = MockSoundBackend::new();
        backend.expect_stop().returning(|| ());
        backend.expect_play_file().returning(|_| Ok(()));
        let mut failures = vec![true];
        backend
            .expect_check_failed()
            .returning(move || failures.pop().unwrap_or(false));
        let alarm = AlarmService::new(
            Box::new(backend),
            Some(PathBuf::from("/sounds/complete.oga")),
            dir.path().join("tone.wav"),
        );

        let mut shell = MockPresentationShell::new();
        shell.expect_notify_completion().returning(|_| ());
        shell.expect_set_title().returning(|_| ());

        let flasher = TitleFlasher::new("Egg Timer", &FlashSettings::default());
        let mut service = CompletionService::new(alarm, Box::new(shell), flasher);

        let now = Instant::now();
        assert_eq!(service.fire(&completion("soft-boiled"), now), AlarmOutcome::Primary);
        assert_eq!(
            service.poll(now + Duration::from_millis(100)),
            Some(AlarmOutcome::FallbackTone)
        );
        assert_eq!(service.poll(now + Duration::from_millis(200)), None);
    }

    #[test]
    fn dismiss_restores_title() {
        let dir = tempdir().unwrap();
        let mut shell = MockPresentationShell::new();
        shell.expect_notify_completion().returning(|_| ());
        shell
            .expect_set_title()
            .withf(|value| value == "Egg Timer")
            .times(1)
            .returning(|_| ());

        let flasher = TitleFlasher::new("Egg Timer", &FlashSettings::default());
        let mut service = CompletionService::new(silent_alarm(dir.path()), Box::new(shell), flasher);

        service.fire(&completion("hard-boiled"), Instant::now());
        service.dismiss();
        assert!(!service.is_flashing());
    }

    #[test]
    fn minimize_is_forwarded() {
        let mut shell = MockPresentationShell::new();
        shell.expect_minimize_window().times(1).returning(|| ());

        let alarm = AlarmService::new(
            Box::new(MockSoundBackend::new()),
            None,
            PathBuf::from("tone.wav"),
        );
        let flasher = TitleFlasher::new("Egg Timer", &FlashSettings::default());
        let mut service = CompletionService::new(alarm, Box::new(shell), flasher);
        service.minimize_window();
    }
}
