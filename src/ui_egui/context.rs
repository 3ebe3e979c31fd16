use std::time::Instant;

use crate::models::preset::Preset;
use crate::services::alarm::AlarmOutcome;
use crate::services::completion::CompletionService;
use crate::services::timer::{CountdownController, TimerView};

/// A user command from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Toggle,
    Reset,
    SelectPreset(usize),
    Minimize,
}

/// Timer state behind the window: preset catalog, countdown session and
/// completion effects. Holds no egui state, so it runs without a window.
pub struct TimerContext {
    presets: Vec<Preset>,
    controller: CountdownController,
    completion: CompletionService,
    /// Index into `presets` of the highlighted preset
    selected_preset: Option<usize>,
    keep_running_after_close: bool,
}

impl TimerContext {
    pub fn new(
        presets: Vec<Preset>,
        completion: CompletionService,
        keep_running_after_close: bool,
    ) -> Self {
        Self {
            presets,
            controller: CountdownController::new(),
            completion,
            selected_preset: None,
            keep_running_after_close,
        }
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn selected_preset(&self) -> Option<usize> {
        self.selected_preset
    }

    pub fn controller(&self) -> &CountdownController {
        &self.controller
    }

    pub fn view(&self) -> TimerView {
        self.controller.view()
    }

    pub fn is_flashing(&self) -> bool {
        self.completion.is_flashing()
    }

    /// Start a fresh session from the preset at `index`, silencing any alarm.
    pub fn select_preset(&mut self, index: usize) -> bool {
        let Some(preset) = self.presets.get(index) else {
            log::debug!("No preset at position {}", index + 1);
            return false;
        };
        self.controller.select(preset);
        self.completion.dismiss();
        self.selected_preset = Some(index);
        true
    }

    pub fn toggle(&mut self, now: Instant) -> bool {
        let toggled = self.controller.toggle(now);
        if !toggled {
            log::debug!("Start/pause ignored in {:?}", self.controller.state());
        }
        toggled
    }

    pub fn reset(&mut self) -> bool {
        if !self.controller.reset() {
            return false;
        }
        self.completion.dismiss();
        true
    }

    pub fn minimize(&mut self) {
        self.completion.minimize_window();
    }

    pub fn apply(&mut self, action: ShortcutAction, now: Instant) {
        log::debug!("Shortcut: {:?}", action);
        match action {
            ShortcutAction::Toggle => {
                self.toggle(now);
            }
            ShortcutAction::Reset => {
                self.reset();
            }
            ShortcutAction::SelectPreset(index) => {
                self.select_preset(index);
            }
            ShortcutAction::Minimize => self.minimize(),
        }
    }

    /// Forget the session, as if the window had been created afresh.
    pub fn discard_session(&mut self) {
        self.controller.teardown();
        self.controller = CountdownController::new();
        self.completion.dismiss();
        self.selected_preset = None;
    }

    /// React to the window's close button. Returns `true` when the close
    /// must be cancelled because the process stays resident.
    pub fn handle_close_request(&mut self) -> bool {
        if !self.keep_running_after_close {
            return false;
        }

        log::info!("Window closed; staying resident and discarding timer state");
        self.discard_session();
        self.completion.minimize_window();
        true
    }

    /// Run due ticks and completion effects up to `now`. Returns the alarm
    /// outcome when the countdown finished or the alarm fell back.
    pub fn update(&mut self, now: Instant) -> Option<AlarmOutcome> {
        let fired = self
            .controller
            .advance(now)
            .map(|completion| self.completion.fire(&completion, now));
        let fallback = self.completion.poll(now);
        fallback.or(fired)
    }

    /// Earliest instant at which `update` has work to do.
    pub fn next_due(&self) -> Option<Instant> {
        [self.controller.next_tick_due(), self.completion.next_due()]
            .into_iter()
            .flatten()
            .min()
    }

    pub fn shutdown(&mut self) {
        self.controller.teardown();
        self.completion.dismiss();
    }
}
