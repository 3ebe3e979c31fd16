/// Lifecycle state of the countdown controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    /// No preset chosen yet
    #[default]
    Idle,
    /// Preset chosen, not running (fresh or paused)
    Ready,
    Running,
    Completed,
}

/// Mutable state of one countdown run, from preset selection to completion
/// or reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSession {
    preset_duration_seconds: u32,
    remaining_seconds: u32,
    label: String,
}

impl TimerSession {
    pub fn new(duration_seconds: u32, label: impl Into<String>) -> Self {
        Self {
            preset_duration_seconds: duration_seconds,
            remaining_seconds: duration_seconds,
            label: label.into(),
        }
    }

    pub fn preset_duration_seconds(&self) -> u32 {
        self.preset_duration_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Remove one second, returning the new remaining value.
    pub(super) fn decrement(&mut self) -> u32 {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.remaining_seconds
    }

    pub(super) fn rewind(&mut self) {
        self.remaining_seconds = self.preset_duration_seconds;
    }
}

/// Emitted once when a run reaches zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub label: String,
    pub duration_seconds: u32,
}
