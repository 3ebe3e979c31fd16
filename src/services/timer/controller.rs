use std::time::{Duration, Instant};

use super::display::{format_clock, progress_fraction, StartControl, TimerView, COMPLETE_STATUS};
use super::session::{Completion, TimerSession, TimerState};
use crate::models::preset::Preset;
use crate::services::scheduler::PeriodicTask;

/// Cadence of the countdown tick loop.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owns the timer session and its single tick loop.
///
/// All transitions are plain method calls; the clock is passed in so the
/// state machine can be driven without a display.
#[derive(Debug, Default)]
pub struct CountdownController {
    state: TimerState,
    session: Option<TimerSession>,
    tick_loop: Option<PeriodicTask>,
    paused: bool,
    completion_reported: bool,
}

impl CountdownController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn session(&self) -> Option<&TimerSession> {
        self.session.as_ref()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.session
            .as_ref()
            .map_or(0, TimerSession::remaining_seconds)
    }

    pub fn preset_duration_seconds(&self) -> Option<u32> {
        self.session
            .as_ref()
            .map(TimerSession::preset_duration_seconds)
    }

    pub fn label(&self) -> Option<&str> {
        self.session.as_ref().map(TimerSession::label)
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn has_tick_loop(&self) -> bool {
        self.tick_loop.is_some()
    }

    /// When the next tick is due, if a loop is active.
    pub fn next_tick_due(&self) -> Option<Instant> {
        self.tick_loop.as_ref().and_then(PeriodicTask::next_due)
    }

    pub fn select(&mut self, preset: &Preset) {
        self.select_preset(preset.duration_seconds, preset.label.clone());
    }

    /// Begin a fresh session, cancelling any active loop first.
    pub fn select_preset(&mut self, duration_seconds: u32, label: impl Into<String>) {
        self.cancel_tick_loop();
        let session = TimerSession::new(duration_seconds, label);
        log::info!(
            "Selected preset '{}' ({})",
            session.label(),
            format_clock(duration_seconds)
        );
        self.session = Some(session);
        self.state = TimerState::Ready;
        self.paused = false;
        self.completion_reported = false;
    }

    /// Start (or resume) the countdown. Returns false when nothing happened.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.state != TimerState::Ready {
            return false;
        }
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        if session.is_exhausted() {
            return false;
        }

        log::debug!(
            "Starting countdown '{}' at {}",
            session.label(),
            format_clock(session.remaining_seconds())
        );
        self.cancel_tick_loop();
        self.tick_loop = Some(PeriodicTask::new(TICK_PERIOD, now));
        self.state = TimerState::Running;
        self.paused = false;
        true
    }

    /// Pause a running countdown, keeping the remaining time.
    pub fn pause(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.cancel_tick_loop();
        self.state = TimerState::Ready;
        self.paused = true;
        log::debug!("Paused at {}", format_clock(self.remaining_seconds()));
        true
    }

    /// The single start/pause control.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_running() {
            self.pause()
        } else {
            self.start(now)
        }
    }

    /// Apply one tick. Only meaningful while running.
    pub fn tick(&mut self) -> Option<Completion> {
        if self.state != TimerState::Running {
            return None;
        }
        let remaining = self.session.as_mut()?.decrement();
        if remaining == 0 {
            return self.complete();
        }
        None
    }

    /// Apply every tick that came due up to `now`.
    pub fn advance(&mut self, now: Instant) -> Option<Completion> {
        let due = match self.tick_loop.as_mut() {
            Some(tick_loop) => tick_loop.poll(now),
            None => return None,
        };

        for _ in 0..due {
            if let Some(completion) = self.tick() {
                return Some(completion);
            }
            if !self.is_running() {
                break;
            }
        }
        None
    }

    /// Restore the full preset duration. No effect before a preset is chosen.
    pub fn reset(&mut self) -> bool {
        if self.state == TimerState::Idle {
            return false;
        }
        self.cancel_tick_loop();
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.rewind();
        self.state = TimerState::Ready;
        self.paused = false;
        self.completion_reported = false;
        log::debug!("Reset '{}'", session.label());
        true
    }

    /// Cancel the tick loop on window teardown.
    pub fn teardown(&mut self) {
        if self.is_running() {
            self.state = TimerState::Ready;
            self.paused = true;
        }
        self.cancel_tick_loop();
    }

    pub fn view(&self) -> TimerView {
        let (time_text, progress, label) = match &self.session {
            Some(session) => (
                format_clock(session.remaining_seconds()),
                progress_fraction(
                    session.preset_duration_seconds(),
                    session.remaining_seconds(),
                ),
                Some(session.label().to_owned()),
            ),
            None => (format_clock(0), 0.0, None),
        };

        let start_control = match (self.state, self.paused) {
            (TimerState::Running, _) => StartControl::Pause,
            (TimerState::Ready, true) => StartControl::Resume,
            _ => StartControl::Start,
        };

        let is_complete = self.state == TimerState::Completed;

        TimerView {
            time_text,
            progress,
            start_control,
            controls_enabled: self.state != TimerState::Idle,
            is_complete,
            status_text: if is_complete { COMPLETE_STATUS } else { "" },
            label,
        }
    }

    fn complete(&mut self) -> Option<Completion> {
        self.cancel_tick_loop();
        self.state = TimerState::Completed;
        self.paused = false;

        if self.completion_reported {
            return None;
        }
        self.completion_reported = true;

        let session = self.session.as_ref()?;
        log::info!("Countdown '{}' complete", session.label());
        Some(Completion {
            label: session.label().to_owned(),
            duration_seconds: session.preset_duration_seconds(),
        })
    }

    fn cancel_tick_loop(&mut self) {
        if self.tick_loop.take().is_some() {
            log::trace!("Cancelled tick loop");
        }
    }
}
