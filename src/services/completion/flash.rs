use std::time::{Duration, Instant};

use crate::models::settings::FlashSettings;
use crate::services::scheduler::PeriodicTask;

/// Alternates the window title after a countdown finishes.
///
/// Runs on its own bounded schedule, independent of the countdown tick.
#[derive(Debug, Clone)]
pub struct TitleFlasher {
    original: String,
    alert: String,
    interval: Duration,
    alternations: u32,
    task: Option<PeriodicTask>,
}

impl TitleFlasher {
    pub fn new(original: impl Into<String>, settings: &FlashSettings) -> Self {
        Self {
            original: original.into(),
            alert: settings.alert_title.clone(),
            interval: Duration::from_millis(settings.interval_ms.max(1)),
            alternations: settings.alternations,
            task: None,
        }
    }

    pub fn original_title(&self) -> &str {
        &self.original
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    /// Start (or restart) the sequence.
    pub fn start(&mut self, now: Instant) {
        if self.alternations == 0 {
            return;
        }
        self.task = Some(PeriodicTask::new(self.interval, now).with_limit(self.alternations));
    }

    /// Stop early. Returns the title to restore if a flash was running.
    pub fn cancel(&mut self) -> Option<&str> {
        self.task.take().map(|_| self.original.as_str())
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.task.as_ref().and_then(PeriodicTask::next_due)
    }

    /// Title to show after polling at `now`, or `None` when unchanged.
    ///
    /// The last alternation is followed by the original title.
    pub fn poll(&mut self, now: Instant) -> Option<&str> {
        let task = self.task.as_mut()?;
        if task.poll(now) == 0 {
            return None;
        }

        if task.is_finished() {
            self.task = None;
            return Some(&self.original);
        }

        if task.fired() % 2 == 1 {
            Some(&self.alert)
        } else {
            Some(&self.original)
        }
    }
}
