//! Cancellable periodic tasks driven by the UI frame loop.
//!
//! Nothing here spawns threads or timers. The owner keeps a
//! [`PeriodicTask`] in an `Option`, polls it with the current [`Instant`]
//! each frame, and cancels it by dropping it (`Option::take`). Because the
//! clock is passed in, the schedule is fully deterministic under test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct PeriodicTask {
    period: Duration,
    next_due: Instant,
    fired: u32,
    limit: Option<u32>,
}

impl PeriodicTask {
    /// First firing is one `period` after `now`.
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
            fired: 0,
            limit: None,
        }
    }

    /// Stop firing after `limit` iterations.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn fired(&self) -> u32 {
        self.fired
    }

    /// True once a bounded task has used up all of its iterations.
    pub fn is_finished(&self) -> bool {
        matches!(self.limit, Some(limit) if self.fired >= limit)
    }

    /// Instant of the next firing, `None` once finished.
    pub fn next_due(&self) -> Option<Instant> {
        if self.is_finished() {
            None
        } else {
            Some(self.next_due)
        }
    }

    /// Time left until the next firing, zero when already overdue.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due()
            .map(|due| due.saturating_duration_since(now))
    }

    /// Number of firings that came due up to `now`, advancing the schedule.
    ///
    /// A late poll returns every missed firing so callers can catch up one
    /// iteration at a time.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while !self.is_finished() && now >= self.next_due {
            self.next_due += self.period;
            self.fired += 1;
            due += 1;
        }
        due
    }
}
