// Property-based tests for the countdown state machine
// Random durations and tick counts check the timer invariants

use egg_timer::services::timer::{
    format_clock, progress_fraction, CountdownController, TimerState, TICK_PERIOD,
};
use proptest::prelude::*;
use std::time::Instant;

proptest! {
    /// Property: selecting a preset displays its full duration as MM:SS
    #[test]
    fn prop_selection_displays_duration(duration in 1u32..=360_000) {
        let mut controller = CountdownController::new();
        controller.select_preset(duration, "any");

        let view = controller.view();
        prop_assert_eq!(&view.time_text, &format_clock(duration));
        prop_assert_eq!(view.progress, 0.0);

        let (minutes, seconds) = view.time_text.split_once(':').unwrap();
        prop_assert_eq!(minutes.parse::<u32>().unwrap(), duration / 60);
        prop_assert_eq!(seconds.parse::<u32>().unwrap(), duration % 60);
        prop_assert_eq!(seconds.len(), 2);
        prop_assert!(minutes.len() >= 2);
    }

    /// Property: N ticks (N < D) leave D - N remaining and keep running
    #[test]
    fn prop_ticks_decrement_by_one(duration in 2u32..=3_600, ticks in 0u32..3_600) {
        let ticks = ticks % duration;
        let start = Instant::now();
        let mut controller = CountdownController::new();
        controller.select_preset(duration, "any");
        prop_assert!(controller.start(start));

        let completion = controller.advance(start + TICK_PERIOD * ticks);
        prop_assert!(completion.is_none());
        prop_assert_eq!(controller.remaining_seconds(), duration - ticks);
        prop_assert_eq!(controller.state(), TimerState::Running);
    }

    /// Property: a pause/resume cycle neither loses nor gains time
    #[test]
    fn prop_pause_resume_preserves_remaining(
        duration in 10u32..=3_600,
        before in 0u32..10,
        paused_for in 0u32..10_000,
    ) {
        let start = Instant::now();
        let mut controller = CountdownController::new();
        controller.select_preset(duration, "any");
        controller.start(start);
        controller.advance(start + TICK_PERIOD * before);
        controller.pause();
        let remaining = controller.remaining_seconds();

        let resume_at = start + TICK_PERIOD * (before + paused_for);
        controller.advance(resume_at);
        prop_assert!(controller.start(resume_at));
        prop_assert_eq!(controller.remaining_seconds(), remaining);
        prop_assert_eq!(remaining, duration - before);
    }

    /// Property: running to zero completes exactly once, however late the frames
    #[test]
    fn prop_completion_fires_once(duration in 1u32..=600, frame_ticks in 1u32..50) {
        let start = Instant::now();
        let mut controller = CountdownController::new();
        controller.select_preset(duration, "any");
        controller.start(start);

        let mut completions = 0;
        let mut elapsed = 0;
        while elapsed <= duration + 2 * frame_ticks {
            elapsed += frame_ticks;
            if controller.advance(start + TICK_PERIOD * elapsed).is_some() {
                completions += 1;
            }
        }

        prop_assert!(controller.tick().is_none());
        prop_assert_eq!(completions, 1);
        prop_assert_eq!(controller.remaining_seconds(), 0);
        prop_assert_eq!(controller.state(), TimerState::Completed);
    }

    /// Property: progress always stays within [0, 1]
    #[test]
    fn prop_progress_is_bounded(duration in 1u32..=100_000, remaining in 0u32..=100_000) {
        let remaining = remaining.min(duration);
        let fraction = progress_fraction(duration, remaining);
        prop_assert!((0.0..=1.0).contains(&fraction));
    }
}
