//! Pure presentation helpers for the countdown display and progress ring.

use std::f32::consts::PI;

/// Radius of the progress ring in logical pixels.
pub const RING_RADIUS: f32 = 110.0;

pub const COMPLETE_STATUS: &str = "Done! 🎉";

/// Format whole seconds as `MM:SS`. Minutes are not wrapped at 60.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Fraction of the preset that has elapsed, in `[0, 1]`.
pub fn progress_fraction(preset_seconds: u32, remaining_seconds: u32) -> f32 {
    if preset_seconds == 0 {
        return 0.0;
    }
    let elapsed = preset_seconds.saturating_sub(remaining_seconds);
    (elapsed as f32 / preset_seconds as f32).clamp(0.0, 1.0)
}

pub fn ring_circumference(radius: f32) -> f32 {
    2.0 * PI * radius
}

/// Stroke offset of the ring: full circumference when empty, zero when full.
pub fn ring_dash_offset(fraction: f32, circumference: f32) -> f32 {
    circumference - fraction.clamp(0.0, 1.0) * circumference
}

/// Copy shown on the single start/pause toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartControl {
    Start,
    Pause,
    Resume,
}

impl StartControl {
    pub fn label(&self) -> &'static str {
        match self {
            StartControl::Start => "Start",
            StartControl::Pause => "Pause",
            StartControl::Resume => "Resume",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StartControl::Pause => "⏸",
            StartControl::Start | StartControl::Resume => "▶",
        }
    }
}

/// Everything the rendering layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerView {
    pub time_text: String,
    pub progress: f32,
    pub start_control: StartControl,
    pub controls_enabled: bool,
    pub is_complete: bool,
    pub status_text: &'static str,
    pub label: Option<String>,
}
