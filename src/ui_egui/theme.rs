//! Theme module for the egui timer window
//!
//! Defines the TimerTheme structure and resolves it from the user's
//! theme preference.

use crate::models::settings::ThemePreference;
use egui::Color32;

/// All colors used by the timer window
#[derive(Debug, Clone, PartialEq)]
pub struct TimerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window background color
    pub app_background: Color32,

    /// Background of the unselected preset buttons
    pub button_background: Color32,

    /// Highlight for the selected preset
    pub selected_background: Color32,

    /// Unfilled part of the progress ring
    pub ring_track: Color32,

    /// Filled part of the progress ring while counting down
    pub ring_progress: Color32,

    /// Ring color once the countdown has finished
    pub ring_complete: Color32,

    /// Primary text color (clock, buttons)
    pub text_primary: Color32,

    /// Secondary text color (labels, status)
    pub text_secondary: Color32,
}

impl TimerTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(255, 247, 237),
            button_background: Color32::from_rgb(255, 237, 213),
            selected_background: Color32::from_rgb(253, 186, 116),
            ring_track: Color32::from_rgb(254, 215, 170),
            ring_progress: Color32::from_rgb(249, 115, 22),
            ring_complete: Color32::from_rgb(34, 197, 94),
            text_primary: Color32::from_rgb(67, 20, 7),
            text_secondary: Color32::from_rgb(154, 52, 18),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(28, 25, 23),
            button_background: Color32::from_rgb(41, 37, 36),
            selected_background: Color32::from_rgb(124, 45, 18),
            ring_track: Color32::from_rgb(68, 64, 60),
            ring_progress: Color32::from_rgb(251, 146, 60),
            ring_complete: Color32::from_rgb(74, 222, 128),
            text_primary: Color32::from_rgb(250, 250, 249),
            text_secondary: Color32::from_rgb(214, 211, 209),
        }
    }

    /// Resolve the preference, asking the OS when it is `System`
    pub fn from_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.inactive.weak_bg_fill = self.button_background;
        visuals.widgets.inactive.bg_fill = self.button_background;
        visuals.widgets.hovered.weak_bg_fill = self.selected_background;
        visuals.widgets.active.weak_bg_fill = self.selected_background;
        visuals.selection.bg_fill = self.selected_background;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme() {
        let theme = TimerTheme::light();
        assert!(!theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(255, 247, 237));
    }

    #[test]
    fn test_dark_theme() {
        let theme = TimerTheme::dark();
        assert!(theme.is_dark);
        assert_ne!(theme.ring_progress, theme.ring_complete);
    }

    #[test]
    fn test_explicit_preferences() {
        assert_eq!(
            TimerTheme::from_preference(ThemePreference::Light),
            TimerTheme::light()
        );
        assert_eq!(
            TimerTheme::from_preference(ThemePreference::Dark),
            TimerTheme::dark()
        );
    }
}
