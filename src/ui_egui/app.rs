mod lifecycle;
mod render;
mod ring;
mod shortcuts;

use crate::models::settings::Settings;
use crate::ui_egui::context::TimerContext;
use crate::ui_egui::theme::TimerTheme;

pub struct TimerApp {
    /// User configuration, including the preset catalog
    settings: Settings,
    /// Currently applied theme colors
    theme: TimerTheme,
    /// Timer session, completion effects and preset selection
    context: TimerContext,
}

impl eframe::App for TimerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}
