use super::ring::paint_ring;
use super::TimerApp;
use crate::services::timer::format_clock;
use egui::{Button, RichText};
use std::time::Instant;

const PRESET_BUTTON_SIZE: egui::Vec2 = egui::vec2(110.0, 44.0);
const CONTROL_BUTTON_SIZE: egui::Vec2 = egui::vec2(130.0, 44.0);

impl TimerApp {
    pub(super) fn render_main_panel(&mut self, ctx: &egui::Context, now: Instant) {
        let frame = egui::Frame::none()
            .fill(self.theme.app_background)
            .inner_margin(egui::Margin::same(16.0));

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("🥚 {}", self.settings.window_title))
                        .size(26.0)
                        .strong(),
                );
                ui.label(
                    RichText::new("Pick your eggs")
                        .size(14.0)
                        .color(self.theme.text_secondary),
                );
                ui.add_space(12.0);

                if let Some(index) = self.render_preset_buttons(ui) {
                    self.context.select_preset(index);
                }

                ui.add_space(16.0);
                let view = self.context.view();
                paint_ring(ui, &view, &self.theme);

                ui.add_space(8.0);
                ui.label(
                    RichText::new(view.status_text)
                        .size(20.0)
                        .color(self.theme.ring_complete),
                );
                ui.add_space(12.0);

                let mut toggle_clicked = false;
                let mut reset_clicked = false;
                ui.horizontal(|ui| {
                    let total = CONTROL_BUTTON_SIZE.x * 2.0 + ui.spacing().item_spacing.x;
                    ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));

                    let start_text = format!(
                        "{} {}",
                        view.start_control.icon(),
                        view.start_control.label()
                    );
                    toggle_clicked = ui
                        .add_enabled(
                            view.controls_enabled,
                            Button::new(RichText::new(start_text).size(18.0))
                                .min_size(CONTROL_BUTTON_SIZE),
                        )
                        .clicked();
                    reset_clicked = ui
                        .add_enabled(
                            view.controls_enabled,
                            Button::new(RichText::new("↺ Reset").size(18.0))
                                .min_size(CONTROL_BUTTON_SIZE),
                        )
                        .clicked();
                });

                if toggle_clicked {
                    self.context.toggle(now);
                }
                if reset_clicked {
                    self.context.reset();
                }

                ui.add_space(16.0);
                if ui
                    .small_button("Minimize")
                    .on_hover_text("Ctrl+M")
                    .clicked()
                {
                    self.context.minimize();
                }

                ui.add_space(8.0);
                ui.label(
                    RichText::new("Space: start/pause · R: reset · 1-9: presets")
                        .size(11.0)
                        .color(self.theme.text_secondary),
                );
            });
        });
    }

    /// Returns the index of a clicked preset.
    fn render_preset_buttons(&self, ui: &mut egui::Ui) -> Option<usize> {
        let mut clicked = None;

        ui.horizontal_wrapped(|ui| {
            let count = self.context.presets().len().min(3) as f32;
            let row = PRESET_BUTTON_SIZE.x * count + ui.spacing().item_spacing.x * (count - 1.0);
            ui.add_space(((ui.available_width() - row) / 2.0).max(0.0));

            for (index, preset) in self.context.presets().iter().enumerate() {
                let button = Button::new(
                    RichText::new(format!(
                        "{}\n{}",
                        preset.button_text(),
                        format_clock(preset.duration_seconds)
                    ))
                    .size(15.0),
                )
                .selected(self.context.selected_preset() == Some(index))
                .min_size(PRESET_BUTTON_SIZE);

                if ui.add(button).clicked() {
                    clicked = Some(index);
                }
            }
        });

        clicked
    }
}
