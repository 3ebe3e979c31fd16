use super::TimerApp;
use crate::models::settings::Settings;
use crate::services::alarm::AlarmService;
use crate::services::completion::{CompletionService, TitleFlasher};
use crate::services::notification::NotificationService;
use crate::ui_egui::context::TimerContext;
use crate::ui_egui::shell::EguiShell;
use crate::ui_egui::theme::TimerTheme;
use egui::ViewportCommand;
use std::time::Instant;

impl TimerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let theme = TimerTheme::from_preference(settings.theme);
        theme.apply_to_context(&cc.egui_ctx);

        let mut notifications = NotificationService::new(settings.window_title.clone());
        notifications.set_enabled(settings.notifications_enabled);
        let shell = EguiShell::new(cc.egui_ctx.clone(), notifications);

        let alarm = AlarmService::system(settings.alarm_sound.clone());
        if let Some(path) = alarm.sound_path() {
            log::info!("Alarm sound: {}", path.display());
        }

        let flasher = TitleFlasher::new(settings.window_title.clone(), &settings.flash);
        let completion = CompletionService::new(alarm, Box::new(shell), flasher);
        let context = TimerContext::new(
            settings.presets.clone(),
            completion,
            settings.keep_running_after_close,
        );

        Self {
            settings,
            theme,
            context,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.handle_close_request(ctx);
        self.handle_keyboard_shortcuts(ctx, now);

        self.context.update(now);

        self.render_main_panel(ctx, now);

        self.schedule_repaint(ctx, now);
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.context.shutdown();
        log::info!("Egg Timer shutting down");
    }

    /// Keep the process alive on close when configured to, dropping the
    /// session so a restored window starts fresh.
    fn handle_close_request(&mut self, ctx: &egui::Context) {
        let close_requested = ctx.input(|i| i.viewport().close_requested());
        if close_requested && self.context.handle_close_request() {
            ctx.send_viewport_cmd(ViewportCommand::CancelClose);
        }
    }

    /// Wake up for the next tick or title flash even without input.
    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if let Some(due) = self.context.next_due() {
            ctx.request_repaint_after(due.saturating_duration_since(now));
        }
    }
}
