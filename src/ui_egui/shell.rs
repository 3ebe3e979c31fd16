use crate::services::notification::NotificationService;
use crate::services::shell::PresentationShell;
use egui::{UserAttentionType, ViewportCommand};

/// The root eframe window plus desktop notifications.
pub struct EguiShell {
    ctx: egui::Context,
    notifications: NotificationService,
}

impl EguiShell {
    pub fn new(ctx: egui::Context, notifications: NotificationService) -> Self {
        Self { ctx, notifications }
    }

    fn is_focused(&self) -> bool {
        self.ctx
            .input(|i| i.viewport().focused)
            .unwrap_or(true)
    }
}

impl PresentationShell for EguiShell {
    fn notify_completion(&mut self, label: &str) {
        if let Err(e) = self.notifications.show_timer_complete(label) {
            log::warn!("Failed to show system notification: {}", e);
        } else if self.notifications.is_enabled() {
            log::info!("Showed completion notification for '{}'", label);
        }

        if !self.is_focused() {
            self.ctx
                .send_viewport_cmd(ViewportCommand::RequestUserAttention(
                    UserAttentionType::Critical,
                ));
        }

        self.ctx.send_viewport_cmd(ViewportCommand::Minimized(false));
        self.ctx.send_viewport_cmd(ViewportCommand::Visible(true));
        self.ctx.send_viewport_cmd(ViewportCommand::Focus);
        self.ctx.request_repaint();
    }

    fn minimize_window(&mut self) {
        log::debug!("Minimizing window");
        self.ctx.send_viewport_cmd(ViewportCommand::Minimized(true));
    }

    fn set_title(&mut self, title: &str) {
        self.ctx
            .send_viewport_cmd(ViewportCommand::Title(title.to_owned()));
    }
}
