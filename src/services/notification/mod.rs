use anyhow::Result;
use notify_rust::{Notification, Timeout};

pub const COMPLETE_SUMMARY: &str = "🥚 Egg Timer Complete!";

/// Service for displaying system notifications
pub struct NotificationService {
    enabled: bool,
    app_name: String,
}

impl NotificationService {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            enabled: true,
            app_name: app_name.into(),
        }
    }

    /// Check if notifications are enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable notifications
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Show the "eggs are ready" notification for a finished countdown
    pub fn show_timer_complete(&self, label: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        Notification::new()
            .appname(&self.app_name)
            .summary(COMPLETE_SUMMARY)
            .body(&completion_body(label))
            .timeout(Timeout::Milliseconds(10000))
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(())
    }
}

/// Body text of the completion notification
pub fn completion_body(label: &str) -> String {
    format!("Your {} eggs are ready!", label)
}
