// Egg Timer Application
// Main entry point

use egg_timer::services::settings::SettingsService;
use egg_timer::ui_egui::{window_icon, TimerApp};

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Egg Timer");

    let settings_service = SettingsService::from_environment();
    let settings = settings_service.load_or_default();
    let title = settings.window_title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([400.0, 650.0])
            .with_min_inner_size([360.0, 600.0])
            .with_resizable(false)
            .with_icon(window_icon()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(TimerApp::new(cc, settings)))),
    )
}
