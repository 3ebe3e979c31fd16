mod app;
pub mod context;
mod icon;
mod shell;
pub mod theme;

pub use app::TimerApp;
pub use context::{ShortcutAction, TimerContext};
pub use icon::window_icon;
pub use shell::EguiShell;
