//! Boundary to the platform window and notification services.

/// One-way requests the timer makes of its host window.
///
/// Every call is fire-and-forget: implementations degrade silently when
/// the platform lacks a capability.
#[cfg_attr(test, mockall::automock)]
pub trait PresentationShell {
    /// Announce a finished countdown and draw the user's attention.
    fn notify_completion(&mut self, label: &str);

    /// Minimize or hide the window.
    fn minimize_window(&mut self);

    fn set_title(&mut self, title: &str);
}
