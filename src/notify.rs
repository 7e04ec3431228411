//! User Notifications
//!
//! Fire-and-forget messages shown to the user.

use tracing::info;

/// Trait for user-facing notices
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Prints notices to stderr and mirrors them to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        info!("🔔 {}", message);
        eprintln!("{message}");
    }
}
