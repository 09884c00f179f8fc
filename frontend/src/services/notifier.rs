//! User notification seam.
//!
//! Blocking notifications go through [`Notifier`] so the guards and the
//! file picker can be exercised without a browser window.

use crate::types::AppError;

/// Something that can put a message in front of the user.
pub trait Notifier {
    /// Show a message the user has to dismiss.
    fn notify_blocking(&self, message: &str);

    /// Report a validation failure.
    ///
    /// DOM failures are logged instead; they mean nothing to the user.
    fn report(&self, error: &AppError) {
        if error.is_user_facing() {
            log::warn!("⚠️ {}", error);
            self.notify_blocking(&error.to_string());
        } else {
            log::warn!("{}", error);
        }
    }
}
