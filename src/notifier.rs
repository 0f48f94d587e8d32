/*!
 * User-facing notices
 */

use crate::utils::MESSAGE_PREFIX;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational, e.g. nothing selected
    Info,
    /// Something was left out or could not be done
    Warning,
    /// Content was copied
    Success,
}

/// Receiver of transient messages shown to the user
pub trait Notifier {
    /// Show `message`; the `"Context Copy: "` prefix is added by the caller
    fn notify(&self, severity: Severity, message: &str);
}

/// Prefix a message for display
pub fn prefixed(message: &str) -> String {
    format!("{}{}", MESSAGE_PREFIX, message)
}

/// Prints notices to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    /// Suppress info and success notices
    pub quiet: bool,
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Warning => eprintln!("⚠️  {}", message),
            Severity::Info | Severity::Success if self.quiet => {}
            Severity::Info => eprintln!("{}", message),
            Severity::Success => eprintln!("✅ {}", message),
        }
    }
}
