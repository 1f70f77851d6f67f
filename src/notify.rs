//! Post-commit notification contract
//!
//! After a transfer commits, each affected account holder is told what
//! happened. Delivery (email, SMS, push) belongs to the implementation;
//! the engine's contract is fire-and-forget: commit is authoritative,
//! notification is best-effort informational.

use tracing::info;

use crate::account::Account;

/// Notification collaborator seam.
///
/// `notify` returns nothing: an implementation that fails to deliver must
/// swallow the failure itself. A committed transfer is never rolled back
/// because a notification did not go out.
pub trait Notifier: Send + Sync {
    fn notify(&self, account: &Account, message: &str);
}

/// Logs each notification as a structured event.
///
/// Stands in for a real delivery gateway; useful in the demo runner and in
/// any deployment where notifications only need to reach the log pipeline.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, account: &Account, message: &str) {
        info!(account_id = %account.id(), "notify: {}", message);
    }
}
