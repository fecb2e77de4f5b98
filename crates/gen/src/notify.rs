//! User-facing failure notifications.
//!
//! Every generation failure travels two channels: the error value
//! returned to the caller, and a [`Notice`] pushed through the
//! registry's [`Notifier`]. Embedders plug in whatever surface they have
//! (a toast drawer, a status line); [`LogNotifier`] is the structured-log
//! default.

use crate::{Operation, ProviderId};

/// A user-visible failure notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// The vendor the operation targeted.
    pub provider: ProviderId,
    /// The operation that failed.
    pub operation: Operation,
    /// Human-readable failure description.
    pub message: String,
}

/// A sink for failure notifications.
pub trait Notifier: Send + Sync {
    /// Deliver one notice. Implementations must not block.
    fn notify(&self, notice: &Notice);
}

/// Notifier that emits notices as `tracing` warnings.
#[derive(Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        tracing::warn!(
            provider = %notice.provider,
            operation = %notice.operation,
            "{}",
            notice.message
        );
    }
}
