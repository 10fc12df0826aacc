//! Scheduled tasks owned by the application.
//!
//! Two timers exist: the resize debounce (cancellable, restarted by every
//! resize event) and the deferred focus move (fire-and-forget by design).
//! Both deliver their payload back to the main loop as an [`AppMessage`]
//! over the app's message channel, the same way background tasks report in.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::AppMessage;

// ============================================================================
// Debouncer
// ============================================================================

/// Single cancellable timer: each schedule call aborts the previous one, so
/// only the final call in a burst delivers its message.
#[derive(Debug, Default)]
pub struct Debouncer {
    handle: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates an idle debouncer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `message` to be sent after `delay`, cancelling any
    /// previously scheduled delivery.
    pub fn schedule(
        &mut self,
        delay: Duration,
        tx: UnboundedSender<AppMessage>,
        message: AppMessage,
    ) {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = tx.send(message);
        }));
    }

    /// Cancels the pending delivery, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ============================================================================
// Fire-and-forget defer
// ============================================================================

/// Sends `message` after `delay` with no cancellation handle.
///
/// Used for the deferred focus move on menu open: closing the menu before
/// the timer fires does not cancel it.
pub fn defer(delay: Duration, tx: UnboundedSender<AppMessage>, message: AppMessage) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(message);
    });
}

// ============================================================================
// Tests
// ============================================================================
