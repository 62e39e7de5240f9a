//! Links a popup closed on focus loss to the tray click that caused it.
//!
//! Clicking the tray icon while a popup is open takes focus from the popup
//! before the click itself is delivered. With `close_on_blur` enabled the
//! popup is already closed when the click reaches the controller, which
//! would then open it again. The guard swallows that one click.

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::{Duration, Instant},
};

/// How long after a blur-close a tray click is considered its cause.
pub const BLUR_CLICK_WINDOW: Duration = Duration::from_millis(300);

/// Shared between the popup registry and the tray click handler.
#[derive(Debug, Clone, Default)]
pub struct BlurGuard {
    closed_at: Arc<Mutex<Option<Instant>>>,
}

impl BlurGuard {
    /// Create a guard with no pending blur-close.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember that a popup was closed on focus loss at `at`.
    pub fn record_blur_close(&self, at: Instant) {
        *self.closed_at.lock().unwrap_or_else(PoisonError::into_inner) = Some(at);
    }

    /// Whether a tray click at `at` only confirms a blur-close.
    ///
    /// Each recorded blur-close absorbs at most one click.
    pub fn absorbs_click(&self, at: Instant) -> bool {
        let closed_at = self
            .closed_at
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match closed_at {
            Some(closed_at) => at.saturating_duration_since(closed_at) <= BLUR_CLICK_WINDOW,
            None => false,
        }
    }
}
