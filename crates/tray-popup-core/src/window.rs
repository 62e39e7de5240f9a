//! Attached popup window contract.

use crate::{Rect, TrayResult, controller::ControlEvent};

use std::{fmt, future::Future};

use tokio::sync::mpsc;
use tracing::debug;

/// Identifies one popup instance for the lifetime of the controller.
///
/// Ids increase monotonically so a late close notification for an old popup
/// never matches the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PopupId(pub(crate) u64);

impl fmt::Display for PopupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "popup-{}", self.0)
    }
}

/// Everything the factory needs to build one popup.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Visual theme name.
    pub theme: String,
    /// Screen bounds of the tray icon the popup anchors to.
    pub bounds: Rect,
    /// Must be fired whenever the popup closes, for any reason.
    pub on_closed: OnClosed,
}

/// Close notification handed to the window factory.
///
/// Firing it more than once, or after the controller has moved on to another
/// popup, is harmless.
#[derive(Clone)]
pub struct OnClosed {
    popup: PopupId,
    tx: mpsc::UnboundedSender<ControlEvent>,
}

impl OnClosed {
    pub(crate) fn new(popup: PopupId, tx: mpsc::UnboundedSender<ControlEvent>) -> Self {
        Self { popup, tx }
    }

    /// Popup this notification belongs to.
    pub fn popup(&self) -> PopupId {
        self.popup
    }

    /// Tell the controller the popup is gone.
    pub fn fire(&self) {
        if self.tx.send(ControlEvent::Closed(self.popup)).is_err() {
            debug!(popup = %self.popup, "Tray controller stopped, dropping close notification");
        }
    }
}

impl fmt::Debug for OnClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnClosed").field("popup", &self.popup).finish()
    }
}

/// A live popup window.
pub trait PopupWindow: Send + 'static {
    /// Ask the window to close. Must not block on the close completing.
    fn close(&self);
}

/// Builds popup windows anchored to the tray icon.
pub trait AttachedWindowFactory: Send + Sync + 'static {
    /// Window handle produced by this factory.
    type Window: PopupWindow;

    /// Construct and show a popup for `config`.
    fn create(
        &self,
        config: WindowConfig,
    ) -> impl Future<Output = TrayResult<Self::Window>> + Send;
}
