//! Host tray API seen from the controller.

use crate::{ClickEvent, IconImage, TrayResult, controller::ControlEvent};

use tokio::sync::mpsc;
use tracing::debug;

/// Platform tray that can register the icon.
pub trait TrayHost {
    /// Handle to the registered icon. Dropping it removes the icon.
    type Icon: TrayIconHandle;

    /// Put `image` into the status bar.
    fn register_icon(&mut self, image: IconImage) -> TrayResult<Self::Icon>;
}

/// A registered tray icon.
pub trait TrayIconHandle {
    /// Replace the hover tooltip.
    fn set_tooltip(&self, text: &str) -> TrayResult<()>;

    /// Route every click on this icon into `sink`.
    fn on_click(&self, sink: ClickSink) -> TrayResult<()>;
}

/// Sending half used by the host to deliver clicks to the controller.
///
/// Cheap to clone and safe to call from any thread. Clicks sent after the
/// controller has stopped are dropped.
#[derive(Debug, Clone)]
pub struct ClickSink {
    tx: mpsc::UnboundedSender<ControlEvent>,
}

impl ClickSink {
    pub(crate) fn new(tx: mpsc::UnboundedSender<ControlEvent>) -> Self {
        Self { tx }
    }

    /// Deliver a click.
    pub fn click(&self, event: ClickEvent) {
        if self.tx.send(ControlEvent::Click(event)).is_err() {
            debug!("Tray controller stopped, dropping click");
        }
    }
}
