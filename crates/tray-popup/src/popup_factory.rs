//! Attached window factory backed by the tao event loop.
//!
//! Popups are built on the main thread. The factory posts an
//! [`UiCommand::OpenPopup`] through the event loop proxy and awaits the
//! window id on a oneshot channel.

use crate::{PopupRequest, PopupTheme, UiCommand};

use std::panic::Location;

use error_location::ErrorLocation;
use tao::{event_loop::EventLoopProxy, window::WindowId};
use tokio::sync::oneshot;
use tracing::{debug, instrument};
use tray_popup_core::{AttachedWindowFactory, PopupWindow, TrayError, TrayResult, WindowConfig};

/// Builds popups on the UI thread.
pub struct PopupFactory {
    proxy: EventLoopProxy<UiCommand>,
}

impl PopupFactory {
    /// Create a factory posting to `proxy`.
    pub fn new(proxy: EventLoopProxy<UiCommand>) -> Self {
        Self { proxy }
    }
}

impl AttachedWindowFactory for PopupFactory {
    type Window = PopupHandle;

    #[instrument(skip(self), fields(popup = %config.on_closed.popup()))]
    async fn create(&self, config: WindowConfig) -> TrayResult<PopupHandle> {
        let theme = PopupTheme::parse(&config.theme)?;
        let (reply, reply_rx) = oneshot::channel();

        self.proxy
            .send_event(UiCommand::OpenPopup(PopupRequest {
                theme,
                bounds: config.bounds,
                on_closed: config.on_closed,
                reply,
            }))
            .map_err(|_| TrayError::Construction {
                reason: "Event loop closed before the popup was requested".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let window_id = reply_rx
            .await
            .map_err(|_| TrayError::Construction {
                reason: "UI thread dropped the popup request".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?
            .map_err(|e| TrayError::Construction {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(window_id = ?window_id, "Popup window built");

        Ok(PopupHandle {
            window_id,
            proxy: self.proxy.clone(),
        })
    }
}

/// Handle to a popup living on the UI thread.
pub struct PopupHandle {
    window_id: WindowId,
    proxy: EventLoopProxy<UiCommand>,
}

impl PopupHandle {
    /// Id of the underlying window.
    pub fn window_id(&self) -> WindowId {
        self.window_id
    }
}

impl PopupWindow for PopupHandle {
    fn close(&self) {
        if self
            .proxy
            .send_event(UiCommand::ClosePopup(self.window_id))
            .is_err()
        {
            debug!(window_id = ?self.window_id, "Event loop closed, popup already gone");
        }
    }
}
