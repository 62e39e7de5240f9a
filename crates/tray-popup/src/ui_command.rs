use crate::{AppResult, PopupTheme};

use tao::window::WindowId;
use tokio::sync::oneshot;
use tray_popup_core::{OnClosed, Rect};

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns the tray icon and every popup window (both are
/// `!Send`), so all window mutations and process lifecycle events flow
/// through this enum.
#[derive(Debug)]
pub enum UiCommand {
    /// Build and show a popup anchored to the tray icon.
    OpenPopup(PopupRequest),
    /// Close a popup previously opened with `OpenPopup`.
    ClosePopup(WindowId),
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}

/// A popup construction request with its reply channel.
#[derive(Debug)]
pub struct PopupRequest {
    /// Resolved popup theme.
    pub theme: PopupTheme,
    /// Tray icon bounds to anchor to.
    pub bounds: Rect,
    /// Fired when the window goes away.
    pub on_closed: OnClosed,
    /// Receives the new window id, or why it could not be built.
    pub reply: oneshot::Sender<AppResult<WindowId>>,
}
