//! System tray icon backed by `tray-icon`.
//!
//! Registers the single status-bar icon with a right-click menu holding a
//! Quit item, and forwards left clicks to the tray controller.

use crate::BlurGuard;

use std::{panic::Location, time::Instant};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};
use tray_icon::{
    Icon, MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent, TrayIconId,
    menu::{Menu, MenuId, MenuItem},
};
use tray_popup_core::{
    ClickEvent, ClickSink, IconImage, Point, Rect, TrayError, TrayHost, TrayIconHandle, TrayResult,
};

/// Identifier of the one tray icon this process registers.
pub const TRAY_ICON_ID: &str = "tray-popup";

/// Host tray API on the main thread.
pub struct NativeTrayHost {
    quit_label: String,
    blur_guard: BlurGuard,
}

impl NativeTrayHost {
    /// Create a host whose menu shows `quit_label`.
    ///
    /// Left clicks absorbed by `blur_guard` never reach the controller.
    pub fn new(quit_label: String, blur_guard: BlurGuard) -> Self {
        Self {
            quit_label,
            blur_guard,
        }
    }
}

impl TrayHost for NativeTrayHost {
    type Icon = StatusIcon;

    #[track_caller]
    #[instrument(skip_all)]
    fn register_icon(&mut self, image: IconImage) -> TrayResult<StatusIcon> {
        let menu = Menu::new();
        let quit_item = MenuItem::new(&self.quit_label, true, None);
        let quit_item_id = quit_item.id().clone();

        menu.append(&quit_item).map_err(|e| TrayError::Host {
            reason: format!("Failed to add quit menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let icon = Icon::from_rgba(image.rgba, image.width, image.height).map_err(|e| {
            TrayError::IconAsset {
                reason: format!("Failed to create icon from RGBA: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let tray_icon = TrayIconBuilder::new()
            .with_id(TRAY_ICON_ID)
            .with_menu(Box::new(menu))
            .with_menu_on_left_click(false)
            .with_icon(icon)
            .build()
            .map_err(|e| TrayError::Host {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon registered");

        Ok(StatusIcon {
            tray_icon,
            quit_item_id,
            blur_guard: self.blur_guard.clone(),
        })
    }
}

/// The registered status-bar icon. Dropping it removes the icon.
pub struct StatusIcon {
    tray_icon: TrayIcon,
    quit_item_id: MenuId,
    blur_guard: BlurGuard,
}

impl StatusIcon {
    /// Get the quit menu item ID.
    pub fn quit_item_id(&self) -> &MenuId {
        &self.quit_item_id
    }
}

impl TrayIconHandle for StatusIcon {
    #[track_caller]
    fn set_tooltip(&self, text: &str) -> TrayResult<()> {
        self.tray_icon
            .set_tooltip(Some(text))
            .map_err(|e| TrayError::Host {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    fn on_click(&self, sink: ClickSink) -> TrayResult<()> {
        let icon_id = self.tray_icon.id().clone();
        let blur_guard = self.blur_guard.clone();

        // Runs on the UI thread; ClickSink never blocks.
        TrayIconEvent::set_event_handler(Some(move |event: TrayIconEvent| {
            let Some(click) = left_click(&icon_id, event) else {
                return;
            };
            if blur_guard.absorbs_click(Instant::now()) {
                debug!("Tray click closed the popup through focus loss");
                return;
            }
            sink.click(click);
        }));

        debug!("Tray click handler installed");

        Ok(())
    }
}

/// Convert a left-button release on `icon_id` into a [`ClickEvent`].
pub(crate) fn left_click(icon_id: &TrayIconId, event: TrayIconEvent) -> Option<ClickEvent> {
    match event {
        TrayIconEvent::Click {
            id,
            position,
            rect,
            button: MouseButton::Left,
            button_state: MouseButtonState::Up,
            ..
        } if id == *icon_id => Some(ClickEvent {
            icon_id: id.0,
            bounds: Rect::new(
                rect.position.x,
                rect.position.y,
                f64::from(rect.size.width),
                f64::from(rect.size.height),
            ),
            point: Point {
                x: position.x,
                y: position.y,
            },
        }),
        _ => None,
    }
}
