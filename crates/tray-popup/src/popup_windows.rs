//! Popup windows owned by the UI thread.

use crate::{
    AppError, AppResult, BlurGuard, PopupRequest, PopupTheme, UiCommand, config::PopupConfig,
};

use std::{collections::HashMap, panic::Location, time::Instant};

use error_location::ErrorLocation;
use tao::{
    dpi::{LogicalSize, PhysicalPosition},
    event::WindowEvent,
    event_loop::EventLoopWindowTarget,
    monitor::MonitorHandle,
    window::{Window, WindowBuilder, WindowId},
};
use tracing::{debug, info, instrument, warn};
use tray_popup_core::{OnClosed, Point, Rect, Size, anchor_popup};

// Used when the windowing system reports no monitors at all.
const FALLBACK_MONITOR: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1920.0,
    height: 1080.0,
};

struct OpenPopup {
    window: Window,
    on_closed: OnClosed,
}

/// Every popup currently on screen, keyed by window id.
pub struct PopupWindows {
    config: PopupConfig,
    title: String,
    blur_guard: BlurGuard,
    open: HashMap<WindowId, OpenPopup>,
}

impl PopupWindows {
    /// Create an empty registry building popups per `config`.
    ///
    /// Blur-closes are reported to `blur_guard`.
    pub fn new(config: PopupConfig, title: String, blur_guard: BlurGuard) -> Self {
        Self {
            config,
            title,
            blur_guard,
            open: HashMap::new(),
        }
    }

    /// Build the requested popup and answer the factory.
    #[instrument(skip_all, fields(popup = %request.on_closed.popup()))]
    pub fn open(&mut self, target: &EventLoopWindowTarget<UiCommand>, request: PopupRequest) {
        let PopupRequest {
            theme,
            bounds,
            on_closed,
            reply,
        } = request;

        match self.build(target, theme, bounds) {
            Ok(window) => {
                let window_id = window.id();
                if reply.send(Ok(window_id)).is_err() {
                    // Factory gave up waiting; the window is dropped here.
                    warn!(window_id = ?window_id, "Popup requester went away, discarding window");
                    return;
                }
                info!(window_id = ?window_id, "Popup window shown");
                self.open.insert(window_id, OpenPopup { window, on_closed });
            }
            Err(e) => {
                warn!(error = %e, "Failed to build popup window");
                let _ = reply.send(Err(e));
            }
        }
    }

    /// Close one popup and notify the controller.
    pub fn close(&mut self, window_id: WindowId) {
        match self.open.remove(&window_id) {
            Some(OpenPopup { window, on_closed }) => {
                drop(window);
                on_closed.fire();
                info!(window_id = ?window_id, "Popup window closed");
            }
            None => debug!(window_id = ?window_id, "Popup already closed"),
        }
    }

    /// Close every popup, used when the event loop exits.
    pub fn close_all(&mut self) {
        let ids: Vec<WindowId> = self.open.keys().copied().collect();
        for window_id in ids {
            self.close(window_id);
        }
    }

    /// React to window events for popups this registry owns.
    pub fn handle_window_event(&mut self, window_id: WindowId, event: &WindowEvent<'_>) {
        if !self.open.contains_key(&window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => self.close(window_id),
            WindowEvent::Focused(false) if self.config.close_on_blur => {
                debug!(window_id = ?window_id, "Popup lost focus");
                self.blur_guard.record_blur_close(Instant::now());
                self.close(window_id);
            }
            _ => {}
        }
    }

    #[track_caller]
    fn build(
        &self,
        target: &EventLoopWindowTarget<UiCommand>,
        theme: PopupTheme,
        bounds: Rect,
    ) -> AppResult<Window> {
        let (monitor, scale) = monitor_for(target, bounds.center());
        let physical = Size {
            width: self.config.width * scale,
            height: self.config.height * scale,
        };
        let position = anchor_popup(bounds, physical, monitor);

        debug!(?bounds, ?monitor, ?position, "Anchoring popup");

        WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_position(PhysicalPosition::new(position.x, position.y))
            .with_decorations(false)
            .with_resizable(false)
            .with_always_on_top(self.config.always_on_top)
            .with_theme(theme.window_theme())
            .with_visible(true)
            .with_focused(true)
            .build(target)
            .map_err(|e| AppError::PopupBuildFailed {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Bounds and scale factor of the monitor containing `point`.
fn monitor_for(target: &EventLoopWindowTarget<UiCommand>, point: Point) -> (Rect, f64) {
    let monitor = target
        .available_monitors()
        .find(|monitor| monitor_rect(monitor).contains(point))
        .or_else(|| target.primary_monitor());

    match monitor {
        Some(monitor) => (monitor_rect(&monitor), monitor.scale_factor()),
        None => {
            warn!("No monitors reported, using fallback geometry");
            (FALLBACK_MONITOR, 1.0)
        }
    }
}

fn monitor_rect(monitor: &MonitorHandle) -> Rect {
    let position = monitor.position();
    let size = monitor.size();
    Rect::new(
        f64::from(position.x),
        f64::from(position.y),
        f64::from(size.width),
        f64::from(size.height),
    )
}
