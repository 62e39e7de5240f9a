use crate::{Point, Rect};

/// A single click on the tray icon, as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickEvent {
    /// Host identifier of the tray icon that was clicked.
    pub icon_id: String,
    /// Screen bounds of the tray icon at click time.
    pub bounds: Rect,
    /// Cursor position of the click.
    pub point: Point,
}

/// Outcome of the pre-click hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickDecision {
    /// Run the toggle for this click.
    #[default]
    Proceed,
    /// Leave the popup as it is and skip the after-click hook.
    Suppress,
}
