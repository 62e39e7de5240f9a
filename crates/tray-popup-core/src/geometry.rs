//! Screen-space geometry shared by the controller and the window factory.

/// A point in physical screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// A width/height pair in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

/// An axis-aligned rectangle in physical screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Build a rectangle from its top-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Centre of the rectangle.
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Whether `point` lies inside the rectangle (right/bottom edges excluded).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Compute the top-left position for a popup anchored to the tray icon.
///
/// The popup is centred horizontally on the icon. It opens below the icon when
/// the icon sits in the top half of `monitor` (menu bars, top panels) and above
/// it otherwise (bottom taskbars). The result is clamped so the popup stays on
/// `monitor` whenever it fits.
pub fn anchor_popup(icon: Rect, popup: Size, monitor: Rect) -> Point {
    let icon_center = icon.center();

    let x = icon_center.x - popup.width / 2.0;
    let y = if icon_center.y < monitor.center().y {
        icon.y + icon.height
    } else {
        icon.y - popup.height
    };

    Point {
        x: clamp_axis(x, popup.width, monitor.x, monitor.width),
        y: clamp_axis(y, popup.height, monitor.y, monitor.height),
    }
}

// Popups larger than the monitor are pinned to the leading edge. Non-finite
// input is passed through unclamped.
fn clamp_axis(value: f64, extent: f64, origin: f64, span: f64) -> f64 {
    let max = origin + span - extent;
    if !origin.is_finite() || !max.is_finite() {
        return value;
    }
    if max < origin {
        return origin;
    }
    value.clamp(origin, max)
}
