use crate::{Point, Rect, Size, anchor_popup};

const MONITOR: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1920.0,
    height: 1080.0,
};

const POPUP: Size = Size {
    width: 300.0,
    height: 400.0,
};

/// WHAT: Icons in a top menu bar get the popup directly below them
/// WHY: macOS and most Linux panels sit at the top of the screen
#[test]
fn given_icon_at_top_when_anchoring_then_popup_below_and_centred() {
    // Given: A 22px icon in the top bar
    let icon = Rect::new(1000.0, 0.0, 22.0, 22.0);

    // When: Anchoring
    let pos = anchor_popup(icon, POPUP, MONITOR);

    // Then: Centred on the icon, top edge at the icon's bottom
    assert_eq!(pos, Point { x: 861.0, y: 22.0 });
}

/// WHAT: Icons in a bottom taskbar get the popup directly above them
/// WHY: The Windows taskbar sits at the bottom by default
#[test]
fn given_icon_at_bottom_when_anchoring_then_popup_above() {
    // Given: A 24px icon in a bottom taskbar
    let icon = Rect::new(1500.0, 1040.0, 24.0, 24.0);

    // When: Anchoring
    let pos = anchor_popup(icon, POPUP, MONITOR);

    // Then: Bottom edge at the icon's top
    assert_eq!(pos, Point { x: 1362.0, y: 640.0 });
}

/// WHAT: Popups near the screen edge are pulled back on screen
/// WHY: Tray icons usually sit at the far right of the bar
#[test]
fn given_icon_at_right_edge_when_anchoring_then_clamped_to_monitor() {
    // Given: An icon in the top right corner
    let icon = Rect::new(1900.0, 0.0, 20.0, 20.0);

    // When: Anchoring
    let pos = anchor_popup(icon, POPUP, MONITOR);

    // Then: Right edge flush with the monitor
    assert_eq!(pos, Point { x: 1620.0, y: 20.0 });
}

/// WHAT: Anchoring respects monitors that do not start at the origin
/// WHY: Secondary monitors have offset coordinates
#[test]
fn given_secondary_monitor_when_anchoring_then_clamped_to_its_bounds() {
    // Given: A monitor to the left of the primary one
    let monitor = Rect::new(-1280.0, 0.0, 1280.0, 1024.0);
    let icon = Rect::new(-1275.0, 0.0, 20.0, 20.0);

    // When: Anchoring
    let pos = anchor_popup(icon, POPUP, monitor);

    // Then: Left edge flush with the monitor's left edge
    assert_eq!(pos, Point { x: -1280.0, y: 20.0 });
}

/// WHAT: Popups larger than the monitor pin to its top-left
/// WHY: Clamping must not produce positions off the leading edge
#[test]
fn given_popup_larger_than_monitor_when_anchoring_then_pinned_to_origin() {
    // Given: A tiny monitor
    let monitor = Rect::new(0.0, 0.0, 200.0, 200.0);
    let icon = Rect::new(100.0, 0.0, 16.0, 16.0);

    // When: Anchoring
    let pos = anchor_popup(icon, POPUP, monitor);

    // Then: Pinned
    assert_eq!(pos, Point { x: 0.0, y: 0.0 });
}

/// WHAT: Rect containment excludes the far edges
/// WHY: Used to find the monitor a tray icon sits on
#[test]
fn given_rect_when_checking_points_then_far_edges_excluded() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

    assert!(rect.contains(Point { x: 0.0, y: 0.0 }));
    assert!(rect.contains(Point { x: 9.5, y: 9.5 }));
    assert!(!rect.contains(Point { x: 10.0, y: 5.0 }));
    assert!(!rect.contains(Point { x: -0.1, y: 5.0 }));
}

/// WHAT: A monitor with non-finite size does not panic anchoring
/// WHY: `anchor_popup` is public and must never take the caller down
#[test]
fn given_nan_monitor_when_anchoring_then_unclamped_position() {
    // Given: A monitor whose size came back as NaN
    let monitor = Rect::new(0.0, 0.0, f64::NAN, f64::NAN);
    let icon = Rect::new(100.0, 0.0, 16.0, 16.0);

    // When: Anchoring
    let pos = anchor_popup(icon, POPUP, monitor);

    // Then: Centred on the icon, no clamping applied
    assert_eq!(pos, Point { x: -42.0, y: -400.0 });
}
