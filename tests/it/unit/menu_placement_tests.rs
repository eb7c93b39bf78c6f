//! Unit tests for context menu placement.
//!
//! Default metrics: menu 30x60, inner margin 20, side margin 5.

use regionkit::geometry::{Frame, Point, Rect};
use regionkit::menu::place_menu;
use regionkit::settings::MenuMetrics;

fn place(region: Frame, host: Rect) -> Point {
    place_menu(region, host, &MenuMetrics::default())
}

// ============================================================================
// Tall regions: vertically centered, straddling an edge
// ============================================================================

#[test]
fn test_tall_region_right_edge() {
    let p = place(Frame::new(100.0, 100.0, 200.0, 200.0), Rect::new(800.0, 600.0));
    assert_eq!(p, Point::new(285.0, 170.0));
}

#[test]
fn test_tall_region_falls_back_to_left_edge() {
    let p = place(Frame::new(600.0, 100.0, 195.0, 200.0), Rect::new(800.0, 600.0));
    assert_eq!(p, Point::new(585.0, 170.0));
}

#[test]
fn test_tall_region_with_no_room_sits_inside_right_edge() {
    let p = place(Frame::new(10.0, 100.0, 185.0, 200.0), Rect::new(200.0, 600.0));
    assert_eq!(p, Point::new(160.0, 170.0));
}

#[test]
fn test_height_exactly_at_threshold_counts_as_tall() {
    // 60 <= 80 - 20
    let p = place(Frame::new(100.0, 100.0, 200.0, 80.0), Rect::new(800.0, 600.0));
    assert_eq!(p, Point::new(285.0, 110.0));
}

#[test]
fn test_right_side_requires_strict_clearance() {
    // 100 + 180 + 15 + 5 == 300 is not < 300
    let p = place(Frame::new(100.0, 100.0, 180.0, 200.0), Rect::new(300.0, 600.0));
    assert_eq!(p, Point::new(85.0, 170.0));
}

// ============================================================================
// Short regions: top-aligned, fully outside
// ============================================================================

#[test]
fn test_short_region_right_of_region() {
    let p = place(Frame::new(100.0, 100.0, 200.0, 50.0), Rect::new(800.0, 600.0));
    assert_eq!(p, Point::new(305.0, 100.0));
}

#[test]
fn test_short_region_falls_back_to_left() {
    let p = place(Frame::new(600.0, 100.0, 190.0, 50.0), Rect::new(800.0, 600.0));
    assert_eq!(p, Point::new(565.0, 100.0));
}

#[test]
fn test_short_region_with_no_room_sits_inside_right_edge() {
    let p = place(Frame::new(20.0, 100.0, 170.0, 50.0), Rect::new(200.0, 600.0));
    assert_eq!(p, Point::new(155.0, 100.0));
}

#[test]
fn test_custom_metrics_change_thresholds() {
    let metrics = MenuMetrics {
        side_margin: 10.0,
        ..MenuMetrics::default()
    };
    let p = place_menu(Frame::new(100.0, 100.0, 200.0, 50.0), Rect::new(800.0, 600.0), &metrics);
    assert_eq!(p, Point::new(310.0, 100.0));
}
