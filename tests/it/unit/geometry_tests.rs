//! Unit tests for geometry primitives.

use regionkit::geometry::{Corner, Frame, Point, Rect};

#[test]
fn test_bound_to_rect_clamps_each_axis() {
    let bound = Rect::new(800.0, 600.0);
    assert_eq!(Point::new(-5.0, 20.0).bound_to_rect(bound), Point::new(0.0, 20.0));
    assert_eq!(Point::new(900.0, 700.0).bound_to_rect(bound), Point::new(800.0, 600.0));
    assert_eq!(Point::new(400.0, 300.0).bound_to_rect(bound), Point::new(400.0, 300.0));
}

#[test]
fn test_bound_to_rect_is_idempotent() {
    let bound = Rect::new(320.0, 240.0);
    for p in [
        Point::new(-100.0, -100.0),
        Point::new(10.0, 500.0),
        Point::new(320.0, 240.0),
        Point::new(1e6, -1e6),
    ] {
        let once = p.bound_to_rect(bound);
        assert_eq!(once.bound_to_rect(bound), once);
    }
}

#[test]
fn test_bound_to_rect_is_monotonic() {
    let bound = Rect::new(100.0, 100.0);
    let xs = [-50.0, -1.0, 0.0, 25.0, 99.0, 100.0, 150.0];
    for pair in xs.windows(2) {
        let a = Point::new(pair[0], pair[0]).bound_to_rect(bound);
        let b = Point::new(pair[1], pair[1]).bound_to_rect(bound);
        assert!(a.x <= b.x && a.y <= b.y);
    }
}

#[test]
fn test_zero_bound_pins_to_origin() {
    let p = Point::new(42.0, -3.0).bound_to_rect(Rect::new(0.0, 0.0));
    assert_eq!(p, Point::ORIGIN);
}

#[test]
fn test_rect_never_negative() {
    let r = Rect::new(-10.0, 5.0);
    assert_eq!(r, Rect::new(0.0, 5.0));
    assert_eq!(Rect::new(50.0, 50.0).minus(Rect::new(80.0, 20.0)), Rect::new(0.0, 30.0));
}

#[test]
fn test_from_corners_normalizes_any_diagonal() {
    let expected = Frame::new(10.0, 20.0, 30.0, 40.0);
    let (tl, br) = (Point::new(10.0, 20.0), Point::new(40.0, 60.0));
    let (tr, bl) = (Point::new(40.0, 20.0), Point::new(10.0, 60.0));
    assert_eq!(Frame::from_corners(tl, br), expected);
    assert_eq!(Frame::from_corners(br, tl), expected);
    assert_eq!(Frame::from_corners(tr, bl), expected);
    assert_eq!(Frame::from_corners(bl, tr), expected);
}

#[test]
fn test_corner_flips() {
    assert_eq!(Corner::TopLeft.flipped(true, false), Corner::TopRight);
    assert_eq!(Corner::TopLeft.flipped(false, true), Corner::BottomLeft);
    assert_eq!(Corner::TopLeft.flipped(true, true), Corner::BottomRight);
    assert_eq!(Corner::BottomRight.flipped(false, false), Corner::BottomRight);
    for corner in Corner::ALL {
        assert_eq!(corner.opposite().opposite(), corner);
    }
}

#[test]
fn test_frame_corner_positions() {
    let frame = Frame::new(10.0, 10.0, 100.0, 50.0);
    assert_eq!(frame.corner(Corner::TopLeft), Point::new(10.0, 10.0));
    assert_eq!(frame.corner(Corner::TopRight), Point::new(110.0, 10.0));
    assert_eq!(frame.corner(Corner::BottomLeft), Point::new(10.0, 60.0));
    assert_eq!(frame.corner(Corner::BottomRight), Point::new(110.0, 60.0));
}
