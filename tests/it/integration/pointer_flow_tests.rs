//! Pointer gestures routed through the manager: dragging, resizing, hit
//! testing and manipulation notifications.

use crate::helpers::{assert_frame_eq, frame_of, TestManagerBuilder};
use regionkit::error::RegionError;
use regionkit::geometry::{Corner, Frame, Point};
use regionkit::input::{GestureEvent, RegionPart};
use regionkit::manager::{HitTarget, ManipulationSource};
use regionkit::region::{RegionId, RegionNotice};
use regionkit::surface::PointerId;
use std::cell::RefCell;
use std::rc::Rc;

const POINTER: PointerId = PointerId(1);

fn mv(dx: f32, dy: f32) -> GestureEvent {
    GestureEvent::Move { dx, dy }
}

// ============================================================================
// Body dragging
// ============================================================================

#[test]
fn test_body_drag_hides_menu_until_next_click() {
    let (mut manager, ids) = TestManagerBuilder::new()
        .with_region((100.0, 100.0), (200.0, 150.0))
        .build();
    let id = ids[0];

    let begin = manager.dispatch(id, RegionPart::Body, GestureEvent::Enter).expect("known");
    assert_eq!(begin, Some(RegionNotice::ManipulationBegin));
    manager.dispatch(id, RegionPart::Body, GestureEvent::Press(POINTER)).expect("known");

    let moved = manager.dispatch(id, RegionPart::Body, mv(50.0, 20.0)).expect("known");
    assert_eq!(moved, Some(RegionNotice::Changed { committed: false }));
    assert_frame_eq(frame_of(&manager, id), Frame::new(150.0, 120.0, 100.0, 50.0));
    assert!(!manager.menu().is_visible());

    let released = manager.dispatch(id, RegionPart::Body, GestureEvent::Release(POINTER)).expect("known");
    assert_eq!(released, Some(RegionNotice::Changed { committed: false }));
    assert!(!manager.menu().is_visible());

    let clicked = manager.dispatch(id, RegionPart::Body, GestureEvent::Click).expect("known");
    assert_eq!(clicked, Some(RegionNotice::Changed { committed: true }));
    assert!(manager.menu().is_visible());
    assert_eq!(manager.menu().attached(), Some(id));
    assert_eq!(manager.menu().placement(), Point::new(255.0, 120.0));

    // Painted visuals follow the region
    let (rect, label) = manager
        .region(id)
        .map(|r| (r.drag().rect_handle(), r.label().rect_handle()))
        .expect("region exists");
    let surface = manager.surface_mut();
    surface.paint();
    assert_eq!(surface.position_of(rect), Some(Point::new(150.0, 120.0)));
    assert_eq!(surface.position_of(label), Some(Point::new(150.0, 120.0)));
}

#[test]
fn test_dragging_unselected_region_keeps_selection() {
    let (mut manager, ids) = TestManagerBuilder::new()
        .with_region((0.0, 0.0), (50.0, 50.0))
        .with_region((300.0, 300.0), (350.0, 350.0))
        .build();
    let (first, second) = (ids[0], ids[1]);

    manager.dispatch(first, RegionPart::Body, GestureEvent::Press(POINTER)).expect("known");
    manager.dispatch(first, RegionPart::Body, mv(50.0, 50.0)).expect("known");
    assert_eq!(manager.selected().map(|r| r.id()), Some(second));

    let released = manager.dispatch(first, RegionPart::Body, GestureEvent::Release(POINTER)).expect("known");
    assert_eq!(released, Some(RegionNotice::Changed { committed: false }));
    assert_eq!(manager.selected().map(|r| r.id()), Some(second));
    assert!(!manager.region(first).is_some_and(|r| r.is_selected()));
    assert_frame_eq(frame_of(&manager, first), Frame::new(50.0, 50.0, 50.0, 50.0));
}

#[test]
fn test_press_and_release_in_place_selects_region() {
    let (mut manager, ids) = TestManagerBuilder::new()
        .with_region((0.0, 0.0), (50.0, 50.0))
        .with_region((300.0, 300.0), (350.0, 350.0))
        .build();
    let first = ids[0];

    manager.dispatch(first, RegionPart::Body, GestureEvent::Press(POINTER)).expect("known");
    manager.dispatch(first, RegionPart::Body, mv(0.0, 0.0)).expect("known");
    let released = manager.dispatch(first, RegionPart::Body, GestureEvent::Release(POINTER)).expect("known");

    assert_eq!(released, Some(RegionNotice::Changed { committed: true }));
    assert_eq!(manager.selected().map(|r| r.id()), Some(first));
    assert_eq!(manager.selected_count(), 1);
    assert_eq!(manager.menu().attached(), Some(first));
}

#[test]
fn test_click_selects_region() {
    let (mut manager, ids) = TestManagerBuilder::new()
        .with_region((0.0, 0.0), (50.0, 50.0))
        .with_region((300.0, 300.0), (350.0, 350.0))
        .build();

    let notice = manager.dispatch(ids[0], RegionPart::Body, GestureEvent::Click).expect("known");
    assert_eq!(notice, Some(RegionNotice::Changed { committed: true }));
    assert_eq!(manager.selected().map(|r| r.id()), Some(ids[0]));
    assert_eq!(manager.menu().attached(), Some(ids[0]));
}

#[test]
fn test_body_drag_stays_inside_host() {
    let (mut manager, ids) = TestManagerBuilder::new()
        .with_host(800.0, 600.0)
        .with_region((700.0, 500.0), (800.0, 600.0))
        .build();
    let id = ids[0];

    manager.dispatch(id, RegionPart::Body, GestureEvent::Press(POINTER)).expect("known");
    manager.dispatch(id, RegionPart::Body, mv(100.0, 100.0)).expect("known");
    assert_frame_eq(frame_of(&manager, id), Frame::new(700.0, 500.0, 100.0, 100.0));

    manager.dispatch(id, RegionPart::Body, mv(-1000.0, -30.0)).expect("known");
    assert_frame_eq(frame_of(&manager, id), Frame::new(0.0, 470.0, 100.0, 100.0));
}

#[test]
fn test_lost_capture_ends_body_drag() {
    let (mut manager, ids) = TestManagerBuilder::new()
        .with_region((100.0, 100.0), (200.0, 200.0))
        .build();
    let id = ids[0];

    manager.dispatch(id, RegionPart::Body, GestureEvent::Press(POINTER)).expect("known");
    manager.dispatch(id, RegionPart::Body, mv(5.0, 5.0)).expect("known");
    let notice = manager.dispatch(id, RegionPart::Body, GestureEvent::LostCapture(POINTER)).expect("known");

    assert_eq!(notice, Some(RegionNotice::Changed { committed: false }));
    assert!(!manager.region(id).is_some_and(|r| r.is_manipulating()));
    assert!(!manager.menu().is_visible());
    assert_frame_eq(frame_of(&manager, id), Frame::new(105.0, 105.0, 100.0, 100.0));
}

// ============================================================================
// Corner resizing
// ============================================================================

#[test]
fn test_anchor_drag_flips_through_manager() {
    let (mut manager, ids) = TestManagerBuilder::new()
        .with_host(1000.0, 1000.0)
        .with_region((0.0, 0.0), (100.0, 100.0))
        .build();
    let id = ids[0];

    manager.dispatch(id, RegionPart::Anchor(Corner::TopLeft), GestureEvent::Enter).expect("known");
    let begin = manager.dispatch(id, RegionPart::Ghost, GestureEvent::Enter).expect("known");
    assert_eq!(begin, Some(RegionNotice::ManipulationBegin));
    manager.dispatch(id, RegionPart::Ghost, GestureEvent::Press(POINTER)).expect("known");
    manager.dispatch(id, RegionPart::Ghost, mv(150.0, 0.0)).expect("known");

    assert_frame_eq(frame_of(&manager, id), Frame::new(100.0, 0.0, 50.0, 100.0));
    assert!(!manager.menu().is_visible());

    let released = manager.dispatch(id, RegionPart::Ghost, GestureEvent::Release(POINTER)).expect("known");
    assert_eq!(released, Some(RegionNotice::Changed { committed: true }));
    assert!(manager.menu().is_visible());

    let region = manager.region(id).expect("region exists");
    assert_eq!(region.anchors().active_corner(), Some(Corner::TopRight));
    assert_eq!(region.self_bound(), Some(regionkit::geometry::Rect::new(950.0, 900.0)));
    let top_right = region.anchors().corner_handle(Corner::TopRight);
    let surface = manager.surface_mut();
    surface.paint();
    assert_eq!(surface.position_of(top_right), Some(Point::new(150.0, 0.0)));
}

#[test]
fn test_anchor_resize_clamped_at_host_edge() {
    let (mut manager, ids) = TestManagerBuilder::new()
        .with_host(800.0, 600.0)
        .with_region((700.0, 500.0), (750.0, 550.0))
        .build();
    let id = ids[0];

    manager
        .dispatch(id, RegionPart::Anchor(Corner::BottomRight), GestureEvent::Press(POINTER))
        .expect("known");
    manager.dispatch(id, RegionPart::Ghost, mv(500.0, 500.0)).expect("known");

    assert_frame_eq(frame_of(&manager, id), Frame::new(700.0, 500.0, 100.0, 100.0));
}

#[test]
fn test_dispatch_to_unknown_region_is_an_error() {
    let (mut manager, _) = TestManagerBuilder::new()
        .with_region((0.0, 0.0), (10.0, 10.0))
        .build();

    let err = manager
        .dispatch(RegionId::new(), RegionPart::Body, GestureEvent::Click)
        .unwrap_err();
    assert!(matches!(err, RegionError::UnknownRegion(_)));
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_test_prefers_menu_then_anchors_then_body() {
    let (mut manager, ids) = TestManagerBuilder::new()
        .with_region((100.0, 100.0), (300.0, 300.0))
        .build();
    let id = ids[0];

    // Tall region: menu at (285, 170), 30x60
    assert_eq!(manager.hit_test(Point::new(290.0, 200.0)), Some(HitTarget::Menu));
    assert_eq!(
        manager.hit_test(Point::new(102.0, 98.0)),
        Some(HitTarget::Region { region: id, part: RegionPart::Anchor(Corner::TopLeft) })
    );
    assert_eq!(
        manager.hit_test(Point::new(200.0, 200.0)),
        Some(HitTarget::Region { region: id, part: RegionPart::Body })
    );
    assert_eq!(manager.hit_test(Point::new(500.0, 500.0)), None);

    manager.on_region_update(id, false).expect("known");
    assert_eq!(
        manager.hit_test(Point::new(290.0, 200.0)),
        Some(HitTarget::Region { region: id, part: RegionPart::Body })
    );
}

#[test]
fn test_hit_test_prefers_later_regions() {
    let (manager, ids) = TestManagerBuilder::new()
        .with_region((100.0, 100.0), (300.0, 300.0))
        .with_region((150.0, 150.0), (250.0, 250.0))
        .build();

    assert_eq!(
        manager.hit_test(Point::new(200.0, 200.0)),
        Some(HitTarget::Region { region: ids[1], part: RegionPart::Body })
    );
    assert_eq!(
        manager.hit_test(Point::new(120.0, 120.0)),
        Some(HitTarget::Region { region: ids[0], part: RegionPart::Body })
    );
}

#[test]
fn test_hit_test_finds_ghost_after_hover() {
    let (mut manager, ids) = TestManagerBuilder::new()
        .with_region((150.0, 150.0), (250.0, 250.0))
        .build();
    let id = ids[0];

    manager.dispatch(id, RegionPart::Anchor(Corner::TopLeft), GestureEvent::Enter).expect("known");
    assert_eq!(
        manager.hit_test(Point::new(155.0, 153.0)),
        Some(HitTarget::Region { region: id, part: RegionPart::Ghost })
    );
}

#[test]
fn test_hit_test_follows_moved_region() {
    let (mut manager, ids) = TestManagerBuilder::new()
        .with_region((0.0, 0.0), (50.0, 50.0))
        .build();
    let id = ids[0];

    manager.dispatch(id, RegionPart::Body, GestureEvent::Press(POINTER)).expect("known");
    manager.dispatch(id, RegionPart::Body, mv(400.0, 400.0)).expect("known");

    assert_eq!(manager.hit_test(Point::new(25.0, 25.0)), None);
    assert_eq!(
        manager.hit_test(Point::new(425.0, 425.0)),
        Some(HitTarget::Region { region: id, part: RegionPart::Body })
    );
}

// ============================================================================
// Manipulation notifications
// ============================================================================

#[test]
fn test_manipulation_observers() {
    let (mut manager, ids) = TestManagerBuilder::new()
        .with_region((0.0, 0.0), (50.0, 50.0))
        .build();
    let id = ids[0];

    let log: Rc<RefCell<Vec<(&'static str, ManipulationSource)>>> = Rc::default();
    let begin_log = Rc::clone(&log);
    let end_log = Rc::clone(&log);
    manager
        .on_manipulation_begin(move |source| begin_log.borrow_mut().push(("begin", source)))
        .on_manipulation_end(move |source| end_log.borrow_mut().push(("end", source)));

    manager.dispatch(id, RegionPart::Body, GestureEvent::Enter).expect("known");
    manager.dispatch(id, RegionPart::Body, GestureEvent::Leave).expect("known");
    manager.menu_event(GestureEvent::Enter);
    manager.menu_event(GestureEvent::Click);
    manager.menu_event(GestureEvent::Leave);

    assert_eq!(
        *log.borrow(),
        vec![
            ("begin", ManipulationSource::Region(id)),
            ("end", ManipulationSource::Region(id)),
            ("begin", ManipulationSource::Menu),
            ("end", ManipulationSource::Menu),
        ]
    );
}

#[test]
fn test_hit_radius_comes_from_settings() {
    let mut settings = regionkit::settings::RegionToolSettings::default();
    settings.anchors.hit_radius = 2.0;
    let (manager, ids) = TestManagerBuilder::new()
        .with_settings(settings)
        .with_region((100.0, 100.0), (300.0, 300.0))
        .build();

    assert_eq!(manager.hit_test(Point::new(102.0, 98.0)), None);
    assert_eq!(
        manager.hit_test(Point::new(101.0, 99.0)),
        Some(HitTarget::Region { region: ids[0], part: RegionPart::Anchor(Corner::TopLeft) })
    );
}
