//! Corner anchors - resizing a region by dragging one of its corners.
//!
//! Hovering a corner captures an `AnchorState` snapshot (active corner, its
//! world position, the region's size and position) and shows the ghost
//! handle over that corner. The ghost handle is the actual drag target.
//!
//! Every move rebuilds the frame from two points: the dragged corner and the
//! opposite corner derived from the snapshot. When the dragged corner crosses
//! the opposite one on an axis, the active corner is mirrored on that axis and
//! the snapshot is re-anchored at the crossing point, so the next move treats
//! the crossing point as the new opposite corner and the resize continues
//! without a jump.

use crate::constants::{CLASS_ANCHOR, CLASS_ANCHORS_LAYER, CLASS_GHOST};
use crate::geometry::{BoundRect, Corner, Frame, Point, Rect};
use crate::input::state::{GestureEvent, GestureOutcome, GesturePhase, RegionPart};
use crate::profile_scope;
use crate::settings::AnchorMetrics;
use crate::surface::{PointerId, Shape, Surface, VisualHandle, VisualUpdate};

/// Snapshot taken when a corner is hovered, updated in place on flips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorState {
    /// Corner currently being dragged
    pub active: Corner,
    /// World position of the active corner when the gesture began
    pub drag_origin: Point,
    /// Region size when the gesture began
    pub rect_origin: Rect,
    /// Region position when the gesture began
    pub point_origin: Point,
}

impl AnchorState {
    pub fn capture(corner: Corner, frame: Frame) -> Self {
        Self {
            active: corner,
            drag_origin: frame.corner(corner),
            rect_origin: frame.size(),
            point_origin: frame.position(),
        }
    }

    /// The corner diagonally opposite the active one, from the snapshot.
    pub fn opposite_point(&self) -> Point {
        let (w, h) = (self.rect_origin.width, self.rect_origin.height);
        match self.active {
            Corner::TopLeft => self.point_origin.offset(w, h),
            Corner::TopRight => self.point_origin.offset(0.0, h),
            Corner::BottomLeft => self.point_origin.offset(w, 0.0),
            Corner::BottomRight => self.point_origin,
        }
    }

    /// Whether the dragged point `p1` crossed the opposite point `p2`, per axis.
    pub fn crossings(&self, p1: Point, p2: Point) -> (bool, bool) {
        let flip_x = if self.active.is_left() { p2.x < p1.x } else { p1.x < p2.x };
        let flip_y = if self.active.is_top() { p2.y < p1.y } else { p1.y < p2.y };
        (flip_x, flip_y)
    }

    /// Mirror the active corner across the crossed axes and collapse the
    /// snapshot on those axes onto the crossing point.
    pub fn flip(&mut self, flip_x: bool, flip_y: bool) {
        self.active = self.active.flipped(flip_x, flip_y);

        if flip_x {
            if !self.active.is_left() {
                self.point_origin.x += self.rect_origin.width;
            }
            self.rect_origin.width = 0.0;
        }

        if flip_y {
            if !self.active.is_top() {
                self.point_origin.y += self.rect_origin.height;
            }
            self.rect_origin.height = 0.0;
        }
    }

    /// Scale the snapshot by host resize ratios. `delta` is the drag delta
    /// applied so far; it maps onto the scaled dragged point afterwards.
    pub fn rescale(&mut self, tw: f32, th: f32, (dx, dy): (f32, f32)) {
        let dragged = self.drag_origin.offset(dx, dy).scale(tw, th);
        self.drag_origin = dragged.offset(-dx, -dy);
        self.point_origin = self.point_origin.scale(tw, th);
        self.rect_origin = self.rect_origin.scale(tw, th);
    }

    /// Compute the frame for a drag delta and apply any flip.
    ///
    /// Both points are clamped to `bound` after the crossing test. The frame
    /// is formed from absolute differences, so it is never negative.
    pub fn step(&mut self, dx: f32, dy: f32, bound: Option<BoundRect>) -> Frame {
        let mut p1 = self.drag_origin.offset(dx, dy);
        let mut p2 = self.opposite_point();
        let (flip_x, flip_y) = self.crossings(p1, p2);

        if let Some(bound) = bound {
            p1 = p1.bound_to_rect(bound);
            p2 = p2.bound_to_rect(bound);
        }

        self.flip(flip_x, flip_y);
        Frame::from_corners(p1, p2)
    }
}

/// The four corner handles plus the ghost handle of one region.
pub struct AnchorController {
    group: VisualHandle,
    corners: [VisualHandle; 4],
    ghost: VisualHandle,
    state: Option<AnchorState>,
    original: Option<Corner>,
    /// Last delta of the current drag
    delta: (f32, f32),
    phase: GesturePhase,
    ghost_class: Option<Corner>,
    ghost_position: Option<Point>,
}

impl AnchorController {
    pub fn new(
        surface: &mut dyn Surface,
        parent: VisualHandle,
        metrics: &AnchorMetrics,
        frame: Frame,
    ) -> Self {
        let group = surface.create_group(Some(parent), CLASS_ANCHORS_LAYER);
        let corners = Corner::ALL.map(|corner| {
            let handle =
                surface.create_shape(group, Shape::Circle { radius: metrics.radius }, CLASS_ANCHOR);
            surface.add_class(handle, corner.class_name());
            handle
        });
        let ghost =
            surface.create_shape(group, Shape::Circle { radius: metrics.ghost_radius }, CLASS_ANCHOR);
        surface.add_class(ghost, CLASS_GHOST);
        surface.schedule(VisualUpdate::visible(ghost, false));

        let controller = Self {
            group,
            corners,
            ghost,
            state: None,
            original: None,
            delta: (0.0, 0.0),
            phase: GesturePhase::Idle,
            ghost_class: None,
            ghost_position: None,
        };
        controller.layout(surface, frame);
        controller
    }

    /// Place the corner handles on the region's corners.
    pub fn layout(&self, surface: &mut dyn Surface, frame: Frame) {
        for corner in Corner::ALL {
            surface.schedule(VisualUpdate::position(
                self.corners[corner.index()],
                frame.corner(corner),
            ));
        }
    }

    pub fn group(&self) -> VisualHandle {
        self.group
    }

    pub fn corner_handle(&self, corner: Corner) -> VisualHandle {
        self.corners[corner.index()]
    }

    pub fn ghost_handle(&self) -> VisualHandle {
        self.ghost
    }

    pub fn state(&self) -> Option<&AnchorState> {
        self.state.as_ref()
    }

    /// Corner the next move will drag, if one was hovered.
    pub fn active_corner(&self) -> Option<Corner> {
        self.state.map(|s| s.active)
    }

    /// Corner the current drag started from.
    pub fn original_corner(&self) -> Option<Corner> {
        self.original
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    /// Ghost handle position while it is shown.
    pub fn ghost_position(&self) -> Option<Point> {
        self.ghost_position
    }

    /// Route an event aimed at a corner or the ghost handle.
    pub fn handle(
        &mut self,
        surface: &mut dyn Surface,
        part: RegionPart,
        event: GestureEvent,
        frame: Frame,
        bound: Option<BoundRect>,
    ) -> Option<GestureOutcome> {
        match (part, event) {
            (RegionPart::Anchor(corner), GestureEvent::Enter) => {
                self.hover(surface, corner, frame);
                None
            }
            (RegionPart::Anchor(corner), GestureEvent::Press(pointer)) => {
                // Touch input presses a corner without hovering it first
                self.hover(surface, corner, frame);
                self.begin(surface, Some(pointer));
                None
            }
            (RegionPart::Ghost, GestureEvent::Enter) => self
                .arm(surface)
                .then_some(GestureOutcome::ManipulationBegin),
            (RegionPart::Ghost, GestureEvent::Leave) => self
                .disarm(surface)
                .then_some(GestureOutcome::ManipulationEnd),
            (RegionPart::Ghost, GestureEvent::Press(pointer)) => {
                self.begin(surface, Some(pointer));
                None
            }
            (_, GestureEvent::Move { dx, dy }) => self
                .drag_move(surface, dx, dy, bound)
                .map(|frame| GestureOutcome::Changed { frame, committed: false }),
            (_, GestureEvent::Release(_)) | (_, GestureEvent::LostCapture(_)) => self
                .end(surface)
                .then_some(GestureOutcome::Changed { frame, committed: true }),
            _ => None,
        }
    }

    /// Pointer over a corner: make it active and show the ghost on it.
    pub fn hover(&mut self, surface: &mut dyn Surface, corner: Corner, frame: Frame) {
        if self.phase.is_dragging() {
            tracing::trace!(?corner, "Ignoring corner hover during drag");
            return;
        }

        let state = AnchorState::capture(corner, frame);
        let origin = state.drag_origin;
        self.state = Some(state);
        self.ghost_position = Some(origin);

        surface.schedule(VisualUpdate::position(self.ghost, origin));
        surface.schedule(VisualUpdate::visible(self.ghost, true));
    }

    /// Pointer over the ghost handle. Returns true if a gesture was armed.
    pub fn arm(&mut self, surface: &mut dyn Surface) -> bool {
        if !self.phase.arm() {
            return false;
        }
        let active = self.active_corner();
        self.set_ghost_class(surface, active);
        true
    }

    /// Pointer left the ghost handle. Returns true if a gesture was disarmed.
    pub fn disarm(&mut self, surface: &mut dyn Surface) -> bool {
        if !self.phase.disarm() {
            return false;
        }
        self.hide_ghost(surface);
        self.set_ghost_class(surface, None);
        true
    }

    /// Start a resize from the active corner.
    pub fn begin(&mut self, surface: &mut dyn Surface, pointer: Option<PointerId>) -> bool {
        let Some(state) = self.state else {
            tracing::warn!("Anchor drag started without an active corner");
            return false;
        };

        self.original = Some(state.active);
        self.delta = (0.0, 0.0);
        self.phase.start(pointer);
        if let Some(pointer) = pointer {
            surface.capture_pointer(self.ghost, pointer);
        }
        tracing::debug!(corner = ?state.active, "Anchor drag begin");
        true
    }

    /// Apply a drag delta. Returns the new frame, or `None` when no drag is
    /// in progress.
    pub fn drag_move(
        &mut self,
        surface: &mut dyn Surface,
        dx: f32,
        dy: f32,
        bound: Option<BoundRect>,
    ) -> Option<Frame> {
        profile_scope!("anchor_drag_move");

        if !self.phase.is_dragging() {
            tracing::trace!("Ignoring anchor move outside a drag");
            return None;
        }
        let state = self.state.as_mut()?;

        let before = state.active;
        let dragged = state.drag_origin.offset(dx, dy);
        let frame = state.step(dx, dy, bound);
        let after = state.active;
        self.delta = (dx, dy);

        self.ghost_position = Some(dragged);
        surface.schedule(VisualUpdate::position(self.ghost, dragged));

        if before != after {
            tracing::debug!(from = ?before, to = ?after, "Anchor flipped");
            if self.ghost_class.is_some() {
                self.set_ghost_class(surface, Some(after));
            }
        }

        tracing::trace!(dx, dy, ?frame, "Anchor drag move");
        Some(frame)
    }

    /// Finish the drag. The active corner stays for the next hover.
    /// Returns true if a drag was in progress.
    pub fn end(&mut self, surface: &mut dyn Surface) -> bool {
        let Some(pointer) = self.phase.finish() else {
            return false;
        };
        if let Some(pointer) = pointer {
            surface.release_pointer(self.ghost, pointer);
        }
        self.hide_ghost(surface);
        tracing::debug!(
            from = ?self.original,
            to = ?self.active_corner(),
            "Anchor drag end"
        );
        true
    }

    /// Host resized: rescale the hover snapshot and the ghost handle.
    pub fn rescale(&mut self, surface: &mut dyn Surface, tw: f32, th: f32) {
        let delta = if self.phase.is_dragging() { self.delta } else { (0.0, 0.0) };
        if let Some(state) = self.state.as_mut() {
            state.rescale(tw, th, delta);
        }
        if let Some(ghost) = self.ghost_position.as_mut() {
            *ghost = ghost.scale(tw, th);
            surface.schedule(VisualUpdate::position(self.ghost, *ghost));
        }
    }

    pub fn show(&self, surface: &mut dyn Surface) {
        surface.schedule(VisualUpdate::visible(self.group, true));
    }

    pub fn hide(&self, surface: &mut dyn Surface) {
        surface.schedule(VisualUpdate::visible(self.group, false));
    }

    fn hide_ghost(&mut self, surface: &mut dyn Surface) {
        self.ghost_position = None;
        surface.schedule(VisualUpdate::visible(self.ghost, false));
    }

    fn set_ghost_class(&mut self, surface: &mut dyn Surface, corner: Option<Corner>) {
        if let Some(old) = self.ghost_class.take() {
            surface.remove_class(self.ghost, old.class_name());
        }
        if let Some(new) = corner {
            surface.add_class(self.ghost, new.class_name());
        }
        self.ghost_class = corner;
    }
}
