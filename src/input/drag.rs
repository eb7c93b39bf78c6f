//! Body dragging - translating a whole region inside its bound.
//!
//! ## Performance Notes
//!
//! Drag moves arrive at pointer rate (60+ times per second). Each move is a
//! single clamp against the region's own bound; nothing is allocated.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::constants::{CLASS_DRAG_LAYER, CLASS_DRAG_RECT};
use crate::geometry::{BoundRect, Frame, Point, Rect};
use crate::input::state::{GestureEvent, GestureOutcome, GesturePhase};
use crate::profile_scope;
use crate::surface::{PointerId, Shape, Surface, VisualHandle, VisualUpdate};

/// Drag rectangle covering a region.
pub struct DragController {
    group: VisualHandle,
    rect: VisualHandle,
    phase: GesturePhase,
    /// Region position captured at press
    origin: Option<Point>,
    /// Last delta of the current drag
    delta: (f32, f32),
    /// Whether the current drag moved at all
    displaced: bool,
}

impl DragController {
    pub fn new(surface: &mut dyn Surface, parent: VisualHandle, frame: Frame) -> Self {
        let group = surface.create_group(Some(parent), CLASS_DRAG_LAYER);
        let rect = surface.create_shape(
            group,
            Shape::Rect {
                size: frame.size(),
                corner_radius: 0.0,
            },
            CLASS_DRAG_RECT,
        );
        let controller = Self {
            group,
            rect,
            phase: GesturePhase::Idle,
            origin: None,
            delta: (0.0, 0.0),
            displaced: false,
        };
        controller.layout(surface, frame);
        controller
    }

    pub fn layout(&self, surface: &mut dyn Surface, frame: Frame) {
        surface.schedule(VisualUpdate::position(self.rect, frame.position()));
        surface.schedule(VisualUpdate::size(self.rect, frame.size()));
    }

    pub fn group(&self) -> VisualHandle {
        self.group
    }

    pub fn rect_handle(&self) -> VisualHandle {
        self.rect
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    /// Region position captured when the current drag began.
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Route an event aimed at the drag rectangle.
    ///
    /// `frame` is the region's current geometry and `bound` the legal range
    /// of its position.
    pub fn handle(
        &mut self,
        surface: &mut dyn Surface,
        event: GestureEvent,
        frame: Frame,
        bound: Option<BoundRect>,
    ) -> Option<GestureOutcome> {
        match event {
            GestureEvent::Enter => self.phase.arm().then_some(GestureOutcome::ManipulationBegin),
            GestureEvent::Leave => self.phase.disarm().then_some(GestureOutcome::ManipulationEnd),
            GestureEvent::Press(pointer) => {
                self.begin(surface, frame.position(), Some(pointer));
                None
            }
            GestureEvent::Move { dx, dy } => self
                .drag_move(dx, dy, frame.size(), bound)
                .map(|frame| GestureOutcome::Changed { frame, committed: false }),
            // A release without movement is a click; a real drag is not
            GestureEvent::Release(_) | GestureEvent::LostCapture(_) => {
                let committed = !self.displaced;
                self.end(surface)
                    .then_some(GestureOutcome::Changed { frame, committed })
            }
            GestureEvent::Click => Some(GestureOutcome::Changed { frame, committed: true }),
        }
    }

    /// Capture the region position and start dragging.
    pub fn begin(&mut self, surface: &mut dyn Surface, position: Point, pointer: Option<PointerId>) {
        self.origin = Some(position);
        self.delta = (0.0, 0.0);
        self.displaced = false;
        self.phase.start(pointer);
        if let Some(pointer) = pointer {
            surface.capture_pointer(self.rect, pointer);
        }
        tracing::debug!(x = position.x, y = position.y, "Region drag begin");
    }

    /// New frame for a drag delta: the origin translated and clamped into
    /// `bound`, with the size unchanged.
    pub fn drag_move(
        &mut self,
        dx: f32,
        dy: f32,
        size: Rect,
        bound: Option<BoundRect>,
    ) -> Option<Frame> {
        profile_scope!("region_drag_move");

        if !self.phase.is_dragging() {
            tracing::trace!("Ignoring region move outside a drag");
            return None;
        }
        let origin = self.origin?;

        let mut p = origin.offset(dx, dy);
        if let Some(bound) = bound {
            p = p.bound_to_rect(bound);
        }
        self.delta = (dx, dy);
        if dx != 0.0 || dy != 0.0 {
            self.displaced = true;
        }

        tracing::trace!(dx, dy, x = p.x, y = p.y, "Region drag move");
        Some(Frame::from_parts(p, size))
    }

    /// Host resized mid-drag: move the origin so the last delta lands on
    /// the scaled position.
    pub fn rescale(&mut self, tw: f32, th: f32) {
        let (dx, dy) = self.delta;
        if let Some(origin) = self.origin.as_mut() {
            *origin = origin.offset(dx, dy).scale(tw, th).offset(-dx, -dy);
        }
    }

    /// Finish the drag and clear the captured origin.
    /// Returns true if a drag was in progress.
    pub fn end(&mut self, surface: &mut dyn Surface) -> bool {
        let Some(pointer) = self.phase.finish() else {
            return false;
        };
        if let Some(pointer) = pointer {
            surface.release_pointer(self.rect, pointer);
        }
        tracing::debug!(click = !self.displaced, "Region drag end");
        self.origin = None;
        self.displaced = false;
        true
    }

    pub fn show(&self, surface: &mut dyn Surface) {
        surface.schedule(VisualUpdate::visible(self.rect, true));
    }

    pub fn hide(&self, surface: &mut dyn Surface) {
        surface.schedule(VisualUpdate::visible(self.rect, false));
    }
}
