//! Region - one user-manipulable rectangle with its tags.
//!
//! A region owns its geometry (`rect` + `position`) and composes three parts
//! that all follow it: the tag label, the drag rectangle and the corner
//! anchors. It mediates between its controllers and its owner: controllers
//! hand back `GestureOutcome`s, the region applies new geometry and returns a
//! `RegionNotice` for the owner to act on.
//!
//! Geometry is updated synchronously; the parts' visual updates are only
//! scheduled on the surface.

mod label;

pub use label::LabelPart;

use crate::constants::{CLASS_REGION, CLASS_SELECTED};
use crate::geometry::{BoundRect, Frame, Point, Rect};
use crate::input::{AnchorController, DragController, GestureEvent, GestureOutcome, RegionPart};
use crate::settings::RegionToolSettings;
use crate::style::{region_style_rules, StyleRegistry};
use crate::surface::{Surface, VisualHandle, VisualUpdate};
use crate::tags::TagsDescriptor;
use std::fmt;
use uuid::Uuid;

/// Unique region identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(Uuid);

impl RegionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// First eight hex digits, used to build style ids.
    pub fn short(&self) -> String {
        let mut s = self.0.simple().to_string();
        s.truncate(8);
        s
    }

    /// Style id scoping this region's color rules.
    pub fn style_id(&self) -> String {
        format!("region_{}_style", self.short())
    }
}

impl Default for RegionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// What a region reports to its owner after handling a gesture event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionNotice {
    /// Geometry changed. `committed` marks a click or a release.
    Changed { committed: bool },
    ManipulationBegin,
    ManipulationEnd,
}

/// Host bound plus the legal range of the region's position inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    pub host: BoundRect,
    /// `host - rect`: where the top-left corner may go
    pub own: BoundRect,
}

impl RegionBounds {
    pub fn new(host: BoundRect, rect: Rect) -> Self {
        Self {
            host,
            own: host.minus(rect),
        }
    }
}

pub struct Region {
    id: RegionId,
    style_id: String,
    rect: Rect,
    position: Point,
    tags: TagsDescriptor,
    selected: bool,
    bounds: Option<RegionBounds>,
    group: VisualHandle,
    label: LabelPart,
    drag: DragController,
    anchors: AnchorController,
}

impl Region {
    /// Build a region and its visuals, and register its color rules.
    pub fn new(
        surface: &mut dyn Surface,
        styles: &mut dyn StyleRegistry,
        layer: Option<VisualHandle>,
        frame: Frame,
        host_bound: Option<BoundRect>,
        tags: TagsDescriptor,
        settings: &RegionToolSettings,
    ) -> Self {
        let id = RegionId::new();
        let style_id = id.style_id();

        let group = surface.create_group(layer, CLASS_REGION);
        surface.add_class(group, &style_id);

        styles.register(&style_id, region_style_rules(&style_id, &tags));

        // Paint order: label, drag rectangle, anchors on top
        let label = LabelPart::new(surface, group, &tags, settings.label, frame);
        let drag = DragController::new(surface, group, frame);
        let anchors = AnchorController::new(surface, group, &settings.anchors, frame);

        let rect = frame.size();
        tracing::debug!(region = %id, ?frame, "Region created");

        Self {
            id,
            style_id,
            rect,
            position: frame.position(),
            tags,
            selected: false,
            bounds: host_bound.map(|host| RegionBounds::new(host, rect)),
            group,
            label,
            drag,
            anchors,
        }
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn frame(&self) -> Frame {
        Frame::from_parts(self.position, self.rect)
    }

    pub fn tags(&self) -> &TagsDescriptor {
        &self.tags
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn bounds(&self) -> Option<RegionBounds> {
        self.bounds
    }

    pub fn host_bound(&self) -> Option<BoundRect> {
        self.bounds.map(|b| b.host)
    }

    /// Legal range of `position`: host bound minus the region's size.
    pub fn self_bound(&self) -> Option<BoundRect> {
        self.bounds.map(|b| b.own)
    }

    pub fn group(&self) -> VisualHandle {
        self.group
    }

    pub fn label(&self) -> &LabelPart {
        &self.label
    }

    pub fn anchors(&self) -> &AnchorController {
        &self.anchors
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Whether either controller is mid-drag.
    pub fn is_manipulating(&self) -> bool {
        self.anchors.is_dragging() || self.drag.is_dragging()
    }

    /// Set the position, clamped into the own bound, and propagate it to
    /// every part.
    pub fn move_to(&mut self, surface: &mut dyn Surface, p: Point) {
        self.position = match self.self_bound() {
            Some(own) => p.bound_to_rect(own),
            None => p,
        };
        self.layout_parts(surface);
    }

    /// Set the size, clamped to the host bound, and propagate it to every
    /// part. The position is pulled back in if the new size pushed the
    /// region past the host edge.
    pub fn resize(&mut self, surface: &mut dyn Surface, width: f32, height: f32) {
        let mut rect = Rect::new(width, height);
        if let Some(bounds) = self.bounds.as_mut() {
            rect = Rect::new(rect.width.min(bounds.host.width), rect.height.min(bounds.host.height));
            bounds.own = bounds.host.minus(rect);
            self.position = self.position.bound_to_rect(bounds.own);
        }
        self.rect = rect;
        self.layout_parts(surface);
    }

    /// Move into a resized host, scaling geometry by the resize ratios. A
    /// gesture in flight is rescaled too, so its next move continues from
    /// the scaled frame.
    pub fn rescale(&mut self, surface: &mut dyn Surface, host: BoundRect, tw: f32, th: f32) {
        let size = self.rect.scale(tw, th);
        let position = self.position.scale(tw, th);
        self.bounds = Some(RegionBounds::new(host, size));
        self.resize(surface, size.width, size.height);
        self.move_to(surface, position);
        self.drag.rescale(tw, th);
        self.anchors.rescale(surface, tw, th);
    }


    /// Mark selected. The single-selection rule is the owner's job.
    pub fn select(&mut self, surface: &mut dyn Surface) {
        self.selected = true;
        surface.add_class(self.group, CLASS_SELECTED);
    }

    pub fn unselect(&mut self, surface: &mut dyn Surface) {
        self.selected = false;
        surface.remove_class(self.group, CLASS_SELECTED);
    }

    pub fn show(&self, surface: &mut dyn Surface) {
        surface.schedule(VisualUpdate::visible(self.group, true));
    }

    pub fn hide(&self, surface: &mut dyn Surface) {
        surface.schedule(VisualUpdate::visible(self.group, false));
    }

    /// Route a gesture event to the controller owning `part`.
    pub fn handle(
        &mut self,
        surface: &mut dyn Surface,
        part: RegionPart,
        event: GestureEvent,
    ) -> Option<RegionNotice> {
        let frame = self.frame();
        let (host, own) = (self.host_bound(), self.self_bound());
        let outcome = match part {
            RegionPart::Body => self.drag.handle(surface, event, frame, own),
            RegionPart::Anchor(_) | RegionPart::Ghost => {
                self.anchors.handle(surface, part, event, frame, host)
            }
        }?;

        Some(match outcome {
            GestureOutcome::ManipulationBegin => RegionNotice::ManipulationBegin,
            GestureOutcome::ManipulationEnd => RegionNotice::ManipulationEnd,
            GestureOutcome::Changed { frame, committed } => {
                self.apply(surface, frame);
                RegionNotice::Changed { committed }
            }
        })
    }

    /// Release the region's style rules and visuals.
    pub fn destroy(self, surface: &mut dyn Surface, styles: &mut dyn StyleRegistry) {
        styles.remove(&self.style_id);
        surface.destroy(self.group);
        tracing::debug!(region = %self.id, "Region destroyed");
    }

    fn apply(&mut self, surface: &mut dyn Surface, frame: Frame) {
        self.position = frame.position();
        self.rect = frame.size();
        if let Some(bounds) = self.bounds.as_mut() {
            bounds.own = bounds.host.minus(self.rect);
        }
        self.layout_parts(surface);
    }

    fn layout_parts(&self, surface: &mut dyn Surface) {
        let frame = self.frame();
        self.label.layout(surface, frame);
        self.drag.layout(surface, frame);
        self.anchors.layout(surface, frame);
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("id", &self.id)
            .field("rect", &self.rect)
            .field("position", &self.position)
            .field("selected", &self.selected)
            .field("bounds", &self.bounds)
            .finish()
    }
}
