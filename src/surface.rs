//! Rendering collaborator interface.
//!
//! The core never draws. Each component owns opaque `VisualHandle`s obtained
//! from a `Surface` and sends it fire-and-forget commands. Attribute writes go
//! through `schedule`, which only promises the change is visible before the
//! next painted frame; geometry state in the core is updated synchronously
//! regardless.
//!
//! `RecordingSurface` is a complete in-memory implementation. Hosts that
//! render from command lists can drive it directly; tests use it to observe
//! what was scheduled and what was painted.

use crate::geometry::{Point, Rect};
use std::collections::{BTreeSet, HashMap};

/// Opaque handle to a visual element owned by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualHandle(u64);

impl VisualHandle {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Identifier of a pointer (mouse, pen or touch contact).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u32);

/// Primitive shapes the core asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    Rect { size: Rect, corner_radius: f32 },
    Text { content: String },
    Path { data: String, scale: f32, translate: Point },
}

/// A deferred attribute write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attr {
    /// Top-left for rects and text, center for circles
    Position(Point),
    Size(Rect),
    Visible(bool),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualUpdate {
    pub handle: VisualHandle,
    pub attr: Attr,
}

impl VisualUpdate {
    #[inline]
    pub fn position(handle: VisualHandle, p: Point) -> Self {
        Self { handle, attr: Attr::Position(p) }
    }

    #[inline]
    pub fn size(handle: VisualHandle, size: Rect) -> Self {
        Self { handle, attr: Attr::Size(size) }
    }

    #[inline]
    pub fn visible(handle: VisualHandle, visible: bool) -> Self {
        Self { handle, attr: Attr::Visible(visible) }
    }
}

/// The rendering collaborator.
pub trait Surface {
    /// Create a group, optionally nested under `parent`.
    fn create_group(&mut self, parent: Option<VisualHandle>, class: &str) -> VisualHandle;

    /// Create a shape inside `parent`.
    fn create_shape(&mut self, parent: VisualHandle, shape: Shape, class: &str) -> VisualHandle;

    /// Enqueue an attribute write for the next paint.
    fn schedule(&mut self, update: VisualUpdate);

    fn add_class(&mut self, handle: VisualHandle, class: &str);

    fn remove_class(&mut self, handle: VisualHandle, class: &str);

    /// Route further events of `pointer` to `handle` until released.
    fn capture_pointer(&mut self, handle: VisualHandle, pointer: PointerId);

    fn release_pointer(&mut self, handle: VisualHandle, pointer: PointerId);

    /// Destroy `handle` and everything nested under it.
    fn destroy(&mut self, handle: VisualHandle);
}

// ============================================================================
// RecordingSurface
// ============================================================================

/// Painted state of a single element.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub parent: Option<VisualHandle>,
    pub shape: Option<Shape>,
    pub classes: BTreeSet<String>,
    pub position: Option<Point>,
    pub size: Option<Rect>,
    pub visible: bool,
}

impl Node {
    fn new(parent: Option<VisualHandle>, shape: Option<Shape>, class: &str) -> Self {
        let mut classes = BTreeSet::new();
        if !class.is_empty() {
            classes.insert(class.to_string());
        }
        Self {
            parent,
            shape,
            classes,
            position: None,
            size: None,
            visible: true,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// In-memory surface that queues attribute writes until `paint`.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    nodes: HashMap<VisualHandle, Node>,
    pending: Vec<VisualUpdate>,
    captures: HashMap<VisualHandle, PointerId>,
    next_handle: u64,
    frames: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self, node: Node) -> VisualHandle {
        self.next_handle += 1;
        let handle = VisualHandle(self.next_handle);
        self.nodes.insert(handle, node);
        handle
    }

    /// Apply every queued write, as the host would on an animation frame.
    /// Returns the number of writes applied.
    pub fn paint(&mut self) -> usize {
        let pending = std::mem::take(&mut self.pending);
        let count = pending.len();
        for update in pending {
            if let Some(node) = self.nodes.get_mut(&update.handle) {
                match update.attr {
                    Attr::Position(p) => node.position = Some(p),
                    Attr::Size(s) => node.size = Some(s),
                    Attr::Visible(v) => node.visible = v,
                }
            }
        }
        self.frames += 1;
        count
    }

    /// Writes scheduled since the last paint.
    pub fn pending(&self) -> &[VisualUpdate] {
        &self.pending
    }

    pub fn frames_painted(&self) -> u64 {
        self.frames
    }

    pub fn node(&self, handle: VisualHandle) -> Option<&Node> {
        self.nodes.get(&handle)
    }

    pub fn contains(&self, handle: VisualHandle) -> bool {
        self.nodes.contains_key(&handle)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn has_class(&self, handle: VisualHandle, class: &str) -> bool {
        self.nodes.get(&handle).is_some_and(|n| n.has_class(class))
    }

    /// Painted position of `handle`.
    pub fn position_of(&self, handle: VisualHandle) -> Option<Point> {
        self.nodes.get(&handle).and_then(|n| n.position)
    }

    /// Painted size of `handle`.
    pub fn size_of(&self, handle: VisualHandle) -> Option<Rect> {
        self.nodes.get(&handle).and_then(|n| n.size)
    }

    /// Painted visibility of `handle`. Unknown handles are not visible.
    pub fn is_visible(&self, handle: VisualHandle) -> bool {
        self.nodes.get(&handle).is_some_and(|n| n.visible)
    }

    pub fn children(&self, parent: VisualHandle) -> Vec<VisualHandle> {
        let mut children: Vec<VisualHandle> = self
            .nodes
            .iter()
            .filter(|(_, n)| n.parent == Some(parent))
            .map(|(h, _)| *h)
            .collect();
        children.sort();
        children
    }

    pub fn captured_pointer(&self, handle: VisualHandle) -> Option<PointerId> {
        self.captures.get(&handle).copied()
    }
}

impl Surface for RecordingSurface {
    fn create_group(&mut self, parent: Option<VisualHandle>, class: &str) -> VisualHandle {
        self.allocate(Node::new(parent, None, class))
    }

    fn create_shape(&mut self, parent: VisualHandle, shape: Shape, class: &str) -> VisualHandle {
        self.allocate(Node::new(Some(parent), Some(shape), class))
    }

    fn schedule(&mut self, update: VisualUpdate) {
        self.pending.push(update);
    }

    fn add_class(&mut self, handle: VisualHandle, class: &str) {
        if let Some(node) = self.nodes.get_mut(&handle) {
            node.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, handle: VisualHandle, class: &str) {
        if let Some(node) = self.nodes.get_mut(&handle) {
            node.classes.remove(class);
        }
    }

    fn capture_pointer(&mut self, handle: VisualHandle, pointer: PointerId) {
        self.captures.insert(handle, pointer);
    }

    fn release_pointer(&mut self, handle: VisualHandle, pointer: PointerId) {
        if self.captures.get(&handle) == Some(&pointer) {
            self.captures.remove(&handle);
        }
    }

    fn destroy(&mut self, handle: VisualHandle) {
        let mut doomed = vec![handle];
        let mut i = 0;
        while i < doomed.len() {
            let parent = doomed[i];
            doomed.extend(
                self.nodes
                    .iter()
                    .filter(|(_, n)| n.parent == Some(parent))
                    .map(|(h, _)| *h),
            );
            i += 1;
        }
        for h in &doomed {
            self.nodes.remove(h);
            self.captures.remove(h);
        }
        self.pending.retain(|u| !doomed.contains(&u.handle));
    }
}
