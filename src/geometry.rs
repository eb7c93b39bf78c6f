//! Geometry primitives for region manipulation.
//!
//! Everything here is axis-aligned and expressed in host surface coordinates.
//! `Rect` carries a size only; placement lives in `Point` or, when both are
//! needed together, in `Frame`.

use serde::{Deserialize, Serialize};

// ============================================================================
// Point
// ============================================================================

/// A position on the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by a pointer delta.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Clamp each coordinate into `[0, bound.width]` / `[0, bound.height]`.
    ///
    /// Idempotent: a point already inside the bound is returned unchanged.
    #[inline]
    pub fn bound_to_rect(self, bound: BoundRect) -> Self {
        Self::new(clamp_axis(self.x, bound.width), clamp_axis(self.y, bound.height))
    }

    /// Scale both coordinates, used when the host surface changes size.
    #[inline]
    pub fn scale(self, tw: f32, th: f32) -> Self {
        Self::new(self.x * tw, self.y * th)
    }

    #[inline]
    pub fn distance_to(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[inline]
fn clamp_axis(value: f32, max: f32) -> f32 {
    let max = max.max(0.0);
    if value < 0.0 {
        0.0
    } else if value > max {
        max
    } else {
        value
    }
}

// ============================================================================
// Rect / BoundRect
// ============================================================================

/// A size. Width and height are never negative.
///
/// `Rect` is `Copy`, so binding it to a new name is the snapshot taken at
/// the start of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub width: f32,
    pub height: f32,
}

/// The maximum extent a position or size may range over. Used for clamping only.
pub type BoundRect = Rect;

impl Rect {
    /// Create a size, flooring negative components at zero.
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Component-wise `self - other`, floored at zero.
    ///
    /// For a host bound and a region size this is the legal range of the
    /// region's top-left corner.
    #[inline]
    pub fn minus(self, other: Rect) -> Self {
        Self::new(self.width - other.width, self.height - other.height)
    }

    #[inline]
    pub fn scale(self, tw: f32, th: f32) -> Self {
        Self::new(self.width * tw, self.height * th)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

// ============================================================================
// Corner
// ============================================================================

/// One of the four corner anchors of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    #[inline]
    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    #[inline]
    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    fn from_sides(top: bool, left: bool) -> Self {
        match (top, left) {
            (true, true) => Corner::TopLeft,
            (true, false) => Corner::TopRight,
            (false, true) => Corner::BottomLeft,
            (false, false) => Corner::BottomRight,
        }
    }

    /// Mirror the corner across the axes that flipped.
    ///
    /// An X flip swaps left and right, a Y flip swaps top and bottom.
    #[inline]
    pub fn flipped(self, flip_x: bool, flip_y: bool) -> Self {
        Self::from_sides(self.is_top() != flip_y, self.is_left() != flip_x)
    }

    /// The diagonally opposite corner.
    #[inline]
    pub fn opposite(self) -> Self {
        self.flipped(true, true)
    }

    /// Short class name used by the rendering layer ("TL", "TR", "BL", "BR").
    pub fn class_name(self) -> &'static str {
        match self {
            Corner::TopLeft => "TL",
            Corner::TopRight => "TR",
            Corner::BottomLeft => "BL",
            Corner::BottomRight => "BR",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomLeft => 2,
            Corner::BottomRight => 3,
        }
    }
}

// ============================================================================
// Frame
// ============================================================================

/// Position plus size: the full geometry of a region.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn from_parts(position: Point, size: Rect) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    /// Normalize two arbitrary diagonal points into a frame.
    ///
    /// The result never has a negative width or height.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Rect {
        Rect::new(self.width, self.height)
    }

    /// World position of a corner.
    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => Point::new(self.x, self.y),
            Corner::TopRight => Point::new(self.x + self.width, self.y),
            Corner::BottomLeft => Point::new(self.x, self.y + self.height),
            Corner::BottomRight => Point::new(self.x + self.width, self.y + self.height),
        }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}
