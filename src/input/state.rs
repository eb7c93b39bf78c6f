//! Gesture state machine shared by the anchor and drag controllers.
//!
//! Every handle goes through the same three-phase gesture. The phase is a
//! single explicit enum instead of scattered flags, so a controller can never
//! be "dragging" without having been pressed.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Armed      (pointer enters the handle)
//! Idle     -> Dragging   (press without hover, e.g. touch)
//! Armed    -> Dragging   (press)
//! Dragging -> Armed      (release, or pointer capture lost)
//! Armed    -> Idle       (pointer leaves the handle)
//! ```
//!
//! A leave while dragging is ignored: pointer capture keeps the gesture on
//! the original handle until it is released.

use crate::geometry::{Corner, Frame};
use crate::surface::PointerId;

/// Pointer input delivered to a single region part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer entered the part's hit area
    Enter,
    /// Pointer left the part's hit area
    Leave,
    /// Button or contact went down on the part
    Press(PointerId),
    /// Pointer moved; delta is relative to the press position
    Move { dx: f32, dy: f32 },
    /// Button or contact went up
    Release(PointerId),
    /// Host-level click (press and release without leaving the part)
    Click,
    /// The surface revoked pointer capture mid-gesture
    LostCapture(PointerId),
}

/// The interactive parts of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionPart {
    /// The drag rectangle covering the region
    Body,
    /// One of the four corner handles
    Anchor(Corner),
    /// The larger handle tracking the active corner
    Ghost,
}

/// What a controller reports back to its region after handling an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    ManipulationBegin,
    ManipulationEnd,
    /// New geometry. `committed` marks a discrete interaction end
    /// (click or release) that should affect selection.
    Changed { frame: Frame, committed: bool },
}

/// Phase of a single handle's gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// Pointer is elsewhere
    #[default]
    Idle,
    /// Pointer hovers the handle; a press starts a drag
    Armed,
    /// Drag in progress
    Dragging {
        /// Pointer holding capture, if the press came with one
        pointer: Option<PointerId>,
    },
}

impl GesturePhase {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed)
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Pointer holding capture during a drag
    pub fn pointer(&self) -> Option<PointerId> {
        match self {
            Self::Dragging { pointer } => *pointer,
            _ => None,
        }
    }

    /// Enter the handle. Returns true if this armed a new gesture.
    pub fn arm(&mut self) -> bool {
        if self.is_idle() {
            *self = Self::Armed;
            true
        } else {
            false
        }
    }

    /// Leave the handle. Returns true if the gesture was disarmed.
    pub fn disarm(&mut self) -> bool {
        if self.is_armed() {
            *self = Self::Idle;
            true
        } else {
            false
        }
    }

    /// Start dragging.
    pub fn start(&mut self, pointer: Option<PointerId>) {
        *self = Self::Dragging { pointer };
    }

    /// Finish a drag. Returns the pointer that held capture, or `None` if no
    /// drag was in progress.
    pub fn finish(&mut self) -> Option<Option<PointerId>> {
        match *self {
            Self::Dragging { pointer } => {
                *self = Self::Armed;
                Some(pointer)
            }
            _ => None,
        }
    }
}
