//! Pointer gesture handling for regions.
//!
//! Each region owns one `AnchorController` and one `DragController`. The
//! controllers only hold their own gesture state and report results back as
//! `GestureOutcome` values; the region applies them and notifies its owner.
//!
//! ## Modules
//!
//! - `state` - Gesture events, region parts and the shared phase machine
//! - `anchors` - Corner resize with direction flips
//! - `drag` - Bounded whole-region dragging

mod anchors;
mod drag;
mod state;

pub use anchors::{AnchorController, AnchorState};
pub use drag::DragController;
pub use state::{GestureEvent, GestureOutcome, GesturePhase, RegionPart};
