//! Interactive bounding-box regions for annotation tools.
//!
//! A host surface shows any number of rectangular regions. Each region can be
//! resized from its four corners (dragging a corner past the opposite one
//! flips it), dragged as a whole inside the host, and selected. A single
//! context menu follows the selected region. When the host is resized every
//! region is rescaled so it keeps its relative placement.
//!
//! The core is rendering-agnostic: drawing goes through a [`Surface`] and
//! per-region colors through a [`StyleRegistry`]. Both have in-memory
//! implementations ([`RecordingSurface`], [`CssStyleRegistry`]).
//!
//! ## Modules
//!
//! - `geometry` - Points, sizes, frames and corners
//! - `input` - Gesture events and the anchor/drag controllers
//! - `region` - One region and its visual parts
//! - `manager` - The region collection, selection and menu
//! - `menu` - Context menu placement and actions
//! - `surface` / `style` - Rendering and styling collaborators
//! - `settings` - Tunable metrics loaded from JSON
//! - `spatial_index` - R-tree hit testing
//! - `perf` / `logging` - Instrumentation

pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod manager;
pub mod menu;
pub mod perf;
pub mod region;
pub mod settings;
pub mod spatial_index;
pub mod style;
pub mod surface;
pub mod tags;

pub use error::{RegionError, RegionResult};
pub use geometry::{BoundRect, Corner, Frame, Point, Rect};
pub use input::{GestureEvent, RegionPart};
pub use manager::{HitTarget, ManipulationSource, RegionsManager};
pub use menu::{ContextMenu, MenuAction, place_menu};
pub use region::{Region, RegionId, RegionNotice};
pub use settings::RegionToolSettings;
pub use style::{CssStyleRegistry, StyleRegistry, StyleRule};
pub use surface::{PointerId, RecordingSurface, Surface, VisualHandle};
pub use tags::{Tag, TagColors, TagsDescriptor};
