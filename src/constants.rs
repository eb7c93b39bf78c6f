//! Tool-wide constants.
//!
//! Centralizes magic numbers and rendering class names so the controllers,
//! the style registry and the rendering collaborator agree on them.

// ============================================================================
// Anchors
// ============================================================================

/// Radius of a corner anchor handle
pub const ANCHOR_RADIUS: f32 = 3.0;

/// Radius of the ghost handle that tracks the active corner
pub const GHOST_ANCHOR_RADIUS: f32 = 7.0;

/// Distance from a corner within which a pointer hits that anchor
pub const ANCHOR_HIT_RADIUS: f32 = GHOST_ANCHOR_RADIUS;

// ============================================================================
// Context Menu
// ============================================================================

/// Size of a single square menu item
pub const MENU_ITEM_SIZE: f32 = 20.0;

/// Menu width (one column of items plus padding)
pub const MENU_WIDTH: f32 = MENU_ITEM_SIZE + 10.0;

/// Menu height
pub const MENU_HEIGHT: f32 = 60.0;

/// Threshold for positioning the menu inside/outside the region
pub const MENU_INNER_MARGIN: f32 = 20.0;

/// Threshold for positioning the menu left/right of the region
pub const MENU_SIDE_MARGIN: f32 = 5.0;

/// Inset of a menu item from the menu's top-left corner
pub const MENU_ITEM_INSET: f32 = 5.0;

/// Corner radius of the menu background and items
pub const MENU_CORNER_RADIUS: f32 = 5.0;

/// Icon for the delete action, drawn in a 96x96 box
pub const DELETE_ICON_PATH: &str = "M 83.4 21.1 L 74.9 12.6 L 48 39.5 L 21.1 12.6 L 12.6 21.1 L 39.5 48 L 12.6 74.9 L 21.1 83.4 L 48 56.5 L 74.9 83.4 L 83.4 74.9 L 56.5 48 Z";

/// Side of the square the icon paths are drawn in
pub const MENU_ICON_BOX: f32 = 96.0;

// ============================================================================
// Label
// ============================================================================

/// Horizontal inset of the tag name from the region's left edge
pub const LABEL_TEXT_INSET: f32 = 5.0;

/// Inset of the tag name background from the region's top-left corner
pub const LABEL_BACKGROUND_INSET: f32 = 1.0;

/// Estimated glyph advance used to size the tag name background
pub const LABEL_CHAR_WIDTH: f32 = 7.0;

/// Estimated line height of the tag name
pub const LABEL_LINE_HEIGHT: f32 = 14.0;

/// Padding added around the tag name to size its background
pub const LABEL_PADDING: (f32, f32) = (10.0, 5.0);

// ============================================================================
// Class Names
// ============================================================================

pub const CLASS_REGION_MANAGER: &str = "regionManager";
pub const CLASS_MENU_MANAGER: &str = "menuManager";
pub const CLASS_REGION: &str = "regionStyle";
pub const CLASS_SELECTED: &str = "selected";
pub const CLASS_TAGS_LAYER: &str = "tagsLayer";
pub const CLASS_DRAG_LAYER: &str = "dragLayer";
pub const CLASS_ANCHORS_LAYER: &str = "anchorsLayer";
pub const CLASS_MENU_LAYER: &str = "menuLayer";
pub const CLASS_PRIMARY_TAG_RECT: &str = "primaryTagRectStyle";
pub const CLASS_PRIMARY_TAG_TEXT: &str = "primaryTagTextStyle";
pub const CLASS_PRIMARY_TAG_TEXT_BG: &str = "primaryTagTextBGStyle";
pub const CLASS_DRAG_RECT: &str = "dragRectStyle";
pub const CLASS_ANCHOR: &str = "anchorStyle";
pub const CLASS_GHOST: &str = "ghost";
pub const CLASS_MENU_RECT: &str = "menuRectStyle";
pub const CLASS_MENU_ITEMS: &str = "menuItems";
pub const CLASS_MENU_ITEM: &str = "menuItem";
pub const CLASS_MENU_ITEM_BACK: &str = "menuItemBack";
pub const CLASS_MENU_ICON: &str = "menuIcon";

// ============================================================================
// Logging
// ============================================================================

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "regionkit=info";

/// Budget for a single drag-move step before the profiler warns, in milliseconds
pub const GESTURE_STEP_BUDGET_MS: f64 = 2.0;
