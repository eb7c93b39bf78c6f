//! Tool settings - handle sizes, menu thresholds and label metrics.
//!
//! Every field has a default, so a settings file only needs the values it
//! overrides:
//!
//! ```json
//! { "menu": { "side_margin": 8.0 }, "anchors": { "ghost_radius": 10.0 } }
//! ```

use crate::constants::{
    ANCHOR_HIT_RADIUS, ANCHOR_RADIUS, GHOST_ANCHOR_RADIUS, LABEL_BACKGROUND_INSET,
    LABEL_CHAR_WIDTH, LABEL_LINE_HEIGHT, LABEL_PADDING, LABEL_TEXT_INSET, MENU_HEIGHT,
    MENU_INNER_MARGIN, MENU_ITEM_SIZE, MENU_SIDE_MARGIN, MENU_WIDTH,
};
use crate::error::{RegionError, RegionResult};
use anyhow::Context;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

static DEFAULT_SETTINGS: Lazy<RegionToolSettings> = Lazy::new(RegionToolSettings::default);

/// Fixed geometry of the shared context menu.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuMetrics {
    /// Side of one square menu item
    pub item_size: f32,
    /// Menu width (mw)
    pub width: f32,
    /// Menu height (mh)
    pub height: f32,
    /// Vertical threshold for placing the menu inside the region (dh)
    pub inner_margin: f32,
    /// Horizontal clearance kept to the host edge and the region (dw)
    pub side_margin: f32,
}

impl Default for MenuMetrics {
    fn default() -> Self {
        Self {
            item_size: MENU_ITEM_SIZE,
            width: MENU_WIDTH,
            height: MENU_HEIGHT,
            inner_margin: MENU_INNER_MARGIN,
            side_margin: MENU_SIDE_MARGIN,
        }
    }
}

/// Corner handle sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorMetrics {
    pub radius: f32,
    pub ghost_radius: f32,
    /// Pointer distance from a corner that still hits its anchor
    pub hit_radius: f32,
}

impl Default for AnchorMetrics {
    fn default() -> Self {
        Self {
            radius: ANCHOR_RADIUS,
            ghost_radius: GHOST_ANCHOR_RADIUS,
            hit_radius: ANCHOR_HIT_RADIUS,
        }
    }
}

/// Placement of the tag name inside a region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelMetrics {
    pub text_inset: f32,
    pub background_inset: f32,
    pub char_width: f32,
    pub line_height: f32,
    pub padding: (f32, f32),
}

impl Default for LabelMetrics {
    fn default() -> Self {
        Self {
            text_inset: LABEL_TEXT_INSET,
            background_inset: LABEL_BACKGROUND_INSET,
            char_width: LABEL_CHAR_WIDTH,
            line_height: LABEL_LINE_HEIGHT,
            padding: LABEL_PADDING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionToolSettings {
    pub menu: MenuMetrics,
    pub anchors: AnchorMetrics,
    pub label: LabelMetrics,
}

impl RegionToolSettings {
    /// Process-wide defaults.
    pub fn defaults() -> &'static RegionToolSettings {
        &DEFAULT_SETTINGS
    }

    /// Parse settings from JSON and validate them.
    pub fn from_json_str(json: &str) -> RegionResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file. A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }

    /// Sizes must be positive and margins non-negative.
    pub fn validate(&self) -> RegionResult<()> {
        let positive = [
            ("menu.item_size", self.menu.item_size),
            ("menu.width", self.menu.width),
            ("menu.height", self.menu.height),
            ("anchors.radius", self.anchors.radius),
            ("anchors.ghost_radius", self.anchors.ghost_radius),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(RegionError::Settings(format!("{} must be positive, got {}", name, value)));
            }
        }

        let non_negative = [
            ("menu.inner_margin", self.menu.inner_margin),
            ("menu.side_margin", self.menu.side_margin),
            ("anchors.hit_radius", self.anchors.hit_radius),
        ];
        for (name, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(RegionError::Settings(format!("{} must not be negative, got {}", name, value)));
            }
        }
        Ok(())
    }
}
