//! Style registry - per-region color rules keyed by style id.
//!
//! Regions never touch a global style sheet. On creation a region hands its
//! rule set to a `StyleRegistry`; on deletion it asks the registry to drop it.
//! The registry owns the lifecycle of whatever the host renders the rules into.

use crate::constants::{
    CLASS_ANCHOR, CLASS_GHOST, CLASS_PRIMARY_TAG_RECT, CLASS_PRIMARY_TAG_TEXT_BG, CLASS_REGION,
    CLASS_SELECTED,
};
use crate::tags::{ColorRole, TagsDescriptor};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A single selector with its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

impl StyleRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    pub fn declare(mut self, property: &str, value: impl Into<String>) -> Self {
        self.declarations.push((property.to_string(), value.into()));
        self
    }

    /// Render as `selector { prop: value; ... }`.
    pub fn to_css(&self) -> String {
        let body = self
            .declarations
            .iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} {{ {} }}", self.selector, body)
    }
}

/// Build the rule set for a region's default, hover and selected states.
///
/// Returns no rules when the descriptor has no primary tag.
pub fn region_style_rules(style_id: &str, tags: &TagsDescriptor) -> Vec<StyleRule> {
    let Some(primary) = tags.primary.as_ref() else {
        return Vec::new();
    };

    let shadow = primary.color(ColorRole::Shadow);
    let highlight = primary.color(ColorRole::Highlight);
    let accent = primary.color(ColorRole::Accent);
    let pure = primary.color(ColorRole::Pure);
    let region = format!(".{}.{}", CLASS_REGION, style_id);

    vec![
        StyleRule::new(format!(".{} .{}", style_id, CLASS_PRIMARY_TAG_RECT))
            .declare("fill", shadow)
            .declare("stroke", accent),
        StyleRule::new(format!("{}:hover .{}", region, CLASS_PRIMARY_TAG_RECT))
            .declare("fill", highlight)
            .declare("stroke", "#fff"),
        StyleRule::new(format!(
            ".{}.{}.{} .{}",
            CLASS_REGION, CLASS_SELECTED, style_id, CLASS_PRIMARY_TAG_RECT
        ))
        .declare("fill", highlight)
        .declare("stroke", accent),
        StyleRule::new(format!("{} .{}", region, CLASS_ANCHOR))
            .declare("stroke", highlight)
            .declare("fill", pure),
        StyleRule::new(format!("{}:hover .{}", region, CLASS_ANCHOR)).declare("stroke", "#fff"),
        StyleRule::new(format!("{} .{}.{}", region, CLASS_ANCHOR, CLASS_GHOST))
            .declare("fill", "transparent"),
        StyleRule::new(format!("{} .{}.{}:hover", region, CLASS_ANCHOR, CLASS_GHOST))
            .declare("fill", pure),
        StyleRule::new(format!("{} .{}", region, CLASS_PRIMARY_TAG_TEXT_BG)).declare("fill", accent),
    ]
}

/// Styling collaborator. Rule sets are fire-and-forget.
pub trait StyleRegistry {
    /// Install (or replace) the rule set for `style_id`.
    fn register(&mut self, style_id: &str, rules: Vec<StyleRule>);

    /// Drop the rule set for `style_id`. Unknown ids are ignored.
    fn remove(&mut self, style_id: &str);
}

/// In-memory registry that renders one CSS sheet per style id.
#[derive(Debug, Default)]
pub struct CssStyleRegistry {
    sheets: BTreeMap<String, Vec<StyleRule>>,
}

impl CssStyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, style_id: &str) -> bool {
        self.sheets.contains_key(style_id)
    }

    pub fn rules(&self, style_id: &str) -> Option<&[StyleRule]> {
        self.sheets.get(style_id).map(Vec::as_slice)
    }

    /// CSS text for one style id, one rule per line.
    pub fn css_for(&self, style_id: &str) -> Option<String> {
        self.sheets.get(style_id).map(|rules| {
            rules
                .iter()
                .map(StyleRule::to_css)
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    /// CSS text for every registered sheet, ordered by style id.
    pub fn stylesheet(&self) -> String {
        self.sheets
            .keys()
            .filter_map(|id| self.css_for(id))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl StyleRegistry for CssStyleRegistry {
    fn register(&mut self, style_id: &str, rules: Vec<StyleRule>) {
        tracing::trace!(style_id, rules = rules.len(), "Registering region styles");
        self.sheets.insert(style_id.to_string(), rules);
    }

    fn remove(&mut self, style_id: &str) {
        if self.sheets.remove(style_id).is_none() {
            tracing::debug!(style_id, "Removing styles that were never registered");
        }
    }
}

/// Lets the host keep reading a registry the manager writes to.
impl<R: StyleRegistry> StyleRegistry for Arc<Mutex<R>> {
    fn register(&mut self, style_id: &str, rules: Vec<StyleRule>) {
        self.lock().register(style_id, rules);
    }

    fn remove(&mut self, style_id: &str) {
        self.lock().remove(style_id);
    }
}
