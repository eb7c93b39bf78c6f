//! Tag metadata attached to a region.
//!
//! Tags are opaque to the geometry core. They only feed the style registry
//! and the label text.

use serde::{Deserialize, Serialize};

/// Color role of a tag palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Shadow,
    Highlight,
    Accent,
    Pure,
}

/// The four colors a tag is drawn with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagColors {
    pub shadow: String,
    pub highlight: String,
    pub accent: String,
    pub pure: String,
}

impl TagColors {
    pub fn new(
        shadow: impl Into<String>,
        highlight: impl Into<String>,
        accent: impl Into<String>,
        pure: impl Into<String>,
    ) -> Self {
        Self {
            shadow: shadow.into(),
            highlight: highlight.into(),
            accent: accent.into(),
            pure: pure.into(),
        }
    }

    /// Same color for every role.
    pub fn uniform(color: impl Into<String>) -> Self {
        let color = color.into();
        Self::new(color.clone(), color.clone(), color.clone(), color)
    }

    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Shadow => &self.shadow,
            ColorRole::Highlight => &self.highlight,
            ColorRole::Accent => &self.accent,
            ColorRole::Pure => &self.pure,
        }
    }
}

/// A named tag with its palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub colors: TagColors,
}

impl Tag {
    pub fn new(name: impl Into<String>, colors: TagColors) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    #[inline]
    pub fn color(&self, role: ColorRole) -> &str {
        self.colors.get(role)
    }
}

/// Ordered tags of a region. The primary tag decides the region's colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsDescriptor {
    pub primary: Option<Tag>,
    #[serde(default)]
    pub secondary: Vec<Tag>,
}

impl TagsDescriptor {
    pub fn new(primary: Tag) -> Self {
        Self {
            primary: Some(primary),
            secondary: Vec::new(),
        }
    }

    pub fn with_secondary(mut self, tag: Tag) -> Self {
        self.secondary.push(tag);
        self
    }

    /// Name shown in the region label; empty when there is no primary tag.
    pub fn label(&self) -> &str {
        self.primary.as_ref().map(|t| t.name.as_str()).unwrap_or("")
    }
}
