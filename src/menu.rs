//! Context menu - one shared menu attached to the selected region.
//!
//! Placement is a pure function of the region's frame, the host bound and the
//! menu metrics. When the region is tall enough the menu is vertically
//! centered on it and straddles its right edge; otherwise it is aligned with
//! the region's top and sits fully outside. In both cases the right side is
//! preferred, then the left, then a fallback just inside the right edge.

use crate::constants::{
    CLASS_MENU_ICON, CLASS_MENU_ITEM, CLASS_MENU_ITEM_BACK, CLASS_MENU_ITEMS, CLASS_MENU_LAYER,
    CLASS_MENU_RECT, DELETE_ICON_PATH, MENU_CORNER_RADIUS, MENU_ICON_BOX, MENU_ITEM_INSET,
};
use crate::error::{RegionError, RegionResult};
use crate::geometry::{BoundRect, Frame, Point, Rect};
use crate::region::{Region, RegionId};
use crate::settings::MenuMetrics;
use crate::surface::{Shape, Surface, VisualHandle, VisualUpdate};

/// Choose the menu's top-left corner for a region.
pub fn place_menu(region: Frame, host: BoundRect, m: &MenuMetrics) -> Point {
    let (x, y, w, h) = (region.x, region.y, region.width, region.height);
    let (mw, mh, dw) = (m.width, m.height, m.side_margin);

    if mh <= h - m.inner_margin {
        // Tall region: centered vertically, straddling the edge
        let my = y + h / 2.0 - mh / 2.0;
        let mx = if x + w + mw / 2.0 + dw < host.width {
            x + w - mw / 2.0
        } else if x - mw / 2.0 - dw > 0.0 {
            x - mw / 2.0
        } else {
            x + w - mw - dw
        };
        Point::new(mx, my)
    } else {
        // Short region: top-aligned, fully outside
        let my = y;
        let mx = if x + w + mw + 2.0 * dw < host.width {
            x + w + dw
        } else if x - mw - 2.0 * dw > 0.0 {
            x - mw - dw
        } else {
            x + w - mw - dw
        };
        Point::new(mx, my)
    }
}

/// Actions offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Delete,
}

impl MenuAction {
    pub fn icon(self) -> &'static str {
        match self {
            MenuAction::Delete => "trash",
        }
    }

    pub fn icon_path(self) -> &'static str {
        match self {
            MenuAction::Delete => DELETE_ICON_PATH,
        }
    }
}

/// Placement target: the attached region's geometry and its host bound.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Attachment {
    region: RegionId,
    frame: Frame,
    host: BoundRect,
}

pub struct ContextMenu {
    group: VisualHandle,
    items_group: VisualHandle,
    items: Vec<(MenuAction, VisualHandle)>,
    metrics: MenuMetrics,
    attachment: Option<Attachment>,
    placement: Point,
    visible: bool,
}

impl ContextMenu {
    /// Build the menu, initially hidden and detached.
    pub fn new(surface: &mut dyn Surface, layer: VisualHandle, metrics: MenuMetrics) -> Self {
        let group = surface.create_group(Some(layer), CLASS_MENU_LAYER);
        surface.create_shape(
            group,
            Shape::Rect {
                size: Rect::new(metrics.width, metrics.height),
                corner_radius: MENU_CORNER_RADIUS,
            },
            CLASS_MENU_RECT,
        );
        let items_group = surface.create_group(Some(group), CLASS_MENU_ITEMS);
        surface.schedule(VisualUpdate::visible(group, false));

        Self {
            group,
            items_group,
            items: Vec::new(),
            metrics,
            attachment: None,
            placement: Point::ORIGIN,
            visible: false,
        }
    }

    /// Append an action item.
    pub fn add_action(&mut self, surface: &mut dyn Surface, action: MenuAction) {
        let item_size = Rect::new(self.metrics.item_size, self.metrics.item_size);
        let inset = Point::new(MENU_ITEM_INSET, MENU_ITEM_INSET + self.items.len() as f32 * self.metrics.item_size);

        let item = surface.create_group(Some(self.items_group), "");
        let back = surface.create_shape(
            item,
            Shape::Rect { size: item_size, corner_radius: MENU_CORNER_RADIUS },
            CLASS_MENU_ITEM_BACK,
        );
        let icon = surface.create_shape(
            item,
            Shape::Path {
                data: action.icon_path().to_string(),
                scale: (self.metrics.item_size - 4.0) / MENU_ICON_BOX,
                translate: inset.offset(2.0, 2.0),
            },
            CLASS_MENU_ICON,
        );
        surface.add_class(icon, &format!("{}-{}", CLASS_MENU_ICON, action.icon()));
        let hit = surface.create_shape(
            item,
            Shape::Rect { size: item_size, corner_radius: MENU_CORNER_RADIUS },
            CLASS_MENU_ITEM,
        );
        for handle in [back, hit] {
            surface.schedule(VisualUpdate::position(handle, inset));
        }

        self.items.push((action, item));
    }

    pub fn actions(&self) -> impl Iterator<Item = MenuAction> + '_ {
        self.items.iter().map(|(action, _)| *action)
    }

    pub fn group(&self) -> VisualHandle {
        self.group
    }

    pub fn metrics(&self) -> &MenuMetrics {
        &self.metrics
    }

    /// Region the menu currently belongs to.
    pub fn attached(&self) -> Option<RegionId> {
        self.attachment.map(|a| a.region)
    }

    /// Top-left corner of the menu.
    pub fn placement(&self) -> Point {
        self.placement
    }

    /// Area covered by the menu.
    pub fn frame(&self) -> Frame {
        Frame::from_parts(self.placement, Rect::new(self.metrics.width, self.metrics.height))
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Attach to a region. The region must have a host bound.
    pub fn attach_to(&mut self, surface: &mut dyn Surface, region: &Region) -> RegionResult<()> {
        let host = region.host_bound().ok_or(RegionError::Unbounded(region.id()))?;
        self.attach(surface, region.id(), region.frame(), host);
        Ok(())
    }

    pub(crate) fn attach(&mut self, surface: &mut dyn Surface, region: RegionId, frame: Frame, host: BoundRect) {
        self.attachment = Some(Attachment { region, frame, host });
        self.reposition(surface);
    }

    /// Follow the attached region's new geometry.
    pub fn follow(&mut self, surface: &mut dyn Surface, frame: Frame, host: BoundRect) {
        if let Some(attachment) = self.attachment.as_mut() {
            attachment.frame = frame;
            attachment.host = host;
            self.reposition(surface);
        }
    }

    pub fn detach(&mut self) {
        self.attachment = None;
    }

    pub fn show(&mut self, surface: &mut dyn Surface) {
        self.visible = true;
        surface.schedule(VisualUpdate::visible(self.group, true));
    }

    pub fn hide(&mut self, surface: &mut dyn Surface) {
        self.visible = false;
        surface.schedule(VisualUpdate::visible(self.group, false));
    }

    fn reposition(&mut self, surface: &mut dyn Surface) {
        let Some(attachment) = self.attachment else { return };
        self.placement = place_menu(attachment.frame, attachment.host, &self.metrics);
        surface.schedule(VisualUpdate::position(self.group, self.placement));
    }
}
