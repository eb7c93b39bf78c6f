//! Regions manager - the region collection, selection and the shared menu.
//!
//! The manager is the only place that enforces single selection: selecting a
//! region always unselects every other region first. It also owns the one
//! context menu instance; regions never touch it.
//!
//! ## Event flow
//!
//! ```text
//! host pointer event
//!   -> hit_test(point)             (which region part is under the pointer)
//!   -> dispatch(region, part, ev)  (controller computes new geometry)
//!   -> Region applies geometry, returns RegionNotice
//!   -> on_region_update / manipulation observers
//! ```

use crate::constants::{CLASS_MENU_MANAGER, CLASS_REGION_MANAGER};
use crate::error::{RegionError, RegionResult};
use crate::geometry::{BoundRect, Corner, Frame, Point, Rect};
use crate::input::{GestureEvent, RegionPart};
use crate::menu::{ContextMenu, MenuAction};
use crate::profile_scope;
use crate::region::{Region, RegionId, RegionNotice};
use crate::settings::RegionToolSettings;
use crate::spatial_index::SpatialIndex;
use crate::style::StyleRegistry;
use crate::surface::{Surface, VisualHandle};
use crate::tags::TagsDescriptor;

/// Who started or ended a manipulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManipulationSource {
    Region(RegionId),
    Menu,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Region { region: RegionId, part: RegionPart },
    Menu,
}

type ManipulationObserver = Box<dyn FnMut(ManipulationSource)>;

pub struct RegionsManager<S: Surface, R: StyleRegistry> {
    surface: S,
    styles: R,
    settings: RegionToolSettings,
    host: BoundRect,
    layer: VisualHandle,
    regions: Vec<Region>,
    menu: ContextMenu,
    index: SpatialIndex,
    on_begin: Option<ManipulationObserver>,
    on_end: Option<ManipulationObserver>,
}

impl<S: Surface, R: StyleRegistry> RegionsManager<S, R> {
    pub fn new(surface: S, styles: R, host: Rect) -> Self {
        Self::with_settings(surface, styles, host, *RegionToolSettings::defaults())
    }

    pub fn with_settings(mut surface: S, styles: R, host: Rect, settings: RegionToolSettings) -> Self {
        let layer = surface.create_group(None, CLASS_REGION_MANAGER);
        let menu_layer = surface.create_group(None, CLASS_MENU_MANAGER);
        let mut menu = ContextMenu::new(&mut surface, menu_layer, settings.menu);
        menu.add_action(&mut surface, MenuAction::Delete);

        Self {
            surface,
            styles,
            settings,
            host,
            layer,
            regions: Vec::new(),
            menu,
            index: SpatialIndex::new(settings.anchors.hit_radius),
            on_begin: None,
            on_end: None,
        }
    }

    /// Observe the start of any region or menu manipulation, e.g. to suspend
    /// the host's own region-drawing gesture.
    pub fn on_manipulation_begin<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(ManipulationSource) + 'static,
    {
        self.on_begin = Some(Box::new(f));
        self
    }

    pub fn on_manipulation_end<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(ManipulationSource) + 'static,
    {
        self.on_end = Some(Box::new(f));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn selected(&self) -> Option<&Region> {
        self.regions.iter().find(|r| r.is_selected())
    }

    pub fn selected_count(&self) -> usize {
        self.regions.iter().filter(|r| r.is_selected()).count()
    }

    pub fn host_bound(&self) -> BoundRect {
        self.host
    }

    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    pub fn settings(&self) -> &RegionToolSettings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn styles(&self) -> &R {
        &self.styles
    }

    fn index_of(&self, id: RegionId) -> RegionResult<usize> {
        self.regions
            .iter()
            .position(|r| r.id() == id)
            .ok_or(RegionError::UnknownRegion(id))
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a region spanning the diagonal `a`-`b`, select it and attach
    /// the menu to it. Points outside the host are clamped onto it.
    pub fn add_region(&mut self, a: Point, b: Point, tags: TagsDescriptor) -> RegionId {
        self.menu.hide(&mut self.surface);

        let frame = Frame::from_corners(a.bound_to_rect(self.host), b.bound_to_rect(self.host));
        let mut region = Region::new(
            &mut self.surface,
            &mut self.styles,
            Some(self.layer),
            frame,
            Some(self.host),
            tags,
            &self.settings,
        );
        let id = region.id();

        self.unselect_regions(None);
        region.select(&mut self.surface);
        self.index.insert(id, frame);
        self.menu.attach(&mut self.surface, id, frame, self.host);
        self.regions.push(region);
        self.menu.show(&mut self.surface);

        tracing::info!(region = %id, ?frame, count = self.regions.len(), "Region added");
        id
    }

    /// Remove a region, its visuals and its style rules.
    pub fn delete_region(&mut self, id: RegionId) -> RegionResult<()> {
        let idx = self.index_of(id)?;
        let region = self.regions.remove(idx);
        self.index.remove(id);

        if self.menu.attached() == Some(id) {
            self.menu.detach();
            self.menu.hide(&mut self.surface);
        }

        region.destroy(&mut self.surface, &mut self.styles);
        tracing::info!(region = %id, count = self.regions.len(), "Region deleted");
        Ok(())
    }

    /// The host surface changed size: rescale every region's position and
    /// size by the same ratios so relative placement is preserved.
    pub fn resize(&mut self, width: f32, height: f32) {
        profile_scope!("host_resize");

        let host = Rect::new(width, height);
        // A zero-sized host has no ratio to scale from
        let tw = if self.host.width > 0.0 { host.width / self.host.width } else { 1.0 };
        let th = if self.host.height > 0.0 { host.height / self.host.height } else { 1.0 };
        self.host = host;

        for region in &mut self.regions {
            region.rescale(&mut self.surface, host, tw, th);
        }
        self.index
            .rebuild(self.regions.iter().map(|r| (r.id(), r.frame())));

        if let Some(frame) = self
            .menu
            .attached()
            .and_then(|id| self.region(id))
            .map(Region::frame)
        {
            self.menu.follow(&mut self.surface, frame, host);
        }

        tracing::debug!(width, height, tw, th, "Host resized");
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// React to a region's geometry change.
    ///
    /// A committed change selects the region (unselecting all others) and
    /// moves the menu onto it. A continuous change only hides the menu.
    pub fn on_region_update(&mut self, id: RegionId, committed: bool) -> RegionResult<()> {
        let idx = self.index_of(id)?;
        self.menu.hide(&mut self.surface);

        if committed {
            self.unselect_regions(Some(id));
            self.regions[idx].select(&mut self.surface);
            self.menu.attach_to(&mut self.surface, &self.regions[idx])?;
            self.menu.show(&mut self.surface);
            tracing::debug!(region = %id, "Region selected");
        }
        Ok(())
    }

    /// Unselect every region except `except`.
    pub fn unselect_regions(&mut self, except: Option<RegionId>) {
        for region in &mut self.regions {
            if Some(region.id()) != except {
                region.unselect(&mut self.surface);
            }
        }
    }

    // ========================================================================
    // Pointer routing
    // ========================================================================

    /// Deliver a gesture event to one part of a region.
    pub fn dispatch(
        &mut self,
        id: RegionId,
        part: RegionPart,
        event: GestureEvent,
    ) -> RegionResult<Option<RegionNotice>> {
        profile_scope!("dispatch");

        let idx = self.index_of(id).inspect_err(|_| {
            tracing::warn!(region = %id, ?event, "Dispatch to unknown region");
        })?;
        let notice = self.regions[idx].handle(&mut self.surface, part, event);

        match notice {
            Some(RegionNotice::Changed { committed }) => {
                let frame = self.regions[idx].frame();
                self.index.update(id, frame);
                self.on_region_update(id, committed)?;
            }
            Some(RegionNotice::ManipulationBegin) => {
                self.notify_begin(ManipulationSource::Region(id));
            }
            Some(RegionNotice::ManipulationEnd) => {
                self.notify_end(ManipulationSource::Region(id));
            }
            None => {}
        }
        Ok(notice)
    }

    /// Pointer entering or leaving the menu suspends host gestures like a
    /// region manipulation does.
    pub fn menu_event(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Enter => self.notify_begin(ManipulationSource::Menu),
            GestureEvent::Leave => self.notify_end(ManipulationSource::Menu),
            _ => {}
        }
    }

    /// Run a menu action on the region the menu is attached to.
    pub fn activate_menu_action(&mut self, action: MenuAction) -> RegionResult<()> {
        let target = self.menu.attached().ok_or(RegionError::NoMenuTarget)?;
        match action {
            MenuAction::Delete => {
                self.delete_region(target)?;
                self.menu.hide(&mut self.surface);
            }
        }
        Ok(())
    }

    /// Find what lies under `p`: the menu, or the top-most region part.
    /// Anchors win over the region body; later regions win over earlier ones.
    pub fn hit_test(&self, p: Point) -> Option<HitTarget> {
        profile_scope!("hit_test");

        if self.menu.is_visible() && self.menu.frame().contains(p) {
            return Some(HitTarget::Menu);
        }

        let candidates = self.index.query_point(p);
        self.regions
            .iter()
            .rev()
            .filter(|r| candidates.contains(&r.id()))
            .find_map(|r| {
                self.part_at(r, p)
                    .map(|part| HitTarget::Region { region: r.id(), part })
            })
    }

    fn part_at(&self, region: &Region, p: Point) -> Option<RegionPart> {
        let anchors = &self.settings.anchors;

        if let Some(ghost) = region.anchors().ghost_position() {
            if ghost.distance_to(&p) <= anchors.ghost_radius {
                return Some(RegionPart::Ghost);
            }
        }

        let frame = region.frame();
        let nearest = Corner::ALL
            .into_iter()
            .map(|c| (c, frame.corner(c).distance_to(&p)))
            .filter(|(_, d)| *d <= anchors.hit_radius)
            .min_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((corner, _)) = nearest {
            return Some(RegionPart::Anchor(corner));
        }

        frame.contains(p).then_some(RegionPart::Body)
    }

    fn notify_begin(&mut self, source: ManipulationSource) {
        tracing::trace!(?source, "Manipulation begin");
        if let Some(f) = self.on_begin.as_mut() {
            f(source);
        }
    }

    fn notify_end(&mut self, source: ManipulationSource) {
        tracing::trace!(?source, "Manipulation end");
        if let Some(f) = self.on_end.as_mut() {
            f(source);
        }
    }
}
