//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for hit testing regions on the host
//! surface. Entries are inflated by the anchor hit radius so a pointer just
//! outside a corner still finds the region owning that corner.

use crate::geometry::{Frame, Point};
use crate::profile_function;
use crate::region::RegionId;
use rstar::{RTree, RTreeObject, AABB};
use std::collections::HashMap;

/// A spatial entry representing a region's (inflated) bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub region: RegionId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(region: RegionId, frame: Frame, margin: f32) -> Self {
        Self {
            region,
            min_x: frame.x - margin,
            min_y: frame.y - margin,
            max_x: frame.right() + margin,
            max_y: frame.bottom() + margin,
        }
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.region == other.region
    }
}

/// Spatial index over region frames.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<RegionId, SpatialEntry>,
    margin: f32,
}

impl SpatialIndex {
    /// `margin` inflates every entry on all sides.
    pub fn new(margin: f32) -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
            margin: margin.max(0.0),
        }
    }

    /// Insert or replace the entry for `region`.
    pub fn insert(&mut self, region: RegionId, frame: Frame) {
        if let Some(old_entry) = self.entries.remove(&region) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(region, frame, self.margin);
        self.tree.insert(entry);
        self.entries.insert(region, entry);
    }

    pub fn remove(&mut self, region: RegionId) -> bool {
        if let Some(entry) = self.entries.remove(&region) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, region: RegionId, frame: Frame) {
        self.insert(region, frame);
    }

    /// All regions whose inflated box contains the point.
    pub fn query_point(&self, p: Point) -> Vec<RegionId> {
        let point_envelope = AABB::from_point([p.x, p.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(p))
            .map(|entry| entry.region)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every entry at once.
    pub fn rebuild<I>(&mut self, regions: I)
    where
        I: Iterator<Item = (RegionId, Frame)>,
    {
        profile_function!();

        let margin = self.margin;
        let entries: Vec<SpatialEntry> = regions
            .map(|(id, frame)| SpatialEntry::new(id, frame, margin))
            .collect();

        self.entries = entries.iter().map(|e| (e.region, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
