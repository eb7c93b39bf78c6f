//! Tag label - the colored region rectangle and the primary tag name.
//!
//! Purely visual: it follows the region's geometry and never reports back.

use crate::constants::{CLASS_PRIMARY_TAG_RECT, CLASS_PRIMARY_TAG_TEXT, CLASS_PRIMARY_TAG_TEXT_BG, CLASS_TAGS_LAYER};
use crate::geometry::{Frame, Point, Rect};
use crate::settings::LabelMetrics;
use crate::surface::{Shape, Surface, VisualHandle, VisualUpdate};
use crate::tags::TagsDescriptor;

pub struct LabelPart {
    group: VisualHandle,
    rect: VisualHandle,
    text_background: VisualHandle,
    text: VisualHandle,
    metrics: LabelMetrics,
}

impl LabelPart {
    pub fn new(
        surface: &mut dyn Surface,
        parent: VisualHandle,
        tags: &TagsDescriptor,
        metrics: LabelMetrics,
        frame: Frame,
    ) -> Self {
        let group = surface.create_group(Some(parent), CLASS_TAGS_LAYER);
        let rect = surface.create_shape(
            group,
            Shape::Rect {
                size: frame.size(),
                corner_radius: 0.0,
            },
            CLASS_PRIMARY_TAG_RECT,
        );

        let name = tags.label();
        let text_size = Rect::new(
            name.chars().count() as f32 * metrics.char_width + metrics.padding.0,
            metrics.line_height + metrics.padding.1,
        );
        let text_background = surface.create_shape(
            group,
            Shape::Rect {
                size: text_size,
                corner_radius: 0.0,
            },
            CLASS_PRIMARY_TAG_TEXT_BG,
        );
        let text = surface.create_shape(
            group,
            Shape::Text {
                content: name.to_string(),
            },
            CLASS_PRIMARY_TAG_TEXT,
        );

        let label = Self {
            group,
            rect,
            text_background,
            text,
            metrics,
        };
        label.layout(surface, frame);
        label
    }

    pub fn layout(&self, surface: &mut dyn Surface, frame: Frame) {
        let origin = frame.position();
        let m = &self.metrics;
        surface.schedule(VisualUpdate::position(self.rect, origin));
        surface.schedule(VisualUpdate::size(self.rect, frame.size()));
        surface.schedule(VisualUpdate::position(
            self.text,
            Point::new(origin.x + m.text_inset, origin.y + m.line_height),
        ));
        surface.schedule(VisualUpdate::position(
            self.text_background,
            origin.offset(m.background_inset, m.background_inset),
        ));
    }

    pub fn group(&self) -> VisualHandle {
        self.group
    }

    pub fn rect_handle(&self) -> VisualHandle {
        self.rect
    }

    pub fn text_handle(&self) -> VisualHandle {
        self.text
    }

    pub fn show(&self, surface: &mut dyn Surface) {
        surface.schedule(VisualUpdate::visible(self.group, true));
    }

    pub fn hide(&self, surface: &mut dyn Surface) {
        surface.schedule(VisualUpdate::visible(self.group, false));
    }
}
