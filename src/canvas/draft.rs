//! Per-tool shape drafting behavior.
//!
//! A [`ShapeDraft`] is the transient unit behind one drawing gesture: created
//! on pointer-down, it renders the initial primitive and records the anchor
//! point; every drag recomputes the geometry from the anchor and the current
//! point; release commits the primitive and discards the draft. Only the
//! rendered primitive outlives the gesture.

use crate::draw::{Color, PrimitiveId, PrimitiveKind, Style, Surface};
use crate::geometry::{Bounds, Point};

use super::tool::Tool;

/// Halo of the dot primitive around the press position, in pixels.
const DOT_RADIUS: i32 = 1;

/// An in-progress shape bound to the gesture that is drawing it.
///
/// The draft keeps using the tool it was started with even if the selected
/// tool changes mid-gesture.
#[derive(Debug)]
pub struct ShapeDraft {
    tool: Tool,
    primitive: PrimitiveId,
    anchor: Point,
}

impl ShapeDraft {
    /// Starts drafting `tool` at the pointer-down position.
    ///
    /// This is the closed tool-to-shape mapping: each tool produces its
    /// primitive kind, initial geometry, and style here. The initial primitive
    /// is a one-pixel dot for [`Tool::Dot`] and a degenerate (zero-extent)
    /// shape for the draggable tools.
    pub fn begin(
        tool: Tool,
        surface: &mut dyn Surface,
        point: Point,
        stroke: Color,
        ellipse_fill: Color,
        thickness: f64,
    ) -> Self {
        let kind = match tool {
            Tool::Dot | Tool::Ellipse => PrimitiveKind::Oval,
            Tool::Line => PrimitiveKind::Line,
            Tool::Rect => PrimitiveKind::Rect,
        };
        let fill = match tool {
            Tool::Dot => Some(stroke),
            Tool::Ellipse => Some(ellipse_fill),
            Tool::Line | Tool::Rect => None,
        };
        let bounds = match tool {
            Tool::Dot => Bounds::around(point, DOT_RADIUS),
            Tool::Line | Tool::Rect | Tool::Ellipse => Bounds::new(point, point),
        };

        let primitive = surface.create(
            kind,
            bounds,
            Style {
                stroke,
                fill,
                thickness,
            },
        );

        Self {
            tool,
            primitive,
            anchor: point,
        }
    }

    /// Recomputes the shape from the anchor and the current pointer position
    /// and mutates the rendered primitive in place.
    ///
    /// A dot has no extent, so dragging does not change it.
    pub fn update(&self, surface: &mut dyn Surface, point: Point) {
        if self.tool == Tool::Dot {
            return;
        }
        surface.set_bounds(self.primitive, self.bounds_at(point));
    }

    /// Applies the release position one final time and hands the primitive
    /// over for committing.
    ///
    /// The final geometry pass makes the release position count even when no
    /// drag event preceded it.
    pub fn finish(self, surface: &mut dyn Surface, point: Point) -> PrimitiveId {
        self.update(surface, point);
        self.primitive
    }

    /// Abandons the draft, removing its primitive from the surface.
    pub fn cancel(self, surface: &mut dyn Surface) {
        surface.remove(self.primitive);
    }

    /// The tool this draft was started with.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Geometry of the draggable shapes for a given pointer position.
    ///
    /// Lines keep their endpoint order; rectangles normalize to handle
    /// dragging in any direction; ellipses treat the anchor as their center,
    /// spanning the box between the pointer and its reflection across the
    /// anchor.
    fn bounds_at(&self, point: Point) -> Bounds {
        match self.tool {
            Tool::Dot => Bounds::around(self.anchor, DOT_RADIUS),
            Tool::Line => Bounds::new(self.anchor, point),
            Tool::Rect => Bounds::new(self.anchor, point).normalized(),
            Tool::Ellipse => {
                Bounds::new(point.reflected_across(self.anchor), point).normalized()
            }
        }
    }
}
