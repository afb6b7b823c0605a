//! Retained primitive records and their styling.

use super::color::Color;
use crate::geometry::Bounds;

/// Opaque handle identifying a rendered primitive on a [`Surface`].
///
/// Handles are back-references only; the surface owns the primitive and its
/// lifetime. Removal must go through the surface API.
///
/// [`Surface`]: super::Surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimitiveId(u64);

impl PrimitiveId {
    /// Wraps a raw handle value. Surface implementations use this to mint
    /// handles; the value is meaningful only to the surface that issued it.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// The drawing primitive a shape renders as.
///
/// Each variant corresponds to one low-level surface operation. A dot is an
/// oval with a fixed one-pixel halo around its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// Straight segment between the two bound corners (order-significant).
    Line,
    /// Axis-aligned rectangle outline.
    Rect,
    /// Ellipse inscribed in the bounds.
    Oval,
}

/// Stroke and fill parameters applied when a primitive is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Outline color.
    pub stroke: Color,
    /// Interior fill, if the shape is filled.
    pub fill: Option<Color>,
    /// Outline thickness in pixels.
    pub thickness: f64,
}

/// A primitive as retained by a surface: geometry plus the style it was
/// created with.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub id: PrimitiveId,
    pub kind: PrimitiveKind,
    pub bounds: Bounds,
    pub style: Style,
}
