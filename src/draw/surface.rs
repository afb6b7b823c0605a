//! Abstract rendering surface contract.

use super::primitive::{PrimitiveId, PrimitiveKind, Style};
use crate::geometry::Bounds;

/// A retained 2D rendering surface.
///
/// The surface exclusively owns every primitive created on it. Callers keep
/// only [`PrimitiveId`] back-references and mutate or remove primitives
/// through this interface.
///
/// Implementations ignore unknown handles instead of signalling errors: event
/// ordering is validated upstream and drawing operations have no user-visible
/// error states.
pub trait Surface {
    /// Creates a primitive with the given geometry and style, renders it, and
    /// returns its handle.
    fn create(&mut self, kind: PrimitiveKind, bounds: Bounds, style: Style) -> PrimitiveId;

    /// Replaces the geometry of an existing primitive in place.
    fn set_bounds(&mut self, id: PrimitiveId, bounds: Bounds);

    /// Removes a primitive from the surface.
    fn remove(&mut self, id: PrimitiveId);

    /// Removes every primitive from the surface.
    fn clear(&mut self);
}
