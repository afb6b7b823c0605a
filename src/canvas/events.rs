//! Generic pointer event types for cross-shell compatibility.

use crate::geometry::Point;

/// A pointer event as delivered by a host shell.
///
/// Shells map their native event streams (mouse, stylus, touch) to these
/// values so the controller can be driven without knowing the windowing
/// toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button pressed at the given position
    Down(Point),
    /// Pointer moved while the primary button is held
    Drag(Point),
    /// Primary button released at the given position
    Up(Point),
}
