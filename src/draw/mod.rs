//! Rendering primitives and the surface abstraction.
//!
//! This module defines the drawing-side types of the canvas core:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`PrimitiveKind`] / [`Style`] / [`Primitive`]: what a shape renders as
//! - [`Surface`]: the abstract retained rendering surface
//! - [`Scene`]: the in-memory [`Surface`] implementation hosts paint from

pub mod color;
pub mod primitive;
pub mod scene;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use primitive::{Primitive, PrimitiveId, PrimitiveKind, Style};
pub use scene::Scene;
pub use surface::Surface;

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, LIGHT_GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
