//! Canvas interaction core.
//!
//! This module maps a selected tool and a sequence of pointer events to
//! rendered, finalized shapes. The [`CanvasController`] owns the gesture state
//! machine (idle / drawing), each gesture delegates to a per-tool
//! [`ShapeDraft`], and the drawing itself goes through the abstract
//! [`Surface`](crate::draw::Surface).

pub mod controller;
pub mod draft;
pub mod events;
pub mod tool;


// Re-export commonly used types at module level
pub use controller::CanvasController;
pub use draft::ShapeDraft;
pub use events::PointerEvent;
pub use tool::Tool;
