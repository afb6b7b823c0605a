//! Library exports for the sketchpad drawing core.
//!
//! Exposes the canvas interaction model (tool selection, gesture handling,
//! committed shapes) together with the surface abstraction and configuration
//! types, so host shells and tests can drive the core without the bundled
//! window shell.

pub mod canvas;
pub mod config;
pub mod draw;
pub mod geometry;

pub use config::Config;
