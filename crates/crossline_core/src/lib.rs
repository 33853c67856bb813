//! Core types for the Crossline demo
//!
//! This crate provides the geometry store and the intersection engine:
//!
//! - [`Triangle`] / [`Line`] - primitives with per-vertex positions and colors
//! - [`Scene`] - ordered primitive container, loadable from RON files
//! - [`color`] - the demo's palette and the two marked colors
//! - [`intersects`] - pure line/triangle intersection test
//! - [`mark_intersections`] - recolors every intersecting pair in a scene
//!
//! The intersection engine has no dependency on any rendering type; it
//! consumes a [`Scene`] and mutates vertex colors in place.

pub mod color;
mod primitive;
mod scene;
mod intersect;

pub use primitive::{Triangle, Line};
pub use scene::{Scene, SceneLoadError, SceneSaveError};
pub use intersect::{intersects, mark_intersections, EPSILON};

// Re-export commonly used math types for convenience
pub use crossline_math::{Vec2, Vec3, is_left};
