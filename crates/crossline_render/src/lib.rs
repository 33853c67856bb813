//! Rendering for the Crossline demo
//!
//! This crate provides the wgpu-based pipeline for drawing the scene's
//! triangles and line segments.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::Camera`] - free-fly camera with view/projection matrices
//! - [`geometry::SceneGeometry`] - flattens a scene into GPU buffer data
//! - [`pipeline::ScenePipeline`] - triangle and line render pipelines

pub mod context;
pub mod camera;
pub mod geometry;
pub mod pipeline;

// Re-export core types for convenience
pub use crossline_core::{Scene, Triangle, Line, Vec2, Vec3};

pub use context::RenderContext;
pub use camera::Camera;
pub use geometry::SceneGeometry;
pub use pipeline::{ScenePipeline, SceneUniforms};
