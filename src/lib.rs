//! Crossline - line/triangle intersection demo
//!
//! An interactive 3D viewer that renders triangles and line segments,
//! recolors every line/triangle pair that intersects, and lets you fly
//! around the result with FPS-style controls.

pub mod config;
pub mod scene;

pub use config::AppConfig;
pub use scene::build_demo_scene;
