//! Math primitives for the Crossline demo
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector used for positions, directions, and RGB colors
//! - [`Vec2`] - 2D vector for planar projections
//! - [`is_left`] - half-plane orientation test against a directed edge

mod vec3;
mod vec2;

pub use vec3::Vec3;
pub use vec2::{Vec2, is_left};
