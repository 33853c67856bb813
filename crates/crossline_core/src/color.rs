//! Color palette
//!
//! RGB colors in [0, 1], stored as `Vec3` so primitives can assign them
//! directly to vertex color slots.

use crossline_math::Vec3;

pub const BROWN: Vec3 = Vec3::new(92.0 / 255.0, 75.0 / 255.0, 81.0 / 255.0);
pub const TEAL: Vec3 = Vec3::new(40.0 / 255.0, 190.0 / 255.0, 178.0 / 255.0);
pub const YELLOW: Vec3 = Vec3::new(242.0 / 255.0, 235.0 / 255.0, 191.0 / 255.0);
pub const ORANGE: Vec3 = Vec3::new(243.0 / 255.0, 181.0 / 255.0, 98.0 / 255.0);
pub const RED: Vec3 = Vec3::new(240.0 / 255.0, 96.0 / 255.0, 96.0 / 255.0);

/// Color applied to all three vertices of a triangle hit by a line
pub const TRIANGLE_MARKED: Vec3 = RED;
/// Color applied to both endpoints of a line that hits a triangle
pub const LINE_MARKED: Vec3 = TEAL;
