//! Geometric primitives
//!
//! A scene is built from two primitive kinds: triangles and line segments.
//! Positions are immutable after construction; per-vertex colors are mutated
//! only by the intersection marking pass.

use crossline_math::Vec3;
use serde::{Serialize, Deserialize};

/// A triangle with per-vertex positions and colors
///
/// The three positions are assumed non-collinear; `normal` degrades to
/// `Vec3::ZERO` for degenerate input rather than erroring.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    pub a_col: Vec3,
    pub b_col: Vec3,
    pub c_col: Vec3,
}

impl Triangle {
    /// Create a triangle with explicit per-vertex colors
    pub fn new(a: Vec3, b: Vec3, c: Vec3, a_col: Vec3, b_col: Vec3, c_col: Vec3) -> Self {
        Self { a, b, c, a_col, b_col, c_col }
    }

    /// Create a triangle with a single color on all vertices
    pub fn solid(a: Vec3, b: Vec3, c: Vec3, color: Vec3) -> Self {
        Self::new(a, b, c, color, color, color)
    }

    /// Unit plane normal from the winding `a -> b -> c` (right-hand rule)
    pub fn normal(&self) -> Vec3 {
        (self.b - self.a).cross(self.c - self.b).normalized()
    }

    /// Arithmetic mean of the three vertices
    pub fn centroid(&self) -> Vec3 {
        (self.a + self.b + self.c) / 3.0
    }

    /// Set all three vertex colors at once
    pub fn set_color(&mut self, color: Vec3) {
        self.a_col = color;
        self.b_col = color;
        self.c_col = color;
    }
}

/// A line segment with per-endpoint positions and colors
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub a: Vec3,
    pub b: Vec3,
    pub a_col: Vec3,
    pub b_col: Vec3,
}

impl Line {
    /// Create a line segment with explicit endpoint colors
    pub fn new(a: Vec3, b: Vec3, a_col: Vec3, b_col: Vec3) -> Self {
        Self { a, b, a_col, b_col }
    }

    /// Create a line segment with a single color on both endpoints
    pub fn solid(a: Vec3, b: Vec3, color: Vec3) -> Self {
        Self::new(a, b, color, color)
    }

    /// Unit direction from `a` to `b`
    pub fn direction(&self) -> Vec3 {
        (self.b - self.a).normalized()
    }

    /// Segment length
    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }

    /// Set both endpoint colors at once
    pub fn set_color(&mut self, color: Vec3) {
        self.a_col = color;
        self.b_col = color;
    }
}
