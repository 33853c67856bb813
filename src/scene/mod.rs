//! Built-in demo scene
//!
//! Two stacked triangles, two decorative line segments lying in planes
//! parallel to them, and one segment that pierces both triangles so the
//! intersection pass has something to recolor.

use crossline_core::{color, Line, Scene, Triangle, Vec3};

/// Build the default demo scene
///
/// Triangle vertices are ordered counter-clockwise when projected onto
/// the XY plane; the intersection test relies on that winding.
pub fn build_demo_scene() -> Scene {
    let mut scene = Scene::new("demo");

    scene.add_triangle(Triangle::new(
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(1.0, 0.0, -1.0),
        Vec3::new(0.0, 1.0, -1.0),
        color::RED,
        color::ORANGE,
        color::ORANGE,
    ));
    scene.add_triangle(Triangle::new(
        Vec3::new(0.0, 0.0, -2.0),
        Vec3::new(1.0, 0.0, -2.0),
        Vec3::new(0.0, 1.0, -2.0),
        color::ORANGE,
        color::RED,
        color::RED,
    ));

    // Both of these lie in planes parallel to the triangles and never hit them
    scene.add_line(Line::solid(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        color::YELLOW,
    ));
    scene.add_line(Line::solid(
        Vec3::new(0.0, 1.0, -3.0),
        Vec3::new(1.0, 0.0, -3.0),
        color::TEAL,
    ));

    // This one passes through the interior of both triangles
    scene.add_line(Line::solid(
        Vec3::new(0.25, 0.25, 1.0),
        Vec3::new(0.25, 0.25, -4.0),
        color::YELLOW,
    ));

    scene
}
