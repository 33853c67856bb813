//! Line/triangle intersection and the marking pass
//!
//! [`intersects`] is a pure test over one line segment and one triangle;
//! [`mark_intersections`] runs it over a scene's full cross product and
//! recolors both primitives of every intersecting pair. There is no error
//! path: degenerate geometry and near-parallel configurations report
//! "no intersection" instead of failing.

use crossline_math::{is_left, Vec2, Vec3};

use crate::color;
use crate::primitive::{Line, Triangle};
use crate::scene::Scene;

/// Tolerance band for the parallel test and the segment-bounds equality
pub const EPSILON: f32 = 1e-6;

/// Does the line segment intersect the triangle?
///
/// The test runs in three stages:
/// 1. intersect the infinite line with the triangle's plane, rejecting
///    near-parallel configurations (`|dir . n| < EPSILON`);
/// 2. require the plane hit to lie between the segment endpoints, via the
///    triangle-inequality gap `|b-a| - |p-a| - |b-p|` being within EPSILON
///    of zero;
/// 3. require the hit to be left of all three directed edges after
///    projecting onto the XY plane.
///
/// Lines grazing the plane inside the parallel band are reported as
/// non-intersecting; that false negative is accepted in exchange for never
/// dividing by a vanishing `dir . n`.
pub fn intersects(line: &Line, triangle: &Triangle) -> bool {
    let n = triangle.normal();
    let dir = line.direction();

    let l_dot_n = dir.dot(n);
    if l_dot_n.abs() < EPSILON {
        return false;
    }

    let t = (triangle.a - line.a).dot(n) / l_dot_n;
    let p = line.a + dir * t;

    // Segment-bounds check. The gap is zero when p lies between the
    // endpoints and strictly negative when it lies outside; a single
    // epsilon-tolerant equality covers both float noise directions.
    let gap = line.length() - line.a.distance(p) - line.b.distance(p);
    if gap.abs() >= EPSILON {
        return false;
    }

    point_in_triangle_xy(triangle, p)
}

/// Half-plane in-triangle test after dropping the Z coordinate
///
/// Only valid for triangles whose XY projection does not collapse; an
/// edge-on triangle (plane parallel to the Z axis) projects to a sliver and
/// the test degrades to "outside". Triangles must wind counter-clockwise in
/// the projection.
fn point_in_triangle_xy(triangle: &Triangle, p: Vec3) -> bool {
    let a: Vec2 = triangle.a.xy();
    let b: Vec2 = triangle.b.xy();
    let c: Vec2 = triangle.c.xy();
    let p = p.xy();

    is_left(a, b, p) && is_left(b, c, p) && is_left(c, a, p)
}

/// Recolor every intersecting (line, triangle) pair in the scene
///
/// Both endpoints of an intersecting line take [`color::LINE_MARKED`]; all
/// three vertices of the triangle take [`color::TRIANGLE_MARKED`]. Marking
/// writes constant colors, so the pass is idempotent and order-independent,
/// and nothing is ever unmarked. Returns the number of intersecting pairs.
pub fn mark_intersections(scene: &mut Scene) -> usize {
    let mut hits = 0;

    for li in 0..scene.lines.len() {
        for ti in 0..scene.triangles.len() {
            if intersects(&scene.lines[li], &scene.triangles[ti]) {
                log::debug!("line {} intersects triangle {}", li, ti);
                scene.lines[li].set_color(color::LINE_MARKED);
                scene.triangles[ti].set_color(color::TRIANGLE_MARKED);
                hits += 1;
            }
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    /// Triangle in the z = -1 plane, counter-clockwise in XY
    fn reference_triangle() -> Triangle {
        Triangle::solid(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            color::ORANGE,
        )
    }

    fn piercing_line() -> Line {
        Line::solid(
            Vec3::new(0.4, 0.4, 0.0),
            Vec3::new(0.4, 0.4, -1.5),
            color::YELLOW,
        )
    }

    #[test]
    fn hits_triangle_through_interior() {
        // Direction (0,0,-1); plane hit at (0.4, 0.4, -1), inside the
        // triangle and between the endpoints.
        assert!(intersects(&piercing_line(), &reference_triangle()));
    }

    #[test]
    fn misses_parallel_line() {
        // Line in the z = 0 plane, parallel to the triangle's plane
        let line = Line::solid(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0), color::YELLOW);
        assert!(!intersects(&line, &reference_triangle()));
    }

    #[test]
    fn misses_parallel_line_at_any_offset() {
        let tri = reference_triangle();
        for z in [-1.0, -0.5, 0.0, 3.0] {
            let line = Line::solid(
                Vec3::new(0.0, 0.0, z),
                Vec3::new(1.0, 1.0, z),
                color::YELLOW,
            );
            assert!(!intersects(&line, &tri), "offset z = {z}");
        }
    }

    #[test]
    fn misses_line_entirely_on_one_side() {
        // Both endpoints at z > -1: no sign change of dot(P - a, n)
        let line = Line::solid(
            Vec3::new(0.4, 0.4, 0.0),
            Vec3::new(0.4, 0.4, -0.5),
            color::YELLOW,
        );
        assert!(!intersects(&line, &reference_triangle()));
    }

    #[test]
    fn rejects_hit_beyond_far_endpoint() {
        // The infinite line crosses the plane inside the triangle, but the
        // segment stops short. The bounds check must reject the hit even
        // though the gap is far from the epsilon band.
        let line = Line::solid(
            Vec3::new(0.2, 0.2, 1.0),
            Vec3::new(0.2, 0.2, 0.5),
            color::YELLOW,
        );
        assert!(!intersects(&line, &reference_triangle()));
    }

    #[test]
    fn hits_through_centroid() {
        let tri = reference_triangle();
        let centroid = tri.centroid();
        let line = Line::solid(
            Vec3::new(centroid.x, centroid.y, 1.0),
            Vec3::new(centroid.x, centroid.y, -2.0),
            color::YELLOW,
        );
        assert!(intersects(&line, &tri));
    }

    #[test]
    fn misses_outside_triangle() {
        // Crosses the plane within bounds, but outside the triangle
        let line = Line::solid(
            Vec3::new(0.9, 0.9, 0.0),
            Vec3::new(0.9, 0.9, -1.5),
            color::YELLOW,
        );
        assert!(!intersects(&line, &reference_triangle()));
    }

    #[test]
    fn is_deterministic() {
        let tri = reference_triangle();
        let line = piercing_line();
        let first = intersects(&line, &tri);
        for _ in 0..10 {
            assert_eq!(intersects(&line, &tri), first);
        }
    }

    #[test]
    fn invariant_under_vertex_rotation() {
        let t = reference_triangle();
        let rotated = Triangle::solid(t.b, t.c, t.a, color::ORANGE);
        let rotated_twice = Triangle::solid(t.c, t.a, t.b, color::ORANGE);

        let hit = piercing_line();
        assert!(intersects(&hit, &t));
        assert!(intersects(&hit, &rotated));
        assert!(intersects(&hit, &rotated_twice));

        let miss = Line::solid(
            Vec3::new(0.9, 0.9, 0.0),
            Vec3::new(0.9, 0.9, -1.5),
            color::YELLOW,
        );
        assert!(!intersects(&miss, &t));
        assert!(!intersects(&miss, &rotated));
        assert!(!intersects(&miss, &rotated_twice));
    }

    #[test]
    fn marking_recolors_both_primitives() {
        let mut scene = Scene::new("test");
        scene.add_triangle(reference_triangle());
        scene.add_line(piercing_line());

        let hits = mark_intersections(&mut scene);
        assert_eq!(hits, 1);

        let tri = &scene.triangles[0];
        assert_eq!(tri.a_col, color::TRIANGLE_MARKED);
        assert_eq!(tri.b_col, color::TRIANGLE_MARKED);
        assert_eq!(tri.c_col, color::TRIANGLE_MARKED);

        let line = &scene.lines[0];
        assert_eq!(line.a_col, color::LINE_MARKED);
        assert_eq!(line.b_col, color::LINE_MARKED);
    }

    #[test]
    fn marking_leaves_missed_primitives_alone() {
        let mut scene = Scene::new("test");
        scene.add_triangle(reference_triangle());
        scene.add_line(Line::solid(
            Vec3::ZERO,
            Vec3::new(1.0, 1.0, 0.0),
            color::YELLOW,
        ));

        let hits = mark_intersections(&mut scene);
        assert_eq!(hits, 0);
        assert_eq!(scene.triangles[0].a_col, color::ORANGE);
        assert_eq!(scene.lines[0].a_col, color::YELLOW);
    }

    #[test]
    fn marking_is_idempotent() {
        let mut scene = Scene::new("test");
        scene.add_triangle(reference_triangle());
        scene.add_triangle(Triangle::solid(
            Vec3::new(0.0, 0.0, -2.0),
            Vec3::new(1.0, 0.0, -2.0),
            Vec3::new(0.0, 1.0, -2.0),
            color::RED,
        ));
        scene.add_line(piercing_line());
        scene.add_line(Line::solid(
            Vec3::new(0.1, 0.1, 0.5),
            Vec3::new(0.1, 0.1, -2.5),
            color::TEAL,
        ));

        let first = mark_intersections(&mut scene);
        let snapshot = scene.clone();
        let second = mark_intersections(&mut scene);

        assert_eq!(first, second);
        assert_eq!(scene.triangles, snapshot.triangles);
        assert_eq!(scene.lines, snapshot.lines);
    }

    #[test]
    fn one_line_marks_multiple_triangles() {
        let mut scene = Scene::new("test");
        scene.add_triangle(reference_triangle());
        scene.add_triangle(Triangle::solid(
            Vec3::new(0.0, 0.0, -2.0),
            Vec3::new(1.0, 0.0, -2.0),
            Vec3::new(0.0, 1.0, -2.0),
            color::ORANGE,
        ));
        scene.add_line(Line::solid(
            Vec3::new(0.2, 0.2, 0.5),
            Vec3::new(0.2, 0.2, -2.5),
            color::YELLOW,
        ));

        assert_eq!(mark_intersections(&mut scene), 2);
        for tri in &scene.triangles {
            assert_eq!(tri.a_col, color::TRIANGLE_MARKED);
        }
    }

    #[test]
    fn degenerate_triangle_never_intersects() {
        let degenerate = Triangle::solid(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(2.0, 0.0, -1.0),
            color::ORANGE,
        );
        assert!(!intersects(&piercing_line(), &degenerate));
    }
}
