//! Scene flattening - bridges core primitives to GPU buffers
//!
//! The vertex buffer layout is a fixed contract with the shader: one flat
//! float buffer holding all triangle positions, then all line positions,
//! then all triangle colors, then all line colors. The index buffer is
//! sequential, triangles first with line indices continuing after them.

use crossline_core::Scene;
use std::ops::Range;

pub const TRI_VERTEX_COUNT: usize = 3;
pub const LINE_VERTEX_COUNT: usize = 2;
pub const POS_ELEM_COUNT: usize = 3;
pub const COL_ELEM_COUNT: usize = 3;

/// GPU-ready geometry flattened from a scene
pub struct SceneGeometry {
    /// Position block followed by color block, both in draw order
    pub vertex_data: Vec<f32>,
    /// Sequential indices: triangles, then lines
    pub index_data: Vec<u16>,
    triangle_count: usize,
    line_count: usize,
}

impl SceneGeometry {
    /// Flatten a scene into buffer data
    pub fn from_scene(scene: &Scene) -> Self {
        let triangle_count = scene.triangle_count();
        let line_count = scene.line_count();
        let vertex_count = triangle_count * TRI_VERTEX_COUNT + line_count * LINE_VERTEX_COUNT;

        let mut vertex_data =
            Vec::with_capacity(vertex_count * (POS_ELEM_COUNT + COL_ELEM_COUNT));
        let mut index_data = Vec::with_capacity(vertex_count);
        let mut index: u16 = 0;

        // Triangle vertex positions
        for triangle in &scene.triangles {
            for pos in [triangle.a, triangle.b, triangle.c] {
                vertex_data.extend_from_slice(&pos.to_array());
                index_data.push(index);
                index += 1;
            }
        }

        // Line vertex positions
        for line in &scene.lines {
            for pos in [line.a, line.b] {
                vertex_data.extend_from_slice(&pos.to_array());
                index_data.push(index);
                index += 1;
            }
        }

        // Triangle vertex colors
        for triangle in &scene.triangles {
            for col in [triangle.a_col, triangle.b_col, triangle.c_col] {
                vertex_data.extend_from_slice(&col.to_array());
            }
        }

        // Line vertex colors
        for line in &scene.lines {
            for col in [line.a_col, line.b_col] {
                vertex_data.extend_from_slice(&col.to_array());
            }
        }

        Self {
            vertex_data,
            index_data,
            triangle_count,
            line_count,
        }
    }

    /// Total number of vertices (triangle and line)
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.triangle_count * TRI_VERTEX_COUNT + self.line_count * LINE_VERTEX_COUNT
    }

    /// Number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    /// Number of line segments
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Byte offset of the color block within the vertex buffer
    #[inline]
    pub fn color_offset_bytes(&self) -> u64 {
        (self.vertex_count() * POS_ELEM_COUNT * std::mem::size_of::<f32>()) as u64
    }

    /// Index range covering the triangles
    #[inline]
    pub fn triangle_index_range(&self) -> Range<u32> {
        0..(self.triangle_count * TRI_VERTEX_COUNT) as u32
    }

    /// Index range covering the lines (continues after the triangles)
    #[inline]
    pub fn line_index_range(&self) -> Range<u32> {
        let start = (self.triangle_count * TRI_VERTEX_COUNT) as u32;
        start..start + (self.line_count * LINE_VERTEX_COUNT) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossline_core::{color, Line, Triangle, Vec3};

    fn two_and_two() -> Scene {
        let mut scene = Scene::new("test");
        scene.add_triangle(Triangle::solid(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            color::ORANGE,
        ));
        scene.add_triangle(Triangle::solid(
            Vec3::new(0.0, 0.0, -2.0),
            Vec3::new(1.0, 0.0, -2.0),
            Vec3::new(0.0, 1.0, -2.0),
            color::RED,
        ));
        scene.add_line(Line::solid(
            Vec3::ZERO,
            Vec3::new(1.0, 1.0, 0.0),
            color::YELLOW,
        ));
        scene.add_line(Line::solid(
            Vec3::new(0.0, 1.0, -3.0),
            Vec3::new(1.0, 0.0, -3.0),
            color::TEAL,
        ));
        scene
    }

    #[test]
    fn test_block_sizes() {
        let geometry = SceneGeometry::from_scene(&two_and_two());
        // 2 triangles * 3 + 2 lines * 2 = 10 vertices
        assert_eq!(geometry.vertex_count(), 10);
        // positions + colors = 10 * (3 + 3) floats
        assert_eq!(geometry.vertex_data.len(), 60);
        assert_eq!(geometry.index_data.len(), 10);
    }

    #[test]
    fn test_position_block_order() {
        let scene = two_and_two();
        let geometry = SceneGeometry::from_scene(&scene);
        // First position is triangle 0 vertex a
        assert_eq!(&geometry.vertex_data[0..3], &scene.triangles[0].a.to_array());
        // Line positions start after all triangle positions (6 vertices in)
        let line_pos_start = 6 * POS_ELEM_COUNT;
        assert_eq!(
            &geometry.vertex_data[line_pos_start..line_pos_start + 3],
            &scene.lines[0].a.to_array()
        );
    }

    #[test]
    fn test_color_block_order() {
        let scene = two_and_two();
        let geometry = SceneGeometry::from_scene(&scene);
        let color_start = (geometry.color_offset_bytes() / 4) as usize;
        // Color block starts with triangle 0 vertex a's color
        assert_eq!(
            &geometry.vertex_data[color_start..color_start + 3],
            &scene.triangles[0].a_col.to_array()
        );
        // Last color is the final line endpoint's
        let last = geometry.vertex_data.len() - 3;
        assert_eq!(&geometry.vertex_data[last..], &scene.lines[1].b_col.to_array());
    }

    #[test]
    fn test_color_offset() {
        let geometry = SceneGeometry::from_scene(&two_and_two());
        // 10 vertices * 3 floats * 4 bytes
        assert_eq!(geometry.color_offset_bytes(), 120);
    }

    #[test]
    fn test_indices_sequential() {
        let geometry = SceneGeometry::from_scene(&two_and_two());
        for (i, &idx) in geometry.index_data.iter().enumerate() {
            assert_eq!(idx as usize, i);
        }
    }

    #[test]
    fn test_index_ranges() {
        let geometry = SceneGeometry::from_scene(&two_and_two());
        assert_eq!(geometry.triangle_index_range(), 0..6);
        assert_eq!(geometry.line_index_range(), 6..10);
    }

    #[test]
    fn test_empty_scene() {
        let geometry = SceneGeometry::from_scene(&Scene::new("empty"));
        assert_eq!(geometry.vertex_count(), 0);
        assert!(geometry.vertex_data.is_empty());
        assert!(geometry.index_data.is_empty());
        assert_eq!(geometry.line_index_range(), 0..0);
    }

    #[test]
    fn test_marked_colors_flow_through() {
        let mut scene = Scene::new("test");
        scene.add_triangle(Triangle::solid(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            color::ORANGE,
        ));
        scene.add_line(Line::solid(
            Vec3::new(0.4, 0.4, 0.0),
            Vec3::new(0.4, 0.4, -1.5),
            color::YELLOW,
        ));
        crossline_core::mark_intersections(&mut scene);

        let geometry = SceneGeometry::from_scene(&scene);
        let color_start = (geometry.color_offset_bytes() / 4) as usize;
        assert_eq!(
            &geometry.vertex_data[color_start..color_start + 3],
            &color::TRIANGLE_MARKED.to_array()
        );
        let line_color_start = color_start + 3 * COL_ELEM_COUNT;
        assert_eq!(
            &geometry.vertex_data[line_color_start..line_color_start + 3],
            &color::LINE_MARKED.to_array()
        );
    }
}
