//! Free-fly 3D camera
//!
//! The camera has a position, yaw/pitch orientation, and a zoomable field
//! of view. It owns the clamping rules: pitch is limited to keep the view
//! away from the poles, fov is limited to [`Camera::FOV_MIN`]..[`Camera::FOV_MAX`].

use crossline_math::Vec3;
use crossline_input::CameraControl;

/// Free-fly camera for viewing the scene
pub struct Camera {
    /// World position
    pub position: Vec3,
    /// Yaw in radians; -90 degrees looks down -Z
    yaw: f32,
    /// Pitch in radians, clamped to +/- pitch_limit
    pitch: f32,
    /// Vertical field of view in degrees, clamped to [FOV_MIN, FOV_MAX]
    pub fov: f32,
    /// Pitch limit in radians
    pitch_limit: f32,
    start_position: Vec3,
}

impl Camera {
    pub const FOV_MIN: f32 = 1.0;
    pub const FOV_MAX: f32 = 45.0;
    const DEFAULT_PITCH_LIMIT_DEG: f32 = 89.0;

    /// Create a camera at the default position, looking down -Z
    pub fn new() -> Self {
        let start = Vec3::new(0.0, 0.0, 3.0);
        Self {
            position: start,
            yaw: -std::f32::consts::FRAC_PI_2,
            pitch: 0.0,
            fov: Self::FOV_MAX,
            pitch_limit: Self::DEFAULT_PITCH_LIMIT_DEG.to_radians(),
            start_position: start,
        }
    }

    /// Builder: set the starting position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self.start_position = position;
        self
    }

    /// Builder: set the field of view in degrees (clamped)
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov.clamp(Self::FOV_MIN, Self::FOV_MAX);
        self
    }

    /// Builder: set the pitch limit in degrees
    pub fn with_pitch_limit(mut self, degrees: f32) -> Self {
        self.pitch_limit = degrees.to_radians();
        self
    }

    /// Return to the starting position and orientation
    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.yaw = -std::f32::consts::FRAC_PI_2;
        self.pitch = 0.0;
        self.fov = Self::FOV_MAX;
    }

    /// Look direction from yaw and pitch
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalized()
    }

    /// Right direction (horizontal, perpendicular to forward)
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalized()
    }

    /// Current pitch in radians
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current yaw in radians
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// View matrix looking along the forward direction
    pub fn view_matrix(&self) -> [[f32; 4]; 4] {
        look_at_matrix(self.position, self.position + self.forward(), Vec3::Y)
    }

    /// Perspective projection for the current fov
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> [[f32; 4]; 4] {
        perspective_matrix(self.fov.to_radians(), aspect, near, far)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraControl for Camera {
    fn move_local_xz(&mut self, forward: f32, right: f32) {
        // Movement follows the full look direction, vertical component
        // included, so flying toward what you look at feels natural.
        self.position += self.forward() * forward + self.right() * right;
    }

    fn move_y(&mut self, delta: f32) {
        self.position.y += delta;
    }

    fn rotate_3d(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-self.pitch_limit, self.pitch_limit);
    }

    fn zoom(&mut self, delta: f32) {
        self.fov = (self.fov - delta).clamp(Self::FOV_MIN, Self::FOV_MAX);
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}

/// Column-major perspective projection matrix
pub fn perspective_matrix(fov_y: f32, aspect: f32, near: f32, far: f32) -> [[f32; 4]; 4] {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, (far + near) * nf, -1.0],
        [0.0, 0.0, 2.0 * far * near * nf, 0.0],
    ]
}

/// Column-major look-at view matrix
pub fn look_at_matrix(eye: Vec3, target: Vec3, up: Vec3) -> [[f32; 4]; 4] {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_default_looks_down_negative_z() {
        let camera = Camera::new();
        let fwd = camera.forward();
        assert!(approx_eq(fwd.x, 0.0), "forward: {:?}", fwd);
        assert!(approx_eq(fwd.y, 0.0));
        assert!(approx_eq(fwd.z, -1.0));
    }

    #[test]
    fn test_pitch_clamped() {
        let mut camera = Camera::new();
        camera.rotate_3d(0.0, 10.0);
        assert!(approx_eq(camera.pitch(), 89.0f32.to_radians()));
        camera.rotate_3d(0.0, -20.0);
        assert!(approx_eq(camera.pitch(), -89.0f32.to_radians()));
    }

    #[test]
    fn test_fov_clamped() {
        let mut camera = Camera::new();
        camera.zoom(100.0);
        assert_eq!(camera.fov, Camera::FOV_MIN);
        camera.zoom(-100.0);
        assert_eq!(camera.fov, Camera::FOV_MAX);
    }

    #[test]
    fn test_zoom_in_narrows_fov() {
        let mut camera = Camera::new().with_fov(30.0);
        camera.zoom(5.0);
        assert_eq!(camera.fov, 25.0);
    }

    #[test]
    fn test_move_forward_follows_look() {
        let mut camera = Camera::new();
        let start = camera.position;
        camera.move_local_xz(2.0, 0.0);
        assert!(approx_eq(camera.position.z, start.z - 2.0));
        assert!(approx_eq(camera.position.x, start.x));
    }

    #[test]
    fn test_strafe_is_horizontal() {
        let mut camera = Camera::new();
        // Look steeply downward, then strafe: no vertical drift
        camera.rotate_3d(0.0, -1.0);
        let y_before = camera.position.y;
        camera.move_local_xz(0.0, 1.0);
        assert!(approx_eq(camera.position.y, y_before));
    }

    #[test]
    fn test_reset() {
        let mut camera = Camera::new().with_position(Vec3::new(1.0, 2.0, 3.0));
        camera.rotate_3d(0.5, 0.3);
        camera.zoom(10.0);
        camera.move_y(5.0);
        camera.reset();
        assert_eq!(camera.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.pitch(), 0.0);
        assert_eq!(camera.fov, Camera::FOV_MAX);
    }

    #[test]
    fn test_view_matrix_at_origin_identityish() {
        // Looking down -Z from the origin: view matrix is the identity
        let camera = Camera::new().with_position(Vec3::ZERO);
        let m = camera.view_matrix();
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(approx_eq(m[i][j], expected), "m[{}][{}] = {}", i, j, m[i][j]);
            }
        }
    }

    #[test]
    fn test_perspective_matrix_shape() {
        let proj = perspective_matrix(std::f32::consts::FRAC_PI_4, 1.0, 0.1, 100.0);
        assert!(proj[0][0] != 0.0);
        assert!(proj[1][1] != 0.0);
        assert_eq!(proj[2][3], -1.0);
    }
}
