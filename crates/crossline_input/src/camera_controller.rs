//! Camera controller for free-fly input handling
//!
//! Controls:
//! - W/S: Forward/backward
//! - A/D: Left/right strafe
//! - Space/Shift: Up/down
//! - Mouse: yaw/pitch look (when the cursor is captured or a button held)
//! - Scroll wheel: zoom (field of view)

use crossline_math::Vec3;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Camera controller for handling input
///
/// Accumulates key and mouse state between frames and applies it to any
/// [`CameraControl`] implementor in `update`. Clamping rules (pitch, fov)
/// belong to the camera, not the controller.
pub struct CameraController {
    // Movement state
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    up: bool,
    down: bool,

    // Mouse state
    mouse_pressed: bool,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,

    // Input smoothing state
    smooth_yaw: f32,
    smooth_pitch: f32,

    // Configuration
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
    pub smoothing_half_life: f32,
    pub smoothing_enabled: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            forward: false,
            backward: false,
            left: false,
            right: false,
            up: false,
            down: false,

            mouse_pressed: false,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 0.0,

            smooth_yaw: 0.0,
            smooth_pitch: 0.0,

            move_speed: 8.0,
            mouse_sensitivity: 0.002,
            smoothing_half_life: 0.05,
            smoothing_enabled: false,
        }
    }

    /// Process keyboard input
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::KeyW => { self.forward = pressed; true }
            KeyCode::KeyS => { self.backward = pressed; true }
            KeyCode::KeyA => { self.left = pressed; true }
            KeyCode::KeyD => { self.right = pressed; true }
            KeyCode::Space => { self.up = pressed; true }
            KeyCode::ShiftLeft | KeyCode::ShiftRight => { self.down = pressed; true }
            _ => false,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.mouse_pressed = state == ElementState::Pressed;
        }
    }

    /// Process mouse movement
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.pending_yaw += delta_x as f32;
        self.pending_pitch += delta_y as f32;
    }

    /// Process scroll wheel input (positive = zoom in)
    pub fn process_scroll(&mut self, delta: f32) {
        self.pending_zoom += delta;
    }

    /// Update the camera based on accumulated input
    ///
    /// When `cursor_captured` is true, free look is enabled (no click
    /// required). Returns the camera position for debug display.
    pub fn update<C: CameraControl>(&mut self, camera: &mut C, dt: f32, cursor_captured: bool) -> Vec3 {
        // Calculate movement deltas
        let fwd = (self.forward as i32 - self.backward as i32) as f32;
        let rgt = (self.right as i32 - self.left as i32) as f32;
        let up_down = (self.up as i32 - self.down as i32) as f32;

        // Apply movement
        camera.move_local_xz(fwd * self.move_speed * dt, rgt * self.move_speed * dt);
        camera.move_y(up_down * self.move_speed * dt);

        // Apply exponential smoothing to mouse input
        let (yaw_input, pitch_input) = if self.smoothing_enabled && dt > 0.0 {
            // new = old * factor + input * (1 - factor), factor = 2^(-dt / half_life)
            let smooth_factor = 2.0f32.powf(-dt / self.smoothing_half_life);
            self.smooth_yaw = self.smooth_yaw * smooth_factor + self.pending_yaw * (1.0 - smooth_factor);
            self.smooth_pitch = self.smooth_pitch * smooth_factor + self.pending_pitch * (1.0 - smooth_factor);
            (self.smooth_yaw, self.smooth_pitch)
        } else {
            (self.pending_yaw, self.pending_pitch)
        };

        // Free look when the cursor is captured, or while a button is held.
        // Mouse right (positive delta_x) turns the camera right; mouse down
        // (positive delta_y) looks down (negative pitch).
        if cursor_captured || self.mouse_pressed {
            camera.rotate_3d(
                yaw_input * self.mouse_sensitivity,
                -pitch_input * self.mouse_sensitivity,
            );
        }

        // Scroll zoom applies regardless of capture state
        if self.pending_zoom != 0.0 {
            camera.zoom(self.pending_zoom);
        }

        // Reset pending input
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.pending_zoom = 0.0;

        camera.position()
    }

    /// Check if any movement keys are pressed
    pub fn is_moving(&self) -> bool {
        self.forward || self.backward || self.left || self.right || self.up || self.down
    }

    /// Toggle input smoothing on/off
    pub fn toggle_smoothing(&mut self) -> bool {
        self.smoothing_enabled = !self.smoothing_enabled;
        // Reset smoothing state when toggling
        self.smooth_yaw = 0.0;
        self.smooth_pitch = 0.0;
        self.smoothing_enabled
    }

    /// Check if smoothing is enabled
    pub fn is_smoothing_enabled(&self) -> bool {
        self.smoothing_enabled
    }

    /// Builder: set movement speed
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Builder: set mouse sensitivity
    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    /// Builder: set smoothing half-life (lower = more responsive)
    pub fn with_smoothing_half_life(mut self, half_life: f32) -> Self {
        self.smoothing_half_life = half_life;
        self
    }

    /// Builder: enable or disable smoothing
    pub fn with_smoothing(mut self, enabled: bool) -> Self {
        self.smoothing_enabled = enabled;
        self
    }
}

/// Trait for camera control
/// Allows the controller to work with different camera implementations
pub trait CameraControl {
    fn move_local_xz(&mut self, forward: f32, right: f32);
    fn move_y(&mut self, delta: f32);
    fn rotate_3d(&mut self, delta_yaw: f32, delta_pitch: f32);
    fn zoom(&mut self, delta: f32);
    fn position(&self) -> Vec3;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records what the controller asked for
    #[derive(Default)]
    struct RecordingCamera {
        forward: f32,
        right: f32,
        vertical: f32,
        yaw: f32,
        pitch: f32,
        zoom: f32,
    }

    impl CameraControl for RecordingCamera {
        fn move_local_xz(&mut self, forward: f32, right: f32) {
            self.forward += forward;
            self.right += right;
        }
        fn move_y(&mut self, delta: f32) {
            self.vertical += delta;
        }
        fn rotate_3d(&mut self, delta_yaw: f32, delta_pitch: f32) {
            self.yaw += delta_yaw;
            self.pitch += delta_pitch;
        }
        fn zoom(&mut self, delta: f32) {
            self.zoom += delta;
        }
        fn position(&self) -> Vec3 {
            Vec3::ZERO
        }
    }

    #[test]
    fn test_wasd_movement() {
        let mut controller = CameraController::new().with_move_speed(2.0);
        let mut camera = RecordingCamera::default();

        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        controller.update(&mut camera, 0.5, true);

        assert_eq!(camera.forward, 1.0);
        assert_eq!(camera.right, 1.0);
        assert_eq!(camera.vertical, 0.0);

        controller.process_keyboard(KeyCode::KeyW, ElementState::Released);
        controller.process_keyboard(KeyCode::KeyD, ElementState::Released);
        assert!(!controller.is_moving());
    }

    #[test]
    fn test_opposed_keys_cancel() {
        let mut controller = CameraController::new();
        let mut camera = RecordingCamera::default();

        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyS, ElementState::Pressed);
        controller.update(&mut camera, 0.1, true);

        assert_eq!(camera.forward, 0.0);
    }

    #[test]
    fn test_mouse_look_requires_capture_or_button() {
        let mut controller = CameraController::new();
        let mut camera = RecordingCamera::default();

        controller.process_mouse_motion(10.0, 0.0);
        controller.update(&mut camera, 0.1, false);
        assert_eq!(camera.yaw, 0.0);

        controller.process_mouse_motion(10.0, 0.0);
        controller.update(&mut camera, 0.1, true);
        assert!(camera.yaw > 0.0);
    }

    #[test]
    fn test_mouse_down_pitches_down() {
        let mut controller = CameraController::new();
        let mut camera = RecordingCamera::default();

        controller.process_mouse_motion(0.0, 5.0);
        controller.update(&mut camera, 0.1, true);
        assert!(camera.pitch < 0.0);
    }

    #[test]
    fn test_pending_input_clears_after_update() {
        let mut controller = CameraController::new();
        let mut camera = RecordingCamera::default();

        controller.process_mouse_motion(10.0, 5.0);
        controller.process_scroll(1.0);
        controller.update(&mut camera, 0.1, true);
        let (yaw, zoom) = (camera.yaw, camera.zoom);

        controller.update(&mut camera, 0.1, true);
        assert_eq!(camera.yaw, yaw);
        assert_eq!(camera.zoom, zoom);
    }

    #[test]
    fn test_toggle_smoothing_resets_state() {
        let mut controller = CameraController::new();
        assert!(controller.toggle_smoothing());
        assert!(controller.is_smoothing_enabled());
        assert!(!controller.toggle_smoothing());
    }
}
