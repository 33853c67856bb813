//! Input handling for the Crossline demo
//!
//! Provides [`CameraController`], which accumulates winit key and mouse
//! events and drives any camera implementing [`CameraControl`].

mod camera_controller;

pub use camera_controller::{CameraController, CameraControl};
