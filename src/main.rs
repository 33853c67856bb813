//! Crossline - line/triangle intersection demo
//!
//! Renders a scene of triangles and line segments, recolors every
//! intersecting line/triangle pair once at startup, and lets you fly
//! around the result with FPS-style controls.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Fullscreen, Window, WindowId},
};

use crossline::config::AppConfig;
use crossline::scene::build_demo_scene;
use crossline_core::{mark_intersections, Scene, Vec3};
use crossline_input::CameraController;
use crossline_render::{
    camera::Camera,
    context::RenderContext,
    geometry::SceneGeometry,
    pipeline::{ScenePipeline, SceneUniforms},
};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    scene_pipeline: Option<ScenePipeline>,
    /// GPU-ready geometry, flattened once after the intersection pass
    geometry: SceneGeometry,
    camera: Camera,
    controller: CameraController,
    last_frame: std::time::Instant,
    cursor_captured: bool,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        // Build or load the scene
        let mut scene = if config.scene.path.is_empty() {
            build_demo_scene()
        } else {
            Scene::load(&config.scene.path).unwrap_or_else(|e| {
                panic!("Failed to load scene '{}': {}", config.scene.path, e);
            })
        };

        log::info!(
            "Scene '{}': {} triangles, {} lines",
            scene.name,
            scene.triangle_count(),
            scene.line_count()
        );

        // One-shot intersection pass, before anything reaches the GPU
        let hits = mark_intersections(&mut scene);
        log::info!("Intersection pass marked {} line/triangle pairs", hits);

        let geometry = SceneGeometry::from_scene(&scene);

        let camera = Camera::new()
            .with_position(Vec3::from_array(config.camera.start_position))
            .with_fov(config.camera.fov)
            .with_pitch_limit(config.camera.pitch_limit);

        // Configure controller from config
        let controller = CameraController::new()
            .with_move_speed(config.input.move_speed)
            .with_mouse_sensitivity(config.input.mouse_sensitivity)
            .with_smoothing_half_life(config.input.smoothing_half_life)
            .with_smoothing(config.input.smoothing_enabled);

        Self {
            config,
            window: None,
            render_context: None,
            scene_pipeline: None,
            geometry,
            camera,
            controller,
            last_frame: std::time::Instant::now(),
            cursor_captured: false,
        }
    }

    /// Capture cursor for FPS-style controls
    fn capture_cursor(&mut self) {
        if let Some(window) = &self.window {
            // Try Locked mode first (best for FPS), fall back to Confined
            let grab_result = window.set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));

            if grab_result.is_ok() {
                window.set_cursor_visible(false);
                self.cursor_captured = true;
                log::info!("Cursor captured - Escape to release");
            } else {
                log::warn!("Failed to capture cursor");
            }
        }
    }

    /// Release cursor
    fn release_cursor(&mut self) {
        if let Some(window) = &self.window {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
            self.cursor_captured = false;
            log::info!("Cursor released - click to capture");
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            if self.config.window.fullscreen {
                window.set_fullscreen(Some(Fullscreen::Borderless(None)));
            }

            // Create render context and pipeline
            let render_context = pollster::block_on(RenderContext::new(
                window.clone(),
                self.config.window.vsync,
            ));

            let mut scene_pipeline = ScenePipeline::new(
                &render_context.device,
                render_context.config.format,
            );

            scene_pipeline.ensure_depth_texture(
                &render_context.device,
                render_context.size.width,
                render_context.size.height,
            );

            scene_pipeline.upload_scene(&render_context.device, &self.geometry);

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.scene_pipeline = Some(scene_pipeline);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
                if let (Some(ctx), Some(scene_pipeline)) =
                    (&self.render_context, &mut self.scene_pipeline)
                {
                    scene_pipeline.ensure_depth_texture(
                        &ctx.device,
                        physical_size.width,
                        physical_size.height,
                    );
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    // Handle special keys on press
                    if event.state == ElementState::Pressed {
                        match key {
                            KeyCode::Escape => {
                                // Escape releases cursor first, then exits if pressed again
                                if self.cursor_captured {
                                    self.release_cursor();
                                } else {
                                    event_loop.exit();
                                }
                                return;
                            }
                            KeyCode::KeyR => {
                                self.camera.reset();
                                log::info!("Camera reset to starting position");
                            }
                            KeyCode::KeyF => {
                                if let Some(window) = &self.window {
                                    let new_fullscreen = if window.fullscreen().is_some() {
                                        None
                                    } else {
                                        Some(Fullscreen::Borderless(None))
                                    };
                                    window.set_fullscreen(new_fullscreen);
                                }
                            }
                            KeyCode::KeyG => {
                                let enabled = self.controller.toggle_smoothing();
                                log::info!("Input smoothing: {}", if enabled { "ON" } else { "OFF" });
                            }
                            _ => {}
                        }
                    }
                    // Pass to controller for movement keys
                    self.controller.process_keyboard(key, event.state);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                // Click to capture cursor (FPS style)
                if state == ElementState::Pressed && button == MouseButton::Left && !self.cursor_captured {
                    self.capture_cursor();
                }
                self.controller.process_mouse_button(button, state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                // Scroll wheel zooms by narrowing the field of view
                let scroll = match delta {
                    winit::event::MouseScrollDelta::LineDelta(_, y) => y,
                    winit::event::MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                self.controller.process_scroll(scroll);
            }

            WindowEvent::RedrawRequested => {
                // Calculate delta time
                let now = std::time::Instant::now();
                let raw_dt = (now - self.last_frame).as_secs_f32();
                // Cap dt to prevent huge movement steps after window focus
                let dt = raw_dt.min(1.0 / 30.0);
                self.last_frame = now;

                // Apply movement and mouse look
                self.controller.update(&mut self.camera, dt, self.cursor_captured);

                // Update window title with debug info
                if let Some(window) = &self.window {
                    let pos = self.camera.position;
                    let base_title = &self.config.window.title;
                    let hint = if self.cursor_captured {
                        "Esc to release"
                    } else {
                        "Click to capture"
                    };
                    let title = format!(
                        "{} - ({:.1}, {:.1}, {:.1}) fov:{:.0} [{}]",
                        base_title, pos.x, pos.y, pos.z, self.camera.fov, hint
                    );
                    window.set_title(&title);
                }

                // Render
                if let (Some(ctx), Some(scene_pipeline)) =
                    (&self.render_context, &self.scene_pipeline)
                {
                    let uniforms = SceneUniforms {
                        view: self.camera.view_matrix(),
                        projection: self.camera.projection_matrix(
                            ctx.aspect_ratio(),
                            self.config.camera.near,
                            self.config.camera.far,
                        ),
                    };
                    scene_pipeline.update_uniforms(&ctx.queue, &uniforms);

                    // Get surface texture
                    let output = match ctx.surface.get_current_texture() {
                        Ok(output) => output,
                        Err(wgpu::SurfaceError::Lost) => {
                            if let Some(ctx) = &mut self.render_context {
                                ctx.resize(ctx.size);
                            }
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                            return;
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("Surface error: {:?}", e);
                            return;
                        }
                    };

                    let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

                    let mut encoder = ctx.device.create_command_encoder(
                        &wgpu::CommandEncoderDescriptor {
                            label: Some("Render Encoder"),
                        },
                    );

                    let bg = &self.config.rendering.background_color;
                    scene_pipeline.render(
                        &mut encoder,
                        &view,
                        wgpu::Color {
                            r: bg[0] as f64,
                            g: bg[1] as f64,
                            b: bg[2] as f64,
                            a: bg[3] as f64,
                        },
                    );

                    ctx.queue.submit(std::iter::once(encoder.finish()));
                    output.present();
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.controller.process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting Crossline");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
