//! Terra3D demo: a small planetary scene driven by a winit event loop.
//!
//! The demo owns the window, forwards input events to the scene's
//! camera, and runs the frame loop: draw first, then advance time, so
//! the very first frame presents the scene's initial state. Rendering
//! backends are separate plugins; the demo runs the full scene loop
//! through a counting queue instead.

use std::sync::{Arc, Mutex};

use terra_3d_engine::glam::{Quat, Vec3};
use terra_3d_engine::terra3d::render::{DrawCall, FrameState, RenderQueue};
use terra_3d_engine::terra3d::resource::{Geometry, MaterialParams};
use terra_3d_engine::terra3d::scene::{LightMarker, Planet, Satellite, Scene};
use terra_3d_engine::terra3d::utils::{FpsCounter, FrameTimer};
use terra_3d_engine::terra3d::{Key, KeyAction, Light, Result};
use terra_3d_engine::{engine_error, engine_info, engine_trace};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const WINDOW_TITLE: &str = "Terra3D";
const WINDOW_WIDTH: f64 = 1280.0;
const WINDOW_HEIGHT: f64 = 720.0;

const EARTH_RADIUS: f32 = 6.4;
const MOON_RADIUS: f32 = 1.7;
const MOON_ORBIT_RADIUS: f32 = 19.0;
const LIGHT_POSITION: Vec3 = Vec3::new(30.0, 20.0, 0.0);

// ============================================================================
// BACKEND STAND-IN
// ============================================================================

/// Render queue that only counts and traces submissions. Stands in for
/// a backend plugin so the frame loop runs unchanged without one.
struct StatsQueue {
    draw_calls: u32,
}

impl StatsQueue {
    fn new() -> Self {
        Self { draw_calls: 0 }
    }
}

impl RenderQueue for StatsQueue {
    fn begin_frame(&mut self, frame: &FrameState) -> Result<()> {
        self.draw_calls = 0;
        engine_trace!("terra3d_demo", "frame begin, t={:.3}s", frame.time);
        Ok(())
    }

    fn submit(&mut self, call: DrawCall) -> Result<()> {
        self.draw_calls += 1;
        engine_trace!(
            "terra3d_demo",
            "submit '{}' ({} triangles)",
            call.geometry.name(),
            call.geometry.triangle_count()
        );
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        engine_trace!("terra3d_demo", "frame end, {} draw calls", self.draw_calls);
        Ok(())
    }
}

// ============================================================================
// SCENE ASSEMBLY
// ============================================================================

fn build_scene() -> Result<Scene> {
    let mut scene = Scene::new();
    let sphere = Geometry::uv_sphere("sphere", 200)?;

    scene.set_light(Arc::new(Mutex::new(
        Light::new(LIGHT_POSITION, Vec3::ONE, 3.0).with_orbit_speed(0.2),
    )));
    scene.add_drawable(Arc::new(Mutex::new(LightMarker::new(LIGHT_POSITION))));

    let moon = Satellite::new(
        "moon",
        MOON_RADIUS,
        Arc::clone(&sphere),
        Vec3::ZERO,
        MOON_ORBIT_RADIUS,
        0.1,
    )
    .with_material(
        MaterialParams::default()
            .with_base_color(Vec3::splat(0.45))
            .with_roughness(0.9),
    );
    scene.add_drawable(Arc::new(Mutex::new(moon)));

    // Order matters: the earth is the enclosing body and must go in
    // last so everything added before it composites over it.
    let earth = Planet::new("earth", Vec3::ZERO, EARTH_RADIUS, sphere)
        .with_material(
            MaterialParams::default()
                .with_base_color(Vec3::new(0.1, 0.3, 0.7))
                .with_roughness(0.6),
        )
        .with_spin_rate(0.3)
        .with_axis_tilt(Quat::from_rotation_z(23.4f32.to_radians()));
    scene.add_drawable(Arc::new(Mutex::new(earth)));

    engine_info!(
        "terra3d_demo",
        "scene assembled: {} drawables",
        scene.drawable_count()
    );
    Ok(scene)
}

// ============================================================================
// INPUT MAPPING
// ============================================================================

fn map_key(key: PhysicalKey) -> Key {
    match key {
        PhysicalKey::Code(KeyCode::KeyW) => Key::W,
        PhysicalKey::Code(KeyCode::KeyA) => Key::A,
        PhysicalKey::Code(KeyCode::KeyS) => Key::S,
        PhysicalKey::Code(KeyCode::KeyD) => Key::D,
        PhysicalKey::Code(KeyCode::ArrowUp) => Key::Up,
        PhysicalKey::Code(KeyCode::ArrowDown) => Key::Down,
        PhysicalKey::Code(KeyCode::ArrowLeft) => Key::Left,
        PhysicalKey::Code(KeyCode::ArrowRight) => Key::Right,
        PhysicalKey::Code(KeyCode::Home) => Key::Home,
        _ => Key::Other,
    }
}

// ============================================================================
// APPLICATION
// ============================================================================

struct DemoApp {
    window: Option<Window>,
    scene: Scene,
    queue: StatsQueue,
    frame_timer: FrameTimer,
    fps: FpsCounter,
    dragging: bool,
    cursor: (f32, f32),
}

impl DemoApp {
    fn new(scene: Scene) -> Self {
        Self {
            window: None,
            scene,
            queue: StatsQueue::new(),
            frame_timer: FrameTimer::new(),
            fps: FpsCounter::new(),
            dragging: false,
            cursor: (0.0, 0.0),
        }
    }

    fn with_camera(&self, f: impl FnOnce(&mut terra_3d_engine::terra3d::Camera)) {
        let camera = self.scene.camera();
        if let Ok(mut camera) = camera.lock() {
            f(&mut camera);
        };
    }

    fn render_frame(&mut self) {
        // Draw first, then advance time: the first frame presents the
        // initial state, and later frames step by the measured delta.
        if let Err(err) = self.scene.draw(&mut self.queue) {
            engine_error!("terra3d_demo", "frame failed: {}", err);
        }
        self.scene.update(self.frame_timer.elapsed_seconds());
        self.frame_timer.start();

        if let Some(window) = &self.window {
            if self.fps.update() {
                window.set_title(&format!("{} - {} FPS", WINDOW_TITLE, self.fps.fps()));
            }
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));
        match event_loop.create_window(attributes) {
            Ok(window) => {
                let size = window.inner_size();
                self.with_camera(|camera| {
                    camera.set_viewport_size(size.width as f32, size.height as f32);
                });
                window.request_redraw();
                self.window = Some(window);
                self.frame_timer.start();
            }
            Err(err) => {
                engine_error!("terra3d_demo", "window creation failed: {}", err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                // Minimized windows report zero dimensions; skip them.
                if size.width > 0 && size.height > 0 {
                    self.with_camera(|camera| {
                        camera.set_viewport_size(size.width as f32, size.height as f32);
                    });
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape) {
                    event_loop.exit();
                    return;
                }
                let action = match (event.state, event.repeat) {
                    (ElementState::Pressed, false) => KeyAction::Press,
                    (ElementState::Pressed, true) => KeyAction::Repeat,
                    (ElementState::Released, _) => KeyAction::Release,
                };
                let key = map_key(event.physical_key);
                self.with_camera(|camera| camera.key_event(key, action));
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if button != MouseButton::Left {
                    return;
                }
                match state {
                    ElementState::Pressed => {
                        self.dragging = true;
                        let (x, y) = self.cursor;
                        self.with_camera(|camera| camera.mouse_button_event(x, y));
                    }
                    ElementState::Released => self.dragging = false,
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                if self.dragging {
                    let (x, y) = self.cursor;
                    self.with_camera(|camera| camera.mouse_motion_event(x, y));
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let (dx, dy) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (x, y),
                    // Pixel deltas come from touchpads; scale them to
                    // roughly one line per 20px.
                    MouseScrollDelta::PixelDelta(pos) => {
                        (pos.x as f32 / 20.0, pos.y as f32 / 20.0)
                    }
                };
                self.with_camera(|camera| camera.mouse_scroll_event(dx, dy));
            }

            WindowEvent::RedrawRequested => self.render_frame(),

            _ => {}
        }
    }
}

fn main() {
    engine_info!("terra3d_demo", "starting {}", WINDOW_TITLE);

    let scene = match build_scene() {
        Ok(scene) => scene,
        Err(err) => {
            engine_error!("terra3d_demo", "scene assembly failed: {}", err);
            std::process::exit(1);
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            engine_error!("terra3d_demo", "event loop creation failed: {}", err);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new(scene);
    if let Err(err) = event_loop.run_app(&mut app) {
        engine_error!("terra3d_demo", "event loop failed: {}", err);
        std::process::exit(1);
    }
}
