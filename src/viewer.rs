//! Standalone window backed by winit that drives a [`CameraRig`].
//!
//! Nothing is rendered; the window title reports the active mode and
//! camera pose whenever it changes, which makes the viewer useful for
//! trying out option presets and input bindings.
//!
//! Controls: orbit with the left mouse button, dolly with the middle
//! button or wheel, pan with the right button or arrow keys. `Tab`
//! switches to first-person mode; click to lock the pointer, walk with
//! WASD, jump with space, sprint with shift, and press `Escape` to
//! release the pointer.
//!
//! ```no_run
//! # use pivot::Viewer;
//! Viewer::builder()
//!     .with_title("Pivot")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use glam::{Vec2, Vec3};
use rustc_hash::FxHashMap;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseScrollDelta, TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    camera::{Camera, FlatGround, Viewport},
    error::PivotError,
    input::{ControlMode, InputEvent, MouseButton, TouchPoints},
    options::Options,
    rig::{CameraCommand, CameraRig},
    util::frame_timing::FrameClock,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    target: Vec3,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Pivot", orbiting the
    /// origin, default options).
    fn new() -> Self {
        Self {
            options: None,
            target: Vec3::new(0.0, 10.0, 0.0),
            title: "Pivot".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the initial orbit target.
    #[must_use]
    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            target: self.target,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window driven by the camera controllers.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    target: Vec3,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), PivotError> {
        let event_loop = EventLoop::new().map_err(|e| PivotError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            rig: None,
            clock: FrameClock::new(self.options.frame.max_frame_dt),
            ground: FlatGround::new(0.0, self.options.first_person.probe_range),
            touches: FxHashMap::default(),
            options: self.options,
            target: self.target,
            title: self.title,
        };
        event_loop
            .run_app(&mut app)
            .map_err(|e| PivotError::Viewer(e.to_string()))
    }
}

// ── Event loop ───────────────────────────────────────────────────────────

struct ViewerApp {
    window: Option<Arc<Window>>,
    rig: Option<CameraRig>,
    clock: FrameClock,
    ground: FlatGround,
    /// Active touch contacts by winit touch id.
    touches: FxHashMap<u64, Vec2>,
    options: Options,
    target: Vec3,
    title: String,
}

impl ViewerApp {
    fn forward(&mut self, event: InputEvent) {
        if let Some(rig) = &mut self.rig {
            let _ = rig.handle_event(event);
        }
    }

    fn set_pointer_lock(&mut self, locked: bool) {
        let Some(window) = &self.window else {
            return;
        };
        let granted = if locked {
            window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
                .map_err(|e| log::warn!("pointer lock unavailable: {e}"))
                .is_ok()
        } else {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            true
        };
        if granted {
            window.set_cursor_visible(!locked);
            self.forward(InputEvent::PointerLockChanged { locked });
        }
    }

    fn toggle_mode(&mut self) {
        let Some(rig) = &mut self.rig else {
            return;
        };
        let next = match rig.mode() {
            ControlMode::Orbit => ControlMode::FirstPerson,
            ControlMode::FirstPerson => ControlMode::Orbit,
        };
        rig.execute(CameraCommand::SwitchMode { mode: next });
        if next == ControlMode::Orbit {
            self.set_pointer_lock(false);
        }
    }

    fn handle_key(&mut self, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::Tab if pressed => self.toggle_mode(),
            KeyCode::Escape if pressed => self.set_pointer_lock(false),
            _ => {
                if let Some(rig) = &mut self.rig {
                    let _ = rig.handle_key(&format!("{code:?}"), pressed);
                }
            }
        }
    }

    fn handle_touch(&mut self, id: u64, phase: TouchPhase, location: Vec2) {
        match phase {
            TouchPhase::Started | TouchPhase::Moved => {
                let _ = self.touches.insert(id, location);
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                let _ = self.touches.remove(&id);
            }
        }
        let mut ids: Vec<u64> = self.touches.keys().copied().collect();
        ids.sort_unstable();
        let points = match ids.as_slice() {
            [] => None,
            [a] => Some(TouchPoints::One(self.touches[a])),
            [a, b, ..] => Some(TouchPoints::Two(self.touches[a], self.touches[b])),
        };
        let event = match (phase, points) {
            (_, None) => InputEvent::TouchEnd,
            (TouchPhase::Moved, Some(points)) => InputEvent::TouchMove { points },
            (_, Some(points)) => InputEvent::TouchStart { points },
        };
        self.forward(event);
    }

    fn frame(&mut self) {
        let dt = self.clock.tick();
        let Some(rig) = &mut self.rig else {
            return;
        };
        if rig.update(dt, &self.ground) {
            let p = rig.camera().position;
            log::debug!("camera moved to ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z);
            if let Some(window) = &self.window {
                window.set_title(&format!(
                    "{} | {:?} | ({:.1}, {:.1}, {:.1}) | {:.0} fps",
                    self.title,
                    rig.mode(),
                    p.x,
                    p.y,
                    p.z,
                    self.clock.fps()
                ));
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes().with_title(self.title.clone());
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let viewport = Viewport::new(size.width, size.height);
        let camera = Camera::perspective(
            self.target + Vec3::new(0.0, 20.0, 60.0),
            self.target,
            60.0,
            viewport.aspect(),
            0.1,
            2000.0,
        );
        self.rig = Some(CameraRig::new(camera, self.target, viewport, self.options.clone()));
        log::info!("viewer started ({}x{})", size.width, size.height);
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => self.forward(InputEvent::Resized {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::RedrawRequested => {
                self.frame();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }
            WindowEvent::MouseInput { button, state, .. } => {
                let pressed = state == ElementState::Pressed;
                let locked = self.rig.as_ref().is_some_and(|rig| rig.input().pointer_locked());
                let walking = self
                    .rig
                    .as_ref()
                    .is_some_and(|rig| rig.mode() == ControlMode::FirstPerson);
                if pressed && walking && !locked {
                    self.set_pointer_lock(true);
                }
                self.forward(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed,
                });
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.forward(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }
            WindowEvent::CursorLeft { .. } => self.forward(InputEvent::CursorLeft),
            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports scrolling away from the user as positive.
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.forward(InputEvent::Scroll { delta: -notches });
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.forward(InputEvent::ModifiersChanged {
                    shift: modifiers.state().shift_key(),
                });
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.handle_key(code, event.state == ElementState::Pressed);
            }
            WindowEvent::Touch(touch) => {
                let location = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                self.handle_touch(touch.id, touch.phase, location);
            }
            _ => (),
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.forward(InputEvent::MouseMotion {
                dx: dx as f32,
                dy: dy as f32,
            });
        }
    }
}
