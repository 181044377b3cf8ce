//! Host-facing driver that owns the camera, the active controller, and
//! the input processor.
//!
//! Exactly one controller owns the camera at a time. Switching flushes
//! the outgoing controller, detaches its listeners, and builds the
//! incoming one from the current camera pose so control resumes without
//! a jump.
//!
//! # Frame loop
//!
//! ```ignore
//! let mut rig = CameraRig::new(camera, Vec3::ZERO, viewport, options);
//! // per event:
//! rig.handle_event(event);
//! rig.handle_key("KeyW", true);
//! // per frame:
//! if rig.update(clock.tick(), &ground) {
//!     upload(rig.uniform());
//! }
//! ```

/// The rig's command vocabulary.
pub mod command;
mod input;

use glam::{Quat, Vec3};

pub use command::CameraCommand;

use crate::camera::{
    pose_changed, sanitize_dt, Camera, CameraUniform, FirstPersonController, GroundSensor,
    OrbitController, Viewport,
};
use crate::input::{ControlMode, InputProcessor};
use crate::options::Options;

/// Smallest orbit distance used when returning from first-person mode.
const MIN_RETURN_DISTANCE: f32 = 1e-3;

/// The controller currently driving the camera.
#[derive(Debug, Clone)]
pub enum ActiveController {
    /// Orbiting a target.
    Orbit(OrbitController),
    /// Walking.
    FirstPerson(FirstPersonController),
}

impl ActiveController {
    /// Mode this controller implements.
    #[must_use]
    pub fn mode(&self) -> ControlMode {
        match self {
            Self::Orbit(_) => ControlMode::Orbit,
            Self::FirstPerson(_) => ControlMode::FirstPerson,
        }
    }

    /// Drop pending motion so nothing carries over to a later activation.
    pub fn flush(&mut self) {
        match self {
            Self::Orbit(orbit) => orbit.flush(),
            Self::FirstPerson(walker) => walker.flush(),
        }
    }
}

/// Camera, active controller, and input processor bundled for a host.
pub struct CameraRig {
    camera: Camera,
    active: ActiveController,
    input: InputProcessor,
    viewport: Viewport,
    options: Options,
    /// Orbit radius when orbit mode was last left.
    orbit_distance: f32,
    last_position: Vec3,
    last_orientation: Quat,
}

impl CameraRig {
    /// Start in orbit mode around `target`.
    #[must_use]
    pub fn new(mut camera: Camera, target: Vec3, viewport: Viewport, options: Options) -> Self {
        camera.set_aspect(viewport.aspect());
        let orbit = OrbitController::new(&camera, target, viewport, options.orbit.clone());
        let mut input = InputProcessor::new(&options);
        input.attach(ControlMode::Orbit);
        Self {
            orbit_distance: camera.position.distance(target).max(MIN_RETURN_DISTANCE),
            last_position: camera.position,
            last_orientation: camera.orientation,
            camera,
            active: ActiveController::Orbit(orbit),
            input,
            viewport,
            options,
        }
    }

    // ── Accessors ──

    /// The driven camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access for host-side edits (projection, up axis).
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// GPU uniform for the current camera.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&self.camera);
        uniform
    }

    /// The controller currently driving the camera.
    #[must_use]
    pub fn active(&self) -> &ActiveController {
        &self.active
    }

    /// Mutable access to the active controller.
    pub fn active_mut(&mut self) -> &mut ActiveController {
        &mut self.active
    }

    /// Mode of the active controller.
    #[must_use]
    pub fn mode(&self) -> ControlMode {
        self.active.mode()
    }

    /// The input processor.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options, applying them to the active controller and the
    /// input bindings.
    pub fn set_options(&mut self, options: Options) {
        self.input.set_bindings(&options);
        match &mut self.active {
            ActiveController::Orbit(orbit) => orbit.options = options.orbit.clone(),
            ActiveController::FirstPerson(walker) => {
                walker.options = options.first_person.clone();
            }
        }
        self.options = options;
        log::debug!("rig options updated");
    }

    // ── Frame ──

    /// Advance the active controller by `dt` seconds (clamped to the
    /// configured maximum step) and return whether the camera changed.
    pub fn update<G>(&mut self, dt: f32, ground: &G) -> bool
    where
        G: GroundSensor + ?Sized,
    {
        let dt = sanitize_dt(dt).min(self.options.frame.max_frame_dt);
        match &mut self.active {
            ActiveController::Orbit(orbit) => orbit.update(&mut self.camera, dt),
            ActiveController::FirstPerson(walker) => {
                let pose = walker.update(dt, ground);
                pose.apply_to(&mut self.camera, walker.options.eye_height);
                let changed = pose_changed(
                    self.last_position,
                    self.last_orientation,
                    self.camera.position,
                    self.camera.orientation,
                );
                if changed {
                    self.last_position = self.camera.position;
                    self.last_orientation = self.camera.orientation;
                }
                changed
            }
        }
    }

    /// Apply a viewport resize to the camera and controllers.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        self.camera.set_aspect(self.viewport.aspect());
        if let ActiveController::Orbit(orbit) = &mut self.active {
            orbit.resize(self.viewport);
        }
        log::debug!("viewport resized to {width}x{height}");
    }

    // ── Mode switching ──

    /// Hand the camera to the controller for `mode`. No-op if it is
    /// already active.
    pub fn switch_to(&mut self, mode: ControlMode) {
        if mode == self.mode() {
            return;
        }
        self.active.flush();
        self.active = match mode {
            ControlMode::Orbit => {
                let target =
                    self.camera.position + self.camera.forward() * self.orbit_distance;
                ActiveController::Orbit(OrbitController::new(
                    &self.camera,
                    target,
                    self.viewport,
                    self.options.orbit.clone(),
                ))
            }
            ControlMode::FirstPerson => {
                if let ActiveController::Orbit(orbit) = &self.active {
                    self.orbit_distance =
                        orbit.target().distance(self.camera.position).max(MIN_RETURN_DISTANCE);
                }
                ActiveController::FirstPerson(FirstPersonController::new(
                    &self.camera,
                    self.options.first_person.clone(),
                ))
            }
        };
        self.last_position = self.camera.position;
        self.last_orientation = self.camera.orientation;
        self.input.attach(mode);
        log::info!("camera control switched to {mode:?}");
    }

    /// Switch to orbiting.
    pub fn switch_to_orbit(&mut self) {
        self.switch_to(ControlMode::Orbit);
    }

    /// Switch to first-person walking.
    pub fn switch_to_first_person(&mut self) {
        self.switch_to(ControlMode::FirstPerson);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::camera::{FlatGround, NoGround, Projection};
    use crate::input::{EventKind, InputEvent, MotionCommand, MouseButton};

    const DT: f32 = 1.0 / 60.0;

    fn rig() -> CameraRig {
        let camera = Camera::perspective(
            Vec3::new(0.0, 10.0, 50.0),
            Vec3::new(0.0, 10.0, 0.0),
            45.0,
            1.0,
            0.1,
            1000.0,
        );
        CameraRig::new(
            camera,
            Vec3::new(0.0, 10.0, 0.0),
            Viewport::new(800, 600),
            Options::default(),
        )
    }

    fn drag(rig: &mut CameraRig, from: Vec2, to: Vec2) {
        let _ = rig.handle_event(InputEvent::CursorMoved { x: from.x, y: from.y });
        let _ = rig.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        let _ = rig.handle_event(InputEvent::CursorMoved { x: to.x, y: to.y });
        let _ = rig.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
    }

    #[test]
    fn construction_applies_viewport_aspect() {
        let rig = rig();
        assert_eq!(rig.mode(), ControlMode::Orbit);
        assert_eq!(rig.input().mode(), Some(ControlMode::Orbit));
        match rig.camera().projection {
            Projection::Perspective { aspect, .. } => {
                assert!((aspect - 800.0 / 600.0).abs() < 1e-6);
            }
            _ => unreachable!("perspective camera"),
        }
    }

    #[test]
    fn mouse_drag_orbits() {
        let mut rig = rig();
        drag(&mut rig, Vec2::new(400.0, 300.0), Vec2::new(600.0, 300.0));
        assert!(rig.update(DT, &NoGround));
        assert!(rig.camera().position.abs_diff_eq(Vec3::new(-50.0, 10.0, 0.0), 1e-3));
        assert!(!rig.update(DT, &NoGround));
    }

    #[test]
    fn refused_drag_releases_listeners() {
        let mut rig = rig();
        let mut options = Options::default();
        options.orbit.enable_rotate = false;
        rig.set_options(options);

        let _ = rig.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        assert!(!rig.input().listeners().is_listening(EventKind::PointerMove));
        assert!(!rig.input().is_dragging());
    }

    #[test]
    fn wheel_and_reset_keys() {
        let mut rig = rig();
        assert!(rig.handle_event(InputEvent::Scroll { delta: -1.0 }));
        assert!(rig.update(DT, &NoGround));
        assert!((rig.camera().position.z - 47.5).abs() < 1e-3);

        assert!(rig.handle_key("Home", true));
        assert!((rig.camera().position.z - 50.0).abs() < 1e-3);
    }

    #[test]
    fn first_person_walks() {
        let mut rig = rig();
        rig.switch_to_first_person();
        assert_eq!(rig.input().mode(), Some(ControlMode::FirstPerson));
        assert!(!rig.input().listeners().is_listening(EventKind::Wheel));

        let _ = rig.handle_event(InputEvent::PointerLockChanged { locked: true });
        assert!(rig.handle_key("KeyW", true));
        let start = rig.camera().position;
        for _ in 0..10 {
            let _ = rig.update(DT, &FlatGround::new(0.0, 10.0));
        }
        assert!(rig.camera().position.z < start.z);
        assert_eq!(rig.camera().position.y, 10.0);

        assert!(rig.handle_event(InputEvent::MouseMotion { dx: 0.0, dy: 100.0 }));
        let _ = rig.update(DT, &NoGround);
        assert!(rig.camera().forward().y < 0.0);
    }

    #[test]
    fn losing_pointer_lock_stops_motion() {
        let mut rig = rig();
        rig.switch_to_first_person();
        let _ = rig.handle_event(InputEvent::PointerLockChanged { locked: true });
        let _ = rig.handle_key("KeyD", true);
        let _ = rig.update(DT, &NoGround);
        let _ = rig.handle_event(InputEvent::PointerLockChanged { locked: false });
        let ActiveController::FirstPerson(walker) = rig.active() else {
            unreachable!("first-person mode");
        };
        assert_eq!(walker.velocity(), Vec3::ZERO);
        assert!(!rig.handle_event(InputEvent::MouseMotion { dx: 5.0, dy: 0.0 }));
    }

    #[test]
    fn switching_flushes_and_keeps_the_view() {
        let mut rig = rig();
        rig.switch_to_first_person();
        let _ = rig.handle_key("KeyW", true);
        let _ = rig.update(DT, &NoGround);

        rig.switch_to_orbit();
        let ActiveController::Orbit(orbit) = rig.active() else {
            unreachable!("orbit mode");
        };
        assert!((orbit.target().distance(rig.camera().position) - 50.0).abs() < 1e-3);
        let before = rig.camera().position;
        assert!(!rig.update(DT, &NoGround));
        assert!(rig.camera().position.abs_diff_eq(before, 1e-3));

        // Held keys do not survive a round trip.
        rig.switch_to_first_person();
        let ActiveController::FirstPerson(walker) = rig.active() else {
            unreachable!("first-person mode");
        };
        assert!(!walker.commands().is_active(MotionCommand::MoveForward));
    }

    #[test]
    fn camera_on_its_target_returns_with_a_radius() {
        let camera = Camera::perspective(
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(0.0, 10.0, -1.0),
            45.0,
            1.0,
            0.1,
            1000.0,
        );
        let target = camera.position;
        let mut rig = CameraRig::new(camera, target, Viewport::new(800, 600), Options::default());
        rig.switch_to_first_person();
        rig.switch_to_orbit();
        let ActiveController::Orbit(orbit) = rig.active() else {
            unreachable!("orbit mode");
        };
        let radius = orbit.target().distance(rig.camera().position);
        assert!((radius - MIN_RETURN_DISTANCE).abs() < 1e-5);
        let _ = rig.update(DT, &NoGround);
        assert!(rig.camera().position.is_finite());
        assert!(rig.camera().orientation.is_finite());
    }

    #[test]
    fn update_clamps_long_frames() {
        let mut a = rig();
        let mut b = rig();
        for rig in [&mut a, &mut b] {
            rig.switch_to_first_person();
            let _ = rig.handle_key("KeyW", true);
        }
        let _ = a.update(5.0, &NoGround);
        let _ = b.update(Options::default().frame.max_frame_dt, &NoGround);
        assert_eq!(a.camera().position, b.camera().position);
    }

    #[test]
    fn resize_updates_viewport() {
        let mut rig = rig();
        assert!(rig.handle_event(InputEvent::Resized {
            width: 1000,
            height: 500,
        }));
        assert_eq!(rig.viewport(), Viewport::new(1000, 500));
        let ActiveController::Orbit(orbit) = rig.active() else {
            unreachable!("orbit mode");
        };
        assert_eq!(orbit.viewport(), Viewport::new(1000, 500));
    }

    #[test]
    fn switch_mode_command() {
        let mut rig = rig();
        rig.execute(CameraCommand::SwitchMode {
            mode: ControlMode::FirstPerson,
        });
        assert_eq!(rig.mode(), ControlMode::FirstPerson);
        // Orbit-only commands are ignored while walking.
        rig.execute(CameraCommand::Wheel { delta: -1.0 });
        assert!(!rig.update(DT, &NoGround));
    }
}
