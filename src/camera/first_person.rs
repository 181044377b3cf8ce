//! Pointer-locked first-person controller with simple walking physics.
//!
//! Look input turns a yaw/pitch pair directly. Movement is integrated
//! once per frame: friction and gravity decay the velocity, held movement
//! commands accelerate it in the yaw-local frame, and a ground query plus
//! a hard floor keep the controller from falling forever. World +Y is up.

use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Quat, Vec3};

use super::core::Camera;
use super::ground::GroundSensor;
use super::sanitize_dt;
use crate::input::{ControlCommands, MotionCommand};
use crate::options::FirstPersonOptions;

/// Position and view angles produced by [`FirstPersonController::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Feet position in world space.
    pub position: Vec3,
    /// Rotation around world +Y in radians.
    pub yaw: f32,
    /// Rotation around the local X axis in radians, within ±π/2.
    pub pitch: f32,
}

impl Pose {
    /// Camera orientation: yaw around +Y, then pitch around local X.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// World-space view direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Write this pose into `camera`, lifting the eye `eye_height` above
    /// the feet.
    pub fn apply_to(&self, camera: &mut Camera, eye_height: f32) {
        camera.position = self.position + Vec3::Y * eye_height;
        camera.orientation = self.rotation();
    }
}

/// Walks a camera around with gravity, jumping and a hard floor.
///
/// ```
/// # use glam::Vec3;
/// # use pivot::camera::{Camera, FirstPersonController, NoGround};
/// # use pivot::input::MotionCommand;
/// # use pivot::options::FirstPersonOptions;
/// let camera = Camera::perspective(
///     Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, 10.0, -1.0), 75.0, 1.5, 0.1, 1000.0,
/// );
/// let mut walker = FirstPersonController::new(&camera, FirstPersonOptions::default());
/// walker.set_command(MotionCommand::MoveForward, true);
/// let pose = walker.update(1.0 / 60.0, &NoGround);
/// assert!(pose.position.z < 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct FirstPersonController {
    /// Look sensitivity and locomotion constants.
    pub options: FirstPersonOptions,
    position: Vec3,
    yaw: f32,
    pitch: f32,
    velocity: Vec3,
    can_jump: bool,
    commands: ControlCommands,
}

impl FirstPersonController {
    /// Start from the camera's current position and heading. Roll is
    /// discarded and pitch is clamped to ±π/2.
    #[must_use]
    pub fn new(camera: &Camera, options: FirstPersonOptions) -> Self {
        let (yaw, pitch, _roll) = camera.orientation.to_euler(EulerRot::YXZ);
        Self {
            position: camera.position - Vec3::Y * options.eye_height,
            options,
            yaw,
            pitch: clamp_pitch(pitch),
            velocity: Vec3::ZERO,
            can_jump: false,
            commands: ControlCommands::default(),
        }
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            yaw: self.yaw,
            pitch: self.pitch,
        }
    }

    /// Feet position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport to `position`, keeping velocity.
    pub fn set_position(&mut self, position: Vec3) {
        if position.is_finite() {
            self.position = position;
        }
    }

    /// Yaw in radians.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in radians.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Velocity in the yaw-local frame (−Z forward, +X right).
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Whether the controller is grounded and may jump.
    #[must_use]
    pub fn can_jump(&self) -> bool {
        self.can_jump
    }

    /// Held command flags.
    #[must_use]
    pub fn commands(&self) -> &ControlCommands {
        &self.commands
    }

    /// Turn by a raw pointer delta in pixels. Moving right turns right,
    /// moving down looks down.
    pub fn apply_look(&mut self, dx: f32, dy: f32) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.yaw -= dx * self.options.sensitivity;
        self.pitch = clamp_pitch(self.pitch - dy * self.options.sensitivity);
    }

    /// Press or release a movement command. A held jump fires each time
    /// the controller is grounded.
    pub fn set_command(&mut self, command: MotionCommand, active: bool) {
        self.commands.set(command, active);
    }

    /// Stop all motion (used when pointer lock is lost).
    pub fn halt(&mut self) {
        self.velocity = Vec3::ZERO;
    }

    /// Stop all motion and release every held command.
    pub fn flush(&mut self) {
        self.halt();
        self.commands.clear();
    }

    /// Integrate one frame of `dt` seconds and return the new pose.
    /// Negative or non-finite `dt` is treated as zero.
    pub fn update<G>(&mut self, dt: f32, ground: &G) -> Pose
    where
        G: GroundSensor + ?Sized,
    {
        let dt = sanitize_dt(dt);
        let opts = &self.options;

        self.velocity.x -= self.velocity.x * opts.friction * dt;
        self.velocity.z -= self.velocity.z * opts.friction * dt;
        self.velocity.y -= opts.gravity * opts.mass * dt;

        let intent = self.commands.intent();
        if self.commands.longitudinal() {
            self.velocity.z += intent.z * opts.acceleration * dt;
        }
        if self.commands.lateral() {
            self.velocity.x += intent.x * opts.acceleration * dt;
        }

        if ground.probe(self.position) {
            self.velocity.y = self.velocity.y.max(0.0);
            self.can_jump = true;
        }
        if self.commands.jump && self.can_jump {
            self.velocity.y = opts.jump_impulse;
            self.can_jump = false;
        }

        // Sprinting stretches the step for translation only; velocity
        // integration above always uses the real frame time.
        let step = if self.commands.double_speed {
            dt * opts.speed_multiplier
        } else {
            dt
        };
        self.position += Quat::from_rotation_y(self.yaw) * (self.velocity * step);

        if self.position.y < opts.ground_offset {
            self.position.y = opts.ground_offset;
            self.velocity.y = 0.0;
            self.can_jump = true;
        }
        self.pose()
    }
}

fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-FRAC_PI_2, FRAC_PI_2)
}
