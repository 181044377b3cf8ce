//! Orbit controller: rotate, dolly, and pan a camera around a target.
//!
//! Gestures never move the camera directly. They accumulate into a pending
//! spherical delta, pan offset, and dolly scale, which [`OrbitController::update`]
//! folds into the camera pose once per frame.

use std::f32::consts::TAU;

use glam::{Quat, Vec2, Vec3};

use super::core::{Camera, Projection, Viewport};
use super::{pose_changed, sanitize_dt};
use crate::options::OrbitOptions;
use crate::util::spherical::Spherical;

/// Pending motion below this magnitude is dropped while damping.
const DAMPING_EPSILON: f32 = 1e-6;

/// Per-notch zoom factor before applying `zoom_speed`.
const ZOOM_BASE: f32 = 0.95;

/// Interaction started by a pointer or touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionMode {
    /// Mouse drag rotating around the target.
    Rotate,
    /// Mouse drag moving toward or away from the target.
    Dolly,
    /// Mouse drag translating the target.
    Pan,
    /// One-finger rotate.
    TouchRotate,
    /// Two-finger pinch (dolly) and drag (pan).
    TouchDollyPan,
}

/// Which way a dolly moves the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DollyDirection {
    /// Away from the target (zoom out).
    In,
    /// Toward the target (zoom in).
    Out,
}

/// View captured by [`OrbitController::save_state`].
#[derive(Debug, Clone, Copy, PartialEq)]
struct SavedView {
    target: Vec3,
    position: Vec3,
    zoom: Option<f32>,
}

/// Orbits a [`Camera`] around a target point.
///
/// The controller does not own the camera: gesture entry points that
/// depend on the projection borrow it, and [`update`](Self::update)
/// writes the new pose into it.
///
/// ```
/// # use glam::Vec3;
/// # use pivot::camera::{Camera, OrbitController, Viewport};
/// # use pivot::options::OrbitOptions;
/// let mut camera = Camera::perspective(
///     Vec3::new(0.0, 0.0, 50.0), Vec3::ZERO, 45.0, 16.0 / 9.0, 0.1, 1000.0,
/// );
/// let mut orbit = OrbitController::new(
///     &camera, Vec3::ZERO, Viewport::new(1280, 720), OrbitOptions::default(),
/// );
/// orbit.dolly_in(&mut camera, 0.95);
/// assert!(orbit.update(&mut camera, 1.0 / 60.0));
/// ```
#[derive(Debug, Clone)]
pub struct OrbitController {
    /// Limits, speeds, and capability flags. Changes take effect on the
    /// next gesture or update.
    pub options: OrbitOptions,
    target: Vec3,
    spherical: Spherical,
    spherical_delta: Spherical,
    pan_offset: Vec3,
    scale: f32,
    zoom_changed: bool,
    state: Option<InteractionMode>,
    last_point: Vec2,
    pinch_spread: f32,
    viewport: Viewport,
    saved: SavedView,
    last_position: Vec3,
    last_orientation: Quat,
}

impl OrbitController {
    /// Create a controller orbiting `target`, starting from the camera's
    /// current pose. The initial view is saved for [`reset`](Self::reset).
    #[must_use]
    pub fn new(
        camera: &Camera,
        target: Vec3,
        viewport: Viewport,
        options: OrbitOptions,
    ) -> Self {
        let offset = to_y_up(camera) * (camera.position - target);
        Self {
            options,
            target,
            spherical: Spherical::from_vec3(offset),
            spherical_delta: Spherical::ZERO,
            pan_offset: Vec3::ZERO,
            scale: 1.0,
            zoom_changed: false,
            state: None,
            last_point: Vec2::ZERO,
            pinch_spread: 0.0,
            viewport,
            saved: SavedView {
                target,
                position: camera.position,
                zoom: camera.zoom(),
            },
            last_position: camera.position,
            last_orientation: camera.orientation,
        }
    }

    // ── Accessors ──

    /// Point the camera orbits around.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Move the orbit target. The camera follows on the next update.
    pub fn set_target(&mut self, target: Vec3) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Camera offset from the target as of the last update.
    #[must_use]
    pub fn spherical(&self) -> Spherical {
        self.spherical
    }

    /// Polar angle (from the up axis) as of the last update.
    #[must_use]
    pub fn polar_angle(&self) -> f32 {
        self.spherical.polar
    }

    /// Azimuth angle (around the up axis) as of the last update.
    #[must_use]
    pub fn azimuth_angle(&self) -> f32 {
        self.spherical.azimuth
    }

    /// Rotation not yet applied to the camera.
    #[must_use]
    pub fn spherical_delta(&self) -> Spherical {
        self.spherical_delta
    }

    /// Target translation not yet applied.
    #[must_use]
    pub fn pan_offset(&self) -> Vec3 {
        self.pan_offset
    }

    /// Pending radius multiplier.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Gesture in progress, if any.
    #[must_use]
    pub fn state(&self) -> Option<InteractionMode> {
        self.state
    }

    /// Viewport used to scale pointer deltas.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Update the viewport after a resize.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Flip auto-rotation, returning the new setting.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.options.auto_rotate = !self.options.auto_rotate;
        log::debug!("auto-rotate {}", self.options.auto_rotate);
        self.options.auto_rotate
    }

    // ── Frame update ──

    /// Fold pending motion into the camera and report whether the pose or
    /// orthographic zoom changed by more than a small epsilon since the
    /// last reported change.
    ///
    /// `dt` is the frame time in seconds and only drives auto-rotation;
    /// negative or non-finite values are treated as zero.
    pub fn update(&mut self, camera: &mut Camera, dt: f32) -> bool {
        let dt = sanitize_dt(dt);
        let to_y_up = to_y_up(camera);
        self.spherical = Spherical::from_vec3(to_y_up * (camera.position - self.target));

        if self.options.auto_rotate && self.state.is_none() {
            self.spherical_delta.azimuth -= auto_rotation_angle(self.options.auto_rotate_speed, dt);
        }

        let opts = &self.options;
        self.spherical.azimuth += self.spherical_delta.azimuth;
        self.spherical.polar += self.spherical_delta.polar;

        self.spherical.azimuth = clamp_between(
            self.spherical.azimuth,
            opts.min_azimuth_angle,
            opts.max_azimuth_angle,
        );
        self.spherical.polar =
            clamp_between(self.spherical.polar, opts.min_polar_angle, opts.max_polar_angle);
        self.spherical.make_safe();
        self.spherical.radius = clamp_between(
            self.spherical.radius * self.scale,
            opts.min_distance,
            opts.max_distance,
        );
        self.target += self.pan_offset;

        camera.position = self.target + to_y_up.inverse() * self.spherical.to_vec3();
        camera.look_at(self.target);

        if opts.enable_damping {
            let keep = 1.0 - opts.damping_factor;
            self.spherical_delta.azimuth = settle(self.spherical_delta.azimuth * keep);
            self.spherical_delta.polar = settle(self.spherical_delta.polar * keep);
            self.pan_offset *= keep;
            if self.pan_offset.length_squared() < DAMPING_EPSILON * DAMPING_EPSILON {
                self.pan_offset = Vec3::ZERO;
            }
        } else {
            self.spherical_delta = Spherical::ZERO;
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        let changed = self.zoom_changed
            || pose_changed(
                self.last_position,
                self.last_orientation,
                camera.position,
                camera.orientation,
            );
        if changed {
            self.last_position = camera.position;
            self.last_orientation = camera.orientation;
            self.zoom_changed = false;
        }
        changed
    }

    // ── Rotation ──

    /// Queue a rotation. Positive azimuth turns counter-clockwise seen
    /// from above; positive polar tilts toward the bottom pole.
    pub fn rotate(&mut self, delta_azimuth: f32, delta_polar: f32) {
        if !self.can(self.options.enable_rotate)
            || !delta_azimuth.is_finite()
            || !delta_polar.is_finite()
        {
            return;
        }
        self.spherical_delta.azimuth += delta_azimuth;
        self.spherical_delta.polar += delta_polar;
    }

    /// Orbit the camera to the left by `angle` radians.
    pub fn rotate_left(&mut self, angle: f32) {
        self.rotate(-angle, 0.0);
    }

    /// Orbit the camera upward by `angle` radians.
    pub fn rotate_up(&mut self, angle: f32) {
        self.rotate(0.0, -angle);
    }

    // ── Panning ──

    /// Queue a pan by a pointer delta in pixels. Dragging right moves the
    /// target left so the scene follows the pointer.
    ///
    /// Perspective cameras pan in proportion to the target distance and
    /// field of view; orthographic cameras by view-volume extent over zoom.
    /// Any other projection disables panning with a warning.
    pub fn pan(&mut self, camera: &Camera, dx: f32, dy: f32) {
        if !self.can(self.options.enable_pan) || !dx.is_finite() || !dy.is_finite() {
            return;
        }
        match camera.projection {
            Projection::Perspective { fovy, .. } => {
                let target_distance = (camera.position - self.target).length()
                    * (fovy.to_radians() / 2.0).tan();
                self.pan_left(camera, 2.0 * dx * target_distance / self.viewport.height);
                self.pan_up(camera, 2.0 * dy * target_distance / self.viewport.height);
            }
            Projection::Orthographic {
                left,
                right,
                top,
                bottom,
                zoom,
                ..
            } => {
                self.pan_left(camera, dx * (right - left) / zoom / self.viewport.width);
                self.pan_up(camera, dy * (top - bottom) / zoom / self.viewport.height);
            }
            Projection::Custom(_) => {
                log::warn!("orbit: unsupported projection, panning disabled");
                self.options.enable_pan = false;
            }
        }
    }

    /// Pan by whole key presses; each unit is `key_pan_speed` pixels.
    pub fn key_pan(&mut self, camera: &Camera, dx: f32, dy: f32) {
        if !self.options.enable_keys {
            return;
        }
        let speed = self.options.key_pan_speed;
        self.pan(camera, dx * speed, dy * speed);
    }

    fn pan_left(&mut self, camera: &Camera, distance: f32) {
        self.pan_offset -= camera.right() * distance;
    }

    fn pan_up(&mut self, camera: &Camera, distance: f32) {
        let axis = if self.options.screen_space_panning {
            camera.local_up()
        } else {
            camera.up.cross(camera.right())
        };
        self.pan_offset += axis * distance;
    }

    // ── Dolly ──

    /// Dolly by `factor` (0 < factor; 1 is a no-op).
    ///
    /// Perspective cameras scale the orbit radius on the next update.
    /// Orthographic cameras change the projection zoom immediately. Any
    /// other projection disables zooming with a warning.
    pub fn dolly(&mut self, camera: &mut Camera, factor: f32, direction: DollyDirection) {
        if !self.can(self.options.enable_zoom) || !factor.is_finite() || factor <= 0.0 {
            return;
        }
        match &mut camera.projection {
            Projection::Perspective { .. } => match direction {
                DollyDirection::In => self.scale /= factor,
                DollyDirection::Out => self.scale *= factor,
            },
            Projection::Orthographic { zoom, .. } => {
                let next = match direction {
                    DollyDirection::In => *zoom * factor,
                    DollyDirection::Out => *zoom / factor,
                };
                *zoom = clamp_between(next, self.options.min_zoom, self.options.max_zoom);
                self.zoom_changed = true;
            }
            Projection::Custom(_) => {
                log::warn!("orbit: unsupported projection, zoom disabled");
                self.options.enable_zoom = false;
            }
        }
    }

    /// Move away from the target (radius divided by `factor`).
    pub fn dolly_in(&mut self, camera: &mut Camera, factor: f32) {
        self.dolly(camera, factor, DollyDirection::In);
    }

    /// Move toward the target (radius multiplied by `factor`).
    pub fn dolly_out(&mut self, camera: &mut Camera, factor: f32) {
        self.dolly(camera, factor, DollyDirection::Out);
    }

    /// Handle a wheel notch. Negative deltas zoom in, positive zoom out;
    /// the magnitude is ignored.
    pub fn wheel(&mut self, camera: &mut Camera, delta: f32) {
        let scale = self.zoom_scale();
        if delta < 0.0 {
            self.dolly_out(camera, scale);
        } else if delta > 0.0 {
            self.dolly_in(camera, scale);
        }
    }

    fn zoom_scale(&self) -> f32 {
        ZOOM_BASE.powf(self.options.zoom_speed)
    }

    // ── Gesture state machine ──

    /// Start a pointer or one-finger gesture at `start` (pixels). Ignored
    /// when the controller or the gesture's capability is disabled.
    pub fn begin_interaction(&mut self, mode: InteractionMode, start: Vec2) {
        let allowed = match mode {
            InteractionMode::Rotate | InteractionMode::TouchRotate => self.options.enable_rotate,
            InteractionMode::Dolly => self.options.enable_zoom,
            InteractionMode::Pan => self.options.enable_pan,
            InteractionMode::TouchDollyPan => {
                self.options.enable_zoom || self.options.enable_pan
            }
        };
        if !self.can(allowed) || !start.is_finite() {
            return;
        }
        log::debug!("orbit interaction {mode:?} started");
        self.state = Some(mode);
        self.last_point = start;
    }

    /// Start a two-finger gesture from the contacts' midpoint and spread.
    pub fn begin_pinch(&mut self, midpoint: Vec2, spread: f32) {
        self.begin_interaction(InteractionMode::TouchDollyPan, midpoint);
        if self.state == Some(InteractionMode::TouchDollyPan) {
            self.pinch_spread = if spread.is_finite() { spread } else { 0.0 };
        }
    }

    /// Feed the next pointer position of the active gesture.
    pub fn continue_interaction(&mut self, camera: &mut Camera, position: Vec2) {
        let Some(mode) = self.state else {
            return;
        };
        if !position.is_finite() {
            return;
        }
        let delta = position - self.last_point;
        self.last_point = position;

        match mode {
            InteractionMode::Rotate | InteractionMode::TouchRotate => {
                let delta = delta * self.options.rotate_speed;
                self.rotate_left(TAU * delta.x / self.viewport.width);
                self.rotate_up(TAU * delta.y / self.viewport.height);
            }
            InteractionMode::Dolly => {
                let scale = self.zoom_scale();
                if delta.y > 0.0 {
                    self.dolly_in(camera, scale);
                } else if delta.y < 0.0 {
                    self.dolly_out(camera, scale);
                }
            }
            InteractionMode::Pan | InteractionMode::TouchDollyPan => {
                let delta = delta * self.options.pan_speed;
                self.pan(camera, delta.x, delta.y);
            }
        }
    }

    /// Feed the next two-finger sample: spreading the fingers dollies
    /// toward the target, moving the midpoint pans.
    pub fn continue_pinch(&mut self, camera: &mut Camera, midpoint: Vec2, spread: f32) {
        if self.state != Some(InteractionMode::TouchDollyPan) {
            return;
        }
        if spread.is_finite() && spread > 0.0 && self.pinch_spread > 0.0 {
            let factor = (self.pinch_spread / spread).powf(self.options.zoom_speed);
            self.dolly_out(camera, factor);
        }
        if spread.is_finite() {
            self.pinch_spread = spread;
        }
        self.continue_interaction(camera, midpoint);
    }

    /// Finish the active gesture.
    pub fn end_interaction(&mut self) {
        if let Some(mode) = self.state.take() {
            log::debug!("orbit interaction {mode:?} ended");
        }
    }

    // ── Saved view ──

    /// Remember the current target, camera position and zoom.
    pub fn save_state(&mut self, camera: &Camera) {
        self.saved = SavedView {
            target: self.target,
            position: camera.position,
            zoom: camera.zoom(),
        };
    }

    /// Restore the saved view, discard pending motion, and update the
    /// camera. Returns whether the camera changed.
    pub fn reset(&mut self, camera: &mut Camera) -> bool {
        self.target = self.saved.target;
        camera.position = self.saved.position;
        if let (Some(saved), Projection::Orthographic { zoom, .. }) =
            (self.saved.zoom, &mut camera.projection)
        {
            *zoom = saved;
            self.zoom_changed = true;
        }
        self.flush();
        self.update(camera, 0.0)
    }

    /// Drop pending motion and any gesture in progress.
    pub fn flush(&mut self) {
        self.spherical_delta = Spherical::ZERO;
        self.pan_offset = Vec3::ZERO;
        self.scale = 1.0;
        self.state = None;
    }

    fn can(&self, capability: bool) -> bool {
        self.options.enabled && capability
    }
}

/// Rotation taking the camera's up axis onto +Y.
fn to_y_up(camera: &Camera) -> Quat {
    Quat::from_rotation_arc(camera.up.normalize_or(Vec3::Y), Vec3::Y)
}

/// Auto-rotation for one frame; speed 1 is one revolution per minute.
fn auto_rotation_angle(speed: f32, dt: f32) -> f32 {
    TAU / 60.0 * speed * dt
}

/// `value` limited to `[lo, hi]`; never panics on inverted bounds.
fn clamp_between(value: f32, lo: f32, hi: f32) -> f32 {
    lo.max(hi.min(value))
}

fn settle(value: f32) -> f32 {
    if value.abs() < DAMPING_EPSILON {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use glam::Mat4;

    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn setup(options: OrbitOptions) -> (Camera, OrbitController) {
        let camera = Camera::perspective(
            Vec3::new(0.0, 0.0, 50.0),
            Vec3::ZERO,
            45.0,
            16.0 / 9.0,
            0.1,
            1000.0,
        );
        let orbit = OrbitController::new(&camera, Vec3::ZERO, Viewport::new(800, 600), options);
        (camera, orbit)
    }

    fn distance(camera: &Camera, orbit: &OrbitController) -> f32 {
        camera.position.distance(orbit.target())
    }

    #[test]
    fn dolly_in_moves_away() {
        let (mut camera, mut orbit) = setup(OrbitOptions::default());
        orbit.dolly_in(&mut camera, 0.95);
        assert!(orbit.update(&mut camera, DT));
        assert!((distance(&camera, &orbit) - 50.0 / 0.95).abs() < 1e-3);
        assert!((orbit.spherical().radius - 52.63).abs() < 1e-2);
    }

    #[test]
    fn wheel_direction() {
        let (mut camera, mut orbit) = setup(OrbitOptions::default());
        orbit.wheel(&mut camera, -1.0);
        let _ = orbit.update(&mut camera, DT);
        assert!((distance(&camera, &orbit) - 50.0 * 0.95).abs() < 1e-3);

        orbit.wheel(&mut camera, 3.0);
        let _ = orbit.update(&mut camera, DT);
        assert!((distance(&camera, &orbit) - 50.0).abs() < 1e-3);

        orbit.wheel(&mut camera, 0.0);
        assert_eq!(orbit.scale(), 1.0);
    }

    #[test]
    fn wheel_works_mid_drag() {
        let (mut camera, mut orbit) = setup(OrbitOptions::default());
        orbit.begin_interaction(InteractionMode::Rotate, Vec2::ZERO);
        orbit.wheel(&mut camera, -1.0);
        assert!((orbit.scale() - 0.95).abs() < 1e-6);
    }

    #[test]
    fn distance_is_clamped() {
        let options = OrbitOptions {
            min_distance: 40.0,
            max_distance: 60.0,
            ..OrbitOptions::default()
        };
        let (mut camera, mut orbit) = setup(options);
        orbit.dolly_out(&mut camera, 0.1);
        let _ = orbit.update(&mut camera, DT);
        assert!((distance(&camera, &orbit) - 40.0).abs() < 1e-3);

        orbit.dolly_in(&mut camera, 0.01);
        let _ = orbit.update(&mut camera, DT);
        assert!((distance(&camera, &orbit) - 60.0).abs() < 1e-3);
    }

    #[test]
    fn polar_angle_stays_in_bounds() {
        let options = OrbitOptions {
            min_polar_angle: FRAC_PI_4,
            max_polar_angle: 3.0 * FRAC_PI_4,
            ..OrbitOptions::default()
        };
        let (mut camera, mut orbit) = setup(options);
        orbit.rotate_up(10.0);
        let _ = orbit.update(&mut camera, DT);
        assert!((orbit.polar_angle() - FRAC_PI_4).abs() < 1e-5);

        orbit.rotate_up(-10.0);
        let _ = orbit.update(&mut camera, DT);
        assert!((orbit.polar_angle() - 3.0 * FRAC_PI_4).abs() < 1e-5);
    }

    #[test]
    fn poles_are_never_reached() {
        let (mut camera, mut orbit) = setup(OrbitOptions::default());
        orbit.rotate_up(PI);
        let _ = orbit.update(&mut camera, DT);
        assert!(orbit.polar_angle() > 0.0);
        assert!(camera.orientation.is_finite());
        assert!(camera.position.is_finite());
    }

    #[test]
    fn drag_rotates_by_viewport_fraction() {
        let (mut camera, mut orbit) = setup(OrbitOptions::default());
        orbit.begin_interaction(InteractionMode::Rotate, Vec2::new(100.0, 100.0));
        orbit.continue_interaction(&mut camera, Vec2::new(300.0, 100.0));
        orbit.end_interaction();
        assert_eq!(orbit.state(), None);
        let _ = orbit.update(&mut camera, DT);

        // A quarter of the width is a quarter turn.
        assert!((orbit.azimuth_angle() + FRAC_PI_2).abs() < 1e-4);
        assert!(camera.position.abs_diff_eq(Vec3::new(-50.0, 0.0, 0.0), 1e-3));
        assert!(camera.forward().abs_diff_eq(Vec3::X, 1e-4));
    }

    #[test]
    fn pan_moves_camera_and_target_together() {
        let (mut camera, mut orbit) = setup(OrbitOptions::default());
        let before_camera = camera.position;
        let before_spherical = orbit.spherical();
        orbit.pan(&camera, 40.0, 0.0);
        let _ = orbit.update(&mut camera, DT);

        let target_shift = orbit.target();
        let camera_shift = camera.position - before_camera;
        assert!(target_shift.x < 0.0, "dragging right moves the target left");
        assert!(target_shift.abs_diff_eq(camera_shift, 1e-4));
        assert!((orbit.spherical().radius - before_spherical.radius).abs() < 1e-4);
        assert!((orbit.azimuth_angle() - before_spherical.azimuth).abs() < 1e-5);
    }

    #[test]
    fn vertical_pan_follows_ground_or_screen() {
        let (mut camera, mut orbit) = setup(OrbitOptions::default());
        orbit.pan(&camera, 0.0, 10.0);
        let _ = orbit.update(&mut camera, DT);
        // Ground-plane panning moves along the view direction.
        assert!(orbit.target().z < 0.0);
        assert!(orbit.target().y.abs() < 1e-5);

        let options = OrbitOptions {
            screen_space_panning: true,
            ..OrbitOptions::default()
        };
        let (mut camera, mut orbit) = setup(options);
        orbit.pan(&camera, 0.0, 10.0);
        let _ = orbit.update(&mut camera, DT);
        assert!(orbit.target().y > 0.0);
        assert!(orbit.target().z.abs() < 1e-5);
    }

    #[test]
    fn idle_update_reports_no_change() {
        let (mut camera, mut orbit) = setup(OrbitOptions::default());
        let before = camera.position;
        assert!(!orbit.update(&mut camera, DT));
        assert!(camera.position.abs_diff_eq(before, 1e-4));

        orbit.rotate_left(0.2);
        assert!(orbit.update(&mut camera, DT));
        assert!(!orbit.update(&mut camera, DT));
    }

    #[test]
    fn damping_decays_geometrically() {
        let options = OrbitOptions {
            enable_damping: true,
            damping_factor: 0.25,
            ..OrbitOptions::default()
        };
        let (mut camera, mut orbit) = setup(options);
        orbit.rotate(0.4, 0.0);
        let mut applied = 0.0;
        for n in 1..=5 {
            applied += orbit.spherical_delta().azimuth;
            let _ = orbit.update(&mut camera, DT);
            let expected = 0.4 * 0.75_f32.powi(n);
            assert!((orbit.spherical_delta().azimuth - expected).abs() < 1e-5);
            assert!((orbit.azimuth_angle() - applied).abs() < 1e-4);
        }

        // Eventually the residue is dropped entirely.
        for _ in 0..200 {
            let _ = orbit.update(&mut camera, DT);
        }
        assert_eq!(orbit.spherical_delta().azimuth, 0.0);
        assert!(!orbit.update(&mut camera, DT));
    }

    #[test]
    fn damped_rotation_applies_full_delta_then_coasts() {
        let options = OrbitOptions {
            enable_damping: true,
            damping_factor: 0.25,
            ..OrbitOptions::default()
        };
        let (mut camera, mut orbit) = setup(options);
        orbit.rotate(0.4, 0.0);
        let _ = orbit.update(&mut camera, DT);
        assert!((orbit.azimuth_angle() - 0.4).abs() < 1e-4);

        // The geometric tail sums to delta / damping_factor.
        for _ in 0..500 {
            let _ = orbit.update(&mut camera, DT);
        }
        assert!((orbit.azimuth_angle() - 1.6).abs() < 1e-3);
    }

    #[test]
    fn damped_pan_applies_full_offset_first_frame() {
        let (mut undamped_camera, mut undamped) = setup(OrbitOptions::default());
        undamped.pan(&undamped_camera, 40.0, 0.0);
        let _ = undamped.update(&mut undamped_camera, DT);

        let (mut camera, mut orbit) = setup(OrbitOptions {
            enable_damping: true,
            damping_factor: 0.25,
            ..OrbitOptions::default()
        });
        orbit.pan(&camera, 40.0, 0.0);
        let _ = orbit.update(&mut camera, DT);
        assert!(orbit.target().abs_diff_eq(undamped.target(), 1e-4));
        assert!(orbit.pan_offset().abs_diff_eq(undamped.target() * 0.75, 1e-4));
    }

    #[test]
    fn auto_rotate_is_per_second() {
        let options = OrbitOptions {
            auto_rotate: true,
            auto_rotate_speed: 2.0,
            ..OrbitOptions::default()
        };
        let (mut camera, mut orbit) = setup(options);
        let _ = orbit.update(&mut camera, 0.5);
        assert!((orbit.azimuth_angle() + TAU / 60.0).abs() < 1e-5);

        // Suspended while a gesture is active.
        orbit.begin_interaction(InteractionMode::Pan, Vec2::ZERO);
        let before = orbit.azimuth_angle();
        let _ = orbit.update(&mut camera, 0.5);
        assert!((orbit.azimuth_angle() - before).abs() < 1e-6);
    }

    #[test]
    fn bad_dt_is_treated_as_zero() {
        let options = OrbitOptions {
            auto_rotate: true,
            ..OrbitOptions::default()
        };
        let (mut camera, mut orbit) = setup(options);
        assert!(!orbit.update(&mut camera, f32::NAN));
        assert!(!orbit.update(&mut camera, -1.0));
        assert!(camera.position.is_finite());
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let (mut camera, mut orbit) = setup(OrbitOptions::default());
        orbit.rotate(f32::NAN, 0.0);
        orbit.pan(&camera, f32::INFINITY, 0.0);
        orbit.dolly_in(&mut camera, f32::NAN);
        orbit.dolly_out(&mut camera, -1.0);
        orbit.begin_interaction(InteractionMode::Rotate, Vec2::new(f32::NAN, 0.0));
        assert_eq!(orbit.state(), None);
        assert_eq!(orbit.spherical_delta(), Spherical::ZERO);
        assert_eq!(orbit.pan_offset(), Vec3::ZERO);
        assert_eq!(orbit.scale(), 1.0);
    }

    #[test]
    fn disabled_capabilities_ignore_gestures() {
        let options = OrbitOptions {
            enable_rotate: false,
            enable_pan: false,
            enable_zoom: false,
            ..OrbitOptions::default()
        };
        let (mut camera, mut orbit) = setup(options);
        orbit.rotate_left(1.0);
        orbit.pan(&camera, 10.0, 10.0);
        orbit.wheel(&mut camera, -1.0);
        orbit.begin_interaction(InteractionMode::Rotate, Vec2::ZERO);
        orbit.begin_pinch(Vec2::ZERO, 10.0);
        assert_eq!(orbit.state(), None);
        assert!(!orbit.update(&mut camera, DT));

        let (mut camera, mut orbit) = setup(OrbitOptions {
            enabled: false,
            ..OrbitOptions::default()
        });
        orbit.rotate_left(1.0);
        orbit.dolly_in(&mut camera, 0.5);
        assert!(!orbit.update(&mut camera, DT));
    }

    #[test]
    fn key_pan_respects_enable_keys() {
        let (mut camera, mut orbit) = setup(OrbitOptions {
            enable_keys: false,
            ..OrbitOptions::default()
        });
        orbit.key_pan(&camera, 1.0, 0.0);
        assert_eq!(orbit.pan_offset(), Vec3::ZERO);

        orbit.options.enable_keys = true;
        orbit.key_pan(&camera, 1.0, 0.0);
        assert!(orbit.update(&mut camera, DT));
        assert!(orbit.target().x < 0.0);
    }

    #[test]
    fn orthographic_dolly_changes_zoom_only() {
        let mut camera =
            Camera::orthographic(Vec3::new(0.0, 0.0, 50.0), Vec3::ZERO, 10.0, 10.0, 0.1, 100.0);
        let mut orbit = OrbitController::new(
            &camera,
            Vec3::ZERO,
            Viewport::new(800, 600),
            OrbitOptions {
                max_zoom: 1.5,
                ..OrbitOptions::default()
            },
        );
        let before = camera.position;
        orbit.dolly_out(&mut camera, 0.95);
        assert!((camera.zoom().unwrap_or_default() - 1.0 / 0.95).abs() < 1e-5);
        assert!(orbit.update(&mut camera, DT));
        assert!(camera.position.abs_diff_eq(before, 1e-4));
        assert!(!orbit.update(&mut camera, DT));

        orbit.dolly_out(&mut camera, 0.1);
        assert_eq!(camera.zoom(), Some(1.5));
    }

    #[test]
    fn orthographic_pan_uses_extents() {
        let mut camera =
            Camera::orthographic(Vec3::new(0.0, 0.0, 50.0), Vec3::ZERO, 400.0, 300.0, 0.1, 100.0);
        let mut orbit = OrbitController::new(
            &camera,
            Vec3::ZERO,
            Viewport::new(800, 600),
            OrbitOptions::default(),
        );
        // One pixel per world unit at zoom 1.
        orbit.pan(&camera, 10.0, 0.0);
        let _ = orbit.update(&mut camera, DT);
        assert!(orbit.target().abs_diff_eq(Vec3::new(-10.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn unsupported_projection_disables_pan_and_zoom() {
        let (mut camera, mut orbit) = setup(OrbitOptions::default());
        camera.projection = Projection::Custom(Mat4::IDENTITY);
        orbit.pan(&camera, 10.0, 0.0);
        orbit.wheel(&mut camera, -1.0);
        assert!(!orbit.options.enable_pan);
        assert!(!orbit.options.enable_zoom);
        assert_eq!(orbit.pan_offset(), Vec3::ZERO);
        assert_eq!(orbit.scale(), 1.0);

        // Rotation still works.
        orbit.rotate_left(0.5);
        assert!(orbit.update(&mut camera, DT));
    }

    #[test]
    fn pinch_dollies_and_pans() {
        let (mut camera, mut orbit) = setup(OrbitOptions::default());
        orbit.begin_pinch(Vec2::new(400.0, 300.0), 100.0);
        assert_eq!(orbit.state(), Some(InteractionMode::TouchDollyPan));
        orbit.continue_pinch(&mut camera, Vec2::new(400.0, 300.0), 200.0);
        assert!((orbit.scale() - 0.5).abs() < 1e-6);
        let _ = orbit.update(&mut camera, DT);
        assert!((distance(&camera, &orbit) - 25.0).abs() < 1e-3);

        orbit.continue_pinch(&mut camera, Vec2::new(420.0, 300.0), 200.0);
        assert!(orbit.pan_offset().x < 0.0);
        assert_eq!(orbit.scale(), 1.0);
    }

    #[test]
    fn drag_dolly_direction() {
        let (mut camera, mut orbit) = setup(OrbitOptions::default());
        orbit.begin_interaction(InteractionMode::Dolly, Vec2::ZERO);
        orbit.continue_interaction(&mut camera, Vec2::new(0.0, 5.0));
        assert!(orbit.scale() > 1.0);
        orbit.continue_interaction(&mut camera, Vec2::new(0.0, 0.0));
        orbit.continue_interaction(&mut camera, Vec2::new(0.0, -5.0));
        assert!(orbit.scale() < 1.0);
    }

    #[test]
    fn reset_restores_saved_view() {
        let (mut camera, mut orbit) = setup(OrbitOptions::default());
        let home = camera.position;
        orbit.rotate_left(1.0);
        orbit.pan(&camera, 30.0, 30.0);
        let _ = orbit.update(&mut camera, DT);

        assert!(orbit.reset(&mut camera));
        assert!(camera.position.abs_diff_eq(home, 1e-3));
        assert_eq!(orbit.target(), Vec3::ZERO);

        orbit.rotate_left(1.0);
        let _ = orbit.update(&mut camera, DT);
        orbit.save_state(&camera);
        let saved = camera.position;
        orbit.dolly_in(&mut camera, 0.5);
        let _ = orbit.update(&mut camera, DT);
        let _ = orbit.reset(&mut camera);
        assert!(camera.position.abs_diff_eq(saved, 1e-3));
    }

    #[test]
    fn flush_discards_pending_motion() {
        let (mut camera, mut orbit) = setup(OrbitOptions::default());
        orbit.begin_interaction(InteractionMode::Rotate, Vec2::ZERO);
        orbit.continue_interaction(&mut camera, Vec2::new(50.0, 0.0));
        orbit.dolly_in(&mut camera, 0.5);
        orbit.flush();
        assert_eq!(orbit.state(), None);
        assert!(!orbit.update(&mut camera, DT));
    }

    #[test]
    fn non_y_up_axis() {
        let mut camera = Camera::perspective(
            Vec3::new(0.0, -50.0, 0.0),
            Vec3::ZERO,
            45.0,
            1.0,
            0.1,
            1000.0,
        );
        camera.up = Vec3::Z;
        camera.look_at(Vec3::ZERO);
        let mut orbit =
            OrbitController::new(&camera, Vec3::ZERO, Viewport::new(800, 600), OrbitOptions::default());
        orbit.rotate_left(FRAC_PI_2);
        let _ = orbit.update(&mut camera, DT);
        // Orbiting keeps the camera in the plane perpendicular to +Z.
        assert!(camera.position.z.abs() < 1e-3);
        assert!((camera.position.length() - 50.0).abs() < 1e-3);
    }
}
