//! Camera handle and the controllers that drive it.
//!
//! Provides an orbit controller (rotate, dolly, and pan around a target),
//! a pointer-locked first-person controller with simple walking physics,
//! and the ground-probe seam the latter uses.

/// Core camera struct, projections, viewport, and GPU uniform.
pub mod core;
/// First-person walking controller.
pub mod first_person;
/// Ground detection seam for the first-person controller.
pub mod ground;
/// Orbit controller.
pub mod orbit;

use glam::{Quat, Vec3};

pub use self::core::{Camera, CameraUniform, Projection, ProjectionKind, Viewport};
pub use first_person::{FirstPersonController, Pose};
pub use ground::{FlatGround, GroundSensor, NoGround};
pub use orbit::{DollyDirection, InteractionMode, OrbitController};

/// Squared position change, and scaled quaternion distance, below which a
/// pose counts as unchanged.
const CHANGE_EPSILON: f32 = 1e-6;

/// Frame time usable for integration: non-finite or negative becomes 0.
pub(crate) fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

/// Whether a pose moved or turned noticeably. `q` and `-q` are the same
/// rotation, so the closer of the two is compared.
pub(crate) fn pose_changed(
    last_position: Vec3,
    last_orientation: Quat,
    position: Vec3,
    orientation: Quat,
) -> bool {
    let turned = (orientation - last_orientation)
        .length_squared()
        .min((orientation + last_orientation).length_squared());
    last_position.distance_squared(position) > CHANGE_EPSILON
        || 4.0 * turned > CHANGE_EPSILON
}
