//! Ground-contact queries for the first-person controller.
//!
//! The controller never inspects scene geometry itself. Hosts implement
//! [`GroundSensor`] on top of whatever collision query their scene offers
//! (typically a short downward ray from the controller's feet); closures
//! work directly.

use glam::Vec3;

/// Answers whether the controller is currently supported by geometry.
pub trait GroundSensor {
    /// Probe downward from `position` (the controller's feet). Returns
    /// `true` if collidable geometry lies within the sensor's range.
    fn probe(&self, position: Vec3) -> bool;
}

impl<F> GroundSensor for F
where
    F: Fn(Vec3) -> bool,
{
    fn probe(&self, position: Vec3) -> bool {
        self(position)
    }
}

/// A sensor that never reports contact; only the hard floor stops a fall.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGround;

impl GroundSensor for NoGround {
    fn probe(&self, _position: Vec3) -> bool {
        false
    }
}

/// An infinite horizontal plane at `height`, detected within `range`
/// below the probe point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatGround {
    /// Plane height (world Y).
    pub height: f32,
    /// Probe length below the feet.
    pub range: f32,
}

impl FlatGround {
    /// Create a flat ground sensor.
    #[must_use]
    pub fn new(height: f32, range: f32) -> Self {
        Self { height, range }
    }
}

impl GroundSensor for FlatGround {
    fn probe(&self, position: Vec3) -> bool {
        let gap = position.y - self.height;
        (0.0..=self.range).contains(&gap)
    }
}
