//! Spherical coordinates for orbiting a point.
//!
//! The pole is +Y: `polar` is measured from +Y toward the XZ plane and
//! `azimuth` rotates around +Y starting at +Z (so `azimuth = π/2` points
//! along +X). Callers whose "up" is not +Y rotate their offsets into this
//! frame first.

use std::f32::consts::PI;

use glam::Vec3;

/// Margin kept between the polar angle and the poles by
/// [`Spherical::make_safe`].
pub const POLE_EPSILON: f32 = 1e-6;

/// A point expressed as (radius, polar angle, azimuth angle).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spherical {
    /// Distance from the origin.
    pub radius: f32,
    /// Angle from +Y, in radians (`0..=π`).
    pub polar: f32,
    /// Angle around +Y from +Z, in radians (unbounded).
    pub azimuth: f32,
}

impl Spherical {
    /// All-zero coordinates; also the identity for use as a pending delta.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create spherical coordinates from components.
    #[must_use]
    pub const fn new(radius: f32, polar: f32, azimuth: f32) -> Self {
        Self {
            radius,
            polar,
            azimuth,
        }
    }

    /// Convert a cartesian offset. A zero vector maps to all-zero angles.
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::ZERO;
        }
        Self {
            radius,
            polar: (v.y / radius).clamp(-1.0, 1.0).acos(),
            azimuth: v.x.atan2(v.z),
        }
    }

    /// Convert back to a cartesian offset.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        let sin_polar_radius = self.polar.sin() * self.radius;
        Vec3::new(
            sin_polar_radius * self.azimuth.sin(),
            self.polar.cos() * self.radius,
            sin_polar_radius * self.azimuth.cos(),
        )
    }

    /// Keep the polar angle off the poles, where the azimuth (and any
    /// look-at basis built from it) degenerates.
    pub fn make_safe(&mut self) {
        self.polar = self.polar.clamp(POLE_EPSILON, PI - POLE_EPSILON);
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.radius.is_finite()
            && self.polar.is_finite()
            && self.azimuth.is_finite()
    }
}
