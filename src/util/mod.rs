//! Shared utilities for the camera controllers.
//!
//! Spherical coordinates for the orbit math and a clamped frame clock for
//! hosts that drive the controllers.

/// Clamped frame clock.
pub mod frame_timing;
/// Spherical coordinates for the orbit math.
pub mod spherical;
