use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "First Person", inline)]
#[serde(default)]
/// Look sensitivity and locomotion constants for the first-person
/// controller.
pub struct FirstPersonOptions {
    /// Radians of yaw/pitch per pixel of pointer motion.
    #[schemars(title = "Look Sensitivity", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub sensitivity: f32,
    /// Horizontal velocity decay rate per second.
    #[schemars(skip)]
    pub friction: f32,
    /// Gravitational acceleration before mass scaling.
    #[schemars(skip)]
    pub gravity: f32,
    /// Multiplier on gravity.
    #[schemars(skip)]
    pub mass: f32,
    /// Horizontal acceleration while a movement key is held.
    #[schemars(title = "Acceleration", range(min = 50.0, max = 2000.0), extend("step" = 10.0))]
    pub acceleration: f32,
    /// Vertical velocity set by a jump.
    #[schemars(title = "Jump Impulse", range(min = 0.0, max = 1000.0), extend("step" = 10.0))]
    pub jump_impulse: f32,
    /// Lowest allowed feet height (world Y).
    #[schemars(skip)]
    pub ground_offset: f32,
    /// Length of the downward ground probe hosts should use.
    #[schemars(skip)]
    pub probe_range: f32,
    /// Translation multiplier while double speed is held.
    #[schemars(title = "Sprint Multiplier", range(min = 1.0, max = 4.0), extend("step" = 0.1))]
    pub speed_multiplier: f32,
    /// Eye height above the feet when the pose is applied to a camera.
    #[schemars(skip)]
    pub eye_height: f32,
}

impl Default for FirstPersonOptions {
    fn default() -> Self {
        Self {
            sensitivity: 0.002,
            friction: 10.0,
            gravity: 9.8,
            mass: 100.0,
            acceleration: 400.0,
            jump_impulse: 350.0,
            ground_offset: 10.0,
            probe_range: 10.0,
            speed_multiplier: 2.0,
            eye_height: 0.0,
        }
    }
}
