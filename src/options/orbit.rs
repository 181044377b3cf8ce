use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::orbit::InteractionMode;
use crate::input::MouseButton;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Orbit controller limits, speeds, and capability flags.
pub struct OrbitOptions {
    /// Master switch; when off every gesture is ignored.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Closest allowed distance to the target (perspective).
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest allowed distance from the target (perspective).
    #[schemars(skip)]
    pub max_distance: f32,
    /// Smallest orthographic zoom.
    #[schemars(skip)]
    pub min_zoom: f32,
    /// Largest orthographic zoom.
    #[schemars(skip)]
    pub max_zoom: f32,
    /// Lower polar bound in radians (0 = looking straight down).
    #[schemars(title = "Min Polar Angle", range(min = 0.0, max = 3.15), extend("step" = 0.01))]
    pub min_polar_angle: f32,
    /// Upper polar bound in radians (π = looking straight up).
    #[schemars(title = "Max Polar Angle", range(min = 0.0, max = 3.15), extend("step" = 0.01))]
    pub max_polar_angle: f32,
    /// Lower azimuth bound in radians.
    #[schemars(skip)]
    pub min_azimuth_angle: f32,
    /// Upper azimuth bound in radians.
    #[schemars(skip)]
    pub max_azimuth_angle: f32,
    /// Smooth rotation and panning with exponential decay.
    #[schemars(title = "Damping")]
    pub enable_damping: bool,
    /// Fraction of the pending motion consumed per frame when damping.
    #[schemars(title = "Damping Factor", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Allow dolly / zoom gestures.
    #[schemars(title = "Zoom")]
    pub enable_zoom: bool,
    /// Exponent applied to the per-notch zoom factor 0.95.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub zoom_speed: f32,
    /// Allow rotate gestures.
    #[schemars(title = "Rotate")]
    pub enable_rotate: bool,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub rotate_speed: f32,
    /// Allow pan gestures.
    #[schemars(title = "Pan")]
    pub enable_pan: bool,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub pan_speed: f32,
    /// Pan in the screen plane instead of the ground plane.
    #[schemars(title = "Screen-Space Panning")]
    pub screen_space_panning: bool,
    /// Pixels panned per arrow-key press.
    #[schemars(skip)]
    pub key_pan_speed: f32,
    /// Spin around the target while idle.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Auto-rotate speed; 2.0 is one revolution per 30 seconds.
    #[schemars(title = "Auto Rotate Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub auto_rotate_speed: f32,
    /// Allow arrow-key panning.
    #[schemars(skip)]
    pub enable_keys: bool,
    /// Which mouse button starts which interaction.
    #[schemars(skip)]
    pub mouse_buttons: MouseButtonMap,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_zoom: 0.0,
            max_zoom: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            min_azimuth_angle: f32::NEG_INFINITY,
            max_azimuth_angle: f32::INFINITY,
            enable_damping: false,
            damping_factor: 0.25,
            enable_zoom: true,
            zoom_speed: 1.0,
            enable_rotate: true,
            rotate_speed: 1.0,
            enable_pan: true,
            pan_speed: 1.0,
            screen_space_panning: false,
            key_pan_speed: 7.0,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            enable_keys: true,
            mouse_buttons: MouseButtonMap::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Mouse button → orbit interaction assignment.
pub struct MouseButtonMap {
    /// Button that starts [`InteractionMode::Rotate`].
    pub rotate: MouseButton,
    /// Button that starts [`InteractionMode::Dolly`].
    pub dolly: MouseButton,
    /// Button that starts [`InteractionMode::Pan`].
    pub pan: MouseButton,
}

impl Default for MouseButtonMap {
    fn default() -> Self {
        Self {
            rotate: MouseButton::Left,
            dolly: MouseButton::Middle,
            pan: MouseButton::Right,
        }
    }
}

impl MouseButtonMap {
    /// Interaction started by `button`, if any. Rotate wins when one button
    /// is assigned to several modes.
    #[must_use]
    pub fn mode_for(&self, button: MouseButton) -> Option<InteractionMode> {
        if button == self.rotate {
            Some(InteractionMode::Rotate)
        } else if button == self.dolly {
            Some(InteractionMode::Dolly)
        } else if button == self.pan {
            Some(InteractionMode::Pan)
        } else {
            None
        }
    }
}
