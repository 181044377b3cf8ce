//! The rig's complete interactive vocabulary.
//!
//! Every camera operation, whether produced by the
//! [`InputProcessor`](crate::input::InputProcessor) from a raw event or
//! issued programmatically by the host, is a `CameraCommand` passed to
//! [`CameraRig::execute`](super::CameraRig::execute). Commands meant for
//! the controller that is not active are ignored.
//!
//! ```ignore
//! rig.execute(CameraCommand::Wheel { delta: -1.0 });
//! rig.execute(CameraCommand::SwitchMode { mode: ControlMode::FirstPerson });
//! ```

use glam::Vec2;

use crate::camera::orbit::InteractionMode;
use crate::input::{ControlMode, MotionCommand};

/// A camera operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    // ── Orbit ───────────────────────────────────────────────────────
    /// Start a drag or one-finger gesture at `start` (pixels).
    BeginInteraction {
        /// Gesture to start.
        mode: InteractionMode,
        /// Pointer position when the gesture began.
        start: Vec2,
    },
    /// Start a two-finger gesture.
    BeginPinch {
        /// Midpoint between the contacts.
        midpoint: Vec2,
        /// Distance between the contacts.
        spread: f32,
    },
    /// Next pointer position of the active gesture.
    ContinueInteraction {
        /// Pointer position in pixels.
        position: Vec2,
    },
    /// Next two-finger sample.
    ContinuePinch {
        /// Midpoint between the contacts.
        midpoint: Vec2,
        /// Distance between the contacts.
        spread: f32,
    },
    /// Finish the active gesture.
    EndInteraction,
    /// Wheel notch; negative zooms in, positive zooms out.
    Wheel {
        /// Signed scroll amount.
        delta: f32,
    },
    /// Pan by whole key presses.
    KeyPan {
        /// Horizontal steps (positive pans left).
        dx: f32,
        /// Vertical steps (positive pans up).
        dy: f32,
    },
    /// Flip orbit auto-rotation.
    ToggleAutoRotate,
    /// Restore the saved orbit view.
    ResetView,

    // ── First person ────────────────────────────────────────────────
    /// Raw pointer motion while the pointer is locked.
    Look {
        /// Horizontal motion in pixels.
        dx: f32,
        /// Vertical motion in pixels.
        dy: f32,
    },
    /// Press or release a movement command.
    SetCommand {
        /// Which command.
        command: MotionCommand,
        /// Whether it is now held.
        active: bool,
    },
    /// Pointer lock acquired or lost. Losing it stops all motion.
    PointerLockChanged {
        /// Whether the pointer is locked.
        locked: bool,
    },

    // ── Rig ─────────────────────────────────────────────────────────
    /// Viewport resized.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
    /// Hand the camera to another controller.
    SwitchMode {
        /// Controller to activate.
        mode: ControlMode,
    },
}
