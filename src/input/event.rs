use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::listeners::EventKind;

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CameraCommand`](crate::rig::CameraCommand) values.
/// Keyboard keys go through
/// [`InputProcessor::handle_key`](super::InputProcessor::handle_key)
/// instead, since key codes are strings.
///
/// # Example
///
/// ```ignore
/// let cmd = input_processor.handle_event(
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Raw relative pointer motion (delivered while the pointer is locked).
    MouseMotion {
        /// Horizontal motion in pixels.
        dx: f32,
        /// Vertical motion in pixels.
        dy: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The cursor left the viewport.
    CursorLeft,
    /// Scroll wheel. Positive values (wheel turned toward the user) move
    /// the camera away from its target.
    Scroll {
        /// Scroll amount in notches; only the sign is used.
        delta: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
    /// First finger(s) touched the viewport.
    TouchStart {
        /// Current contact points.
        points: TouchPoints,
    },
    /// Touch contacts moved.
    TouchMove {
        /// Current contact points.
        points: TouchPoints,
    },
    /// All fingers lifted (or the touch was cancelled).
    TouchEnd,
    /// The host gained or lost pointer lock.
    PointerLockChanged {
        /// Whether the pointer is now locked to the viewport.
        locked: bool,
    },
    /// The viewport was resized.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

impl InputEvent {
    /// Listener kind that must be attached for this event to be handled.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::CursorMoved { .. } | Self::MouseMotion { .. } => {
                EventKind::PointerMove
            }
            Self::MouseButton { pressed: true, .. } => EventKind::PointerDown,
            Self::MouseButton { pressed: false, .. } | Self::CursorLeft => {
                EventKind::PointerUp
            }
            Self::Scroll { .. } => EventKind::Wheel,
            Self::ModifiersChanged { .. } => EventKind::KeyDown,
            Self::TouchStart { .. } | Self::TouchMove { .. } | Self::TouchEnd => {
                EventKind::Touch
            }
            Self::PointerLockChanged { .. } => EventKind::PointerLock,
            Self::Resized { .. } => EventKind::Resize,
        }
    }
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button (back, forward, extra).
    Other,
}

/// One or two touch contacts. Gestures with more fingers are reported
/// as their first two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchPoints {
    /// Single finger.
    One(Vec2),
    /// Two fingers.
    Two(Vec2, Vec2),
}

impl TouchPoints {
    /// Midpoint of the contacts.
    #[must_use]
    pub fn centroid(&self) -> Vec2 {
        match *self {
            Self::One(p) => p,
            Self::Two(a, b) => (a + b) * 0.5,
        }
    }

    /// Distance between the two contacts (0 for a single finger).
    #[must_use]
    pub fn spread(&self) -> f32 {
        match *self {
            Self::One(_) => 0.0,
            Self::Two(a, b) => a.distance(b),
        }
    }

    /// Number of contacts.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Two(..) => 2,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}
