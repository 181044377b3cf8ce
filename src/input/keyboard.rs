use serde::{Deserialize, Serialize};

/// Orbit-mode actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.orbit]
/// ArrowUp = "pan_up"
/// KeyR = "toggle_auto_rotate"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitKeyAction {
    /// Pan the target up (or forward on the ground plane).
    PanUp,
    /// Pan the target down (or backward on the ground plane).
    PanDown,
    /// Pan the view left.
    PanLeft,
    /// Pan the view right.
    PanRight,
    /// Toggle idle auto-rotation.
    ToggleAutoRotate,
    /// Restore the last saved view.
    ResetView,
}
