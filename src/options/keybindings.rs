use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::{MotionCommand, OrbitKeyAction};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings.
///
/// Keys are physical key-code strings (`"KeyW"`, `"Space"`, `"ArrowUp"`)
/// so several keys may drive one action:
/// ```toml
/// [keybindings.movement]
/// KeyW = "move_forward"
/// ArrowUp = "move_forward"
/// ```
pub struct KeybindingOptions {
    /// First-person movement keys (held while pressed).
    pub movement: HashMap<String, MotionCommand>,
    /// Orbit keys (fire on press).
    pub orbit: HashMap<String, OrbitKeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let movement = HashMap::from([
            ("KeyW".into(), MotionCommand::MoveForward),
            ("KeyS".into(), MotionCommand::MoveBackward),
            ("KeyA".into(), MotionCommand::MoveLeft),
            ("KeyD".into(), MotionCommand::MoveRight),
            ("Space".into(), MotionCommand::Jump),
            ("ShiftLeft".into(), MotionCommand::DoubleSpeed),
            ("ShiftRight".into(), MotionCommand::DoubleSpeed),
        ]);
        let orbit = HashMap::from([
            ("ArrowUp".into(), OrbitKeyAction::PanUp),
            ("ArrowDown".into(), OrbitKeyAction::PanDown),
            ("ArrowLeft".into(), OrbitKeyAction::PanLeft),
            ("ArrowRight".into(), OrbitKeyAction::PanRight),
            ("KeyR".into(), OrbitKeyAction::ToggleAutoRotate),
            ("Home".into(), OrbitKeyAction::ResetView),
        ]);
        Self { movement, orbit }
    }
}

impl KeybindingOptions {
    /// Movement command bound to a key string.
    #[must_use]
    pub fn movement_for(&self, key: &str) -> Option<MotionCommand> {
        self.movement.get(key).copied()
    }

    /// Orbit action bound to a key string.
    #[must_use]
    pub fn orbit_for(&self, key: &str) -> Option<OrbitKeyAction> {
        self.orbit.get(key).copied()
    }
}
