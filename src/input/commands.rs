//! Held movement flags for the first-person controller.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A movement command that is active while its key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionCommand {
    /// Walk along the view direction (projected on the ground).
    MoveForward,
    /// Walk against the view direction.
    MoveBackward,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
    /// Jump whenever grounded.
    Jump,
    /// Double the per-frame displacement.
    DoubleSpeed,
}

/// Current state of every [`MotionCommand`].
///
/// Flags change only through input (key down / key up / modifier
/// changes); the controller reads them but never clears them during an
/// update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlCommands {
    /// Forward key held.
    pub move_forward: bool,
    /// Backward key held.
    pub move_backward: bool,
    /// Strafe-left key held.
    pub move_left: bool,
    /// Strafe-right key held.
    pub move_right: bool,
    /// Jump key held.
    pub jump: bool,
    /// Sprint modifier held.
    pub double_speed: bool,
}

impl ControlCommands {
    /// Set one flag.
    pub fn set(&mut self, command: MotionCommand, active: bool) {
        *self.flag_mut(command) = active;
    }

    /// Read one flag.
    #[must_use]
    pub fn is_active(&self, command: MotionCommand) -> bool {
        match command {
            MotionCommand::MoveForward => self.move_forward,
            MotionCommand::MoveBackward => self.move_backward,
            MotionCommand::MoveLeft => self.move_left,
            MotionCommand::MoveRight => self.move_right,
            MotionCommand::Jump => self.jump,
            MotionCommand::DoubleSpeed => self.double_speed,
        }
    }

    /// Release every flag.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether forward or backward is held.
    #[must_use]
    pub fn longitudinal(&self) -> bool {
        self.move_forward || self.move_backward
    }

    /// Whether left or right is held.
    #[must_use]
    pub fn lateral(&self) -> bool {
        self.move_left || self.move_right
    }

    /// Unit movement intent in the controller's local frame (+X right,
    /// −Z forward). Zero when nothing is held or opposing keys cancel.
    #[must_use]
    pub fn intent(&self) -> Vec3 {
        let axis = |pos: bool, neg: bool| f32::from(u8::from(pos)) - f32::from(u8::from(neg));
        Vec3::new(
            axis(self.move_right, self.move_left),
            0.0,
            axis(self.move_backward, self.move_forward),
        )
        .normalize_or_zero()
    }

    fn flag_mut(&mut self, command: MotionCommand) -> &mut bool {
        match command {
            MotionCommand::MoveForward => &mut self.move_forward,
            MotionCommand::MoveBackward => &mut self.move_backward,
            MotionCommand::MoveLeft => &mut self.move_left,
            MotionCommand::MoveRight => &mut self.move_right,
            MotionCommand::Jump => &mut self.jump,
            MotionCommand::DoubleSpeed => &mut self.double_speed,
        }
    }
}
