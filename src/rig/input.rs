//! Event dispatch and command execution for [`CameraRig`].

use super::{ActiveController, CameraCommand, CameraRig};
use crate::camera::{Camera, FirstPersonController, OrbitController};
use crate::input::{InputEvent, InputProcessor};

impl CameraRig {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Returns `true` if the event
    /// produced a command (whether or not the active controller acted on
    /// it).
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match self.input.handle_event(event) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// Process a key press or release by `KeyboardEvent.code` string.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        match self.input.handle_key(key, pressed) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// Run one command against the rig.
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::Resize { width, height } => self.resize(width, height),
            CameraCommand::SwitchMode { mode } => self.switch_to(mode),
            _ => match &mut self.active {
                ActiveController::Orbit(orbit) => {
                    execute_orbit(orbit, &mut self.camera, &mut self.input, command);
                }
                ActiveController::FirstPerson(walker) => {
                    execute_first_person(walker, command);
                }
            },
        }
    }
}

fn execute_orbit(
    orbit: &mut OrbitController,
    camera: &mut Camera,
    input: &mut InputProcessor,
    command: CameraCommand,
) {
    match command {
        CameraCommand::BeginInteraction { mode, start } => {
            orbit.begin_interaction(mode, start);
            if orbit.state().is_none() {
                input.release_drag();
            }
        }
        CameraCommand::BeginPinch { midpoint, spread } => {
            orbit.begin_pinch(midpoint, spread);
        }
        CameraCommand::ContinueInteraction { position } => {
            orbit.continue_interaction(camera, position);
        }
        CameraCommand::ContinuePinch { midpoint, spread } => {
            orbit.continue_pinch(camera, midpoint, spread);
        }
        CameraCommand::EndInteraction => orbit.end_interaction(),
        CameraCommand::Wheel { delta } => orbit.wheel(camera, delta),
        CameraCommand::KeyPan { dx, dy } => orbit.key_pan(camera, dx, dy),
        CameraCommand::ToggleAutoRotate => {
            let _ = orbit.toggle_auto_rotate();
        }
        CameraCommand::ResetView => {
            let _ = orbit.reset(camera);
        }
        other => log::trace!("orbit ignores {other:?}"),
    }
}

fn execute_first_person(walker: &mut FirstPersonController, command: CameraCommand) {
    match command {
        CameraCommand::Look { dx, dy } => walker.apply_look(dx, dy),
        CameraCommand::SetCommand { command, active } => {
            walker.set_command(command, active);
        }
        CameraCommand::PointerLockChanged { locked } => {
            if !locked {
                walker.halt();
            }
            log::debug!("pointer lock {}", if locked { "acquired" } else { "lost" });
        }
        other => log::trace!("first-person ignores {other:?}"),
    }
}
