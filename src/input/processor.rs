//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! drag ownership, touch contact count, modifier keys), the listener
//! subscriptions of the active control mode, and the binding maps. It is
//! the only thing that sits between raw window events and
//! [`CameraRig::execute`](crate::rig::CameraRig::execute).

use glam::Vec2;

use super::event::{InputEvent, TouchPoints};
use super::keyboard::OrbitKeyAction;
use super::listeners::{EventKind, ListenerId, ListenerRegistry};
use super::mouse::PointerState;
use super::MotionCommand;
use crate::camera::orbit::InteractionMode;
use crate::options::{KeybindingOptions, MouseButtonMap, Options};
use crate::rig::CameraCommand;

/// Which controller the processor is translating input for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlMode {
    /// Orbit around a target point.
    Orbit,
    /// Pointer-locked first-person walking.
    FirstPerson,
}

impl ControlMode {
    /// Listeners kept for as long as the mode is attached. Orbit mode
    /// subscribes to pointer move/up only while a drag is in progress.
    fn persistent_listeners(self) -> &'static [EventKind] {
        match self {
            Self::Orbit => &[
                EventKind::PointerDown,
                EventKind::Wheel,
                EventKind::KeyDown,
                EventKind::Touch,
                EventKind::Resize,
            ],
            Self::FirstPerson => &[
                EventKind::PointerMove,
                EventKind::KeyDown,
                EventKind::KeyUp,
                EventKind::PointerLock,
                EventKind::Resize,
            ],
        }
    }
}

/// Converts raw window events into [`CameraCommand`]s.
///
/// # Usage
///
/// ```ignore
/// let mut input = InputProcessor::new(&options);
/// input.attach(ControlMode::Orbit);
///
/// // In the event loop:
/// if let Some(cmd) = input.handle_event(event) {
///     rig.execute(cmd);
/// }
/// if let Some(cmd) = input.handle_key("ArrowUp", true) {
///     rig.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    pointer: PointerState,
    listeners: ListenerRegistry,
    mode: Option<ControlMode>,
    /// Ids registered by [`attach`](Self::attach).
    mode_handles: Vec<ListenerId>,
    /// Ids registered for the lifetime of one mouse drag.
    drag_handles: Vec<ListenerId>,
    mouse_buttons: MouseButtonMap,
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a detached processor using the bindings in `options`.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            pointer: PointerState::default(),
            listeners: ListenerRegistry::new(),
            mode: None,
            mode_handles: Vec::new(),
            drag_handles: Vec::new(),
            mouse_buttons: options.orbit.mouse_buttons,
            key_bindings: options.keybindings.clone(),
        }
    }

    /// Replace the mouse-button and keyboard bindings.
    pub fn set_bindings(&mut self, options: &Options) {
        self.mouse_buttons = options.orbit.mouse_buttons;
        self.key_bindings = options.keybindings.clone();
    }

    /// Mode currently attached, if any.
    #[must_use]
    pub fn mode(&self) -> Option<ControlMode> {
        self.mode
    }

    /// Live listener subscriptions.
    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn cursor_position(&self) -> Vec2 {
        self.pointer.position
    }

    /// Whether a mouse drag currently owns the pointer.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pointer.drag_button.is_some()
    }

    /// Whether the host reported the pointer as locked.
    #[must_use]
    pub fn pointer_locked(&self) -> bool {
        self.pointer.locked
    }

    /// Subscribe to the listeners `mode` needs, detaching any previous
    /// mode first. Attaching the already-attached mode is a no-op.
    pub fn attach(&mut self, mode: ControlMode) {
        if self.mode == Some(mode) {
            return;
        }
        self.detach();
        for kind in mode.persistent_listeners() {
            self.mode_handles.push(self.listeners.attach(*kind));
        }
        self.mode = Some(mode);
        log::debug!("input attached for {mode:?}");
    }

    /// Remove every listener this processor registered. Safe to call
    /// repeatedly.
    pub fn detach(&mut self) {
        self.release_drag();
        self.listeners.detach_all(&mut self.mode_handles);
        self.pointer.cancel();
        if let Some(mode) = self.mode.take() {
            log::debug!("input detached from {mode:?}");
        }
    }

    /// Drop the drag-scoped listeners. Also called when the controller
    /// refuses to start an interaction.
    pub fn release_drag(&mut self) {
        self.pointer.drag_button = None;
        self.listeners.detach_all(&mut self.drag_handles);
    }

    /// Translate one event. Returns `None` when no listener for the
    /// event's kind is attached or the event maps to nothing.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.pointer.handle_cursor(x, y),
            InputEvent::PointerLockChanged { locked } => self.pointer.locked = locked,
            _ => {}
        }
        if !self.listeners.is_listening(event.kind()) {
            return None;
        }
        match self.mode? {
            ControlMode::Orbit => self.orbit_event(event),
            ControlMode::FirstPerson => Self::first_person_event(&mut self.pointer, event),
        }
    }

    /// Translate a key press or release. `key` uses the
    /// `KeyboardEvent.code` / `winit::keyboard::KeyCode` debug format
    /// (`"KeyW"`, `"ArrowUp"`, `"Space"`).
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> Option<CameraCommand> {
        let kind = if pressed { EventKind::KeyDown } else { EventKind::KeyUp };
        if !self.listeners.is_listening(kind) {
            return None;
        }
        match self.mode? {
            ControlMode::Orbit if pressed => {
                self.key_bindings.orbit_for(key).map(orbit_key_command)
            }
            ControlMode::Orbit => None,
            ControlMode::FirstPerson => {
                self.key_bindings
                    .movement_for(key)
                    .map(|command| CameraCommand::SetCommand {
                        command,
                        active: pressed,
                    })
            }
        }
    }

    fn orbit_event(&mut self, event: InputEvent) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { .. } => {
                self.pointer.drag_button.map(|_| CameraCommand::ContinueInteraction {
                    position: self.pointer.position,
                })
            }
            InputEvent::MouseButton {
                button,
                pressed: true,
            } => {
                let mode = self.mouse_buttons.mode_for(button)?;
                if !self.pointer.begin_drag(button) {
                    return None;
                }
                self.drag_handles
                    .push(self.listeners.attach(EventKind::PointerMove));
                self.drag_handles
                    .push(self.listeners.attach(EventKind::PointerUp));
                Some(CameraCommand::BeginInteraction {
                    mode,
                    start: self.pointer.position,
                })
            }
            InputEvent::MouseButton {
                button,
                pressed: false,
            } => {
                if !self.pointer.end_drag(button) {
                    return None;
                }
                self.release_drag();
                Some(CameraCommand::EndInteraction)
            }
            InputEvent::CursorLeft => {
                if self.pointer.drag_button.is_none() {
                    return None;
                }
                self.release_drag();
                Some(CameraCommand::EndInteraction)
            }
            InputEvent::Scroll { delta } => Some(CameraCommand::Wheel { delta }),
            InputEvent::TouchStart { points } => Some(self.touch_begin(points)),
            InputEvent::TouchMove { points } => {
                if points.count() != self.pointer.touch_count {
                    return Some(self.touch_begin(points));
                }
                Some(match points {
                    TouchPoints::One(position) => {
                        CameraCommand::ContinueInteraction { position }
                    }
                    TouchPoints::Two(..) => CameraCommand::ContinuePinch {
                        midpoint: points.centroid(),
                        spread: points.spread(),
                    },
                })
            }
            InputEvent::TouchEnd => {
                self.pointer.touch_count = 0;
                Some(CameraCommand::EndInteraction)
            }
            InputEvent::Resized { width, height } => {
                Some(CameraCommand::Resize { width, height })
            }
            _ => None,
        }
    }

    fn first_person_event(
        pointer: &mut PointerState,
        event: InputEvent,
    ) -> Option<CameraCommand> {
        match event {
            InputEvent::MouseMotion { dx, dy } if pointer.locked => {
                Some(CameraCommand::Look { dx, dy })
            }
            InputEvent::ModifiersChanged { shift } if shift != pointer.shift => {
                pointer.shift = shift;
                Some(CameraCommand::SetCommand {
                    command: MotionCommand::DoubleSpeed,
                    active: shift,
                })
            }
            InputEvent::PointerLockChanged { locked } => {
                Some(CameraCommand::PointerLockChanged { locked })
            }
            InputEvent::Resized { width, height } => {
                Some(CameraCommand::Resize { width, height })
            }
            _ => None,
        }
    }

    fn touch_begin(&mut self, points: TouchPoints) -> CameraCommand {
        self.pointer.touch_count = points.count();
        match points {
            TouchPoints::One(start) => CameraCommand::BeginInteraction {
                mode: InteractionMode::TouchRotate,
                start,
            },
            TouchPoints::Two(..) => CameraCommand::BeginPinch {
                midpoint: points.centroid(),
                spread: points.spread(),
            },
        }
    }
}

/// Key pans carry unit steps; the controller scales them by its key pan
/// speed.
fn orbit_key_command(action: OrbitKeyAction) -> CameraCommand {
    match action {
        OrbitKeyAction::PanUp => CameraCommand::KeyPan { dx: 0.0, dy: 1.0 },
        OrbitKeyAction::PanDown => CameraCommand::KeyPan { dx: 0.0, dy: -1.0 },
        OrbitKeyAction::PanLeft => CameraCommand::KeyPan { dx: 1.0, dy: 0.0 },
        OrbitKeyAction::PanRight => CameraCommand::KeyPan { dx: -1.0, dy: 0.0 },
        OrbitKeyAction::ToggleAutoRotate => CameraCommand::ToggleAutoRotate,
        OrbitKeyAction::ResetView => CameraCommand::ResetView,
    }
}
