//! Input handling: event types, listener registration, and the input
//! processor that converts raw window events into camera commands.

/// Held movement flags for first-person control.
pub mod commands;
/// Platform-agnostic input events.
pub mod event;
/// Bindable orbit-mode key actions.
pub mod keyboard;
/// Explicit listener subscriptions with detachable handles.
pub mod listeners;
/// Cursor, drag, and touch tracking.
pub(crate) mod mouse;
/// Converts raw events into camera commands.
pub mod processor;
/// Conversions from browser DOM events.
#[cfg(feature = "web")]
pub mod web;

pub use commands::{ControlCommands, MotionCommand};
pub use event::{InputEvent, MouseButton, TouchPoints};
pub use keyboard::OrbitKeyAction;
pub use listeners::{EventKind, ListenerId, ListenerRegistry};
pub use processor::{ControlMode, InputProcessor};
