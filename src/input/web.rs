//! Conversions from browser DOM events.
//!
//! Hosts running in a browser register their own DOM listeners (keeping
//! the returned closures alongside the [`ListenerId`](super::ListenerId)s
//! they were attached for) and forward the converted events to an
//! [`InputProcessor`](super::InputProcessor).

use glam::Vec2;
use web_sys::{KeyboardEvent, MouseEvent, TouchEvent, TouchList, WheelEvent};

use super::event::{InputEvent, MouseButton, TouchPoints};

/// Pointer motion. Locked pointers report relative motion, unlocked ones
/// the position inside the target element.
#[must_use]
pub fn pointer_move(event: &MouseEvent, locked: bool) -> InputEvent {
    if locked {
        InputEvent::MouseMotion {
            dx: event.movement_x() as f32,
            dy: event.movement_y() as f32,
        }
    } else {
        InputEvent::CursorMoved {
            x: event.offset_x() as f32,
            y: event.offset_y() as f32,
        }
    }
}

/// Button press (`mousedown`) or release (`mouseup`).
#[must_use]
pub fn pointer_button(event: &MouseEvent, pressed: bool) -> InputEvent {
    let button = match event.button() {
        0 => MouseButton::Left,
        1 => MouseButton::Middle,
        2 => MouseButton::Right,
        _ => MouseButton::Other,
    };
    InputEvent::MouseButton { button, pressed }
}

/// `wheel` event. DOM `deltaY` already uses the "positive moves away"
/// convention.
#[must_use]
pub fn wheel(event: &WheelEvent) -> InputEvent {
    InputEvent::Scroll {
        delta: event.delta_y() as f32,
    }
}

/// Physical key code and the shift state carried by a `keydown`/`keyup`.
#[must_use]
pub fn key(event: &KeyboardEvent) -> (String, InputEvent) {
    (
        event.code(),
        InputEvent::ModifiersChanged {
            shift: event.shift_key(),
        },
    )
}

/// `touchstart`. Returns `None` if no contacts remain.
#[must_use]
pub fn touch_start(event: &TouchEvent) -> Option<InputEvent> {
    touch_points(&event.touches()).map(|points| InputEvent::TouchStart { points })
}

/// `touchmove`.
#[must_use]
pub fn touch_move(event: &TouchEvent) -> Option<InputEvent> {
    touch_points(&event.touches()).map(|points| InputEvent::TouchMove { points })
}

/// `touchend` / `touchcancel`. Lifting one of two fingers restarts the
/// gesture with the remaining contact.
#[must_use]
pub fn touch_end(event: &TouchEvent) -> InputEvent {
    touch_points(&event.touches())
        .map_or(InputEvent::TouchEnd, |points| InputEvent::TouchStart { points })
}

fn touch_points(list: &TouchList) -> Option<TouchPoints> {
    let point = |index| {
        list.get(index)
            .map(|touch| Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
    };
    match (point(0), point(1)) {
        (Some(a), Some(b)) => Some(TouchPoints::Two(a, b)),
        (Some(a), None) => Some(TouchPoints::One(a)),
        _ => None,
    }
}
