use glam::Vec2;

use super::event::MouseButton;

/// Tracks cursor position, the button driving a drag, touch contact count
/// and the shift modifier.
#[derive(Debug, Default)]
pub(crate) struct PointerState {
    pub position: Vec2,
    pub drag_button: Option<MouseButton>,
    pub touch_count: usize,
    pub shift: bool,
    pub locked: bool,
}

impl PointerState {
    /// Record a new cursor position.
    pub fn handle_cursor(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Start a drag with `button` unless one is already in progress.
    /// Returns whether the drag started.
    pub fn begin_drag(&mut self, button: MouseButton) -> bool {
        if self.drag_button.is_some() {
            return false;
        }
        self.drag_button = Some(button);
        true
    }

    /// End the drag if `button` started it.
    pub fn end_drag(&mut self, button: MouseButton) -> bool {
        if self.drag_button == Some(button) {
            self.drag_button = None;
            true
        } else {
            false
        }
    }

    /// Forget any drag or touch gesture in progress.
    pub fn cancel(&mut self) {
        self.drag_button = None;
        self.touch_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_starting_button_ends_a_drag() {
        let mut pointer = PointerState::default();
        assert!(pointer.begin_drag(MouseButton::Left));
        assert!(!pointer.begin_drag(MouseButton::Right));
        assert!(!pointer.end_drag(MouseButton::Right));
        assert!(pointer.end_drag(MouseButton::Left));
        assert!(pointer.drag_button.is_none());
    }
}
