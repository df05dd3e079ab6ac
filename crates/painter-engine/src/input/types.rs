/// Mouse button as reported by the window collaborator.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Pointer event in logical pixels of the snapshot surface.
///
/// Button events carry the pointer position so a press can be hit-tested
/// without tracking the last move.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Moved { x: f32, y: f32 },
    Button { button: MouseButton, state: ButtonState, x: f32, y: f32 },
    /// The pointer left the window; an active grab is kept.
    Left,
}

impl PointerEvent {
    #[inline]
    pub fn moved(x: f32, y: f32) -> Self {
        PointerEvent::Moved { x, y }
    }

    #[inline]
    pub fn pressed(button: MouseButton, x: f32, y: f32) -> Self {
        PointerEvent::Button { button, state: ButtonState::Pressed, x, y }
    }

    #[inline]
    pub fn released(button: MouseButton, x: f32, y: f32) -> Self {
        PointerEvent::Button { button, state: ButtonState::Released, x, y }
    }
}
