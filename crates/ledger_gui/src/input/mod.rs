//! Input handling
//!
//! Collects the raw mouse and keyboard callbacks of the host engine and turns
//! them into one [`InputFrame`] per rendered frame: the mouse position, the
//! discrete clicks and typed keys since the previous frame, and the frame's
//! partial tick.

use crate::foundation::math::Coordinate2D;

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

impl MouseButton {
    /// Zero-based button index as reported by the engine
    pub const fn index(self) -> u32 {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
        }
    }

    /// Button for an engine index; unknown indices map to `None`
    pub const fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Right),
            2 => Some(MouseButton::Middle),
            _ => None,
        }
    }
}

/// Discrete input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed at a screen position
    MouseClicked {
        /// Screen position of the click
        position: Coordinate2D,
        /// Button pressed
        button: MouseButton,
    },
    /// Character typed
    KeyTyped(char),
}

/// Everything the GUI needs to know about one frame
#[derive(Debug, Clone, PartialEq)]
pub struct InputFrame {
    /// Mouse position at the end of the frame
    pub mouse: Coordinate2D,
    /// Fraction of the current game tick elapsed, in `[0, 1]`
    pub partial_tick: f32,
    /// Events in arrival order
    pub events: Vec<InputEvent>,
}

/// Accumulates engine input between frames
///
/// Clicks fire on the press edge of a button, matching how screens react
/// to `mouseClicked` rather than to the release.
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Current mouse position in screen coordinates
    mouse: Coordinate2D,
    /// Buttons currently held
    held: Vec<MouseButton>,
    /// Events since the last frame
    events: Vec<InputEvent>,
}

impl InputProcessor {
    /// Create a new input processor
    pub fn new() -> Self {
        Self::default()
    }

    /// Update mouse position
    pub fn update_mouse_position(&mut self, x: i32, y: i32) {
        self.mouse = Coordinate2D::new(x, y);
    }

    /// Update mouse button state
    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        let was_down = self.held.contains(&button);

        if pressed && !was_down {
            self.held.push(button);
            self.events.push(InputEvent::MouseClicked {
                position: self.mouse,
                button,
            });
        } else if !pressed && was_down {
            self.held.retain(|held| *held != button);
        }
    }

    /// Record a typed character
    pub fn key_typed(&mut self, key: char) {
        self.events.push(InputEvent::KeyTyped(key));
    }

    /// Get current mouse position
    pub fn mouse_position(&self) -> Coordinate2D {
        self.mouse
    }

    /// Close the current frame and hand out its input
    ///
    /// `partial_tick` is clamped into `[0, 1]`.
    pub fn finish_frame(&mut self, partial_tick: f32) -> InputFrame {
        InputFrame {
            mouse: self.mouse,
            partial_tick: partial_tick.clamp(0.0, 1.0),
            events: std::mem::take(&mut self.events),
        }
    }
}
