//! Input event arguments delivered to widget hooks

use crate::geometry::Vec2;

/// Pointer press/release/enter/leave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEventArgs {
    /// Screen-space pointer position
    pub position: Vec2,
    /// Button involved, `None` for enter/leave and moves
    pub button: Option<MouseButton>,
    pub modifiers: Modifiers,
}

impl PointerEventArgs {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            button: None,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = Some(button);
        self
    }
}

/// Key press or typed character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardEventArgs {
    pub key: Key,
    /// Character produced by the key, if any
    pub character: Option<char>,
    pub modifiers: Modifiers,
}

impl KeyboardEventArgs {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            character: None,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_character(mut self, character: char) -> Self {
        self.character = Some(character);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,  // Cmd on Mac, Win on Windows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Numbers
    Num0, Num1, Num2, Num3, Num4,
    Num5, Num6, Num7, Num8, Num9,

    // Function keys
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,

    // Special keys
    Escape, Tab, CapsLock, Shift, Control, Alt, Meta,
    Space, Enter, Backspace, Delete,

    // Navigation
    Up, Down, Left, Right,
    Home, End, PageUp, PageDown,

    // Other
    Unknown,
}
