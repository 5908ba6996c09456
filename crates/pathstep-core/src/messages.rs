//! Input events: [`Msg`], [`Key`], [`MouseAction`].

use crate::geom::Pos;

/// A keyboard key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Tab,
    BackTab,
    Space,
    /// A printable character.
    Char(char),
}

/// A mouse action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Secondary (right) button pressed.
    Secondary,
    /// Button released.
    Release,
    /// Pointer moved, with or without a button held.
    Move,
}

/// A message delivered to the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// A key was pressed.
    KeyDown(Key),
    /// A mouse event at a screen position.
    Mouse { action: MouseAction, pos: Pos },
    /// The terminal was resized.
    Screen { rows: i32, cols: i32 },
    /// The interval requested by [`Model::tick_interval`](crate::app::Model::tick_interval)
    /// has elapsed.
    Tick,
    /// Sent once when the application starts.
    Init,
    /// Request to quit.
    Quit,
}

impl Msg {
    /// Convenience: a key press.
    pub fn key(key: Key) -> Self {
        Self::KeyDown(key)
    }

    /// Convenience: a mouse event.
    pub fn mouse(action: MouseAction, pos: Pos) -> Self {
        Self::Mouse { action, pos }
    }
}
