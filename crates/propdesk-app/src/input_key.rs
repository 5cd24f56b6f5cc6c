//! Terminal-independent key events
//!
//! The TUI converts crossterm events into [`InputKey`] at its boundary so the
//! handlers here never depend on a terminal library.

/// A key press as seen by the handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character with Ctrl held (Ctrl+S saves, Ctrl+C force-quits)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
}
