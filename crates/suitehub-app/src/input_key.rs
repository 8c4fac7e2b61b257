//! Terminal-independent key input
//!
//! The TUI converts crossterm events into [`InputKey`] so that suitehub-app,
//! and the headless runner built on it, never depend on the terminal library.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character, including space
    Char(char),
    /// Character pressed with Ctrl
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
}

impl InputKey {
    /// Keys that quit from any panel, including the form
    pub fn is_force_quit(&self) -> bool {
        matches!(self, InputKey::CharCtrl('c'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_is_distinct_from_plain_char() {
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
        assert!(InputKey::CharCtrl('c').is_force_quit());
        assert!(!InputKey::Char('c').is_force_quit());
    }
}
