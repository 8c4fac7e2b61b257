//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use suitehub_app::input_key::InputKey;
use suitehub_app::message::Message;
use suitehub_core::prelude::*;

/// Poll timeout; a Tick is produced whenever it elapses
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert a crossterm key event to an [`InputKey`]
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char(c) if ctrl => Some(InputKey::CharCtrl(c)),
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None,
    }
}

/// Wait briefly for a terminal event
///
/// Returns `Tick` on timeout so notices can expire while idle.
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<InputKey> {
        key_event_to_input(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_plain_and_ctrl_chars() {
        assert_eq!(key(KeyCode::Char('s'), KeyModifiers::NONE), Some(InputKey::Char('s')));
        assert_eq!(
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(InputKey::CharCtrl('c'))
        );
        assert_eq!(key(KeyCode::Char('G'), KeyModifiers::SHIFT), Some(InputKey::Char('G')));
    }

    #[test]
    fn test_shift_tab_is_backtab() {
        assert_eq!(key(KeyCode::Tab, KeyModifiers::SHIFT), Some(InputKey::BackTab));
        assert_eq!(key(KeyCode::BackTab, KeyModifiers::NONE), Some(InputKey::BackTab));
        assert_eq!(key(KeyCode::Tab, KeyModifiers::NONE), Some(InputKey::Tab));
    }

    #[test]
    fn test_unsupported_keys_are_ignored() {
        assert_eq!(key(KeyCode::Insert, KeyModifiers::NONE), None);
        assert_eq!(key(KeyCode::F(5), KeyModifiers::NONE), None);
    }
}
