//! Key bindings of the overlay, one pure function so the mapping is
//! testable without a terminal.
//!
//! Inherited bindings: a-z append to the query, Esc cancels, Ctrl+H /
//! Backspace erase, Ctrl+W and Ctrl+C clear, Ctrl+J / Space / Enter
//! confirm, Ctrl+N / Tab advance, Ctrl+P / Shift+Tab go back, Alt+1..9
//! jump straight to a visible candidate.

use crate::events::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    let mods = key.modifiers;

    match key.code {
        KeyCode::Esc => Some(InputEvent::Cancel),
        KeyCode::Enter => Some(InputEvent::Confirm),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Tab => Some(InputEvent::Next),
        KeyCode::BackTab => Some(InputEvent::Prev),
        KeyCode::Down => Some(InputEvent::Next),
        KeyCode::Up => Some(InputEvent::Prev),
        KeyCode::Char(c) if mods.contains(KeyModifiers::CONTROL) => match c {
            'h' => Some(InputEvent::Backspace),
            'w' | 'c' => Some(InputEvent::Clear),
            'j' => Some(InputEvent::Confirm),
            'n' => Some(InputEvent::Next),
            'p' => Some(InputEvent::Prev),
            _ => None,
        },
        KeyCode::Char(c) if mods.contains(KeyModifiers::ALT) => match c {
            '1'..='9' => Some(InputEvent::JumpTo(c as usize - '1' as usize)),
            _ => None,
        },
        KeyCode::Char(' ') if mods.is_empty() => Some(InputEvent::Confirm),
        // Запрос строится только из строчных латинских букв
        KeyCode::Char(c) if mods.is_empty() && c.is_ascii_lowercase() => {
            Some(InputEvent::AppendChar(c))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        let mut event = KeyEvent::new(code, mods);
        event.kind = KeyEventKind::Press;
        event
    }

    #[test]
    fn lowercase_letters_append() {
        assert_eq!(
            map_key(&key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(InputEvent::AppendChar('q'))
        );
    }

    #[test]
    fn digits_and_uppercase_are_ignored() {
        assert_eq!(map_key(&key(KeyCode::Char('5'), KeyModifiers::NONE)), None);
        assert_eq!(map_key(&key(KeyCode::Char('Q'), KeyModifiers::SHIFT)), None);
    }

    #[test]
    fn control_chords() {
        assert_eq!(
            map_key(&key(KeyCode::Char('h'), KeyModifiers::CONTROL)),
            Some(InputEvent::Backspace)
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            Some(InputEvent::Clear)
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Clear)
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('j'), KeyModifiers::CONTROL)),
            Some(InputEvent::Confirm)
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(InputEvent::Next)
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('p'), KeyModifiers::CONTROL)),
            Some(InputEvent::Prev)
        );
    }

    #[test]
    fn alt_digits_jump_to_zero_based_slots() {
        assert_eq!(
            map_key(&key(KeyCode::Char('1'), KeyModifiers::ALT)),
            Some(InputEvent::JumpTo(0))
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('9'), KeyModifiers::ALT)),
            Some(InputEvent::JumpTo(8))
        );
        assert_eq!(map_key(&key(KeyCode::Char('0'), KeyModifiers::ALT)), None);
    }

    #[test]
    fn navigation_and_session_keys() {
        assert_eq!(
            map_key(&key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(InputEvent::Cancel)
        );
        assert_eq!(
            map_key(&key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(InputEvent::Confirm)
        );
        assert_eq!(
            map_key(&key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(InputEvent::Confirm)
        );
        assert_eq!(
            map_key(&key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(InputEvent::Next)
        );
        assert_eq!(
            map_key(&key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(InputEvent::Prev)
        );
        assert_eq!(
            map_key(&key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(InputEvent::Backspace)
        );
    }
}
