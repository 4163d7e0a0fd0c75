//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Editor actions bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Escape,
    Up,
    Down,
    Enter,
    NextDropdown,
    PrevDropdown,
    Quit,
    None,
}

/// Map a key event to an action. Key releases map to [`KeyAction::None`].
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c' | 'q') if ctrl => KeyAction::Quit,
        KeyCode::Char(_) if ctrl => KeyAction::None,
        KeyCode::Char(c) => KeyAction::Insert(c),
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Delete => KeyAction::Delete,
        KeyCode::Left => KeyAction::Left,
        KeyCode::Right => KeyAction::Right,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        KeyCode::Esc => KeyAction::Escape,
        KeyCode::Up => KeyAction::Up,
        KeyCode::Down => KeyAction::Down,
        KeyCode::Enter => KeyAction::Enter,
        KeyCode::Tab => KeyAction::NextDropdown,
        KeyCode::BackTab => KeyAction::PrevDropdown,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Quit);

        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Quit);
    }

    #[test]
    fn plain_q_is_text() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), KeyAction::Insert('q'));
        let shifted = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(map_key(shifted), KeyAction::Insert('Q'));
    }

    #[test]
    fn other_ctrl_chords_ignored() {
        let event = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::None);
    }

    #[test]
    fn editing_keys() {
        assert_eq!(map_key(key(KeyCode::Backspace)), KeyAction::Backspace);
        assert_eq!(map_key(key(KeyCode::Delete)), KeyAction::Delete);
        assert_eq!(map_key(key(KeyCode::Left)), KeyAction::Left);
        assert_eq!(map_key(key(KeyCode::Right)), KeyAction::Right);
        assert_eq!(map_key(key(KeyCode::Home)), KeyAction::Home);
        assert_eq!(map_key(key(KeyCode::End)), KeyAction::End);
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(map_key(key(KeyCode::Esc)), KeyAction::Escape);
        assert_eq!(map_key(key(KeyCode::Up)), KeyAction::Up);
        assert_eq!(map_key(key(KeyCode::Down)), KeyAction::Down);
        assert_eq!(map_key(key(KeyCode::Enter)), KeyAction::Enter);
        assert_eq!(map_key(key(KeyCode::Tab)), KeyAction::NextDropdown);
        assert_eq!(map_key(key(KeyCode::BackTab)), KeyAction::PrevDropdown);
    }

    #[test]
    fn release_is_ignored() {
        let mut event = key(KeyCode::Char('a'));
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(event), KeyAction::None);
    }

    #[test]
    fn unknown_key() {
        assert_eq!(map_key(key(KeyCode::F(5))), KeyAction::None);
    }
}
