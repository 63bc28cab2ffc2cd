//! Terminal key mapping
//!
//! Script characters and crossterm key events are both turned into the
//! DOM-style key names understood by [`keycalc::driver::Calculator::handle_key`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of reading one terminal key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    /// Key name to forward to the calculator
    Key(String),
    /// Leave interactive mode
    Quit,
    /// Nothing to do
    Ignore,
}

/// Maps one script character to a key name. Whitespace yields `None`.
#[must_use]
pub fn script_key(ch: char) -> Option<String> {
    match ch {
        c if c.is_whitespace() => None,
        '<' => Some("Backspace".to_string()),
        'c' | 'C' => Some("Escape".to_string()),
        _ => Some(ch.to_string()),
    }
}

/// Splits a key script into key names
#[must_use]
pub fn script_keys(script: &str) -> Vec<String> {
    script.chars().filter_map(script_key).collect()
}

impl KeyInput {
    /// Maps a crossterm key event
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return Self::Ignore;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => Self::Quit,
                KeyCode::Char('u' | 'l') => Self::Key("Escape".to_string()),
                _ => Self::Ignore,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') => Self::Quit,
            KeyCode::Char(ch) => script_key(ch).map_or(Self::Ignore, Self::Key),
            KeyCode::Enter => Self::Key("Enter".to_string()),
            KeyCode::Backspace | KeyCode::Delete => Self::Key("Backspace".to_string()),
            KeyCode::Esc => Self::Key("Escape".to_string()),
            _ => Self::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn named(name: &str) -> KeyInput {
        KeyInput::Key(name.to_string())
    }

    // ===== Script keys =====

    #[test]
    fn test_script_key_passthrough() {
        for ch in "0123456789.+-*/()=x".chars() {
            assert_eq!(script_key(ch), Some(ch.to_string()));
        }
    }

    #[test]
    fn test_script_key_specials() {
        assert_eq!(script_key('<').as_deref(), Some("Backspace"));
        assert_eq!(script_key('c').as_deref(), Some("Escape"));
        assert_eq!(script_key('C').as_deref(), Some("Escape"));
    }

    #[test]
    fn test_script_keys_skips_whitespace() {
        assert_eq!(script_keys(" 1 +\n2\t= "), ["1", "+", "2", "="]);
        assert!(script_keys("   ").is_empty());
    }

    // ===== Terminal events =====

    #[test]
    fn test_event_characters() {
        assert_eq!(KeyInput::from_event(key(KeyCode::Char('7'))), named("7"));
        assert_eq!(KeyInput::from_event(key(KeyCode::Char('*'))), named("*"));
        assert_eq!(KeyInput::from_event(key(KeyCode::Char('c'))), named("Escape"));
        assert_eq!(KeyInput::from_event(key(KeyCode::Char(' '))), KeyInput::Ignore);
    }

    #[test]
    fn test_event_named_keys() {
        assert_eq!(KeyInput::from_event(key(KeyCode::Enter)), named("Enter"));
        assert_eq!(KeyInput::from_event(key(KeyCode::Backspace)), named("Backspace"));
        assert_eq!(KeyInput::from_event(key(KeyCode::Delete)), named("Backspace"));
        assert_eq!(KeyInput::from_event(key(KeyCode::Esc)), named("Escape"));
        assert_eq!(KeyInput::from_event(key(KeyCode::Left)), KeyInput::Ignore);
    }

    #[test]
    fn test_event_quit() {
        assert_eq!(KeyInput::from_event(key(KeyCode::Char('q'))), KeyInput::Quit);
        assert_eq!(KeyInput::from_event(ctrl('c')), KeyInput::Quit);
        assert_eq!(KeyInput::from_event(ctrl('q')), KeyInput::Quit);
    }

    #[test]
    fn test_event_ctrl_combinations() {
        assert_eq!(KeyInput::from_event(ctrl('u')), named("Escape"));
        assert_eq!(KeyInput::from_event(ctrl('x')), KeyInput::Ignore);
    }

    #[test]
    fn test_event_release_ignored() {
        let mut event = key(KeyCode::Char('5'));
        event.kind = KeyEventKind::Release;
        assert_eq!(KeyInput::from_event(event), KeyInput::Ignore);
    }
}
