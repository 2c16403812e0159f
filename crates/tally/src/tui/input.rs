//! Keyboard input adapter
//!
//! Maps raw crossterm key events onto the calculator vocabulary. This is
//! glue, not logic: anything the engine does not understand becomes
//! [`KeyAction::None`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::event::InputEvent;

/// Actions produced by the keyboard adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an engine input event
    Input(InputEvent),
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => {
                InputEvent::from_key_char(c).map_or(KeyAction::None, KeyAction::Input)
            }
            KeyCode::Enter => KeyAction::Input(InputEvent::Equals),
            KeyCode::Backspace => KeyAction::Input(InputEvent::Backspace),
            KeyCode::Esc => KeyAction::Input(InputEvent::Clear),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Operation;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Digit and operator keys =====

    #[test]
    fn test_digit_keys() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Input(InputEvent::Digit(c))
            );
        }
    }

    #[test]
    fn test_decimal_point_key() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Input(InputEvent::Digit('.'))
        );
    }

    #[test]
    fn test_operator_keys() {
        let handler = InputHandler::new();
        let cases = [
            ('+', Operation::Add),
            ('-', Operation::Subtract),
            ('*', Operation::Multiply),
            ('/', Operation::Divide),
        ];
        for (c, op) in cases {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Input(InputEvent::Operator(op))
            );
        }
    }

    // ===== Control keys =====

    #[test]
    fn test_enter_and_equals_evaluate() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Input(InputEvent::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Input(InputEvent::Equals)
        );
    }

    #[test]
    fn test_backspace_deletes() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Input(InputEvent::Backspace)
        );
    }

    #[test]
    fn test_escape_clears() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            KeyAction::Input(InputEvent::Clear)
        );
    }

    // ===== Quit keys =====

    #[test]
    fn test_q_quits() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_ctrl_c_and_ctrl_q_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_ctrl_other_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('5'))),
            KeyAction::None
        );
    }

    // ===== Ignored keys =====

    #[test]
    fn test_unknown_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Tab)), KeyAction::None);
        assert_eq!(
            handler.handle_key(key_event(KeyCode::F(1))),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('x'))),
            KeyAction::None
        );
    }
}
