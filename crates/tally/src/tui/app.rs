//! TUI application state
//!
//! Owns the engine and the keypad highlight state. Events are applied
//! strictly in arrival order and the caller re-renders after every one.

use ratatui::layout::Rect;

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::engine::{Calculator, DisplayState};
use crate::event::InputEvent;

/// Terminal calculator application
#[derive(Debug, Default)]
pub struct App {
    calc: Calculator,
    keypad: Keypad,
    should_quit: bool,
}

impl App {
    /// Creates an app with a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self {
            calc: Calculator::new(),
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// Returns the embedded calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Returns the keypad with its highlight state
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Returns the two display lines for the current state
    #[must_use]
    pub fn display(&self) -> DisplayState {
        self.calc.display_state()
    }

    /// Applies one engine event and highlights the matching keypad button
    pub fn apply_event(&mut self, event: InputEvent) {
        self.keypad.highlight_event(event);
        self.calc.apply(event);
    }

    /// Handles one keyboard action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Input(event) => self.apply_event(event),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a pointer click at `(x, y)` given the rendered keypad area
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) {
        let action = self
            .keypad
            .hit_test(keypad_area, x, y)
            .and_then(|(row, col)| self.keypad.button_at(row, col))
            .map(|btn| btn.action);
        if let Some(action) = action {
            self.apply_event(action.event());
        }
    }
}
