//! Canonical input-event vocabulary
//!
//! Every input adapter (keyboard, pointer) translates raw input into these
//! five events; the engine consumes them strictly in arrival order. Events
//! are serde-serializable so whole sessions can be scripted and replayed.

use serde::{Deserialize, Serialize};

use crate::engine::Operation;

/// A single discrete calculator input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    /// A digit `'0'..='9'` or the decimal point `'.'`
    Digit(char),
    /// Select one of the four binary operators
    Operator(Operation),
    /// Fold the pending operation into the current operand
    Equals,
    /// Reset to the initial state
    Clear,
    /// Remove the last character of the operand under construction
    Backspace,
}

impl InputEvent {
    /// Maps a raw keyboard character to an event
    ///
    /// Covers `0-9`, `.`, the four operator symbols, and `=`. Anything else
    /// is outside the vocabulary; control keys (Enter, Backspace, Escape)
    /// are mapped by the adapters since they are not characters.
    #[must_use]
    pub fn from_key_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(Self::Digit(c)),
            '=' => Some(Self::Equals),
            _ => Operation::from_symbol(c).map(Self::Operator),
        }
    }
}
