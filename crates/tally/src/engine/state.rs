//! The calculator state machine
//!
//! One `Calculator` value is created at startup and mutated in place by
//! every input event; `clear` resets it to the initial state. All
//! transitions are total: invalid input is rejected as a no-op.

use crate::engine::format::{format_operand, DisplayState};
use crate::engine::{CalcError, CalcResult, Operation};
use crate::event::InputEvent;

/// In-band sentinel shown after division by zero
///
/// The sentinel is terminal: every mutation except [`Calculator::clear`] is
/// a no-op while it occupies the current operand.
pub const ERROR_SENTINEL: &str = "Error";

/// The calculator state machine
///
/// Owns the two operand strings, the single pending operation, and the
/// flag that marks the current operand as committed. State invariants:
///
/// - the current operand is a decimal numeral string, the `Error`
///   sentinel, or empty only transiently inside a transition
/// - the current operand holds at most one decimal point
/// - leading zeros are never retained (beyond `"0"` and `"0."` prefixes)
/// - an empty previous operand means no operation is pending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    /// Operand being typed, or the last computed result
    current: String,
    /// Operand captured when an operator was chosen; empty when none
    previous: String,
    /// The single pending binary operation
    operation: Option<Operation>,
    /// True when the next digit starts a fresh operand
    awaiting_new_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator in the initial state: current `"0"`, nothing
    /// pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: String::new(),
            operation: None,
            awaiting_new_operand: false,
        }
    }

    /// Returns the operand being typed or last computed
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current
    }

    /// Returns the captured operand awaiting the pending operation; empty
    /// when no operation is pending
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.previous
    }

    /// Returns the pending binary operation, if any
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Returns true when the next digit starts a fresh operand
    #[must_use]
    pub fn awaiting_new_operand(&self) -> bool {
        self.awaiting_new_operand
    }

    /// Returns true while the division-by-zero sentinel is displayed
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.current == ERROR_SENTINEL
    }

    /// Dispatches one input event to the matching transition
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Digit(token) => self.append_digit(token),
            InputEvent::Operator(op) => self.choose_operation(op),
            InputEvent::Equals => self.compute(),
            InputEvent::Clear => self.clear(),
            InputEvent::Backspace => self.delete_last(),
        }
    }

    /// Appends a digit or the decimal point to the current operand
    ///
    /// Rejected as a no-op: tokens outside `0-9` and `.`, a second decimal
    /// point, and a redundant leading zero. A lone `"0"` is replaced by the
    /// incoming digit rather than extended.
    pub fn append_digit(&mut self, token: char) {
        if self.is_error() {
            return;
        }
        if !token.is_ascii_digit() && token != '.' {
            return;
        }
        if self.awaiting_new_operand {
            self.current.clear();
            self.awaiting_new_operand = false;
        }
        if token == '.' && self.current.contains('.') {
            return;
        }
        if token == '0' && self.current == "0" {
            return;
        }
        if token != '.' && self.current == "0" {
            self.current = token.to_string();
            return;
        }
        self.current.push(token);
    }

    /// Records `op` as the pending operation
    ///
    /// An already-pending operation is folded in first via [`compute`],
    /// giving chained operators left-to-right evaluation with no
    /// precedence. The current operand is retained as the display value
    /// until the next digit replaces it.
    ///
    /// [`compute`]: Calculator::compute
    pub fn choose_operation(&mut self, op: Operation) {
        if self.is_error() || self.current.is_empty() {
            return;
        }
        if !self.previous.is_empty() {
            self.compute();
            if self.is_error() {
                return;
            }
        }
        self.operation = Some(op);
        self.previous = self.current.clone();
        self.awaiting_new_operand = true;
    }

    /// Folds the pending operation into the current operand
    ///
    /// No-op unless an operation is pending and both operands parse as
    /// decimal numbers. Division by zero and results outside the finite
    /// double range replace the current operand with the [`ERROR_SENTINEL`]
    /// and clear the pending state; only `clear` leaves that state.
    pub fn compute(&mut self) {
        if self.is_error() {
            return;
        }
        let Some(op) = self.operation else {
            return;
        };
        let Ok(lhs) = Self::parse_operand(&self.previous) else {
            return;
        };
        let Ok(rhs) = Self::parse_operand(&self.current) else {
            return;
        };
        match op.apply(lhs, rhs) {
            Ok(value) => self.current = value.to_string(),
            Err(CalcError::DivisionByZero | CalcError::Overflow) => {
                self.current = ERROR_SENTINEL.to_string();
            }
            // Both operands parsed above
            Err(CalcError::NonNumeric(_)) => return,
        }
        self.operation = None;
        self.previous.clear();
        self.awaiting_new_operand = true;
    }

    /// Removes the last character of the current operand
    ///
    /// No-op while a just-computed or just-captured operand is awaiting
    /// replacement. Deleting the final character collapses to `"0"`.
    pub fn delete_last(&mut self) {
        if self.is_error() || self.awaiting_new_operand {
            return;
        }
        self.current.pop();
        if self.current.is_empty() {
            self.current = "0".to_string();
        }
    }

    /// Resets all state to initial values; the only exit from the error
    /// sentinel
    pub fn clear(&mut self) {
        self.current = "0".to_string();
        self.previous.clear();
        self.operation = None;
        self.awaiting_new_operand = false;
    }

    /// Renders the two display lines for the current state
    ///
    /// The primary line is the formatted current operand; the secondary
    /// line shows the pending operand and operator glyph, or is empty when
    /// nothing is pending.
    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        if self.is_error() {
            return DisplayState {
                primary: ERROR_SENTINEL.to_string(),
                secondary: String::new(),
            };
        }
        let secondary = match self.operation {
            Some(op) => format!("{} {}", format_operand(&self.previous), op.glyph()),
            None => String::new(),
        };
        DisplayState {
            primary: format_operand(&self.current),
            secondary,
        }
    }

    fn parse_operand(operand: &str) -> CalcResult<f64> {
        operand
            .parse::<f64>()
            .map_err(|_| CalcError::NonNumeric(operand.to_string()))
    }
}
