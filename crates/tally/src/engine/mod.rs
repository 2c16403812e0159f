//! Calculator engine
//!
//! The state machine that owns operand entry, operator chaining, and
//! computation. Everything here is pure and synchronous: operations mutate
//! the owned state deterministically and never raise.

mod format;
mod state;

pub use format::{format_operand, DisplayState};
pub use state::{Calculator, ERROR_SENTINEL};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for arithmetic evaluation
pub type CalcResult<T> = Result<T, CalcError>;

/// Arithmetic evaluation errors
///
/// These never escape the engine: division by zero and overflow become the
/// in-band `Error` display sentinel, and a non-numeric operand makes the
/// requesting operation a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("division by zero")]
    DivisionByZero,
    /// The result left the finite double range (overflow or NaN)
    #[error("numeric overflow")]
    Overflow,
    /// An operand string failed to parse as a decimal number
    #[error("operand is not a number: {0:?}")]
    NonNumeric(String),
}

/// The four binary operations the engine supports
///
/// At most one operation is pending at any time; there is no expression
/// stack and no precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// Returns the keyboard symbol that selects this operation
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the glyph shown on the pending-operation display line
    #[must_use]
    pub const fn glyph(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Maps a keyboard symbol to an operation
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operation to two operands using IEEE-754 double arithmetic
    ///
    /// A result outside the finite double range (overflow to infinity, or
    /// NaN from `inf - inf` style inputs) is rejected, never stored.
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        if !value.is_finite() {
            return Err(CalcError::Overflow);
        }
        Ok(value)
    }
}
