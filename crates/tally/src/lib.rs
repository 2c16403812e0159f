//! Tally - a four-function calculator engine
//!
//! The core is a small deterministic state machine: it consumes discrete
//! input events (digits, operators, equals, clear, backspace), maintains at
//! most one pending binary operation, and renders a two-line display state
//! of pre-formatted strings. Input adapters and display surfaces are
//! collaborators around that seam; a terminal front end ships behind the
//! `tui` feature.
//!
//! # Example
//!
//! ```rust
//! use tally::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.apply(InputEvent::Digit('5'));
//! calc.apply(InputEvent::Operator(Operation::Add));
//! calc.apply(InputEvent::Digit('3'));
//! calc.apply(InputEvent::Equals);
//!
//! let display = calc.display_state();
//! assert_eq!(display.primary, "8");
//! assert_eq!(display.secondary, "");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod driver;
pub mod engine;
pub mod event;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::driver::{press_script, run_full_suite, CalculatorDriver, EngineDriver};
    pub use crate::engine::{
        format_operand, CalcError, CalcResult, Calculator, DisplayState, Operation,
        ERROR_SENTINEL,
    };
    pub use crate::event::InputEvent;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut driver = EngineDriver::new();
        press_script(&mut driver, "6*7=");
        assert_eq!(driver.display().primary, "42");
    }

    #[test]
    fn test_calculator_direct() {
        let mut calc = Calculator::new();
        calc.apply(InputEvent::Digit('9'));
        calc.apply(InputEvent::Operator(Operation::Divide));
        calc.apply(InputEvent::Digit('4'));
        calc.apply(InputEvent::Equals);
        assert_eq!(calc.display_state().primary, "2.25");
    }

    #[test]
    fn test_formatting_direct() {
        assert_eq!(format_operand("1234567.25"), "1,234,567.25");
    }

    #[test]
    fn test_error_sentinel_exported() {
        let mut driver = EngineDriver::new();
        press_script(&mut driver, "1/0=");
        assert_eq!(driver.display().primary, ERROR_SENTINEL);
    }
}
