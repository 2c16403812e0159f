//! Unified calculator driver
//!
//! Write a state-machine check once, run it against every front end. The
//! trait abstracts how events reach the engine and how the display is read
//! back, so the same verification suites exercise the bare engine and the
//! TUI app.

use crate::engine::{Calculator, DisplayState};
use crate::event::InputEvent;

/// Abstract driver for calculator interactions
///
/// Implementations feed events to an embedded engine and expose the
/// resulting display state.
pub trait CalculatorDriver {
    /// Feeds one input event to the calculator
    fn press(&mut self, event: InputEvent);

    /// Returns the current two-line display state
    fn display(&self) -> DisplayState;
}

/// Presses a compact key script, e.g. `"5+3*2="`
///
/// Characters outside the keyboard vocabulary are skipped, matching the
/// silent-reject input policy.
pub fn press_script<D: CalculatorDriver>(driver: &mut D, script: &str) {
    for c in script.chars() {
        if let Some(event) = InputEvent::from_key_char(c) {
            driver.press(event);
        }
    }
}

/// Driver over the bare engine, no front end involved
#[derive(Debug, Default)]
pub struct EngineDriver {
    calc: Calculator,
}

impl EngineDriver {
    /// Creates a driver with a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self {
            calc: Calculator::new(),
        }
    }

    /// Returns a reference to the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, event: InputEvent) {
        self.calc.apply(event);
    }

    fn display(&self) -> DisplayState {
        self.calc.display_state()
    }
}

/// Driver routing events through the TUI application
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, DisplayState, InputEvent};
    use crate::tui::App;

    /// TUI-specific driver wrapping the terminal app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: App,
    }

    impl TuiDriver {
        /// Creates a driver with a fresh app
        #[must_use]
        pub fn new() -> Self {
            Self { app: App::new() }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &App {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut App {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, event: InputEvent) {
            self.app.apply_event(event);
        }

        fn display(&self) -> DisplayState {
            self.app.display()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared verification suites =====
// Each function exercises one specified property against any driver.

/// Digit sequences concatenate with at most one decimal point
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    press_script(driver, "12.5");
    assert_eq!(driver.display().primary, "12.5");
    driver.press(InputEvent::Clear);

    press_script(driver, "3.1.4");
    assert_eq!(driver.display().primary, "3.14");
    driver.press(InputEvent::Clear);
}

/// Leading zeros collapse: `0 0 5` enters `5`
pub fn verify_leading_zero_suppression<D: CalculatorDriver>(driver: &mut D) {
    press_script(driver, "005");
    assert_eq!(driver.display().primary, "5");
    driver.press(InputEvent::Clear);
}

/// Chained operators evaluate immediately, left to right, no precedence
pub fn verify_chained_operations<D: CalculatorDriver>(driver: &mut D) {
    press_script(driver, "5+3*2=");
    assert_eq!(driver.display().primary, "16"); // (5 + 3) * 2
    driver.press(InputEvent::Clear);

    press_script(driver, "100-30-30=");
    assert_eq!(driver.display().primary, "40");
    driver.press(InputEvent::Clear);
}

/// Division by zero shows the sentinel and deadens input until clear
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    press_script(driver, "7/0=");
    assert_eq!(driver.display().primary, "Error");

    driver.press(InputEvent::Digit('1'));
    assert_eq!(driver.display().primary, "Error");

    driver.press(InputEvent::Clear);
    assert_eq!(driver.display().primary, "0");
}

/// Clearing twice is the same as clearing once
pub fn verify_clear_idempotence<D: CalculatorDriver>(driver: &mut D) {
    press_script(driver, "12+34");
    driver.press(InputEvent::Clear);
    let once = driver.display();
    driver.press(InputEvent::Clear);
    assert_eq!(driver.display(), once);
    assert_eq!(once.primary, "0");
    assert_eq!(once.secondary, "");
}

/// Deletion boundaries: `"0"` stays `"0"`, no-op while awaiting
pub fn verify_deletion_boundaries<D: CalculatorDriver>(driver: &mut D) {
    driver.press(InputEvent::Backspace);
    assert_eq!(driver.display().primary, "0");

    press_script(driver, "12");
    driver.press(InputEvent::Backspace);
    assert_eq!(driver.display().primary, "1");
    driver.press(InputEvent::Clear);

    press_script(driver, "5+3=");
    driver.press(InputEvent::Backspace);
    assert_eq!(driver.display().primary, "8");
    driver.press(InputEvent::Clear);
}

/// The secondary line shows the grouped pending operand and glyph
pub fn verify_display_lines<D: CalculatorDriver>(driver: &mut D) {
    press_script(driver, "1234+");
    let display = driver.display();
    assert_eq!(display.secondary, "1,234 +");
    assert_eq!(display.primary, "1,234");
    driver.press(InputEvent::Clear);

    press_script(driver, "1000000*2=");
    assert_eq!(driver.display().primary, "2,000,000");
    driver.press(InputEvent::Clear);
}

/// Runs every verification suite against the driver
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_leading_zero_suppression(driver);
    verify_chained_operations(driver);
    verify_division_by_zero(driver);
    verify_clear_idempotence(driver);
    verify_deletion_boundaries(driver);
    verify_display_lines(driver);
}
