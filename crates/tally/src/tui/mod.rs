//! Terminal front end
//!
//! The TUI is a thin collaborator around the engine: the input adapter
//! translates key and mouse events into the canonical vocabulary, the app
//! applies them sequentially, and the display widget writes the two
//! pre-formatted lines verbatim.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::App;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonAction, Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUi};
