//! Pointer keypad
//!
//! The button grid mirrors a pocket four-function layout:
//!
//! ```text
//! [ AC ] [ DEL ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ = ]
//! ```
//!
//! Rows have unequal button counts, so hit testing is per row. Button
//! presses emit the same canonical events as the keyboard adapter.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::engine::Operation;
use crate::event::InputEvent;

/// What a keypad button does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter the decimal point
    Decimal,
    /// Select a binary operator
    Operator(Operation),
    /// Fold the pending operation
    Equals,
    /// Reset the calculator
    Clear,
    /// Delete the last character
    Backspace,
}

impl ButtonAction {
    /// Returns the engine event this button emits
    #[must_use]
    pub fn event(self) -> InputEvent {
        match self {
            // Digit values come from the fixed layout, always 0-9
            Self::Digit(d) => InputEvent::Digit(char::from(b'0' + d)),
            Self::Decimal => InputEvent::Digit('.'),
            Self::Operator(op) => InputEvent::Operator(op),
            Self::Equals => InputEvent::Equals,
            Self::Clear => InputEvent::Clear,
            Self::Backspace => InputEvent::Backspace,
        }
    }

    /// Returns the button face label
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.glyph().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Backspace => "DEL".to_string(),
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: ButtonAction,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates an unpressed button for `action`
    #[must_use]
    pub fn new(action: ButtonAction) -> Self {
        Self {
            action,
            pressed: false,
        }
    }
}

/// The keypad: rows of buttons with per-row hit testing
#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard four-function keypad layout
    #[must_use]
    pub fn new() -> Self {
        use ButtonAction::{Backspace, Clear, Decimal, Digit, Equals, Operator};
        let rows = vec![
            vec![
                KeypadButton::new(Clear),
                KeypadButton::new(Backspace),
                KeypadButton::new(Operator(Operation::Divide)),
            ],
            vec![
                KeypadButton::new(Digit(7)),
                KeypadButton::new(Digit(8)),
                KeypadButton::new(Digit(9)),
                KeypadButton::new(Operator(Operation::Multiply)),
            ],
            vec![
                KeypadButton::new(Digit(4)),
                KeypadButton::new(Digit(5)),
                KeypadButton::new(Digit(6)),
                KeypadButton::new(Operator(Operation::Subtract)),
            ],
            vec![
                KeypadButton::new(Digit(1)),
                KeypadButton::new(Digit(2)),
                KeypadButton::new(Digit(3)),
                KeypadButton::new(Operator(Operation::Add)),
            ],
            vec![
                KeypadButton::new(Digit(0)),
                KeypadButton::new(Decimal),
                KeypadButton::new(Equals),
            ],
        ];
        Self { rows }
    }

    /// Returns the number of button rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the total number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.rows.get(row)?.get(col)
    }

    /// Finds the position of the button emitting `event`
    #[must_use]
    pub fn find_by_event(&self, event: InputEvent) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|b| b.action.event() == event)
                .map(|c| (r, c))
        })
    }

    /// Marks the button at `(row, col)` as pressed
    pub fn press(&mut self, row: usize, col: usize) {
        if let Some(btn) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            btn.pressed = true;
        }
    }

    /// Releases every button
    pub fn release_all(&mut self) {
        for btn in self.rows.iter_mut().flatten() {
            btn.pressed = false;
        }
    }

    /// Highlights only the button that emits `event`
    pub fn highlight_event(&mut self, event: InputEvent) {
        self.release_all();
        if let Some((row, col)) = self.find_by_event(event) {
            self.press(row, col);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.rows.iter().flatten()
    }

    /// Returns the button rows
    #[must_use]
    pub fn rows(&self) -> &[Vec<KeypadButton>] {
        &self.rows
    }

    /// Converts a click position inside `area` to a button position
    ///
    /// `area` is the bordered keypad rectangle as rendered; clicks on the
    /// border or outside it hit nothing. Column geometry depends on the
    /// row since rows have unequal button counts.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }
        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Inside the border
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }
        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let row_height = (area.height - 2) / self.rows.len() as u16;
        if row_height == 0 {
            return None;
        }
        let row = (inner_y / row_height) as usize;
        let buttons = self.rows.get(row)?;

        let btn_width = (area.width - 2) / buttons.len() as u16;
        if btn_width == 0 {
            return None;
        }
        let col = (inner_x / btn_width) as usize;
        if col < buttons.len() {
            Some((row, col))
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget over `keypad`
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn button_style(btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match btn.action {
            ButtonAction::Digit(_) | ButtonAction::Decimal => Style::default().fg(Color::White),
            ButtonAction::Operator(_) => Style::default().fg(Color::Yellow),
            ButtonAction::Equals => Style::default().fg(Color::Green),
            ButtonAction::Clear => Style::default().fg(Color::Red),
            ButtonAction::Backspace => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let row_count = self.keypad.row_count() as u16;
        if inner.width < 6 || inner.height < row_count {
            return; // Too small to render buttons
        }
        let row_height = inner.height / row_count;

        for (r, row) in self.keypad.rows().iter().enumerate() {
            let btn_width = inner.width / row.len() as u16;
            let y = inner.y + r as u16 * row_height + row_height / 2;
            for (c, btn) in row.iter().enumerate() {
                let x = inner.x + c as u16 * btn_width;
                let label = format!("[{}]", btn.action.label());
                let label_width = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(label_width) / 2;
                if y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(
                        label_x,
                        y,
                        &Span::styled(label, Self::button_style(btn)),
                        btn_width,
                    );
                }
            }
        }
    }
}
