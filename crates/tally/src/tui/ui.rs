//! TUI rendering
//!
//! The display panel writes the engine's two pre-formatted lines verbatim:
//! the secondary (pending) line dimmed above the primary line. Layout
//! helpers are exposed so mouse handling can reuse the same geometry.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::App;
use super::keypad::KeypadWidget;
use crate::engine::ERROR_SENTINEL;

/// Title of the main frame
pub const APP_TITLE: &str = " tally ";

/// Keyboard shortcuts shown in the help sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter digits"),
    ("+-*/", "Operator"),
    ("Enter", "Equals"),
    ("Bksp", "Delete"),
    ("Esc", "Clear"),
    ("Click", "Press button"),
    ("q", "Quit"),
];

/// Renders the calculator UI to the frame
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUi::new(app), area);
}

/// Splits the frame into the calculator column and the help sidebar
fn columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Min(26), Constraint::Length(22)])
        .split(area)
        .to_vec()
}

/// Splits the calculator column into display and keypad rows
fn column_rows(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(7)])
        .split(area)
        .to_vec()
}

/// Returns the keypad rectangle for a given frame area
///
/// Mouse handling maps click coordinates through the same layout the
/// renderer uses, so hits line up with what is on screen.
#[must_use]
pub fn keypad_area(frame_area: Rect) -> Rect {
    let cols = columns(frame_area);
    let rows = column_rows(cols[0]);
    rows[1]
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a App,
}

impl<'a> CalculatorUi<'a> {
    /// Creates the UI widget over `app`
    #[must_use]
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    /// Renders the two-line display panel
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let display = self.app.display();

        let primary_style = if display.primary == ERROR_SENTINEL {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(
                display.secondary,
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(display.primary, primary_style)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    /// Renders the help sidebar
    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>6}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let cols = columns(area);
        if cols.len() < 2 {
            return;
        }
        let rows = column_rows(cols[0]);
        if rows.len() < 2 {
            return;
        }

        self.render_display(rows[0], buf);
        KeypadWidget::new(self.app.keypad()).render(rows[1], buf);
        self.render_help(cols[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::InputEvent;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(60, 18);
        Terminal::new(backend).unwrap()
    }

    fn buffer_content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    // ===== Layout tests =====

    #[test]
    fn test_keypad_area_inside_frame() {
        let frame = Rect::new(0, 0, 60, 18);
        let area = keypad_area(frame);
        assert!(area.width > 0 && area.height > 0);
        assert!(area.y >= 4); // Below the display panel
    }

    #[test]
    fn test_keypad_area_matches_columns() {
        let frame = Rect::new(0, 0, 60, 18);
        let cols = columns(frame);
        let area = keypad_area(frame);
        assert_eq!(area.x, cols[0].x);
        assert_eq!(area.width, cols[0].width);
    }

    // ===== Render tests =====

    #[test]
    fn test_render_initial_state() {
        let app = App::new();
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("Display"));
        assert!(content.contains("Keypad"));
        assert!(content.contains("Help"));
        assert!(content.contains('0'));
    }

    #[test]
    fn test_render_shows_operand() {
        let mut app = App::new();
        app.apply_event(InputEvent::Digit('4'));
        app.apply_event(InputEvent::Digit('2'));
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_content(&terminal).contains("42"));
    }

    #[test]
    fn test_render_shows_pending_line() {
        let mut app = App::new();
        for c in "1234+".chars() {
            if let Some(event) = InputEvent::from_key_char(c) {
                app.apply_event(event);
            }
        }
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_content(&terminal).contains("1,234 +"));
    }

    #[test]
    fn test_render_shows_error() {
        let mut app = App::new();
        for c in "7/0=".chars() {
            if let Some(event) = InputEvent::from_key_char(c) {
                app.apply_event(event);
            }
        }
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_content(&terminal).contains("Error"));
    }

    #[test]
    fn test_render_small_terminal_without_panic() {
        let app = App::new();
        let backend = TestBackend::new(20, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    #[test]
    fn test_help_shortcuts_cover_vocabulary() {
        let keys: Vec<&str> = HELP_SHORTCUTS.iter().map(|(k, _)| *k).collect();
        assert!(keys.contains(&"Enter"));
        assert!(keys.contains(&"Esc"));
        assert!(keys.contains(&"q"));
        for (key, desc) in HELP_SHORTCUTS {
            assert!(!key.is_empty());
            assert!(!desc.is_empty());
        }
    }

    #[test]
    fn test_render_clicked_state_round_trip() {
        let mut app = App::new();
        let frame = Rect::new(0, 0, 60, 18);
        let area = keypad_area(frame);
        // Click the top-left button (AC) after entering a digit
        app.apply_event(InputEvent::Digit('5'));
        app.click(area, area.x + 1, area.y + 1);
        assert_eq!(app.display().primary, "0");
    }
}
