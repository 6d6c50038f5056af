//! TUI rendering
//!
//! Two right-aligned display lines (the pending operation above the current
//! entry, like the original two-region display), the keypad, and a one-line
//! help footer.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use crate::core::DisplaySnapshot;

use super::app::CalculatorApp;
use super::keypad::{Keypad, KeypadWidget};

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, keypad: &Keypad, frame: &mut Frame) {
    let area = frame.area();
    let chunks = create_layout(area);

    frame.render_widget(DisplayWidget::new(app.snapshot()), chunks[0]);
    frame.render_widget(KeypadWidget::new(keypad), keypad_area(area));
    frame.render_widget(help_footer(), chunks[2]);
}

/// Returns the rectangle the keypad is drawn into, for mouse hit testing
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    let band = create_layout(area)[1];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(22),
            Constraint::Min(0),
        ])
        .split(band)[1]
}

fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Display (two lines + border)
            Constraint::Min(12),   // Keypad
            Constraint::Length(1), // Help footer
        ])
        .split(area)
        .to_vec()
}

fn help_footer() -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        " 0-9 . type   + - * / operator   Enter/= equals   Bksp delete   Esc clear   Ctrl+C quit",
        Style::default().fg(Color::DarkGray),
    ))
}

/// The two-region calculator display
#[derive(Debug)]
pub struct DisplayWidget {
    snapshot: DisplaySnapshot,
}

impl DisplayWidget {
    /// Creates a display widget for a snapshot
    #[must_use]
    pub fn new(snapshot: DisplaySnapshot) -> Self {
        Self { snapshot }
    }
}

impl Widget for DisplayWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                self.snapshot.previous,
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                self.snapshot.current,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }
}
