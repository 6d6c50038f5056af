//! Keyboard input handling
//!
//! Maps terminal key events onto the five accumulator operations, mirroring
//! the classic desk-calculator bindings: digits and `.` type, `+ - * / ÷`
//! set the operator, Enter or `=` evaluates, Backspace deletes one symbol,
//! Delete or Escape clears everything.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Operator;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Append a digit or decimal point to the current operand
    InsertSymbol(char),
    /// Set the pending operator
    ApplyOperator(Operator),
    /// Evaluate the pending operation
    Calculate,
    /// Remove the last symbol of the current operand
    DeleteSymbol,
    /// Reset operands and operator
    Clear,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => KeyAction::InsertSymbol(c),
            KeyCode::Char('=') => KeyAction::Calculate,
            KeyCode::Char(c) => Operator::try_from(c)
                .map_or(KeyAction::None, KeyAction::ApplyOperator),
            KeyCode::Enter => KeyAction::Calculate,
            KeyCode::Backspace => KeyAction::DeleteSymbol,
            KeyCode::Delete | KeyCode::Esc => KeyAction::Clear,
            _ => KeyAction::None,
        }
    }
}
