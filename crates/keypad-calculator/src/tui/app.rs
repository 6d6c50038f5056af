//! TUI application state
//!
//! Owns the accumulator and keeps its latest display snapshot in a shared
//! cell, so the render path can read what the accumulator last emitted
//! without the accumulator knowing anything about the terminal.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::accumulator::Accumulator;
use crate::core::DisplaySnapshot;

use super::input::KeyAction;
use super::keypad::ButtonAction;

type SnapshotCell = Rc<RefCell<DisplaySnapshot>>;
type SnapshotSink = Box<dyn FnMut(&DisplaySnapshot)>;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// The accumulator, wired to write into `snapshot`
    accumulator: Accumulator<SnapshotSink>,
    /// Latest snapshot the accumulator emitted
    snapshot: SnapshotCell,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with a cleared accumulator
    #[must_use]
    pub fn new() -> Self {
        let snapshot: SnapshotCell = Rc::new(RefCell::new(DisplaySnapshot::default()));
        let sink = Rc::clone(&snapshot);
        let accumulator = Accumulator::new(Box::new(move |snap: &DisplaySnapshot| {
            *sink.borrow_mut() = snap.clone();
        }) as SnapshotSink);

        Self {
            accumulator,
            snapshot,
            should_quit: false,
        }
    }

    /// Returns the latest display snapshot
    #[must_use]
    pub fn snapshot(&self) -> DisplaySnapshot {
        self.snapshot.borrow().clone()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatches a keyboard action to the accumulator
    pub fn handle_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::InsertSymbol(c) => self.accumulator.append_symbol(c),
            KeyAction::ApplyOperator(op) => self.accumulator.apply_operator(op),
            KeyAction::Calculate => self.accumulator.calculate(),
            KeyAction::DeleteSymbol => self.accumulator.delete_symbol(),
            KeyAction::Clear => self.accumulator.clear(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Dispatches a keypad button press to the accumulator
    pub fn handle_button(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::Digit(d) => {
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    self.accumulator.append_symbol(c);
                }
            }
            ButtonAction::Decimal => self.accumulator.append_symbol('.'),
            ButtonAction::Operator(op) => self.accumulator.apply_operator(op),
            ButtonAction::Equals => self.accumulator.calculate(),
            ButtonAction::Clear => self.accumulator.clear(),
            ButtonAction::Delete => self.accumulator.delete_symbol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn type_keys(app: &mut CalculatorApp, input: &str) {
        for ch in input.chars() {
            app.handle_key(KeyAction::InsertSymbol(ch));
        }
    }

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.snapshot(), DisplaySnapshot::default());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_app_default() {
        let app = CalculatorApp::default();
        assert_eq!(app.snapshot().current, "");
    }

    // ===== Key dispatch tests =====

    #[test]
    fn test_key_insert_updates_snapshot() {
        let mut app = CalculatorApp::new();
        type_keys(&mut app, "1998");
        assert_eq!(app.snapshot().current, "1,998");
    }

    #[test]
    fn test_key_full_calculation() {
        let mut app = CalculatorApp::new();
        type_keys(&mut app, "999");
        app.handle_key(KeyAction::ApplyOperator(Operator::Multiply));
        assert_eq!(app.snapshot().previous, "999 *");
        type_keys(&mut app, "2");
        app.handle_key(KeyAction::Calculate);
        let snap = app.snapshot();
        assert_eq!(snap.current, "1,998");
        assert_eq!(snap.previous, "");
    }

    #[test]
    fn test_key_delete_and_clear() {
        let mut app = CalculatorApp::new();
        type_keys(&mut app, "255");
        app.handle_key(KeyAction::DeleteSymbol);
        assert_eq!(app.snapshot().current, "25");
        app.handle_key(KeyAction::Clear);
        assert_eq!(app.snapshot(), DisplaySnapshot::default());
    }

    #[test]
    fn test_key_none_is_ignored() {
        let mut app = CalculatorApp::new();
        type_keys(&mut app, "5");
        let before = app.snapshot();
        app.handle_key(KeyAction::None);
        assert_eq!(app.snapshot(), before);
    }

    #[test]
    fn test_key_quit_sets_flag() {
        let mut app = CalculatorApp::new();
        app.handle_key(KeyAction::Quit);
        assert!(app.should_quit());
    }

    // ===== Button dispatch tests =====

    #[test]
    fn test_button_full_calculation() {
        let mut app = CalculatorApp::new();
        app.handle_button(ButtonAction::Digit(5));
        app.handle_button(ButtonAction::Digit(0));
        app.handle_button(ButtonAction::Operator(Operator::Divide));
        app.handle_button(ButtonAction::Digit(3));
        app.handle_button(ButtonAction::Digit(0));
        app.handle_button(ButtonAction::Equals);
        assert_eq!(app.snapshot().current, "1.6666666666666667");
    }

    #[test]
    fn test_button_decimal_and_delete() {
        let mut app = CalculatorApp::new();
        app.handle_button(ButtonAction::Digit(3));
        app.handle_button(ButtonAction::Decimal);
        app.handle_button(ButtonAction::Decimal); // absorbed
        app.handle_button(ButtonAction::Digit(5));
        assert_eq!(app.snapshot().current, "3.5");
        app.handle_button(ButtonAction::Delete);
        assert_eq!(app.snapshot().current, "3.");
    }

    #[test]
    fn test_button_clear_mid_pending() {
        let mut app = CalculatorApp::new();
        app.handle_button(ButtonAction::Digit(2));
        app.handle_button(ButtonAction::Digit(5));
        app.handle_button(ButtonAction::Operator(Operator::Multiply));
        app.handle_button(ButtonAction::Digit(5));
        let snap = app.snapshot();
        assert_eq!(snap.previous, "25 *");
        assert_eq!(snap.current, "5");
        app.handle_button(ButtonAction::Clear);
        assert_eq!(app.snapshot(), DisplaySnapshot::default());
    }

    // ===== Keyboard-and-keypad equivalence =====

    #[test]
    fn test_key_and_button_paths_agree() {
        let mut by_key = CalculatorApp::new();
        type_keys(&mut by_key, "90");
        by_key.handle_key(KeyAction::ApplyOperator(Operator::Subtract));
        type_keys(&mut by_key, "90");
        by_key.handle_key(KeyAction::ApplyOperator(Operator::Subtract));
        type_keys(&mut by_key, "90");
        by_key.handle_key(KeyAction::Calculate);

        let mut by_button = CalculatorApp::new();
        for _ in 0..2 {
            by_button.handle_button(ButtonAction::Digit(9));
            by_button.handle_button(ButtonAction::Digit(0));
            by_button.handle_button(ButtonAction::Operator(Operator::Subtract));
        }
        by_button.handle_button(ButtonAction::Digit(9));
        by_button.handle_button(ButtonAction::Digit(0));
        by_button.handle_button(ButtonAction::Equals);

        assert_eq!(by_key.snapshot(), by_button.snapshot());
        assert_eq!(by_key.snapshot().current, "-90");
    }
}
