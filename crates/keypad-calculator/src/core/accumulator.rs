//! The arithmetic accumulator - the calculator's state machine
//!
//! Two string registers and an optional pending operator. Digits append to
//! the current register; applying an operator shifts current into previous;
//! `calculate` collapses both into a result. Inputs that cannot be processed
//! are absorbed as silent no-ops, so there is no error state and nothing to
//! unwind.

use std::fmt;

use super::format::format_operand;
use super::{DisplaySnapshot, Operator};

/// A two-register accumulator that notifies a display callback on every
/// state change.
///
/// The callback is invoked synchronously on the calling thread after each
/// mutation. It must not mutate the accumulator re-entrantly: reaching the
/// accumulator from inside the callback requires interior mutability, and a
/// conflicting borrow will panic.
pub struct Accumulator<F: FnMut(&DisplaySnapshot)> {
    /// Digits typed since the last operator or clear
    current: String,
    /// The operand captured when an operator was applied
    previous: String,
    /// The pending binary operation, if any
    operator: Option<Operator>,
    /// Display refresh callback
    on_refresh: F,
}

impl<F: FnMut(&DisplaySnapshot)> fmt::Debug for Accumulator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accumulator")
            .field("current", &self.current)
            .field("previous", &self.previous)
            .field("operator", &self.operator)
            .finish_non_exhaustive()
    }
}

impl<F: FnMut(&DisplaySnapshot)> Accumulator<F> {
    /// Creates a cleared accumulator and emits the initial (empty) snapshot.
    pub fn new(on_refresh: F) -> Self {
        let mut acc = Self {
            current: String::new(),
            previous: String::new(),
            operator: None,
            on_refresh,
        };
        acc.refresh();
        acc
    }

    /// Appends a digit or decimal point to the current operand.
    ///
    /// A second decimal point, or any character that is neither a digit nor
    /// `.`, is silently ignored. Appending is plain string concatenation, so
    /// leading zeros are preserved in the stored operand.
    pub fn append_symbol(&mut self, symbol: char) {
        if !symbol.is_ascii_digit() && symbol != '.' {
            return;
        }
        if symbol == '.' && self.current.contains('.') {
            return;
        }
        self.current.push(symbol);
        self.refresh();
    }

    /// Sets the pending operator, capturing the current operand.
    ///
    /// No-op while the current operand is empty. If an operation is already
    /// pending, it is evaluated first, so chained entry like `90 - 90 - 90`
    /// collapses left-to-right.
    pub fn apply_operator(&mut self, operator: Operator) {
        if self.current.is_empty() {
            return;
        }
        if !self.previous.is_empty() {
            self.calculate();
        }
        self.operator = Some(operator);
        self.previous = std::mem::take(&mut self.current);
        self.refresh();
    }

    /// Evaluates the pending operation.
    ///
    /// No-op when there is no pending operator or either operand does not
    /// parse as a number; nothing is emitted in that case. On success the
    /// result becomes the current operand (as its native `f64` display
    /// string) and the pending operation is cleared. Division by zero is not
    /// special-cased: `inf`/`NaN` results flow into the display.
    pub fn calculate(&mut self) {
        let Some(operator) = self.operator else {
            return;
        };
        let Ok(prev) = self.previous.parse::<f64>() else {
            return;
        };
        let Ok(current) = self.current.parse::<f64>() else {
            return;
        };

        let result = operator.apply(prev, current);
        self.current = result.to_string();
        self.operator = None;
        self.previous.clear();
        self.refresh();
    }

    /// Removes the last character of the current operand.
    ///
    /// Already-empty operands stay empty; a snapshot is emitted either way.
    pub fn delete_symbol(&mut self) {
        self.current.pop();
        self.refresh();
    }

    /// Resets both operands and the pending operator, emitting the cleared
    /// snapshot.
    pub fn clear(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.operator = None;
        self.refresh();
    }

    /// Returns the raw current operand string (unformatted).
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current
    }

    /// Returns the raw previous operand string (unformatted).
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.previous
    }

    /// Returns the pending operator, if any.
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Builds the display snapshot for the present state.
    #[must_use]
    pub fn snapshot(&self) -> DisplaySnapshot {
        let previous = match self.operator {
            Some(op) => format!("{} {}", format_operand(&self.previous), op.symbol()),
            None => String::new(),
        };
        DisplaySnapshot {
            current: format_operand(&self.current),
            previous,
        }
    }

    fn refresh(&mut self) {
        let snapshot = self.snapshot();
        (self.on_refresh)(&snapshot);
    }
}
