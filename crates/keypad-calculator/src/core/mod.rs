//! Core accumulator module
//!
//! The accumulator consumes nothing from any UI: it exposes the five input
//! operations on [`accumulator::Accumulator`] and reports every state change
//! as a [`DisplaySnapshot`] through the caller-supplied callback.

pub mod accumulator;
mod format;

use serde::{Deserialize, Serialize};

/// The four supported binary operations - exhaustive by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// Returns the canonical operator symbol shown next to the previous operand
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Applies the operation with plain IEEE-754 semantics.
    ///
    /// Division by zero is not guarded: it yields `inf` or `NaN`, which the
    /// display formatting renders as-is.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

/// Error returned when a character does not name an operator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator: {0:?}")]
pub struct OperatorParseError(
    /// The character that did not name an operator
    pub char,
);

impl TryFrom<char> for Operator {
    type Error = OperatorParseError;

    /// Maps an input character to an operator.
    ///
    /// `÷` is accepted as a synonym for `/`: button panels tend to label the
    /// division key with the division sign while keyboards send a slash, and
    /// both mean floating-point division.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' | '÷' => Ok(Self::Divide),
            other => Err(OperatorParseError(other)),
        }
    }
}

/// What a display surface should currently show
///
/// Emitted through the accumulator's callback after every state change. The
/// two fields map onto the two display regions of a classic pocket
/// calculator: the pending operation line and the entry line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// The formatted current operand (entry line)
    pub current: String,
    /// `"<formatted previous operand> <operator symbol>"` while an operation
    /// is pending, empty otherwise
    pub previous: String,
}
