//! Keypad Calculator - a four-function calculator core with a keypad UI
//!
//! The heart of this crate is [`core::accumulator::Accumulator`]: a
//! two-register accumulator that holds both operands as display strings,
//! applies one pending binary operation at a time, and reports every state
//! change through a caller-supplied callback as a [`core::DisplaySnapshot`].
//! It owns no reference to any presentation surface.
//!
//! The optional `tui` feature (on by default) adds the presentation layer:
//! a button keypad, keyboard mapping, and a ratatui renderer.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use keypad_calculator::prelude::*;
//!
//! let shown = Rc::new(RefCell::new(DisplaySnapshot::default()));
//! let sink = Rc::clone(&shown);
//! let mut acc = Accumulator::new(move |snap: &DisplaySnapshot| {
//!     *sink.borrow_mut() = snap.clone();
//! });
//!
//! for ch in "999".chars() {
//!     acc.append_symbol(ch);
//! }
//! acc.apply_operator(Operator::Multiply);
//! acc.append_symbol('2');
//! acc.calculate();
//!
//! assert_eq!(shown.borrow().current, "1,998");
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

pub mod core;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::accumulator::Accumulator;
    pub use crate::core::{DisplaySnapshot, Operator, OperatorParseError};

    #[cfg(feature = "tui")]
    pub use crate::tui::{
        ButtonAction, CalculatorApp, InputHandler, KeyAction, Keypad, KeypadButton, KeypadWidget,
    };
}
