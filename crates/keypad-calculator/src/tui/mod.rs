//! Terminal UI for the calculator
//!
//! Thin glue over the accumulator: keyboard mapping, a button keypad, and a
//! ratatui renderer for the two display regions.

pub mod app;
pub mod input;
pub mod keypad;
pub mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonAction, Keypad, KeypadButton, KeypadWidget};
pub use ui::render;
