//! Calculator TUI example
//!
//! Interactive four-function calculator: type on the keyboard or click the
//! keypad buttons.
//!
//! Run with: cargo run --example calculator_tui --features tui

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keypad_calculator::tui::{render, ui, CalculatorApp, InputHandler, KeyAction, Keypad};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Highlights the keypad button matching a keyboard action
fn highlight(keypad: &mut Keypad, action: KeyAction) {
    match action {
        KeyAction::InsertSymbol(c) => keypad.highlight_char(c),
        KeyAction::ApplyOperator(op) => {
            if let Some(c) = op.symbol().chars().next() {
                keypad.highlight_char(c);
            }
        }
        KeyAction::Calculate => {
            keypad.release_all();
            if let Some(idx) = keypad.find_button_by_label('=') {
                keypad.press_button(idx);
            }
        }
        _ => keypad.release_all(),
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::new();
    let mut keypad = Keypad::new();
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| render(&app, &keypad, f))?;

        match event::read()? {
            Event::Key(key) => {
                let action = input_handler.handle_key(key);
                highlight(&mut keypad, action);
                app.handle_key(action);
            }
            Event::Mouse(mouse) => {
                if matches!(mouse.kind, MouseEventKind::Down(_)) {
                    let size = terminal.size()?;
                    let area = ui::keypad_area(Rect::new(0, 0, size.width, size.height));
                    keypad.release_all();
                    if let Some(idx) = keypad.hit_test(area, mouse.column, mouse.row) {
                        keypad.press_button(idx);
                        if let Some(btn) = keypad.get_button(idx) {
                            app.handle_button(btn.action);
                        }
                    }
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
