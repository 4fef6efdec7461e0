//! Keypad Calculator terminal example
//!
//! Run with: cargo run --example calculator_terminal
//!
//! Set `RUST_LOG=debug` to write a trace of every action to
//! `keypad-calculator.log` (the terminal itself is in raw mode).

use std::fs::File;
use std::io;
use std::sync::Mutex;

use crossterm::{
    cursor::{Hide, Show},
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keypad_calculator::controller::Controller;
use keypad_calculator::tui::{run_session, InputHandler, TerminalView};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "keypad-calculator.log";

fn init_logging() -> io::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = File::create(LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    // Run session
    let result = Controller::new(TerminalView::new(io::stdout())).and_then(|mut controller| {
        run_session(&mut controller, &InputHandler::new(), || Ok(event::read()?))
    });

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, Show, LeaveAlternateScreen)?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
