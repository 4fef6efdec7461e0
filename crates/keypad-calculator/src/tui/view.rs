//! Terminal view drawn with crossterm commands

use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::display::{CalculatorView, DisplayLines};
use crate::error::CalcResult;

/// Width the display lines are right-aligned to
pub const DISPLAY_WIDTH: usize = 24;

const HELP: &str = "0-9 . + - * / % | Enter = | Backspace | Esc clear | q quit";

/// Draws the calculator display into any writer
#[derive(Debug)]
pub struct TerminalView<W: Write> {
    out: W,
    lines: DisplayLines,
    pending_alert: Option<String>,
    alerts: Vec<String>,
}

impl<W: Write> TerminalView<W> {
    /// Creates a view writing to `out`
    pub fn new(out: W) -> Self {
        Self {
            out,
            lines: DisplayLines::default(),
            pending_alert: None,
            alerts: Vec::new(),
        }
    }

    /// Last rendered lines
    #[must_use]
    pub fn lines(&self) -> &DisplayLines {
        &self.lines
    }

    /// Every alert shown, oldest first
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// The underlying writer
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> CalculatorView for TerminalView<W> {
    fn render(&mut self, lines: &DisplayLines) -> CalcResult<()> {
        queue!(
            self.out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(format!("{:>DISPLAY_WIDTH$}", lines.pending)),
            MoveTo(0, 1),
            Print(format!("{:>DISPLAY_WIDTH$}", lines.current))
        )?;
        // Alerts stay on screen until the next keypress redraws
        if let Some(alert) = self.pending_alert.take() {
            queue!(self.out, MoveTo(0, 3), Print(format!("! {alert}")))?;
        }
        queue!(self.out, MoveTo(0, 5), Print(HELP))?;
        self.out.flush()?;

        self.lines = lines.clone();
        Ok(())
    }

    fn alert(&mut self, message: &str) -> CalcResult<()> {
        self.pending_alert = Some(message.to_string());
        self.alerts.push(message.to_string());
        Ok(())
    }
}
