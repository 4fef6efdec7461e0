//! Terminal keyboard input
//!
//! Maps crossterm key events onto the same actions the browser keyboard
//! produces, plus a quit command.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::{key_to_action, Action};

/// What a terminal key asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCommand {
    /// Forward an action to the calculator
    Calculator(Action),
    /// Leave the terminal session
    Quit,
    /// No action (ignored input)
    Ignore,
}

/// Input handler that maps key events to commands
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to a command
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> TerminalCommand {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return TerminalCommand::Ignore;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => TerminalCommand::Quit,
                _ => TerminalCommand::Ignore,
            };
        }

        let action = match code {
            KeyCode::Char('q' | 'Q') => return TerminalCommand::Quit,
            KeyCode::Char(c) => {
                let mut buf = [0u8; 4];
                key_to_action(c.encode_utf8(&mut buf))
            }
            KeyCode::Enter => Some(Action::Equals),
            KeyCode::Backspace => Some(Action::Delete),
            KeyCode::Esc => Some(Action::Clear),
            _ => None,
        };
        action.map_or(TerminalCommand::Ignore, TerminalCommand::Calculator)
    }

    /// Builds the key event that triggers `action`
    #[must_use]
    pub fn key_event_for(action: Action) -> KeyEvent {
        let code = match action {
            Action::Equals => KeyCode::Enter,
            Action::Delete => KeyCode::Backspace,
            Action::Clear => KeyCode::Esc,
            other => other.key().chars().next().map_or(KeyCode::Null, KeyCode::Char),
        };
        KeyEvent::new(code, KeyModifiers::NONE)
    }
}
