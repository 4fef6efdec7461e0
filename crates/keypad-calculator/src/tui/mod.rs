//! Terminal front end
//!
//! A crossterm key loop feeding the controller; the display is drawn by
//! [`TerminalView`]. Raw-mode setup is left to the binary.

mod input;
mod view;

pub use input::{InputHandler, TerminalCommand};
pub use view::{TerminalView, DISPLAY_WIDTH};

use std::io::Write;

use crossterm::event::Event;
use tracing::info;

use crate::controller::Controller;
use crate::error::CalcResult;

/// Runs the key loop until a quit key arrives or `next_event` fails
pub fn run_session<W, F>(
    controller: &mut Controller<TerminalView<W>>,
    handler: &InputHandler,
    mut next_event: F,
) -> CalcResult<()>
where
    W: Write,
    F: FnMut() -> CalcResult<Event>,
{
    info!("terminal session started");
    loop {
        match next_event()? {
            Event::Key(key) => match handler.handle_key(key) {
                TerminalCommand::Calculator(action) => controller.dispatch(action)?,
                TerminalCommand::Quit => break,
                TerminalCommand::Ignore => {}
            },
            Event::Resize(..) => controller.refresh()?,
            _ => {}
        }
    }
    info!("terminal session ended");
    Ok(())
}
