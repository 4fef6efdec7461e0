//! Unified Calculator Driver
//!
//! Write the interaction once, run it against every front end. Each driver
//! feeds actions through its own input path (keypad clicks, terminal keys)
//! and reads the display back from its own view.

// verify_* functions are assertions
#![allow(clippy::unwrap_used)]

use crate::core::Operation;
use crate::display::DisplayLines;
use crate::error::CalcResult;
use crate::input::Action;

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Triggers `action` through the front end's input path
    fn press(&mut self, action: Action) -> CalcResult<()>;

    /// Reads both display lines from the view
    fn display(&self) -> DisplayLines;

    /// Alerts shown so far, oldest first
    fn alerts(&self) -> Vec<String>;

    /// Presses a sequence of actions
    fn press_all(&mut self, actions: &[Action]) -> CalcResult<()> {
        actions.iter().try_for_each(|action| self.press(*action))
    }

    /// Types a numeral such as `"3.25"` digit by digit
    fn enter_number(&mut self, numeral: &str) -> CalcResult<()> {
        for c in numeral.chars() {
            let action = match c {
                '.' => Action::Decimal,
                _ => match c.to_digit(10) {
                    Some(d) => Action::Digit(d as u8),
                    None => continue,
                },
            };
            self.press(action)?;
        }
        Ok(())
    }

    /// Resets the calculator
    fn clear(&mut self) -> CalcResult<()> {
        self.press(Action::Clear)
    }
}

/// Terminal driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{Action, CalcResult, CalculatorDriver, DisplayLines};
    use crate::controller::Controller;
    use crate::tui::{InputHandler, TerminalCommand, TerminalView};

    /// Driver feeding crossterm key events into a terminal view over a buffer
    #[derive(Debug)]
    pub struct TuiDriver {
        controller: Controller<TerminalView<Vec<u8>>>,
        handler: InputHandler,
    }

    impl TuiDriver {
        /// Creates a new terminal driver
        pub fn new() -> CalcResult<Self> {
            Ok(Self {
                controller: Controller::new(TerminalView::new(Vec::new()))?,
                handler: InputHandler::new(),
            })
        }

        /// Returns the underlying controller
        #[must_use]
        pub fn controller(&self) -> &Controller<TerminalView<Vec<u8>>> {
            &self.controller
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: Action) -> CalcResult<()> {
            let event = InputHandler::key_event_for(action);
            match self.handler.handle_key(event) {
                TerminalCommand::Calculator(mapped) => self.controller.dispatch(mapped),
                TerminalCommand::Quit | TerminalCommand::Ignore => Ok(()),
            }
        }

        fn display(&self) -> DisplayLines {
            self.controller.view().lines().clone()
        }

        fn alerts(&self) -> Vec<String> {
            self.controller.view().alerts().to_vec()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Checks =====
// These work with ANY CalculatorDriver implementation

/// Typed digits concatenate and the leading zero collapses
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    driver.enter_number("0").unwrap();
    assert_eq!(driver.display().current, "0");
    driver.enter_number("907").unwrap();
    assert_eq!(driver.display().current, "907");
    driver.clear().unwrap();

    driver.enter_number(".25").unwrap();
    assert_eq!(driver.display().current, ".25");
    driver.clear().unwrap();
}

/// A second decimal point is ignored
pub fn verify_decimal_point<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    driver.enter_number("4.").unwrap();
    let before = driver.display();
    driver.press(Action::Decimal).unwrap();
    assert_eq!(driver.display(), before);
    driver.clear().unwrap();
}

/// Compute with nothing pending changes nothing
pub fn verify_idle_compute<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    driver.enter_number("12").unwrap();
    let before = driver.display();
    driver.press_all(&[Action::Equals, Action::Equals]).unwrap();
    assert_eq!(driver.display(), before);
    driver.clear().unwrap();
}

/// `2 + 3 + 4 =` folds left to right into `9`
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    let add = Action::Operator(Operation::Add);
    driver.clear().unwrap();
    driver
        .press_all(&[Action::Digit(2), add, Action::Digit(3), add])
        .unwrap();
    assert_eq!(driver.display().pending, "5 +");
    driver.press_all(&[Action::Digit(4), Action::Equals]).unwrap();
    assert_eq!(driver.display().current, "9");
    assert_eq!(driver.display().pending, "");
    driver.clear().unwrap();
}

/// Every operator symbol shows on the pending line
pub fn verify_pending_symbols<D: CalculatorDriver>(driver: &mut D) {
    for op in Operation::ALL {
        driver.clear().unwrap();
        driver
            .press_all(&[Action::Digit(6), Action::Operator(op)])
            .unwrap();
        assert_eq!(driver.display().pending, format!("6 {}", op.symbol()));
    }
    driver.clear().unwrap();
}

/// `5 ÷ 0 =` alerts and resets
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    let alerts_before = driver.alerts().len();
    driver
        .press_all(&[
            Action::Digit(5),
            Action::Operator(Operation::Divide),
            Action::Digit(0),
            Action::Equals,
        ])
        .unwrap();
    let alerts = driver.alerts();
    assert_eq!(alerts.len(), alerts_before + 1);
    assert!(alerts.last().is_some_and(|a| a.contains("divide by zero")));
    assert_eq!(
        driver.display(),
        DisplayLines {
            current: "0".to_string(),
            pending: String::new(),
        }
    );
}

/// `1 ÷ 3 =` rounds to eight places
pub fn verify_fraction_rounding<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    driver
        .press_all(&[
            Action::Digit(1),
            Action::Operator(Operation::Divide),
            Action::Digit(3),
            Action::Equals,
        ])
        .unwrap();
    assert_eq!(driver.display().current, "0.33333333");
    driver.clear().unwrap();
}

/// Percent is relative for Add/Subtract and simple for Multiply/Divide
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    driver
        .press_all(&[Action::Digit(8), Action::Operator(Operation::Multiply)])
        .unwrap();
    driver.enter_number("50").unwrap();
    driver.press(Action::Percent).unwrap();
    assert_eq!(driver.display().current, "0.5");
    assert_eq!(driver.display().pending, "8 ×");
    driver.clear().unwrap();

    driver.enter_number("200").unwrap();
    driver.press(Action::Operator(Operation::Add)).unwrap();
    driver.enter_number("10").unwrap();
    driver.press_all(&[Action::Percent, Action::Equals]).unwrap();
    assert_eq!(driver.display().current, "220");
    driver.clear().unwrap();
}

/// Delete is a no-op on `0` and collapses a single digit to `0`
pub fn verify_delete<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    driver.press(Action::Delete).unwrap();
    assert_eq!(driver.display().current, "0");
    driver.enter_number("7").unwrap();
    driver.press(Action::Delete).unwrap();
    assert_eq!(driver.display().current, "0");
    driver.enter_number("123").unwrap();
    driver.press(Action::Delete).unwrap();
    assert_eq!(driver.display().current, "12");
    driver.clear().unwrap();
}

/// Complete verification suite - runs every check above
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_decimal_point(driver);
    verify_idle_compute(driver);
    verify_chaining(driver);
    verify_pending_symbols(driver);
    verify_divide_by_zero(driver);
    verify_fraction_rounding(driver);
    verify_percent(driver);
    verify_delete(driver);
}
