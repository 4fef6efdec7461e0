//! Keypad Calculator - two-operand keypad calculator
//!
//! A small state machine behind a phone-style keypad: digits build an
//! operand, an operator captures it, `=` folds the pair, `%` scales the
//! operand being typed. The same controller drives three surfaces:
//!
//! - a mock DOM, for testing the browser page natively
//! - the browser itself, through `wasm-bindgen` (feature `wasm`)
//! - a crossterm terminal (feature `tui`, on by default)
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut controller = Controller::new(HeadlessView::new()).unwrap();
//! for key in ["1", "2", "+", "3", "0", "Enter"] {
//!     if let Some(action) = key_to_action(key) {
//!         controller.dispatch(action).unwrap();
//!     }
//! }
//! assert_eq!(controller.display().current, "42");
//!
//! // Division by zero alerts and resets
//! for key in ["5", "/", "0", "="] {
//!     controller.dispatch(key_to_action(key).unwrap()).unwrap();
//! }
//! assert_eq!(controller.view().alerts, vec!["Cannot divide by zero!"]);
//! assert_eq!(controller.display().current, "0");
//! ```

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

pub mod config;
pub mod controller;
pub mod core;
pub mod display;
pub mod driver;
pub mod error;
pub mod input;

#[cfg(feature = "tui")]
pub mod tui;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalculatorConfig;
    pub use crate::controller::Controller;
    pub use crate::core::{Calculator, CalculatorState, NumeralInput, Operation};
    pub use crate::display::{CalculatorView, DisplayLines, HeadlessView};
    pub use crate::driver::CalculatorDriver;
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::input::{key_to_action, Action};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomDriver, DomElement, DomEvent, Keypad, MockDom};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::new();
        calc.append(NumeralInput::Digit(6));
        calc.choose_operation(Operation::Multiply).unwrap();
        calc.append(NumeralInput::Digit(7));
        calc.compute().unwrap();
        assert_eq!(calc.current_operand(), "42");
    }

    #[test]
    fn test_controller_with_config() {
        let config = CalculatorConfig::new().with_decimal_places(2);
        let mut controller = Controller::with_config(config, HeadlessView::new()).unwrap();
        for action in [
            Action::Digit(2),
            Action::Operator(Operation::Divide),
            Action::Digit(3),
            Action::Equals,
        ] {
            controller.dispatch(action).unwrap();
        }
        assert_eq!(controller.display().current, "0.67");
    }

    #[test]
    fn test_error_is_user_visible() {
        assert!(CalcError::DivisionByZero.is_user_visible());
        assert!(!CalcError::invalid_operand("abc").is_user_visible());
    }

    #[test]
    fn test_dom_driver_in_prelude() {
        let mut driver = DomDriver::new().unwrap();
        driver.press(Action::Digit(3)).unwrap();
        assert_eq!(driver.display().current, "3");
        assert_eq!(driver.keypad().buttons().len(), 19);
    }
}
