//! Core calculator: operations, numeral formatting and the state machine

mod calculator;
pub mod format;
mod operations;

pub use calculator::{Calculator, CalculatorState, NumeralInput, INITIAL_OPERAND};
pub use operations::Operation;
