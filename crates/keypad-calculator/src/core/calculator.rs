//! Calculator state machine
//!
//! Holds the two operands as text, the pending operation and the
//! reset-on-next-input flag. Every public method is one transition; all of
//! them terminate immediately and leave the calculator ready for input.

use tracing::{debug, trace, warn};

use super::format::{format_number, format_result, parse_operand};
use super::operations::Operation;
use crate::config::CalculatorConfig;
use crate::error::{CalcError, CalcResult};

/// Operand text the calculator starts from and returns to on clear
pub const INITIAL_OPERAND: &str = "0";

/// Snapshot of everything the calculator knows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    /// Operand being typed, or the last result
    pub current_operand: String,
    /// Left-hand operand captured when an operator was chosen; empty when none
    pub previous_operand: String,
    /// Operator waiting for its right-hand operand
    pub pending_operation: Option<Operation>,
    /// Next digit starts a fresh operand instead of appending
    pub should_reset_on_next_input: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_operand: INITIAL_OPERAND.to_string(),
            previous_operand: String::new(),
            pending_operation: None,
            should_reset_on_next_input: false,
        }
    }
}

impl CalculatorState {
    /// Creates the start-up state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the current operand is the untouched `"0"`
    #[must_use]
    pub fn is_initial_operand(&self) -> bool {
        self.current_operand == INITIAL_OPERAND
    }
}

/// A single keypad entry for the operand being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralInput {
    /// Digit 0-9; larger values are rejected on append
    Digit(u8),
    /// Decimal point
    DecimalPoint,
}

impl NumeralInput {
    /// Returns the character appended to the operand, if valid
    #[must_use]
    pub fn as_char(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::DecimalPoint => Some('.'),
        }
    }

    /// Parses a typed character
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::DecimalPoint),
            _ => c.to_digit(10).map(|d| Self::Digit(d as u8)),
        }
    }
}

/// The calculator state machine
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    config: CalculatorConfig,
}

impl Calculator {
    /// Creates a calculator with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            state: CalculatorState::new(),
            config,
        }
    }

    /// Creates a calculator resuming from `state`
    #[must_use]
    pub fn from_state(state: CalculatorState, config: CalculatorConfig) -> Self {
        Self { state, config }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Operand being typed or last result
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.state.current_operand
    }

    /// Captured left-hand operand
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.state.previous_operand
    }

    /// Operator awaiting its right-hand operand
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operation> {
        self.state.pending_operation
    }

    /// Appends a digit or decimal point to the current operand
    ///
    /// A fresh operand is started when the current one is `"0"` or an
    /// operator/compute just finished. A second decimal point is ignored.
    pub fn append(&mut self, input: NumeralInput) {
        let Some(ch) = input.as_char() else {
            trace!(?input, "rejected numeral input");
            return;
        };

        let state = &mut self.state;
        if state.is_initial_operand() || state.should_reset_on_next_input {
            state.current_operand.clear();
            state.should_reset_on_next_input = false;
        }

        if ch == '.' && state.current_operand.contains('.') {
            trace!(operand = %state.current_operand, "rejected second decimal point");
            return;
        }

        if let Some(max) = self.config.max_operand_len {
            if state.current_operand.chars().count() >= max {
                trace!(max, "operand length limit reached");
                return;
            }
        }

        state.current_operand.push(ch);
    }

    /// Selects an operator, folding any pending calculation first
    ///
    /// `2 + 3 +` computes `5` before `+` becomes pending. Ignored while the
    /// current operand is `"0"`. A fold that divides by zero clears the
    /// calculator and `op` is still chosen on the cleared `"0"`; the error is
    /// returned once the transition is complete.
    pub fn choose_operation(&mut self, op: Operation) -> CalcResult<()> {
        if self.state.is_initial_operand() {
            trace!(%op, "operator ignored on initial operand");
            return Ok(());
        }

        let folded = if self.state.previous_operand.is_empty() {
            Ok(())
        } else {
            self.compute()
        };

        let state = &mut self.state;
        state.pending_operation = Some(op);
        state.previous_operand = state.current_operand.clone();
        state.should_reset_on_next_input = true;
        folded
    }

    /// Applies the pending operation to the two operands
    ///
    /// Unparseable operands or a missing operation leave the state untouched.
    /// Division by zero clears the calculator and returns
    /// [`CalcError::DivisionByZero`] so the caller can notify the user.
    pub fn compute(&mut self) -> CalcResult<()> {
        let Some(op) = self.state.pending_operation else {
            return Ok(());
        };

        let operands = parse_operand(&self.state.previous_operand)
            .and_then(|prev| parse_operand(&self.state.current_operand).map(|cur| (prev, cur)));
        let (prev, current) = match operands {
            Ok(pair) => pair,
            Err(err) => {
                debug!(error = %err, "compute aborted");
                return Ok(());
            }
        };

        match op.apply(prev, current) {
            Ok(value) => {
                let state = &mut self.state;
                state.current_operand = format_result(value, self.config.decimal_places);
                state.pending_operation = None;
                state.previous_operand.clear();
                state.should_reset_on_next_input = true;
                debug!(prev, %op, current, result = %state.current_operand, "computed");
                Ok(())
            }
            Err(err @ CalcError::DivisionByZero) => {
                warn!(prev, "division by zero, clearing calculator");
                self.clear();
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Turns the current operand into a percentage
    ///
    /// With a pending Add or Subtract the percentage is taken of the left
    /// operand (`200 + 10%` makes the operand `20`); otherwise the operand is
    /// divided by 100.
    pub fn apply_percent(&mut self) {
        if self.state.is_initial_operand() {
            return;
        }

        let Ok(current) = parse_operand(&self.state.current_operand) else {
            trace!(operand = %self.state.current_operand, "percent ignored on partial operand");
            return;
        };

        let value = match self.state.pending_operation {
            Some(op) if op.is_additive() && !self.state.previous_operand.is_empty() => {
                let Ok(prev) = parse_operand(&self.state.previous_operand) else {
                    return;
                };
                prev * (current / 100.0)
            }
            _ => current / 100.0,
        };

        self.state.current_operand = format_number(value);
    }

    /// Removes the last character of the current operand
    pub fn delete_last_char(&mut self) {
        if self.state.is_initial_operand() {
            return;
        }

        let operand = &mut self.state.current_operand;
        if operand.chars().count() <= 1 {
            *operand = INITIAL_OPERAND.to_string();
        } else {
            operand.pop();
        }
    }

    /// Resets every field to its start-up value
    pub fn clear(&mut self) {
        self.state = CalculatorState::new();
    }
}
