//! Controller tying the state machine to a view
//!
//! Input adapters hold the controller and call [`Controller::dispatch`];
//! after every action the display is projected and pushed to the view.

use tracing::debug;

use crate::config::CalculatorConfig;
use crate::core::Calculator;
use crate::display::{render, CalculatorView, DisplayLines};
use crate::error::{CalcError, CalcResult};
use crate::input::Action;

/// Owns the calculator and the view it draws on
#[derive(Debug)]
pub struct Controller<V: CalculatorView> {
    calculator: Calculator,
    view: V,
}

impl<V: CalculatorView> Controller<V> {
    /// Creates a controller and draws the initial display
    pub fn new(view: V) -> CalcResult<Self> {
        Self::with_calculator(Calculator::new(), view)
    }

    /// Creates a controller with custom configuration
    pub fn with_config(config: CalculatorConfig, view: V) -> CalcResult<Self> {
        Self::with_calculator(Calculator::with_config(config), view)
    }

    /// Creates a controller around an existing calculator
    pub fn with_calculator(calculator: Calculator, view: V) -> CalcResult<Self> {
        let mut controller = Self { calculator, view };
        controller.refresh()?;
        Ok(controller)
    }

    /// The state machine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// The view
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view, for adapters that also feed it events
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Current projection of the state
    #[must_use]
    pub fn display(&self) -> DisplayLines {
        render(self.calculator.state())
    }

    /// Runs one transition and refreshes the view
    ///
    /// Calculator errors are shown to the user and never returned; only a
    /// failing view produces an `Err`.
    pub fn dispatch(&mut self, action: Action) -> CalcResult<()> {
        debug!(?action, "dispatch");

        let outcome = match action {
            Action::Digit(_) | Action::Decimal => {
                if let Some(numeral) = action.numeral() {
                    self.calculator.append(numeral);
                }
                Ok(())
            }
            Action::Operator(op) => self.calculator.choose_operation(op),
            Action::Equals => self.calculator.compute(),
            Action::Percent => {
                self.calculator.apply_percent();
                Ok(())
            }
            Action::Delete => {
                self.calculator.delete_last_char();
                Ok(())
            }
            Action::Clear => {
                self.calculator.clear();
                Ok(())
            }
        };

        if let Err(err) = outcome {
            self.notify(&err)?;
        }
        self.refresh()
    }

    /// Pushes the current display to the view
    pub fn refresh(&mut self) -> CalcResult<()> {
        let lines = self.display();
        self.view.render(&lines)
    }

    fn notify(&mut self, err: &CalcError) -> CalcResult<()> {
        if !err.is_user_visible() {
            debug!(error = %err, "suppressed calculator error");
            return Ok(());
        }
        let message = match err {
            CalcError::DivisionByZero => self.calculator.config().divide_by_zero_message.clone(),
            other => other.to_string(),
        };
        self.view.alert(&message)
    }
}
