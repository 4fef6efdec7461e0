//! Display projection
//!
//! The display is a pure function of [`CalculatorState`]. Views receive the
//! projected lines after every transition and never read the state directly.

use crate::core::CalculatorState;
use crate::error::CalcResult;

/// The two text regions of the calculator display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayLines {
    /// Operand being typed or last result
    pub current: String,
    /// Captured operand followed by the pending operator symbol
    pub pending: String,
}

/// Projects calculator state onto the two display lines
#[must_use]
pub fn render(state: &CalculatorState) -> DisplayLines {
    let pending = match state.pending_operation {
        Some(op) => format!("{} {}", state.previous_operand, op.symbol()),
        None => state.previous_operand.clone(),
    };
    DisplayLines {
        current: state.current_operand.clone(),
        pending,
    }
}

/// A surface the calculator draws on
///
/// Implementations exist for the mock DOM, the browser document and the
/// terminal. `alert` must be shown before the following `render`.
pub trait CalculatorView {
    /// Writes both display lines
    fn render(&mut self, lines: &DisplayLines) -> CalcResult<()>;

    /// Shows a notification to the user
    fn alert(&mut self, message: &str) -> CalcResult<()>;
}

/// View that only remembers what it was given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessView {
    /// Last rendered lines
    pub lines: DisplayLines,
    /// Every alert shown, oldest first
    pub alerts: Vec<String>,
    /// Number of renders received
    pub renders: usize,
}

impl HeadlessView {
    /// Creates an empty headless view
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CalculatorView for HeadlessView {
    fn render(&mut self, lines: &DisplayLines) -> CalcResult<()> {
        self.lines = lines.clone();
        self.renders += 1;
        Ok(())
    }

    fn alert(&mut self, message: &str) -> CalcResult<()> {
        self.alerts.push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    fn state(current: &str, previous: &str, op: Option<Operation>) -> CalculatorState {
        CalculatorState {
            current_operand: current.to_string(),
            previous_operand: previous.to_string(),
            pending_operation: op,
            should_reset_on_next_input: false,
        }
    }

    #[test]
    fn test_render_initial() {
        let lines = render(&CalculatorState::new());
        assert_eq!(lines.current, "0");
        assert_eq!(lines.pending, "");
    }

    #[test]
    fn test_render_pending_symbols() {
        for (op, expected) in [
            (Operation::Add, "12 +"),
            (Operation::Subtract, "12 -"),
            (Operation::Multiply, "12 ×"),
            (Operation::Divide, "12 ÷"),
        ] {
            let lines = render(&state("3", "12", Some(op)));
            assert_eq!(lines.pending, expected);
            assert_eq!(lines.current, "3");
        }
    }

    #[test]
    fn test_render_previous_without_operation() {
        let lines = render(&state("3", "12", None));
        assert_eq!(lines.pending, "12");
    }

    #[test]
    fn test_render_current_verbatim() {
        let lines = render(&state("0.", "", None));
        assert_eq!(lines.current, "0.");
    }

    #[test]
    fn test_headless_view_records() {
        let mut view = HeadlessView::new();
        view.render(&render(&state("1", "", None))).unwrap();
        view.alert("hello").unwrap();
        assert_eq!(view.lines.current, "1");
        assert_eq!(view.alerts, vec!["hello".to_string()]);
        assert_eq!(view.renders, 1);
    }
}
