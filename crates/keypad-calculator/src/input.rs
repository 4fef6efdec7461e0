//! Input actions shared by every front end
//!
//! Buttons, browser keys and terminal keys are all translated into an
//! [`Action`] before they reach the calculator.

use crate::core::{NumeralInput, Operation};

/// Something the user asked the calculator to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append a decimal point
    Decimal,
    /// Choose an operator
    Operator(Operation),
    /// Compute the pending operation
    Equals,
    /// Turn the current operand into a percentage
    Percent,
    /// Delete the last character
    Delete,
    /// Reset the calculator
    Clear,
}

impl Action {
    /// Every action the keypad exposes
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut actions: Vec<Self> = (0..=9).map(Self::Digit).collect();
        actions.push(Self::Decimal);
        actions.extend(Operation::ALL.into_iter().map(Self::Operator));
        actions.extend([Self::Equals, Self::Percent, Self::Delete, Self::Clear]);
        actions
    }

    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Percent => "%".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::Clear => "AC".to_string(),
        }
    }

    /// Returns the browser key name that triggers this action
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.key().to_string(),
            Self::Equals => "Enter".to_string(),
            Self::Percent => "%".to_string(),
            Self::Delete => "Backspace".to_string(),
            Self::Clear => "Escape".to_string(),
        }
    }

    /// Returns the numeral this action appends, if it is a numeral entry
    #[must_use]
    pub const fn numeral(&self) -> Option<NumeralInput> {
        match self {
            Self::Digit(d) => Some(NumeralInput::Digit(*d)),
            Self::Decimal => Some(NumeralInput::DecimalPoint),
            _ => None,
        }
    }
}

/// Maps a `KeyboardEvent.key` name to an action
#[must_use]
pub fn key_to_action(key: &str) -> Option<Action> {
    match key {
        "Enter" | "=" => return Some(Action::Equals),
        "Backspace" => return Some(Action::Delete),
        "Escape" => return Some(Action::Clear),
        _ => {}
    }

    let mut chars = key.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    match c {
        '.' => Some(Action::Decimal),
        '%' => Some(Action::Percent),
        _ => c
            .to_digit(10)
            .map(|d| Action::Digit(d as u8))
            .or_else(|| Operation::from_key(c).map(Action::Operator)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_actions() {
        let all = Action::all();
        assert_eq!(all.len(), 19);
        assert!(all.contains(&Action::Digit(0)));
        assert!(all.contains(&Action::Operator(Operation::Divide)));
        assert!(all.contains(&Action::Clear));
    }

    #[test]
    fn test_digit_keys() {
        for d in 0..=9u8 {
            assert_eq!(key_to_action(&d.to_string()), Some(Action::Digit(d)));
        }
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(key_to_action("+"), Some(Action::Operator(Operation::Add)));
        assert_eq!(key_to_action("-"), Some(Action::Operator(Operation::Subtract)));
        assert_eq!(key_to_action("*"), Some(Action::Operator(Operation::Multiply)));
        assert_eq!(key_to_action("/"), Some(Action::Operator(Operation::Divide)));
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(key_to_action("."), Some(Action::Decimal));
        assert_eq!(key_to_action("%"), Some(Action::Percent));
        assert_eq!(key_to_action("Enter"), Some(Action::Equals));
        assert_eq!(key_to_action("="), Some(Action::Equals));
        assert_eq!(key_to_action("Backspace"), Some(Action::Delete));
        assert_eq!(key_to_action("Escape"), Some(Action::Clear));
    }

    #[test]
    fn test_unmapped_keys() {
        for key in ["", "a", "F1", "Shift", "12", "^", "Delete", "x"] {
            assert_eq!(key_to_action(key), None, "{key:?}");
        }
    }

    #[test]
    fn test_key_round_trip() {
        for action in Action::all() {
            assert_eq!(key_to_action(&action.key()), Some(action));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Action::Digit(4).label(), "4");
        assert_eq!(Action::Operator(Operation::Multiply).label(), "×");
        assert_eq!(Action::Equals.label(), "=");
        assert_eq!(Action::Clear.label(), "AC");
    }

    #[test]
    fn test_numeral() {
        assert_eq!(Action::Digit(2).numeral(), Some(NumeralInput::Digit(2)));
        assert_eq!(Action::Decimal.numeral(), Some(NumeralInput::DecimalPoint));
        assert_eq!(Action::Percent.numeral(), None);
    }
}
