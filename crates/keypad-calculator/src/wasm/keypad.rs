//! On-screen keypad
//!
//! Layout:
//! ```text
//! [ AC ] [ DEL ] [ % ] [ ÷ ]
//! [ 7  ] [ 8   ] [ 9 ] [ × ]
//! [ 4  ] [ 5   ] [ 6 ] [ - ]
//! [ 1  ] [ 2   ] [ 3 ] [ + ]
//! [ 0          ] [ . ] [ = ]
//! ```

use super::dom::{DomElement, MockDom};
use crate::core::Operation;
use crate::input::Action;

const DIGIT_IDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Returns the DOM element ID of the button that triggers `action`
#[must_use]
pub fn button_id(action: Action) -> &'static str {
    match action {
        Action::Digit(d) => DIGIT_IDS.get(usize::from(d)).copied().unwrap_or("digit"),
        Action::Decimal => "decimal",
        Action::Operator(op) => op.name(),
        Action::Equals => "equals",
        Action::Percent => "percent",
        Action::Delete => "delete",
        Action::Clear => "clear",
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: Action,
    /// The DOM element ID for this button
    pub id: String,
    /// Number of grid columns the button covers
    pub span: usize,
}

impl KeypadButtonDef {
    /// Creates a button covering one cell
    #[must_use]
    pub fn new(action: Action) -> Self {
        Self::spanning(action, 1)
    }

    /// Creates a button covering `span` cells of its row
    #[must_use]
    pub fn spanning(action: Action, span: usize) -> Self {
        Self {
            action,
            id: button_id(action).to_string(),
            span,
        }
    }

    /// CSS class grouping the button by role
    #[must_use]
    pub const fn group_class(&self) -> &'static str {
        match self.action {
            Action::Digit(_) | Action::Decimal => "number",
            Action::Operator(_) => "operator",
            _ => "function",
        }
    }
}

/// Keypad layout and click routing
///
/// Buttons are stored in reading order, four grid columns per row.
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard five-row keypad
    #[must_use]
    pub fn new() -> Self {
        let op = |operation| KeypadButtonDef::new(Action::Operator(operation));
        let digit = |d| KeypadButtonDef::new(Action::Digit(d));
        let buttons = vec![
            // AC DEL % ÷
            KeypadButtonDef::new(Action::Clear),
            KeypadButtonDef::new(Action::Delete),
            KeypadButtonDef::new(Action::Percent),
            op(Operation::Divide),
            // 7 8 9 ×
            digit(7),
            digit(8),
            digit(9),
            op(Operation::Multiply),
            // 4 5 6 -
            digit(4),
            digit(5),
            digit(6),
            op(Operation::Subtract),
            // 1 2 3 +
            digit(1),
            digit(2),
            digit(3),
            op(Operation::Add),
            // 0 (wide) . =
            KeypadButtonDef::spanning(Action::Digit(0), 2),
            KeypadButtonDef::new(Action::Decimal),
            KeypadButtonDef::new(Action::Equals),
        ];

        Self { buttons }
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Processes a button click event and returns the action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Action> {
        self.buttons
            .iter()
            .find(|b| b.id == element_id)
            .map(|btn| btn.action)
    }

    /// Creates DOM elements for all keypad buttons
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                let mut elem = DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.action.label())
                    .with_class("keypad-btn")
                    .with_class(btn.group_class());
                if btn.span > 1 {
                    elem = elem.with_class(&format!("span-{}", btn.span));
                }
                elem
            })
            .collect()
    }

    /// Creates a keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.create_dom_elements()
            .into_iter()
            .fold(DomElement::new("div").with_id("keypad").with_class("keypad"), |pad, btn| {
                pad.with_child(btn)
            })
    }
}

/// Extension trait for MockDom to add keypad
pub trait MockDomKeypadExt {
    /// Adds keypad buttons to an existing DOM
    fn add_keypad(&mut self, keypad: &Keypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &Keypad) {
        let keypad_elem = keypad.create_keypad_element();
        for btn_elem in &keypad_elem.children {
            self.register_element(btn_elem.clone());
        }
        self.root.children.push(keypad_elem.clone());
        self.register_element(keypad_elem);
    }
}
