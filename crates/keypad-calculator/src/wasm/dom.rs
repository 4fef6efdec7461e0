//! Mock DOM for testing the browser front end
//!
//! Mirrors the calculator page (display regions plus keypad) closely enough
//! to exercise event routing and rendering without a browser.

use std::collections::HashMap;

use super::keypad::{Keypad, MockDomKeypadExt};
use crate::display::{CalculatorView, DisplayLines};
use crate::error::{CalcError, CalcResult};

/// ID of the pending-expression region
pub const PREVIOUS_OPERAND_ID: &str = "previous-operand";

/// ID of the current-operand region
pub const CURRENT_OPERAND_ID: &str = "current-operand";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }
}

/// DOM events the calculator page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key pressed anywhere on the document
    KeyDown {
        /// `KeyboardEvent.key` of the pressed key
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock DOM for testing the calculator without a browser
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    /// Elements by ID for quick lookup
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
    /// Alerts shown, oldest first
    alerts: Vec<String>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
            alerts: Vec::new(),
        }
    }

    /// Creates the calculator page: display regions and keypad
    #[must_use]
    pub fn calculator(keypad: &Keypad) -> Self {
        let mut dom = Self::new();

        let previous = DomElement::new("div")
            .with_id(PREVIOUS_OPERAND_ID)
            .with_class("previous-operand");
        let current = DomElement::new("div")
            .with_id(CURRENT_OPERAND_ID)
            .with_class("current-operand")
            .with_text("0");
        let display = DomElement::new("div")
            .with_id("display")
            .with_class("display")
            .with_child(previous.clone())
            .with_child(current.clone());

        dom.root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator")
            .with_child(display.clone());

        dom.register_element(previous);
        dom.register_element(current);
        dom.register_element(display);
        dom.add_keypad(keypad);

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Records a dispatched event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) -> CalcResult<()> {
        let elem = self
            .elements
            .get_mut(id)
            .ok_or_else(|| CalcError::view(format!("no element with id '{id}'")))?;
        elem.set_text(text);
        Ok(())
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Alerts shown so far
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Reads both display regions back
    #[must_use]
    pub fn display_lines(&self) -> DisplayLines {
        DisplayLines {
            current: self
                .get_element_text(CURRENT_OPERAND_ID)
                .unwrap_or_default()
                .to_string(),
            pending: self
                .get_element_text(PREVIOUS_OPERAND_ID)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

impl CalculatorView for MockDom {
    fn render(&mut self, lines: &DisplayLines) -> CalcResult<()> {
        self.set_element_text(CURRENT_OPERAND_ID, &lines.current)?;
        self.set_element_text(PREVIOUS_OPERAND_ID, &lines.pending)
    }

    fn alert(&mut self, message: &str) -> CalcResult<()> {
        self.alerts.push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement tests =====

    #[test]
    fn test_dom_element_new() {
        let elem = DomElement::new("span");
        assert_eq!(elem.tag, "span");
        assert!(elem.id.is_empty());
        assert!(elem.text_content.is_empty());
    }

    #[test]
    fn test_dom_element_default() {
        assert_eq!(DomElement::default().tag, "div");
    }

    #[test]
    fn test_dom_element_builders() {
        let elem = DomElement::new("button")
            .with_id("seven")
            .with_text("7")
            .with_class("number")
            .with_child(DomElement::new("span"));
        assert_eq!(elem.id, "seven");
        assert_eq!(elem.text_content, "7");
        assert_eq!(elem.classes, ["number"]);
        assert_eq!(elem.children.len(), 1);
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_dom_event_constructors() {
        assert_eq!(
            DomEvent::click("equals"),
            DomEvent::Click {
                element_id: "equals".to_string()
            }
        );
        assert_eq!(
            DomEvent::key_down("Enter"),
            DomEvent::KeyDown {
                key: "Enter".to_string()
            }
        );
    }

    // ===== MockDom tests =====

    #[test]
    fn test_calculator_page_structure() {
        let dom = MockDom::calculator(&Keypad::new());
        assert_eq!(dom.get_element_text(CURRENT_OPERAND_ID), Some("0"));
        assert_eq!(dom.get_element_text(PREVIOUS_OPERAND_ID), Some(""));
        assert!(dom.get_element("one").is_some());
        assert!(dom.get_element("percent").is_some());
        assert_eq!(dom.root.children.len(), 2);
    }

    #[test]
    fn test_event_history() {
        let mut dom = MockDom::new();
        dom.dispatch_event(DomEvent::click("one"));
        dom.dispatch_event(DomEvent::key_down("2"));
        assert_eq!(
            dom.event_history(),
            [DomEvent::click("one"), DomEvent::key_down("2")]
        );
    }

    #[test]
    fn test_set_element_text_missing() {
        let mut dom = MockDom::new();
        assert!(matches!(
            dom.set_element_text("nope", "x"),
            Err(CalcError::View { .. })
        ));
    }

    #[test]
    fn test_render_writes_regions() {
        let mut dom = MockDom::calculator(&Keypad::new());
        let lines = DisplayLines {
            current: "3".to_string(),
            pending: "12 ×".to_string(),
        };
        dom.render(&lines).unwrap();
        assert_eq!(dom.display_lines(), lines);
    }

    #[test]
    fn test_render_without_regions_fails() {
        let mut dom = MockDom::new();
        assert!(dom.render(&DisplayLines::default()).is_err());
    }

    #[test]
    fn test_alert_recorded() {
        let mut dom = MockDom::new();
        dom.alert("Cannot divide by zero!").unwrap();
        assert_eq!(dom.alerts(), ["Cannot divide by zero!".to_string()]);
    }
}
