//! DOM Driver - unified testing interface over the mock DOM
//!
//! Routes clicks and key presses through the same keypad and keyboard
//! mapping the browser binding uses, so the shared driver checks
//! cover the browser path without a browser.

use super::dom::{DomEvent, MockDom};
use super::keypad::{button_id, Keypad};
use crate::config::CalculatorConfig;
use crate::controller::Controller;
use crate::display::DisplayLines;
use crate::driver::CalculatorDriver;
use crate::error::CalcResult;
use crate::input::{key_to_action, Action};

/// Driver wrapping a controller rendering into a mock DOM
#[derive(Debug)]
pub struct DomDriver {
    controller: Controller<MockDom>,
    keypad: Keypad,
}

impl DomDriver {
    /// Creates a driver over a fresh calculator page
    pub fn new() -> CalcResult<Self> {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a driver with custom configuration
    pub fn with_config(config: CalculatorConfig) -> CalcResult<Self> {
        let keypad = Keypad::new();
        let dom = MockDom::calculator(&keypad);
        Ok(Self {
            controller: Controller::with_config(config, dom)?,
            keypad,
        })
    }

    /// Returns the controller
    #[must_use]
    pub fn controller(&self) -> &Controller<MockDom> {
        &self.controller
    }

    /// Returns the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.controller.view()
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Simulates clicking an element; returns whether a keypad button handled it
    pub fn click(&mut self, element_id: &str) -> CalcResult<bool> {
        self.controller
            .view_mut()
            .dispatch_event(DomEvent::click(element_id));
        match self.keypad.handle_click(element_id) {
            Some(action) => {
                self.controller.dispatch(action)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Simulates a keydown on the document; returns whether the key was mapped
    pub fn press_key(&mut self, key: &str) -> CalcResult<bool> {
        self.controller
            .view_mut()
            .dispatch_event(DomEvent::key_down(key));
        match key_to_action(key) {
            Some(action) => {
                self.controller.dispatch(action)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Types a sequence of keys, one keydown each
    pub fn type_keys(&mut self, keys: &[&str]) -> CalcResult<()> {
        for key in keys {
            self.press_key(key)?;
        }
        Ok(())
    }
}

impl CalculatorDriver for DomDriver {
    fn press(&mut self, action: Action) -> CalcResult<()> {
        self.click(button_id(action)).map(|_| ())
    }

    fn display(&self) -> DisplayLines {
        self.dom().display_lines()
    }

    fn alerts(&self) -> Vec<String> {
        self.dom().alerts().to_vec()
    }
}
