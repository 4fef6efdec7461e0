//! Browser WASM bindings for the calculator
//!
//! [`BrowserCalculator`] works detached until [`BrowserCalculator::attach`]
//! binds it to a page carrying the `previous-operand`/`current-operand`
//! regions and the keypad button ids.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, KeyboardEvent, Window};

use super::dom::{CURRENT_OPERAND_ID, PREVIOUS_OPERAND_ID};
use super::keypad::Keypad;
use crate::config::CalculatorConfig;
use crate::controller::Controller;
use crate::display::{CalculatorView, DisplayLines};
use crate::error::{CalcError, CalcResult};
use crate::input::{key_to_action, Action};

type Listener = Closure<dyn FnMut(web_sys::Event)>;

#[derive(Debug)]
struct Page {
    window: Window,
    previous: Element,
    current: Element,
}

impl Page {
    fn bind(window: Window, document: &Document) -> CalcResult<Self> {
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| CalcError::view(format!("no element with id '{id}'")))
        };
        Ok(Self {
            previous: find(PREVIOUS_OPERAND_ID)?,
            current: find(CURRENT_OPERAND_ID)?,
            window,
        })
    }
}

/// View writing into the page's display regions
#[derive(Debug, Default)]
pub struct BrowserView {
    page: Option<Page>,
    lines: DisplayLines,
    alerts: Vec<String>,
}

impl CalculatorView for BrowserView {
    fn render(&mut self, lines: &DisplayLines) -> CalcResult<()> {
        if let Some(page) = &self.page {
            page.current.set_text_content(Some(&lines.current));
            page.previous.set_text_content(Some(&lines.pending));
        }
        self.lines = lines.clone();
        Ok(())
    }

    fn alert(&mut self, message: &str) -> CalcResult<()> {
        self.alerts.push(message.to_string());
        match &self.page {
            Some(page) => page
                .window
                .alert_with_message(message)
                .map_err(|e| CalcError::view(format!("alert failed: {e:?}"))),
            None => Ok(()),
        }
    }
}

fn js_error(err: &CalcError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn dispatch_logged(controller: &RefCell<Controller<BrowserView>>, action: Action) {
    let Ok(mut controller) = controller.try_borrow_mut() else {
        return;
    };
    if let Err(err) = controller.dispatch(action) {
        console::error_1(&js_error(&err));
    }
}

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    controller: Rc<RefCell<Controller<BrowserView>>>,
    keypad: Keypad,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new detached calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BrowserCalculator, JsValue> {
        Self::build(CalculatorConfig::default()).map_err(|e| js_error(&e))
    }

    /// Create a calculator from a JSON configuration
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<BrowserCalculator, JsValue> {
        CalculatorConfig::from_json(json)
            .and_then(Self::build)
            .map_err(|e| js_error(&e))
    }

    /// Bind to the current document and install click and keydown listeners
    pub fn attach(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let page = Page::bind(window, &document).map_err(|e| js_error(&e))?;
        {
            let mut controller = self.controller.borrow_mut();
            controller.view_mut().page = Some(page);
            controller.refresh().map_err(|e| js_error(&e))?;
        }

        for button in self.keypad.buttons() {
            let Some(element) = document.get_element_by_id(&button.id) else {
                console::warn_1(&format!("keypad button '{}' missing", button.id).into());
                continue;
            };
            let controller = Rc::clone(&self.controller);
            let action = button.action;
            let listener = Listener::new(move |_event: web_sys::Event| {
                dispatch_logged(&controller, action);
            });
            element.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
            self.listeners.push(listener);
        }

        let controller = Rc::clone(&self.controller);
        let listener = Listener::new(move |event: web_sys::Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Some(action) = key_to_action(&key_event.key()) {
                event.prevent_default();
                dispatch_logged(&controller, action);
            }
        });
        document.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())?;
        self.listeners.push(listener);

        console::log_1(&format!("calculator attached, {} listeners", self.listeners.len()).into());
        Ok(())
    }

    /// Handle a keypad button click by element ID; returns whether it was a button
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, button_id: &str) -> Result<bool, JsValue> {
        match self.keypad.handle_click(button_id) {
            Some(action) => self.dispatch(action).map(|()| true),
            None => Ok(false),
        }
    }

    /// Handle a keyboard key; returns whether the key was mapped
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> Result<bool, JsValue> {
        match key_to_action(key) {
            Some(action) => self.dispatch(action).map(|()| true),
            None => Ok(false),
        }
    }

    /// Operand being typed or last result
    #[wasm_bindgen(getter, js_name = currentOperand)]
    pub fn current_operand(&self) -> String {
        self.controller.borrow().display().current
    }

    /// Captured operand and pending operator symbol
    #[wasm_bindgen(getter, js_name = pendingExpression)]
    pub fn pending_expression(&self) -> String {
        self.controller.borrow().display().pending
    }

    /// Number of alerts raised so far
    #[wasm_bindgen(getter, js_name = alertCount)]
    pub fn alert_count(&self) -> usize {
        self.controller.borrow().view().alerts.len()
    }
}

impl BrowserCalculator {
    fn build(config: CalculatorConfig) -> CalcResult<Self> {
        let controller = Controller::with_config(config, BrowserView::default())?;
        Ok(Self {
            controller: Rc::new(RefCell::new(controller)),
            keypad: Keypad::new(),
            listeners: Vec::new(),
        })
    }

    fn dispatch(&mut self, action: Action) -> Result<(), JsValue> {
        self.controller
            .borrow_mut()
            .dispatch(action)
            .map_err(|e| js_error(&e))
    }

    /// Last lines drawn
    #[must_use]
    pub fn lines(&self) -> DisplayLines {
        self.controller.borrow().view().lines.clone()
    }
}

/// Create a calculator and attach it to the current document
#[wasm_bindgen]
pub fn mount() -> Result<BrowserCalculator, JsValue> {
    let mut calculator = BrowserCalculator::new()?;
    calculator.attach()?;
    Ok(calculator)
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator WASM initialized".into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_calculator_new() {
        let calc = BrowserCalculator::new().unwrap();
        assert_eq!(calc.current_operand(), "0");
        assert_eq!(calc.pending_expression(), "");
        assert_eq!(calc.alert_count(), 0);
    }

    #[test]
    fn test_with_config() {
        let calc = BrowserCalculator::with_config(r#"{"max_operand_len": 3}"#).unwrap();
        assert_eq!(
            calc.controller.borrow().calculator().config().max_operand_len,
            Some(3)
        );
    }

    #[test]
    fn test_handle_button() {
        let mut calc = BrowserCalculator::new().unwrap();
        assert!(calc.handle_button("five").unwrap());
        assert!(calc.handle_button("add").unwrap());
        assert!(calc.handle_button("three").unwrap());
        assert_eq!(calc.pending_expression(), "5 +");
        assert!(calc.handle_button("equals").unwrap());
        assert_eq!(calc.current_operand(), "8");
        assert!(!calc.handle_button("display").unwrap());
    }

    #[test]
    fn test_handle_key() {
        let mut calc = BrowserCalculator::new().unwrap();
        for key in ["7", "*", "6", "Enter"] {
            assert!(calc.handle_key(key).unwrap());
        }
        assert_eq!(calc.current_operand(), "42");
        assert!(!calc.handle_key("Shift").unwrap());
    }

    #[test]
    fn test_divide_by_zero_recorded_detached() {
        let mut calc = BrowserCalculator::new().unwrap();
        for key in ["9", "/", "0", "="] {
            calc.handle_key(key).unwrap();
        }
        assert_eq!(calc.alert_count(), 1);
        assert_eq!(calc.lines().current, "0");
    }
}
