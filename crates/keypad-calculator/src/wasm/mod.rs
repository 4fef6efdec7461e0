//! Browser front end
//!
//! The mock DOM, keypad and driver compile everywhere so the browser path
//! is tested natively; the `wasm` feature adds the real bindings.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::{mount, BrowserCalculator, BrowserView};
pub use dom::{DomElement, DomEvent, MockDom, CURRENT_OPERAND_ID, PREVIOUS_OPERAND_ID};
pub use driver::DomDriver;
pub use keypad::{button_id, Keypad, KeypadButtonDef, MockDomKeypadExt};
