//! Browser bindings
//!
//! Exposes the calculator to JavaScript. The page's click and keydown
//! handlers forward `data-action`/`data-value` pairs and `KeyboardEvent.key`
//! strings; the display element is updated after every action.

use wasm_bindgen::prelude::*;
use web_sys::{console, Element};

use crate::driver::{Calculator, DisplaySink};
use crate::wasm::keypad::Keypad;

/// Display sink backed by a DOM element, once one is attached
#[derive(Debug, Default)]
struct ElementDisplay {
    element: Option<Element>,
    text: String,
}

impl DisplaySink for ElementDisplay {
    fn show(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        if let Some(element) = &self.element {
            element.set_text_content(Some(text));
        }
    }
}

/// Calculator instance owned by the page
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Calculator<ElementDisplay>,
    keypad: Keypad,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator that is not yet bound to an element
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            calculator: Calculator::new(ElementDisplay::default()),
            keypad: Keypad::new(),
        }
    }

    /// Binds the display to the element with `display_id` and renders into it
    pub fn attach(&mut self, display_id: &str) -> Result<(), JsValue> {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(display_id))
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{display_id}'")))?;

        let sink = self.calculator.sink_mut();
        element.set_text_content(Some(&sink.text));
        sink.element = Some(element);
        Ok(())
    }

    /// Handles a keypad button by its `data-action` and `data-value`
    pub fn press(&mut self, kind: &str, value: Option<String>) -> String {
        self.calculator.handle_parts(kind, value.as_deref());
        self.display()
    }

    /// Handles a keypad button by its element ID
    pub fn click(&mut self, button_id: &str) -> String {
        if let Some(action) = self.keypad.handle_click(button_id) {
            self.calculator.dispatch(action);
        }
        self.display()
    }

    /// Handles a keydown. Returns true if the key was consumed, so the page
    /// can call `preventDefault`.
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.calculator.handle_key(key).is_some()
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    /// Canonical expression text
    #[wasm_bindgen(getter)]
    pub fn expression(&self) -> String {
        self.calculator.engine().expression().to_string()
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Module initialization
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"keycalc initialized".into());
}
