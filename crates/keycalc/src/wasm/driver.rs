//! Page driver over the mock DOM
//!
//! Simulates what the browser event handlers do: clicks on keypad buttons
//! and keydown events on the window, both routed through one
//! [`Calculator`] whose display sink is the page.

use super::dom::{DomEvent, MockDom};
use super::keypad::Keypad;
use crate::config::EngineConfig;
use crate::driver::Calculator;

/// Calculator page with simulated user input
#[derive(Debug)]
pub struct WebDriver {
    calculator: Calculator<MockDom>,
    keypad: Keypad,
}

impl Default for WebDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WebDriver {
    /// Creates a page with the standard keypad
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a page with a configured engine
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let keypad = Keypad::new();
        let dom = MockDom::calculator(keypad.to_element());
        Self {
            calculator: Calculator::with_config(config, dom),
            keypad,
        }
    }

    /// Clicks an element. Clicks outside the keypad are recorded and ignored.
    pub fn click(&mut self, element_id: &str) {
        self.calculator
            .sink_mut()
            .dispatch_event(DomEvent::click(element_id));
        if let Some(action) = self.keypad.handle_click(element_id) {
            self.calculator.dispatch(action);
        }
    }

    /// Presses a key on the window
    pub fn key_down(&mut self, key: &str) {
        self.calculator
            .sink_mut()
            .dispatch_event(DomEvent::key_down(key));
        self.calculator.handle_key(key);
    }

    /// Presses each character of `keys` as a separate key
    pub fn type_keys(&mut self, keys: &str) {
        for ch in keys.chars() {
            self.key_down(ch.encode_utf8(&mut [0; 4]));
        }
    }

    /// Forgets recorded events; the display is unaffected
    pub fn clear_events(&mut self) {
        self.calculator.sink_mut().clear_event_history();
    }

    /// Display element text
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.calculator.sink().display_text().unwrap_or_default()
    }

    /// The page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.calculator.sink()
    }

    /// The calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator<MockDom> {
        &self.calculator
    }

    /// The keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }
}
