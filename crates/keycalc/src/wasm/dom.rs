//! Mock DOM for testing the browser front end without a browser
//!
//! Only the pieces the calculator page uses are modelled: a display
//! element, the keypad container with its buttons, and a log of the
//! click/keydown events dispatched at the page.

use std::collections::HashMap;

use crate::driver::DisplaySink;

/// Element id of the display
pub const DISPLAY_ID: &str = "display";
/// Element id of the keypad container
pub const KEYS_ID: &str = "keys";

/// A DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Attributes
    pub attributes: HashMap<String, String>,
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
    /// Creates an element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the ID
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

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Replaces the text content
    pub fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text_content);
    }

    /// Checks for a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Events the page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// The clicked element's ID
        element_id: String,
    },
    /// Key pressed on the window
    KeyDown {
        /// `KeyboardEvent.key`
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

/// In-memory page
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    /// Elements by ID
    elements: HashMap<String, DomElement>,
    /// Dispatched events, oldest first. Kept until cleared so tests can
    /// assert on the full sequence.
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty page
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Creates the calculator page: a display and a keypad container
    #[must_use]
    pub fn calculator(keys: DomElement) -> Self {
        let mut dom = Self::new();

        let display = DomElement::new("div")
            .with_id(DISPLAY_ID)
            .with_class("display")
            .with_attr("aria-live", "polite")
            .with_text("0");

        for button in &keys.children {
            dom.register_element(button.clone());
        }

        dom.root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator")
            .with_child(display.clone())
            .with_child(keys.clone());

        dom.register_element(display);
        dom.register_element(keys);
        dom
    }

    /// Registers an element for ID lookup; elements without an ID are skipped
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

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Sets element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Dispatched events
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears the event log
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Display element text
    #[must_use]
    pub fn display_text(&self) -> Option<&str> {
        self.get_element_text(DISPLAY_ID)
    }
}

impl DisplaySink for MockDom {
    fn show(&mut self, text: &str) {
        self.set_element_text(DISPLAY_ID, text);
    }
}
