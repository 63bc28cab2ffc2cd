//! Calculator keypad layout
//!
//! ```text
//! [ C ] [ ⌫ ] [ ( ] [ ) ]
//! [ 7 ] [ 8 ] [ 9 ] [ ÷ ]
//! [ 4 ] [ 5 ] [ 6 ] [ × ]
//! [ 1 ] [ 2 ] [ 3 ] [ − ]
//! [ 0 ] [ . ] [ = ] [ + ]
//! ```
//!
//! Buttons carry `data-action` and `data-value` attributes so a click
//! handler can rebuild the [`Action`] from the element alone.

use super::dom::{DomElement, KEYS_ID};
use crate::core::Operator;
use crate::input::Action;

/// One keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Action performed on click
    pub action: Action,
    /// DOM element ID
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button; the element ID is derived from the action
    #[must_use]
    pub fn new(action: Action, row: usize, col: usize) -> Self {
        Self {
            action,
            id: button_id(action),
            row,
            col,
        }
    }

    /// Builds the button element
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        let mut elem = DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.action.label())
            .with_class("key")
            .with_attr("data-action", self.action.kind());
        if let Some(value) = self.action.value() {
            elem = elem.with_attr("data-value", &value.to_string());
        }
        if matches!(self.action, Action::Operator(_)) {
            elem = elem.with_class("key-operator");
        }
        elem
    }
}

fn button_id(action: Action) -> String {
    match action {
        Action::Digit('.') => "btn-decimal".to_string(),
        Action::Digit(d) => format!("btn-{d}"),
        Action::Operator(symbol) => match Operator::from_symbol(symbol) {
            Some(Operator::Add) => "btn-plus".to_string(),
            Some(Operator::Subtract) => "btn-minus".to_string(),
            Some(Operator::Multiply) => "btn-times".to_string(),
            Some(Operator::Divide) => "btn-divide".to_string(),
            None => "btn-op".to_string(),
        },
        Action::Equals => "btn-equals".to_string(),
        Action::Clear => "btn-clear".to_string(),
        Action::Backspace => "btn-backspace".to_string(),
        Action::Paren('(') => "btn-open-paren".to_string(),
        Action::Paren(_) => "btn-close-paren".to_string(),
    }
}

/// Keypad grid
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Standard 5x4 calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let layout = [
            [Action::Clear, Action::Backspace, Action::Paren('('), Action::Paren(')')],
            [
                Action::Digit('7'),
                Action::Digit('8'),
                Action::Digit('9'),
                Action::Operator(Operator::Divide.glyph()),
            ],
            [
                Action::Digit('4'),
                Action::Digit('5'),
                Action::Digit('6'),
                Action::Operator(Operator::Multiply.glyph()),
            ],
            [
                Action::Digit('1'),
                Action::Digit('2'),
                Action::Digit('3'),
                Action::Operator(Operator::Subtract.glyph()),
            ],
            [
                Action::Digit('0'),
                Action::Digit('.'),
                Action::Equals,
                Action::Operator(Operator::Add.glyph()),
            ],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions
                    .iter()
                    .enumerate()
                    .map(move |(col, action)| KeypadButton::new(*action, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: layout.len(),
            cols: 4,
        }
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Button at a grid position
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Action for a clicked element, if it is a keypad button
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Action> {
        self.find_button_by_id(element_id).map(|b| b.action)
    }

    /// Builds the keypad container with all button elements
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        self.buttons.iter().fold(
            DomElement::new("div").with_id(KEYS_ID).with_class("keys"),
            |keys, button| keys.with_child(button.to_element()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 20);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_keypad_default() {
        assert_eq!(Keypad::default().button_count(), 20);
    }

    #[test]
    fn test_get_button_at() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().action, Action::Clear);
        assert_eq!(keypad.get_button_at(1, 0).unwrap().action, Action::Digit('7'));
        assert_eq!(
            keypad.get_button_at(2, 3).unwrap().action,
            Action::Operator('×')
        );
        assert_eq!(keypad.get_button_at(4, 2).unwrap().action, Action::Equals);
    }

    #[test]
    fn test_get_button_at_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_button_positions_match_grid() {
        let keypad = Keypad::new();
        for button in keypad.buttons() {
            let at = keypad.get_button_at(button.row, button.col).unwrap();
            assert_eq!(at, button);
        }
    }

    #[test]
    fn test_button_ids() {
        let ids: Vec<_> = Keypad::new().buttons().iter().map(|b| b.id.clone()).collect();
        for expected in [
            "btn-clear",
            "btn-backspace",
            "btn-open-paren",
            "btn-close-paren",
            "btn-divide",
            "btn-times",
            "btn-minus",
            "btn-plus",
            "btn-decimal",
            "btn-equals",
            "btn-0",
            "btn-9",
        ] {
            assert!(ids.iter().any(|id| id == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_button_ids_unique() {
        let keypad = Keypad::new();
        let mut ids: Vec<_> = keypad.buttons().iter().map(|b| b.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), keypad.button_count());
    }

    #[test]
    fn test_button_id_unknown_operator() {
        assert_eq!(button_id(Action::Operator('%')), "btn-op");
    }

    #[test]
    fn test_handle_click() {
        let keypad = Keypad::new();
        assert_eq!(keypad.handle_click("btn-5"), Some(Action::Digit('5')));
        assert_eq!(keypad.handle_click("btn-divide"), Some(Action::Operator('÷')));
        assert_eq!(keypad.handle_click("display"), None);
    }

    #[test]
    fn test_button_element_attributes() {
        let keypad = Keypad::new();
        let minus = keypad.find_button_by_id("btn-minus").unwrap().to_element();
        assert_eq!(minus.text_content, "−");
        assert_eq!(minus.get_attr("data-action"), Some("operator"));
        assert_eq!(minus.get_attr("data-value"), Some("−"));
        assert!(minus.has_class("key-operator"));

        let equals = keypad.find_button_by_id("btn-equals").unwrap().to_element();
        assert_eq!(equals.get_attr("data-action"), Some("equals"));
        assert_eq!(equals.get_attr("data-value"), None);
        assert!(!equals.has_class("key-operator"));
    }

    #[test]
    fn test_button_attributes_rebuild_action() {
        for button in Keypad::new().buttons() {
            let elem = button.to_element();
            let action = Action::from_parts(
                elem.get_attr("data-action").unwrap(),
                elem.get_attr("data-value"),
            );
            assert_eq!(action, Some(button.action), "{}", button.id);
        }
    }

    #[test]
    fn test_keypad_element() {
        let keys = Keypad::new().to_element();
        assert_eq!(keys.id, KEYS_ID);
        assert_eq!(keys.children.len(), 20);
    }
}
