//! Browser front end
//!
//! The mock DOM, keypad and page driver are plain Rust and always
//! compiled, so the page behaviour is testable without a browser. The real
//! `wasm-bindgen` bindings sit behind the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom, DISPLAY_ID, KEYS_ID};
pub use driver::WebDriver;
pub use keypad::{Keypad, KeypadButton};
