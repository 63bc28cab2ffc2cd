//! Action dispatch - one engine, one display
//!
//! Front ends differ only in where the display text goes. They implement
//! [`DisplaySink`] and hand raw input to a [`Calculator`], which owns the
//! engine and pushes the display after every action.

use tracing::trace;

use crate::config::EngineConfig;
use crate::core::ExpressionEngine;
use crate::input::Action;

/// Receiver for display text
pub trait DisplaySink {
    /// Shows `text` (an expression, the placeholder, or the error indicator)
    fn show(&mut self, text: &str);
}

impl DisplaySink for String {
    fn show(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Records every display update, oldest first
impl DisplaySink for Vec<String> {
    fn show(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Engine plus the sink it reports to
#[derive(Debug)]
pub struct Calculator<S: DisplaySink> {
    engine: ExpressionEngine,
    sink: S,
}

impl<S: DisplaySink> Calculator<S> {
    /// Creates a calculator and shows the initial placeholder
    pub fn new(sink: S) -> Self {
        Self::with_engine(ExpressionEngine::new(), sink)
    }

    /// Creates a calculator with a configured engine
    pub fn with_config(config: EngineConfig, sink: S) -> Self {
        Self::with_engine(ExpressionEngine::with_config(config), sink)
    }

    /// Wraps an existing engine and shows its current display
    pub fn with_engine(engine: ExpressionEngine, mut sink: S) -> Self {
        sink.show(engine.display());
        Self { engine, sink }
    }

    /// Applies an action and pushes the resulting display to the sink
    pub fn dispatch(&mut self, action: Action) -> &str {
        trace!(?action, "dispatch");
        let display = action.apply(&mut self.engine);
        self.sink.show(display);
        display
    }

    /// Translates a keyboard key and dispatches it.
    ///
    /// Returns `None` (and leaves the display alone) for unmapped keys.
    pub fn handle_key(&mut self, key: &str) -> Option<&str> {
        let Some(action) = Action::from_key(key) else {
            trace!(key, "unmapped key");
            return None;
        };
        Some(self.dispatch(action))
    }

    /// Dispatches a `data-action` / `data-value` pair
    pub fn handle_parts(&mut self, kind: &str, value: Option<&str>) -> Option<&str> {
        let action = Action::from_parts(kind, value)?;
        Some(self.dispatch(action))
    }

    /// The engine
    #[must_use]
    pub fn engine(&self) -> &ExpressionEngine {
        &self.engine
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// The sink
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the calculator, returning its sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}
