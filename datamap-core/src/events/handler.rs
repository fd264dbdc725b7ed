//! DatamapEventHandler trait, all methods with no-op defaults.

use crate::models::Triple;

/// Receiver for diagnostics and synthesis notifications.
///
/// Handlers only override the events they care about. Nothing a handler
/// does feeds back into matching or completion.
pub trait DatamapEventHandler {
    // ---- Diagnostics ----
    /// No schema edge satisfied the triple.
    fn on_bad_constraint(&mut self, _triple: &Triple) {}
    fn on_no_state_variable(&mut self) {}
    fn on_too_many_state_variables(&mut self) {}

    // ---- Synthesis ----
    fn on_generated_identifier(&mut self, _triple: &Triple, _label: &str) {}
    fn on_generated_integer(&mut self, _triple: &Triple, _label: &str) {}
    fn on_generated_float(&mut self, _triple: &Triple, _label: &str) {}
    fn on_generated_enumeration(&mut self, _triple: &Triple, _label: &str) {}
    fn on_generated_add_to_enumeration(&mut self, _triple: &Triple, _label: &str, _value: &str) {}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHandler;

impl DatamapEventHandler for NoopHandler {}
