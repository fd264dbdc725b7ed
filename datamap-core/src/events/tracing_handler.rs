//! Structured log events for every notification.

use super::handler::DatamapEventHandler;
use crate::models::Triple;

/// Forwards each notification to `tracing`: diagnostics at `warn`,
/// synthesis at `info`.
#[derive(Debug, Clone, Default)]
pub struct TracingHandler {
    /// Production the events belong to, attached as a field.
    pub production: Option<String>,
}

impl TracingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_production(name: impl Into<String>) -> Self {
        Self {
            production: Some(name.into()),
        }
    }

    fn production(&self) -> &str {
        self.production.as_deref().unwrap_or("")
    }
}

impl DatamapEventHandler for TracingHandler {
    fn on_bad_constraint(&mut self, triple: &Triple) {
        tracing::warn!(
            event = "bad_constraint",
            production = %self.production(),
            triple = %triple,
            "triple does not match the datamap"
        );
    }

    fn on_no_state_variable(&mut self) {
        tracing::warn!(
            event = "no_state_variable",
            production = %self.production(),
            "production has no state variable"
        );
    }

    fn on_too_many_state_variables(&mut self) {
        tracing::warn!(
            event = "too_many_state_variables",
            production = %self.production(),
            "production has more than one state variable"
        );
    }

    fn on_generated_identifier(&mut self, triple: &Triple, label: &str) {
        tracing::info!(
            event = "generated_identifier",
            production = %self.production(),
            triple = %triple,
            label = %label,
            "added identifier to datamap"
        );
    }

    fn on_generated_integer(&mut self, triple: &Triple, label: &str) {
        tracing::info!(
            event = "generated_integer",
            production = %self.production(),
            triple = %triple,
            label = %label,
            "added integer to datamap"
        );
    }

    fn on_generated_float(&mut self, triple: &Triple, label: &str) {
        tracing::info!(
            event = "generated_float",
            production = %self.production(),
            triple = %triple,
            label = %label,
            "added float to datamap"
        );
    }

    fn on_generated_enumeration(&mut self, triple: &Triple, label: &str) {
        tracing::info!(
            event = "generated_enumeration",
            production = %self.production(),
            triple = %triple,
            label = %label,
            "added enumeration to datamap"
        );
    }

    fn on_generated_add_to_enumeration(&mut self, triple: &Triple, label: &str, value: &str) {
        tracing::info!(
            event = "generated_add_to_enumeration",
            production = %self.production(),
            triple = %triple,
            label = %label,
            value = %value,
            "added value to enumeration"
        );
    }
}
