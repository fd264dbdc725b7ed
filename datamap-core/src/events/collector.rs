use super::handler::DatamapEventHandler;
use super::types::DatamapEvent;
use crate::models::Triple;

/// Records every event in arrival order.
#[derive(Debug, Clone, Default)]
pub struct CollectingHandler {
    pub events: Vec<DatamapEvent>,
}

impl CollectingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triples reported through `on_bad_constraint`, in order.
    pub fn bad_constraints(&self) -> Vec<&Triple> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DatamapEvent::BadConstraint { triple } => Some(triple),
                _ => None,
            })
            .collect()
    }

    /// Number of synthesis events.
    pub fn generated_count(&self) -> usize {
        self.events.iter().filter(|e| !e.is_diagnostic()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl DatamapEventHandler for CollectingHandler {
    fn on_bad_constraint(&mut self, triple: &Triple) {
        self.events.push(DatamapEvent::BadConstraint {
            triple: triple.clone(),
        });
    }

    fn on_no_state_variable(&mut self) {
        self.events.push(DatamapEvent::NoStateVariable);
    }

    fn on_too_many_state_variables(&mut self) {
        self.events.push(DatamapEvent::TooManyStateVariables);
    }

    fn on_generated_identifier(&mut self, triple: &Triple, label: &str) {
        self.events.push(DatamapEvent::GeneratedIdentifier {
            triple: triple.clone(),
            label: label.to_string(),
        });
    }

    fn on_generated_integer(&mut self, triple: &Triple, label: &str) {
        self.events.push(DatamapEvent::GeneratedInteger {
            triple: triple.clone(),
            label: label.to_string(),
        });
    }

    fn on_generated_float(&mut self, triple: &Triple, label: &str) {
        self.events.push(DatamapEvent::GeneratedFloat {
            triple: triple.clone(),
            label: label.to_string(),
        });
    }

    fn on_generated_enumeration(&mut self, triple: &Triple, label: &str) {
        self.events.push(DatamapEvent::GeneratedEnumeration {
            triple: triple.clone(),
            label: label.to_string(),
        });
    }

    fn on_generated_add_to_enumeration(&mut self, triple: &Triple, label: &str, value: &str) {
        self.events.push(DatamapEvent::GeneratedAddToEnumeration {
            triple: triple.clone(),
            label: label.to_string(),
            value: value.to_string(),
        });
    }
}
