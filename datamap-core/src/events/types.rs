//! Owned event values, as recorded by `CollectingHandler`.

use serde::{Deserialize, Serialize};

use crate::models::Triple;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DatamapEvent {
    BadConstraint {
        triple: Triple,
    },
    NoStateVariable,
    TooManyStateVariables,
    GeneratedIdentifier {
        triple: Triple,
        label: String,
    },
    GeneratedInteger {
        triple: Triple,
        label: String,
    },
    GeneratedFloat {
        triple: Triple,
        label: String,
    },
    GeneratedEnumeration {
        triple: Triple,
        label: String,
    },
    GeneratedAddToEnumeration {
        triple: Triple,
        label: String,
        value: String,
    },
}

impl DatamapEvent {
    /// Diagnostic (as opposed to synthesis) events.
    pub fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            DatamapEvent::BadConstraint { .. }
                | DatamapEvent::NoStateVariable
                | DatamapEvent::TooManyStateVariables
        )
    }

    pub fn triple(&self) -> Option<&Triple> {
        match self {
            DatamapEvent::BadConstraint { triple }
            | DatamapEvent::GeneratedIdentifier { triple, .. }
            | DatamapEvent::GeneratedInteger { triple, .. }
            | DatamapEvent::GeneratedFloat { triple, .. }
            | DatamapEvent::GeneratedEnumeration { triple, .. }
            | DatamapEvent::GeneratedAddToEnumeration { triple, .. } => Some(triple),
            DatamapEvent::NoStateVariable | DatamapEvent::TooManyStateVariables => None,
        }
    }
}
