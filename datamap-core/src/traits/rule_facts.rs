use crate::errors::RuleFactsError;
use crate::models::Triple;

/// Read-only view of one production's triples, supplied by an extractor.
///
/// Only `triples` is required; the variable queries derive from it.
pub trait IRuleFacts {
    fn triples(&self) -> &[Triple];

    /// Production name, for diagnostics.
    fn name(&self) -> &str {
        "<anonymous>"
    }

    /// Every distinct variable in any position, in first-seen order.
    fn variables(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for triple in self.triples() {
            let positions = [
                Some(triple.variable.as_str()),
                triple
                    .attribute
                    .is_variable()
                    .then(|| triple.attribute.as_str()),
                triple.value.is_variable().then(|| triple.value.as_str()),
            ];
            for name in positions.into_iter().flatten() {
                if !out.iter().any(|v| v == name) {
                    out.push(name.to_string());
                }
            }
        }
        out
    }

    /// Distinct anchors of state-marked triples, in first-seen order.
    fn state_variables(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for triple in self.triples().iter().filter(|t| t.has_state) {
            if !out.contains(&triple.variable.as_str()) {
                out.push(&triple.variable);
            }
        }
        out
    }

    fn state_variable_count(&self) -> usize {
        self.state_variables().len()
    }

    /// The first state variable. Callers check the count first.
    fn state_variable(&self) -> Option<&str> {
        self.state_variables().into_iter().next()
    }

    /// Reject facts no extractor should produce.
    fn check(&self) -> Result<(), RuleFactsError> {
        for (index, triple) in self.triples().iter().enumerate() {
            if triple.attribute.is_empty() || triple.value.is_empty() {
                return Err(RuleFactsError::EmptyToken {
                    index,
                    triple: triple.to_string(),
                });
            }
            if !crate::models::token::is_variable(&triple.variable) {
                return Err(RuleFactsError::AnchorNotVariable {
                    index,
                    anchor: triple.variable.clone(),
                });
            }
        }
        Ok(())
    }
}
