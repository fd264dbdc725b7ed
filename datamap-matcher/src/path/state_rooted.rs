use rustc_hash::FxHashSet;

use datamap_core::models::Triple;

/// Indices of triples reachable from a state variable: anchored on one, or
/// on the value variable of another state-rooted triple.
pub(super) fn state_rooted(triples: &[Triple], state_variables: &[&str]) -> FxHashSet<usize> {
    let mut reached: FxHashSet<&str> = state_variables.iter().copied().collect();
    let mut rooted: FxHashSet<usize> = FxHashSet::default();

    loop {
        let mut changed = false;
        for (index, triple) in triples.iter().enumerate() {
            if rooted.contains(&index) || !reached.contains(triple.variable.as_str()) {
                continue;
            }
            rooted.insert(index);
            changed = true;
            if triple.value.is_variable() {
                reached.insert(triple.value.as_str());
            }
        }
        if !changed {
            break;
        }
    }
    rooted
}
