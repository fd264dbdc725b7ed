/// Datamap checker version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Attribute under which operators hang off a state.
pub const OPERATOR_ATTRIBUTE: &str = "operator";

/// Attribute naming an operator (or a substate).
pub const NAME_ATTRIBUTE: &str = "name";

/// Opening delimiter of a rule variable, as in `<s>`.
pub const VARIABLE_OPEN: char = '<';

/// Closing delimiter of a rule variable.
pub const VARIABLE_CLOSE: char = '>';
