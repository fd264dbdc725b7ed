// Single source of truth for all default values.

// --- Matching ---
pub const DEFAULT_SKIP_OPERATOR_PREFERENCES: bool = true;
pub const DEFAULT_NARRATE: bool = false;

// --- Completion ---
pub const DEFAULT_NAME_OPERATOR_SLOTS: bool = true;

// --- Paths ---
pub const DEFAULT_MAX_PATH_LENGTH: usize = 64;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
