//! Configuration for the datamap checker.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod completion_config;
pub mod datamap_config;
pub mod defaults;
pub mod matching_config;
pub mod observability_config;
pub mod path_config;

pub use completion_config::CompletionConfig;
pub use datamap_config::DatamapConfig;
pub use matching_config::MatchingConfig;
pub use observability_config::ObservabilityConfig;
pub use path_config::PathConfig;
