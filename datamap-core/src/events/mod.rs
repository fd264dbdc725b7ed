//! Narration channel between the matcher/completer and their host.

pub mod collector;
pub mod handler;
pub mod tracing_handler;
pub mod types;

pub use collector::CollectingHandler;
pub use handler::{DatamapEventHandler, NoopHandler};
pub use tracing_handler::TracingHandler;
pub use types::DatamapEvent;
