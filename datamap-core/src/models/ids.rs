//! Identifiers for schema vertices and edges.
//!
//! A `VertexId` wraps its arena slot. An `EdgeId` is issued by the graph
//! and is not a slot. Distinct types keep one from being passed as the
//! other.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Create an ID from a raw index.
            pub fn new(index: usize) -> Self {
                Self(index as u32)
            }

            /// The raw index.
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

define_id!(
    /// Stable identity of a schema vertex, unique within one graph.
    VertexId,
    "v"
);

define_id!(
    /// Identity of a schema edge. Never reused after the edge is removed.
    EdgeId,
    "e"
);
