//! Board location identifiers.
//!
//! A `Location` is an opaque index into the board's node space. The engine
//! never interprets it beyond equality, hashing and ordering.
//!
//! ## Numbering
//!
//! Boards number their nodes from 1. `Location(0)` is reserved as
//! [`Location::UNREVEALED`], the fugitive's disclosed location before the
//! first reveal round.
//!
//! ```
//! use rust_yard::core::Location;
//!
//! let node = Location::new(42);
//! assert_eq!(node.raw(), 42);
//! assert!(!node.is_unrevealed());
//! assert!(Location::UNREVEALED.is_unrevealed());
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a node on the transport board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location(pub u32);

impl Location {
    /// Disclosed location of a fugitive that has never been revealed.
    pub const UNREVEALED: Location = Location(0);

    /// Create a new location.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw node number.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is the "never revealed" marker.
    #[must_use]
    pub const fn is_unrevealed(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Location {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unrevealed() {
            write!(f, "Node(?)")
        } else {
            write!(f, "Node({})", self.0)
        }
    }
}
