//! Player identification and per-player state.
//!
//! ## PlayerColour
//!
//! Players are identified by colour. `Black` is the fugitive; the other
//! five colours are available to trackers.
//!
//! ## PlayerState
//!
//! A player's true location and ticket inventory. Owned by the roster in
//! `GameState` and only mutated when an accepted move is applied.

use serde::{Deserialize, Serialize};

use super::location::Location;
use super::ticket::{Ticket, Tickets};

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerColour {
    Black,
    Blue,
    Green,
    Red,
    White,
    Yellow,
}

impl PlayerColour {
    /// The distinguished fugitive colour.
    pub const FUGITIVE: PlayerColour = PlayerColour::Black;

    /// Colours a tracker may take, in canonical seating order.
    pub const TRACKERS: [PlayerColour; 5] = [
        PlayerColour::Blue,
        PlayerColour::Green,
        PlayerColour::Red,
        PlayerColour::White,
        PlayerColour::Yellow,
    ];

    /// Check if this is the fugitive colour.
    ///
    /// ```
    /// use rust_yard::core::PlayerColour;
    ///
    /// assert!(PlayerColour::Black.is_fugitive());
    /// assert!(PlayerColour::Red.is_tracker());
    /// ```
    #[must_use]
    pub const fn is_fugitive(self) -> bool {
        matches!(self, PlayerColour::Black)
    }

    /// Check if this is a tracker colour.
    #[must_use]
    pub const fn is_tracker(self) -> bool {
        !self.is_fugitive()
    }
}

impl std::fmt::Display for PlayerColour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlayerColour::Black => "Black",
            PlayerColour::Blue => "Blue",
            PlayerColour::Green => "Green",
            PlayerColour::Red => "Red",
            PlayerColour::White => "White",
            PlayerColour::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

/// State of one player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    /// Player colour (fixed for the whole game).
    pub colour: PlayerColour,

    /// True location. For the fugitive this is secret; public queries go
    /// through the visibility tracker instead.
    pub location: Location,

    /// Ticket inventory.
    pub tickets: Tickets,
}

impl PlayerState {
    /// Create a new player state.
    #[must_use]
    pub fn new(colour: PlayerColour, location: Location, tickets: Tickets) -> Self {
        Self {
            colour,
            location,
            tickets,
        }
    }

    /// Check if this player is the fugitive.
    #[must_use]
    pub fn is_fugitive(&self) -> bool {
        self.colour.is_fugitive()
    }

    /// Check if this player is a tracker.
    #[must_use]
    pub fn is_tracker(&self) -> bool {
        self.colour.is_tracker()
    }

    /// Check if at least one ticket of a kind is held.
    #[must_use]
    pub fn has_ticket(&self, ticket: Ticket) -> bool {
        self.tickets.has(ticket)
    }
}
