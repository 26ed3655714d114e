//! Move representation.
//!
//! Moves form a closed set of three variants:
//! - `TicketMove`: travel one edge, spending one ticket
//! - `DoubleMove`: two ticket moves in one turn (fugitive only)
//! - `PassMove`: a tracker with nowhere to go skips its turn
//!
//! The coordinator dispatches on `Move` with a plain `match`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::location::Location;
use super::player::PlayerColour;
use super::ticket::Ticket;

/// Set of legal moves for one player.
pub type MoveSet = FxHashSet<Move>;

/// A one-edge move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketMove {
    /// The moving player.
    pub colour: PlayerColour,
    /// Ticket spent.
    pub ticket: Ticket,
    /// Node travelled to.
    pub destination: Location,
}

impl TicketMove {
    /// Create a new ticket move.
    #[must_use]
    pub const fn new(colour: PlayerColour, ticket: Ticket, destination: Location) -> Self {
        Self {
            colour,
            ticket,
            destination,
        }
    }
}

/// Two ticket moves taken in a single turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoubleMove {
    /// The moving player (always the fugitive).
    pub colour: PlayerColour,
    /// First leg.
    pub first: TicketMove,
    /// Second leg, starting from `first.destination`.
    pub second: TicketMove,
}

impl DoubleMove {
    /// Create a new double move from two legs.
    #[must_use]
    pub const fn new(colour: PlayerColour, first: TicketMove, second: TicketMove) -> Self {
        Self {
            colour,
            first,
            second,
        }
    }

    /// Where the player ends up.
    #[must_use]
    pub const fn final_destination(&self) -> Location {
        self.second.destination
    }
}

/// A skipped tracker turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PassMove {
    /// The passing player.
    pub colour: PlayerColour,
}

impl PassMove {
    /// Create a new pass move.
    #[must_use]
    pub const fn new(colour: PlayerColour) -> Self {
        Self { colour }
    }
}

/// A complete move.
///
/// ## Example
///
/// ```
/// use rust_yard::core::{Location, Move, PlayerColour, Ticket};
///
/// let taxi = Move::ticket(PlayerColour::Blue, Ticket::Taxi, Location(5));
/// assert_eq!(taxi.colour(), PlayerColour::Blue);
/// assert_eq!(taxi.destination(), Some(Location(5)));
///
/// let pass = Move::pass(PlayerColour::Blue);
/// assert_eq!(pass.destination(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    Ticket(TicketMove),
    Double(DoubleMove),
    Pass(PassMove),
}

impl Move {
    /// Shorthand for a `Move::Ticket`.
    #[must_use]
    pub const fn ticket(colour: PlayerColour, ticket: Ticket, destination: Location) -> Self {
        Move::Ticket(TicketMove::new(colour, ticket, destination))
    }

    /// Shorthand for a `Move::Double`.
    #[must_use]
    pub const fn double(colour: PlayerColour, first: TicketMove, second: TicketMove) -> Self {
        Move::Double(DoubleMove::new(colour, first, second))
    }

    /// Shorthand for a `Move::Pass`.
    #[must_use]
    pub const fn pass(colour: PlayerColour) -> Self {
        Move::Pass(PassMove::new(colour))
    }

    /// The player making this move.
    #[must_use]
    pub const fn colour(&self) -> PlayerColour {
        match self {
            Move::Ticket(m) => m.colour,
            Move::Double(m) => m.colour,
            Move::Pass(m) => m.colour,
        }
    }

    /// Final destination, or `None` for a pass.
    #[must_use]
    pub const fn destination(&self) -> Option<Location> {
        match self {
            Move::Ticket(m) => Some(m.destination),
            Move::Double(m) => Some(m.final_destination()),
            Move::Pass(_) => None,
        }
    }

    /// Tickets this move spends, in spending order.
    ///
    /// A double move spends its `Double` ticket before either leg.
    #[must_use]
    pub fn tickets(&self) -> Vec<Ticket> {
        match self {
            Move::Ticket(m) => vec![m.ticket],
            Move::Double(m) => vec![Ticket::Double, m.first.ticket, m.second.ticket],
            Move::Pass(_) => Vec::new(),
        }
    }

    /// Check if this is a double move.
    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Move::Double(_))
    }

    /// Check if this is a pass.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Move::Pass(_))
    }
}

impl From<TicketMove> for Move {
    fn from(m: TicketMove) -> Self {
        Move::Ticket(m)
    }
}

impl From<DoubleMove> for Move {
    fn from(m: DoubleMove) -> Self {
        Move::Double(m)
    }
}

impl From<PassMove> for Move {
    fn from(m: PassMove) -> Self {
        Move::Pass(m)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Ticket(m) => write!(f, "{} {} -> {}", m.colour, m.ticket, m.destination),
            Move::Double(m) => write!(
                f,
                "{} Double {} -> {}, {} -> {}",
                m.colour, m.first.ticket, m.first.destination, m.second.ticket, m.second.destination
            ),
            Move::Pass(m) => write!(f, "{} Pass", m.colour),
        }
    }
}

/// A move recorded in the game log.
///
/// Records hold the true move, so the log itself is secret information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move applied.
    pub mv: Move,

    /// Round counter after the move was applied.
    pub round: u32,

    /// Sequence number across the whole game (for ordering).
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(mv: Move, round: u32, sequence: u32) -> Self {
        Self { mv, round, sequence }
    }
}
