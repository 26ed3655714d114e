//! Tickets and transport modes.
//!
//! ## Ticket
//!
//! Every move spends a ticket. `Taxi`, `Bus` and `Underground` match the
//! transport type of the edge travelled. `Secret` can stand in for any edge
//! and hides the mode used. `Double` is not a movement mode; it lets the
//! fugitive chain two ticket moves in one turn.
//!
//! ## Tickets
//!
//! Dense per-kind inventory backed by a fixed array, so lookups never hash
//! and the whole inventory is `Copy`.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Transport type carried by a board edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    /// Boat crossing. Only travellable with a `Secret` ticket.
    Ferry,
}

/// Ticket kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    Secret,
    Double,
}

impl Ticket {
    /// All ticket kinds, in inventory order.
    pub const ALL: [Ticket; 5] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Secret,
        Ticket::Double,
    ];

    /// The ticket kinds that correspond to ordinary transport.
    pub const MOVEMENT: [Ticket; 3] = [Ticket::Taxi, Ticket::Bus, Ticket::Underground];

    /// The ticket required to travel along an edge of the given transport.
    ///
    /// ```
    /// use rust_yard::core::{Ticket, Transport};
    ///
    /// assert_eq!(Ticket::from_transport(Transport::Bus), Ticket::Bus);
    /// assert_eq!(Ticket::from_transport(Transport::Ferry), Ticket::Secret);
    /// ```
    #[must_use]
    pub const fn from_transport(transport: Transport) -> Self {
        match transport {
            Transport::Taxi => Ticket::Taxi,
            Transport::Bus => Ticket::Bus,
            Transport::Underground => Ticket::Underground,
            Transport::Ferry => Ticket::Secret,
        }
    }

    /// Position of this kind in a `Tickets` inventory.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Only the fugitive may hold these.
    #[must_use]
    pub const fn is_fugitive_only(self) -> bool {
        matches!(self, Ticket::Secret | Ticket::Double)
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ticket::Taxi => "Taxi",
            Ticket::Bus => "Bus",
            Ticket::Underground => "Underground",
            Ticket::Secret => "Secret",
            Ticket::Double => "Double",
        };
        f.write_str(name)
    }
}

/// Per-kind ticket counts.
///
/// ```
/// use rust_yard::core::{Ticket, Tickets};
///
/// let mut tickets = Tickets::new().with(Ticket::Taxi, 2);
/// assert!(tickets.has(Ticket::Taxi));
///
/// assert!(tickets.spend(Ticket::Taxi));
/// assert_eq!(tickets[Ticket::Taxi], 1);
///
/// assert!(!tickets.spend(Ticket::Bus)); // none to spend
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tickets {
    counts: [u32; 5],
}

impl Tickets {
    /// Create an empty inventory.
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; 5] }
    }

    /// Set a count (builder pattern).
    #[must_use]
    pub fn with(mut self, ticket: Ticket, count: u32) -> Self {
        self.counts[ticket.index()] = count;
        self
    }

    /// Get the count for a ticket kind.
    #[must_use]
    pub fn count(&self, ticket: Ticket) -> u32 {
        self.counts[ticket.index()]
    }

    /// Check if at least one ticket of this kind is held.
    #[must_use]
    pub fn has(&self, ticket: Ticket) -> bool {
        self.count(ticket) > 0
    }

    /// Add one ticket of this kind.
    ///
    /// Returns `false` and leaves the inventory untouched if the count is
    /// already at `u32::MAX`.
    pub fn add(&mut self, ticket: Ticket) -> bool {
        match self.counts[ticket.index()].checked_add(1) {
            Some(count) => {
                self.counts[ticket.index()] = count;
                true
            }
            None => false,
        }
    }

    /// Remove one ticket of this kind.
    ///
    /// Returns `false` and leaves the inventory untouched if none is held.
    pub fn spend(&mut self, ticket: Ticket) -> bool {
        match self.counts[ticket.index()].checked_sub(1) {
            Some(remaining) => {
                self.counts[ticket.index()] = remaining;
                true
            }
            None => false,
        }
    }

    /// True if no Taxi, Bus or Underground ticket is held.
    #[must_use]
    pub fn is_out_of_movement(&self) -> bool {
        Ticket::MOVEMENT.iter().all(|&t| !self.has(t))
    }

    /// Sum of all counts, saturating at `u32::MAX`.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().fold(0, |acc: u32, &c| acc.saturating_add(c))
    }

    /// Iterate over (kind, count) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Ticket, u32)> + '_ {
        Ticket::ALL.iter().map(move |&t| (t, self.count(t)))
    }
}

impl Index<Ticket> for Tickets {
    type Output = u32;

    fn index(&self, ticket: Ticket) -> &Self::Output {
        &self.counts[ticket.index()]
    }
}

impl IndexMut<Ticket> for Tickets {
    fn index_mut(&mut self, ticket: Ticket) -> &mut Self::Output {
        &mut self.counts[ticket.index()]
    }
}
