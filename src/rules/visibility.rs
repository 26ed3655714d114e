//! Visibility tracker: what the trackers know about the fugitive.
//!
//! The fugitive's location becomes public only on reveal rounds. Between
//! reveals every report of a fugitive move carries the last disclosed
//! location instead of the true destination. Ticket kinds are always
//! reported truthfully.

use serde::{Deserialize, Serialize};

use crate::core::{DoubleMove, GameState, Location, RoundSchedule, TicketMove};

/// Tracks the fugitive's disclosed location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Visibility {
    disclosed: Location,
}

impl Default for Visibility {
    fn default() -> Self {
        Self::new()
    }
}

impl Visibility {
    /// Nothing disclosed yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            disclosed: Location::UNREVEALED,
        }
    }

    /// Last location written by a reveal round.
    #[must_use]
    pub const fn disclosed(&self) -> Location {
        self.disclosed
    }

    /// Disclose `true_location` if `round` is a reveal round.
    ///
    /// Called once per fugitive leg with the round number that leg started.
    /// Returns whether a reveal happened.
    pub fn record_reveal(
        &mut self,
        schedule: &RoundSchedule,
        round: u32,
        true_location: Location,
    ) -> bool {
        let reveal = schedule.is_reveal(round);
        if reveal {
            self.disclosed = true_location;
            tracing::info!(round, location = %true_location, "fugitive revealed");
        }
        reveal
    }

    /// Public report of a single fugitive leg, after `record_reveal` ran.
    #[must_use]
    pub const fn observe_ticket(&self, mv: TicketMove) -> TicketMove {
        TicketMove::new(mv.colour, mv.ticket, self.disclosed)
    }

    /// Public report of a double move, computed before either leg is applied.
    ///
    /// The first leg falls on round `current_round + 1`, the second on
    /// `current_round + 2`. A leg on a reveal round reports its true
    /// destination; otherwise it reports the location disclosed before the
    /// double move, except that a hidden second leg after a revealed first
    /// leg reports the first leg's destination.
    #[must_use]
    pub fn observe_double(
        &self,
        schedule: &RoundSchedule,
        current_round: u32,
        mv: &DoubleMove,
    ) -> DoubleMove {
        let first_revealed = schedule.is_reveal(current_round + 1);
        let second_revealed = schedule.is_reveal(current_round + 2);

        let first_location = if first_revealed {
            mv.first.destination
        } else {
            self.disclosed
        };

        let second_location = match (first_revealed, second_revealed) {
            (_, true) => mv.second.destination,
            (true, false) => first_location,
            (false, false) => self.disclosed,
        };

        DoubleMove::new(
            mv.colour,
            TicketMove::new(mv.first.colour, mv.first.ticket, first_location),
            TicketMove::new(mv.second.colour, mv.second.ticket, second_location),
        )
    }
}

/// The fugitive's disclosed location in `state`.
#[must_use]
pub fn disclosed_location(state: &GameState) -> Location {
    state.visibility().disclosed()
}
