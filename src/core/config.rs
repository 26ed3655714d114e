//! Player configuration and construction-time validation.
//!
//! Games are configured with one `PlayerConfig` for the fugitive and one
//! per tracker. `validate` checks the whole configuration before any game
//! state exists, so construction either yields a valid game or fails.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::location::Location;
use super::player::{PlayerColour, PlayerState};
use super::schedule::RoundSchedule;
use super::ticket::{Ticket, Tickets};
use crate::board::Board;
use crate::error::ConfigError;

/// Maximum number of trackers.
pub const MAX_TRACKERS: usize = 5;

/// Starting configuration for one player.
///
/// Ticket entries are explicit: a missing entry is different from a zero
/// count, and validation rejects a fugitive without all five kinds.
///
/// ```
/// use rust_yard::core::{Location, PlayerColour, PlayerConfig, Ticket};
///
/// let tracker = PlayerConfig::new(PlayerColour::Red, Location(13))
///     .with_ticket(Ticket::Taxi, 11)
///     .with_ticket(Ticket::Bus, 8)
///     .with_ticket(Ticket::Underground, 4);
///
/// assert_eq!(tracker.ticket_count(Ticket::Bus), Some(8));
/// assert_eq!(tracker.ticket_count(Ticket::Secret), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Player colour.
    pub colour: PlayerColour,

    /// Starting location.
    pub location: Location,

    /// Starting tickets by kind.
    pub tickets: FxHashMap<Ticket, u32>,
}

impl PlayerConfig {
    /// Create a configuration with no ticket entries.
    pub fn new(colour: PlayerColour, location: Location) -> Self {
        Self {
            colour,
            location,
            tickets: FxHashMap::default(),
        }
    }

    /// Set a ticket count (builder pattern).
    #[must_use]
    pub fn with_ticket(mut self, ticket: Ticket, count: u32) -> Self {
        self.tickets.insert(ticket, count);
        self
    }

    /// Fugitive with the classic allotment: 4 Taxi, 3 Bus, 3 Underground,
    /// 2 Double, 5 Secret.
    pub fn classic_fugitive(location: Location) -> Self {
        Self::new(PlayerColour::FUGITIVE, location)
            .with_ticket(Ticket::Taxi, 4)
            .with_ticket(Ticket::Bus, 3)
            .with_ticket(Ticket::Underground, 3)
            .with_ticket(Ticket::Double, 2)
            .with_ticket(Ticket::Secret, 5)
    }

    /// Tracker with the classic allotment: 11 Taxi, 8 Bus, 4 Underground.
    pub fn classic_tracker(colour: PlayerColour, location: Location) -> Self {
        Self::new(colour, location)
            .with_ticket(Ticket::Taxi, 11)
            .with_ticket(Ticket::Bus, 8)
            .with_ticket(Ticket::Underground, 4)
            .with_ticket(Ticket::Secret, 0)
            .with_ticket(Ticket::Double, 0)
    }

    /// Get the configured count for a ticket kind, if present.
    #[must_use]
    pub fn ticket_count(&self, ticket: Ticket) -> Option<u32> {
        self.tickets.get(&ticket).copied()
    }

    /// Dense inventory (missing entries count as zero).
    #[must_use]
    pub fn inventory(&self) -> Tickets {
        self.tickets
            .iter()
            .fold(Tickets::new(), |acc, (&ticket, &count)| acc.with(ticket, count))
    }

    /// Convert into the initial player state.
    #[must_use]
    pub fn to_state(&self) -> PlayerState {
        PlayerState::new(self.colour, self.location, self.inventory())
    }
}

/// Validate a complete game configuration.
///
/// Checks run in a fixed order, so the first violated rule is reported:
/// schedule, board, fugitive colour, tracker count, locations, colours,
/// board membership, tickets, ticket totals.
///
/// Spent tracker tickets flow to the fugitive, so each movement kind's
/// total over all players must fit in a `u32`.
pub fn validate(
    schedule: &RoundSchedule,
    board: &dyn Board,
    fugitive: &PlayerConfig,
    trackers: &[PlayerConfig],
) -> Result<(), ConfigError> {
    if schedule.is_empty() {
        return Err(ConfigError::EmptySchedule);
    }
    if board.is_empty() {
        return Err(ConfigError::EmptyBoard);
    }
    if !fugitive.colour.is_fugitive() {
        return Err(ConfigError::FugitiveColour(fugitive.colour));
    }
    if trackers.is_empty() {
        return Err(ConfigError::NoTrackers);
    }
    if trackers.len() > MAX_TRACKERS {
        return Err(ConfigError::TooManyTrackers(trackers.len()));
    }

    let all = || std::iter::once(fugitive).chain(trackers.iter());

    let mut locations = FxHashSet::default();
    for config in all() {
        if !locations.insert(config.location) {
            return Err(ConfigError::DuplicateLocation(config.location));
        }
    }

    let mut colours = FxHashSet::default();
    for config in all() {
        if !colours.insert(config.colour) {
            return Err(ConfigError::DuplicateColour(config.colour));
        }
    }

    for config in all() {
        if !board.contains(config.location) {
            return Err(ConfigError::UnknownLocation {
                colour: config.colour,
                location: config.location,
            });
        }
    }

    for ticket in Ticket::ALL {
        if fugitive.ticket_count(ticket).is_none() {
            return Err(ConfigError::MissingTicket {
                colour: fugitive.colour,
                ticket,
            });
        }
    }

    for tracker in trackers {
        for ticket in Ticket::MOVEMENT {
            if tracker.ticket_count(ticket).is_none() {
                return Err(ConfigError::MissingTicket {
                    colour: tracker.colour,
                    ticket,
                });
            }
        }
        for ticket in [Ticket::Secret, Ticket::Double] {
            match tracker.ticket_count(ticket) {
                Some(count) if count > 0 => {
                    return Err(ConfigError::ForbiddenTicket {
                        colour: tracker.colour,
                        ticket,
                        count,
                    });
                }
                _ => {}
            }
        }
    }

    for ticket in Ticket::MOVEMENT {
        let total = all().try_fold(0u32, |acc, config| {
            acc.checked_add(config.ticket_count(ticket).unwrap_or(0))
        });
        if total.is_none() {
            return Err(ConfigError::TicketOverflow { ticket });
        }
    }

    tracing::debug!(
        rounds = schedule.len(),
        nodes = board.node_count(),
        trackers = trackers.len(),
        "game configuration validated"
    );
    Ok(())
}
