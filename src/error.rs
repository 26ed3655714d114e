//! Error types.
//!
//! Three classes, all caller-contract violations:
//! - `ConfigError`: the game could not be constructed. Fatal.
//! - `ProtocolError`: the driver or a move chooser misused a running game.
//! - `SnapshotError`: a stored state could not be decoded or is inconsistent.
//!
//! The engine is deterministic and performs no I/O, so there is no
//! transient error class and nothing is retried internally.

use crate::core::{Location, Move, PlayerColour, Ticket};

/// Construction-time validation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("round schedule is empty")]
    EmptySchedule,

    #[error("board has no nodes")]
    EmptyBoard,

    #[error("fugitive must be {expected}, got {0}", expected = PlayerColour::FUGITIVE)]
    FugitiveColour(PlayerColour),

    #[error("at least one tracker is required")]
    NoTrackers,

    #[error("at most 5 trackers are supported, got {0}")]
    TooManyTrackers(usize),

    #[error("two players start at {0}")]
    DuplicateLocation(Location),

    #[error("colour {0} is used by more than one player")]
    DuplicateColour(PlayerColour),

    #[error("{colour} starts at {location}, which is not on the board")]
    UnknownLocation {
        colour: PlayerColour,
        location: Location,
    },

    #[error("{colour} has no entry for {ticket} tickets")]
    MissingTicket { colour: PlayerColour, ticket: Ticket },

    #[error("tracker {colour} holds {count} {ticket} tickets; trackers may hold none")]
    ForbiddenTicket {
        colour: PlayerColour,
        ticket: Ticket,
        count: u32,
    },

    #[error("{ticket} tickets across all players exceed u32::MAX")]
    TicketOverflow { ticket: Ticket },

    #[error("need {needed} distinct start locations, only {available} available")]
    NotEnoughStartLocations { needed: usize, available: usize },
}

/// Runtime misuse of a game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("{attempted} is not a legal move for {colour}")]
    InvalidMove { colour: PlayerColour, attempted: Move },

    #[error("game is over")]
    GameOver,

    #[error("spectator is already registered")]
    SpectatorAlreadyRegistered,

    #[error("spectator is not registered")]
    SpectatorNotRegistered,

    #[error("no move chooser seated for {0}")]
    UnseatedPlayer(PlayerColour),
}

impl ProtocolError {
    /// True if the game can no longer accept moves.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self, ProtocolError::GameOver)
    }
}

/// A snapshot could not be turned back into a game.
///
/// Kept out of `Error`: the codec error is neither `Clone` nor `Eq`.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot codec failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error("snapshot round schedule is empty")]
    EmptySchedule,

    #[error("snapshot roster does not start with the fugitive")]
    FugitiveNotFirst,

    #[error("snapshot roster has {0} trackers, expected 1 to 5")]
    TrackerCount(usize),

    #[error("colour {0} appears more than once in the snapshot roster")]
    DuplicateColour(PlayerColour),

    #[error("player index {current} is out of range for {players} players")]
    CurrentOutOfRange { current: usize, players: usize },

    #[error("round {round} is past the end of a {rounds}-round schedule")]
    RoundOutOfRange { round: u32, rounds: u32 },

    #[error("occupancy index disagrees with tracker locations at {0}")]
    OccupancyMismatch(Location),

    #[error("{colour} stands at {location}, which is not on the board")]
    UnknownLocation {
        colour: PlayerColour,
        location: Location,
    },
}

/// Any engine error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}
