//! # rust-yard
//!
//! Rules engine for a hidden-movement pursuit game on a transport graph.
//!
//! One fugitive moves in secret, spending transport tickets; up to five
//! trackers move openly and try to land on the fugitive's node. The
//! fugitive's location is only disclosed on scheduled reveal rounds.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: `engine::Game` is the only code that mutates
//!    `GameState`. Rules are pure functions over it.
//!
//! 2. **Request/Response**: the engine never calls out to players. It hands
//!    out a `MoveRequest` and validates whatever comes back; `TurnLoop` is
//!    one driver built on top.
//!
//! 3. **Board Agnostic**: the engine only sees the `Board` trait.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: the roster and occupancy index use
//!   `im-rs`, so `Game::fork` is cheap enough for lookahead.
//!
//! - **Redacted Observation**: spectators receive fugitive moves with the
//!   destination replaced by the disclosed location on hidden rounds.
//!
//! ## Modules
//!
//! - `core`: Locations, players, tickets, moves, schedule, state, configuration, RNG
//! - `board`: The `Board` trait and an adjacency-list graph
//! - `rules`: Move generation, visibility, win conditions
//! - `engine`: Turn coordinator, spectators, move choosers, turn loop
//! - `games`: Ready-made setups (classic)
//! - `error`: Configuration, protocol and snapshot errors

pub mod board;
pub mod core;
pub mod engine;
pub mod error;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    DoubleMove, GameRng, GameState, Location, Move, MoveRecord, MoveSet, PassMove,
    PlayerColour, PlayerConfig, PlayerState, RoundSchedule, Ticket, TicketMove, Tickets,
    Transport,
};

pub use crate::board::{Board, Edge, TransportGraph};

pub use crate::rules::{evaluate, legal_moves, GameResult, VictoryKind, Visibility};

pub use crate::engine::{
    FirstMoveChooser, Game, MoveChooser, MoveRequest, Phase, Progress, RandomChooser, Spectator,
    TurnLoop,
};

pub use crate::games::ClassicSetup;

pub use crate::error::{ConfigError, Error, ProtocolError, SnapshotError};
