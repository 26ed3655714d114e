//! Core data model: locations, players, tickets, moves, schedule, state.
//!
//! Everything here is plain data. Rules live in `rules`; the turn
//! coordinator in `engine` is the only writer of `GameState`.

pub mod config;
pub mod location;
pub mod moves;
pub mod player;
pub mod rng;
pub mod schedule;
pub mod state;
pub mod ticket;

pub use config::{validate, PlayerConfig, MAX_TRACKERS};
pub use location::Location;
pub use moves::{DoubleMove, Move, MoveRecord, MoveSet, PassMove, TicketMove};
pub use player::{PlayerColour, PlayerState};
pub use rng::GameRng;
pub use schedule::RoundSchedule;
pub use state::GameState;
pub use ticket::{Ticket, Tickets, Transport};
