//! Turn coordination.
//!
//! - `game`: the `Game` coordinator and its request/response protocol
//! - `spectator`: synchronous observers
//! - `chooser`: decision makers that answer move requests
//! - `driver`: `TurnLoop`, which pairs the two and runs rotations

pub mod chooser;
pub mod driver;
pub mod game;
pub mod spectator;

pub use chooser::{sorted_moves, FirstMoveChooser, MoveChooser, RandomChooser};
pub use driver::TurnLoop;
pub use game::{Game, MoveRequest, Phase, Progress};
pub use spectator::{Spectator, SpectatorList};
