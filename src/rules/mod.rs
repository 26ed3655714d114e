//! Game rules.
//!
//! Pure functions over `GameState`:
//! - `movegen`: which moves are legal for a player
//! - `visibility`: what the trackers learn about the fugitive
//! - `outcome`: whether the game is decided and who won
//!
//! None of these mutate state; the turn coordinator in `engine` applies
//! moves and calls into them.

pub mod movegen;
pub mod outcome;
pub mod visibility;

pub use movegen::{legal_moves, single_moves};
pub use outcome::{evaluate, GameResult, VictoryKind};
pub use visibility::{disclosed_location, Visibility};
