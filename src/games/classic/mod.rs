//! The standard game.
//!
//! Setup only: the board itself is supplied by the caller through the
//! `Board` trait. Start-location defaults match the printed start cards of
//! the standard 199-node board.

mod setup;

pub use setup::{ClassicSetup, FUGITIVE_STARTS, TRACKER_STARTS};
