//! Win conditions.
//!
//! Checked in a fixed order; the first condition that holds decides the game:
//!
//! 1. Capture: a tracker stands on the fugitive's true location
//! 2. Cornered: the fugitive is to move and has no legal move
//! 3. Evasion: every round has been played and the turn is back with the fugitive
//! 4. Stalemate: no tracker holds a Taxi, Bus or Underground ticket
//!
//! Capture and cornered hand the game to every tracker; evasion and
//! stalemate to the fugitive.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::movegen::legal_moves;
use crate::board::Board;
use crate::core::{GameState, PlayerColour};

/// Which condition ended the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryKind {
    Capture,
    Cornered,
    Evasion,
    Stalemate,
}

impl VictoryKind {
    /// True if this condition is won by the trackers.
    #[must_use]
    pub const fn trackers_win(self) -> bool {
        matches!(self, VictoryKind::Capture | VictoryKind::Cornered)
    }
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Condition that ended the game.
    pub kind: VictoryKind,
    /// Winning colours. Never empty.
    pub winners: BTreeSet<PlayerColour>,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, colour: PlayerColour) -> bool {
        self.winners.contains(&colour)
    }

    /// True if the fugitive won.
    #[must_use]
    pub fn fugitive_won(&self) -> bool {
        !self.kind.trackers_win()
    }
}

/// Check whether the game in `state` is decided.
///
/// Pure and idempotent: returns `None` while the game continues.
pub fn evaluate(board: &dyn Board, state: &GameState) -> Option<GameResult> {
    let kind = if is_captured(state) {
        VictoryKind::Capture
    } else if is_cornered(board, state) {
        VictoryKind::Cornered
    } else if has_evaded(state) {
        VictoryKind::Evasion
    } else if trackers_stuck(state) {
        VictoryKind::Stalemate
    } else {
        return None;
    };

    let winners = if kind.trackers_win() {
        state.trackers().map(|p| p.colour).collect()
    } else {
        std::iter::once(state.fugitive().colour).collect()
    };

    Some(GameResult { kind, winners })
}

fn is_captured(state: &GameState) -> bool {
    state.is_occupied(state.fugitive().location)
}

fn is_cornered(board: &dyn Board, state: &GameState) -> bool {
    let fugitive = state.fugitive().colour;
    state.current_player() == fugitive && legal_moves(board, state, fugitive).is_empty()
}

fn has_evaded(state: &GameState) -> bool {
    state.round() >= state.schedule().len() && state.current_player().is_fugitive()
}

fn trackers_stuck(state: &GameState) -> bool {
    state.trackers().all(|p| p.tickets.is_out_of_movement())
}
