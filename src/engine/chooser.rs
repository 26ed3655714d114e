//! Move choosers: the external decision makers.
//!
//! A chooser receives a `MoveRequest` and must answer with one of its
//! moves. The engine validates the answer; a chooser that returns anything
//! else makes `accept` fail with `InvalidMove`.
//!
//! Closures implement `MoveChooser`, so a one-off strategy can be seated
//! without a named type.

use super::game::{Game, MoveRequest};
use crate::core::{GameRng, Move};

/// Picks one move from a request.
pub trait MoveChooser {
    /// Choose a move. Must return an element of `request.moves`.
    fn choose_move(&mut self, game: &Game, request: &MoveRequest) -> Move;
}

impl<F> MoveChooser for F
where
    F: FnMut(&Game, &MoveRequest) -> Move,
{
    fn choose_move(&mut self, game: &Game, request: &MoveRequest) -> Move {
        self(game, request)
    }
}

/// Legal moves of a request in a stable order.
///
/// Set iteration order is an implementation detail; sorting makes seeded
/// choosers reproducible.
#[must_use]
pub fn sorted_moves(request: &MoveRequest) -> Vec<Move> {
    let mut moves: Vec<_> = request.moves.iter().copied().collect();
    moves.sort_unstable();
    moves
}

/// Always picks the smallest move in `Ord` order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMoveChooser;

impl MoveChooser for FirstMoveChooser {
    fn choose_move(&mut self, _game: &Game, request: &MoveRequest) -> Move {
        request
            .moves
            .iter()
            .min()
            .copied()
            .unwrap_or(Move::pass(request.colour))
    }
}

/// Picks uniformly at random, reproducibly from a seed.
#[derive(Clone, Debug)]
pub struct RandomChooser {
    rng: GameRng,
}

impl RandomChooser {
    /// Create a chooser with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MoveChooser for RandomChooser {
    fn choose_move(&mut self, _game: &Game, request: &MoveRequest) -> Move {
        let moves = sorted_moves(request);
        self.rng
            .choose(&moves)
            .copied()
            .unwrap_or(Move::pass(request.colour))
    }
}
