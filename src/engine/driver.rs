//! Turn loop: drives a `Game` by asking seated choosers for moves.
//!
//! One call to `start_rotation` plays the fugitive's move and then every
//! tracker in turn, stopping when the turn is back with the fugitive or the
//! game ends. `play_to_end` repeats rotations until a result exists.

use rustc_hash::FxHashMap;

use super::chooser::MoveChooser;
use super::game::{Game, Progress};
use crate::core::PlayerColour;
use crate::error::ProtocolError;
use crate::rules::GameResult;

/// Seats one chooser per colour and runs rotations.
#[derive(Default)]
pub struct TurnLoop {
    seats: FxHashMap<PlayerColour, Box<dyn MoveChooser>>,
}

impl TurnLoop {
    /// Create a loop with no seats.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a chooser for a colour, replacing any previous one.
    #[must_use]
    pub fn seat(mut self, colour: PlayerColour, chooser: impl MoveChooser + 'static) -> Self {
        self.seats.insert(colour, Box::new(chooser));
        self
    }

    /// Check if a colour has a chooser.
    #[must_use]
    pub fn is_seated(&self, colour: PlayerColour) -> bool {
        self.seats.contains_key(&colour)
    }

    /// Play one rotation.
    ///
    /// Returns `RotationComplete` when every tracker has moved, or
    /// `GameOver` as soon as a move decides the game. Fails if the game is
    /// already over, a player to move has no chooser, or a chooser answers
    /// with an illegal move.
    pub fn start_rotation(&mut self, game: &mut Game) -> Result<Progress, ProtocolError> {
        loop {
            let request = game.move_request()?;
            let chooser = self
                .seats
                .get_mut(&request.colour)
                .ok_or(ProtocolError::UnseatedPlayer(request.colour))?;

            let mv = chooser.choose_move(game, &request);
            match game.accept(mv)? {
                Progress::Awaiting(_) => continue,
                done => return Ok(done),
            }
        }
    }

    /// Run rotations until the game is decided.
    pub fn play_to_end(&mut self, game: &mut Game) -> Result<GameResult, ProtocolError> {
        if let Some(result) = game.result() {
            return Ok(result.clone());
        }
        let mut rotations = 0u32;
        loop {
            rotations += 1;
            if let Progress::GameOver(result) = self.start_rotation(game)? {
                tracing::debug!(rotations, kind = ?result.kind, "turn loop finished");
                return Ok(result);
            }
        }
    }
}

impl std::fmt::Debug for TurnLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut seated: Vec<_> = self.seats.keys().copied().collect();
        seated.sort_unstable();
        f.debug_struct("TurnLoop").field("seated", &seated).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TransportGraph;
    use crate::core::{Location, Move, PlayerConfig, RoundSchedule, Ticket, Transport};
    use crate::engine::{FirstMoveChooser, MoveRequest, RandomChooser};

    const BLACK: PlayerColour = PlayerColour::Black;
    const BLUE: PlayerColour = PlayerColour::Blue;
    const RED: PlayerColour = PlayerColour::Red;

    fn tracker(colour: PlayerColour, at: u32) -> PlayerConfig {
        PlayerConfig::new(colour, Location(at))
            .with_ticket(Ticket::Taxi, 10)
            .with_ticket(Ticket::Bus, 0)
            .with_ticket(Ticket::Underground, 0)
    }

    fn game(rounds: usize) -> Game {
        Game::new(
            RoundSchedule::new(vec![false; rounds]),
            TransportGraph::cycle(10, Transport::Taxi),
            PlayerConfig::classic_fugitive(Location(1)),
            vec![tracker(BLUE, 4), tracker(RED, 7)],
        )
        .unwrap()
    }

    fn seated_loop(seed: u64) -> TurnLoop {
        TurnLoop::new()
            .seat(BLACK, RandomChooser::new(seed))
            .seat(BLUE, RandomChooser::new(seed + 1))
            .seat(RED, RandomChooser::new(seed + 2))
    }

    #[test]
    fn test_rotation_moves_everyone_once() {
        let mut game = game(10);
        let mut turns = seated_loop(1);

        let progress = turns.start_rotation(&mut game).unwrap();

        if progress == Progress::RotationComplete {
            assert_eq!(game.current_player(), BLACK);
            assert_eq!(game.state().history().len(), 3);
        }
        assert!(game.current_round() >= 1);
    }

    #[test]
    fn test_unseated_player() {
        let mut game = game(10);
        let mut turns = TurnLoop::new().seat(BLACK, FirstMoveChooser);

        let err = turns.start_rotation(&mut game).unwrap_err();
        assert_eq!(err, ProtocolError::UnseatedPlayer(BLUE));
        // The fugitive's move stands.
        assert_eq!(game.current_player(), BLUE);
    }

    #[test]
    fn test_illegal_answer_is_reported() {
        let mut game = game(10);
        let mut turns = TurnLoop::new().seat(BLACK, |_: &Game, req: &MoveRequest| {
            Move::ticket(req.colour, Ticket::Taxi, Location(5))
        });

        let err = turns.start_rotation(&mut game).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidMove { colour: BLACK, .. }));
        assert_eq!(game.current_round(), 0);
    }

    #[test]
    fn test_play_to_end_reaches_result() {
        for seed in 0..10 {
            let mut game = game(6);
            let result = seated_loop(seed).play_to_end(&mut game).unwrap();

            assert!(game.is_game_over());
            assert_eq!(game.result(), Some(&result));
            assert!(!result.winners.is_empty());
        }
    }

    #[test]
    fn test_play_to_end_is_reproducible() {
        let mut a = game(8);
        let mut b = game(8);

        let ra = seated_loop(3).play_to_end(&mut a).unwrap();
        let rb = seated_loop(3).play_to_end(&mut b).unwrap();

        assert_eq!(ra, rb);
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_rotation_after_game_over() {
        let mut game = game(2);
        let mut turns = seated_loop(5);
        turns.play_to_end(&mut game).unwrap();

        assert_eq!(turns.start_rotation(&mut game), Err(ProtocolError::GameOver));
        assert!(turns.play_to_end(&mut game).is_ok());
    }

    #[test]
    fn test_seat_replaces() {
        let turns = TurnLoop::new()
            .seat(BLACK, FirstMoveChooser)
            .seat(BLACK, RandomChooser::new(0));
        assert!(turns.is_seated(BLACK));
        assert!(!turns.is_seated(BLUE));
        assert_eq!(format!("{:?}", turns), "TurnLoop { seated: [Black] }");
    }
}
