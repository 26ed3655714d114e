//! Turn coordinator.
//!
//! `Game` owns the board, the state and the spectator list, and is the only
//! writer of `GameState`. It speaks request/response: `move_request` says
//! who is to move and what is legal, `accept` applies the answer. Choosing
//! a move is someone else's job (see `TurnLoop`).
//!
//! ## Accepting a move
//!
//! 1. Reject if the game is over or the move is not legal right now
//! 2. Apply it (tracker, fugitive single, double or pass)
//! 3. Pass the turn to the next player
//! 4. Re-check the win conditions; announce game over once
//! 5. Announce a completed rotation when the turn is back with the fugitive

use std::collections::BTreeSet;
use std::rc::Rc;

use super::spectator::{Spectator, SpectatorList};
use crate::board::Board;
use crate::core::{
    DoubleMove, GameState, Location, Move, MoveSet, PlayerColour, PlayerConfig, RoundSchedule,
    Ticket, TicketMove,
};
use crate::error::{ConfigError, ProtocolError, SnapshotError};
use crate::rules::{evaluate, legal_moves, GameResult};

/// Coordinator state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player at this roster index.
    AwaitingPlayer(usize),
    /// Terminal. No transition leaves this state.
    GameOver,
}

/// What the coordinator needs next after accepting a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    /// A tracker is to move next; solicit its move.
    Awaiting(PlayerColour),
    /// All trackers have moved; the fugitive opens the next rotation.
    RotationComplete,
    /// The game ended with this move.
    GameOver(GameResult),
}

/// Everything a move chooser needs to answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    /// The player to move.
    pub colour: PlayerColour,
    /// That player's true location (a player always knows where it is).
    pub location: Location,
    /// The legal moves. The answer must be one of these.
    pub moves: MoveSet,
}

/// A running game.
pub struct Game {
    board: Rc<dyn Board>,
    state: GameState,
    spectators: SpectatorList,
}

impl Game {
    /// Validate a configuration and start a game.
    ///
    /// The fugitive moves first, then the trackers in the order given.
    /// A configuration that is already decided (every tracker out of
    /// movement tickets, fugitive cornered) yields a game that is over.
    pub fn new(
        schedule: RoundSchedule,
        board: impl Board + 'static,
        fugitive: PlayerConfig,
        trackers: Vec<PlayerConfig>,
    ) -> Result<Self, ConfigError> {
        Self::with_shared_board(schedule, Rc::new(board), fugitive, trackers)
    }

    /// Like `new`, for a board shared between several games.
    pub fn with_shared_board(
        schedule: RoundSchedule,
        board: Rc<dyn Board>,
        fugitive: PlayerConfig,
        trackers: Vec<PlayerConfig>,
    ) -> Result<Self, ConfigError> {
        let state = GameState::from_config(schedule, board.as_ref(), &fugitive, &trackers)?;

        let mut game = Self {
            board,
            state,
            spectators: SpectatorList::new(),
        };
        if let Some(result) = game.refresh_result() {
            tracing::info!(kind = ?result.kind, "game decided at construction");
        }
        tracing::debug!(players = game.state.player_count(), "game created");
        Ok(game)
    }

    /// Resume a game from a saved state, e.g. one from `GameState::from_bytes`.
    ///
    /// The state must be consistent and every player must stand on `board`.
    /// Spectators are not part of a state and start out empty.
    pub fn from_state(board: Rc<dyn Board>, state: GameState) -> Result<Self, SnapshotError> {
        state.check_consistency()?;
        if let Some(player) = state.players().find(|p| !board.contains(p.location)) {
            return Err(SnapshotError::UnknownLocation {
                colour: player.colour,
                location: player.location,
            });
        }

        let mut game = Self {
            board,
            state,
            spectators: SpectatorList::new(),
        };
        if let Some(result) = game.refresh_result() {
            tracing::info!(kind = ?result.kind, "restored game is decided");
        }
        tracing::debug!(
            round = game.state.round(),
            current = %game.state.current_player(),
            "game restored"
        );
        Ok(game)
    }

    /// Copy of this game without spectators, for lookahead.
    ///
    /// Cheap: the board is shared and the state uses persistent collections.
    #[must_use]
    pub fn fork(&self) -> Self {
        Self {
            board: Rc::clone(&self.board),
            state: self.state.clone(),
            spectators: SpectatorList::new(),
        }
    }

    // === Spectators ===

    /// Register a spectator.
    pub fn register_spectator(&mut self, spectator: Rc<dyn Spectator>) -> Result<(), ProtocolError> {
        self.spectators.register(spectator)
    }

    /// Unregister a spectator.
    pub fn unregister_spectator(&mut self, spectator: &Rc<dyn Spectator>) -> Result<(), ProtocolError> {
        self.spectators.unregister(spectator)
    }

    /// Registered spectators.
    #[must_use]
    pub fn spectators(&self) -> &[Rc<dyn Spectator>] {
        self.spectators.as_slice()
    }

    // === Queries ===

    /// Colour of the player to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerColour {
        self.state.current_player()
    }

    /// Rounds played so far (0 = not started).
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.state.round()
    }

    /// All colours in turn order, fugitive first.
    #[must_use]
    pub fn players(&self) -> Vec<PlayerColour> {
        self.state.players().map(|p| p.colour).collect()
    }

    /// Public location of a player.
    ///
    /// Trackers are reported truthfully. The fugitive is reported at its
    /// disclosed location (`Location::UNREVEALED` before the first reveal).
    /// Unknown colours yield `None`.
    #[must_use]
    pub fn player_location(&self, colour: PlayerColour) -> Option<Location> {
        let player = self.state.player(colour)?;
        if player.is_fugitive() {
            Some(self.state.disclosed_location())
        } else {
            Some(player.location)
        }
    }

    /// Ticket count of a player. Unknown colours yield `None`.
    #[must_use]
    pub fn player_tickets(&self, colour: PlayerColour, ticket: Ticket) -> Option<u32> {
        self.state.player(colour).map(|p| p.tickets[ticket])
    }

    /// The round schedule.
    #[must_use]
    pub fn round_schedule(&self) -> &RoundSchedule {
        self.state.schedule()
    }

    /// Winners; empty until the game is over.
    #[must_use]
    pub fn winning_players(&self) -> BTreeSet<PlayerColour> {
        self.state
            .result()
            .map(|r| r.winners.clone())
            .unwrap_or_default()
    }

    /// The result, once decided.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.state.result()
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    /// Coordinator state.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.state.is_over() {
            Phase::GameOver
        } else {
            Phase::AwaitingPlayer(self.state.current_index())
        }
    }

    /// The board.
    #[must_use]
    pub fn graph(&self) -> &dyn Board {
        self.board.as_ref()
    }

    /// Full state, including the fugitive's true location.
    ///
    /// Meant for drivers and lookahead, not for anything shown to trackers.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Legal moves for any player in the current state.
    #[must_use]
    pub fn legal_moves(&self, colour: PlayerColour) -> MoveSet {
        legal_moves(self.graph(), &self.state, colour)
    }

    /// What the player to move must answer.
    pub fn move_request(&self) -> Result<MoveRequest, ProtocolError> {
        if self.state.is_over() {
            return Err(ProtocolError::GameOver);
        }
        let colour = self.state.current_player();
        let location = self
            .state
            .player(colour)
            .map_or(Location::UNREVEALED, |p| p.location);
        Ok(MoveRequest {
            colour,
            location,
            moves: self.legal_moves(colour),
        })
    }

    // === Turn protocol ===

    /// Apply a move for the current player.
    pub fn accept(&mut self, mv: Move) -> Result<Progress, ProtocolError> {
        if self.state.is_over() {
            tracing::warn!(%mv, "move submitted after game over");
            return Err(ProtocolError::GameOver);
        }

        let colour = self.state.current_player();
        if !self.legal_moves(colour).contains(&mv) {
            tracing::warn!(%colour, %mv, "rejected illegal move");
            return Err(ProtocolError::InvalidMove {
                colour,
                attempted: mv,
            });
        }

        tracing::debug!(%colour, %mv, round = self.state.round(), "accepting move");
        match mv {
            Move::Ticket(m) if colour.is_tracker() => self.apply_tracker_move(m),
            Move::Ticket(m) => self.apply_fugitive_leg(m),
            Move::Double(m) => self.apply_double_move(m),
            Move::Pass(_) => self.notify(|s, g| s.on_move_made(g, &mv)),
        }
        self.state.record(mv);

        self.state.advance_player();

        if let Some(result) = self.refresh_result() {
            tracing::info!(kind = ?result.kind, winners = ?result.winners, "game over");
            self.notify(|s, g| s.on_game_over(g, &result.winners));
            return Ok(Progress::GameOver(result));
        }

        let next = self.state.current_player();
        if next.is_fugitive() {
            self.notify(|s, g| s.on_rotation_complete(g));
            Ok(Progress::RotationComplete)
        } else {
            Ok(Progress::Awaiting(next))
        }
    }

    fn apply_tracker_move(&mut self, m: TicketMove) {
        let fugitive = self.state.fugitive().colour;

        self.state.move_player(m.colour, m.destination);
        let spent = self.state.spend_ticket(m.colour, m.ticket);
        debug_assert!(spent, "legal move spent a ticket that was not held");
        let credited = self.state.credit_ticket(fugitive, m.ticket);
        debug_assert!(credited, "validated ticket totals overflowed");

        self.notify(|s, g| s.on_move_made(g, &Move::Ticket(m)));
    }

    fn apply_fugitive_leg(&mut self, m: TicketMove) {
        self.state.move_player(m.colour, m.destination);
        let round = self.state.advance_round();
        self.state.record_reveal(round, m.destination);
        let spent = self.state.spend_ticket(m.colour, m.ticket);
        debug_assert!(spent, "legal move spent a ticket that was not held");

        tracing::info!(round, "round started");
        let observed = Move::Ticket(self.state.visibility().observe_ticket(m));
        self.notify(|s, g| s.on_round_started(g, round));
        self.notify(|s, g| s.on_move_made(g, &observed));
    }

    fn apply_double_move(&mut self, m: DoubleMove) {
        let spent = self.state.spend_ticket(m.colour, Ticket::Double);
        debug_assert!(spent, "legal double move without a Double ticket");

        let observed = self
            .state
            .visibility()
            .observe_double(self.state.schedule(), self.state.round(), &m);
        self.notify(|s, g| s.on_move_made(g, &Move::Double(observed)));

        self.apply_fugitive_leg(m.first);
        self.apply_fugitive_leg(m.second);
    }

    /// Evaluate the win conditions and cache the first result.
    fn refresh_result(&mut self) -> Option<GameResult> {
        if self.state.is_over() {
            return None;
        }
        let result = evaluate(self.board.as_ref(), &self.state)?;
        self.state.set_result(result.clone());
        Some(result)
    }

    fn notify(&self, event: impl Fn(&dyn Spectator, &Game)) {
        for spectator in self.spectators.as_slice() {
            event(spectator.as_ref(), self);
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("spectators", &self.spectators)
            .finish_non_exhaustive()
    }
}
