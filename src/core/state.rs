//! Game state.
//!
//! ## GameState
//!
//! Everything that changes during a game:
//! - Roster (fugitive first; roster order is turn order)
//! - Tracker occupancy index (location -> colour)
//! - Round counter and current player index
//! - Visibility tracker (fugitive's disclosed location)
//! - Cached result once the game is decided
//! - Move log
//!
//! Uses `im` persistent data structures so lookahead drivers can clone a
//! state in O(1) and explore moves without touching the live game.
//!
//! Mutators are crate-private: only the turn coordinator writes.

use im::{HashMap as ImHashMap, Vector};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::{validate, PlayerConfig, MAX_TRACKERS};
use super::location::Location;
use super::moves::{Move, MoveRecord};
use super::player::{PlayerColour, PlayerState};
use super::schedule::RoundSchedule;
use super::ticket::Ticket;
use crate::board::Board;
use crate::error::{ConfigError, SnapshotError};
use crate::rules::{GameResult, Visibility};

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// All players; index 0 is the fugitive.
    roster: Vector<PlayerState>,

    /// Which tracker stands on which node. The fugitive is never indexed,
    /// so it never blocks its own moves.
    occupancy: ImHashMap<Location, PlayerColour>,

    schedule: RoundSchedule,

    /// Rounds played so far (0 = not started).
    round: u32,

    /// Roster index of the player to move.
    current: usize,

    visibility: Visibility,

    /// Set once, when the game is decided.
    result: Option<GameResult>,

    /// True moves in the order they were accepted.
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Validate a configuration and build the initial state.
    ///
    /// ## Defaults
    ///
    /// - `round`: 0 (not started)
    /// - current player: the fugitive
    /// - disclosed location: `Location::UNREVEALED`
    pub fn from_config(
        schedule: RoundSchedule,
        board: &dyn Board,
        fugitive: &PlayerConfig,
        trackers: &[PlayerConfig],
    ) -> Result<Self, ConfigError> {
        validate(&schedule, board, fugitive, trackers)?;

        let roster: Vector<PlayerState> = std::iter::once(fugitive)
            .chain(trackers.iter())
            .map(PlayerConfig::to_state)
            .collect();

        let occupancy = roster
            .iter()
            .filter(|p| p.is_tracker())
            .map(|p| (p.location, p.colour))
            .collect();

        Ok(Self {
            roster,
            occupancy,
            schedule,
            round: 0,
            current: 0,
            visibility: Visibility::new(),
            result: None,
            history: Vector::new(),
        })
    }

    // === Roster ===

    /// Number of players (fugitive included).
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Iterate over players in turn order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerState> {
        self.roster.iter()
    }

    /// Iterate over tracker states.
    pub fn trackers(&self) -> impl Iterator<Item = &PlayerState> {
        self.roster.iter().filter(|p| p.is_tracker())
    }

    /// The fugitive's state (including its true location).
    #[must_use]
    pub fn fugitive(&self) -> &PlayerState {
        &self.roster[0]
    }

    /// Look up a player by colour.
    #[must_use]
    pub fn player(&self, colour: PlayerColour) -> Option<&PlayerState> {
        self.roster.iter().find(|p| p.colour == colour)
    }

    /// Roster index of a colour.
    #[must_use]
    pub fn index_of(&self, colour: PlayerColour) -> Option<usize> {
        self.roster.iter().position(|p| p.colour == colour)
    }

    // === Turn Progression ===

    /// Roster index of the player to move.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Colour of the player to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerColour {
        self.roster[self.current].colour
    }

    /// Rounds played so far (0 = not started).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The round schedule.
    #[must_use]
    pub fn schedule(&self) -> &RoundSchedule {
        &self.schedule
    }

    // === Occupancy ===

    /// Check if a tracker stands on `location`.
    #[must_use]
    pub fn is_occupied(&self, location: Location) -> bool {
        self.occupancy.contains_key(&location)
    }

    /// Tracker standing on `location`, if any.
    #[must_use]
    pub fn occupant(&self, location: Location) -> Option<PlayerColour> {
        self.occupancy.get(&location).copied()
    }

    // === Visibility & Outcome ===

    /// The visibility tracker.
    #[must_use]
    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    /// The fugitive's publicly known location.
    #[must_use]
    pub fn disclosed_location(&self) -> Location {
        self.visibility.disclosed()
    }

    /// Cached result, once decided.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Check if the game is decided.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Move log (true moves, secret information).
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Mutation (coordinator only) ===

    /// Relocate a player, keeping the occupancy index in step.
    pub(crate) fn move_player(&mut self, colour: PlayerColour, destination: Location) {
        let Some(index) = self.index_of(colour) else {
            return;
        };
        if let Some(player) = self.roster.get_mut(index) {
            if player.is_tracker() {
                self.occupancy.remove(&player.location);
                self.occupancy.insert(destination, colour);
            }
            player.location = destination;
        }
    }

    /// Debit one ticket. Returns `false` if none was held.
    pub(crate) fn spend_ticket(&mut self, colour: PlayerColour, ticket: Ticket) -> bool {
        self.index_of(colour)
            .and_then(|index| self.roster.get_mut(index))
            .map(|player| player.tickets.spend(ticket))
            .unwrap_or(false)
    }

    /// Credit one ticket. Returns `false` if the count is already saturated.
    pub(crate) fn credit_ticket(&mut self, colour: PlayerColour, ticket: Ticket) -> bool {
        self.index_of(colour)
            .and_then(|index| self.roster.get_mut(index))
            .map(|player| player.tickets.add(ticket))
            .unwrap_or(false)
    }

    /// Start the next round and return its number.
    pub(crate) fn advance_round(&mut self) -> u32 {
        self.round += 1;
        self.round
    }

    /// Pass the turn to the next player in roster order.
    pub(crate) fn advance_player(&mut self) {
        self.current = (self.current + 1) % self.roster.len();
    }

    /// Disclose `true_location` if `round` is a reveal round.
    pub(crate) fn record_reveal(&mut self, round: u32, true_location: Location) -> bool {
        self.visibility
            .record_reveal(&self.schedule, round, true_location)
    }

    /// Cache the result. Later calls keep the first result.
    pub(crate) fn set_result(&mut self, result: GameResult) {
        if self.result.is_none() {
            self.result = Some(result);
        }
    }

    /// Append a move to the log.
    pub(crate) fn record(&mut self, mv: Move) {
        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.history
            .push_back(MoveRecord::new(mv, self.round, sequence));
    }

    // === Snapshots ===

    /// Serialize to a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore from a binary snapshot.
    ///
    /// The decoded state must pass `check_consistency`; board membership is
    /// checked when the state is handed to `Game::from_state`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state: Self = bincode::deserialize(bytes)?;
        state.check_consistency()?;
        Ok(state)
    }

    /// Check the structural invariants every query relies on.
    ///
    /// States built by `from_config` and advanced by the coordinator always
    /// pass. Decoded states are checked here before anything indexes into
    /// the roster.
    pub fn check_consistency(&self) -> Result<(), SnapshotError> {
        if self.schedule.is_empty() {
            return Err(SnapshotError::EmptySchedule);
        }
        match self.roster.front() {
            Some(first) if first.is_fugitive() => {}
            _ => return Err(SnapshotError::FugitiveNotFirst),
        }

        let trackers = self.roster.len() - 1;
        if trackers == 0 || trackers > MAX_TRACKERS {
            return Err(SnapshotError::TrackerCount(trackers));
        }

        let mut colours = FxHashSet::default();
        for player in &self.roster {
            if !colours.insert(player.colour) {
                return Err(SnapshotError::DuplicateColour(player.colour));
            }
        }

        if self.current >= self.roster.len() {
            return Err(SnapshotError::CurrentOutOfRange {
                current: self.current,
                players: self.roster.len(),
            });
        }
        if self.round > self.schedule.len() {
            return Err(SnapshotError::RoundOutOfRange {
                round: self.round,
                rounds: self.schedule.len(),
            });
        }

        for tracker in self.trackers() {
            if self.occupant(tracker.location) != Some(tracker.colour) {
                return Err(SnapshotError::OccupancyMismatch(tracker.location));
            }
        }
        if let Some((&location, _)) = self
            .occupancy
            .iter()
            .find(|(location, colour)| self.player(**colour).map(|p| p.location) != Some(**location))
        {
            return Err(SnapshotError::OccupancyMismatch(location));
        }
        Ok(())
    }
}
