//! Classic game builder.

use std::rc::Rc;

use crate::board::Board;
use crate::core::{GameRng, Location, PlayerColour, PlayerConfig, RoundSchedule, MAX_TRACKERS};
use crate::engine::Game;
use crate::error::ConfigError;

/// Fugitive start cards of the standard board.
pub const FUGITIVE_STARTS: [u32; 13] = [
    35, 45, 51, 71, 78, 104, 106, 127, 132, 146, 166, 170, 172,
];

/// Tracker start cards of the standard board.
pub const TRACKER_STARTS: [u32; 16] = [
    13, 26, 29, 34, 50, 53, 91, 94, 103, 112, 117, 123, 138, 141, 155, 174,
];

/// Builder for a classic game.
///
/// ```
/// use rust_yard::board::TransportGraph;
/// use rust_yard::core::Transport;
/// use rust_yard::games::ClassicSetup;
///
/// let board = TransportGraph::cycle(199, Transport::Taxi);
/// let game = ClassicSetup::new().tracker_count(3).build(board, 42).unwrap();
///
/// assert_eq!(game.players().len(), 4);
/// assert_eq!(game.round_schedule().len(), 24);
/// ```
#[derive(Clone, Debug)]
pub struct ClassicSetup {
    tracker_count: usize,
    schedule: RoundSchedule,
    fugitive_starts: Vec<Location>,
    tracker_starts: Vec<Location>,
}

impl Default for ClassicSetup {
    fn default() -> Self {
        Self {
            tracker_count: MAX_TRACKERS,
            schedule: RoundSchedule::classic(),
            fugitive_starts: FUGITIVE_STARTS.iter().copied().map(Location).collect(),
            tracker_starts: TRACKER_STARTS.iter().copied().map(Location).collect(),
        }
    }
}

impl ClassicSetup {
    /// Classic defaults: five trackers, the 24-round schedule and the
    /// standard start cards.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of trackers to seat (1-5). Colours follow `PlayerColour::TRACKERS`.
    #[must_use]
    pub fn tracker_count(mut self, count: usize) -> Self {
        self.tracker_count = count;
        self
    }

    /// Round schedule to play, replacing the classic one.
    #[must_use]
    pub fn schedule(mut self, schedule: RoundSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Candidate start nodes for the fugitive, replacing the defaults.
    #[must_use]
    pub fn fugitive_starts(mut self, starts: impl IntoIterator<Item = Location>) -> Self {
        self.fugitive_starts = starts.into_iter().collect();
        self
    }

    /// Candidate start nodes for the trackers, replacing the defaults.
    #[must_use]
    pub fn tracker_starts(mut self, starts: impl IntoIterator<Item = Location>) -> Self {
        self.tracker_starts = starts.into_iter().collect();
        self
    }

    /// Deal start locations and tickets, then construct the game.
    pub fn build(self, board: impl Board + 'static, seed: u64) -> Result<Game, ConfigError> {
        self.build_shared(Rc::new(board), seed)
    }

    /// Like `build`, for a board shared between several games.
    pub fn build_shared(self, board: Rc<dyn Board>, seed: u64) -> Result<Game, ConfigError> {
        let (fugitive, trackers) = self.deal(seed)?;
        Game::with_shared_board(self.schedule, board, fugitive, trackers)
    }

    /// Player configurations this setup deals for a seed.
    ///
    /// Deterministic: the same seed always yields the same deal.
    pub fn deal(&self, seed: u64) -> Result<(PlayerConfig, Vec<PlayerConfig>), ConfigError> {
        if self.tracker_count > MAX_TRACKERS {
            return Err(ConfigError::TooManyTrackers(self.tracker_count));
        }
        if self.fugitive_starts.is_empty() {
            return Err(ConfigError::NotEnoughStartLocations {
                needed: 1,
                available: 0,
            });
        }
        if self.tracker_starts.len() < self.tracker_count {
            return Err(ConfigError::NotEnoughStartLocations {
                needed: self.tracker_count,
                available: self.tracker_starts.len(),
            });
        }

        let mut rng = GameRng::new(seed);
        let mut fugitive_starts = self.fugitive_starts.clone();
        let mut tracker_starts = self.tracker_starts.clone();
        rng.shuffle(&mut fugitive_starts);
        rng.shuffle(&mut tracker_starts);

        let fugitive = PlayerConfig::classic_fugitive(fugitive_starts[0]);
        let trackers: Vec<_> = PlayerColour::TRACKERS
            .iter()
            .zip(tracker_starts)
            .take(self.tracker_count)
            .map(|(&colour, location)| PlayerConfig::classic_tracker(colour, location))
            .collect();

        tracing::debug!(
            seed,
            fugitive = %fugitive.location,
            trackers = trackers.len(),
            "dealt classic start locations"
        );
        Ok((fugitive, trackers))
    }
}
