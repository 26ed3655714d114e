//! Spectators: synchronous observers of a running game.
//!
//! Every notification runs to completion before the coordinator continues.
//! Fugitive moves arrive already redacted: outside reveal rounds their
//! destinations carry the disclosed location, never the true one.

use std::collections::BTreeSet;
use std::rc::Rc;

use super::game::Game;
use crate::core::{Move, PlayerColour};
use crate::error::ProtocolError;

/// Observer of game events. All methods default to no-ops.
pub trait Spectator {
    /// A fugitive leg started a new round.
    fn on_round_started(&self, _game: &Game, _round: u32) {}

    /// A move was applied (redacted for the fugitive).
    fn on_move_made(&self, _game: &Game, _mv: &Move) {}

    /// Every tracker has moved and the turn is back with the fugitive.
    fn on_rotation_complete(&self, _game: &Game) {}

    /// The game is decided.
    fn on_game_over(&self, _game: &Game, _winners: &BTreeSet<PlayerColour>) {}
}

/// Ordered registration list. Identity is the `Rc` allocation.
#[derive(Clone, Default)]
pub struct SpectatorList {
    entries: Vec<Rc<dyn Spectator>>,
}

impl SpectatorList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this exact spectator is registered.
    #[must_use]
    pub fn contains(&self, spectator: &Rc<dyn Spectator>) -> bool {
        self.entries
            .iter()
            .any(|s| std::ptr::addr_eq(Rc::as_ptr(s), Rc::as_ptr(spectator)))
    }

    /// Register a spectator.
    pub fn register(&mut self, spectator: Rc<dyn Spectator>) -> Result<(), ProtocolError> {
        if self.contains(&spectator) {
            return Err(ProtocolError::SpectatorAlreadyRegistered);
        }
        self.entries.push(spectator);
        Ok(())
    }

    /// Unregister a spectator.
    pub fn unregister(&mut self, spectator: &Rc<dyn Spectator>) -> Result<(), ProtocolError> {
        let position = self
            .entries
            .iter()
            .position(|s| std::ptr::addr_eq(Rc::as_ptr(s), Rc::as_ptr(spectator)))
            .ok_or(ProtocolError::SpectatorNotRegistered)?;
        self.entries.remove(position);
        Ok(())
    }

    /// Registered spectators, in registration order.
    #[must_use]
    pub fn as_slice(&self) -> &[Rc<dyn Spectator>] {
        &self.entries
    }

    /// Number of registered spectators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nobody is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for SpectatorList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpectatorList")
            .field("len", &self.entries.len())
            .finish()
    }
}
