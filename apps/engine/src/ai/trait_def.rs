//! Mover trait definition.

use std::fmt;

use crate::domain::{Command, GameState, PlayerId};

/// Errors that can occur while a mover picks an action.
#[derive(Debug)]
pub enum MoverError {
    /// The mover encountered an internal error
    Internal(String),
    /// Nothing legal is available to the player
    NoLegalAction(String),
}

impl fmt::Display for MoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoverError::Internal(msg) => write!(f, "mover internal error: {msg}"),
            MoverError::NoLegalAction(msg) => write!(f, "no legal action: {msg}"),
        }
    }
}

impl std::error::Error for MoverError {}

/// Something that picks an action for a seat.
///
/// Implementations receive the full game state and must return a command
/// that `GameState::apply` accepts. Legal options come from
/// `state.legal_moves(player)` and `state.can_pass(player)`.
pub trait Mover: Send + Sync {
    fn choose_action(&self, state: &GameState, player: PlayerId) -> Result<Command, MoverError>;
}
