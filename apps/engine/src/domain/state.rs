use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::domain::history::GameHistory;
use crate::domain::tricks::TrickState;
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

pub type PlayerId = u8; // 0..=3, seat index

/// How the first leader of a game is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Opening {
    /// First game of a session: the holder of the lowest dealt card leads,
    /// and the first play must contain that card.
    LowestCard,
    /// Later games: the caller names the leader (usually the previous winner).
    Player(PlayerId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    /// Cards still held, sorted ascending.
    pub hand: Vec<Card>,
}

impl PlayerState {
    pub fn is_finished(&self) -> bool {
        self.hand.is_empty()
    }

    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<PlayerState>,
    /// Whose turn it is; `None` once the game is complete.
    pub current_player: Option<PlayerId>,
    /// Players in the order they emptied their hands.
    pub finish_order: Vec<PlayerId>,
    /// 1-based number of the trick in progress.
    pub trick_number: u32,
    pub is_first_game: bool,
    /// Card the first play must contain, when the opening-card rule applies.
    pub opening_card: Option<Card>,
    pub trick: TrickState,
    pub history: GameHistory,
    pub rules: RulesConfig,
}

impl GameState {
    pub fn total_players(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, who: PlayerId) -> Result<&PlayerState, DomainError> {
        self.players.get(who as usize).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidPlayer,
                format!("Player {who} is not seated (table of {})", self.players.len()),
            )
        })
    }

    pub fn hand(&self, who: PlayerId) -> Result<&[Card], DomainError> {
        Ok(&self.player(who)?.hand)
    }

    pub fn is_finished(&self, who: PlayerId) -> bool {
        self.finish_order.contains(&who)
    }

    /// Seats still holding cards, in seat order.
    pub fn remaining_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| !self.is_finished(p.id))
            .map(|p| p.id)
            .collect()
    }
}

/// Next seat in fixed clockwise order on a table of `total` seats.
pub fn next_player(p: PlayerId, total: usize) -> PlayerId {
    ((p as usize + 1) % total) as PlayerId
}

/// Validate that it is `who`'s turn.
pub fn require_turn(state: &GameState, who: PlayerId) -> Result<(), DomainError> {
    match state.current_player {
        None => Err(DomainError::validation(
            ValidationKind::GameOver,
            "Game is already complete",
        )),
        Some(turn) if turn != who => Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("Out of turn: expected player {turn}, got {who}"),
        )),
        Some(_) => Ok(()),
    }
}

/// Validate that the game has not finished.
pub fn require_in_play(state: &GameState) -> Result<(), DomainError> {
    if state.current_player.is_none() {
        return Err(DomainError::validation(
            ValidationKind::GameOver,
            "Game is already complete",
        ));
    }
    Ok(())
}
