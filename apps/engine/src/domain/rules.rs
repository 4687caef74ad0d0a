use std::ops::RangeInclusive;

use crate::domain::state::PlayerId;
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 52;
pub const DEFAULT_CARDS_PER_PLAYER: u8 = 13;

pub fn player_count_range() -> RangeInclusive<usize> {
    MIN_PLAYERS..=MAX_PLAYERS
}

pub fn validate_player_count(players: usize) -> Result<(), DomainError> {
    if !player_count_range().contains(&players) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("Player count must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {players}"),
        ));
    }
    Ok(())
}

/// Largest hand size that lets every seat be dealt from one deck.
pub fn max_cards_per_player(players: usize) -> usize {
    if players == 0 {
        return 0;
    }
    (DECK_SIZE / players).min(DEFAULT_CARDS_PER_PLAYER as usize)
}

/// The card that opens the first game: 3♠ whenever it was dealt, otherwise
/// the lowest card anyone holds.
pub fn opening_card(hands: &[Vec<Card>]) -> Option<Card> {
    hands.iter().flatten().copied().min()
}

/// Seat holding the opening card.
pub fn opening_player(hands: &[Vec<Card>]) -> Option<PlayerId> {
    let card = opening_card(hands)?;
    hands
        .iter()
        .position(|h| h.contains(&card))
        .map(|seat| seat as PlayerId)
}
