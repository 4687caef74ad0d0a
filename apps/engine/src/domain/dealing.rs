//! Deck construction, seeded shuffling, and round-robin dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{validate_player_count, DECK_SIZE};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// The 52-card deck in ascending value order (3♠ first, 2♥ last).
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            deck.push(Card { rank, suit });
        }
    }
    deck
}

/// A standard deck shuffled deterministically from `seed`.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = standard_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// Deal `per_player` cards to each of `players` seats, one card at a time
/// in seat order. Hands come back sorted; undealt cards are discarded.
pub fn deal_round_robin(
    deck: &[Card],
    players: usize,
    per_player: u8,
) -> Result<Vec<Vec<Card>>, DomainError> {
    validate_player_count(players)?;
    if per_player == 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidHandSize,
            "Hand size must be at least 1",
        ));
    }

    let needed = players * per_player as usize;
    if needed > DECK_SIZE || needed > deck.len() {
        return Err(DomainError::validation(
            ValidationKind::InvalidHandSize,
            format!(
                "Dealing {per_player} cards to {players} players needs {needed} cards, deck has {}",
                deck.len()
            ),
        ));
    }

    let mut seen = deck[..needed].to_vec();
    seen.sort();
    if seen.windows(2).any(|w| w[0] == w[1]) {
        return Err(DomainError::validation(
            ValidationKind::DuplicateCard,
            "Deck contains the same card twice",
        ));
    }

    let mut hands = vec![Vec::with_capacity(per_player as usize); players];
    for (i, &card) in deck[..needed].iter().enumerate() {
        hands[i % players].push(card);
    }
    for hand in &mut hands {
        hand.sort();
    }
    Ok(hands)
}

/// Shuffle a fresh deck from `seed` and deal it round-robin.
pub fn deal_game(players: usize, per_player: u8, seed: u64) -> Result<Vec<Vec<Card>>, DomainError> {
    deal_round_robin(&shuffled_deck(seed), players, per_player)
}
