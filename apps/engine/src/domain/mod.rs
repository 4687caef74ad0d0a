//! Domain layer: pure game logic types and helpers.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod commands;
pub mod dealing;
pub mod game_flow;
pub mod hand_compare;
pub mod hand_enum;
pub mod hands;
pub mod history;
pub mod rules;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod tests_game_flow;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_props_game;

// Re-exports for ergonomics
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use commands::{replay, Command};
pub use dealing::{deal_game, deal_round_robin, shuffled_deck, standard_deck};
pub use hand_compare::{can_beat, compare};
pub use hand_enum::{enumerate_all, enumerate_shape, enumerate_that_beat, iter_all, iter_shape};
pub use hands::{classify, classify_as, is_valid, Hand, Shape};
pub use history::{CompletedTrick, GameHistory, TrickPlay};
pub use state::{GameState, Opening, PlayerId, PlayerState};
pub use tricks::{PassPolicy, TrickState, TrickStatus};
