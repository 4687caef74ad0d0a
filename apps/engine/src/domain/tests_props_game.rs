/// Property-based tests that play whole games with random legal moves
use proptest::prelude::*;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::RulesConfig;
use crate::domain::commands::{replay, Command};
use crate::domain::state::{GameState, Opening};
use crate::domain::tricks::PassPolicy;
use crate::domain::{test_gens, test_prelude};

const MAX_ACTIONS: usize = 2_000;

/// Drive a game to the end choosing uniformly among legal plays, passing
/// with probability one in four whenever passing is allowed.
fn play_out(initial: &GameState, seed: u64) -> (GameState, Vec<Command>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut state = initial.clone();
    let mut log = Vec::new();

    for _ in 0..MAX_ACTIONS {
        let Some(player) = state.current_player else {
            break;
        };
        let moves = state.legal_moves(player);
        let command = if moves.is_empty() || (state.can_pass(player) && rng.random_ratio(1, 4)) {
            Command::Pass { player }
        } else {
            let hand = moves.choose(&mut rng).unwrap();
            Command::Play {
                player,
                cards: hand.cards().to_vec(),
                declared_shape: Some(hand.shape()),
            }
        };
        state = state.apply(&command).unwrap();
        log.push(command);
    }
    (state, log)
}

fn policy() -> impl Strategy<Value = PassPolicy> {
    prop_oneof![Just(PassPolicy::ResetOnPlay), Just(PassPolicy::Sticky)]
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: random legal play always finishes with a consistent ranking.
    #[test]
    fn prop_random_games_complete(
        players in test_gens::player_count(),
        deal_seed in any::<u64>(),
        play_seed in any::<u64>(),
        pass_policy in policy(),
    ) {
        let rules = RulesConfig { pass_policy, ..RulesConfig::default() };
        let initial =
            GameState::deal_and_start(players, deal_seed, Opening::LowestCard, rules).unwrap();
        let (end, _) = play_out(&initial, play_seed);

        prop_assert!(end.is_complete());
        prop_assert_eq!(end.finish_order.len(), players - 1);

        let mut standings = end.standings();
        prop_assert_eq!(standings.len(), players);
        standings.sort();
        standings.dedup();
        prop_assert_eq!(standings.len(), players);

        // Finished players hold nothing; the last player still holds cards.
        for &p in &end.finish_order {
            prop_assert!(end.players[p as usize].hand.is_empty());
        }
        let last = end.standings()[players - 1];
        prop_assert!(!end.players[last as usize].hand.is_empty());
    }

    /// Property: cards are conserved between hands and the table.
    #[test]
    fn prop_cards_are_conserved(
        players in test_gens::player_count(),
        deal_seed in any::<u64>(),
        play_seed in any::<u64>(),
    ) {
        let rules = RulesConfig::default();
        let initial =
            GameState::deal_and_start(players, deal_seed, Opening::LowestCard, rules).unwrap();
        let (end, _) = play_out(&initial, play_seed);

        let played = end.history.cards_played_counts(players);
        for p in 0..players {
            prop_assert_eq!(
                initial.players[p].hand.len(),
                end.players[p].hand.len() + played[p]
            );
        }
    }

    /// Property: replaying the action log reproduces the final state.
    #[test]
    fn prop_replay_matches(
        players in test_gens::player_count(),
        deal_seed in any::<u64>(),
        play_seed in any::<u64>(),
    ) {
        let rules = RulesConfig::default();
        let initial =
            GameState::deal_and_start(players, deal_seed, Opening::LowestCard, rules).unwrap();
        let (end, log) = play_out(&initial, play_seed);
        prop_assert_eq!(replay(&initial, &log).unwrap(), end);
    }
}
