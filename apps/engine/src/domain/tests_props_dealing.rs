/// Property-based tests for deck shuffling and round-robin dealing
use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::dealing::{deal_game, shuffled_deck, standard_deck};
use crate::domain::{test_gens, test_prelude, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a shuffled deck is a permutation of the standard deck.
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>()) {
        let mut shuffled = shuffled_deck(seed);
        shuffled.sort();
        prop_assert_eq!(shuffled, standard_deck());
    }

    /// Property: the same seed deals the same hands.
    #[test]
    fn prop_deal_is_deterministic(
        players in test_gens::player_count(),
        per_player in 1u8..=13u8,
        seed in any::<u64>(),
    ) {
        prop_assert_eq!(
            deal_game(players, per_player, seed).unwrap(),
            deal_game(players, per_player, seed).unwrap()
        );
    }

    /// Property: hands are sorted, the right size, and pairwise disjoint.
    #[test]
    fn prop_hands_are_disjoint(
        players in test_gens::player_count(),
        per_player in 1u8..=13u8,
        seed in any::<u64>(),
    ) {
        let hands = deal_game(players, per_player, seed).unwrap();
        prop_assert_eq!(hands.len(), players);

        let mut seen: HashSet<Card> = HashSet::new();
        for hand in &hands {
            prop_assert_eq!(hand.len(), per_player as usize);
            let mut sorted = hand.clone();
            sorted.sort();
            prop_assert_eq!(&sorted, hand);
            for card in hand {
                prop_assert!(seen.insert(*card), "{} dealt twice", card);
            }
        }
    }
}
