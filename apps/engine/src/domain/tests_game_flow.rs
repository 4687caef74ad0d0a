//! Turn coordination tests over hand-built deals.

use crate::config::RulesConfig;
use crate::domain::commands::{replay, Command};
use crate::domain::fixtures::CardFixtures;
use crate::domain::hands::Shape;
use crate::domain::state::{GameState, Opening};
use crate::domain::tricks::PassPolicy;
use crate::domain::Card;
use crate::errors::domain::ValidationKind;

fn cards(tokens: &[&str]) -> Vec<Card> {
    CardFixtures::parse_hardcoded(tokens)
}

/// A full 4 x 13 deal: seat 0 holds 3♠, seat 2 holds every 5.
fn four_player_deal() -> Vec<Vec<Card>> {
    vec![
        cards(&["3S", "3C", "6C", "6H", "7C", "8C", "9C", "TS", "JD", "QD", "KH", "AC", "2D"]),
        cards(&["3D", "4S", "4C", "4H", "6D", "7D", "8D", "9S", "TC", "JS", "QC", "KS", "AD"]),
        cards(&["5S", "5C", "5D", "5H", "6S", "7S", "8S", "9D", "TD", "JC", "QH", "KD", "2H"]),
        cards(&["3H", "4D", "7H", "8H", "9H", "TH", "JH", "QS", "KC", "AS", "AH", "2S", "2C"]),
    ]
}

fn start_four() -> GameState {
    GameState::start(four_player_deal(), Opening::LowestCard, RulesConfig::default()).unwrap()
}

#[test]
fn holder_of_three_of_spades_opens() {
    let game = start_four();
    assert!(game.players.iter().all(|p| p.hand.len() == 13));
    assert_eq!(game.current_player, Some(0));
    assert!(game.is_first_game);
    assert_eq!(game.opening_card, Some(Card::THREE_OF_SPADES));
    assert_eq!(game.trick_number, 1);
    assert_eq!(game.required_opening_card(), Some(Card::THREE_OF_SPADES));
}

#[test]
fn bomb_takes_the_opening_trick_and_leads_next() {
    let game = start_four();
    let game = game.submit_play(0, &cards(&["3S"]), None).unwrap();
    assert_eq!(game.current_player, Some(1));
    let game = game.submit_play(1, &cards(&["4H"]), None).unwrap();
    assert_eq!(game.current_player, Some(2));
    let game = game
        .submit_play(2, &cards(&["5S", "5C", "5D", "5H"]), Some(Shape::Bomb))
        .unwrap();
    assert_eq!(game.current_player, Some(3));

    let game = game.submit_pass(3).unwrap();
    let game = game.submit_pass(0).unwrap();
    assert_eq!(game.trick_number, 1);
    let game = game.submit_pass(1).unwrap();

    let closed = game.history.last_completed_trick().unwrap();
    assert_eq!(closed.number, 1);
    assert_eq!(closed.winner, 2);
    assert_eq!(closed.plays.len(), 3);

    assert_eq!(game.trick_number, 2);
    assert_eq!(game.current_player, Some(2));
    assert_eq!(game.trick.starting_player, 2);
    assert_eq!(game.trick.current_hand, None);
    assert_eq!(
        game.players[2].hand,
        cards(&["6S", "7S", "8S", "9D", "TD", "JC", "QH", "KD", "2H"])
    );
    assert_eq!(game.required_opening_card(), None);
}

#[test]
fn first_play_must_contain_opening_card() {
    let game = start_four();
    let err = game.submit_play(0, &cards(&["9C"]), None).unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::MissingOpeningCard);

    let relaxed = RulesConfig {
        require_opening_card: false,
        ..RulesConfig::default()
    };
    let game = GameState::start(four_player_deal(), Opening::LowestCard, relaxed).unwrap();
    assert!(game.submit_play(0, &cards(&["9C"]), None).is_ok());
}

#[test]
fn turn_and_ownership_are_enforced() {
    let game = start_four();
    assert_eq!(
        game.submit_play(1, &cards(&["4H"]), None).unwrap_err().kind(),
        &ValidationKind::OutOfTurn
    );
    assert_eq!(
        game.submit_play(0, &cards(&["3S", "4H"]), None)
            .unwrap_err()
            .kind(),
        &ValidationKind::CardNotInHand
    );
    assert_eq!(
        game.submit_play(0, &cards(&["3S", "3S"]), None)
            .unwrap_err()
            .kind(),
        &ValidationKind::DuplicateCard
    );
    assert_eq!(
        game.submit_play(0, &[], None).unwrap_err().kind(),
        &ValidationKind::InvalidHand
    );
    assert_eq!(
        game.submit_play(0, &cards(&["3S", "9C"]), None)
            .unwrap_err()
            .kind(),
        &ValidationKind::InvalidHand
    );
    assert_eq!(
        game.submit_play(0, &cards(&["3S"]), Some(Shape::Pair))
            .unwrap_err()
            .kind(),
        &ValidationKind::ShapeMismatch
    );
    assert_eq!(
        game.submit_play(9, &cards(&["3S"]), None)
            .unwrap_err()
            .kind(),
        &ValidationKind::InvalidPlayer
    );
}

#[test]
fn leader_cannot_pass_an_open_trick() {
    let game = start_four();
    let err = game.submit_pass(0).unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::LeaderCannotPass);
    assert!(err.kind().is_precondition());
    assert!(!game.can_pass(0));
}

#[test]
fn rejected_actions_leave_state_untouched() {
    let game = start_four().submit_play(0, &cards(&["3S"]), None).unwrap();
    let before = game.clone();
    assert!(game.submit_play(1, &cards(&["8S", "TD"]), None).is_err());
    assert!(game.submit_pass(2).is_err());
    assert_eq!(game, before);
}

#[test]
fn two_player_game_ends_at_first_finisher() {
    let hands = vec![cards(&["3S", "4S"]), cards(&["5S", "6S"])];
    let game = GameState::start(hands, Opening::LowestCard, RulesConfig::default()).unwrap();
    let game = game.submit_play(0, &cards(&["3S"]), None).unwrap();
    let game = game.submit_play(1, &cards(&["5S"]), None).unwrap();
    assert!(game.legal_moves(0).is_empty());
    let game = game.submit_pass(0).unwrap();
    assert_eq!(game.current_player, Some(1));
    let game = game.submit_play(1, &cards(&["6S"]), None).unwrap();

    assert!(game.is_complete());
    assert_eq!(game.current_player, None);
    assert_eq!(game.finish_order, vec![1]);
    assert_eq!(game.winner(), Some(1));
    assert_eq!(game.standings(), vec![1, 0]);
    assert_eq!(game.history.completed_tricks().len(), 2);

    let err = game.submit_pass(0).unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::GameOver);
    assert!(game.legal_moves(0).is_empty());
}

#[test]
fn finished_players_are_skipped_and_auto_passed() {
    let hands = vec![cards(&["3S"]), cards(&["4S", "9S"]), cards(&["5S", "6S"])];
    let game = GameState::start(hands, Opening::LowestCard, RulesConfig::default()).unwrap();

    let game = game.submit_play(0, &cards(&["3S"]), None).unwrap();
    assert_eq!(game.finish_order, vec![0]);
    assert!(!game.is_complete());
    assert_eq!(game.current_player, Some(1));
    // Out of cards with their hand still on the table: nothing to do
    assert!(!game.can_pass(0));
    assert!(game.legal_moves(0).is_empty());
    assert!(game.can_pass(1));

    let game = game.submit_play(1, &cards(&["4S"]), None).unwrap();
    assert!(game.trick.has_passed(0));
    assert_eq!(game.current_player, Some(2));

    let game = game.submit_play(2, &cards(&["5S"]), None).unwrap();
    assert_eq!(game.current_player, Some(1));

    let game = game.submit_play(1, &cards(&["9S"]), None).unwrap();
    assert!(game.is_complete());
    assert_eq!(game.finish_order, vec![0, 1]);
    assert_eq!(game.standings(), vec![0, 1, 2]);
    assert_eq!(game.winner(), Some(0));
}

#[test]
fn next_unfinished_seat_leads_when_winner_is_out() {
    let hands = vec![cards(&["3S"]), cards(&["4S", "8S"]), cards(&["5S", "6S"])];
    let game = GameState::start(hands, Opening::LowestCard, RulesConfig::default()).unwrap();

    let game = game.submit_play(0, &cards(&["3S"]), None).unwrap();
    let game = game.submit_pass(1).unwrap();
    let game = game.submit_pass(2).unwrap();

    assert_eq!(game.history.last_completed_trick().map(|t| t.winner), Some(0));
    assert_eq!(game.trick_number, 2);
    assert_eq!(game.current_player, Some(1));
    assert_eq!(game.trick.starting_player, 1);
}

#[test]
fn sticky_policy_keeps_passers_out() {
    let rules = RulesConfig {
        pass_policy: PassPolicy::Sticky,
        ..RulesConfig::default()
    };
    let game = GameState::start(four_player_deal(), Opening::LowestCard, rules).unwrap();
    let game = game.submit_play(0, &cards(&["3S"]), None).unwrap();
    let game = game.submit_pass(1).unwrap();
    let game = game.submit_play(2, &cards(&["6S"]), None).unwrap();
    // Player 1 stays out, so 3 is next and then 0
    assert_eq!(game.current_player, Some(3));
    let game = game.submit_pass(3).unwrap();
    assert_eq!(game.current_player, Some(0));
    let game = game.submit_pass(0).unwrap();
    assert_eq!(game.trick_number, 2);
    assert_eq!(game.current_player, Some(2));
}

#[test]
fn legal_moves_follow_trick_and_opening_rule() {
    let game = start_four();
    let opening_moves = game.legal_moves(0);
    assert!(!opening_moves.is_empty());
    assert!(opening_moves
        .iter()
        .all(|h| h.contains(Card::THREE_OF_SPADES)));

    let game = game.submit_play(0, &cards(&["3S"]), None).unwrap();
    // Ignores turn: player 2 can already see their answers
    let answers = game.legal_moves(2);
    assert!(answers.iter().all(|h| game.trick.is_legal_play(h)));
    assert!(answers.iter().any(|h| h.shape() == Shape::Bomb));
    assert!(answers.iter().all(|h| h.shape() == Shape::Single || h.shape() == Shape::Bomb));
    assert!(game.can_pass(1));
}

#[test]
fn later_games_take_an_explicit_leader() {
    let game = GameState::start(
        four_player_deal(),
        Opening::Player(3),
        RulesConfig::default(),
    )
    .unwrap();
    assert!(!game.is_first_game);
    assert_eq!(game.opening_card, None);
    assert_eq!(game.current_player, Some(3));
    assert!(game.submit_play(3, &cards(&["KC"]), None).is_ok());

    let err = GameState::start(four_player_deal(), Opening::Player(4), RulesConfig::default())
        .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::InvalidPlayer);
}

#[test]
fn start_validates_the_deal() {
    let err = GameState::start(
        vec![cards(&["3S"])],
        Opening::LowestCard,
        RulesConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::InvalidPlayerCount);

    let err = GameState::start(
        vec![cards(&["3S"]), cards(&["3S"])],
        Opening::LowestCard,
        RulesConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::DuplicateCard);

    let err = GameState::start(
        vec![cards(&["3S"]), Vec::new()],
        Opening::LowestCard,
        RulesConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::InvalidHandSize);
}

#[test]
fn replay_rebuilds_the_same_state() {
    let initial = start_four();
    let log = vec![
        Command::Play {
            player: 0,
            cards: cards(&["3S"]),
            declared_shape: None,
        },
        Command::Play {
            player: 1,
            cards: cards(&["4H"]),
            declared_shape: None,
        },
        Command::Play {
            player: 2,
            cards: cards(&["5S", "5C", "5D", "5H"]),
            declared_shape: Some(Shape::Bomb),
        },
        Command::Pass { player: 3 },
        Command::Pass { player: 0 },
        Command::Pass { player: 1 },
    ];

    let mut stepped = initial.clone();
    for command in &log {
        stepped = stepped.apply(command).unwrap();
    }
    let replayed = replay(&initial, &log).unwrap();
    assert_eq!(replayed, stepped);
    assert_eq!(replayed.current_player, Some(2));

    let bad = vec![Command::Pass { player: 0 }];
    let err = replay(&initial, &bad).unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::LeaderCannotPass);
    assert!(err.detail().starts_with("command #0"));
}

#[test]
fn history_statistics_track_the_game() {
    let game = start_four()
        .submit_play(0, &cards(&["3S"]), None)
        .unwrap()
        .submit_play(1, &cards(&["4H"]), None)
        .unwrap()
        .submit_play(2, &cards(&["5S", "5C", "5D", "5H"]), None)
        .unwrap();
    assert_eq!(game.history.cards_played_counts(4), vec![1, 1, 4, 0]);
    assert_eq!(game.history.shape_counts().get(&Shape::Bomb), Some(&1));
    assert_eq!(game.history.player_hand_history(2).len(), 1);
    assert_eq!(game.history.trick_win_counts(4), vec![0, 0, 0, 0]);
}
