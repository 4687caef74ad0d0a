//! Turn coordination across a full game.
//!
//! `GameState` transitions are pure: each accepted action returns a new
//! state and a rejected one leaves the caller's state untouched.

use tracing::{debug, info};

use crate::config::RulesConfig;
use crate::domain::dealing::deal_game;
use crate::domain::hand_enum::iter_all;
use crate::domain::hands::{classify, classify_as, Hand, Shape};
use crate::domain::history::GameHistory;
use crate::domain::rules::{self, validate_player_count};
use crate::domain::state::{
    next_player, require_in_play, require_turn, GameState, Opening, PlayerId, PlayerState,
};
use crate::domain::tricks::TrickState;
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

impl GameState {
    /// Seat players with the given hands and pick the first leader.
    pub fn start(
        hands: Vec<Vec<Card>>,
        opening: Opening,
        rules: RulesConfig,
    ) -> Result<Self, DomainError> {
        let total = hands.len();
        validate_player_count(total)?;
        if let Some(seat) = hands.iter().position(|h| h.is_empty()) {
            return Err(DomainError::validation(
                ValidationKind::InvalidHandSize,
                format!("Player {seat} was dealt no cards"),
            ));
        }
        let mut all: Vec<Card> = hands.iter().flatten().copied().collect();
        all.sort();
        if let Some(w) = all.windows(2).find(|w| w[0] == w[1]) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateCard,
                format!("{} was dealt twice", w[0]),
            ));
        }

        let (leader, is_first_game, opening_card) = match opening {
            Opening::LowestCard => {
                let card = rules::opening_card(&hands);
                let leader = rules::opening_player(&hands).ok_or_else(|| {
                    DomainError::validation_other("No opening card among dealt hands")
                })?;
                (leader, true, card)
            }
            Opening::Player(id) => {
                if id as usize >= total {
                    return Err(DomainError::validation(
                        ValidationKind::InvalidPlayer,
                        format!("Opening player {id} is not seated (table of {total})"),
                    ));
                }
                (id, false, None)
            }
        };

        let players = hands
            .into_iter()
            .enumerate()
            .map(|(seat, mut hand)| {
                hand.sort();
                PlayerState {
                    id: seat as PlayerId,
                    hand,
                }
            })
            .collect();

        info!(
            players = total,
            leader,
            first_game = is_first_game,
            opening_card = ?opening_card.map(|c| c.to_string()),
            "Game started"
        );

        Ok(Self {
            players,
            current_player: Some(leader),
            finish_order: Vec::new(),
            trick_number: 1,
            is_first_game,
            opening_card,
            trick: TrickState::new(total, leader, rules.pass_policy)?,
            history: GameHistory::new(),
            rules,
        })
    }

    /// Shuffle with `seed`, deal `rules.cards_per_player` to each seat, and start.
    pub fn deal_and_start(
        players: usize,
        seed: u64,
        opening: Opening,
        rules: RulesConfig,
    ) -> Result<Self, DomainError> {
        let hands = deal_game(players, rules.cards_per_player, seed)?;
        Self::start(hands, opening, rules)
    }

    /// Play `cards` for `player`. With `declared_shape` the cards are checked
    /// against that shape only; without it they are classified.
    pub fn submit_play(
        &self,
        player: PlayerId,
        cards: &[Card],
        declared_shape: Option<Shape>,
    ) -> Result<Self, DomainError> {
        require_in_play(self)?;
        let seat = self.player(player)?;
        require_turn(self, player)?;

        let hand = build_hand(seat, cards, declared_shape)?;
        self.check_opening_card(&hand)?;
        let trick = self.trick.play(hand.clone(), player)?;

        let mut next = self.clone();
        next.trick = trick;
        next.players[player as usize]
            .hand
            .retain(|&c| !hand.contains(c));
        debug!(
            player,
            hand = %hand,
            trick_no = self.trick_number,
            cards_left = next.players[player as usize].hand.len(),
            "Hand played"
        );
        next.history.record_play(player, hand);

        if next.players[player as usize].is_finished() {
            next.finish_order.push(player);
            info!(player, place = next.finish_order.len(), "Player finished");
        }

        next.settle(player)?;
        Ok(next)
    }

    pub fn submit_pass(&self, player: PlayerId) -> Result<Self, DomainError> {
        require_in_play(self)?;
        self.player(player)?;
        require_turn(self, player)?;
        if self.trick.current_hand.is_none() {
            return Err(DomainError::validation(
                ValidationKind::LeaderCannotPass,
                format!("Player {player} leads trick {} and must play", self.trick_number),
            ));
        }

        let mut next = self.clone();
        next.trick = self.trick.pass(player)?;
        debug!(player, trick_no = self.trick_number, "Player passed");

        next.settle(player)?;
        Ok(next)
    }

    /// Every hand `player` could legally put down right now, independent of
    /// whose turn it is.
    pub fn legal_moves(&self, player: PlayerId) -> Vec<Hand> {
        if self.is_complete() || self.trick.complete || self.trick.has_passed(player) {
            return Vec::new();
        }
        let Ok(seat) = self.player(player) else {
            return Vec::new();
        };
        let opening_card = self.required_opening_card();
        iter_all(&seat.hand)
            .filter(|hand| self.trick.is_legal_play(hand))
            .filter(|hand| match opening_card {
                Some(card) => hand.contains(card),
                None => true,
            })
            .collect()
    }

    /// Whether `player` may pass right now, independent of whose turn it is.
    pub fn can_pass(&self, player: PlayerId) -> bool {
        !self.is_complete()
            && self.trick.current_hand.is_some()
            && !self.trick.complete
            && !self.trick.has_passed(player)
            && (player as usize) < self.total_players()
            && !self.is_finished(player)
    }

    pub fn is_complete(&self) -> bool {
        self.current_player.is_none()
    }

    /// First player to empty their hand.
    pub fn winner(&self) -> Option<PlayerId> {
        self.finish_order.first().copied()
    }

    /// Finish order followed by the players still holding cards, in seat
    /// order. Once the game is complete this is the full ranking.
    pub fn standings(&self) -> Vec<PlayerId> {
        let mut order = self.finish_order.clone();
        order.extend(self.remaining_players());
        order
    }

    /// The card the next play must contain, if the opening rule still applies.
    pub fn required_opening_card(&self) -> Option<Card> {
        let first_play = self.is_first_game && self.history.total_plays() == 0;
        if first_play && self.rules.require_opening_card {
            self.opening_card
        } else {
            None
        }
    }

    fn check_opening_card(&self, hand: &Hand) -> Result<(), DomainError> {
        match self.required_opening_card() {
            Some(card) if !hand.contains(card) => Err(DomainError::validation(
                ValidationKind::MissingOpeningCard,
                format!("The first play must contain {card}"),
            )),
            _ => Ok(()),
        }
    }

    /// Bookkeeping after an accepted action: auto-pass finished players,
    /// close a completed trick, and pick who acts next.
    fn settle(&mut self, actor: PlayerId) -> Result<(), DomainError> {
        let total = self.total_players();
        if self.finish_order.len() + 1 >= total {
            self.history
                .close_trick(self.trick_number, self.trick.last_player);
            self.current_player = None;
            info!(
                winner = ?self.winner(),
                standings = ?self.standings(),
                tricks = self.trick_number,
                "Game complete"
            );
            return Ok(());
        }

        self.auto_pass_finished()?;

        if let Some(winner) = self.trick.winner() {
            self.history.close_trick(self.trick_number, winner);
            let leader = if self.is_finished(winner) {
                self.next_unfinished_after(winner)?
            } else {
                winner
            };
            info!(
                winner,
                trick_no = self.trick_number,
                next_leader = leader,
                "Trick won"
            );
            self.trick = self.trick.start_new_trick(leader)?;
            self.trick_number += 1;
            self.current_player = Some(leader);
        } else {
            self.current_player = Some(self.next_actor_after(actor)?);
        }
        Ok(())
    }

    /// Players who are out cannot answer, so they count as passed. The
    /// player whose hand is on the table keeps it there.
    fn auto_pass_finished(&mut self) -> Result<(), DomainError> {
        for &seat in &self.finish_order {
            if self.trick.complete {
                break;
            }
            if seat == self.trick.last_player || self.trick.has_passed(seat) {
                continue;
            }
            self.trick = self.trick.pass(seat)?;
        }
        Ok(())
    }

    fn next_actor_after(&self, actor: PlayerId) -> Result<PlayerId, DomainError> {
        let total = self.total_players();
        let mut seat = actor;
        for _ in 0..total {
            seat = next_player(seat, total);
            if !self.is_finished(seat) && !self.trick.has_passed(seat) {
                return Ok(seat);
            }
        }
        Err(DomainError::validation_other(format!(
            "No player can act after player {actor} in trick {}",
            self.trick_number
        )))
    }

    fn next_unfinished_after(&self, seat: PlayerId) -> Result<PlayerId, DomainError> {
        let total = self.total_players();
        let mut candidate = seat;
        for _ in 0..total {
            candidate = next_player(candidate, total);
            if !self.is_finished(candidate) {
                return Ok(candidate);
            }
        }
        Err(DomainError::validation_other(
            "No unfinished player left to lead",
        ))
    }
}

/// Validate ownership and shape of a submission.
fn build_hand(
    seat: &PlayerState,
    cards: &[Card],
    declared_shape: Option<Shape>,
) -> Result<Hand, DomainError> {
    if cards.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidHand,
            "A play needs at least one card",
        ));
    }
    let mut sorted = cards.to_vec();
    sorted.sort();
    if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
        return Err(DomainError::validation(
            ValidationKind::DuplicateCard,
            format!("{} submitted twice", w[0]),
        ));
    }
    if let Some(missing) = sorted.iter().find(|&&c| !seat.holds(c)) {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Player {} does not hold {missing}", seat.id),
        ));
    }

    match declared_shape {
        Some(shape) => classify_as(&sorted, shape).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::ShapeMismatch,
                format!("Cards do not form a {shape:?}"),
            )
        }),
        None => classify(&sorted).ok_or_else(|| {
            DomainError::validation(ValidationKind::InvalidHand, "Cards do not form a hand")
        }),
    }
}
