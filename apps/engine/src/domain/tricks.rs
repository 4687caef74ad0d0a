//! Single-trick state machine.
//!
//! A trick moves Open → Active → Complete. Every transition takes `&self`
//! and returns a new `TrickState`; a rejected action leaves the input
//! untouched.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::hand_compare::can_beat;
use crate::domain::hands::{is_valid, Hand, Shape};
use crate::domain::state::PlayerId;
use crate::errors::domain::{DomainError, ValidationKind};

/// What happens to earlier passes when someone plays over the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassPolicy {
    /// Every play clears all passed flags; a player who passed may come back in.
    #[default]
    ResetOnPlay,
    /// A pass lasts for the rest of the trick.
    Sticky,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrickStatus {
    /// Nothing played yet; the leader may play any valid hand.
    Open,
    /// At least one hand on the table.
    Active,
    /// All but the last player to play have passed.
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickState {
    pub required_shape: Option<Shape>,
    pub current_hand: Option<Hand>,
    pub starting_player: PlayerId,
    pub last_player: PlayerId,
    /// One flag per seat.
    pub passed: Vec<bool>,
    pub complete: bool,
    pub pass_policy: PassPolicy,
}

impl TrickState {
    /// A fresh Open trick led by `leader`.
    pub fn new(
        total_players: usize,
        leader: PlayerId,
        pass_policy: PassPolicy,
    ) -> Result<Self, DomainError> {
        if total_players == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                "A trick needs at least one player",
            ));
        }
        if leader as usize >= total_players {
            return Err(invalid_player(leader, total_players));
        }
        Ok(Self {
            required_shape: None,
            current_hand: None,
            starting_player: leader,
            last_player: leader,
            passed: vec![false; total_players],
            complete: false,
            pass_policy,
        })
    }

    pub fn total_players(&self) -> usize {
        self.passed.len()
    }

    pub fn status(&self) -> TrickStatus {
        if self.complete {
            TrickStatus::Complete
        } else if self.current_hand.is_some() {
            TrickStatus::Active
        } else {
            TrickStatus::Open
        }
    }

    pub fn passed_count(&self) -> usize {
        self.passed.iter().filter(|&&p| p).count()
    }

    pub fn has_passed(&self, player: PlayerId) -> bool {
        self.passed.get(player as usize).copied().unwrap_or(false)
    }

    /// Whether `hand` may be played onto this trick, ignoring who plays it.
    pub fn is_legal_play(&self, hand: &Hand) -> bool {
        if !is_valid(hand) {
            return false;
        }
        let Some(current) = &self.current_hand else {
            return true;
        };
        let follows = self.required_shape == Some(hand.shape()) && can_beat(hand, current);
        let bombs_over = hand.shape() == Shape::Bomb && current.shape() != Shape::Bomb;
        follows || bombs_over
    }

    pub fn play(&self, hand: Hand, player: PlayerId) -> Result<Self, DomainError> {
        self.require_player(player)?;
        self.require_in_progress()?;
        if self.has_passed(player) {
            return Err(DomainError::validation(
                ValidationKind::AlreadyPassed,
                format!("Player {player} already passed this trick"),
            ));
        }
        if !self.is_legal_play(&hand) {
            return Err(self.illegal_play_error(&hand));
        }

        let mut next = self.clone();
        next.required_shape = Some(hand.shape());
        next.current_hand = Some(hand);
        next.last_player = player;
        if next.pass_policy == PassPolicy::ResetOnPlay {
            next.passed.iter_mut().for_each(|p| *p = false);
        }
        next.complete = next.completion_reached();
        Ok(next)
    }

    pub fn pass(&self, player: PlayerId) -> Result<Self, DomainError> {
        self.require_player(player)?;
        if self.has_passed(player) {
            return Err(DomainError::validation(
                ValidationKind::AlreadyPassed,
                format!("Player {player} already passed this trick"),
            ));
        }
        self.require_in_progress()?;

        let mut next = self.clone();
        next.passed[player as usize] = true;
        next.complete = next.completion_reached();
        if next.complete {
            debug!(winner = next.last_player, "Trick complete");
        }
        Ok(next)
    }

    /// Open a fresh trick led by `leader`; only valid once this one is complete.
    pub fn start_new_trick(&self, leader: PlayerId) -> Result<Self, DomainError> {
        if !self.complete {
            return Err(DomainError::validation(
                ValidationKind::TrickNotComplete,
                "Cannot start a new trick before the current one is complete",
            ));
        }
        Self::new(self.total_players(), leader, self.pass_policy)
    }

    /// Seats that have not passed, in seat order. Empty once complete.
    pub fn active_players(&self) -> Vec<PlayerId> {
        if self.complete {
            return Vec::new();
        }
        (0..self.total_players())
            .filter(|&seat| !self.passed[seat])
            .map(|seat| seat as PlayerId)
            .collect()
    }

    /// Next seat clockwise after `after` that has not passed. Never `after`
    /// itself.
    pub fn next_player(&self, after: PlayerId) -> Option<PlayerId> {
        if self.complete {
            return None;
        }
        let n = self.total_players();
        (1..n)
            .map(|step| ((after as usize + step) % n) as PlayerId)
            .find(|&seat| !self.has_passed(seat))
    }

    /// The player whose hand took the trick, once complete.
    pub fn winner(&self) -> Option<PlayerId> {
        self.complete.then_some(self.last_player)
    }

    fn completion_reached(&self) -> bool {
        self.current_hand.is_some() && self.passed_count() + 1 >= self.total_players()
    }

    fn require_player(&self, player: PlayerId) -> Result<(), DomainError> {
        if player as usize >= self.total_players() {
            return Err(invalid_player(player, self.total_players()));
        }
        Ok(())
    }

    fn require_in_progress(&self) -> Result<(), DomainError> {
        if self.complete {
            return Err(DomainError::validation(
                ValidationKind::TrickComplete,
                "Trick is already complete",
            ));
        }
        Ok(())
    }

    fn illegal_play_error(&self, hand: &Hand) -> DomainError {
        let Some(current) = &self.current_hand else {
            return DomainError::validation(
                ValidationKind::InvalidHand,
                format!("{hand} is not a valid hand"),
            );
        };
        if !is_valid(hand) {
            return DomainError::validation(
                ValidationKind::InvalidHand,
                format!("{hand} is not a valid hand"),
            );
        }
        if hand.shape() != current.shape() || hand.len() != current.len() {
            DomainError::validation(
                ValidationKind::ShapeMismatch,
                format!("{hand} does not match {current}"),
            )
        } else {
            DomainError::validation(
                ValidationKind::CannotBeat,
                format!("{hand} does not beat {current}"),
            )
        }
    }
}

fn invalid_player(player: PlayerId, total: usize) -> DomainError {
    DomainError::validation(
        ValidationKind::InvalidPlayer,
        format!("Player {player} is not seated (table of {total})"),
    )
}
