//! Trick history and per-game statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::hands::{Hand, Shape};
use crate::domain::state::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickPlay {
    pub player: PlayerId,
    pub hand: Hand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTrick {
    /// 1-based trick number within the game.
    pub number: u32,
    pub plays: Vec<TrickPlay>,
    pub winner: PlayerId,
}

impl CompletedTrick {
    /// The hand that took the trick.
    pub fn winning_hand(&self) -> Option<&Hand> {
        self.plays.last().map(|p| &p.hand)
    }
}

/// Plays of the trick in progress plus every trick already closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    completed: Vec<CompletedTrick>,
    current: Vec<TrickPlay>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_play(&mut self, player: PlayerId, hand: Hand) {
        self.current.push(TrickPlay { player, hand });
    }

    /// Move the in-progress plays into the completed list.
    pub fn close_trick(&mut self, number: u32, winner: PlayerId) {
        let plays = std::mem::take(&mut self.current);
        self.completed.push(CompletedTrick {
            number,
            plays,
            winner,
        });
    }

    pub fn completed_tricks(&self) -> &[CompletedTrick] {
        &self.completed
    }

    pub fn current_plays(&self) -> &[TrickPlay] {
        &self.current
    }

    pub fn last_completed_trick(&self) -> Option<&CompletedTrick> {
        self.completed.last()
    }

    fn all_plays(&self) -> impl Iterator<Item = &TrickPlay> {
        self.completed
            .iter()
            .flat_map(|t| t.plays.iter())
            .chain(self.current.iter())
    }

    pub fn total_plays(&self) -> usize {
        self.all_plays().count()
    }

    /// Cards each seat has put on the table so far.
    pub fn cards_played_counts(&self, total_players: usize) -> Vec<usize> {
        let mut counts = vec![0; total_players];
        for play in self.all_plays() {
            if let Some(slot) = counts.get_mut(play.player as usize) {
                *slot += play.hand.len();
            }
        }
        counts
    }

    /// Completed tricks won by each seat.
    pub fn trick_win_counts(&self, total_players: usize) -> Vec<u32> {
        let mut counts = vec![0; total_players];
        for trick in &self.completed {
            if let Some(slot) = counts.get_mut(trick.winner as usize) {
                *slot += 1;
            }
        }
        counts
    }

    /// How many times each shape has been played.
    pub fn shape_counts(&self) -> BTreeMap<Shape, usize> {
        let mut counts = BTreeMap::new();
        for play in self.all_plays() {
            *counts.entry(play.hand.shape()).or_insert(0) += 1;
        }
        counts
    }

    /// Every hand `player` has played, oldest first.
    pub fn player_hand_history(&self, player: PlayerId) -> Vec<&Hand> {
        self.all_plays()
            .filter(|p| p.player == player)
            .map(|p| &p.hand)
            .collect()
    }
}
