//! In-memory self-play: every seat is driven by a `Mover` until the game ends.

use std::collections::BTreeMap;

use engine::ai::Mover;
use engine::domain::{Opening, Shape};
use engine::{GameState, PlayerId, RulesConfig};
use tracing::debug;

/// Upper bound on actions in one game; a correct engine never gets close.
const MAX_ACTIONS: usize = 5_000;

#[derive(Debug)]
pub struct GameResult {
    pub seed: u64,
    pub finish_order: Vec<PlayerId>,
    pub standings: Vec<PlayerId>,
    pub tricks: u32,
    pub actions: usize,
    pub cards_played: Vec<usize>,
    pub tricks_won: Vec<u32>,
    pub shape_counts: BTreeMap<Shape, usize>,
}

impl GameResult {
    pub fn winner(&self) -> Option<PlayerId> {
        self.finish_order.first().copied()
    }
}

pub struct Simulator {
    players: usize,
    rules: RulesConfig,
}

impl Simulator {
    pub fn new(players: usize, rules: RulesConfig) -> Self {
        Self { players, rules }
    }

    pub fn simulate_game(
        &self,
        seed: u64,
        opening: Opening,
        movers: &[Box<dyn Mover>],
    ) -> Result<GameResult, Box<dyn std::error::Error>> {
        let mut state = GameState::deal_and_start(self.players, seed, opening, self.rules)?;
        let mut actions = 0;

        while let Some(player) = state.current_player {
            if actions >= MAX_ACTIONS {
                return Err(
                    format!("game with seed {seed} did not finish in {MAX_ACTIONS} actions").into(),
                );
            }
            let mover = movers
                .get(player as usize)
                .ok_or_else(|| format!("no mover for seat {player}"))?;
            let command = mover.choose_action(&state, player)?;
            debug!(player, ?command, "Applying command");
            state = state.apply(&command)?;
            actions += 1;
        }

        Ok(GameResult {
            seed,
            finish_order: state.finish_order.clone(),
            standings: state.standings(),
            tricks: state.trick_number,
            actions,
            cards_played: state.history.cards_played_counts(self.players),
            tricks_won: state.history.trick_win_counts(self.players),
            shape_counts: state.history.shape_counts(),
        })
    }
}
