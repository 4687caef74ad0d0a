//! Random mover: picks uniformly among the legal actions.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{Mover, MoverError};
use crate::domain::{Command, GameState, PlayerId};

/// Mover that chooses uniformly among every legal hand plus passing (when
/// passing is allowed).
///
/// The RNG sits behind a `Mutex` because `Mover` takes `&self`.
///
/// ```rust,ignore
/// let seeded = RandomPlayer::new(Some(12345));
/// let command = seeded.choose_action(&state, player)?;
/// ```
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";

    /// `Some(seed)` for reproducible choices, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Mover for RandomPlayer {
    fn choose_action(&self, state: &GameState, player: PlayerId) -> Result<Command, MoverError> {
        let moves = state.legal_moves(player);
        let can_pass = state.can_pass(player);
        let options = moves.len() + usize::from(can_pass);
        if options == 0 {
            return Err(MoverError::NoLegalAction(format!(
                "player {player} can neither play nor pass"
            )));
        }

        let pick = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|e| MoverError::Internal(format!("RNG lock poisoned: {e}")))?;
            rng.random_range(0..options)
        };

        match moves.get(pick) {
            Some(hand) => Ok(Command::Play {
                player,
                cards: hand.cards().to_vec(),
                declared_shape: Some(hand.shape()),
            }),
            None => Ok(Command::Pass { player }),
        }
    }
}
