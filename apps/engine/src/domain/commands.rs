//! Replayable player commands.
//!
//! A host appends each accepted `Command` to whatever log it keeps; feeding
//! the log back through [`replay`] rebuilds the same `GameState`.

use serde::{Deserialize, Serialize};

use crate::domain::hands::Shape;
use crate::domain::state::{GameState, PlayerId};
use crate::domain::Card;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Play {
        player: PlayerId,
        cards: Vec<Card>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        declared_shape: Option<Shape>,
    },
    Pass {
        player: PlayerId,
    },
}

impl Command {
    pub fn player(&self) -> PlayerId {
        match self {
            Command::Play { player, .. } | Command::Pass { player } => *player,
        }
    }
}

impl GameState {
    pub fn apply(&self, command: &Command) -> Result<GameState, DomainError> {
        match command {
            Command::Play {
                player,
                cards,
                declared_shape,
            } => self.submit_play(*player, cards, *declared_shape),
            Command::Pass { player } => self.submit_pass(*player),
        }
    }
}

/// Fold `commands` over `initial`. A failing command is reported with its
/// position in the log and the same validation kind.
pub fn replay<'a, I>(initial: &GameState, commands: I) -> Result<GameState, DomainError>
where
    I: IntoIterator<Item = &'a Command>,
{
    let mut state = initial.clone();
    for (index, command) in commands.into_iter().enumerate() {
        state = state.apply(command).map_err(|e| {
            DomainError::validation(
                e.kind().clone(),
                format!("command #{index} ({command:?}): {}", e.detail()),
            )
        })?;
    }
    Ok(state)
}
