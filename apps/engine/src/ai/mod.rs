//! Automated movers.
//!
//! This module provides:
//! - `Mover` trait for different strategies
//! - `RandomPlayer`: makes random legal moves (seedable for tests)

mod random;
mod trait_def;

pub use random::RandomPlayer;
pub use trait_def::{Mover, MoverError};

/// Create a mover from a type name and optional seed.
///
/// Currently supports `"random"`. Returns `None` for an unknown name.
pub fn create_mover(kind: &str, seed: Option<u64>) -> Option<Box<dyn Mover>> {
    match kind {
        "random" => Some(Box::new(RandomPlayer::new(seed))),
        _ => None,
    }
}
