//! Rules engine for Tiến Lên, the climbing shedding card game.
//!
//! The core is pure: hand classification and comparison, legal-move
//! enumeration, and the trick and game state machines in [`domain`]. Hosts
//! drive a game through [`GameState`] transitions and may log
//! [`domain::Command`] values for replay.

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod telemetry;

// Re-exports for public API
pub use config::{ConfigError, RulesConfig};
pub use domain::{
    can_beat, classify, compare, enumerate_all, enumerate_that_beat, Card, Command, GameState,
    Hand, Opening, PassPolicy, PlayerId, Rank, Shape, Suit, TrickState,
};
pub use errors::{DomainError, ErrorCode, ValidationKind};

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
