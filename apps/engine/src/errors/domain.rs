//! Domain-level error type used by every transition in the engine.
//!
//! The error is host-agnostic: a host maps it to its own transport (HTTP
//! problem details, a CLI message, an AI retry) using [`DomainError::code`].

use thiserror::Error;

use super::error_code::ErrorCode;

/// What kind of rule or protocol check rejected an action.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    // Rejected moves: the caller may retry with a different move.
    /// Cards do not form any hand shape.
    InvalidHand,
    /// Cards do not form the shape the caller declared.
    ShapeMismatch,
    /// The hand does not beat what is on the table (or is incomparable).
    CannotBeat,
    /// A submitted card is not in the player's hand.
    CardNotInHand,
    /// The same card appears twice in a submission or a deal.
    DuplicateCard,
    /// The first play of the first game must contain the opening card.
    MissingOpeningCard,
    /// A card token could not be parsed.
    ParseCard,
    /// An encoded card value is outside 0..=51.
    OutOfRange,

    // Precondition violations: a well-formed host never sends these.
    /// Acting when it is someone else's turn.
    OutOfTurn,
    /// Acting on a trick that is already complete.
    TrickComplete,
    /// Starting a new trick before the current one is complete.
    TrickNotComplete,
    /// Passing twice in the same trick.
    AlreadyPassed,
    /// Passing while leading a fresh trick.
    LeaderCannotPass,
    /// Acting after the game has finished.
    GameOver,
    /// Player index outside the table.
    InvalidPlayer,
    /// Player count outside 2..=4.
    InvalidPlayerCount,
    /// Hand size incompatible with the deck.
    InvalidHandSize,
    Other(String),
}

impl ValidationKind {
    /// True for protocol violations, false for ordinary rejected moves.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ValidationKind::OutOfTurn
                | ValidationKind::TrickComplete
                | ValidationKind::TrickNotComplete
                | ValidationKind::AlreadyPassed
                | ValidationKind::LeaderCannotPass
                | ValidationKind::GameOver
                | ValidationKind::InvalidPlayer
                | ValidationKind::InvalidPlayerCount
                | ValidationKind::InvalidHandSize
                | ValidationKind::Other(_)
        )
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Move or protocol validation failure
    #[error("validation error ({0:?}): {1}")]
    Validation(ValidationKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn kind(&self) -> &ValidationKind {
        match self {
            DomainError::Validation(kind, _) => kind,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, detail) => detail,
        }
    }

    /// Stable error code for hosts.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::from(self.kind())
    }
}
