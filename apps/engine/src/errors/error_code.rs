//! Error codes for engine hosts.
//!
//! Every rejected action carries one of these codes. Add new codes here;
//! never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! a host shows to players or writes to its action log.

use core::fmt;

use super::domain::ValidationKind;

/// Centralized error codes for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Rejected moves
    /// Cards do not form a hand
    InvalidHand,
    /// Cards do not form the declared shape
    ShapeMismatch,
    /// Hand does not beat the table
    CannotBeat,
    /// Card not in hand
    CardNotInHand,
    /// Duplicate card in a submission or deal
    DuplicateCard,
    /// Opening play lacks the opening card
    MissingOpeningCard,
    /// Parse card error
    ParseCard,
    /// Encoded card value out of range
    OutOfRange,

    // Protocol violations
    /// Out of turn
    OutOfTurn,
    /// Trick already complete
    TrickComplete,
    /// Trick not yet complete
    TrickNotComplete,
    /// Player already passed
    AlreadyPassed,
    /// Leader may not pass on an open trick
    LeaderCannotPass,
    /// Game already over
    GameOver,
    /// Invalid seat number
    InvalidSeat,
    /// Player count outside the supported range
    InvalidPlayerCount,
    /// Hand size incompatible with the deck
    InvalidHandSize,
    /// General validation error
    ValidationError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidHand => "INVALID_HAND",
            Self::ShapeMismatch => "SHAPE_MISMATCH",
            Self::CannotBeat => "CANNOT_BEAT",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::DuplicateCard => "DUPLICATE_CARD",
            Self::MissingOpeningCard => "MISSING_OPENING_CARD",
            Self::ParseCard => "PARSE_CARD",
            Self::OutOfRange => "OUT_OF_RANGE",

            Self::OutOfTurn => "OUT_OF_TURN",
            Self::TrickComplete => "TRICK_COMPLETE",
            Self::TrickNotComplete => "TRICK_NOT_COMPLETE",
            Self::AlreadyPassed => "ALREADY_PASSED",
            Self::LeaderCannotPass => "LEADER_CANNOT_PASS",
            Self::GameOver => "GAME_OVER",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidHandSize => "INVALID_HAND_SIZE",
            Self::ValidationError => "VALIDATION_ERROR",
        }
    }
}

impl From<&ValidationKind> for ErrorCode {
    fn from(kind: &ValidationKind) -> Self {
        match kind {
            ValidationKind::InvalidHand => Self::InvalidHand,
            ValidationKind::ShapeMismatch => Self::ShapeMismatch,
            ValidationKind::CannotBeat => Self::CannotBeat,
            ValidationKind::CardNotInHand => Self::CardNotInHand,
            ValidationKind::DuplicateCard => Self::DuplicateCard,
            ValidationKind::MissingOpeningCard => Self::MissingOpeningCard,
            ValidationKind::ParseCard => Self::ParseCard,
            ValidationKind::OutOfRange => Self::OutOfRange,
            ValidationKind::OutOfTurn => Self::OutOfTurn,
            ValidationKind::TrickComplete => Self::TrickComplete,
            ValidationKind::TrickNotComplete => Self::TrickNotComplete,
            ValidationKind::AlreadyPassed => Self::AlreadyPassed,
            ValidationKind::LeaderCannotPass => Self::LeaderCannotPass,
            ValidationKind::GameOver => Self::GameOver,
            ValidationKind::InvalidPlayer => Self::InvalidSeat,
            ValidationKind::InvalidPlayerCount => Self::InvalidPlayerCount,
            ValidationKind::InvalidHandSize => Self::InvalidHandSize,
            ValidationKind::Other(_) => Self::ValidationError,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
