//! Core card-related types: Card, Rank, Suit

use std::cmp::Ordering;
use std::fmt;

use crate::errors::domain::{DomainError, ValidationKind};

/// Suits from lowest to highest: ♠ < ♣ < ♦ < ♥.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Clubs = 1,
    Diamonds = 2,
    Hearts = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts];

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
        }
    }
}

/// Ranks from lowest to highest: 3 < 4 < … < K < A < 2.
///
/// Discriminants are the conventional rank numbers (J=11 … A=14, 2=15).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Rank {
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
    Two = 15,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Conventional rank number, 3..=15.
    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based position in the rank order (3 → 0, 2 → 12).
    #[inline]
    pub fn index(self) -> usize {
        (self as u8 - 3) as usize
    }

    pub fn from_index(index: usize) -> Option<Rank> {
        Rank::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const THREE_OF_SPADES: Card = Card {
        rank: Rank::Three,
        suit: Suit::Spades,
    };

    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Dense encoding: `(rank - 3) * 4 + suit`, 3♠ = 0 … 2♥ = 51.
    #[inline]
    pub fn value(self) -> u8 {
        (self.rank as u8 - 3) * 4 + self.suit as u8
    }

    pub fn from_value(value: u8) -> Result<Self, DomainError> {
        if value > 51 {
            return Err(DomainError::validation(
                ValidationKind::OutOfRange,
                format!("Card value must be between 0 and 51, got {value}"),
            ));
        }
        let suit = Suit::ALL[(value % 4) as usize];
        let rank = Rank::ALL[(value / 4) as usize];
        Ok(Self { rank, suit })
    }
}

// Card order is the dense value order: rank first, suit breaks ties.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
