//! Hand shapes and classification.
//!
//! A [`Hand`] is a validated combination of cards. Construction goes through
//! [`classify`] or [`classify_as`]; both sort the cards ascending so the
//! highest card is always the last one.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, Rank};

/// The seven playable combination shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shape {
    Single,
    Pair,
    Triple,
    Straight,
    DoubleStraight,
    TripleStraight,
    Bomb,
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::Single,
        Shape::Pair,
        Shape::Triple,
        Shape::Straight,
        Shape::DoubleStraight,
        Shape::TripleStraight,
        Shape::Bomb,
    ];

    /// Classification priority: the first shape that matches wins.
    pub const PRIORITY: [Shape; 7] = [
        Shape::Bomb,
        Shape::TripleStraight,
        Shape::DoubleStraight,
        Shape::Straight,
        Shape::Triple,
        Shape::Pair,
        Shape::Single,
    ];

    pub fn is_straight_family(self) -> bool {
        matches!(
            self,
            Shape::Straight | Shape::DoubleStraight | Shape::TripleStraight
        )
    }
}

/// A validated combination. Cards are sorted ascending by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", content = "cards", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Hand {
    Single(Card),
    Pair([Card; 2]),
    Triple([Card; 3]),
    Straight(Vec<Card>),
    DoubleStraight(Vec<Card>),
    TripleStraight(Vec<Card>),
    Bomb([Card; 4]),
}

impl Hand {
    pub fn shape(&self) -> Shape {
        match self {
            Hand::Single(_) => Shape::Single,
            Hand::Pair(_) => Shape::Pair,
            Hand::Triple(_) => Shape::Triple,
            Hand::Straight(_) => Shape::Straight,
            Hand::DoubleStraight(_) => Shape::DoubleStraight,
            Hand::TripleStraight(_) => Shape::TripleStraight,
            Hand::Bomb(_) => Shape::Bomb,
        }
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            Hand::Single(c) => std::slice::from_ref(c),
            Hand::Pair(cs) => cs,
            Hand::Triple(cs) => cs,
            Hand::Bomb(cs) => cs,
            Hand::Straight(cs) | Hand::DoubleStraight(cs) | Hand::TripleStraight(cs) => cs,
        }
    }

    pub fn len(&self) -> usize {
        self.cards().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    /// Highest card by value. `None` only for a hand built by deserializing
    /// an empty straight, which [`is_valid`] rejects.
    pub fn highest_card(&self) -> Option<Card> {
        self.cards().last().copied()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards().contains(&card)
    }

    /// Build a hand of `shape` from cards already sorted and checked.
    fn assemble(shape: Shape, sorted: Vec<Card>) -> Option<Hand> {
        let hand = match shape {
            Shape::Single => match sorted.as_slice() {
                [c] => Hand::Single(*c),
                _ => return None,
            },
            Shape::Pair => Hand::Pair(sorted.try_into().ok()?),
            Shape::Triple => Hand::Triple(sorted.try_into().ok()?),
            Shape::Bomb => Hand::Bomb(sorted.try_into().ok()?),
            Shape::Straight => Hand::Straight(sorted),
            Shape::DoubleStraight => Hand::DoubleStraight(sorted),
            Shape::TripleStraight => Hand::TripleStraight(sorted),
        };
        Some(hand)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}[", self.shape())?;
        for (i, c) in self.cards().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

/// Classify a card set into the highest-priority matching shape.
///
/// Returns `None` for an empty set, a set containing the same card twice,
/// or a set that matches no shape.
pub fn classify(cards: &[Card]) -> Option<Hand> {
    let sorted = sorted_unique(cards)?;
    let shape = Shape::PRIORITY
        .into_iter()
        .find(|&shape| matches_shape(&sorted, shape))?;
    Hand::assemble(shape, sorted)
}

/// Classify a card set against one declared shape only.
pub fn classify_as(cards: &[Card], shape: Shape) -> Option<Hand> {
    let sorted = sorted_unique(cards)?;
    if !matches_shape(&sorted, shape) {
        return None;
    }
    Hand::assemble(shape, sorted)
}

/// Re-validate a hand value, e.g. one that came in through serde.
pub fn is_valid(hand: &Hand) -> bool {
    let cards = hand.cards();
    let strictly_sorted = cards.windows(2).all(|w| w[0] < w[1]);
    !cards.is_empty() && strictly_sorted && matches_shape(cards, hand.shape())
}

fn sorted_unique(cards: &[Card]) -> Option<Vec<Card>> {
    if cards.is_empty() {
        return None;
    }
    let mut sorted = cards.to_vec();
    sorted.sort();
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return None;
    }
    Some(sorted)
}

/// Shape rule for a non-empty set of distinct cards sorted ascending.
fn matches_shape(sorted: &[Card], shape: Shape) -> bool {
    let n = sorted.len();
    match shape {
        Shape::Single => n == 1,
        Shape::Pair => n == 2 && same_rank(sorted),
        Shape::Triple => n == 3 && same_rank(sorted),
        Shape::Bomb => n == 4 && same_rank(sorted),
        Shape::Straight => (3..=12).contains(&n) && consecutive_groups(sorted, 1, 3),
        Shape::DoubleStraight => n >= 6 && n % 2 == 0 && consecutive_groups(sorted, 2, 3),
        Shape::TripleStraight => n >= 6 && n % 3 == 0 && consecutive_groups(sorted, 3, 2),
    }
}

fn same_rank(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].rank == w[1].rank)
}

/// Groups of exactly `group_size` cards per rank, ranks consecutive, at
/// least `min_groups` groups, and no rank 2 anywhere.
fn consecutive_groups(sorted: &[Card], group_size: usize, min_groups: usize) -> bool {
    if sorted.iter().any(|c| c.rank == Rank::Two) {
        return false;
    }
    if sorted.len() % group_size != 0 || sorted.len() / group_size < min_groups {
        return false;
    }
    let groups: Vec<&[Card]> = sorted.chunks(group_size).collect();
    if !groups.iter().all(|g| same_rank(g)) {
        return false;
    }
    groups
        .windows(2)
        .all(|w| w[1][0].rank.index() == w[0][0].rank.index() + 1)
}
