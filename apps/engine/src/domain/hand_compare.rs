//! Partial order over hands.
//!
//! Hands of different shapes are generally incomparable, so `Hand` does not
//! implement `PartialOrd`; comparison goes through [`compare`] instead.

use std::cmp::Ordering;

use tracing::debug;

use crate::domain::hands::{Hand, Shape};

/// Compare two hands. `None` means the hands are incomparable.
///
/// - A Bomb beats every non-Bomb hand.
/// - Two Bombs, or two hands of the same shape and size, compare by their
///   highest card.
/// - Everything else is incomparable.
pub fn compare(a: &Hand, b: &Hand) -> Option<Ordering> {
    match (a.shape(), b.shape()) {
        (Shape::Bomb, Shape::Bomb) => by_highest(a, b),
        (Shape::Bomb, _) => Some(Ordering::Greater),
        (_, Shape::Bomb) => Some(Ordering::Less),
        (sa, sb) if sa == sb && a.len() == b.len() => by_highest(a, b),
        _ => None,
    }
}

fn by_highest(a: &Hand, b: &Hand) -> Option<Ordering> {
    Some(a.highest_card()?.cmp(&b.highest_card()?))
}

/// True iff `hand` strictly beats `target`.
pub fn can_beat(hand: &Hand, target: &Hand) -> bool {
    match compare(hand, target) {
        Some(ord) => ord == Ordering::Greater,
        None => {
            debug!(
                hand = %hand,
                target = %target,
                "Hands are incomparable; treating as cannot beat"
            );
            false
        }
    }
}
