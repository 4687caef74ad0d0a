//! Legal-move generation: every hand formable from a set of cards.
//!
//! Cards are bucketed by rank once; combinations and Cartesian products are
//! then generated iteratively with index arrays over those buckets.

use crate::domain::cards_types::{Card, Rank};
use crate::domain::hand_compare::can_beat;
use crate::domain::hands::{classify_as, Hand, Shape};

/// Output order of [`enumerate_all`].
const ENUMERATION_ORDER: [Shape; 7] = [
    Shape::Single,
    Shape::Pair,
    Shape::Triple,
    Shape::Bomb,
    Shape::Straight,
    Shape::DoubleStraight,
    Shape::TripleStraight,
];

/// Number of ranks that may appear in a sequence (3 through A).
const SEQUENCE_RANKS: usize = 12;

/// Cards grouped by rank, each bucket sorted ascending by suit.
struct RankBuckets {
    sorted: Vec<Card>,
    buckets: [Vec<Card>; 13],
}

impl RankBuckets {
    fn new(cards: &[Card]) -> Self {
        let mut sorted = cards.to_vec();
        sorted.sort();
        sorted.dedup();
        let mut buckets: [Vec<Card>; 13] = std::array::from_fn(|_| Vec::new());
        for &card in &sorted {
            buckets[card.rank.index()].push(card);
        }
        Self { sorted, buckets }
    }

    /// Owned copies of the buckets for the lowest `ranks` ranks, so lazy
    /// generators do not borrow from the caller.
    fn owned_groups(&self, ranks: usize) -> Vec<Vec<Card>> {
        self.buckets[..ranks].to_vec()
    }
}

/// Every hand formable from `cards`, in a deterministic order: singles,
/// pairs, triples, bombs, straights (by length, then start rank), double
/// straights, triple straights. Duplicate input cards are ignored.
pub fn enumerate_all(cards: &[Card]) -> Vec<Hand> {
    iter_all(cards).collect()
}

/// Lazy form of [`enumerate_all`]. Memory stays proportional to the input,
/// not to the number of hands produced.
pub fn iter_all(cards: &[Card]) -> impl Iterator<Item = Hand> {
    let buckets = RankBuckets::new(cards);
    ENUMERATION_ORDER
        .into_iter()
        .flat_map(move |shape| shape_hands(&buckets, shape))
}

/// Every hand of one shape formable from `cards`.
pub fn enumerate_shape(cards: &[Card], shape: Shape) -> Vec<Hand> {
    iter_shape(cards, shape).collect()
}

pub fn iter_shape(cards: &[Card], shape: Shape) -> impl Iterator<Item = Hand> {
    shape_hands(&RankBuckets::new(cards), shape)
}

/// Every hand formable from `cards` that beats `target`, bombs included.
pub fn enumerate_that_beat(cards: &[Card], target: &Hand) -> Vec<Hand> {
    iter_all(cards)
        .filter(|hand| can_beat(hand, target))
        .collect()
}

fn shape_hands(buckets: &RankBuckets, shape: Shape) -> Box<dyn Iterator<Item = Hand>> {
    let combos: Box<dyn Iterator<Item = Vec<Card>>> = match shape {
        Shape::Single => Box::new(buckets.sorted.clone().into_iter().map(|c| vec![c])),
        Shape::Pair => Box::new(same_rank_sets(buckets, 2)),
        Shape::Triple => Box::new(same_rank_sets(buckets, 3)),
        Shape::Bomb => Box::new(same_rank_sets(buckets, 4)),
        Shape::Straight => Box::new(sequences(buckets, 1, 3)),
        Shape::DoubleStraight => Box::new(sequences(buckets, 2, 3)),
        Shape::TripleStraight => Box::new(sequences(buckets, 3, 2)),
    };
    Box::new(combos.filter_map(move |combo| classify_as(&combo, shape)))
}

fn same_rank_sets(buckets: &RankBuckets, k: usize) -> impl Iterator<Item = Vec<Card>> {
    buckets
        .owned_groups(Rank::ALL.len())
        .into_iter()
        .flat_map(move |group| Combinations::new(group, k))
}

/// Runs of consecutive ranks (never including 2), each rank contributing
/// exactly `per_rank` cards, at least `min_width` ranks wide. Windows are
/// expanded one at a time.
fn sequences(
    buckets: &RankBuckets,
    per_rank: usize,
    min_width: usize,
) -> impl Iterator<Item = Vec<Card>> {
    let groups = buckets.owned_groups(SEQUENCE_RANKS);
    (min_width..=SEQUENCE_RANKS)
        .flat_map(|width| (0..=SEQUENCE_RANKS - width).map(move |start| (width, start)))
        .filter_map(move |(width, start)| {
            let window = &groups[start..start + width];
            if window.iter().any(|g| g.len() < per_rank) {
                return None;
            }
            let slots = window
                .iter()
                .map(|g| Combinations::new(g.clone(), per_rank).collect())
                .collect();
            Some(CartesianProduct::new(slots))
        })
        .flatten()
}

/// All k-subsets of `items`, in lexicographic index order.
struct Combinations {
    items: Vec<Card>,
    idx: Vec<usize>,
    done: bool,
}

impl Combinations {
    fn new(items: Vec<Card>, k: usize) -> Self {
        let done = k == 0 || k > items.len();
        Self {
            items,
            idx: (0..k).collect(),
            done,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.done {
            return None;
        }
        let combo = self.idx.iter().map(|&i| self.items[i]).collect();
        let (n, k) = (self.items.len(), self.idx.len());
        // Rightmost slot that can still move right.
        match (0..k).rev().find(|&i| self.idx[i] < n - k + i) {
            Some(i) => {
                self.idx[i] += 1;
                for j in i + 1..k {
                    self.idx[j] = self.idx[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(combo)
    }
}

/// One pick from every slot, concatenated, odometer order (last slot fastest).
struct CartesianProduct {
    slots: Vec<Vec<Vec<Card>>>,
    idx: Vec<usize>,
    done: bool,
}

impl CartesianProduct {
    fn new(slots: Vec<Vec<Vec<Card>>>) -> Self {
        let done = slots.is_empty() || slots.iter().any(|s| s.is_empty());
        Self {
            idx: vec![0; slots.len()],
            slots,
            done,
        }
    }
}

impl Iterator for CartesianProduct {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.done {
            return None;
        }
        let mut combo = Vec::new();
        for (slot, &i) in self.slots.iter().zip(&self.idx) {
            combo.extend_from_slice(&slot[i]);
        }

        let mut pos = self.slots.len();
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            self.idx[pos] += 1;
            if self.idx[pos] < self.slots[pos].len() {
                break;
            }
            self.idx[pos] = 0;
        }
        Some(combo)
    }
}
