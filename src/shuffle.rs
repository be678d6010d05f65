//! Neighbour order randomization

use crate::random::RandomSource;

/// How the candidate moves of a cell are reordered before exploring them
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum ShuffleStrategy {
    /// Swap each position against an index drawn from the whole slice.
    ///
    /// Not every permutation is equally likely. Seeded mazes generated with
    /// this order replay bit for bit.
    #[default]
    FullRange,
    /// Fisher-Yates: every permutation equally likely.
    Uniform,
}

impl ShuffleStrategy {
    pub fn apply<T, R: RandomSource + ?Sized>(self, items: &mut [T], rng: &mut R) {
        match self {
            ShuffleStrategy::FullRange => shuffle_full_range(items, rng),
            ShuffleStrategy::Uniform => shuffle_uniform(items, rng),
        }
    }
}

/// Walk a pointer from the end of `items` to the start, swapping the element
/// behind it with one drawn from anywhere in the slice.
///
/// Exactly `items.len()` draws of `below(items.len())` are made, each before
/// its swap.
pub fn shuffle_full_range<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    let len = items.len();
    let mut pointer = len;
    while pointer > 0 {
        let index = rng.below(len);
        pointer -= 1;
        items.swap(pointer, index);
    }
}

/// Canonical Fisher-Yates shuffle, `items.len() - 1` draws.
pub fn shuffle_uniform<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}
