//! The shoe: a depleting multiset of card ranks shared across rounds.

use rand::Rng;

use crate::card::{DECK_RANK_COUNTS, NUM_RANKS, Rank};

/// A multi-deck shoe tracked as per-rank remaining counts.
///
/// Drawing picks a rank with probability proportional to its remaining
/// count, which is equivalent to drawing uniformly without replacement
/// from the pooled cards. Between reshuffles the counts only ever
/// decrease.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    /// Remaining cards per rank; index `r - 1` holds rank `r`.
    counts: [u16; NUM_RANKS],
    /// Total remaining cards, kept in sync with `counts`.
    remaining: u16,
}

impl Shoe {
    /// Creates a fresh shoe of the given number of concatenated 52-card
    /// decks.
    #[must_use]
    pub fn new(decks: u8) -> Self {
        let mut counts = DECK_RANK_COUNTS;
        for count in &mut counts {
            *count *= u16::from(decks);
        }
        Self::from_counts(counts)
    }

    /// Creates a shoe with an arbitrary per-rank composition.
    #[must_use]
    pub fn from_counts(counts: [u16; NUM_RANKS]) -> Self {
        let remaining = counts.iter().sum();
        Self { counts, remaining }
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.remaining)
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Returns the remaining count for the given rank.
    #[must_use]
    pub const fn count_of(&self, rank: Rank) -> u16 {
        self.counts[rank as usize - 1]
    }

    /// Removes and returns one card drawn uniformly at random from the
    /// remaining multiset.
    ///
    /// # Panics
    ///
    /// Panics if the shoe is empty. The environment reshuffles before a
    /// round can deplete the shoe, so an empty draw is an invariant
    /// violation rather than a recoverable condition.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Rank {
        assert!(!self.is_empty(), "draw from an empty shoe");

        let mut pick = rng.random_range(0..self.remaining);
        for (index, count) in self.counts.iter_mut().enumerate() {
            if pick < *count {
                *count -= 1;
                self.remaining -= 1;
                return (index + 1) as Rank;
            }
            pick -= *count;
        }
        unreachable!("remaining is the sum of the per-rank counts")
    }
}
