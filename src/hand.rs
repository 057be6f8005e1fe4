//! Hand representation and blackjack hand evaluation.

use alloc::vec::Vec;

use crate::card::{ACE, Rank, TEN};

/// Highest total a hand can reach without busting.
const BUST_LIMIT: u8 = 21;

/// An ordered sequence of drawn card ranks.
///
/// A hand starts empty, grows one card at a time, and is replaced wholesale
/// when a new round is dealt. Every evaluation walks the full hand, so a
/// card that invalidates a previously usable ace is picked up immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in draw order.
    cards: Vec<Rank>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given ranks, in order.
    #[must_use]
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        Self {
            cards: ranks.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn push(&mut self, rank: Rank) {
        self.cards.push(rank);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the first (face-up) card, if any has been dealt.
    #[must_use]
    pub fn upcard(&self) -> Option<Rank> {
        self.cards.first().copied()
    }

    /// Sum of the raw ranks, counting every ace as 1.
    fn raw_total(&self) -> u8 {
        self.cards.iter().fold(0u8, |total, &r| total.saturating_add(r))
    }

    /// Returns whether one ace can be counted as 11 without busting.
    #[must_use]
    pub fn usable_ace(&self) -> bool {
        self.cards.contains(&ACE) && self.raw_total() <= BUST_LIMIT - 10
    }

    /// Calculates the blackjack total of the hand.
    ///
    /// Aces count as 1, except that a single ace is promoted to 11 when
    /// that keeps the total at 21 or below.
    #[must_use]
    pub fn total(&self) -> u8 {
        let raw = self.raw_total();
        if self.usable_ace() { raw + 10 } else { raw }
    }

    /// Returns whether the hand is bust (total over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > BUST_LIMIT
    }

    /// Returns the hand's score for end-of-round comparison: the total,
    /// or 0 when bust.
    #[must_use]
    pub fn score(&self) -> u8 {
        if self.is_bust() { 0 } else { self.total() }
    }

    /// Returns whether the hand is a natural blackjack: an untouched
    /// two-card 21, one ace and one ten-valued card.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.cards.contains(&ACE) && self.cards.contains(&TEN)
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
