//! Running card-counting signal.

use crate::card::{NUM_RANKS, Rank};

/// Per-rank deltas of the Hi-Lo counting system: low cards (2-6) raise
/// the count, aces and ten-valued cards lower it, 7-9 are neutral.
pub const HI_LO: [i32; NUM_RANKS] = [-1, 1, 1, 1, 1, 1, 0, 0, 0, -1];

/// A running count over every card drawn from the shoe.
///
/// The count is a pure function of draw history: it observes each card
/// the moment it leaves the shoe (the dealer's hole card included) and
/// is zeroed only when the shoe is reshuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunningCount {
    /// Delta applied per rank; index `r - 1` holds rank `r`.
    values: [i32; NUM_RANKS],
    /// Accumulated count since the last reshuffle.
    running: i32,
}

impl RunningCount {
    /// Creates a zeroed count using the given per-rank delta table.
    #[must_use]
    pub const fn new(values: [i32; NUM_RANKS]) -> Self {
        Self { values, running: 0 }
    }

    /// Applies the delta for one drawn card.
    pub const fn observe(&mut self, rank: Rank) {
        self.running += self.values[rank as usize - 1];
    }

    /// Returns the current count.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.running
    }

    /// Zeroes the count. Called when the shoe is reshuffled.
    pub const fn reset(&mut self) {
        self.running = 0;
    }
}

impl Default for RunningCount {
    fn default() -> Self {
        Self::new(HI_LO)
    }
}
