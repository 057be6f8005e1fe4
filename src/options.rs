//! Environment configuration options.

use crate::card::NUM_RANKS;
use crate::count::HI_LO;

/// Configuration options for a blackjack environment.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjgym::EnvOptions;
///
/// let options = EnvOptions::default()
///     .with_natural(true)
///     .with_decks(6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvOptions {
    /// Whether a natural blackjack win on a stand pays 3:2 (reward 1.5)
    /// instead of even money.
    pub natural: bool,
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Reshuffle threshold: at reset, a shoe holding fewer cards than
    /// this is replaced before dealing. Must leave enough cards to finish
    /// a round without depleting the shoe.
    pub reshuffle_at: u16,
    /// Per-rank counting deltas; index `r - 1` holds the delta for rank
    /// `r`.
    pub count_values: [i32; NUM_RANKS],
}

impl Default for EnvOptions {
    fn default() -> Self {
        Self {
            natural: false,
            decks: 4,
            reshuffle_at: 15,
            count_values: HI_LO,
        }
    }
}

impl EnvOptions {
    /// Sets whether a natural blackjack pays 3:2.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgym::EnvOptions;
    ///
    /// let options = EnvOptions::default().with_natural(true);
    /// assert!(options.natural);
    /// ```
    #[must_use]
    pub const fn with_natural(mut self, natural: bool) -> Self {
        self.natural = natural;
        self
    }

    /// Sets the number of decks in the shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgym::EnvOptions;
    ///
    /// let options = EnvOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgym::EnvOptions;
    ///
    /// let options = EnvOptions::default().with_reshuffle_at(26);
    /// assert_eq!(options.reshuffle_at, 26);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_at(mut self, reshuffle_at: u16) -> Self {
        self.reshuffle_at = reshuffle_at;
        self
    }

    /// Sets the per-rank counting deltas.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgym::EnvOptions;
    ///
    /// // Count only ten-valued cards.
    /// let options =
    ///     EnvOptions::default().with_count_values([0, 0, 0, 0, 0, 0, 0, 0, 0, -1]);
    /// assert_eq!(options.count_values[9], -1);
    /// ```
    #[must_use]
    pub const fn with_count_values(mut self, count_values: [i32; NUM_RANKS]) -> Self {
        self.count_values = count_values;
        self
    }
}
