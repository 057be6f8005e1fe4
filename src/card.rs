//! Card ranks and deck composition.

/// A card rank.
///
/// `1` is an Ace, `2..=9` are number cards, and `10` stands for every
/// ten-valued card (10, Jack, Queen, King). Suits never influence a
/// blackjack round, so only the rank is tracked.
pub type Rank = u8;

/// Rank of an Ace.
pub const ACE: Rank = 1;

/// Rank shared by all ten-valued cards.
pub const TEN: Rank = 10;

/// Number of distinct ranks.
pub const NUM_RANKS: usize = 10;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Per-rank card counts in a single 52-card deck.
///
/// Index `r - 1` holds the count for rank `r`. Rank 10 folds 10, Jack,
/// Queen and King together, so it occurs four times as often as any
/// other rank.
pub const DECK_RANK_COUNTS: [u16; NUM_RANKS] = [4, 4, 4, 4, 4, 4, 4, 4, 4, 16];
