//! The round engine: shoe, hands, counting, and the step/reset protocol.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Rank;
use crate::count::RunningCount;
use crate::hand::Hand;
use crate::obs::Observation;
use crate::options::EnvOptions;
use crate::shoe::Shoe;

mod actions;
mod dealer;
pub mod state;

pub use actions::Action;
pub use state::RoundState;

/// A single-player blackjack round environment.
///
/// The environment owns the shoe, the running count, both hands, and a
/// seedable random generator. It is driven by exactly one caller in
/// strict alternation: [`reset`] starts a round, then [`step`] is called
/// until the returned transition reports `done`.
///
/// The shoe and both hands are public so tests and tools can rig a known
/// table state before stepping.
///
/// [`reset`]: Env::reset
/// [`step`]: Env::step
#[derive(Debug, Clone)]
pub struct Env {
    /// Environment options.
    pub options: EnvOptions,
    /// The shoe, shared across rounds until reshuffled.
    pub shoe: Shoe,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand. The first card is the face-up card.
    pub dealer: Hand,
    /// Running count over all draws since the last reshuffle.
    count: RunningCount,
    /// Current round state.
    state: RoundState,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Env {
    /// Creates a new environment with a fresh shoe, a zeroed count, and
    /// the first round already dealt.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgym::{Env, EnvOptions};
    ///
    /// let env = Env::new(EnvOptions::default(), 42);
    /// assert_eq!(env.player.len(), 2);
    /// ```
    #[must_use]
    pub fn new(options: EnvOptions, seed: u64) -> Self {
        let mut env = Self {
            options,
            shoe: Shoe::new(options.decks),
            player: Hand::new(),
            dealer: Hand::new(),
            count: RunningCount::new(options.count_values),
            state: RoundState::RoundOver,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        env.reset();
        env
    }

    /// Reseeds the random generator and returns the effective seed.
    ///
    /// Passing `None` derives a fresh seed from the current generator
    /// stream; feeding the returned value back reproduces the run.
    pub fn seed(&mut self, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(|| self.rng.random());
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        seed
    }

    /// Starts a new round and returns the initial observation.
    ///
    /// If the shoe has dropped below the reshuffle threshold it is
    /// replaced with a fresh one and the running count is zeroed, before
    /// any card is dealt. The dealer hand is dealt first, then the
    /// player hand, two cards each.
    pub fn reset(&mut self) -> Observation {
        if self.shoe.len() < usize::from(self.options.reshuffle_at) {
            self.shoe = Shoe::new(self.options.decks);
            self.count.reset();
        }

        self.dealer = self.draw_hand();
        self.player = self.draw_hand();
        self.state = RoundState::AwaitingAction;

        self.observation()
    }

    /// Draws one card from the shoe and feeds it to the running count.
    pub(crate) fn draw_card(&mut self) -> Rank {
        let rank = self.shoe.draw(&mut self.rng);
        self.count.observe(rank);
        rank
    }

    /// Draws a fresh two-card hand.
    fn draw_hand(&mut self) -> Hand {
        let mut hand = Hand::new();
        hand.push(self.draw_card());
        hand.push(self.draw_card());
        hand
    }

    /// Returns the current observation.
    #[must_use]
    pub fn observation(&self) -> Observation {
        Observation {
            player_total: self.player.total(),
            dealer_upcard: self.dealer.upcard().unwrap_or_default(),
            usable_ace: self.player.usable_ace(),
            running_count: self.count.value(),
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns the running count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.count.value()
    }

    pub(crate) const fn set_state(&mut self, state: RoundState) {
        self.state = state;
    }
}
