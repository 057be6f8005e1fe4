use core::cmp::Ordering;

use super::Env;

/// The dealer draws until reaching this total.
const DEALER_STANDS_AT: u8 = 17;

/// Maps a score margin to its unit reward: +1 win, 0 push, -1 loss.
pub(super) fn margin_reward(margin: Ordering) -> f64 {
    match margin {
        Ordering::Greater => 1.0,
        Ordering::Equal => 0.0,
        Ordering::Less => -1.0,
    }
}

impl Env {
    /// Plays out the dealer's hand: draw while the total is below 17.
    ///
    /// The policy never branches on the player's hand and does not stop
    /// early on a bust; it stops only once the total reaches 17 or more,
    /// bust or not. Each draw strictly raises the total, so the loop
    /// terminates.
    pub(super) fn dealer_play(&mut self) {
        while self.dealer.total() < DEALER_STANDS_AT {
            let card = self.draw_card();
            self.dealer.push(card);
        }
    }

    /// Compares the player's score against the dealer's (busts score 0).
    pub(super) fn round_margin(&self) -> Ordering {
        self.player.score().cmp(&self.dealer.score())
    }
}
