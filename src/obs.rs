//! Observation and step-result types returned to the decision-maker.

use crate::card::Rank;

/// A read-only snapshot of the round from the player's point of view.
///
/// Recomputed on demand; never cached by the environment. The type is
/// `Copy + Eq + Hash` so tabular agents can use it directly as a state
/// key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Observation {
    /// The player's current blackjack total (at most 31, since a round
    /// ends as soon as the player busts).
    pub player_total: u8,
    /// The dealer's face-up card.
    pub dealer_upcard: Rank,
    /// Whether the player holds an ace currently counted as 11.
    pub usable_ace: bool,
    /// The running count over all cards drawn since the last reshuffle.
    pub running_count: i32,
}

/// Auxiliary step metadata.
///
/// Carries nothing today; the slot exists so the step contract can grow
/// without breaking callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct StepInfo {}

/// The result of advancing the environment by one action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// The observation after the action was applied.
    pub observation: Observation,
    /// Reward for this step. Non-zero only on the terminal step, except
    /// that a non-busting hit pays 0 and keeps the round open.
    pub reward: f64,
    /// Whether the round is over. Once true, only a reset may follow.
    pub done: bool,
    /// Auxiliary metadata.
    pub info: StepInfo,
}
