use core::cmp::Ordering;

use crate::error::{ActionError, StepError};
use crate::obs::{StepInfo, Transition};

use super::dealer::margin_reward;
use super::{Env, RoundState};

/// A player decision, encoded as `0..=2` at the interface boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Keep the current hand and let the dealer play out.
    Stand = 0,
    /// Draw one card.
    Hit = 1,
    /// Draw exactly one card at doubled stakes, then end the round.
    Double = 2,
}

impl Action {
    /// All legal actions, in encoding order.
    pub const ALL: [Self; 3] = [Self::Stand, Self::Hit, Self::Double];

    /// Returns the wire encoding of this action.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Action {
    type Error = ActionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Stand),
            1 => Ok(Self::Hit),
            2 => Ok(Self::Double),
            other => Err(ActionError::InvalidValue(other)),
        }
    }
}

impl Env {
    /// Advances the round by one player decision.
    ///
    /// - `Hit` draws one card; a bust ends the round at reward -1,
    ///   otherwise the round stays open at reward 0.
    /// - `Double` draws exactly one card and ends the round: -2 on a
    ///   bust, otherwise twice the sign of the final margin against the
    ///   dealer. A push after a double pays 0, not a doubled refund.
    /// - `Stand` ends the round; the dealer plays out and the reward is
    ///   the sign of the final margin. With the `natural` option, a
    ///   natural two-card 21 that wins outright pays 1.5 instead of 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is already over.
    pub fn step(&mut self, action: Action) -> Result<Transition, StepError> {
        if self.state() != RoundState::AwaitingAction {
            return Err(StepError::RoundOver);
        }

        let (reward, done) = match action {
            Action::Hit => {
                let card = self.draw_card();
                self.player.push(card);
                if self.player.is_bust() {
                    self.set_state(RoundState::RoundOver);
                    (-1.0, true)
                } else {
                    (0.0, false)
                }
            }
            Action::Double => {
                let card = self.draw_card();
                self.player.push(card);
                self.set_state(RoundState::RoundOver);
                if self.player.is_bust() {
                    (-2.0, true)
                } else {
                    self.dealer_play();
                    (2.0 * margin_reward(self.round_margin()), true)
                }
            }
            Action::Stand => {
                self.set_state(RoundState::RoundOver);
                self.dealer_play();
                let margin = self.round_margin();
                let natural_win = self.options.natural
                    && self.player.is_natural()
                    && margin == Ordering::Greater;
                let reward = if natural_win {
                    1.5
                } else {
                    margin_reward(margin)
                };
                (reward, true)
            }
        };

        Ok(Transition {
            observation: self.observation(),
            reward,
            done,
            info: StepInfo::default(),
        })
    }
}
