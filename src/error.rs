//! Error types for environment operations.

use thiserror::Error;

/// Errors that can occur when decoding a raw action value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The value does not name one of the three legal actions.
    #[error("invalid action value: {0}")]
    InvalidValue(u8),
}

/// Errors that can occur when stepping the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// The round has ended; the next legal call is a reset.
    #[error("round is over; reset to start a new round")]
    RoundOver,
}
