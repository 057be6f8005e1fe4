//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Round in progress; the player may act.
    AwaitingAction,
    /// Round has ended; the next legal call is a reset.
    RoundOver,
}
