//! A single-player blackjack round environment with optional `no_std`
//! support.
//!
//! The crate provides an [`Env`] type that models one casino blackjack
//! round at a time as a finite, turn-based decision process: discrete
//! actions (stand, hit, double) against a dealer on a fixed policy, with
//! a running card-counting signal tracked across rounds drawn from a
//! shared, depleting shoe. It is meant to be driven by an external
//! decision-maker through a reset/step loop.
//!
//! # Example
//!
//! ```
//! use bjgym::{Action, Env, EnvOptions};
//!
//! let mut env = Env::new(EnvOptions::default(), 42);
//! let mut obs = env.reset();
//! loop {
//!     let action = if obs.player_total < 17 { Action::Hit } else { Action::Stand };
//!     let transition = env.step(action).expect("round is in progress");
//!     obs = transition.observation;
//!     if transition.done {
//!         break;
//!     }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod count;
pub mod env;
pub mod error;
pub mod hand;
pub mod obs;
pub mod options;
pub mod shoe;

// Re-export main types
pub use card::{ACE, DECK_SIZE, NUM_RANKS, Rank, TEN};
pub use count::{HI_LO, RunningCount};
pub use env::{Action, Env, RoundState};
pub use error::{ActionError, StepError};
pub use hand::Hand;
pub use obs::{Observation, StepInfo, Transition};
pub use options::EnvOptions;
pub use shoe::Shoe;
