//! Terminal payoffs.
//!
//! Every terminal outcome is scored as a strictly zero-sum [`Reward`].
//! The [`RewardConfig`] attached to a scenario selects how terminal
//! resource states translate into the player's payoff.

mod config;
mod method;
mod model;
mod outcome;
mod reward;

pub use config::*;
pub use method::*;
pub use model::*;
pub use outcome::*;
pub use reward::*;
