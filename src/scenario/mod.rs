//! Author-supplied scenario descriptions.
//!
//! A [`Scenario`] is a catalog of decision [`Situation`]s and absorbing
//! [`TerminalSituation`]s, a root situation, an initial [`DynamicState`],
//! and the [`RewardConfig`](crate::RewardConfig) used to score terminals.
//! Scenarios are immutable inputs to the tree builder.

mod action;
mod builder;
mod resource;
mod samples;
mod scenario;
mod situation;
mod state;
mod terminal;

pub use action::*;
pub use builder::*;
pub use resource::*;
pub use samples::*;
pub use scenario::*;
pub use situation::*;
pub use state::*;
pub use terminal::*;
