//! Exact equilibria by linear programming.
//!
//! Every decision node is a zero-sum matrix game once its children are
//! valued, so a single post-order sweep of [`Minimax`] solves yields
//! both sides' equilibrium strategies and the value of every node.

mod minimax;
mod simplex;
mod solver;

pub use minimax::*;
pub use simplex::*;
pub use solver::*;
