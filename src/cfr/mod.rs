//! Counterfactual regret minimization over a materialized [`GameTree`].
//!
//! Every decision node is its own information set for both sides: the
//! state is fully observed and only the simultaneous choice is hidden.
//! Passes walk the tree in topological order, so converging paths are
//! aggregated rather than re-traversed.

mod accumulator;
mod batches;
mod progress;
mod site;
mod solver;

pub use accumulator::*;
pub use batches::*;
pub use progress::*;
pub use site::*;
pub use solver::*;
