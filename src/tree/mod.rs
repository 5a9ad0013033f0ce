//! Materialized game trees.
//!
//! The [`TreeBuilder`] expands a [`Scenario`](crate::Scenario) into a
//! [`GameTree`]: one [`Node`] per distinct `(situation, state)` pair reached
//! from the root, shared wherever paths converge. Solvers walk the tree
//! through its petgraph [`Topology`] and read payoffs through [`Table`]s.

mod builder;
mod error;
mod id;
mod node;
mod table;
mod topology;
mod tree;

pub use builder::*;
pub use error::*;
pub use id::*;
pub use node::*;
pub use table::*;
pub use topology::*;
pub use tree::*;
