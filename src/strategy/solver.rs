use crate::*;

/// Read access to a solved strategy profile.
///
/// Both [`CfrSolver`] and [`LpSolver`] attach strategies to a tree without
/// mutating it; this is the view the worker protocol and the sensitivity
/// driver consume.
pub trait Solver {
    /// Strategy at one decision node, if the node exists and is not terminal.
    fn strategy(&self, node: &NodeId) -> Option<StrategyData>;
    /// Strategies at every decision node.
    fn strategies(&self) -> Strategies;
}
