use crate::*;
use std::collections::HashMap;

/// Backward induction with an exact matrix-game solve at every node.
///
/// Children are valued before their parents, so each decision node sees a
/// fixed payoff table: the player's value of every filled cell, zero for
/// empty ones. The player's strategy and the node value come from that
/// table, the opponent's strategy from its mirror.
#[derive(Debug, Clone, Default)]
pub struct LpSolver {
    values: HashMap<NodeId, Utility>,
    strategies: Strategies,
}

impl LpSolver {
    pub fn solve(tree: &GameTree) -> Self {
        log::info!("lp solving {} nodes", tree.len());
        let topology = tree.topology();
        let mut solver = Self::default();
        for x in topology.postorder() {
            let id = topology.id(x);
            match tree.node(id) {
                Some(node) => solver.visit(node),
                None => log::warn!("node {} is referenced but missing", id),
            }
        }
        log::info!(
            "lp solved {} decision nodes, root value {:.4}",
            solver.strategies.len(),
            solver.value(tree.root()).unwrap_or_default()
        );
        solver
    }

    /// Player's equilibrium value at a node.
    pub fn value(&self, node: &NodeId) -> Option<Utility> {
        self.values.get(node).copied()
    }

    /// Player payoff table of a decision node, given its children's values.
    pub fn payoffs(&self, node: &Node) -> Table<Utility> {
        node.table().map(|cell| {
            cell.as_ref()
                .and_then(|child| self.value(child))
                .unwrap_or(0.)
        })
    }

    fn visit(&mut self, node: &Node) {
        if let Some(reward) = node.reward {
            self.values.insert(node.id().clone(), reward.player());
            return;
        }
        let payoffs = self.payoffs(node);
        let player = Minimax::solve(&payoffs);
        let opponent = Minimax::solve(&payoffs.mirror());
        let data = StrategyData {
            node_id: node.id().clone(),
            player_strategy: payoffs.rows().iter().copied().zip(player.strategy).collect(),
            opponent_strategy: payoffs.cols().iter().copied().zip(opponent.strategy).collect(),
        };
        self.values.insert(node.id().clone(), player.value);
        self.strategies.insert(node.id().clone(), data);
    }
}

impl Solver for LpSolver {
    fn strategy(&self, node: &NodeId) -> Option<StrategyData> {
        self.strategies.get(node).cloned()
    }
    fn strategies(&self) -> Strategies {
        self.strategies.clone()
    }
}
