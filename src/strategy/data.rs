use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Both sides' strategies at one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyData {
    pub node_id: NodeId,
    pub player_strategy: Policy,
    pub opponent_strategy: Policy,
}

impl StrategyData {
    pub fn of(&self, side: Side) -> &Policy {
        match side {
            Side::Player => &self.player_strategy,
            Side::Opponent => &self.opponent_strategy,
        }
    }
}

/// Strategies of every decision node in a tree.
pub type Strategies = BTreeMap<NodeId, StrategyData>;

#[rustfmt::skip]
impl std::fmt::Display for StrategyData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.node_id)?;
        writeln!(f, "┌──────────┬────────┬─────────────┐")?;
        writeln!(f, "│ Side     │ Action │ Probability │")?;
        writeln!(f, "├──────────┼────────┼─────────────┤")?;
        for side in Side::ALL {
            for ap in self.of(side).iter() {
                writeln!(f, "│ {:<8} │ {:>6} │ {:>11.4} │", side.to_string(), ap.action_id, ap.probability)?;
            }
        }
        write!(f, "└──────────┴────────┴─────────────┘")
    }
}
