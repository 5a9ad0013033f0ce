use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// How a node came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "kind")]
pub enum NodeKind {
    /// Both sides choose an action.
    Decision,
    /// A terminal situation was reached with both sides standing.
    Terminal { corner_state: CornerState },
    /// Health ran out on the way in.
    Knockout { outcome: Outcome },
}

/// Where a node sits in the scenario and what both sides hold there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeState {
    pub situation_id: SituationId,
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    pub resources: DynamicState,
}

/// One filled cell of a node's outcome table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeTransition {
    pub player_action_id: ActionId,
    pub opponent_action_id: ActionId,
    pub next_node_id: NodeId,
}

/// A materialized `(situation, state)` pair.
///
/// Terminal nodes carry a reward and no actions; decision nodes carry
/// actions, transitions, and no reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub node_id: NodeId,
    pub state: NodeState,
    #[serde(default)]
    pub player_actions: Vec<Action>,
    #[serde(default)]
    pub opponent_actions: Vec<Action>,
    #[serde(default)]
    pub transitions: Vec<NodeTransition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<Reward>,
}

impl Node {
    /// Decision node for a situation, actions copied from the catalog and
    /// no transitions yet.
    pub fn decision(node_id: NodeId, situation: &Situation, resources: DynamicState) -> Self {
        Self {
            node_id,
            state: NodeState {
                situation_id: situation.situation_id,
                name: situation.name.clone(),
                kind: NodeKind::Decision,
                resources,
            },
            player_actions: situation.player_actions.clone(),
            opponent_actions: situation.opponent_actions.clone(),
            transitions: Vec::new(),
            reward: None,
        }
    }

    /// Absorbing node carrying its reward.
    pub fn terminal(
        node_id: NodeId,
        situation_id: SituationId,
        name: String,
        kind: NodeKind,
        resources: DynamicState,
        reward: Reward,
    ) -> Self {
        Self {
            node_id,
            state: NodeState {
                situation_id,
                name,
                kind,
                resources,
            },
            player_actions: Vec::new(),
            opponent_actions: Vec::new(),
            transitions: Vec::new(),
            reward: Some(reward),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.node_id
    }
    pub fn is_terminal(&self) -> bool {
        self.reward.is_some()
    }
    pub fn resources(&self) -> &DynamicState {
        &self.state.resources
    }
    pub fn actions(&self, side: Side) -> &[Action] {
        match side {
            Side::Player => &self.player_actions,
            Side::Opponent => &self.opponent_actions,
        }
    }
    pub fn action_ids(&self, side: Side) -> Vec<ActionId> {
        self.actions(side).iter().map(|a| a.action_id).collect()
    }
    /// Successor reached by an action pair, if that cell is filled.
    pub fn child(&self, player: ActionId, opponent: ActionId) -> Option<&NodeId> {
        self.transitions
            .iter()
            .find(|t| t.player_action_id == player && t.opponent_action_id == opponent)
            .map(|t| &t.next_node_id)
    }
    /// Distinct successors in transition order.
    pub fn children(&self) -> Vec<&NodeId> {
        let mut children = Vec::<&NodeId>::new();
        for t in self.transitions.iter() {
            if !children.contains(&&t.next_node_id) {
                children.push(&t.next_node_id);
            }
        }
        children
    }
    /// Outcome table indexed by (player action, opponent action).
    /// Cells without a transition are empty.
    pub fn table(&self) -> Table<Option<NodeId>> {
        let mut table = Table::filled(
            self.action_ids(Side::Player),
            self.action_ids(Side::Opponent),
            None,
        );
        for t in self.transitions.iter() {
            if let Some((r, c)) = table.position(t.player_action_id, t.opponent_action_id) {
                table.set(r, c, Some(t.next_node_id.clone()));
            }
        }
        table
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.state.kind, &self.reward) {
            (NodeKind::Knockout { outcome }, Some(reward)) => {
                write!(f, "{} {} [{}] {}", self.state.name, outcome, self.state.resources, reward)
            }
            (_, Some(reward)) => {
                write!(f, "{} [{}] {}", self.state.name, self.state.resources, reward)
            }
            (_, None) => write!(
                f,
                "{} [{}] {}x{}",
                self.state.name,
                self.state.resources,
                self.player_actions.len(),
                self.opponent_actions.len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> Node {
        let situation = Situation {
            situation_id: 0,
            name: "neutral".to_string(),
            description: String::new(),
            player_actions: vec![Action::new(1, "jab"), Action::new(2, "throw")],
            opponent_actions: vec![Action::new(3, "block"), Action::new(4, "jump")],
            transitions: Vec::new(),
        };
        let mut node = Node::decision(NodeId::from("root"), &situation, DynamicState::default());
        node.transitions.push(NodeTransition {
            player_action_id: 2,
            opponent_action_id: 3,
            next_node_id: NodeId::from("thrown"),
        });
        node.transitions.push(NodeTransition {
            player_action_id: 1,
            opponent_action_id: 4,
            next_node_id: NodeId::from("thrown"),
        });
        node
    }

    #[test]
    fn tabulation() {
        let table = node().table();
        assert_eq!(table.rows(), &[1, 2]);
        assert_eq!(table.cols(), &[3, 4]);
        assert_eq!(table.get(1, 0), &Some(NodeId::from("thrown")));
        assert_eq!(table.get(0, 0), &None);
        assert_eq!(table.lookup(1, 4), Some(&Some(NodeId::from("thrown"))));
    }

    #[test]
    fn children() {
        let node = node();
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.child(2, 3), Some(&NodeId::from("thrown")));
        assert_eq!(node.child(2, 4), None);
        assert!(!node.is_terminal());
    }

    #[test]
    fn wire() {
        let node = node();
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["state"]["kind"], "decision");
        assert!(json.get("reward").is_none());
        let back = serde_json::from_value::<Node>(json).unwrap();
        assert_eq!(back, node);
    }
}
