use crate::*;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;

/// A decision node whose outcome table is still being filled.
struct Frame<'a> {
    node: Node,
    situation: &'a Situation,
    cursor: usize,
    pending: Option<(ActionId, ActionId)>,
    skipped: BTreeSet<(Side, ActionId)>,
}

impl<'a> Frame<'a> {
    /// Next transition that exists in this node's state. Transitions whose
    /// requirements fail are remembered so their actions can be pruned.
    fn advance(&mut self) -> Option<&'a Transition> {
        let situation = self.situation;
        while let Some(t) = situation.transitions.get(self.cursor) {
            self.cursor += 1;
            if self.node.resources().satisfies(&t.resource_requirements) {
                return Some(t);
            }
            self.skipped.insert((Side::Player, t.player_action_id));
            self.skipped.insert((Side::Opponent, t.opponent_action_id));
        }
        None
    }

    fn attach(&mut self, (player, opponent): (ActionId, ActionId), child: NodeId) {
        self.node.transitions.push(NodeTransition {
            player_action_id: player,
            opponent_action_id: opponent,
            next_node_id: child,
        });
    }

    /// Drop actions whose every transition was filtered out by a requirement.
    /// A node left without actions on either side has nothing to decide and
    /// is scored like a terminal situation with nobody cornered.
    fn finish(mut self, config: &RewardConfig, initial: &DynamicState) -> Node {
        let skipped = std::mem::take(&mut self.skipped);
        let transitions = &self.node.transitions;
        let alive = |side: Side, action: &Action| {
            !skipped.contains(&(side, action.action_id))
                || transitions.iter().any(|t| match side {
                    Side::Player => t.player_action_id == action.action_id,
                    Side::Opponent => t.opponent_action_id == action.action_id,
                })
        };
        let player = self
            .node
            .player_actions
            .iter()
            .filter(|a| alive(Side::Player, *a))
            .cloned()
            .collect();
        let opponent = self
            .node
            .opponent_actions
            .iter()
            .filter(|a| alive(Side::Opponent, *a))
            .cloned()
            .collect();
        self.node.player_actions = player;
        self.node.opponent_actions = opponent;
        if self.node.player_actions.is_empty() || self.node.opponent_actions.is_empty() {
            let corner_state = CornerState::None;
            let reward = config.evaluate(self.node.resources(), initial, corner_state);
            let state = self.node.state;
            return Node::terminal(
                self.node.node_id,
                state.situation_id,
                state.name,
                NodeKind::Terminal { corner_state },
                state.resources,
                reward,
            );
        }
        self.node
    }
}

/// What a `(situation, state)` pair resolves to.
enum Resolved<'a> {
    /// Already materialized, or absorbing and materialized on the spot.
    Ready(NodeId),
    /// A fresh decision node that must be expanded.
    Expand(Frame<'a>),
}

/// Expands a [`Scenario`] into a [`GameTree`].
///
/// Expansion is depth-first over an explicit stack of frames, so tree
/// depth is bounded by memory rather than the call stack. Each
/// `(situation, state)` pair becomes exactly one node. A pair that is
/// re-entered while it is still being expanded is a cycle and aborts the
/// build, since only resource consumption can make a loop finite.
///
/// ```ignore
/// let tree = TreeBuilder::from(&scenario).build()?;
/// let subtree = TreeBuilder::from(&scenario).rooted(situation, state).build()?;
/// ```
pub struct TreeBuilder<'a> {
    scenario: &'a Scenario,
    situations: HashMap<SituationId, &'a Situation>,
    terminals: HashMap<SituationId, &'a TerminalSituation>,
    root: SituationId,
    initial: DynamicState,
    nodes: HashMap<NodeId, Node>,
    building: HashSet<NodeId>,
    stack: Vec<Frame<'a>>,
}

impl<'a> From<&'a Scenario> for TreeBuilder<'a> {
    fn from(scenario: &'a Scenario) -> Self {
        Self {
            scenario,
            situations: scenario
                .situations
                .iter()
                .map(|s| (s.situation_id, s))
                .collect(),
            terminals: scenario
                .terminal_situations
                .iter()
                .map(|t| (t.situation_id, t))
                .collect(),
            root: scenario.root_situation_id,
            initial: scenario.initial_dynamic_state.clone(),
            nodes: HashMap::new(),
            building: HashSet::new(),
            stack: Vec::new(),
        }
    }
}

impl<'a> TreeBuilder<'a> {
    /// Start from another situation and state. The new state also becomes
    /// the reference point for damage-race rewards.
    pub fn rooted(mut self, situation: SituationId, state: DynamicState) -> Self {
        self.root = situation;
        self.initial = state;
        self
    }

    pub fn build(mut self) -> Result<GameTree, BuildError> {
        let root = match self.resolve(self.root, self.initial.clone())? {
            Resolved::Ready(id) => id,
            Resolved::Expand(frame) => self.expand(frame)?,
        };
        let nodes = self.collect(&root);
        log::info!(
            "built {} tree from situation {}: {} nodes",
            self.scenario.name,
            self.root,
            nodes.len()
        );
        Ok(GameTree::new(root, nodes))
    }

    /// Depth-first expansion. A frame stays on the stack until all of its
    /// transitions are resolved, then is finalized into the node cache.
    fn expand(&mut self, root: Frame<'a>) -> Result<NodeId, BuildError> {
        self.stack.push(root);
        loop {
            let Some(frame) = self.stack.last_mut() else {
                unreachable!("expansion stack drained before the root finished");
            };
            match frame.advance() {
                Some(transition) => {
                    let cell = (transition.player_action_id, transition.opponent_action_id);
                    let state = frame.node.resources().consume(&transition.resource_consumptions);
                    match self.resolve(transition.next_situation_id, state)? {
                        Resolved::Ready(child) => self.top().attach(cell, child),
                        Resolved::Expand(child) => {
                            self.top().pending = Some(cell);
                            self.stack.push(child);
                        }
                    }
                }
                None => {
                    let Some(frame) = self.stack.pop() else {
                        unreachable!("frame vanished mid-expansion");
                    };
                    let node = frame.finish(&self.scenario.reward_config, &self.initial);
                    let id = node.id().clone();
                    log::debug!("materialized {} {}", id, node);
                    self.building.remove(&id);
                    self.nodes.insert(id.clone(), node);
                    match self.stack.last_mut() {
                        None => return Ok(id),
                        Some(parent) => match parent.pending.take() {
                            Some(cell) => parent.attach(cell, id),
                            None => unreachable!("parent frame without a pending cell"),
                        },
                    }
                }
            }
        }
    }

    fn top(&mut self) -> &mut Frame<'a> {
        match self.stack.last_mut() {
            Some(frame) => frame,
            None => unreachable!("no frame under expansion"),
        }
    }

    /// Materialize one `(situation, state)` pair: reuse, detect a cycle,
    /// settle a knockout, score a terminal situation, or open a frame.
    fn resolve(
        &mut self,
        situation: SituationId,
        state: DynamicState,
    ) -> Result<Resolved<'a>, BuildError> {
        let id = NodeId::from((situation, &state));
        if self.nodes.contains_key(&id) {
            return Ok(Resolved::Ready(id));
        }
        if self.building.contains(&id) {
            return Err(BuildError::cycle(situation, &state));
        }
        let config = self.scenario.reward_config;
        if let Some(outcome) = Outcome::judge(&state) {
            let reward = config.settle(outcome, &state, &self.initial);
            let name = self.scenario.name_of(situation).unwrap_or_default().to_string();
            let kind = NodeKind::Knockout { outcome };
            let node = Node::terminal(id.clone(), situation, name, kind, state, reward);
            log::debug!("materialized {} {}", id, node);
            self.nodes.insert(id.clone(), node);
            return Ok(Resolved::Ready(id));
        }
        if let Some(terminal) = self.terminals.get(&situation).copied() {
            let corner_state = terminal.corner_state;
            let reward = config.evaluate(&state, &self.initial, corner_state);
            let kind = NodeKind::Terminal { corner_state };
            let name = terminal.name.clone();
            let node = Node::terminal(id.clone(), situation, name, kind, state, reward);
            log::debug!("materialized {} {}", id, node);
            self.nodes.insert(id.clone(), node);
            return Ok(Resolved::Ready(id));
        }
        let Some(definition) = self.situations.get(&situation).copied() else {
            return Err(BuildError::missing(situation));
        };
        self.building.insert(id.clone());
        Ok(Resolved::Expand(Frame {
            node: Node::decision(id, definition, state),
            situation: definition,
            cursor: 0,
            pending: None,
            skipped: BTreeSet::new(),
        }))
    }

    /// Breadth-first walk from the root, visiting each node once.
    fn collect(&mut self, root: &NodeId) -> BTreeMap<NodeId, Node> {
        let mut nodes = BTreeMap::new();
        let mut queue = VecDeque::from([root.clone()]);
        while let Some(id) = queue.pop_front() {
            if nodes.contains_key(&id) {
                continue;
            }
            if let Some(node) = self.nodes.remove(&id) {
                queue.extend(node.children().into_iter().cloned());
                nodes.insert(id, node);
            }
        }
        nodes
    }
}
