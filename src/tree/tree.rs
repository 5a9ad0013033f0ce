use crate::*;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fmt::Formatter;
use std::fmt::Result;

/// A finite game tree. Every node is reachable from the root, and nodes
/// reached along several paths appear once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameTree {
    id: ID<GameTree>,
    root: NodeId,
    nodes: BTreeMap<NodeId, Node>,
}

impl GameTree {
    pub fn new(root: NodeId, nodes: BTreeMap<NodeId, Node>) -> Self {
        Self {
            id: ID::default(),
            root,
            nodes,
        }
    }
    pub fn id(&self) -> ID<GameTree> {
        self.id
    }
    pub fn root(&self) -> &NodeId {
        &self.root
    }
    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }
    pub fn head(&self) -> Option<&Node> {
        self.nodes.get(&self.root)
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn decisions(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(|n| !n.is_terminal())
    }
    pub fn terminals(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(|n| n.is_terminal())
    }
    pub fn topology(&self) -> Topology {
        Topology::from(self)
    }
    pub fn depth(&self) -> usize {
        self.topology().depth()
    }

    /// display the tree from the root, printing shared subtrees once
    fn draw(
        &self,
        f: &mut Formatter,
        topology: &Topology,
        x: NodeIndex,
        prefix: &str,
        seen: &mut HashSet<NodeIndex>,
    ) -> Result {
        if x == topology.root() {
            match self.node(topology.id(x)) {
                Some(node) => writeln!(f, "ROOT   {}", node)?,
                None => writeln!(f, "ROOT   {}", topology.id(x))?,
            }
        }
        if !seen.insert(x) {
            return Ok(());
        }
        let mut edges = topology
            .graph()
            .edges_directed(x, petgraph::Outgoing)
            .map(|e| (*e.weight(), e.target()))
            .collect::<Vec<_>>();
        edges.sort();
        let n = edges.len();
        for (i, ((player, opponent), child)) in edges.into_iter().enumerate() {
            let last = i == n - 1;
            let stem = if last { "└" } else { "├" };
            let gaps = if last { "    " } else { "│   " };
            let id = topology.id(child);
            let head = self
                .node(id)
                .map(|node| node.to_string())
                .unwrap_or_else(|| id.to_string());
            let again = if seen.contains(&child) { " ↺" } else { "" };
            writeln!(f, "{}{}──{}×{} → {}{}", prefix, stem, player, opponent, head, again)?;
            self.draw(f, topology, child, &format!("{}{}", prefix, gaps), seen)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for GameTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let topology = self.topology();
        self.draw(f, &topology, topology.root(), "", &mut HashSet::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition() {
        let tree = TreeBuilder::from(&guriko_janken()).build().unwrap();
        assert_eq!(tree.decisions().count(), 1);
        assert_eq!(tree.terminals().count(), 7);
        assert_eq!(tree.head().map(|n| n.is_terminal()), Some(false));
    }

    #[test]
    fn display() {
        let tree = TreeBuilder::from(&frame_trap()).build().unwrap();
        let text = tree.to_string();
        assert!(text.starts_with("ROOT   frame trap"));
        assert!(text.contains("↺"));
    }

    #[test]
    fn wire() {
        let tree = TreeBuilder::from(&frame_trap()).build().unwrap();
        let json = serde_json::to_string(&tree).unwrap();
        let back = serde_json::from_str::<GameTree>(&json).unwrap();
        assert_eq!(back.id(), tree.id());
        assert_eq!(back.root(), tree.root());
        assert_eq!(back.nodes(), tree.nodes());
    }
}
