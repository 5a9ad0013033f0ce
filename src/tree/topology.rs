use crate::*;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;

/// The tree as a petgraph DAG for ordered traversal.
///
/// Vertices are node ids; every filled outcome-table cell becomes an edge
/// labeled with its `(player, opponent)` action pair, so converging cells
/// appear as parallel edges. Transitions to ids missing from the tree are
/// left out.
#[derive(Debug)]
pub struct Topology {
    graph: DiGraph<NodeId, (ActionId, ActionId)>,
    index: HashMap<NodeId, NodeIndex>,
    root: NodeIndex,
}

impl Topology {
    pub fn graph(&self) -> &DiGraph<NodeId, (ActionId, ActionId)> {
        &self.graph
    }
    pub fn root(&self) -> NodeIndex {
        self.root
    }
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
    pub fn index(&self, id: &NodeId) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }
    pub fn id(&self, index: NodeIndex) -> &NodeId {
        &self.graph[index]
    }
    /// Nodes reachable from the root, children before parents.
    pub fn postorder(&self) -> Vec<NodeIndex> {
        let mut dfs = petgraph::visit::DfsPostOrder::new(&self.graph, self.root);
        let mut order = Vec::with_capacity(self.len());
        while let Some(x) = dfs.next(&self.graph) {
            order.push(x);
        }
        order
    }
    /// Longest root-to-leaf path, counted in edges.
    pub fn depth(&self) -> usize {
        let mut depth = vec![0usize; self.len()];
        for x in self.postorder() {
            depth[x.index()] = self
                .graph
                .neighbors_directed(x, petgraph::Outgoing)
                .map(|child| depth[child.index()] + 1)
                .max()
                .unwrap_or(0);
        }
        depth.get(self.root.index()).copied().unwrap_or(0)
    }
}

impl From<&GameTree> for Topology {
    fn from(tree: &GameTree) -> Self {
        let mut graph = DiGraph::with_capacity(tree.len(), tree.len());
        let mut index = HashMap::with_capacity(tree.len());
        for id in tree.nodes().keys() {
            index.insert(id.clone(), graph.add_node(id.clone()));
        }
        for (id, node) in tree.nodes() {
            let head = index[id];
            for t in node.transitions.iter() {
                match index.get(&t.next_node_id) {
                    Some(&tail) => {
                        graph.add_edge(head, tail, (t.player_action_id, t.opponent_action_id));
                    }
                    None => log::warn!("dangling transition {} -> {}", id, t.next_node_id),
                }
            }
        }
        let root = match index.get(tree.root()) {
            Some(&root) => root,
            None => graph.add_node(tree.root().clone()),
        };
        Self { graph, index, root }
    }
}
