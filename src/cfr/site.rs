use crate::*;

/// One filled cell of a site's outcome table, addressed densely.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub child: usize,
}

impl Cell {
    /// `(own, other)` action positions from one side's perspective.
    pub fn orient(&self, side: Side) -> (usize, usize) {
        match side {
            Side::Player => (self.row, self.col),
            Side::Opponent => (self.col, self.row),
        }
    }
}

/// A tree node flattened for dense traversal: children are topology
/// indices instead of node ids.
#[derive(Debug, Clone)]
pub struct Site {
    actions: [Vec<ActionId>; 2],
    cells: Vec<Cell>,
    reward: Option<Reward>,
}

impl Site {
    /// Flatten a node. Nodes missing from the tree are scored as zero.
    pub fn new(node: Option<&Node>, topology: &Topology) -> Self {
        let Some(node) = node else {
            return Self {
                actions: [Vec::new(), Vec::new()],
                cells: Vec::new(),
                reward: Some(Reward::from(0.)),
            };
        };
        let table = node.table();
        let mut cells = Vec::with_capacity(node.transitions.len());
        for t in node.transitions.iter() {
            let position = table.position(t.player_action_id, t.opponent_action_id);
            let child = topology.index(&t.next_node_id);
            if let (Some((row, col)), Some(child)) = (position, child) {
                cells.push(Cell {
                    row,
                    col,
                    child: child.index(),
                });
            }
        }
        Self {
            actions: [table.rows().to_vec(), table.cols().to_vec()],
            cells,
            reward: node.reward,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.reward.is_some()
    }
    pub fn actions(&self, side: Side) -> &[ActionId] {
        &self.actions[side.index()]
    }
    pub fn width(&self, side: Side) -> usize {
        self.actions[side.index()].len()
    }
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Value of each of `side`'s actions when the other side plays its
    /// part of `sigma`. Empty cells are worth zero.
    pub fn gains(&self, side: Side, sigma: &[Vec<Probability>; 2], value: &[Utility]) -> Vec<Utility> {
        let mut gains = vec![0.; self.width(side)];
        let other = &sigma[side.other().index()];
        for cell in self.cells.iter() {
            let (own, theirs) = cell.orient(side);
            gains[own] += other[theirs] * value[cell.child];
        }
        gains
    }

    /// Expected value for `side` when both sides play `sigma`.
    pub fn expectation(&self, side: Side, sigma: &[Vec<Probability>; 2], value: &[Utility]) -> Utility {
        match self.reward {
            Some(reward) => reward.of(side),
            None => self
                .gains(side, sigma, value)
                .iter()
                .zip(sigma[side.index()].iter())
                .map(|(gain, p)| gain * p)
                .sum(),
        }
    }

    /// Value for `side` when it best-responds here to the other side's
    /// part of `sigma`.
    pub fn best(&self, side: Side, sigma: &[Vec<Probability>; 2], value: &[Utility]) -> Utility {
        match self.reward {
            Some(reward) => reward.of(side),
            None => self
                .gains(side, sigma, value)
                .into_iter()
                .reduce(Utility::max)
                .unwrap_or(0.),
        }
    }
}
