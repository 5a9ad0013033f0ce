use crate::*;

/// Strategy vectors for both sides at every site, indexed by [`Side::index`].
type Profile = Vec<[Vec<Probability>; 2]>;

/// Full-width counterfactual regret minimization.
///
/// Each iteration runs one pass per side, player first. A pass snapshots
/// both sides' regret-matched strategies, pushes reach probabilities down
/// the tree, pulls expected values up, and folds the counterfactual
/// regrets and reach-weighted strategies into each node's
/// [`Accumulator`]. The average strategy converges to a Nash equilibrium
/// of the zero-sum game; the current strategy need not.
pub struct CfrSolver {
    topology: Topology,
    sites: Vec<Site>,
    accumulators: Vec<[Accumulator; 2]>,
    order: Vec<usize>,
    epochs: usize,
}

impl From<&GameTree> for CfrSolver {
    fn from(tree: &GameTree) -> Self {
        let topology = tree.topology();
        let sites = topology
            .graph()
            .node_indices()
            .map(|x| Site::new(tree.node(topology.id(x)), &topology))
            .collect::<Vec<_>>();
        let accumulators = sites
            .iter()
            .map(|s| Side::ALL.map(|side| Accumulator::new(s.width(side))))
            .collect();
        let order = topology.postorder().into_iter().map(|x| x.index()).collect();
        Self {
            topology,
            sites,
            accumulators,
            order,
            epochs: 0,
        }
    }
}

impl CfrSolver {
    pub fn epochs(&self) -> usize {
        self.epochs
    }

    /// Train for a fixed number of iterations with no reporting.
    pub fn solve(mut self, iterations: usize) -> Self {
        for _ in 0..iterations {
            self.iterate();
        }
        self
    }

    /// Iterate batch by batch.
    pub fn batches(&mut self, iterations: usize) -> Batches<'_> {
        Batches::new(self, iterations)
    }

    /// Train in batches, reporting after each one and honoring the control
    /// flags between batches. `report` sees the solver as of the batch just
    /// finished. Returns `false` if the run was cancelled.
    pub fn run<F>(&mut self, iterations: usize, control: &Control, mut report: F) -> bool
    where
        F: FnMut(&CfrSolver, Progress),
    {
        log::info!("cfr training {} iterations over {} nodes", iterations, self.sites.len());
        let mut batches = self.batches(iterations);
        loop {
            if !control.proceed() {
                log::info!("cfr cancelled at iteration {}/{}", batches.done(), iterations);
                return false;
            }
            match batches.next() {
                Some(progress) => {
                    log::debug!("{}", progress);
                    report(batches.solver(), progress);
                }
                None => break,
            }
        }
        log::info!("cfr finished, exploitability {:.4}", self.exploitability());
        true
    }

    /// One iteration: a regret update for each side in turn.
    pub fn iterate(&mut self) {
        for side in Side::ALL {
            self.pass(side);
        }
        self.epochs += 1;
    }

    /// Sum of both sides' best-response gains against the average strategy,
    /// halved. Zero exactly at equilibrium.
    pub fn exploitability(&self) -> Utility {
        let ref average = self.averaged();
        let root = self.topology.root().index();
        Side::ALL
            .iter()
            .map(|&side| self.respond(side, average)[root])
            .sum::<Utility>()
            / 2.
    }

    /// Expected player payoff at the root when both sides play their
    /// average strategies.
    pub fn value(&self) -> Utility {
        let ref average = self.averaged();
        self.values(Side::Player, average)[self.topology.root().index()]
    }

    fn pass(&mut self, side: Side) {
        let ref sigma = self.iterated();
        let reach = self.reach(sigma);
        let value = self.values(side, sigma);
        for &x in self.order.iter() {
            let site = &self.sites[x];
            if site.is_terminal() {
                continue;
            }
            let gains = site.gains(side, &sigma[x], &value);
            self.accumulators[x][side.index()].accumulate(
                reach[x][side.other().index()],
                reach[x][side.index()],
                &gains,
                value[x],
                &sigma[x][side.index()],
            );
        }
    }

    fn iterated(&self) -> Profile {
        self.accumulators
            .iter()
            .map(|[p, o]| [p.iterated(), o.iterated()])
            .collect()
    }

    fn averaged(&self) -> Profile {
        self.accumulators
            .iter()
            .map(|[p, o]| [p.averaged(), o.averaged()])
            .collect()
    }

    /// Per-side reach probabilities, parents before children. Each side's
    /// reach only multiplies its own action probabilities, summed over every
    /// cell that leads into a node.
    fn reach(&self, sigma: &Profile) -> Vec<[Probability; 2]> {
        let mut reach = vec![[0.; 2]; self.sites.len()];
        reach[self.topology.root().index()] = [1.; 2];
        for &x in self.order.iter().rev() {
            let [player, opponent] = reach[x];
            for cell in self.sites[x].cells() {
                reach[cell.child][0] += player * sigma[x][0][cell.row];
                reach[cell.child][1] += opponent * sigma[x][1][cell.col];
            }
        }
        reach
    }

    /// Expected value for `side` at every node, children before parents.
    fn values(&self, side: Side, sigma: &Profile) -> Vec<Utility> {
        let mut value = vec![0.; self.sites.len()];
        for &x in self.order.iter() {
            value[x] = self.sites[x].expectation(side, &sigma[x], &value);
        }
        value
    }

    /// Best-response value for `side` at every node against `sigma`.
    fn respond(&self, side: Side, sigma: &Profile) -> Vec<Utility> {
        let mut value = vec![0.; self.sites.len()];
        for &x in self.order.iter() {
            value[x] = self.sites[x].best(side, &sigma[x], &value);
        }
        value
    }

    fn data(&self, x: usize) -> Option<StrategyData> {
        let site = self.sites.get(x)?;
        if site.is_terminal() {
            return None;
        }
        let [player, opponent] = &self.accumulators[x];
        Some(StrategyData {
            node_id: self.topology.id(petgraph::graph::NodeIndex::new(x)).clone(),
            player_strategy: Policy::normalized(site.actions(Side::Player), player.weight()),
            opponent_strategy: Policy::normalized(site.actions(Side::Opponent), opponent.weight()),
        })
    }
}

impl Solver for CfrSolver {
    fn strategy(&self, node: &NodeId) -> Option<StrategyData> {
        self.data(self.topology.index(node)?.index())
    }
    fn strategies(&self) -> Strategies {
        (0..self.sites.len())
            .filter_map(|x| self.data(x))
            .map(|data| (data.node_id.clone(), data))
            .collect()
    }
}

#[rustfmt::skip]
impl std::fmt::Display for CfrSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Epochs: {}  Exploitability: {:.4}", self.epochs, self.exploitability())?;
        writeln!(f, "┌──────────────────────────┬──────────┬────────┬──────────┬──────────┐")?;
        writeln!(f, "│ Node                     │ Side     │ Action │ ∑ Regret │  Average │")?;
        writeln!(f, "├──────────────────────────┼──────────┼────────┼──────────┼──────────┤")?;
        for &x in self.order.iter().rev() {
            let site = &self.sites[x];
            if site.is_terminal() {
                continue;
            }
            let id = self.topology.id(petgraph::graph::NodeIndex::new(x)).to_string();
            for side in Side::ALL {
                let acc = &self.accumulators[x][side.index()];
                let average = acc.averaged();
                for (i, action) in site.actions(side).iter().enumerate() {
                    writeln!(
                        f,
                        "│ {:<24.24} │ {:<8} │ {:>6} │ {:>+8.2} │ {:>8.4} │",
                        id,
                        side.to_string(),
                        action,
                        acc.regret()[i],
                        average[i],
                    )?;
                }
            }
        }
        write!(f, "└──────────────────────────┴──────────┴────────┴──────────┴──────────┘")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved(scenario: Scenario, iterations: usize) -> (GameTree, CfrSolver) {
        let tree = TreeBuilder::from(&scenario).build().unwrap();
        let solver = CfrSolver::from(&tree).solve(iterations);
        (tree, solver)
    }

    #[rustfmt::skip]
    fn equilibrium(solver: &CfrSolver, tree: &GameTree, expected: [Probability; 3], tolerance: Probability) {
        let data = solver.strategy(tree.root()).unwrap();
        for side in Side::ALL {
            let policy = data.of(side);
            for (ap, target) in policy.iter().zip(expected.iter()) {
                assert!((ap.probability - target).abs() < tolerance, "{} {}: {:.4} ≠ {:.4}", side, ap.action_id, ap.probability, target);
            }
        }
    }

    macro_rules! convergence {
        ($name:ident, $scenario:expr, $expected:expr, $N:expr, $E:expr) => {
            paste::paste! {
                #[test]
                fn [<$name _convergence>]() {
                    let (tree, solver) = solved($scenario, $N);
                    equilibrium(&solver, &tree, $expected, $E);
                }
            }
        };
    }

    #[rustfmt::skip] convergence!(rps,    rock_paper_scissors(), [1. / 3.; 3],                 CFR_ITERATIONS, 0.05);
    #[rustfmt::skip] convergence!(guriko, guriko_janken(),       [5. / 14., 6. / 14., 3. / 14.], CFR_ITERATIONS, 0.05);

    #[test]
    fn exploitability() {
        let (_, early) = solved(guriko_janken(), 100);
        let (_, late) = solved(guriko_janken(), CFR_ITERATIONS);
        let e100 = early.exploitability();
        let e10k = late.exploitability();
        assert!(e10k < e100, "{:.4} >= {:.4}", e10k, e100);
        assert!(e10k < 0.1, "{:.4}", e10k);
        assert!(e10k >= -1e-9);
        assert!(late.value().abs() < 0.1);
    }

    #[test]
    fn normalization() {
        let (tree, solver) = solved(frame_trap(), 200);
        let strategies = solver.strategies();
        assert_eq!(strategies.len(), tree.decisions().count());
        for data in strategies.values() {
            for side in Side::ALL {
                assert!((data.of(side).total() - 1.).abs() < 1e-6, "{}", data);
            }
        }
        for node in tree.terminals() {
            assert!(solver.strategy(node.id()).is_none());
        }
        assert!(solver.strategy(&NodeId::from("nowhere")).is_none());
    }

    #[test]
    fn batching() {
        let tree = TreeBuilder::from(&guriko_janken()).build().unwrap();
        let mut solver = CfrSolver::from(&tree);
        let mut reports = Vec::new();
        assert!(solver.run(1000, &Control::default(), |_, p| reports.push(p)));
        assert_eq!(reports.len(), CFR_BATCH_COUNT);
        assert_eq!(reports.last().map(|p| p.iteration), Some(1000));
        assert_eq!(solver.epochs(), 1000);
        let mut small = CfrSolver::from(&tree);
        let mut count = 0;
        assert!(small.run(7, &Control::default(), |s, _| {
            count += 1;
            assert_eq!(s.epochs(), count);
        }));
        assert_eq!(count, 7);
    }

    #[test]
    fn cancellation() {
        let tree = TreeBuilder::from(&rock_paper_scissors()).build().unwrap();
        let mut solver = CfrSolver::from(&tree);
        let control = Control::default();
        control.cancel();
        assert!(!solver.run(1000, &control, |_, _| panic!("no batch should run")));
        assert_eq!(solver.epochs(), 0);
        let data = solver.strategy(tree.root()).unwrap();
        assert!((data.player_strategy.density(&1) - 1. / 3.).abs() < 1e-12);
    }
}
