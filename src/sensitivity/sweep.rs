use crate::*;

/// A one-dimensional sensitivity analysis around a decision node.
///
/// Each sample takes the source node's resources, overrides the swept
/// resource, rebuilds the tree from the source situation, and records the
/// LP equilibrium at the new root. A sample whose build fails, or whose
/// override ends the game on arrival, is logged and skipped; the rest of
/// the sweep continues.
#[derive(Debug)]
pub struct Sweep<'a> {
    scenario: &'a Scenario,
    source: &'a Node,
    config: SweepConfig,
}

impl<'a> Sweep<'a> {
    pub fn new(scenario: &'a Scenario, source: &'a Node, config: SweepConfig) -> anyhow::Result<Self> {
        config.validate()?;
        anyhow::ensure!(
            !source.is_terminal(),
            "cannot sweep from terminal node {}",
            source.id()
        );
        Ok(Self {
            scenario,
            source,
            config,
        })
    }

    pub fn len(&self) -> usize {
        self.config.len()
    }
    pub fn is_empty(&self) -> bool {
        self.config.is_empty()
    }

    /// Rebuild and solve for one value of the swept resource.
    pub fn sample(&self, value: Amount) -> anyhow::Result<SensitivityResult> {
        let state = self
            .source
            .resources()
            .with(self.config.resource_type, value);
        let tree = TreeBuilder::from(self.scenario)
            .rooted(self.source.state.situation_id, state)
            .build()?;
        let Some(root) = LpSolver::solve(&tree).strategy(tree.root()) else {
            anyhow::bail!("root {} is terminal", tree.root());
        };
        Ok(SensitivityResult {
            parameter_value: value,
            player_strategies: root.player_strategy,
            opponent_strategies: root.opponent_strategy,
        })
    }

    /// Run every sample in order. `report` sees `(current, total, result)`
    /// after each sample, with `None` for a skipped one. Cancellation is
    /// checked before each sample; the results gathered so far are returned.
    pub fn run<F>(&self, control: &Control, mut report: F) -> Vec<SensitivityResult>
    where
        F: FnMut(usize, usize, Option<&SensitivityResult>),
    {
        let total = self.len();
        let mut results = Vec::with_capacity(total);
        log::info!("sweeping {} over {} samples", self.config, total);
        for (i, value) in self.config.values().enumerate() {
            if control.is_cancelled() {
                log::info!("sweep cancelled after {}/{} samples", i, total);
                break;
            }
            match self.sample(value) {
                Ok(result) => {
                    log::debug!("{}", result);
                    report(i + 1, total, Some(&result));
                    results.push(result);
                }
                Err(e) => {
                    log::warn!("skipping {} = {}: {}", self.config.resource_type, value, e);
                    report(i + 1, total, None);
                }
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ResourceType::*;

    fn root(tree: &GameTree) -> &Node {
        tree.head().unwrap()
    }

    #[test]
    fn coverage() {
        let scenario = frame_trap();
        let tree = TreeBuilder::from(&scenario).build().unwrap();
        let config = SweepConfig {
            resource_type: OpponentHealth,
            min: 1000,
            max: 10000,
            step: 2000,
        };
        let sweep = Sweep::new(&scenario, root(&tree), config).unwrap();
        let mut ticks = Vec::new();
        let results = sweep.run(&Control::default(), |current, total, _| ticks.push((current, total)));
        assert_eq!(results.len(), 5);
        assert_eq!(ticks, vec![(1, 5), (2, 5), (3, 5), (4, 5), (5, 5)]);
        for result in results.iter() {
            assert!((result.player_strategies.total() - 1.).abs() < 1e-6, "{}", result);
            assert!((result.opponent_strategies.total() - 1.).abs() < 1e-6, "{}", result);
        }
        let values = results.iter().map(|r| r.parameter_value).collect::<Vec<_>>();
        assert_eq!(values, vec![1000, 3000, 5000, 7000, 9000]);
    }

    #[test]
    fn knockout_override() {
        let scenario = frame_trap();
        let tree = TreeBuilder::from(&scenario).build().unwrap();
        let config = SweepConfig {
            resource_type: OpponentHealth,
            min: 0,
            max: 4000,
            step: 2000,
        };
        let sweep = Sweep::new(&scenario, root(&tree), config).unwrap();
        assert!(sweep.sample(0).is_err());
        let mut ticks = Vec::new();
        let results = sweep.run(&Control::default(), |current, _, r| ticks.push((current, r.is_some())));
        assert_eq!(ticks, vec![(1, false), (2, true), (3, true)]);
        let values = results.iter().map(|r| r.parameter_value).collect::<Vec<_>>();
        assert_eq!(values, vec![2000, 4000]);
        for result in results.iter() {
            assert!((result.player_strategies.total() - 1.).abs() < 1e-6, "{}", result);
            assert!((result.opponent_strategies.total() - 1.).abs() < 1e-6, "{}", result);
        }
    }

    #[test]
    fn gauge() {
        let scenario = frame_trap();
        let tree = TreeBuilder::from(&scenario).build().unwrap();
        let config = SweepConfig {
            resource_type: OpponentOdGauge,
            min: 0,
            max: 3,
            step: 1,
        };
        let results = Sweep::new(&scenario, root(&tree), config)
            .unwrap()
            .run(&Control::default(), |_, _, _| {});
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].opponent_strategies.len(), 2);
        assert_eq!(results[3].opponent_strategies.len(), 3);
    }

    #[test]
    fn skipping() {
        let mut b = ScenarioBuilder::new("guarded");
        let start = b.situation("start");
        let end = b.terminal("end", CornerState::None);
        let go = b.player_action(start, "go");
        let risky = b.player_action(start, "risky");
        let wait = b.opponent_action(start, "wait");
        b.outcome(start, go, wait, end, &[(OpponentHealth, 10)]);
        b.transition(
            start,
            Transition {
                player_action_id: risky,
                opponent_action_id: wait,
                next_situation_id: 99,
                resource_consumptions: Vec::new(),
                resource_requirements: vec![Resource::from((PlayerSaGauge, 1))],
            },
        );
        b.resource(PlayerHealth, 100)
            .resource(OpponentHealth, 100)
            .resource(PlayerSaGauge, 0);
        let scenario = b.build().unwrap();
        let tree = TreeBuilder::from(&scenario).build().unwrap();
        let config = SweepConfig {
            resource_type: PlayerSaGauge,
            min: 0,
            max: 2,
            step: 1,
        };
        let mut skipped = 0;
        let results = Sweep::new(&scenario, root(&tree), config)
            .unwrap()
            .run(&Control::default(), |_, _, r| skipped += r.is_none() as usize);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].parameter_value, 0);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn cancellation() {
        let scenario = guriko_janken();
        let tree = TreeBuilder::from(&scenario).build().unwrap();
        let config = SweepConfig {
            resource_type: OpponentHealth,
            min: 10,
            max: 100,
            step: 10,
        };
        let control = Control::default();
        let sweep = Sweep::new(&scenario, root(&tree), config).unwrap();
        let results = sweep.run(&control, |current, _, _| {
            if current == 3 {
                control.cancel();
            }
        });
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn terminal_source() {
        let scenario = rock_paper_scissors();
        let tree = TreeBuilder::from(&scenario).build().unwrap();
        let leaf = tree.terminals().next().unwrap();
        let config = SweepConfig {
            resource_type: PlayerHealth,
            min: 0,
            max: 1,
            step: 1,
        };
        assert!(Sweep::new(&scenario, leaf, config).is_err());
    }
}
