use frametrap::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_frame_trap_tree,
        building_attrition_tree,
        solving_lp_frame_trap,
        solving_cfr_rps,
        solving_cfr_guriko,
        sweeping_frame_trap_health,
}

/// Repeated chip damage until one side drops: a long chain of distinct
/// states through the same two situations.
fn attrition() -> Scenario {
    use ResourceType::*;
    let mut b = ScenarioBuilder::new("attrition");
    let neutral = b.situation("neutral");
    let reset = b.terminal("reset", CornerState::None);
    let poke = b.player_action(neutral, "poke");
    let block = b.player_action(neutral, "block");
    let jab = b.opponent_action(neutral, "jab");
    let wait = b.opponent_action(neutral, "wait");
    b.outcome(neutral, poke, jab, neutral, &[(PlayerHealth, 300), (OpponentHealth, 300)])
        .outcome(neutral, poke, wait, neutral, &[(OpponentHealth, 500)])
        .outcome(neutral, block, jab, neutral, &[(PlayerHealth, 100)])
        .outcome(neutral, block, wait, reset, &[]);
    b.resource(PlayerHealth, 10000)
        .resource(OpponentHealth, 10000)
        .reward(RewardConfig::from(RewardMethod::WinProbability));
    b.build().unwrap()
}

fn building_frame_trap_tree(c: &mut criterion::Criterion) {
    let scenario = frame_trap();
    c.bench_function("build the frame trap GameTree", |b| {
        b.iter(|| TreeBuilder::from(&scenario).build().unwrap())
    });
}

fn building_attrition_tree(c: &mut criterion::Criterion) {
    let scenario = attrition();
    c.bench_function("build a chip-damage GameTree", |b| {
        b.iter(|| TreeBuilder::from(&scenario).build().unwrap())
    });
}

fn solving_lp_frame_trap(c: &mut criterion::Criterion) {
    let tree = TreeBuilder::from(&frame_trap()).build().unwrap();
    c.bench_function("solve the frame trap by LP", |b| {
        b.iter(|| LpSolver::solve(&tree))
    });
}

fn solving_cfr_rps(c: &mut criterion::Criterion) {
    let tree = TreeBuilder::from(&rock_paper_scissors()).build().unwrap();
    c.bench_function("train 1000 CFR iterations on RPS", |b| {
        b.iter(|| CfrSolver::from(&tree).solve(1000))
    });
}

fn solving_cfr_guriko(c: &mut criterion::Criterion) {
    let tree = TreeBuilder::from(&guriko_janken()).build().unwrap();
    c.bench_function("train 1000 CFR iterations on Guriko", |b| {
        b.iter(|| CfrSolver::from(&tree).solve(1000))
    });
}

fn sweeping_frame_trap_health(c: &mut criterion::Criterion) {
    let scenario = frame_trap();
    let tree = TreeBuilder::from(&scenario).build().unwrap();
    let config = SweepConfig {
        resource_type: ResourceType::OpponentHealth,
        min: 1000,
        max: 10000,
        step: 1000,
    };
    c.bench_function("sweep opponent health over the frame trap", |b| {
        b.iter(|| {
            Sweep::new(&scenario, tree.head().unwrap(), config)
                .unwrap()
                .run(&Control::default(), |_, _, _| {})
        })
    });
}
