//! Solve Binary
//!
//! Builds a scenario's game tree and solves it from the command line.
//! The scenario is either a JSON file or one of the bundled samples:
//! `rps`, `guriko`, `frametrap`.

use clap::Parser;
use frametrap::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Command {
    #[command(about = "Build the game tree and draw it")]
    Build {
        #[arg(required = true)]
        scenario: String,
    },
    #[command(about = "Solve every decision node exactly by linear programming")]
    Lp {
        #[arg(required = true)]
        scenario: String,
    },
    #[command(about = "Train counterfactual regret minimization by self-play")]
    Cfr {
        #[arg(required = true)]
        scenario: String,
        #[arg(long, default_value_t = CFR_ITERATIONS)]
        iterations: usize,
    },
    #[command(about = "Re-solve the root while sweeping one resource")]
    Sweep {
        #[arg(required = true)]
        scenario: String,
        #[arg(long)]
        resource: ResourceType,
        #[arg(long, default_value_t = 0)]
        min: Amount,
        #[arg(long)]
        max: Amount,
        #[arg(long, default_value_t = 1)]
        step: Amount,
    },
}

fn load(name: &str) -> anyhow::Result<Scenario> {
    match sample(name) {
        Some(scenario) => Ok(scenario),
        None => Ok(serde_json::from_str(&std::fs::read_to_string(name)?)?),
    }
}

fn build(scenario: &Scenario) -> anyhow::Result<GameTree> {
    Ok(TreeBuilder::from(scenario).build()?)
}

fn main() -> anyhow::Result<()> {
    log()?;
    match Command::parse() {
        Command::Build { scenario } => {
            let tree = build(&load(&scenario)?)?;
            log::info!("\n{}", tree);
        }
        Command::Lp { scenario } => {
            let tree = build(&load(&scenario)?)?;
            let solver = LpSolver::solve(&tree);
            for data in solver.strategies().values() {
                log::info!("\n{}", data);
            }
        }
        Command::Cfr {
            scenario,
            iterations,
        } => {
            let tree = build(&load(&scenario)?)?;
            let mut solver = CfrSolver::from(&tree);
            solver.run(iterations, &Control::default(), |_, progress| {
                log::info!("{}", progress)
            });
            log::info!("\n{}", solver);
        }
        Command::Sweep {
            scenario,
            resource,
            min,
            max,
            step,
        } => {
            let scenario = load(&scenario)?;
            let tree = build(&scenario)?;
            let root = tree
                .head()
                .ok_or_else(|| anyhow::anyhow!("root {} is missing", tree.root()))?;
            let config = SweepConfig {
                resource_type: resource,
                min,
                max,
                step,
            };
            let results = Sweep::new(&scenario, root, config)?.run(&Control::default(), |_, _, _| {});
            for result in results.iter() {
                log::info!("\n{}", result);
            }
        }
    }
    Ok(())
}
