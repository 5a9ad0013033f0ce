//! Reference scenarios with known equilibria.
use crate::*;

/// Plain rock-paper-scissors scored as a damage race: the winner of the
/// exchange deals one point. Equilibrium is uniform for both sides.
pub fn rock_paper_scissors() -> Scenario {
    janken("rock-paper-scissors", [1, 1, 1])
}

/// Guriko Janken: rock wins 3, scissors wins 5, paper wins 6.
/// Equilibrium is rock 5/14, scissors 6/14, paper 3/14 for both sides.
pub fn guriko_janken() -> Scenario {
    janken("guriko-janken", [3, 5, 6])
}

/// Rock, scissors, paper in that action order; `wins[i]` is the damage
/// dealt by winning with throw `i`.
fn janken(name: &str, wins: [Amount; 3]) -> Scenario {
    const NAMES: [&str; 3] = ["rock", "scissors", "paper"];
    let mut builder = ScenarioBuilder::new(name);
    let root = builder.situation("throw");
    let end = builder.terminal("settled", CornerState::None);
    let player = NAMES.map(|n| builder.player_action(root, n));
    let opponent = NAMES.map(|n| builder.opponent_action(root, n));
    for a in 0..3 {
        for b in 0..3 {
            // throw i beats throw (i + 1) % 3
            let consumption = match (a, b) {
                (a, b) if a == b => vec![],
                (a, b) if (a + 1) % 3 == b => vec![(ResourceType::OpponentHealth, wins[a])],
                (_, b) => vec![(ResourceType::PlayerHealth, wins[b])],
            };
            builder.outcome(root, player[a], opponent[b], end, &consumption);
        }
    }
    builder
        .resource(ResourceType::PlayerHealth, 100)
        .resource(ResourceType::OpponentHealth, 100)
        .reward(RewardConfig::from(RewardMethod::DamageRace));
    builder.build().expect("janken scenario is well formed")
}

/// A corner frame-trap loop.
///
/// The player pressures a cornered opponent who may mash, block, or spend
/// two bars of drive gauge on a reversal. Successful reads lead into
/// okizeme, which feeds back into the frame trap with less health on the
/// opponent's side, so every loop ends by knockout or by a reset.
pub fn frame_trap() -> Scenario {
    use ResourceType::*;
    let mut builder = ScenarioBuilder::new("frame-trap");
    let trap = builder.situation("frame trap");
    let oki = builder.situation("okizeme");
    let reset = builder.terminal("neutral reset", CornerState::None);
    let corner = builder.terminal("corner kept", CornerState::OpponentInCorner);
    let escape = builder.terminal("reversal escape", CornerState::PlayerInCorner);

    let pressure = builder.player_action(trap, "frame trap");
    let throw = builder.player_action(trap, "throw");
    let wait = builder.player_action(trap, "block");
    let mash = builder.opponent_action(trap, "mash");
    let guard = builder.opponent_action(trap, "block");
    let reversal = builder.opponent_action(trap, "drive reversal");

    builder
        .outcome(trap, pressure, mash, trap, &[(OpponentHealth, 2200)])
        .outcome(trap, pressure, guard, corner, &[(OpponentOdGauge, 1)])
        .outcome(trap, throw, mash, reset, &[(PlayerHealth, 500)])
        .outcome(trap, throw, guard, oki, &[(OpponentHealth, 1200)])
        .outcome(trap, wait, mash, oki, &[(OpponentHealth, 2500)])
        .outcome(trap, wait, guard, reset, &[]);
    for (player, next, consumptions) in [
        (pressure, escape, vec![(PlayerHealth, 1500), (OpponentOdGauge, 2)]),
        (throw, escape, vec![(PlayerHealth, 1500), (OpponentOdGauge, 2)]),
        (wait, oki, vec![(OpponentHealth, 3500), (OpponentOdGauge, 2)]),
    ] {
        builder.transition(
            trap,
            Transition {
                player_action_id: player,
                opponent_action_id: reversal,
                next_situation_id: next,
                resource_consumptions: consumptions.into_iter().map(Resource::from).collect(),
                resource_requirements: vec![Resource::from((OpponentOdGauge, 2))],
            },
        );
    }

    let meaty = builder.player_action(oki, "meaty");
    let shimmy = builder.player_action(oki, "shimmy");
    let wakeup_block = builder.opponent_action(oki, "block");
    let wakeup_throw = builder.opponent_action(oki, "throw");
    builder
        .outcome(oki, meaty, wakeup_block, trap, &[(OpponentHealth, 300)])
        .outcome(oki, meaty, wakeup_throw, trap, &[(OpponentHealth, 1500)])
        .outcome(oki, shimmy, wakeup_block, corner, &[])
        .outcome(oki, shimmy, wakeup_throw, corner, &[(OpponentHealth, 2800)]);

    builder
        .resource(PlayerHealth, 10000)
        .resource(OpponentHealth, 10000)
        .resource(PlayerOdGauge, 6)
        .resource(OpponentOdGauge, 6)
        .resource(PlayerSaGauge, 1)
        .resource(OpponentSaGauge, 1)
        .reward(RewardConfig::from(RewardMethod::WinProbabilityWithCornerAndGauge));
    builder.build().expect("frame trap scenario is well formed")
}

/// Look up a reference scenario by name.
pub fn sample(name: &str) -> Option<Scenario> {
    match name {
        "rps" => Some(rock_paper_scissors()),
        "guriko" => Some(guriko_janken()),
        "frametrap" => Some(frame_trap()),
        _ => None,
    }
}
