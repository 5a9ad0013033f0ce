use crate::*;

/// Map a win probability linearly onto `[-SCALE, +SCALE]`.
pub fn win_probability(p: Probability) -> Utility {
    p * 2. * WIN_PROBABILITY_SCALE - WIN_PROBABILITY_SCALE
}

/// Damage dealt minus damage taken since the initial state.
pub fn damage_race(
    player_hp: Amount,
    opponent_hp: Amount,
    initial_player_hp: Amount,
    initial_opponent_hp: Amount,
) -> Utility {
    let dealt = initial_opponent_hp as Utility - opponent_hp as Utility;
    let taken = initial_player_hp as Utility - player_hp as Utility;
    dealt - taken
}

/// Number of won exchanges needed to remove `target_hp`: one lethal punish
/// preceded by as many base combos as it takes to bring the target within
/// lethal range.
pub fn turns_to_kill(target_hp: Amount, base_damage: Amount, lethal_damage: Amount) -> u32 {
    if lethal_damage >= target_hp {
        1
    } else {
        let remaining = target_hp.saturating_sub(lethal_damage) as u32;
        let base = base_damage.max(1) as u32;
        1 + remaining.div_ceil(base)
    }
}
