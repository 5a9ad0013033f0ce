use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Scoring parameters attached to a scenario.
///
/// Combo damages are what each side deals on a successful read without
/// resources. Bonuses are added to a lethal punish: `corner_bonus` when the
/// victim is cornered, and `od_bonus` / `sa_bonus` per stocked gauge unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RewardConfig {
    pub method: RewardMethod,
    pub player_combo_damage: Amount,
    pub opponent_combo_damage: Amount,
    pub corner_bonus: Amount,
    pub od_bonus: Amount,
    pub sa_bonus: Amount,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            method: RewardMethod::default(),
            player_combo_damage: 2000,
            opponent_combo_damage: 2000,
            corner_bonus: 500,
            od_bonus: 300,
            sa_bonus: 1500,
        }
    }
}

impl From<RewardMethod> for RewardConfig {
    fn from(method: RewardMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }
}

impl RewardConfig {
    /// Score a node that ended on a health knockout.
    pub fn settle(&self, outcome: Outcome, state: &DynamicState, initial: &DynamicState) -> Reward {
        match (outcome, self.method) {
            (Outcome::Draw, _) => Reward::from(0.),
            (_, RewardMethod::DamageRace) => Reward::from(self.race(state, initial)),
            (Outcome::Win, _) => Reward::from(win_probability(1.)),
            (Outcome::Lose, _) => Reward::from(win_probability(0.)),
        }
    }

    /// Score a node that reached a terminal situation with both sides standing.
    pub fn evaluate(&self, state: &DynamicState, initial: &DynamicState, corner: CornerState) -> Reward {
        match self.method {
            RewardMethod::DamageRace => Reward::from(self.race(state, initial)),
            RewardMethod::WinProbability => {
                Reward::from(win_probability(self.odds(state, CornerState::None, false)))
            }
            RewardMethod::WinProbabilityWithCornerAndGauge => {
                Reward::from(win_probability(self.odds(state, corner, true)))
            }
        }
    }

    fn race(&self, state: &DynamicState, initial: &DynamicState) -> Utility {
        damage_race(
            state.player_health(),
            state.opponent_health(),
            initial.player_health(),
            initial.opponent_health(),
        )
    }

    /// Player win probability from both sides' turns-to-kill.
    fn odds(&self, state: &DynamicState, corner: CornerState, bonuses: bool) -> Probability {
        let player = turns_to_kill(
            state.opponent_health(),
            self.player_combo_damage,
            self.lethal(Side::Player, state, corner, bonuses),
        );
        let opponent = turns_to_kill(
            state.player_health(),
            self.opponent_combo_damage,
            self.lethal(Side::Opponent, state, corner, bonuses),
        );
        opponent as Probability / (player + opponent) as Probability
    }

    /// Damage of the punish that ends the round for `side`.
    fn lethal(&self, side: Side, state: &DynamicState, corner: CornerState, bonuses: bool) -> Amount {
        let (base, cornered, od, sa) = match side {
            Side::Player => (
                self.player_combo_damage,
                corner == CornerState::OpponentInCorner,
                state.get(ResourceType::PlayerOdGauge),
                state.get(ResourceType::PlayerSaGauge),
            ),
            Side::Opponent => (
                self.opponent_combo_damage,
                corner == CornerState::PlayerInCorner,
                state.get(ResourceType::OpponentOdGauge),
                state.get(ResourceType::OpponentSaGauge),
            ),
        };
        match bonuses {
            false => base,
            true => {
                let corner = if cornered { self.corner_bonus } else { 0 };
                base.saturating_add(corner)
                    .saturating_add(od.saturating_mul(self.od_bonus))
                    .saturating_add(sa.saturating_mul(self.sa_bonus))
            }
        }
    }
}
