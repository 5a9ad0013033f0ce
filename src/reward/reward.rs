use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Payoff pair at a terminal node. Always zero-sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    player: Utility,
    opponent: Utility,
}

impl Reward {
    pub fn player(&self) -> Utility {
        self.player
    }
    pub fn opponent(&self) -> Utility {
        self.opponent
    }
    /// Payoff from one side's perspective.
    pub fn of(&self, side: Side) -> Utility {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }
}

/// The player's payoff determines the pair.
impl From<Utility> for Reward {
    fn from(player: Utility) -> Self {
        Self {
            player,
            opponent: -player,
        }
    }
}

impl std::fmt::Display for Reward {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+.2} / {:+.2}", self.player, self.opponent)
    }
}
