use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Result of a confrontation decided by health alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// `None` while both sides still have health. Untracked health never decides.
    pub fn judge(state: &DynamicState) -> Option<Self> {
        let ko = |kind| state.contains(kind) && state.get(kind) <= 0;
        match (ko(ResourceType::PlayerHealth), ko(ResourceType::OpponentHealth)) {
            (true, true) => Some(Self::Draw),
            (false, true) => Some(Self::Win),
            (true, false) => Some(Self::Lose),
            (false, false) => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Lose => write!(f, "lose"),
            Self::Draw => write!(f, "draw"),
        }
    }
}
