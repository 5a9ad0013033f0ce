use serde::Deserialize;
use serde::Serialize;

/// How terminal states are scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RewardMethod {
    /// Win probability from turns-to-kill on base combo damage alone.
    #[default]
    WinProbability,
    /// Win probability from turns-to-kill with corner and gauge bonuses.
    WinProbabilityWithCornerAndGauge,
    /// Raw damage differential since the root.
    DamageRace,
}

impl std::fmt::Display for RewardMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WinProbability => write!(f, "winProbability"),
            Self::WinProbabilityWithCornerAndGauge => write!(f, "winProbabilityWithCornerAndGauge"),
            Self::DamageRace => write!(f, "damageRace"),
        }
    }
}
