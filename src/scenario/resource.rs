use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Kinds of tracked resources. Declaration order is the canonical
/// ordering used when hashing a [`DynamicState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceType {
    PlayerHealth,
    OpponentHealth,
    PlayerOdGauge,
    OpponentOdGauge,
    PlayerSaGauge,
    OpponentSaGauge,
}

impl ResourceType {
    pub const ALL: [Self; 6] = [
        Self::PlayerHealth,
        Self::OpponentHealth,
        Self::PlayerOdGauge,
        Self::OpponentOdGauge,
        Self::PlayerSaGauge,
        Self::OpponentSaGauge,
    ];
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlayerHealth => write!(f, "playerHealth"),
            Self::OpponentHealth => write!(f, "opponentHealth"),
            Self::PlayerOdGauge => write!(f, "playerOdGauge"),
            Self::OpponentOdGauge => write!(f, "opponentOdGauge"),
            Self::PlayerSaGauge => write!(f, "playerSaGauge"),
            Self::OpponentSaGauge => write!(f, "opponentSaGauge"),
        }
    }
}

impl std::str::FromStr for ResourceType {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown resource type: {}", s))
    }
}

/// A quantity of one resource type. Used for initial states,
/// transition consumptions, and transition requirements alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub resource_type: ResourceType,
    pub value: Amount,
}

impl From<(ResourceType, Amount)> for Resource {
    fn from((resource_type, value): (ResourceType, Amount)) -> Self {
        Self {
            resource_type,
            value,
        }
    }
}
