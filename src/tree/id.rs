use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Identity of a tree node, derived from the situation it materializes and
/// the canonical hash of the resources on arrival. Two paths that reach the
/// same situation with the same resources share one node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<(SituationId, &DynamicState)> for NodeId {
    fn from((situation, state): (SituationId, &DynamicState)) -> Self {
        Self(format!("{}@{}", situation, state.state_hash()))
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
