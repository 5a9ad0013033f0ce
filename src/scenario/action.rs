use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// A move available to one side at a situation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub action_id: ActionId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Action {
    pub fn new(action_id: ActionId, name: &str) -> Self {
        Self {
            action_id,
            name: name.to_string(),
            description: String::new(),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
