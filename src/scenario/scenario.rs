use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// A complete game definition: situation catalogs, where play starts,
/// what resources both sides start with, and how terminals are scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    pub root_situation_id: SituationId,
    pub situations: Vec<Situation>,
    #[serde(default)]
    pub terminal_situations: Vec<TerminalSituation>,
    pub initial_dynamic_state: DynamicState,
    #[serde(default)]
    pub reward_config: RewardConfig,
}

impl Scenario {
    pub fn situation(&self, id: SituationId) -> Option<&Situation> {
        self.situations.iter().find(|s| s.situation_id == id)
    }
    pub fn terminal(&self, id: SituationId) -> Option<&TerminalSituation> {
        self.terminal_situations.iter().find(|s| s.situation_id == id)
    }
    /// Display name of any situation, terminal or not.
    pub fn name_of(&self, id: SituationId) -> Option<&str> {
        self.situation(id)
            .map(|s| s.name.as_str())
            .or_else(|| self.terminal(id).map(|t| t.name.as_str()))
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} situations, {} terminals, {})",
            self.name,
            self.situations.len(),
            self.terminal_situations.len(),
            self.reward_config.method,
        )
    }
}
