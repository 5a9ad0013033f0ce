use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Who, if anyone, is pinned in the corner when a confrontation ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CornerState {
    #[default]
    None,
    PlayerInCorner,
    OpponentInCorner,
}

/// An absorbing situation. Reaching it ends the confrontation and the
/// reward is computed from the state on arrival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalSituation {
    pub situation_id: SituationId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub corner_state: CornerState,
}
