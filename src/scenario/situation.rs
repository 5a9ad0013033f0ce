use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// One entry of a situation's simultaneous-move outcome table.
///
/// When the player picks `player_action_id` and the opponent picks
/// `opponent_action_id`, play moves to `next_situation_id` after the
/// consumptions are applied. The transition only exists in states that
/// meet every requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub player_action_id: ActionId,
    pub opponent_action_id: ActionId,
    pub next_situation_id: SituationId,
    #[serde(default)]
    pub resource_consumptions: Vec<Resource>,
    #[serde(default)]
    pub resource_requirements: Vec<Resource>,
}

/// A non-terminal decision point where both sides act simultaneously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Situation {
    pub situation_id: SituationId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub player_actions: Vec<Action>,
    pub opponent_actions: Vec<Action>,
    pub transitions: Vec<Transition>,
}

