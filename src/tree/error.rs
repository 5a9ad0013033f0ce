use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Machine-readable reason a scenario could not be expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildErrorCode {
    CycleDetected,
    SituationNotFound,
}

impl std::fmt::Display for BuildErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CycleDetected => write!(f, "CYCLE_DETECTED"),
            Self::SituationNotFound => write!(f, "SITUATION_NOT_FOUND"),
        }
    }
}

/// Tree construction failure with enough context to locate the problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildError {
    pub code: BuildErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situation_id: Option<SituationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_hash: Option<String>,
}

impl BuildError {
    /// A situation was re-entered with the same state while still expanding.
    pub fn cycle(situation: SituationId, state: &DynamicState) -> Self {
        Self {
            code: BuildErrorCode::CycleDetected,
            message: format!(
                "re-enters situation {} with unchanged state [{}]",
                situation, state
            ),
            situation_id: Some(situation),
            state_hash: Some(state.state_hash()),
        }
    }
    /// A transition points at an id that is neither a situation nor a terminal.
    pub fn missing(situation: SituationId) -> Self {
        Self {
            code: BuildErrorCode::SituationNotFound,
            message: format!("situation {} does not exist", situation),
            situation_id: Some(situation),
            state_hash: None,
        }
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for BuildError {}

/// Wire form of a build attempt: `{success: true, gameTree}` or
/// `{success: false, error}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameTreeBuildResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_tree: Option<GameTree>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<BuildError>,
}

impl From<Result<GameTree, BuildError>> for GameTreeBuildResult {
    fn from(result: Result<GameTree, BuildError>) -> Self {
        match result {
            Ok(tree) => Self {
                success: true,
                game_tree: Some(tree),
                error: None,
            },
            Err(error) => Self {
                success: false,
                game_tree: None,
                error: Some(error),
            },
        }
    }
}

impl GameTreeBuildResult {
    pub fn into_result(self) -> anyhow::Result<GameTree> {
        match (self.success, self.game_tree, self.error) {
            (true, Some(tree), _) => Ok(tree),
            (_, _, Some(error)) => Err(error.into()),
            _ => Err(anyhow::anyhow!("build result carries neither tree nor error")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        let json = serde_json::to_value(BuildError::missing(9)).unwrap();
        assert_eq!(json["code"], "SITUATION_NOT_FOUND");
        assert_eq!(json["situationId"], 9);
        assert!(json.get("stateHash").is_none());
        let state = DynamicState::from(vec![Resource::from((ResourceType::PlayerHealth, 5))]);
        let json = serde_json::to_value(BuildError::cycle(2, &state)).unwrap();
        assert_eq!(json["code"], "CYCLE_DETECTED");
        assert_eq!(json["stateHash"], "playerHealth:5");
    }

    #[test]
    fn envelope() {
        let failure = GameTreeBuildResult::from(Err(BuildError::missing(1)));
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "SITUATION_NOT_FOUND");
        assert!(json.get("gameTree").is_none());
        let success = GameTreeBuildResult::from(TreeBuilder::from(&rock_paper_scissors()).build());
        assert!(success.success);
        assert!(success.into_result().is_ok());
        assert!(failure.into_result().is_err());
    }
}
