use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Which algorithm a [`SolverWorker`](super::SolverWorker) runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SolverKind {
    #[default]
    Cfr,
    Lp,
}

impl std::fmt::Display for SolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cfr => write!(f, "cfr"),
            Self::Lp => write!(f, "lp"),
        }
    }
}

/// Requests accepted by a solver worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SolverCommand {
    /// Solve a tree. `iterations` only applies to CFR and defaults to
    /// [`CFR_ITERATIONS`].
    Start {
        game_tree: GameTree,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        iterations: Option<usize>,
    },
    Pause,
    Resume,
    Cancel,
    GetStrategy {
        node_id: NodeId,
    },
    GetAllStrategies,
}

/// Requests accepted by a sensitivity worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SensitivityCommand {
    Start {
        scenario: Scenario,
        source_node: Node,
        parameter_config: SweepConfig,
    },
    Cancel,
}

impl std::fmt::Display for SolverCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start { game_tree, iterations } => match iterations {
                Some(n) => write!(f, "start {} nodes x {}", game_tree.len(), n),
                None => write!(f, "start {} nodes", game_tree.len()),
            },
            Self::Pause => write!(f, "pause"),
            Self::Resume => write!(f, "resume"),
            Self::Cancel => write!(f, "cancel"),
            Self::GetStrategy { node_id } => write!(f, "get strategy {}", node_id),
            Self::GetAllStrategies => write!(f, "get all strategies"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing() {
        let json = r#"{"type":"getStrategy","nodeId":"1@playerHealth:100"}"#;
        match serde_json::from_str::<SolverCommand>(json).unwrap() {
            SolverCommand::GetStrategy { node_id } => assert_eq!(node_id.as_str(), "1@playerHealth:100"),
            other => panic!("unexpected {}", other),
        }
        let json = r#"{"type":"pause"}"#;
        assert!(matches!(serde_json::from_str::<SolverCommand>(json).unwrap(), SolverCommand::Pause));
    }

    #[test]
    fn start() {
        let tree = TreeBuilder::from(&rock_paper_scissors()).build().unwrap();
        let command = SolverCommand::Start {
            game_tree: tree,
            iterations: None,
        };
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["type"], "start");
        assert!(json.get("iterations").is_none());
        assert!(json["gameTree"]["nodes"].is_object());
        match serde_json::from_value::<SolverCommand>(json).unwrap() {
            SolverCommand::Start { game_tree, iterations } => {
                assert_eq!(game_tree.len(), 4);
                assert_eq!(iterations, None);
            }
            other => panic!("unexpected {}", other),
        }
    }
}
