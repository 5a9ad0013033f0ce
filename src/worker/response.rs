use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Messages emitted by a solver worker.
///
/// A CFR run emits `progress` once per batch in increasing iteration
/// order, then a single `complete`. An LP run emits only `complete`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SolverResponse {
    Progress {
        iteration: usize,
        total_iterations: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        exploitability: Option<Utility>,
    },
    Complete {
        strategies: Strategies,
    },
    Strategy {
        node_id: NodeId,
        data: Option<StrategyData>,
    },
    AllStrategies {
        strategies: Strategies,
    },
    Error {
        message: String,
    },
}

impl From<Progress> for SolverResponse {
    fn from(progress: Progress) -> Self {
        Self::Progress {
            iteration: progress.iteration,
            total_iterations: progress.total_iterations,
            exploitability: Some(progress.exploitability),
        }
    }
}

impl From<anyhow::Error> for SolverResponse {
    fn from(e: anyhow::Error) -> Self {
        Self::Error {
            message: e.to_string(),
        }
    }
}

/// Messages emitted by a sensitivity worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SensitivityResponse {
    Progress { current: usize, total: usize },
    Result(SensitivityResult),
    Complete,
    Error { message: String },
}

impl From<anyhow::Error> for SensitivityResponse {
    fn from(e: anyhow::Error) -> Self {
        Self::Error {
            message: e.to_string(),
        }
    }
}
