use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Snapshot emitted after each training batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub iteration: usize,
    pub total_iterations: usize,
    pub exploitability: Utility,
}

impl Progress {
    pub fn fraction(&self) -> f64 {
        self.iteration as f64 / self.total_iterations.max(1) as f64
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<20}{:<20}{:<20}",
            format!("epoch {}/{}", self.iteration, self.total_iterations),
            format!("done {:.0}%", self.fraction() * 100.),
            format!("ε {:.4}", self.exploitability),
        )
    }
}
