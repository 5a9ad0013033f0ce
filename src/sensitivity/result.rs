use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Root strategies of one sweep sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityResult {
    pub parameter_value: Amount,
    pub player_strategies: Policy,
    pub opponent_strategies: Policy,
}

#[rustfmt::skip]
impl std::fmt::Display for SensitivityResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>8} │", self.parameter_value)?;
        for ap in self.player_strategies.iter() {
            write!(f, " {:>4}:{:.3}", ap.action_id, ap.probability)?;
        }
        write!(f, " │")?;
        for ap in self.opponent_strategies.iter() {
            write!(f, " {:>4}:{:.3}", ap.action_id, ap.probability)?;
        }
        Ok(())
    }
}
