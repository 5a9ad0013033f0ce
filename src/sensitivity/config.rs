use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Which resource to sweep and over which evenly spaced values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepConfig {
    pub resource_type: ResourceType,
    pub min: Amount,
    pub max: Amount,
    pub step: Amount,
}

impl SweepConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.step > 0, "sweep step must be positive, got {}", self.step);
        anyhow::ensure!(
            self.min <= self.max,
            "sweep range is empty: min {} exceeds max {}",
            self.min,
            self.max
        );
        anyhow::ensure!(self.min >= 0, "resource values cannot be negative, got {}", self.min);
        Ok(())
    }
    /// Number of samples, `floor((max - min) / step) + 1`.
    pub fn len(&self) -> usize {
        match self.validate() {
            Ok(()) => ((self.max - self.min) / self.step) as usize + 1,
            Err(_) => 0,
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// `min, min + step, ...` up to and including `max` when it lands on the grid.
    pub fn values(&self) -> impl Iterator<Item = Amount> + '_ {
        (0..self.len()).map(move |i| self.min + i as Amount * self.step)
    }
}

impl std::fmt::Display for SweepConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} from {} to {} by {}",
            self.resource_type, self.min, self.max, self.step
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(min: Amount, max: Amount, step: Amount) -> SweepConfig {
        SweepConfig {
            resource_type: ResourceType::OpponentHealth,
            min,
            max,
            step,
        }
    }

    #[test]
    fn counting() {
        assert_eq!(config(0, 10, 5).len(), 3);
        assert_eq!(config(0, 10, 3).len(), 4);
        assert_eq!(config(7, 7, 1).len(), 1);
        assert_eq!(config(0, 10, 3).values().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
    }

    #[test]
    fn validation() {
        assert!(config(0, 10, 0).validate().is_err());
        assert!(config(10, 0, 1).validate().is_err());
        assert!(config(-5, 0, 1).validate().is_err());
        assert!(config(0, 10, 0).is_empty());
    }

    #[test]
    fn wire() {
        let json = serde_json::to_value(config(1, 2, 1)).unwrap();
        assert_eq!(json["resourceType"], "opponentHealth");
        assert_eq!(json["step"], 1);
    }
}
