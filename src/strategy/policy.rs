use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Probability assigned to one action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionProbability {
    pub action_id: ActionId,
    pub probability: Probability,
}

/// A distribution over one side's actions at one node, in action order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Policy(Vec<ActionProbability>);

impl Policy {
    /// Equal weight on every action.
    pub fn uniform(actions: &[ActionId]) -> Self {
        let p = 1. / actions.len().max(1) as Probability;
        actions.iter().map(|&a| (a, p)).collect()
    }
    /// Normalize non-negative weights. Falls back to uniform when the
    /// weights carry no mass.
    pub fn normalized(actions: &[ActionId], weights: &[Probability]) -> Self {
        debug_assert!(actions.len() == weights.len());
        let denom = weights.iter().map(|w| w.max(0.)).sum::<Probability>();
        if denom <= POLICY_MIN || !denom.is_finite() {
            Self::uniform(actions)
        } else {
            actions
                .iter()
                .zip(weights.iter())
                .map(|(&a, &w)| (a, w.max(0.) / denom))
                .collect()
        }
    }
    pub fn total(&self) -> Probability {
        self.0.iter().map(|ap| ap.probability).sum()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &ActionProbability> {
        self.0.iter()
    }
}

impl FromIterator<(ActionId, Probability)> for Policy {
    fn from_iter<I: IntoIterator<Item = (ActionId, Probability)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(action_id, probability)| ActionProbability {
                    action_id,
                    probability,
                })
                .collect(),
        )
    }
}

impl Density for Policy {
    type Support = ActionId;
    fn density(&self, action: &Self::Support) -> Probability {
        self.0
            .iter()
            .find(|ap| ap.action_id == *action)
            .map(|ap| ap.probability)
            .unwrap_or(0.)
    }
    fn support(&self) -> impl Iterator<Item = Self::Support> {
        self.0.iter().map(|ap| ap.action_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Probability, b: Probability) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn unitarity() {
        let p = Policy::normalized(&[1, 2, 3], &[10., 20., 30.]);
        assert!(close(p.total(), 1.));
        assert!(close(p.density(&3), 0.5));
    }

    #[test]
    fn clamping() {
        let p = Policy::normalized(&[1, 2], &[-5., 0.]);
        assert!(close(p.density(&1), 0.5));
        assert!(close(p.density(&2), 0.5));
    }

    #[test]
    fn negatives() {
        let p = Policy::normalized(&[1, 2, 3], &[-5., 1., 3.]);
        assert!(close(p.density(&1), 0.));
        assert!(close(p.density(&3), 0.75));
    }

    #[test]
    fn unsupported() {
        let p = Policy::uniform(&[4, 5]);
        assert_eq!(p.density(&6), 0.);
        assert_eq!(p.support().count(), 2);
    }

    #[test]
    fn empty() {
        let p = Policy::uniform(&[]);
        assert!(p.is_empty());
        assert_eq!(p.total(), 0.);
    }
}
