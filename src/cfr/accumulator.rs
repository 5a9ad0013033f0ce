use crate::*;

/// Cumulative regret and strategy weight for one side at one node.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    regret: Vec<Utility>,
    weight: Vec<Probability>,
}

impl Accumulator {
    pub fn new(n: usize) -> Self {
        Self {
            regret: vec![0.; n],
            weight: vec![0.; n],
        }
    }
    pub fn len(&self) -> usize {
        self.regret.len()
    }
    pub fn is_empty(&self) -> bool {
        self.regret.is_empty()
    }
    pub fn regret(&self) -> &[Utility] {
        &self.regret
    }
    pub fn weight(&self) -> &[Probability] {
        &self.weight
    }
    /// Regret matching: positive regrets normalized, uniform when none are positive.
    pub fn iterated(&self) -> Vec<Probability> {
        Self::normalize(&self.regret)
    }
    /// Time-averaged strategy, uniform before any weight has accumulated.
    pub fn averaged(&self) -> Vec<Probability> {
        Self::normalize(&self.weight)
    }
    /// Fold in one pass: `counterfactual` is the opponent-side reach of the
    /// node, `own` the acting side's reach, `gains` the value of each action
    /// against the other side's current strategy, and `value` the node value
    /// under `policy`.
    pub fn accumulate(
        &mut self,
        counterfactual: Probability,
        own: Probability,
        gains: &[Utility],
        value: Utility,
        policy: &[Probability],
    ) {
        debug_assert!(gains.len() == self.len());
        debug_assert!(policy.len() == self.len());
        for (i, (gain, p)) in gains.iter().zip(policy.iter()).enumerate() {
            self.regret[i] += counterfactual * (gain - value);
            self.weight[i] += own * p;
        }
    }

    fn normalize(values: &[Utility]) -> Vec<Probability> {
        let n = values.len();
        let denom = values.iter().map(|v| v.max(0.)).sum::<Utility>();
        if denom > POLICY_MIN {
            values.iter().map(|v| v.max(0.) / denom).collect()
        } else {
            vec![1. / n.max(1) as Probability; n]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching() {
        let mut acc = Accumulator::new(3);
        assert_eq!(acc.iterated(), vec![1. / 3.; 3]);
        acc.accumulate(1., 1., &[3., 1., -2.], 1., &[1. / 3.; 3]);
        let p = acc.iterated();
        assert!((p[0] - 1.).abs() < 1e-12);
        assert_eq!(p[1], 0.);
        assert_eq!(p[2], 0.);
    }

    #[test]
    fn averaging() {
        let mut acc = Accumulator::new(2);
        acc.accumulate(1., 0.5, &[0., 0.], 0., &[1., 0.]);
        acc.accumulate(1., 0.5, &[0., 0.], 0., &[0., 1.]);
        acc.accumulate(1., 1.0, &[0., 0.], 0., &[0., 1.]);
        let p = acc.averaged();
        assert!((p[0] - 0.25).abs() < 1e-12);
        assert!((p[1] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn unreached() {
        let mut acc = Accumulator::new(2);
        acc.accumulate(0., 0., &[5., -5.], 0., &[0.5, 0.5]);
        assert_eq!(acc.averaged(), vec![0.5, 0.5]);
        assert_eq!(acc.iterated(), vec![0.5, 0.5]);
    }
}
