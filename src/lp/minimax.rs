use crate::*;

/// Maximin mixed strategy of the row chooser in a zero-sum matrix game.
#[derive(Debug, Clone, PartialEq)]
pub struct Minimax {
    pub strategy: Vec<Probability>,
    pub value: Utility,
}

impl Minimax {
    /// Solve for the row chooser.
    ///
    /// Payoffs are shifted so every entry is at least one, which makes
    /// the game value positive. The column chooser's program
    /// `max Σy  s.t.  Ay ≤ 1` then has optimum `1/v'`, and its dual
    /// scaled by `v'` is the row strategy. A one-row table needs no
    /// program; a solver failure falls back to uniform play.
    pub fn solve(table: &Table<Utility>) -> Self {
        let (m, n) = (table.height(), table.width());
        if m == 0 || n == 0 {
            log::warn!("degenerate {}x{} payoff table", m, n);
            return Self {
                strategy: vec![1. / m.max(1) as Probability; m],
                value: 0.,
            };
        }
        if m == 1 {
            return Self {
                strategy: vec![1.],
                value: table.min(),
            };
        }
        match Self::program(table) {
            Ok(solution) => solution,
            Err(e) => {
                log::warn!("simplex failed on {}x{} table: {}", m, n, e);
                Self::uniform(table)
            }
        }
    }

    fn program(table: &Table<Utility>) -> Result<Self, SimplexError> {
        let (m, n) = (table.height(), table.width());
        let shift = 1. - table.min();
        let a = (0..m)
            .map(|r| table.row(r).iter().map(|u| u + shift).collect())
            .collect::<Vec<Vec<f64>>>();
        let optimum = Simplex::new(&a, &vec![1.; m], &vec![1.; n])?.solve()?;
        if optimum.objective <= SIMPLEX_EPSILON {
            return Err(SimplexError::Unbounded);
        }
        let scaled = 1. / optimum.objective;
        let weights = optimum
            .dual
            .iter()
            .map(|y| (y * scaled).max(0.))
            .collect::<Vec<_>>();
        let total = weights.iter().sum::<Probability>();
        Ok(Self {
            strategy: weights.iter().map(|w| w / total).collect(),
            value: scaled - shift,
        })
    }

    /// Uniform rows, valued against the column chooser's best reply.
    fn uniform(table: &Table<Utility>) -> Self {
        let m = table.height();
        let strategy = vec![1. / m as Probability; m];
        let value = (0..table.width())
            .map(|c| (0..m).map(|r| strategy[r] * table.get(r, c)).sum::<Utility>())
            .fold(Utility::INFINITY, Utility::min);
        Self { strategy, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[Utility]]) -> Table<Utility> {
        let m = rows.len() as ActionId;
        let n = rows.first().map_or(0, |r| r.len()) as ActionId;
        let mut t = Table::filled((0..m).collect(), (0..n).collect(), 0.);
        for (r, row) in rows.iter().enumerate() {
            for (c, &u) in row.iter().enumerate() {
                t.set(r, c, u);
            }
        }
        t
    }

    #[test]
    fn rock_paper_scissors() {
        let t = table(&[&[0., 1., -1.], &[-1., 0., 1.], &[1., -1., 0.]]);
        let solution = Minimax::solve(&t);
        for p in solution.strategy.iter() {
            assert!((p - 1. / 3.).abs() < 1e-9);
        }
        assert!(solution.value.abs() < 1e-9);
    }

    #[test]
    fn dominance() {
        let t = table(&[&[3., 4.], &[1., 2.]]);
        let solution = Minimax::solve(&t);
        assert!((solution.strategy[0] - 1.).abs() < 1e-9);
        assert!((solution.value - 3.).abs() < 1e-9);
    }

    #[test]
    fn matching_pennies() {
        let t = table(&[&[2., -1.], &[-1., 1.]]);
        let solution = Minimax::solve(&t);
        assert!((solution.strategy[0] - 0.4).abs() < 1e-9);
        assert!((solution.value - 0.2).abs() < 1e-9);
        let mirrored = Minimax::solve(&t.mirror());
        assert!((mirrored.strategy[0] - 0.4).abs() < 1e-9);
        assert!((mirrored.value + 0.2).abs() < 1e-9);
    }

    #[test]
    fn single_row() {
        let solution = Minimax::solve(&table(&[&[5., -2., 7.]]));
        assert_eq!(solution.strategy, vec![1.]);
        assert_eq!(solution.value, -2.);
    }

    #[test]
    fn empty() {
        let solution = Minimax::solve(&table(&[]));
        assert!(solution.strategy.is_empty());
        assert_eq!(solution.value, 0.);
    }

    #[test]
    fn constant() {
        let solution = Minimax::solve(&table(&[&[4., 4.], &[4., 4.]]));
        assert!((solution.strategy.iter().sum::<Probability>() - 1.).abs() < 1e-9);
        assert!((solution.value - 4.).abs() < 1e-9);
    }
}
