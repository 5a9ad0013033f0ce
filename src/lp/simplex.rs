use crate::*;

/// Why a tableau could not be driven to optimality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimplexError {
    Unbounded,
    Infeasible,
    Stalled,
}

impl std::fmt::Display for SimplexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbounded => write!(f, "objective is unbounded"),
            Self::Infeasible => write!(f, "origin is infeasible"),
            Self::Stalled => write!(f, "pivot budget of {} exhausted", SIMPLEX_MAX_PIVOTS),
        }
    }
}

impl std::error::Error for SimplexError {}

/// Optimal primal and dual solutions of a [`Simplex`] program.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimum {
    pub primal: Vec<f64>,
    pub dual: Vec<f64>,
    pub objective: f64,
}

/// Dense-tableau simplex for `max cᵀx  s.t.  Ax ≤ b, x ≥ 0` with `b ≥ 0`,
/// starting from the all-slack basis. Bland's rule picks both the entering
/// and leaving variable, so the method cannot cycle.
#[derive(Debug, Clone)]
pub struct Simplex {
    m: usize,
    n: usize,
    /// `m` constraint rows then the objective row, each `n + m + 1` wide.
    tableau: Vec<Vec<f64>>,
    basis: Vec<usize>,
}

impl Simplex {
    pub fn new(a: &[Vec<f64>], b: &[f64], c: &[f64]) -> Result<Self, SimplexError> {
        let m = b.len();
        let n = c.len();
        debug_assert!(a.len() == m);
        debug_assert!(a.iter().all(|row| row.len() == n));
        if b.iter().any(|&bi| bi < 0.) {
            return Err(SimplexError::Infeasible);
        }
        let width = n + m + 1;
        let mut tableau = Vec::with_capacity(m + 1);
        for (i, (row, &bi)) in a.iter().zip(b.iter()).enumerate() {
            let mut line = vec![0.; width];
            line[..n].copy_from_slice(row);
            line[n + i] = 1.;
            line[width - 1] = bi;
            tableau.push(line);
        }
        let mut objective = vec![0.; width];
        for (j, &cj) in c.iter().enumerate() {
            objective[j] = -cj;
        }
        tableau.push(objective);
        Ok(Self {
            m,
            n,
            tableau,
            basis: (n..n + m).collect(),
        })
    }

    pub fn solve(mut self) -> Result<Optimum, SimplexError> {
        for _ in 0..SIMPLEX_MAX_PIVOTS {
            let Some(col) = self.entering() else {
                return Ok(self.optimum());
            };
            let Some(row) = self.leaving(col) else {
                return Err(SimplexError::Unbounded);
            };
            self.pivot(row, col);
        }
        Err(SimplexError::Stalled)
    }

    fn width(&self) -> usize {
        self.n + self.m + 1
    }

    /// Lowest-index column with a negative reduced cost.
    fn entering(&self) -> Option<usize> {
        let objective = &self.tableau[self.m];
        (0..self.n + self.m).find(|&j| objective[j] < -SIMPLEX_EPSILON)
    }

    /// Minimum-ratio row, ties broken by lowest basic variable index.
    fn leaving(&self, col: usize) -> Option<usize> {
        let rhs = self.width() - 1;
        let mut best: Option<(usize, f64)> = None;
        for i in 0..self.m {
            let a = self.tableau[i][col];
            if a <= SIMPLEX_EPSILON {
                continue;
            }
            let ratio = self.tableau[i][rhs] / a;
            best = match best {
                None => Some((i, ratio)),
                Some((_, r)) if ratio < r - SIMPLEX_EPSILON => Some((i, ratio)),
                Some((k, r)) if ratio < r + SIMPLEX_EPSILON && self.basis[i] < self.basis[k] => {
                    Some((i, ratio))
                }
                keep => keep,
            };
        }
        best.map(|(i, _)| i)
    }

    fn pivot(&mut self, row: usize, col: usize) {
        let scale = self.tableau[row][col];
        for v in self.tableau[row].iter_mut() {
            *v /= scale;
        }
        let pivot = self.tableau[row].clone();
        for (i, line) in self.tableau.iter_mut().enumerate() {
            if i == row {
                continue;
            }
            let factor = line[col];
            if factor.abs() > 0. {
                for (v, p) in line.iter_mut().zip(pivot.iter()) {
                    *v -= factor * p;
                }
            }
        }
        self.basis[row] = col;
    }

    fn optimum(&self) -> Optimum {
        let rhs = self.width() - 1;
        let mut primal = vec![0.; self.n];
        for (i, &var) in self.basis.iter().enumerate() {
            if var < self.n {
                primal[var] = self.tableau[i][rhs];
            }
        }
        let objective_row = &self.tableau[self.m];
        let dual = (0..self.m).map(|i| objective_row[self.n + i]).collect();
        Optimum {
            primal,
            dual,
            objective: objective_row[rhs],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn textbook() {
        // max 3x + 5y  s.t.  x ≤ 4, 2y ≤ 12, 3x + 2y ≤ 18
        let a = vec![vec![1., 0.], vec![0., 2.], vec![3., 2.]];
        let optimum = Simplex::new(&a, &[4., 12., 18.], &[3., 5.])
            .unwrap()
            .solve()
            .unwrap();
        assert!(close(optimum.objective, 36.));
        assert!(close(optimum.primal[0], 2.));
        assert!(close(optimum.primal[1], 6.));
        assert!(close(optimum.dual[0], 0.));
        assert!(close(optimum.dual[1], 1.5));
        assert!(close(optimum.dual[2], 1.));
    }

    #[test]
    fn duality() {
        let a = vec![vec![2., 1., 1.], vec![1., 3., 2.], vec![2., 1., 2.]];
        let b = [4., 5., 6.];
        let c = [3., 2., 4.];
        let optimum = Simplex::new(&a, &b, &c).unwrap().solve().unwrap();
        let dual_objective = optimum.dual.iter().zip(b.iter()).map(|(y, b)| y * b).sum::<f64>();
        assert!(close(optimum.objective, dual_objective));
        assert!(optimum.dual.iter().all(|&y| y >= -1e-12));
    }

    #[test]
    fn unbounded() {
        let a = vec![vec![1., -1.]];
        let result = Simplex::new(&a, &[1.], &[1., 1.]).unwrap().solve();
        assert_eq!(result, Err(SimplexError::Unbounded));
    }

    #[test]
    fn infeasible() {
        let a = vec![vec![1.]];
        assert!(matches!(Simplex::new(&a, &[-1.], &[1.]), Err(SimplexError::Infeasible)));
    }
}
