use crate::*;

/// A pairwise table over the player's actions (rows) and the opponent's
/// actions (columns), stored row-major.
///
/// Payoff matrices, outcome tables, and regret views of a node all share
/// this shape, so positions translate between them without lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    rows: Vec<ActionId>,
    cols: Vec<ActionId>,
    cells: Vec<T>,
}

impl<T: Clone> Table<T> {
    pub fn filled(rows: Vec<ActionId>, cols: Vec<ActionId>, value: T) -> Self {
        let cells = vec![value; rows.len() * cols.len()];
        Self { rows, cols, cells }
    }
    /// Swap the roles of rows and columns.
    pub fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for c in 0..self.width() {
            for r in 0..self.height() {
                cells.push(self.get(r, c).clone());
            }
        }
        Self {
            rows: self.cols.clone(),
            cols: self.rows.clone(),
            cells,
        }
    }
}

impl<T> Table<T> {
    pub fn rows(&self) -> &[ActionId] {
        &self.rows
    }
    pub fn cols(&self) -> &[ActionId] {
        &self.cols
    }
    pub fn height(&self) -> usize {
        self.rows.len()
    }
    pub fn width(&self) -> usize {
        self.cols.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn get(&self, r: usize, c: usize) -> &T {
        &self.cells[r * self.width() + c]
    }
    pub fn set(&mut self, r: usize, c: usize, value: T) {
        let w = self.width();
        self.cells[r * w + c] = value;
    }
    /// Cell position of an action pair.
    pub fn position(&self, row: ActionId, col: ActionId) -> Option<(usize, usize)> {
        let r = self.rows.iter().position(|&a| a == row)?;
        let c = self.cols.iter().position(|&a| a == col)?;
        Some((r, c))
    }
    pub fn lookup(&self, row: ActionId, col: ActionId) -> Option<&T> {
        self.position(row, col).map(|(r, c)| self.get(r, c))
    }
    pub fn row(&self, r: usize) -> &[T] {
        let w = self.width();
        &self.cells[r * w..(r + 1) * w]
    }
    pub fn map<U, F>(&self, f: F) -> Table<U>
    where
        F: FnMut(&T) -> U,
    {
        Table {
            rows: self.rows.clone(),
            cols: self.cols.clone(),
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl Table<Utility> {
    /// The same zero-sum game seen from the column chooser's side.
    pub fn mirror(&self) -> Self {
        self.transpose().map(|u| -u)
    }
    pub fn min(&self) -> Utility {
        self.cells.iter().copied().fold(Utility::INFINITY, Utility::min)
    }
    /// Expected row payoff when rows and columns are mixed independently.
    pub fn expectation(&self, rows: &[Probability], cols: &[Probability]) -> Utility {
        (0..self.height())
            .flat_map(|r| (0..self.width()).map(move |c| (r, c)))
            .map(|(r, c)| rows[r] * cols[c] * self.get(r, c))
            .sum()
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Table<Utility> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>6} │", "")?;
        for col in self.cols.iter() {
            write!(f, " {:>9}", col)?;
        }
        writeln!(f)?;
        for (r, row) in self.rows.iter().enumerate() {
            write!(f, "{:>6} │", row)?;
            for u in self.row(r) {
                write!(f, " {:>9.2}", u)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table<Utility> {
        let mut t = Table::filled(vec![1, 2], vec![7, 8, 9], 0.);
        t.set(0, 2, 5.);
        t.set(1, 0, -3.);
        t
    }

    #[test]
    fn transposition() {
        let t = table().transpose();
        assert_eq!(t.rows(), &[7, 8, 9]);
        assert_eq!(t.cols(), &[1, 2]);
        assert_eq!(*t.get(2, 0), 5.);
        assert_eq!(*t.get(0, 1), -3.);
        assert_eq!(t.transpose(), table());
    }

    #[test]
    fn mirroring() {
        let m = table().mirror();
        assert_eq!(*m.get(2, 0), -5.);
        assert_eq!(*m.get(0, 1), 3.);
        assert_eq!(m.min(), -5.);
    }

    #[test]
    fn lookup() {
        let t = table();
        assert_eq!(t.lookup(1, 9), Some(&5.));
        assert_eq!(t.lookup(3, 9), None);
        assert_eq!(t.row(1), &[-3., 0., 0.]);
    }

    #[test]
    fn expectation() {
        let t = table();
        let e = t.expectation(&[0.5, 0.5], &[0., 0., 1.]);
        assert!((e - 2.5).abs() < 1e-12);
    }
}
