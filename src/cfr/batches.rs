use crate::*;

/// Step-wise training: each `next` runs one batch and reports on it.
///
/// A run of `total` iterations is cut into [`CFR_BATCH_COUNT`] batches
/// (fewer when `total` is smaller). Callers decide between batches whether
/// to continue, which is where pause and cancel are observed.
pub struct Batches<'a> {
    solver: &'a mut CfrSolver,
    total: usize,
    size: usize,
    done: usize,
}

impl<'a> Batches<'a> {
    pub fn new(solver: &'a mut CfrSolver, total: usize) -> Self {
        Self {
            solver,
            total,
            size: total.div_ceil(CFR_BATCH_COUNT).max(1),
            done: 0,
        }
    }
    pub fn done(&self) -> usize {
        self.done
    }
    pub fn total(&self) -> usize {
        self.total
    }
    /// The solver as of the last completed batch.
    pub fn solver(&self) -> &CfrSolver {
        self.solver
    }
}

impl Iterator for Batches<'_> {
    type Item = Progress;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done >= self.total {
            return None;
        }
        let n = self.size.min(self.total - self.done);
        for _ in 0..n {
            self.solver.iterate();
        }
        self.done += n;
        Some(Progress {
            iteration: self.done,
            total_iterations: self.total,
            exploitability: self.solver.exploitability(),
        })
    }
}
