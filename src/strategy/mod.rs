//! Mixed strategies as reported by the solvers.

mod data;
mod density;
mod policy;
mod side;
mod solver;

pub use data::*;
pub use density::*;
pub use policy::*;
pub use side::*;
pub use solver::*;
