use crate::*;

/// Marker trait for types that form the support of a probability distribution.
pub trait Support: Clone {}

impl Support for ActionId {}

/// generalization of any probability distribution over
/// arbitrary Support.
pub trait Density {
    type Support: Support;

    fn density(&self, x: &Self::Support) -> Probability;
    fn support(&self) -> impl Iterator<Item = Self::Support>;
}
