//! Exact algorithms, i.e. solvers that return a provably minimum tour.

pub mod exhaustive;
pub mod permutation;

pub use exhaustive::*;
pub use permutation::{Direction, PermutationState, number_of_permutations};
