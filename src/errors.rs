use std::error::Error;

use thiserror::Error;

use crate::graph::{Node, NumNodes};

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> Result<(), E>;
}

/// Reasons why a solver refuses an instance or cannot finish its work.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("instance has no cities")]
    NoCities,

    #[error("{number_of_nodes} cities are too many for exhaustive search (at most {max} supported)")]
    TooManyCities {
        number_of_nodes: NumNodes,
        max: NumNodes,
    },

    #[error(
        "permutation enumeration stalled after {evaluated} of {expected} permutations: no mobile element"
    )]
    EnumerationStalled { evaluated: u64, expected: u64 },

    #[error("search stopped after {evaluated} of {expected} permutations without any tour")]
    Unfinished { evaluated: u64, expected: u64 },
}

/// Violations of the closed-tour invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TourError {
    #[error("tour is empty")]
    Empty,

    #[error("tour is not closed: starts at {first} but ends at {last}")]
    NotClosed { first: Node, last: Node },

    #[error("city {0} is out of range")]
    OutOfRange(Node),

    #[error("city {0} is visited more than once")]
    Repeated(Node),

    #[error("tour visits {visited} cities, but {expected} were expected")]
    WrongLength { visited: usize, expected: usize },

    #[error("stored cost {stored} differs from recomputed cost {computed}")]
    CostMismatch { stored: u64, computed: u64 },
}

/// Violations of the spanning tree invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("adjacency of {0} and {1} is not symmetric")]
    Asymmetric(Node, Node),

    #[error("tree has {found} edges, but {expected} were expected")]
    WrongEdgeCount { found: usize, expected: usize },

    #[error("tree does not connect all nodes")]
    Disconnected,
}
