//! Double-tree heuristic: minimum spanning tree, Euler walk, shortcuts.

pub mod prim;
pub mod shortcut;

pub use prim::minimum_spanning_tree;
pub use shortcut::shortcut_walk;

use crate::{errors::SolverError, graph::*, tour::Tour};
use log::info;

/// # The double-tree heuristic
///
/// 1. Builds a minimum spanning tree rooted at city 0 (see [`minimum_spanning_tree`])
/// 2. Walks the tree depth-first, recording every entry into a node (see [`TreeWalk`])
/// 3. Skips cities that were already visited (see [`shortcut_walk`])
///
/// Zero weights are read as missing edges, so all distances between distinct cities should be
/// positive. On a disconnected instance the tour covers only the component of city 0.
///
/// Returns the tour, which starts and ends in city 0
pub fn double_tree_tour(matrix: &DistanceMatrix) -> Result<Tour, SolverError> {
    if matrix.is_empty() {
        return Err(SolverError::NoCities);
    }

    let tree = minimum_spanning_tree(matrix);
    let walk = euler_walk(&tree, 0);
    let tour = shortcut_walk(matrix, &walk);

    info!(
        "Double-tree tour: tree weight {}, walk length {}, tour cost {}",
        tree.total_weight(matrix),
        walk.len(),
        tour.cost()
    );

    Ok(tour)
}
