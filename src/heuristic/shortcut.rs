use crate::{graph::*, tour::Tour, utils::marker::VisitedMarker};

/// Compresses a walk into a tour by keeping only the first visit of every city. The last entry
/// of the walk is always kept, which closes the tour if the walk returns to its start (as an
/// Euler walk of a tree does). Should the kept sequence not end at its first city, the start is
/// appended and the closing edge is charged. The cost is the sum of distances between consecutive
/// kept cities.
///
/// On metric instances, shortcutting the Euler walk of a minimum spanning tree yields a tour of
/// at most twice the tree's weight and hence at most twice the optimum.
pub fn shortcut_walk(matrix: &DistanceMatrix, walk: &[Node]) -> Tour {
    match walk {
        [] => return Tour::new(Vec::new(), 0),
        [u] => return Tour::new(vec![*u, *u], 0),
        _ => {}
    }

    let mut visited = VisitedMarker::new(matrix.number_of_nodes(), false);
    let mut cities = Vec::with_capacity(matrix.len() + 1);

    for (i, &u) in walk.iter().enumerate() {
        let first_visit = visited.visit(u);
        if first_visit || i + 1 == walk.len() {
            cities.push(u);
        }
    }

    let mut cost = matrix.path_cost(&cities);

    let (first, last) = (cities[0], cities[cities.len() - 1]);
    if cities.len() == 1 || first != last {
        cost += matrix.weight(last, first) as Cost;
        cities.push(first);
    }

    Tour::new(cities, cost)
}
