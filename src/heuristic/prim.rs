use crate::{graph::*, utils::marker::Marker};
use log::{debug, warn};

const NOT_IN_TREE: NumNodes = NumNodes::MAX;

/// Cheapest known connection of a node outside the tree: (weight, rank of tree endpoint, tree endpoint)
type Connection = (Weight, NumNodes, Node);

/// # Greedy minimum spanning tree (Prim)
///
/// Grows a tree from node 0 by repeatedly attaching the outside node with the cheapest edge
/// into the tree. A weight of zero means "no edge", so true distances must be positive.
///
/// Ties are broken as if all candidate edges were scanned tree node by tree node (in the order
/// the nodes joined the tree), and per tree node by increasing index of the outside node, with
/// the first cheapest edge winning. The result is therefore deterministic.
///
/// If the instance is disconnected the construction stops once no edge leaves the tree; the
/// result is then a tree spanning only the component of node 0 and all other nodes stay isolated.
pub fn minimum_spanning_tree(matrix: &DistanceMatrix) -> SpanningTree {
    let n = matrix.number_of_nodes();
    let mut tree = SpanningTree::new(n);
    if n == 0 {
        return tree;
    }

    let mut rank: Marker<NumNodes> = Marker::new(n, NOT_IN_TREE);
    let mut cheapest: Vec<Option<Connection>> = vec![None; n as usize];

    let mut attach = |u: Node, r: NumNodes, cheapest: &mut Vec<Option<Connection>>| {
        rank.mark_with(u, r);
        cheapest[u as usize] = None;

        for (v, &w) in matrix.row(u).iter().enumerate() {
            let v = v as Node;
            if w == 0 || rank.is_marked(v) {
                continue;
            }

            // equal weights keep the older tree node, which has the smaller rank
            if cheapest[v as usize].is_none_or(|(best, _, _)| w < best) {
                cheapest[v as usize] = Some((w, r, u));
            }
        }
    };

    attach(0, 0, &mut cheapest);

    for r in 1..n {
        let next = cheapest
            .iter()
            .enumerate()
            .filter_map(|(v, c)| c.map(|(w, r_u, u)| (w, r_u, v as Node, u)))
            .min();

        let Some((_, _, v, u)) = next else {
            warn!(
                "Instance is disconnected: spanning tree reaches only {r} of {n} nodes \
                 (zero weights are treated as missing edges)"
            );
            break;
        };

        tree.add_edge(u, v);
        attach(v, r, &mut cheapest);
    }

    debug!(
        "Spanning tree with {} edges and weight {}",
        tree.number_of_edges(),
        tree.total_weight(matrix)
    );

    tree
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{errors::InvariantCheck, testing::*};
    use itertools::Itertools;
    use rand::SeedableRng;

    /// Literal scan over tree nodes in insertion order and candidates by index
    fn scan_order_prim(matrix: &DistanceMatrix) -> SpanningTree {
        let n = matrix.number_of_nodes();
        let mut tree = SpanningTree::new(n);
        let mut in_tree = vec![0];

        for _ in 1..n {
            let mut best: Option<(Weight, Node, Node)> = None;
            for &u in &in_tree {
                for v in 0..n {
                    let w = matrix.weight(u, v);
                    if w == 0 || in_tree.contains(&v) {
                        continue;
                    }
                    if best.is_none_or(|(bw, _, _)| w < bw) {
                        best = Some((w, u, v));
                    }
                }
            }

            let Some((_, u, v)) = best else { break };
            tree.add_edge(u, v);
            in_tree.push(v);
        }

        tree
    }

    #[test]
    fn four_cities() {
        let matrix = four_city_example();
        let tree = minimum_spanning_tree(&matrix);
        assert!(tree.is_correct().is_ok());
        assert_eq!(tree.edges(), &[Edge(0, 1), Edge(0, 2), Edge(0, 3)]);
        assert_eq!(tree.total_weight(&matrix), 45);
    }

    #[test]
    fn star() {
        let matrix = star_instance(6);
        let tree = minimum_spanning_tree(&matrix);
        assert!(tree.is_correct().is_ok());
        assert_eq!(tree.number_of_edges(), 5);
        assert!((1..6).all(|v| tree.has_edge(0, v)));
        assert_eq!(tree.neighbors_of(0).collect_vec(), vec![1, 2, 3, 4, 5]);
        assert!((1..6).all(|v| tree.degree_of(v) == 1));
    }

    #[test]
    fn path() {
        // cheap path 0 - 2 - 1 - 3, expensive everything else
        let mut matrix = DistanceMatrix::new(4);
        for u in 0..4 {
            for v in u + 1..4 {
                matrix.set_symmetric_weight(u, v, 100);
            }
        }
        matrix.set_symmetric_weight(0, 2, 1);
        matrix.set_symmetric_weight(2, 1, 2);
        matrix.set_symmetric_weight(1, 3, 3);

        let tree = minimum_spanning_tree(&matrix);
        assert_eq!(tree.edges(), &[Edge(0, 2), Edge(2, 1), Edge(1, 3)]);
        assert_eq!(tree.total_weight(&matrix), 6);
    }

    #[test]
    fn ties_follow_scan_order() {
        // all weights equal: every node attaches to 0 in index order
        let mut matrix = DistanceMatrix::new(5);
        for u in 0..5 {
            for v in u + 1..5 {
                matrix.set_symmetric_weight(u, v, 4);
            }
        }
        let tree = minimum_spanning_tree(&matrix);
        assert_eq!(tree.edges(), &[Edge(0, 1), Edge(0, 2), Edge(0, 3), Edge(0, 4)]);

        // 1 joins first; afterwards 0-3 and 1-2 cost the same, the edge at the older node wins
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0, 1, 9, 5],
            vec![1, 0, 5, 9],
            vec![9, 5, 0, 9],
            vec![5, 9, 9, 0],
        ]);
        let tree = minimum_spanning_tree(&matrix);
        assert_eq!(tree.edges(), &[Edge(0, 1), Edge(0, 3), Edge(1, 2)]);
    }

    #[test]
    fn disconnected() {
        let mut matrix = DistanceMatrix::new(5);
        matrix.set_symmetric_weight(0, 1, 3);
        matrix.set_symmetric_weight(1, 2, 4);
        matrix.set_symmetric_weight(3, 4, 1);

        let tree = minimum_spanning_tree(&matrix);
        assert_eq!(tree.edges(), &[Edge(0, 1), Edge(1, 2)]);
        assert!(!tree.is_connected());
        assert!(!tree.has_edge(3, 4));
    }

    #[test]
    fn trivial() {
        assert_eq!(minimum_spanning_tree(&DistanceMatrix::new(0)).number_of_edges(), 0);
        let tree = minimum_spanning_tree(&DistanceMatrix::new(1));
        assert_eq!(tree.number_of_edges(), 0);
        assert!(tree.is_correct().is_ok());
    }

    #[test]
    fn matches_scan_order_reference() {
        let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(0xbeef);
        for n in 1..25 {
            // tiny weight range to provoke many ties
            for max_weight in [3, 1000] {
                for matrix in random_symmetric_matrices(&mut rng, n, max_weight).take(5) {
                    let tree = minimum_spanning_tree(&matrix);
                    assert!(tree.is_correct().is_ok());
                    assert_eq!(tree, scan_order_prim(&matrix), "n={n} {matrix:?}");
                }
            }
        }
    }
}
