use super::*;

/// Dense n×n matrix of pairwise distances stored row-major in one buffer.
///
/// Entry (u, v) is the weight of the edge between city u and city v. The
/// spanning tree builder reads a weight of zero as "no edge", so instances
/// handed to the heuristic must have strictly positive off-diagonal entries.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DistanceMatrix {
    number_of_nodes: NumNodes,
    weights: Vec<Weight>,
}

impl DistanceMatrix {
    /// Creates a matrix of `n` cities with every distance set to zero
    pub fn new(n: NumNodes) -> Self {
        Self {
            number_of_nodes: n,
            weights: vec![0; (n as usize) * (n as usize)],
        }
    }

    /// Builds a matrix from its rows.
    /// ** Panics if the rows do not form a square **
    ///
    /// # Example
    /// ```
    /// use salesman::graph::DistanceMatrix;
    /// let matrix = DistanceMatrix::from_rows(vec![vec![0, 3], vec![3, 0]]);
    /// assert_eq!(matrix.weight(0, 1), 3);
    /// ```
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Self {
        let n = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == n),
            "distance matrix must be square"
        );

        Self {
            number_of_nodes: n as NumNodes,
            weights: rows.into_iter().flatten().collect(),
        }
    }

    #[inline(always)]
    fn index_of(&self, u: Node, v: Node) -> usize {
        debug_assert!(u < self.number_of_nodes && v < self.number_of_nodes);
        (u as usize) * (self.number_of_nodes as usize) + v as usize
    }

    /// Returns the distance from `u` to `v`
    #[inline(always)]
    pub fn weight(&self, u: Node, v: Node) -> Weight {
        self.weights[self.index_of(u, v)]
    }

    /// Sets the distance from `u` to `v` (and only in this direction)
    pub fn set_weight(&mut self, u: Node, v: Node, weight: Weight) {
        let idx = self.index_of(u, v);
        self.weights[idx] = weight;
    }

    /// Sets the distance between `u` and `v` in both directions
    pub fn set_symmetric_weight(&mut self, u: Node, v: Node, weight: Weight) {
        self.set_weight(u, v, weight);
        self.set_weight(v, u, weight);
    }

    /// Returns all distances starting in `u`
    pub fn row(&self, u: Node) -> &[Weight] {
        let begin = self.index_of(u, 0);
        &self.weights[begin..begin + self.len()]
    }

    /// Mutable access to the row-major buffer; used by the readers to fill the matrix
    pub(crate) fn weights_mut(&mut self) -> &mut [Weight] {
        &mut self.weights
    }

    /// Returns true iff entry (u, v) equals entry (v, u) for all pairs
    pub fn is_symmetric(&self) -> bool {
        self.vertices()
            .all(|u| (u + 1..self.number_of_nodes).all(|v| self.weight(u, v) == self.weight(v, u)))
    }

    /// Returns true if some pair of distinct cities has distance zero, i.e. the spanning
    /// tree builder would consider them unconnected
    pub fn has_zero_off_diagonal(&self) -> bool {
        self.vertices()
            .any(|u| self.vertices().any(|v| u != v && self.weight(u, v) == 0))
    }

    /// Sums the distances between consecutive entries of `cities`. The sequence is not
    /// closed implicitly; pass the start city again at the end to include the return.
    pub fn path_cost(&self, cities: &[Node]) -> Cost {
        cities
            .windows(2)
            .map(|w| self.weight(w[0], w[1]) as Cost)
            .sum()
    }

    /// Sums the distances between consecutive entries of `cities` including the edge
    /// from the last entry back to the first one.
    pub fn cycle_cost(&self, cities: &[Node]) -> Cost {
        match (cities.first(), cities.last()) {
            (Some(&first), Some(&last)) => {
                self.path_cost(cities) + self.weight(last, first) as Cost
            }
            _ => 0,
        }
    }
}

impl GraphNodeOrder for DistanceMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn example() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ])
    }

    #[test]
    fn row_major_layout() {
        let matrix = example();
        assert_eq!(matrix.number_of_nodes(), 4);
        assert_eq!(matrix.row(1), &[10, 0, 35, 25]);
        assert_eq!(matrix.weight(2, 3), 30);
        assert_eq!(matrix.weight(3, 2), 30);
    }

    #[test]
    fn symmetry() {
        let mut matrix = example();
        assert!(matrix.is_symmetric());
        matrix.set_weight(0, 3, 21);
        assert!(!matrix.is_symmetric());
        matrix.set_symmetric_weight(0, 3, 21);
        assert!(matrix.is_symmetric());
    }

    #[test]
    fn zero_off_diagonal() {
        let mut matrix = example();
        assert!(!matrix.has_zero_off_diagonal());
        matrix.set_symmetric_weight(1, 2, 0);
        assert!(matrix.has_zero_off_diagonal());
        assert!(!DistanceMatrix::new(1).has_zero_off_diagonal());
    }

    #[test]
    fn costs() {
        let matrix = example();
        assert_eq!(matrix.path_cost(&[0, 1, 3, 2, 0]), 80);
        assert_eq!(matrix.cycle_cost(&[0, 1, 3, 2]), 80);
        assert_eq!(matrix.path_cost(&[2]), 0);
        assert_eq!(matrix.cycle_cost(&[]), 0);
    }

    #[test]
    #[should_panic]
    fn non_square() {
        DistanceMatrix::from_rows(vec![vec![0, 1], vec![1]]);
    }
}
